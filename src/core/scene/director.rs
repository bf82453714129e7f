//=========================================================================
// Scene Director
//=========================================================================
//
// Owns the registry and the single "current scene" slot.
//
// State machine:
//   Idle (current = InvalidScene) ──load(id)──> Active(id)
//   Active(id) ──load(other)──> unload(id) → Active(other) | Idle
//   Active(id) ──unload()──> Idle
//
// Within one load the order is always: unload old → validate new →
// init new. Nothing is ever half-active.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use super::transition_queue::TransitionQueue;
use super::{InvalidScene, Scene, SceneId, SceneRegistry, SceneSwitcher, SceneTransition};
use crate::core::config::DirectorConfig;
use crate::core::error::SceneError;
use crate::core::platform_bridge::SystemEvent;

//=== DirectorState =======================================================

/// Observable dispatcher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorState {
    /// Nothing loaded; dispatch goes to [`InvalidScene`].
    Idle,

    /// The scene with this identifier is loaded.
    Active(SceneId),
}

/// Which scene `current` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Current {
    Sentinel,
    Registered(usize),
}

//=== SceneDirector =======================================================

/// Scene lifecycle controller.
///
/// Creating a director initializes an empty registry; [`finalize`] (or
/// dropping the director) unloads the current scene and discards the
/// registry. Scenes are borrowed for `'a` and stay owned by the caller.
///
/// [`finalize`]: SceneDirector::finalize
///
/// # Examples
///
/// ```rust
/// use scene_engine::prelude::*;
///
/// let mut title = SceneDescriptor::<()>::new(SceneId(1)).on_update(|| true);
/// let mut director = SceneDirector::new(());
///
/// director.register(&mut title).unwrap();
/// director.load(SceneId(1), None).unwrap();
///
/// assert_eq!(director.state(), DirectorState::Active(SceneId(1)));
/// assert!(director.update());
/// ```
pub struct SceneDirector<'a, C> {
    context: C,
    config: DirectorConfig,
    registry: Option<SceneRegistry<'a, C>>,
    current: Current,
    sentinel: InvalidScene,
    transitions: TransitionQueue,
}

impl<'a, C> SceneDirector<'a, C> {
    //--- Construction -----------------------------------------------------

    /// Initializes a director with default configuration.
    ///
    /// `context` is handed to every scene's `init`.
    pub fn new(context: C) -> Self {
        Self::with_config(context, DirectorConfig::default())
    }

    pub fn with_config(context: C, config: DirectorConfig) -> Self {
        debug!(
            "Initializing scene director (capacity {}, duplicates {:?})",
            config.initial_capacity, config.duplicate_policy
        );

        Self {
            registry: Some(SceneRegistry::new(&config)),
            context,
            config,
            current: Current::Sentinel,
            sentinel: InvalidScene,
            transitions: TransitionQueue::new(),
        }
    }

    /// Recreates an empty registry after [`SceneDirector::finalize`].
    ///
    /// Does nothing on a director that is still initialized.
    pub fn initialize(&mut self) {
        if self.registry.is_some() {
            warn!("Scene director is already initialized");
            return;
        }

        debug!("Re-initializing scene director");
        self.registry = Some(SceneRegistry::new(&self.config));
        self.current = Current::Sentinel;
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene so it can be loaded by its identifier.
    pub fn register(&mut self, scene: &'a mut dyn Scene<C>) -> Result<(), SceneError> {
        self.registry_mut()?.register(scene)
    }

    /// Registers several scenes at once. See [`SceneRegistry::register_bulk`].
    pub fn register_bulk<I>(&mut self, scenes: I) -> Result<(), SceneError>
    where
        I: IntoIterator<Item = &'a mut dyn Scene<C>>,
    {
        self.registry_mut()?.register_bulk(scenes)
    }

    //--- Lifecycle --------------------------------------------------------

    /// Switches to the scene registered under `id`.
    ///
    /// The current scene is always unloaded first, even if the switch
    /// then fails. On failure the director is left idle.
    pub fn load(&mut self, id: SceneId, payload: Option<&dyn Any>) -> Result<(), SceneError> {
        self.unload();

        let Some(registry) = self.registry.as_mut() else {
            error!("Cannot load scene {}: registry is not initialized", id);
            return Err(SceneError::RegistryUninitialized);
        };

        if registry.is_empty() {
            error!("No scene in registration. Register scenes before loading {}", id);
            return Err(SceneError::EmptyRegistry);
        }

        let Some(index) = registry.position(id) else {
            error!("Scene with identifier {} not found", id);
            self.current = Current::Sentinel;
            return Err(SceneError::SceneNotFound(id));
        };

        debug!("Loading scene {}", id);
        self.current = Current::Registered(index);

        if let Some(scene) = registry.get_mut(index) {
            scene.init(&self.context, payload);
        }

        Ok(())
    }

    /// Unloads the current scene and goes idle. Calling it while idle is a
    /// no-op.
    pub fn unload(&mut self) {
        if let DirectorState::Active(id) = self.state() {
            debug!("Unloading scene {}", id);
        }

        self.current_scene_mut().unload();
        self.current = Current::Sentinel;
    }

    /// Unloads the current scene and discards the registry.
    ///
    /// Registration and loading fail with
    /// [`SceneError::RegistryUninitialized`] until
    /// [`SceneDirector::initialize`] is called again.
    pub fn finalize(&mut self) {
        self.unload();

        let dropped = self.transitions.clear();
        if dropped > 0 {
            warn!("Discarding {} pending scene transition(s) on finalize", dropped);
        }

        if let Some(registry) = self.registry.take() {
            info!("Scene director finalized ({} scene(s) released)", registry.len());
        }
    }

    //--- Dispatch ---------------------------------------------------------

    /// Runs the current scene's update. Returns `true` if it asked for a
    /// redraw; always `false` while idle.
    pub fn update(&mut self) -> bool {
        self.current_scene_mut().update()
    }

    /// Forwards a host event to the current scene and returns its status
    /// code; always 0 while idle.
    pub fn event_handler(&mut self, event: SystemEvent, arg: u32) -> i32 {
        self.current_scene_mut().event(event, arg)
    }

    //--- Deferred Transitions ---------------------------------------------

    /// Returns a handle for queueing scene switches from inside callbacks.
    pub fn switcher(&self) -> SceneSwitcher {
        self.transitions.switcher()
    }

    /// Applies queued transitions in FIFO order.
    ///
    /// At most `max_transitions_per_frame` are applied; the rest wait for
    /// the next call. Stops at the first failing transition and returns its
    /// error. Returns how many transitions were applied.
    pub fn process_transitions(&mut self) -> Result<usize, SceneError> {
        let mut applied = 0;

        while applied < self.config.max_transitions_per_frame {
            let Some(transition) = self.transitions.pop() else {
                break;
            };
            applied += 1;

            match transition {
                SceneTransition::Load { id, payload } => {
                    let payload = payload.as_deref().map(|p| p as &dyn Any);
                    self.load(id, payload)?;
                }
                SceneTransition::Unload => self.unload(),
            }
        }

        if applied == self.config.max_transitions_per_frame && !self.transitions.is_empty() {
            warn!(
                "Transition backlog: {} transition(s) deferred to next frame",
                self.transitions.len()
            );
        }

        Ok(applied)
    }

    //--- Query API --------------------------------------------------------

    pub fn state(&self) -> DirectorState {
        match self.current_id() {
            id if id.is_invalid() => DirectorState::Idle,
            id => DirectorState::Active(id),
        }
    }

    /// Identifier of the current scene; [`SceneId::INVALID`] while idle.
    pub fn current_id(&self) -> SceneId {
        match self.current {
            Current::Registered(index) => self
                .registry
                .as_ref()
                .and_then(|registry| registry.ids().nth(index))
                .unwrap_or(SceneId::INVALID),
            Current::Sentinel => SceneId::INVALID,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.registry.is_some()
    }

    /// The registry, or `None` after finalize.
    pub fn registry(&self) -> Option<&SceneRegistry<'a, C>> {
        self.registry.as_ref()
    }

    /// Looks up a registered scene by identifier.
    pub fn lookup(&self, id: SceneId) -> Option<&(dyn Scene<C> + 'a)> {
        self.registry.as_ref().and_then(|registry| registry.lookup(id))
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    //--- Internal Helpers -------------------------------------------------

    fn registry_mut(&mut self) -> Result<&mut SceneRegistry<'a, C>, SceneError> {
        self.registry.as_mut().ok_or_else(|| {
            error!("Registry is not initialized - was the director finalized?");
            SceneError::RegistryUninitialized
        })
    }

    /// Resolves `current` to a scene; the sentinel when nothing is loaded.
    fn current_scene_mut(&mut self) -> &mut (dyn Scene<C> + 'a) {
        let registered = match self.current {
            Current::Registered(index) => self.registry.as_mut().and_then(|r| r.get_mut(index)),
            Current::Sentinel => None,
        };

        match registered {
            Some(scene) => scene,
            None => &mut self.sentinel,
        }
    }
}

impl<C> Drop for SceneDirector<'_, C> {
    fn drop(&mut self) {
        if self.registry.is_some() {
            self.finalize();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::SceneDescriptor;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<String>>>;

    /// Descriptor that records every callback into `journal`.
    fn recording(id: u32, journal: &Journal) -> SceneDescriptor<&'static str> {
        let (init, update, event, unload) = (
            Rc::clone(journal),
            Rc::clone(journal),
            Rc::clone(journal),
            Rc::clone(journal),
        );

        SceneDescriptor::new(SceneId(id))
            .on_init(move |ctx, payload| {
                let tag = payload.and_then(|p| p.downcast_ref::<&str>()).copied().unwrap_or("-");
                init.borrow_mut().push(format!("init {} {} {}", id, ctx, tag));
            })
            .on_update(move || {
                update.borrow_mut().push(format!("update {}", id));
                id % 2 == 0
            })
            .on_event(move |_, arg| {
                event.borrow_mut().push(format!("event {} {}", id, arg));
                id as i32
            })
            .on_unload(move || unload.borrow_mut().push(format!("unload {}", id)))
    }

    fn entries(journal: &Journal) -> Vec<String> {
        journal.borrow().clone()
    }

    #[test]
    fn fresh_director_is_idle_and_neutral() {
        let mut director = SceneDirector::new(());

        assert_eq!(director.state(), DirectorState::Idle);
        assert_eq!(director.current_id(), SceneId::INVALID);
        assert!(!director.update());
        assert_eq!(director.event_handler(SystemEvent::Pause, 1), 0);
    }

    #[test]
    fn load_invokes_init_with_context_and_payload() {
        let journal = Journal::default();
        let mut a = recording(1, &journal);
        let mut director = SceneDirector::new("pd");

        director.register(&mut a).unwrap();
        director.load(SceneId(1), Some(&"hello")).unwrap();

        assert_eq!(director.state(), DirectorState::Active(SceneId(1)));
        assert_eq!(entries(&journal), vec!["init 1 pd hello"]);
    }

    #[test]
    fn switching_unloads_old_before_init_new() {
        let journal = Journal::default();
        let mut a = recording(1, &journal);
        let mut b = recording(2, &journal);
        let mut director = SceneDirector::new("pd");

        director.register(&mut a).unwrap();
        director.register(&mut b).unwrap();
        director.load(SceneId(1), None).unwrap();
        director.load(SceneId(2), None).unwrap();
        let redraw = director.update();

        assert!(redraw);
        assert_eq!(
            entries(&journal),
            vec!["init 1 pd -", "unload 1", "init 2 pd -", "update 2"]
        );
    }

    #[test]
    fn reloading_same_scene_cycles_it() {
        let journal = Journal::default();
        let mut a = recording(1, &journal);
        let mut director = SceneDirector::new("pd");

        director.register(&mut a).unwrap();
        director.load(SceneId(1), None).unwrap();
        director.load(SceneId(1), None).unwrap();

        assert_eq!(entries(&journal), vec!["init 1 pd -", "unload 1", "init 1 pd -"]);
    }

    #[test]
    fn load_unknown_id_unloads_and_goes_idle() {
        let journal = Journal::default();
        let mut a = recording(1, &journal);
        let mut director = SceneDirector::new("pd");

        director.register(&mut a).unwrap();
        director.load(SceneId(1), None).unwrap();

        assert_eq!(director.load(SceneId(8), None), Err(SceneError::SceneNotFound(SceneId(8))));
        assert_eq!(director.state(), DirectorState::Idle);
        assert_eq!(entries(&journal), vec!["init 1 pd -", "unload 1"]);
        assert!(!director.update());
    }

    #[test]
    fn load_invalid_id_is_not_found() {
        let journal = Journal::default();
        let mut a = recording(1, &journal);
        let mut director = SceneDirector::new("pd");
        director.register(&mut a).unwrap();

        assert_eq!(
            director.load(SceneId::INVALID, None),
            Err(SceneError::SceneNotFound(SceneId::INVALID))
        );
        assert_eq!(director.state(), DirectorState::Idle);
    }

    #[test]
    fn load_with_empty_registry_fails() {
        let mut director = SceneDirector::new(());

        assert_eq!(director.load(SceneId(1), None), Err(SceneError::EmptyRegistry));
        assert_eq!(director.state(), DirectorState::Idle);
    }

    #[test]
    fn unload_twice_equals_once() {
        let journal = Journal::default();
        let mut a = recording(1, &journal);
        let mut director = SceneDirector::new("pd");

        director.register(&mut a).unwrap();
        director.load(SceneId(1), None).unwrap();
        director.unload();
        director.unload();

        assert_eq!(director.state(), DirectorState::Idle);
        assert_eq!(entries(&journal), vec!["init 1 pd -", "unload 1"]);
    }

    #[test]
    fn event_forwards_status_verbatim() {
        let journal = Journal::default();
        let mut c = recording(3, &journal);
        let mut director = SceneDirector::new("pd");

        director.register(&mut c).unwrap();
        director.load(SceneId(3), None).unwrap();

        assert_eq!(director.event_handler(SystemEvent::KeyPressed, 42), 3);
        assert!(!director.update());
        assert_eq!(entries(&journal), vec!["init 3 pd -", "event 3 42", "update 3"]);
    }

    #[test]
    fn finalize_unloads_and_discards_registry() {
        let journal = Journal::default();
        let mut a = recording(1, &journal);
        let mut b = recording(2, &journal);
        let mut director = SceneDirector::new("pd");

        director.register(&mut a).unwrap();
        director.load(SceneId(1), None).unwrap();
        director.finalize();

        assert!(!director.is_initialized());
        assert_eq!(director.state(), DirectorState::Idle);
        assert_eq!(director.register(&mut b), Err(SceneError::RegistryUninitialized));
        assert_eq!(director.load(SceneId(1), None), Err(SceneError::RegistryUninitialized));
        assert_eq!(entries(&journal), vec!["init 1 pd -", "unload 1"]);
    }

    #[test]
    fn initialize_after_finalize_starts_empty() {
        let mut a = SceneDescriptor::<()>::new(SceneId(1));
        let mut b = SceneDescriptor::<()>::new(SceneId(1));
        let mut director = SceneDirector::new(());

        director.register(&mut a).unwrap();
        director.finalize();
        director.initialize();

        assert!(director.is_initialized());
        assert_eq!(director.registry().map(|r| r.len()), Some(0));
        director.register(&mut b).unwrap();
        director.load(SceneId(1), None).unwrap();
    }

    #[test]
    fn initialize_on_live_director_keeps_registry() {
        let journal = Journal::default();
        let mut a = recording(1, &journal);
        let mut director = SceneDirector::new("pd");

        director.register(&mut a).unwrap();
        director.load(SceneId(1), None).unwrap();
        director.initialize();

        assert_eq!(director.registry().map(|r| r.len()), Some(1));
        assert_eq!(director.state(), DirectorState::Active(SceneId(1)));
        assert_eq!(entries(&journal), vec!["init 1 pd -"]);
    }

    #[test]
    fn bulk_register_after_finalize_fails() {
        let mut a = SceneDescriptor::<()>::new(SceneId(1));
        let mut b = SceneDescriptor::<()>::new(SceneId(2));
        let mut director = SceneDirector::new(());
        director.finalize();

        let batch: [&mut dyn Scene; 2] = [&mut a, &mut b];

        assert_eq!(director.register_bulk(batch), Err(SceneError::RegistryUninitialized));
        assert!(director.lookup(SceneId(1)).is_none());
    }

    #[test]
    fn register_reports_allocation_failure() {
        let mut a = SceneDescriptor::<()>::new(SceneId(1));
        let mut b = SceneDescriptor::<()>::new(SceneId(2));
        let config = DirectorConfig::new().with_capacity_limit(1);
        let mut director = SceneDirector::with_config((), config);

        director.register(&mut a).unwrap();

        assert_eq!(
            director.register(&mut b),
            Err(SceneError::AllocationFailure {
                id: SceneId(2),
                capacity: 2
            })
        );
        assert_eq!(director.registry().map(|r| r.ids().collect::<Vec<_>>()), Some(vec![SceneId(1)]));
        director.load(SceneId(1), None).unwrap();
        assert_eq!(director.load(SceneId(2), None), Err(SceneError::SceneNotFound(SceneId(2))));
    }

    #[test]
    fn drop_unloads_active_scene() {
        let journal = Journal::default();
        let mut a = recording(1, &journal);

        {
            let mut director = SceneDirector::new("pd");
            director.register(&mut a).unwrap();
            director.load(SceneId(1), None).unwrap();
        }

        assert_eq!(entries(&journal), vec!["init 1 pd -", "unload 1"]);
    }

    #[test]
    fn queued_transitions_apply_at_frame_boundary() {
        let journal = Journal::default();
        let mut a = recording(1, &journal);
        let mut b = recording(2, &journal);
        let mut director = SceneDirector::new("pd");
        director.register(&mut a).unwrap();
        director.register(&mut b).unwrap();
        director.load(SceneId(1), None).unwrap();

        let switcher = director.switcher();
        switcher.request_load_with(SceneId(2), "from-1").unwrap();

        assert_eq!(director.state(), DirectorState::Active(SceneId(1)));
        assert_eq!(director.process_transitions(), Ok(1));
        assert_eq!(director.state(), DirectorState::Active(SceneId(2)));
        assert_eq!(
            entries(&journal),
            vec!["init 1 pd -", "unload 1", "init 2 pd from-1"]
        );
    }

    #[test]
    fn transitions_respect_per_frame_limit() {
        let mut a = SceneDescriptor::<()>::new(SceneId(1));
        let config = DirectorConfig::new().with_max_transitions_per_frame(1);
        let mut director = SceneDirector::with_config((), config);
        director.register(&mut a).unwrap();

        let switcher = director.switcher();
        switcher.request_load(SceneId(1)).unwrap();
        switcher.request_unload().unwrap();

        assert_eq!(director.process_transitions(), Ok(1));
        assert_eq!(director.state(), DirectorState::Active(SceneId(1)));
        assert_eq!(director.process_transitions(), Ok(1));
        assert_eq!(director.state(), DirectorState::Idle);
        assert_eq!(director.process_transitions(), Ok(0));
    }

    #[test]
    fn failing_transition_stops_processing() {
        let mut a = SceneDescriptor::<()>::new(SceneId(1));
        let mut director = SceneDirector::new(());
        director.register(&mut a).unwrap();

        let switcher = director.switcher();
        switcher.request_load(SceneId(5)).unwrap();
        switcher.request_load(SceneId(1)).unwrap();

        assert_eq!(director.process_transitions(), Err(SceneError::SceneNotFound(SceneId(5))));
        assert_eq!(director.state(), DirectorState::Idle);
        assert_eq!(director.process_transitions(), Ok(1));
        assert_eq!(director.state(), DirectorState::Active(SceneId(1)));
    }
}
