//=========================================================================
// Scene Descriptor
//=========================================================================
//
// Closure-backed scene: an identifier plus up to four optional callbacks.
//
// Useful for small scenes that don't warrant their own type. Anything
// with real state should implement `Scene` directly.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::fmt;

//=== Internal Dependencies ===============================================

use super::{Scene, SceneId, EVENT_STATUS_OK};
use crate::core::platform_bridge::SystemEvent;

type InitFn<C> = Box<dyn FnMut(&C, Option<&dyn Any>)>;
type UpdateFn = Box<dyn FnMut() -> bool>;
type EventFn = Box<dyn FnMut(SystemEvent, u32) -> i32>;
type UnloadFn = Box<dyn FnMut()>;

//=== SceneDescriptor =====================================================

/// A scene described as a bundle of optional lifecycle callbacks.
///
/// Missing callbacks behave like the [`Scene`] defaults.
///
/// ```rust
/// use scene_engine::prelude::*;
///
/// let mut title = SceneDescriptor::<()>::new(SceneId(1))
///     .on_update(|| true)
///     .on_unload(|| println!("bye"));
///
/// assert!(title.has_update());
/// assert!(!title.has_init());
/// assert!(title.update());
/// ```
pub struct SceneDescriptor<C = ()> {
    id: SceneId,
    init: Option<InitFn<C>>,
    update: Option<UpdateFn>,
    event: Option<EventFn>,
    unload: Option<UnloadFn>,
}

impl<C> SceneDescriptor<C> {
    //--- Construction -----------------------------------------------------

    /// Creates a descriptor with no callbacks.
    pub fn new(id: SceneId) -> Self {
        Self {
            id,
            init: None,
            update: None,
            event: None,
            unload: None,
        }
    }

    pub fn on_init<F>(mut self, init: F) -> Self
    where
        F: FnMut(&C, Option<&dyn Any>) + 'static,
    {
        self.init = Some(Box::new(init));
        self
    }

    pub fn on_update<F>(mut self, update: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        self.update = Some(Box::new(update));
        self
    }

    pub fn on_event<F>(mut self, event: F) -> Self
    where
        F: FnMut(SystemEvent, u32) -> i32 + 'static,
    {
        self.event = Some(Box::new(event));
        self
    }

    pub fn on_unload<F>(mut self, unload: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.unload = Some(Box::new(unload));
        self
    }

    //--- Capability Queries -----------------------------------------------

    pub fn has_init(&self) -> bool {
        self.init.is_some()
    }

    pub fn has_update(&self) -> bool {
        self.update.is_some()
    }

    pub fn has_event(&self) -> bool {
        self.event.is_some()
    }

    pub fn has_unload(&self) -> bool {
        self.unload.is_some()
    }
}

impl<C> Scene<C> for SceneDescriptor<C> {
    fn id(&self) -> SceneId {
        self.id
    }

    fn init(&mut self, context: &C, payload: Option<&dyn Any>) {
        if let Some(init) = self.init.as_mut() {
            init(context, payload);
        }
    }

    fn update(&mut self) -> bool {
        match self.update.as_mut() {
            Some(update) => update(),
            None => false,
        }
    }

    fn event(&mut self, event: SystemEvent, arg: u32) -> i32 {
        match self.event.as_mut() {
            Some(handler) => handler(event, arg),
            None => EVENT_STATUS_OK,
        }
    }

    fn unload(&mut self) {
        if let Some(unload) = self.unload.as_mut() {
            unload();
        }
    }
}

impl<C> fmt::Debug for SceneDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneDescriptor")
            .field("id", &self.id)
            .field("init", &self.has_init())
            .field("update", &self.has_update())
            .field("event", &self.has_event())
            .field("unload", &self.has_unload())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
