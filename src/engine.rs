//=========================================================================
// Scene Engine
//
// Frame driver that feeds host events and refresh ticks into a
// `SceneDirector`.
//
// Architecture:
// ```text
//     EngineBuilder  ──build(ctx)──>  Engine  ──run()──>  [Frame Loop]
//         │                             │
//         ├─ with_tps()                 ├─ init() or register() / load()
//         ├─ with_channel_capacity()    ├─ host_handle() → HostHandle
//         └─ with_director_config()     └─ tick() / run()
// ```
//
// Each frame: collect host events → event_handler() → update() →
// process_transitions(). Terminate, Shutdown or a disconnected host end
// the loop and finalize the director.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::bounded;
use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{EventCollector, HostHandle, TickControl};
use crate::core::{DirectorConfig, Scene, SceneDirector, SceneError, SceneId, EVENT_STATUS_OK};

//=== Public API ==========================================================

pub use crate::core::platform_bridge::SystemEvent;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 30.0 (frames per second)
/// - **Channel capacity**: 128 host events
/// - **Director**: [`DirectorConfig::default`]
///
/// # Examples
///
/// ```no_run
/// use scene_engine::prelude::*;
///
/// let mut title = SceneDescriptor::<()>::new(SceneId(1)).on_update(|| true);
///
/// let mut engine = EngineBuilder::new()
///     .with_tps(50.0)
///     .with_channel_capacity(256)
///     .build(());
///
/// engine.register(&mut title).expect("register title");
/// engine.load(SceneId(1), None).expect("load title");
///
/// let host = engine.host_handle();
/// std::thread::spawn(move || {
///     // forward host callbacks here
///     host.shutdown().ok();
/// });
///
/// engine.run();
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    director: DirectorConfig,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 30.0,
            channel_capacity: 128,
            director: DirectorConfig::default(),
        }
    }

    /// Sets the target frames per second for [`Engine::run`].
    ///
    /// Default: 30.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of the host → engine channel.
    ///
    /// A full channel blocks the host's sender until the engine catches up.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Replaces the director configuration.
    pub fn with_director_config(mut self, config: DirectorConfig) -> Self {
        self.director = config;
        self
    }

    /// Builds the engine; `context` is what scenes receive in `init`.
    pub fn build<'a, C>(self, context: C) -> Engine<'a, C> {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        let (sender, receiver) = bounded(self.channel_capacity);

        Engine {
            director: SceneDirector::with_config(context, self.director),
            collector: EventCollector::new(receiver),
            host: HostHandle::new(sender),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            frames: 0,
            last_redraw: false,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Frame-driven runtime around a [`SceneDirector`].
///
/// The engine and its scenes stay on the thread that calls [`Engine::run`]
/// (or [`Engine::tick`]); hosts talk to it through [`HostHandle`]s.
pub struct Engine<'a, C> {
    director: SceneDirector<'a, C>,
    collector: EventCollector,
    host: HostHandle,
    tps: f64,
    channel_capacity: usize,
    frames: u64,
    last_redraw: bool,
}

impl<'a, C> Engine<'a, C> {
    //--- Scene Setup ------------------------------------------------------

    /// Runs `init_fn` against the director, typically to register scenes
    /// and load the first one.
    ///
    /// Scenes are borrowed for `'a`, so hand the closure references that
    /// already live long enough rather than borrowing inside it.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use scene_engine::prelude::*;
    ///
    /// let mut title = SceneDescriptor::<()>::new(SceneId(1)).on_update(|| true);
    /// let mut game = SceneDescriptor::<()>::new(SceneId(2));
    /// let scenes: [&mut dyn Scene; 2] = [&mut title, &mut game];
    ///
    /// let engine = EngineBuilder::new()
    ///     .build(())
    ///     .init(move |director| {
    ///         director.register_bulk(scenes)?;
    ///         director.load(SceneId(1), None)
    ///     })
    ///     .expect("scene setup");
    ///
    /// engine.run();
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Result<Self, SceneError>
    where
        F: FnOnce(&mut SceneDirector<'a, C>) -> Result<(), SceneError>,
    {
        info!("Initializing engine scenes");

        if let Err(e) = init_fn(&mut self.director) {
            error!("Engine initialization failed: {}", e);
            return Err(e);
        }

        info!(
            "Engine initialization complete ({} scene(s) registered, current {})",
            self.director.registry().map_or(0, |r| r.len()),
            self.director.current_id()
        );
        Ok(self)
    }

    /// Registers a scene with the engine's director.
    pub fn register(&mut self, scene: &'a mut dyn Scene<C>) -> Result<(), SceneError> {
        self.director.register(scene)
    }

    /// Registers several scenes at once, stopping at the first failure.
    pub fn register_bulk<I>(&mut self, scenes: I) -> Result<(), SceneError>
    where
        I: IntoIterator<Item = &'a mut dyn Scene<C>>,
    {
        self.director.register_bulk(scenes)
    }

    /// Loads the scene the loop starts with.
    pub fn load(&mut self, id: SceneId, payload: Option<&dyn Any>) -> Result<(), SceneError> {
        self.director.load(id, payload)?;
        info!(
            "Engine ready ({} scene(s) registered, current {})",
            self.director.registry().map_or(0, |r| r.len()),
            self.director.current_id()
        );
        Ok(())
    }

    /// Returns a handle the host uses to forward system events.
    pub fn host_handle(&self) -> HostHandle {
        self.host.clone()
    }

    pub fn director(&self) -> &SceneDirector<'a, C> {
        &self.director
    }

    pub fn director_mut(&mut self) -> &mut SceneDirector<'a, C> {
        &mut self.director
    }

    pub fn tps(&self) -> f64 {
        self.tps
    }

    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }

    /// Frames completed by [`Engine::tick`].
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether the last completed frame asked for a redraw.
    pub fn last_redraw(&self) -> bool {
        self.last_redraw
    }

    //--- Execution --------------------------------------------------------

    /// Runs a single frame without pacing.
    ///
    /// Returns [`TickControl::Exit`] once the host asked to stop. The
    /// director is not finalized here; that is left to the caller (or to
    /// dropping the engine).
    pub fn tick(&mut self) -> TickControl {
        let (control, redraw) = Self::step(&mut self.director, &mut self.collector);

        if control == TickControl::Continue {
            self.frames += 1;
            self.last_redraw = redraw;
        }

        control
    }

    /// Runs frames at the configured TPS until the host stops the engine.
    ///
    /// The engine's own host handle is released first, so the loop also
    /// ends once every [`HostHandle`] has been dropped. The director is
    /// finalized before returning. Returns the number of frames run.
    pub fn run(self) -> u64 {
        info!("Starting engine loop (TPS: {})", self.tps);

        let frame_duration = Duration::from_secs_f64(1.0 / self.tps);
        let Engine {
            mut director,
            mut collector,
            host,
            mut frames,
            ..
        } = self;
        drop(host);

        loop {
            let frame_start = Instant::now();

            //--- Step 1-3: events, update, transitions --------------------
            let (control, _) = Self::step(&mut director, &mut collector);
            if control == TickControl::Exit {
                info!("Host requested shutdown");
                break;
            }
            frames += 1;

            //--- Step 4: Maintain pacing -----------------------------------
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                thread::sleep(frame_duration - elapsed);
            }
        }

        director.finalize();
        info!("Engine shutdown complete after {} frame(s)", frames);
        frames
    }

    //--- Internal Helpers -------------------------------------------------

    fn step(director: &mut SceneDirector<'a, C>, collector: &mut EventCollector) -> (TickControl, bool) {
        let control = collector.collect_frame();

        for &(event, arg) in collector.events() {
            Self::dispatch_event(director, event, arg);
        }

        if control == TickControl::Exit {
            return (TickControl::Exit, false);
        }

        let redraw = director.update();

        if let Err(e) = director.process_transitions() {
            error!("Scene transition failed: {}", e);
        }

        (TickControl::Continue, redraw)
    }

    fn dispatch_event(director: &mut SceneDirector<'a, C>, event: SystemEvent, arg: u32) {
        if event.is_lifecycle() {
            debug!("Ignoring {} event; handled by the engine", event);
            return;
        }

        let status = director.event_handler(event, arg);
        if status != EVENT_STATUS_OK {
            warn!(
                "Scene {} returned status {} for {} (arg {})",
                director.current_id(),
                status,
                event,
                arg
            );
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
