//=========================================================================
// Scene Engine: Library Root
//
// A scene switcher for frame-driven hosts: one registry of
// mutually-exclusive application states, exactly one of them active,
// with strictly ordered teardown before setup.
//
// Responsibilities:
// - Expose the scene contract (`Scene`, `SceneDescriptor`, `SceneId`)
// - Expose the lifecycle controller (`SceneDirector`)
// - Provide an optional frame driver (`Engine`) for hosts that forward
//   refresh ticks and system events over a channel
//
// Typical usage:
// ```
// use scene_engine::prelude::*;
//
// let mut menu = SceneDescriptor::<()>::new(SceneId(1)).on_update(|| true);
// let mut director = SceneDirector::new(());
//
// director.register(&mut menu).unwrap();
// director.load(SceneId(1), None).unwrap();
// assert!(director.update());
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the registry, the director and the host bridge types.
// `engine` is the frame loop built on top of them.
// `logging` installs the log backend for binaries.
//
pub mod core;
pub mod engine;
pub mod logging;
pub mod prelude;

//--- Public Exports ------------------------------------------------------
//
// The types most applications need, without the module paths.
//
pub use crate::core::{
    DirectorConfig, DirectorState, DuplicatePolicy, Scene, SceneDescriptor, SceneDirector,
    SceneError, SceneId,
};
pub use crate::core::SystemEvent;
pub use engine::{Engine, EngineBuilder};
