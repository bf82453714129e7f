//=========================================================================
// Core Systems
//
// Everything that runs on the engine thread.
//
// Responsibilities:
// - Scene registry, lifecycle and dispatch (`scene`)
// - Host event intake and loop control (`platform_bridge`)
// - Error and configuration types shared by both
//
// Notes:
// The director is single-threaded by construction: every operation
// takes `&mut self`, so a scene callback can't reenter `load`/`unload`.
// Cross-thread and in-callback requests go through channels instead
// (`HostHandle`, `SceneSwitcher`) and are applied at frame boundaries.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod error;
pub mod platform_bridge;
pub mod scene;

//=== Public API ==========================================================

pub use config::{DirectorConfig, DuplicatePolicy};
pub use error::SceneError;
pub use platform_bridge::{HostEvent, HostHandle, SystemEvent, TickControl};
pub use scene::{
    DirectorState, InvalidScene, Scene, SceneDescriptor, SceneDirector, SceneId, SceneRegistry,
    SceneSwitcher, SceneTransition, EVENT_STATUS_OK,
};
