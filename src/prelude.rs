//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use scene_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::core::SystemEvent;
pub use crate::engine::{Engine, EngineBuilder};

// Host bridge
pub use crate::core::platform_bridge::{HostEvent, HostHandle, TickControl};

// Scene system
pub use crate::core::scene::{
    DirectorState, InvalidScene, Scene, SceneDescriptor, SceneDirector, SceneId, SceneSwitcher,
    SceneTransition, EVENT_STATUS_OK,
};

// Configuration and errors
pub use crate::core::{DirectorConfig, DuplicatePolicy, SceneError};
