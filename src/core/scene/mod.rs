//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene registration, lifecycle and single-scene dispatch.
//
// Architecture:
//   SceneDirector
//     ├─ registry: SceneRegistry (&mut dyn Scene, looked up by SceneId)
//     ├─ current: Sentinel | Registered(index)
//     └─ transitions: SceneTransition receiver (deferred switches)
//
// Flow:
//   load(id) → unload(old) → lookup(id) → Scene::init()
//   update() / event_handler() → current scene (or InvalidScene)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::SystemEvent;

//=== Module Declarations =================================================

mod descriptor;
mod director;
mod invalid;
mod registry;
mod transition_queue;

//=== Public API ==========================================================

pub use descriptor::SceneDescriptor;
pub use director::{DirectorState, SceneDirector};
pub use invalid::InvalidScene;
pub use registry::SceneRegistry;
pub use transition_queue::{SceneSwitcher, SceneTransition};

/// Status code returned by [`Scene::event`] when nothing went wrong.
pub const EVENT_STATUS_OK: i32 = 0;

//=== Scene Identifier ====================================================

/// Identifies a scene for the whole lifetime of the process.
///
/// `u32::MAX` is reserved as [`SceneId::INVALID`] and can never be
/// registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(pub u32);

impl SceneId {
    /// The "no scene" identifier carried by [`InvalidScene`].
    pub const INVALID: SceneId = SceneId(u32::MAX);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn is_invalid(self) -> bool {
        self.0 == u32::MAX
    }
}

impl From<u32> for SceneId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invalid() {
            write!(f, "<invalid>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

//=== Scene Trait =========================================================

/// Defines one mutually-exclusive application state.
///
/// Every lifecycle hook is optional and defaults to a no-op, so a scene
/// only overrides what it needs. `C` is the host context handed to
/// [`Scene::init`]; scenes that need it later should keep their own copy.
///
/// # Minimal Implementation
///
/// ```rust
/// use scene_engine::prelude::*;
///
/// struct Title;
///
/// impl Scene for Title {
///     fn id(&self) -> SceneId {
///         SceneId(1)
///     }
///
///     fn update(&mut self) -> bool {
///         true
///     }
/// }
/// ```
pub trait Scene<C = ()> {
    /// Identifier this scene is registered and loaded under.
    fn id(&self) -> SceneId;

    /// Called once when the scene becomes the active scene.
    ///
    /// `payload` is whatever the caller of `load` handed over, if anything.
    fn init(&mut self, _context: &C, _payload: Option<&dyn Any>) {}

    /// Called once per frame while active. Returns `true` to request a redraw.
    fn update(&mut self) -> bool {
        false
    }

    /// Called for host system events other than start-up and shutdown.
    fn event(&mut self, _event: SystemEvent, _arg: u32) -> i32 {
        EVENT_STATUS_OK
    }

    /// Called exactly once right before the scene stops being active.
    ///
    /// Release everything acquired since `init` here.
    fn unload(&mut self) {}
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl Scene for Bare {
        fn id(&self) -> SceneId {
            SceneId(7)
        }
    }

    #[test]
    fn invalid_id_is_u32_max() {
        assert_eq!(SceneId::INVALID.raw(), u32::MAX);
        assert!(SceneId::INVALID.is_invalid());
        assert!(!SceneId(0).is_invalid());
    }

    #[test]
    fn id_converts_from_u32() {
        assert_eq!(SceneId::from(3), SceneId::new(3));
    }

    #[test]
    fn id_display() {
        assert_eq!(SceneId(12).to_string(), "12");
        assert_eq!(SceneId::INVALID.to_string(), "<invalid>");
    }

    #[test]
    fn default_hooks_are_neutral() {
        let mut scene = Bare;
        scene.init(&(), None);
        assert!(!scene.update());
        assert_eq!(scene.event(SystemEvent::Pause, 0), EVENT_STATUS_OK);
        scene.unload();
        assert_eq!(scene.id(), SceneId(7));
    }
}
