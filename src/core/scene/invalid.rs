//=========================================================================
// Invalid Scene
//=========================================================================
//
// The sentinel the director points at whenever no real scene is active.
//
//=========================================================================

use super::{Scene, SceneId};

/// Zero-capability scene standing in for "nothing loaded".
///
/// Every hook keeps its neutral default, so dispatching to it never
/// needs a null check on the caller side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InvalidScene;

impl<C> Scene<C> for InvalidScene {
    fn id(&self) -> SceneId {
        SceneId::INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform_bridge::SystemEvent;

    #[test]
    fn carries_reserved_id() {
        assert_eq!(Scene::<()>::id(&InvalidScene), SceneId::INVALID);
    }

    #[test]
    fn dispatch_is_neutral() {
        let mut scene = InvalidScene;
        Scene::<u8>::init(&mut scene, &0, None);
        assert!(!Scene::<u8>::update(&mut scene));
        assert_eq!(Scene::<u8>::event(&mut scene, SystemEvent::KeyPressed, 4), 0);
        Scene::<u8>::unload(&mut scene);
    }
}
