//=========================================================================
// Transition Queue
//=========================================================================
//
// Deferred scene switches.
//
// Scene callbacks can't call back into the director (it is mutably
// borrowed while they run), so they send transitions here instead. The
// director drains the queue at the frame boundary.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::fmt;

use crossbeam_channel::{Receiver, Sender, TryRecvError};

//=== Internal Dependencies ===============================================

use super::SceneId;
use crate::core::error::SceneError;

//=== Scene Transition ====================================================

/// A scene switch requested for the next frame boundary.
pub enum SceneTransition {
    /// Unload the current scene and load `id`, handing `payload` to its init.
    Load {
        id: SceneId,
        payload: Option<Box<dyn Any + Send>>,
    },

    /// Unload the current scene and go idle.
    Unload,
}

impl SceneTransition {
    pub fn load(id: SceneId) -> Self {
        Self::Load { id, payload: None }
    }

    pub fn load_with<P: Any + Send>(id: SceneId, payload: P) -> Self {
        Self::Load {
            id,
            payload: Some(Box::new(payload)),
        }
    }
}

impl fmt::Debug for SceneTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { id, payload } => f
                .debug_struct("Load")
                .field("id", id)
                .field("payload", &payload.is_some())
                .finish(),
            Self::Unload => write!(f, "Unload"),
        }
    }
}

//=== SceneSwitcher =======================================================

/// Cloneable handle for requesting deferred scene switches.
///
/// Obtained from [`super::SceneDirector::switcher`]. Safe to hand to
/// scenes or to other threads.
#[derive(Clone)]
pub struct SceneSwitcher {
    sender: Sender<SceneTransition>,
}

impl SceneSwitcher {
    pub(crate) fn new(sender: Sender<SceneTransition>) -> Self {
        Self { sender }
    }

    /// Queues a switch to `id` without payload.
    pub fn request_load(&self, id: SceneId) -> Result<(), SceneError> {
        self.send(SceneTransition::load(id))
    }

    /// Queues a switch to `id`; `payload` is handed to the new scene's init.
    pub fn request_load_with<P: Any + Send>(&self, id: SceneId, payload: P) -> Result<(), SceneError> {
        self.send(SceneTransition::load_with(id, payload))
    }

    /// Queues an unload of whatever scene is active at the frame boundary.
    pub fn request_unload(&self) -> Result<(), SceneError> {
        self.send(SceneTransition::Unload)
    }

    pub fn send(&self, transition: SceneTransition) -> Result<(), SceneError> {
        self.sender
            .send(transition)
            .map_err(|_| SceneError::SwitcherDisconnected)
    }
}

impl fmt::Debug for SceneSwitcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneSwitcher")
            .field("pending", &self.sender.len())
            .finish()
    }
}

//=== TransitionQueue =====================================================

/// Receiving side of the transition channel, owned by the director.
pub(crate) struct TransitionQueue {
    sender: Sender<SceneTransition>,
    receiver: Receiver<SceneTransition>,
}

impl TransitionQueue {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self { sender, receiver }
    }

    pub(crate) fn switcher(&self) -> SceneSwitcher {
        SceneSwitcher::new(self.sender.clone())
    }

    /// Takes the oldest queued transition, if any.
    ///
    /// The queue keeps its own sender, so it never reports disconnection.
    pub(crate) fn pop(&self) -> Option<SceneTransition> {
        match self.receiver.try_recv() {
            Ok(transition) => Some(transition),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.receiver.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Drops every queued transition.
    pub(crate) fn clear(&self) -> usize {
        self.receiver.try_iter().count()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
