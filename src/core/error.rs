//=========================================================================
// Scene Errors
//=========================================================================
//
// Every failure the registry and director can report.
//
// All of these are caller or configuration errors. None of them is
// transient, so nothing in the crate retries on its own.
//
//=========================================================================

use thiserror::Error;

use crate::core::scene::SceneId;

/// Errors returned by scene registration, loading and transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The scene uses the identifier reserved for the invalid scene.
    #[error("{} is reserved as the invalid scene id", SceneId::INVALID.raw())]
    ReservedIdentifier,

    /// The director was finalized and has not been initialized again.
    #[error("scene registry is not initialized (was the director finalized?)")]
    RegistryUninitialized,

    /// Growing the registry storage failed.
    #[error("allocation failure while registering scene {id} (requested capacity {capacity})")]
    AllocationFailure { id: SceneId, capacity: usize },

    /// `register_bulk` was called without any scenes.
    #[error("invalid scene count passed to bulk registration")]
    InvalidCount,

    /// `load` was called before any scene was registered.
    #[error("no scene registered")]
    EmptyRegistry,

    /// No registered scene carries the requested identifier.
    #[error("scene with identifier {0} not found")]
    SceneNotFound(SceneId),

    /// Another registered scene already carries this identifier.
    #[error("scene identifier {0} is already registered")]
    DuplicateIdentifier(SceneId),

    /// One entry of a bulk registration failed; entries before it stay registered.
    #[error("bulk registration failed at index {index}: {source}")]
    BulkRegistration {
        index: usize,
        #[source]
        source: Box<SceneError>,
    },

    /// The director owning the transition queue is gone.
    #[error("scene director is no longer receiving transitions")]
    SwitcherDisconnected,
}

impl SceneError {
    /// Unwraps a bulk registration error down to the entry that failed.
    pub fn root(&self) -> &SceneError {
        match self {
            Self::BulkRegistration { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_scene() {
        assert_eq!(
            SceneError::SceneNotFound(SceneId(42)).to_string(),
            "scene with identifier 42 not found"
        );
        assert_eq!(
            SceneError::ReservedIdentifier.to_string(),
            "4294967295 is reserved as the invalid scene id"
        );
    }

    #[test]
    fn root_unwraps_bulk_errors() {
        let err = SceneError::BulkRegistration {
            index: 1,
            source: Box::new(SceneError::ReservedIdentifier),
        };

        assert_eq!(err.root(), &SceneError::ReservedIdentifier);
        assert!(err.to_string().contains("index 1"));
    }
}
