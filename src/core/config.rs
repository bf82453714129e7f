//=========================================================================
// Director Configuration
//=========================================================================
//
// Tunables for the scene registry and the deferred transition queue.
//
//=========================================================================

//=== DuplicatePolicy =====================================================

/// What `register` does with an identifier that is already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Refuse the second scene with `SceneError::DuplicateIdentifier`.
    #[default]
    Reject,

    /// Accept it with a warning. Lookups keep returning the first one.
    FirstMatchWins,
}

//=== DirectorConfig ======================================================

/// Configuration for a [`crate::core::scene::SceneDirector`].
///
/// # Default Values
///
/// - **Initial capacity**: 1 registry slot
/// - **Capacity limit**: none
/// - **Duplicate policy**: [`DuplicatePolicy::Reject`]
/// - **Transitions per frame**: 16
///
/// ```rust
/// use scene_engine::core::{DirectorConfig, DuplicatePolicy};
///
/// let config = DirectorConfig::new()
///     .with_initial_capacity(8)
///     .with_duplicate_policy(DuplicatePolicy::FirstMatchWins);
///
/// assert_eq!(config.initial_capacity, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectorConfig {
    /// Registry slots allocated up front. Doubled whenever they run out.
    pub initial_capacity: usize,

    /// Largest capacity the registry may grow to. `None` means unbounded.
    pub capacity_limit: Option<usize>,

    /// How duplicate identifiers are handled at registration time.
    pub duplicate_policy: DuplicatePolicy,

    /// Upper bound on deferred transitions applied in one frame.
    pub max_transitions_per_frame: usize,
}

impl DirectorConfig {
    pub fn new() -> Self {
        Self {
            initial_capacity: 1,
            capacity_limit: None,
            duplicate_policy: DuplicatePolicy::Reject,
            max_transitions_per_frame: 16,
        }
    }

    /// Sets the number of registry slots allocated at initialization.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Initial capacity must be positive");
        self.initial_capacity = capacity;
        self
    }

    /// Caps registry growth. Growing past `limit` fails with
    /// `SceneError::AllocationFailure`.
    pub fn with_capacity_limit(mut self, limit: usize) -> Self {
        self.capacity_limit = Some(limit);
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// # Panics
    ///
    /// Panics if `count == 0`.
    pub fn with_max_transitions_per_frame(mut self, count: usize) -> Self {
        assert!(count > 0, "Transitions per frame must be positive");
        self.max_transitions_per_frame = count;
        self
    }
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
