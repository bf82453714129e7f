//=========================================================================
// Scene Registry
//=========================================================================
//
// Append-only index of application-owned scenes.
//
// The registry only borrows scenes; it never drops or copies them.
// Storage capacity is tracked explicitly and doubled on overflow, with
// growth failures reported instead of aborting.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, warn};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneId};
use crate::core::config::{DirectorConfig, DuplicatePolicy};
use crate::core::error::SceneError;

//=== SceneRegistry =======================================================

/// Index of registered scenes, looked up by [`SceneId`].
///
/// Insertion order has no meaning beyond "first match wins" when
/// duplicates are allowed.
pub struct SceneRegistry<'a, C> {
    entries: Vec<&'a mut dyn Scene<C>>,
    capacity: usize,
    capacity_limit: Option<usize>,
    duplicate_policy: DuplicatePolicy,
}

impl<'a, C> SceneRegistry<'a, C> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty registry sized by `config.initial_capacity`.
    pub fn new(config: &DirectorConfig) -> Self {
        let capacity = config.initial_capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            capacity_limit: config.capacity_limit,
            duplicate_policy: config.duplicate_policy,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene.
    ///
    /// On error the registry is left exactly as it was.
    pub fn register(&mut self, scene: &'a mut dyn Scene<C>) -> Result<(), SceneError> {
        let id = scene.id();

        if id.is_invalid() {
            error!("{} is reserved as invalid scene ID", SceneId::INVALID.raw());
            return Err(SceneError::ReservedIdentifier);
        }

        if self.position(id).is_some() {
            match self.duplicate_policy {
                DuplicatePolicy::Reject => {
                    error!("Scene {} is already registered", id);
                    return Err(SceneError::DuplicateIdentifier(id));
                }
                DuplicatePolicy::FirstMatchWins => {
                    warn!("Scene {} registered twice; lookups keep the first one", id);
                }
            }
        }

        if self.entries.len() == self.capacity {
            self.grow(id)?;
        }

        self.entries.push(scene);
        debug!("Registered scene {} ({} of {})", id, self.entries.len(), self.capacity);
        Ok(())
    }

    /// Registers scenes in order, stopping at the first failure.
    ///
    /// Scenes before the failing one stay registered. The error reports
    /// the index of the failing entry; later entries are never touched.
    pub fn register_bulk<I>(&mut self, scenes: I) -> Result<(), SceneError>
    where
        I: IntoIterator<Item = &'a mut dyn Scene<C>>,
    {
        let mut scenes = scenes.into_iter().peekable();
        if scenes.peek().is_none() {
            error!("Invalid scene count passed");
            return Err(SceneError::InvalidCount);
        }

        for (index, scene) in scenes.enumerate() {
            self.register(scene).map_err(|source| SceneError::BulkRegistration {
                index,
                source: Box::new(source),
            })?;
        }

        Ok(())
    }

    //--- Lookup -----------------------------------------------------------

    /// Returns the first scene registered under `id`.
    pub fn lookup(&self, id: SceneId) -> Option<&(dyn Scene<C> + 'a)> {
        self.entries
            .iter()
            .find(|scene| scene.id() == id)
            .map(|scene| &**scene)
    }

    /// Index of the first scene registered under `id`.
    pub(crate) fn position(&self, id: SceneId) -> Option<usize> {
        self.entries.iter().position(|scene| scene.id() == id)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Scene<C> + 'a)> {
        self.entries.get_mut(index).map(|scene| &mut **scene)
    }

    //--- Query API --------------------------------------------------------

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of slots currently reserved. Always a power-of-two multiple
    /// of the initial capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Identifiers in registration order.
    pub fn ids(&self) -> impl Iterator<Item = SceneId> + use<'_, 'a, C> {
        self.entries.iter().map(|scene| scene.id())
    }

    //--- Internal Helpers -------------------------------------------------

    fn grow(&mut self, id: SceneId) -> Result<(), SceneError> {
        let requested = self.capacity.saturating_mul(2);

        if self.capacity_limit.is_some_and(|limit| requested > limit) {
            error!(
                "Allocation failure during scene registration (tried to register ID {}, registration capacity {})",
                id, requested
            );
            return Err(SceneError::AllocationFailure {
                id,
                capacity: requested,
            });
        }

        self.reserve(id, requested)
    }

    /// Reserves storage for `requested` scenes in total. Leaves the
    /// registry untouched when the allocator refuses.
    fn reserve(&mut self, id: SceneId, requested: usize) -> Result<(), SceneError> {
        let additional = requested.saturating_sub(self.entries.len());
        if let Err(e) = self.entries.try_reserve_exact(additional) {
            error!("Allocation failure during scene registration (ID {}): {}", id, e);
            return Err(SceneError::AllocationFailure {
                id,
                capacity: requested,
            });
        }

        debug!("Registry capacity grown {} -> {}", self.capacity, requested);
        self.capacity = requested;
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
