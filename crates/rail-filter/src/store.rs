//! The selection state store: owns the current 4-tuple, applies partial
//! updates through the cascade, and round-trips the shareable reference.

use std::sync::Arc;

use tracing::debug;

use rail_model::{Dataset, SelectionPatch, SelectionState};

use crate::cascade::{Cascade, resolve};
use crate::share_ref::{decode_share_ref, encode_share_ref};

/// Per-user selection state over one shared, immutable dataset.
///
/// Every mutation goes through [`resolve`], so the stored state is always
/// fully resolved: each field is either a valid member of its step's
/// option set or unset because that set is empty.
pub struct SelectionStore {
    dataset: Arc<Dataset>,
    state: SelectionState,
}

impl SelectionStore {
    /// Create a store with default selections (first option per step).
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let state = resolve(&dataset, &SelectionState::default()).resolved;
        Self { dataset, state }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// The current resolved selection.
    pub fn get(&self) -> &SelectionState {
        &self.state
    }

    /// Recompute the cascade for the current state.
    pub fn cascade(&self) -> Cascade {
        resolve(&self.dataset, &self.state)
    }

    /// Apply one or more field changes, then re-validate and re-default
    /// downstream fields. Returns the resulting cascade.
    pub fn set(&mut self, patch: &SelectionPatch) -> Cascade {
        self.state.apply(patch);
        self.commit()
    }

    /// Clear every field back to defaults, as a fresh process start would.
    pub fn reset(&mut self) -> Cascade {
        self.state = SelectionState::default();
        self.commit()
    }

    /// The shareable reference for the current state.
    pub fn share_ref(&self) -> String {
        encode_share_ref(&self.state)
    }

    /// Restore from a shareable reference. Never rejects the input:
    /// values no longer valid for the dataset are silently replaced with
    /// defaults.
    pub fn restore(&mut self, reference: &str) -> Cascade {
        self.state = decode_share_ref(reference);
        self.commit()
    }

    fn commit(&mut self) -> Cascade {
        let cascade = resolve(&self.dataset, &self.state);
        self.state = cascade.resolved.clone();
        debug!(
            currency = self.state.currency.as_deref().unwrap_or("-"),
            io_module = self.state.io_module.as_deref().unwrap_or("-"),
            denomination = self.state.denomination.as_deref().unwrap_or("-"),
            emission = self.state.emission.as_deref().unwrap_or("-"),
            match_count = cascade.matches.len(),
            "selection resolved"
        );
        cascade
    }
}
