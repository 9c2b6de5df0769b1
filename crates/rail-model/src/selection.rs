/// The 4-tuple of user choices driving the cascade. `None` means "unset";
/// the filter engine replaces unset or invalid fields with the first
/// option (ascending lexicographic) of the step's current option set.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectionState {
    pub currency: Option<String>,
    pub io_module: Option<String>,
    pub denomination: Option<String>,
    pub emission: Option<String>,
}

impl SelectionState {
    /// Apply field changes from a partial update. Unpatched fields keep
    /// their value; validity against the dataset is the filter engine's
    /// job, not ours.
    pub fn apply(&mut self, patch: &SelectionPatch) {
        if let Some(currency) = &patch.currency {
            self.currency = Some(currency.clone());
        }
        if let Some(io_module) = &patch.io_module {
            self.io_module = Some(io_module.clone());
        }
        if let Some(denomination) = &patch.denomination {
            self.denomination = Some(denomination.clone());
        }
        if let Some(emission) = &patch.emission {
            self.emission = Some(emission.clone());
        }
    }

    pub fn is_unset(&self) -> bool {
        self.currency.is_none()
            && self.io_module.is_none()
            && self.denomination.is_none()
            && self.emission.is_none()
    }
}

/// A partial selection update: `Some` fields are set, `None` fields are
/// left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPatch {
    pub currency: Option<String>,
    pub io_module: Option<String>,
    pub denomination: Option<String>,
    pub emission: Option<String>,
}

impl SelectionPatch {
    pub fn is_empty(&self) -> bool {
        self.currency.is_none()
            && self.io_module.is_none()
            && self.denomination.is_none()
            && self.emission.is_none()
    }
}
