//! Display-side types: the derived row triple and the transient toggle map.

use serde::Serialize;
use std::collections::HashMap;

/// What a line item currently shows: the quantity/unit/rate triple.
///
/// Derived, never stored. The amount column is always the canonical
/// `total_price`, regardless of which representation is active.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineDisplay {
    pub quantity: f64,
    pub unit: String,
    pub rate: f64,
}

/// Transient, session-scoped "show secondary unit" flags, keyed by
/// `(document id, line-item position)`.
///
/// Owned by the view layer and passed alongside the canonical records,
/// never merged into them. Created empty per analysis session and
/// discarded on reset.
#[derive(Debug, Clone, Default)]
pub struct ToggleState {
    flags: HashMap<(String, usize), bool>,
}

impl ToggleState {
    pub fn new() -> Self {
        ToggleState::default()
    }

    /// Whether the item at `index` in `document_id` shows its secondary
    /// representation. Untouched items default to the primary one.
    pub fn is_secondary(&self, document_id: &str, index: usize) -> bool {
        self.flags
            .get(&(document_id.to_string(), index))
            .copied()
            .unwrap_or(false)
    }

    /// Flips the flag for one item and returns the new value.
    pub fn toggle(&mut self, document_id: &str, index: usize) -> bool {
        let flag = self
            .flags
            .entry((document_id.to_string(), index))
            .or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Re-keys a document's flags after an item was prepended, so each flag
    /// stays attached to the item it was set on.
    pub fn shift_after_prepend(&mut self, document_id: &str) {
        let shifted: HashMap<(String, usize), bool> = self
            .flags
            .drain()
            .map(|((doc, index), flag)| {
                if doc == document_id {
                    ((doc, index + 1), flag)
                } else {
                    ((doc, index), flag)
                }
            })
            .collect();
        self.flags = shifted;
    }

    pub fn clear(&mut self) {
        self.flags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
