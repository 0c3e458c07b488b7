//! Shift planning for the tabs a drag passes over

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use shelf_tabs::TabId;

/// Signed offsets for every tab except the dragged one, by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShiftPlan {
    offsets: BTreeMap<usize, f64>,
}

impl ShiftPlan {
    /// Offset for the tab at `index`; `None` for the dragged tab or an index
    /// outside the strip.
    pub fn offset(&self, index: usize) -> Option<f64> {
        self.offsets.get(&index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.offsets.iter().map(|(index, offset)| (*index, *offset))
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Plan where every non-dragged tab should sit while the dragged tab hovers
/// over `candidate`.
///
/// Tabs the drag has passed over slide one `width` towards the vacated slot:
/// left when dragging right, right when dragging left. Everything else rests
/// at zero. A candidate past the last tab is treated as the last tab.
pub fn plan_shifts(origin: usize, candidate: usize, width: f64, count: usize) -> ShiftPlan {
    let candidate = candidate.min(count.saturating_sub(1));

    let offsets = (0..count)
        .filter(|index| *index != origin)
        .map(|index| {
            let offset = if origin < candidate && index > origin && index <= candidate {
                -width
            } else if candidate < origin && index >= candidate && index < origin {
                width
            } else {
                0.0
            };
            (index, offset)
        })
        .collect();

    ShiftPlan { offsets }
}

/// A [`ShiftPlan`] resolved against the live tab ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplacementPlan {
    offsets: HashMap<TabId, f64>,
}

impl DisplacementPlan {
    pub fn resolve(plan: &ShiftPlan, ids: &[TabId]) -> Self {
        let offsets = plan
            .iter()
            .filter_map(|(index, offset)| ids.get(index).map(|id| (id.clone(), offset)))
            .collect();
        Self { offsets }
    }

    /// Current offset of a tab; zero for tabs the plan does not mention.
    pub fn offset(&self, id: &TabId) -> f64 {
        self.offsets.get(id).copied().unwrap_or(0.0)
    }

    pub fn is_at_rest(&self) -> bool {
        self.offsets.values().all(|offset| *offset == 0.0)
    }

    pub fn clear(&mut self) {
        self.offsets.clear();
    }
}
