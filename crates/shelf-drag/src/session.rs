//! Drag session state
//!
//! One session exists per gesture, from pointer-down to cleanup.

use serde::{Deserialize, Serialize};
use shelf_tabs::{Point, TabId};

use crate::shift::DisplacementPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragPhase {
    /// No gesture in progress
    Idle,
    /// Pointer is down but has not moved past the drag threshold
    Armed,
    /// Reordering within the strip
    Dragging,
    /// Pulled off the strip; release would open a new window
    Detached,
    /// Applying the result of a release
    Committing,
    /// Rolling back visuals after a cancel
    Cancelling,
}

impl DragPhase {
    pub fn can_transition_to(&self, target: DragPhase) -> bool {
        match (self, target) {
            (DragPhase::Idle, DragPhase::Armed) => true,
            (DragPhase::Armed, DragPhase::Dragging) => true,
            (DragPhase::Dragging, DragPhase::Detached) => true,
            (DragPhase::Detached, DragPhase::Dragging) => true,
            (DragPhase::Armed | DragPhase::Dragging | DragPhase::Detached, DragPhase::Committing) => {
                true
            }
            (DragPhase::Armed | DragPhase::Dragging | DragPhase::Detached, DragPhase::Cancelling) => {
                true
            }
            (DragPhase::Committing | DragPhase::Cancelling, DragPhase::Idle) => true,
            _ => false,
        }
    }

    /// True once the press has turned into a visible drag
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging | DragPhase::Detached)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DragPhase::Idle => "idle",
            DragPhase::Armed => "armed",
            DragPhase::Dragging => "dragging",
            DragPhase::Detached => "detached",
            DragPhase::Committing => "committing",
            DragPhase::Cancelling => "cancelling",
        }
    }
}

impl std::fmt::Display for DragPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct DragSession {
    /// Tab under the pointer at press time
    pub(crate) tab_id: TabId,
    /// Index of the dragged tab, re-read from the sequence when dragging starts
    pub(crate) origin_index: usize,
    pub(crate) start: Point,
    pub(crate) current: Point,
    pub(crate) phase: DragPhase,
    /// Last insertion index reported while reordering
    pub(crate) last_index: Option<usize>,
    pub(crate) plan: DisplacementPlan,
    pub(crate) ghost_shown: bool,
}

impl DragSession {
    pub(crate) fn arm(tab_id: TabId, origin_index: usize, start: Point) -> Self {
        Self {
            tab_id,
            origin_index,
            start,
            current: start,
            phase: DragPhase::Armed,
            last_index: None,
            plan: DisplacementPlan::default(),
            ghost_shown: false,
        }
    }

    pub(crate) fn transition_to(&mut self, phase: DragPhase) {
        debug_assert!(
            self.phase.can_transition_to(phase),
            "invalid drag transition {} -> {}",
            self.phase,
            phase
        );

        tracing::debug!(
            tab_id = %self.tab_id,
            from = %self.phase,
            to = %phase,
            "Drag phase transition"
        );

        self.phase = phase;
    }

    pub fn tab_id(&self) -> &TabId {
        &self.tab_id
    }

    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    /// Pointer travel since the press
    pub fn displacement(&self) -> Point {
        self.current - self.start
    }

    pub fn plan(&self) -> &DisplacementPlan {
        &self.plan
    }
}
