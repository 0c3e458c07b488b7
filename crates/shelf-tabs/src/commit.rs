//! Commit executor
//!
//! The two mutations a finished gesture may apply to a [`TabSequence`].
//! Every index is validated before the sequence is touched, so a commit is
//! either applied whole or not at all.

use serde::Serialize;

use crate::error::TabError;
use crate::geometry::{Frame, Point, Size};
use crate::sequence::TabSequence;
use crate::tab::{Tab, TabId};
use crate::Result;

/// Instructions for the host to materialize a new window around a detached tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetachDirective<P> {
    /// The detached tab; ownership moves to the new window
    pub tab: Tab<P>,
    /// Index the tab held in its source sequence, for putting it back if the
    /// new window never materializes
    pub origin_index: usize,
    /// Screen frame of the new window, centered under the release point
    pub frame: Frame,
}

impl<P> DetachDirective<P> {
    pub fn screen_position(&self) -> Point {
        self.frame.origin
    }

    pub fn size(&self) -> Size {
        self.frame.size
    }
}

pub struct CommitExecutor;

impl CommitExecutor {
    /// Move the tab at `from` so that it ends up at index `to`.
    ///
    /// `to` is a post-removal index: the tab is removed first and then
    /// inserted, so `move([A, B, C, D], 0, 2)` yields `[B, C, A, D]`.
    /// A `to` past the end is clamped to the last slot.
    pub fn move_tab<P>(sequence: &mut TabSequence<P>, from: usize, to: usize) -> Result<()> {
        let len = sequence.len();
        if from >= len {
            return Err(TabError::IndexOutOfRange { index: from, len });
        }

        let to = to.min(len - 1);
        if from == to {
            return Ok(());
        }

        sequence.relocate(from, to);

        tracing::info!(from, to, "Moved tab");

        Ok(())
    }

    /// Remove `tab_id` from `sequence` and describe the window that should
    /// receive it.
    ///
    /// Returns `None` without touching the sequence when the tab is the only
    /// one left or is not part of the sequence.
    pub fn detach<P>(
        sequence: &mut TabSequence<P>,
        tab_id: &TabId,
        release_point: Point,
        source_size: Size,
    ) -> Option<DetachDirective<P>> {
        let index = match sequence.position(tab_id) {
            Some(index) => index,
            None => {
                tracing::warn!(tab_id = %tab_id, "Detach requested for unknown tab");
                return None;
            }
        };

        let tab = match sequence.take(index) {
            Ok(tab) => tab,
            Err(e) => {
                tracing::warn!(tab_id = %tab_id, error = %e, "Detach precondition failed");
                return None;
            }
        };

        let frame = Frame::centered_on(release_point, source_size);

        tracing::info!(
            tab_id = %tab.id,
            x = frame.origin.x,
            y = frame.origin.y,
            "Detached tab"
        );

        Some(DetachDirective {
            tab,
            origin_index: index,
            frame,
        })
    }
}
