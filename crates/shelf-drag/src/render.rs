//! Render command boundary
//!
//! The controller pushes commands into a [`RenderSink`] and never reads
//! anything back. Commands serialize as tagged JSON for UI layers that
//! receive them as events.

use serde::{Deserialize, Serialize};
use shelf_tabs::{Point, TabId};

use crate::error::RenderError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum RenderCommand {
    /// Start the drag visual: dim the source tab and float a ghost
    ShowGhost { tab_id: TabId, position: Point },
    MoveGhost { position: Point },
    HideGhost,
    SetDetachedStyle { detached: bool },
    ShowInsertionMarker { x: f64 },
    HideInsertionMarker,
    AnimateTabOffset { tab_id: TabId, offset: f64 },
    ResetAllOffsets,
    RestoreOpacity { tab_id: TabId },
}

pub trait RenderSink {
    fn submit(&mut self, command: RenderCommand) -> Result<(), RenderError>;
}

impl RenderSink for Vec<RenderCommand> {
    fn submit(&mut self, command: RenderCommand) -> Result<(), RenderError> {
        self.push(command);
        Ok(())
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn submit(&mut self, command: RenderCommand) -> Result<(), RenderError> {
        (**self).submit(command)
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn submit(&mut self, command: RenderCommand) -> Result<(), RenderError> {
        (**self).submit(command)
    }
}

/// Submit a command, logging and dropping any failure.
pub(crate) fn emit<S: RenderSink + ?Sized>(sink: &mut S, command: RenderCommand) {
    if let Err(e) = sink.submit(command) {
        tracing::warn!(error = %e, "Render command failed");
    }
}
