//! Shelf Tab Strip Drag Engine
//!
//! Turns a stream of pointer samples on a tab into one of three gestures:
//! a click, an in-place reorder, or a pull-out detach into a new window.
//!
//! ```text
//! Idle
//!   ↓ begin
//! Armed ──────────────→ (release: click)
//!   ↓ moved past drag threshold
//! Dragging ⇄ Detached
//!   ↓ release            ↓ cancel / escape / capture lost
//! Committing           Cancelling
//!   ↓                    ↓
//! Idle ←─────────────────┘
//! ```
//!
//! The pure pieces ([`insertion_index`], [`plan_shifts`], [`should_detach`])
//! hold no state. [`DragController`] owns the single live [`DragSession`] and
//! drives the renderer only through [`RenderCommand`]s.

mod config;
mod controller;
mod detach;
mod error;
mod host;
mod insertion;
mod render;
mod session;
mod shift;
mod strip;

#[cfg(test)]
mod testing;

pub use config::DragConfig;
pub use controller::{DragController, DragOutcome};
pub use detach::should_detach;
pub use error::{CaptureError, DragError, RenderError};
pub use host::{Key, StripHost};
pub use insertion::{insertion_index, marker_offset};
pub use render::{RenderCommand, RenderSink};
pub use session::{DragPhase, DragSession};
pub use shift::{plan_shifts, DisplacementPlan, ShiftPlan};
pub use strip::TabStrip;

pub use shelf_tabs::{DetachDirective, Frame, Point, Size, Tab, TabId, TabSequence};

pub type Result<T> = std::result::Result<T, DragError>;
