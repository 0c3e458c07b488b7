//! Host collaborator interface
//!
//! The window that embeds a tab strip supplies layout metrics and the pointer
//! capture. The drag engine reads from the host but never from the renderer.

use serde::{Deserialize, Serialize};
use shelf_tabs::{Frame, TabId};

use crate::error::CaptureError;

/// Keys the engine reacts to while a session is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Escape,
    Other,
}

pub trait StripHost {
    /// Current laid-out width of a tab
    fn tab_width(&self, tab_id: &TabId) -> f64;

    /// Horizontal position of the strip's left edge in container coordinates
    fn strip_left(&self) -> f64 {
        0.0
    }

    /// Screen frame of the window containing the strip
    fn container_frame(&self) -> Frame;

    /// Take exclusive pointer capture for the duration of a session
    fn acquire_capture(&mut self) -> Result<(), CaptureError>;

    fn release_capture(&mut self);

    /// Route key and capture-loss events to the strip while a session is live
    fn subscribe_session_input(&mut self) {}

    fn unsubscribe_session_input(&mut self) {}
}
