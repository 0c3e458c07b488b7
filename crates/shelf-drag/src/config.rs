//! Drag gesture configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;
pub const DEFAULT_DETACH_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Pointer travel on either axis before a press becomes a drag
    pub drag_threshold: f64,
    /// Vertical travel before a drag becomes a detach, measured in either
    /// direction: pulling above the strip detaches just like pulling below
    /// it. Fixed, not derived from tab height.
    pub detach_threshold: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            detach_threshold: DEFAULT_DETACH_THRESHOLD,
        }
    }
}
