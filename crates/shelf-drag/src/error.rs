//! Drag engine error types

use thiserror::Error;

/// Failure reported by a render sink. Always swallowed by the controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Render command rejected: {0}")]
    Rejected(String),

    #[error("Renderer unavailable")]
    Unavailable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("Pointer capture denied: {0}")]
    Denied(String),

    #[error("Pointer is already captured elsewhere")]
    Busy,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Tab error: {0}")]
    Tab(#[from] shelf_tabs::TabError),
}
