//! Core error types

use shelf_tabs::Tab;
use thiserror::Error;

use crate::folder::FolderTab;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] shelf_tabs::TabError),

    #[error("Drag error: {0}")]
    Drag(#[from] shelf_drag::DragError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Window not found: {0}")]
    WindowNotFound(String),

    #[error("Window backend error: {0}")]
    Backend(String),

    /// A detached tab could neither get a window of its own nor go back to
    /// its source window. The tab is handed back to the caller.
    #[error("Detached tab {} has no window: {cause}", .tab.id)]
    DetachFailed {
        tab: Box<Tab<FolderTab>>,
        #[source]
        cause: Box<CoreError>,
    },
}
