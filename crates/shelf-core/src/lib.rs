//! Shelf Core
//!
//! Coordination layer for the Shelf file browser shell. Each top-level
//! window owns a tab strip; a tab pulled out of one strip lands in a freshly
//! opened window of its own.

mod config;
mod error;
mod folder;
mod shell;
mod window;

pub use config::ShellConfig;
pub use error::CoreError;
pub use folder::FolderTab;
pub use shell::{Shell, ShellEvent};
pub use window::{ShellWindow, WindowBackend, WindowId};

// Re-export the tab and drag layers
pub use shelf_drag::{
    DragConfig, DragError, DragOutcome, DragPhase, Key, RenderCommand, RenderError, RenderSink,
    StripHost, TabStrip,
};
pub use shelf_tabs::{DetachDirective, Frame, Point, Size, Tab, TabError, TabId, TabSequence};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed (tests, embedding hosts)
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
