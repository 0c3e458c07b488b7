//! Top-level shell windows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use shelf_drag::{RenderSink, StripHost, TabStrip};
use shelf_tabs::Frame;

use crate::folder::FolderTab;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Platform side of window creation.
///
/// Each window gets its own render sink and strip host; the shell never
/// shares them between windows.
pub trait WindowBackend {
    type Sink: RenderSink;
    type Host: StripHost;

    /// Materialize a native window at `frame`
    fn open_window(&mut self, id: &WindowId, frame: Frame) -> Result<(Self::Sink, Self::Host)>;

    fn close_window(&mut self, _id: &WindowId) {}
}

pub struct ShellWindow<S, H> {
    pub(crate) id: WindowId,
    pub(crate) frame: Frame,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) strip: TabStrip<FolderTab, S, H>,
}

impl<S: RenderSink, H: StripHost> ShellWindow<S, H> {
    pub fn id(&self) -> &WindowId {
        &self.id
    }

    /// Frame the window was opened with
    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn strip(&self) -> &TabStrip<FolderTab, S, H> {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut TabStrip<FolderTab, S, H> {
        &mut self.strip
    }

    pub fn tab_count(&self) -> usize {
        self.strip.sequence().len()
    }
}
