//! Folder tab payload
//!
//! What a file browser tab shows: one folder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderTab {
    /// Folder displayed by the tab
    pub path: PathBuf,
    /// Label shown on the strip
    pub title: String,
    /// When the tab was opened
    pub opened_at: DateTime<Utc>,
}

impl FolderTab {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let title = title_for(&path);

        Self {
            path,
            title,
            opened_at: Utc::now(),
        }
    }

    /// Get display title (with fallback to the full path)
    pub fn display_title(&self) -> String {
        if self.title.is_empty() {
            self.path.display().to_string()
        } else {
            self.title.clone()
        }
    }
}

fn title_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_folder_name() {
        let tab = FolderTab::new("/home/ada/Projects");
        assert_eq!(tab.title, "Projects");
        assert_eq!(tab.display_title(), "Projects");
    }

    #[test]
    fn test_root_falls_back_to_path() {
        let tab = FolderTab::new("/");
        assert!(tab.title.is_empty());
        assert_eq!(tab.display_title(), "/");
    }
}
