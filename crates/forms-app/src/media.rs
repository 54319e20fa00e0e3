//! Entry media discovery from the filesystem

use std::path::{Component, Path, PathBuf};

use forms_core::prelude::*;
use forms_render::MediaLister;

/// Lists the files in `{media_dir}/{entry id}/`.
#[derive(Debug, Clone)]
pub struct FsMediaLister {
    media_dir: PathBuf,
}

impl FsMediaLister {
    pub fn new(media_dir: impl Into<PathBuf>) -> Self {
        Self {
            media_dir: media_dir.into(),
        }
    }

    /// Media folder of `entry_id`, or `None` if the id would escape the
    /// media root.
    pub fn entry_dir(&self, entry_id: &str) -> Option<PathBuf> {
        let relative = Path::new(entry_id.trim_matches('/'));
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        (contained && !entry_id.trim_matches('/').is_empty())
            .then(|| self.media_dir.join(relative))
    }
}

impl MediaLister for FsMediaLister {
    fn media(&self, entry_id: &str) -> Vec<String> {
        let Some(dir) = self.entry_dir(entry_id) else {
            warn!("Rejected media lookup for entry id {:?}", entry_id);
            return Vec::new();
        };

        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("No media for {:?} in {:?}: {}", entry_id, dir, e);
                return Vec::new();
            }
        };

        let mut files: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        files.sort();
        files
    }
}
