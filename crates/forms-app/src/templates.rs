//! Theme template discovery from the filesystem

use std::path::{Path, PathBuf};

use forms_core::prelude::*;
use forms_render::{TemplateFile, TemplateLister};

/// Lists `{themes_dir}/{theme}/templates/`.
#[derive(Debug, Clone)]
pub struct FsTemplateLister {
    themes_dir: PathBuf,
}

impl FsTemplateLister {
    pub fn new(themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
        }
    }

    pub fn templates_dir(&self, theme: &str) -> PathBuf {
        self.themes_dir.join(theme).join("templates")
    }
}

impl TemplateLister for FsTemplateLister {
    fn templates(&self, theme: &str) -> Vec<TemplateFile> {
        let dir = self.templates_dir(theme);
        match list_templates(&dir) {
            Ok(templates) => templates,
            Err(e) => {
                warn!("Cannot list templates in {:?}: {}", dir, e);
                Vec::new()
            }
        }
    }
}

fn list_templates(dir: &Path) -> Result<Vec<TemplateFile>> {
    let mut templates = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            templates.push(TemplateFile::dir(name));
        } else if file_type.is_file() {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let extension = path
                .extension()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            templates.push(TemplateFile::file(stem, extension));
        }
    }

    templates.sort_by(|a, b| a.basename.cmp(&b.basename));
    Ok(templates)
}
