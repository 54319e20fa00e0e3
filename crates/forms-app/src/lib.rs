//! # forms-app - Fieldset Form Application Layer
//!
//! Default, filesystem-backed collaborators for the renderer and the loaders
//! that feed it:
//!
//! - [`Settings`] - `.fsform/config.toml` (theme, date format, locale, paths)
//! - [`FsTemplateLister`] - `{themes}/{theme}/templates/`
//! - [`FsMediaLister`] - `{media}/{entry id}/`
//! - [`YamlTranslator`] - `{lang}/{locale}.yaml`
//! - [`RandomCsrfProvider`] - a fresh token pair per form
//! - [`load_fieldset()`], [`load_values()`] - schema and entry files
//!
//! [`build_renderer()`] wires all of them into a ready
//! [`FieldsetRenderer`](forms_render::FieldsetRenderer).

pub mod csrf;
pub mod loader;
pub mod media;
pub mod settings;
pub mod templates;
pub mod translations;

use std::path::Path;

use forms_core::prelude::*;
use forms_render::{Collaborators, FieldsetRenderer, HtmlFormBuilder};

pub use csrf::RandomCsrfProvider;
pub use loader::{load_fieldset, load_values, parse_markdown_entry, CONTENT_KEY};
pub use media::FsMediaLister;
pub use settings::{
    config_path, init_config_dir, load_settings, CsrfSettings, FormSettings, PathSettings,
    Settings, SiteSettings,
};
pub use templates::FsTemplateLister;
pub use translations::YamlTranslator;

/// Build a renderer backed by the project's files and settings.
///
/// Relative paths in `settings` resolve against `project_path`.
pub fn build_renderer(project_path: &Path, settings: &Settings) -> FieldsetRenderer {
    let paths = settings.paths.resolve(project_path);
    debug!(
        "Building renderer: theme={:?} locale={:?} themes={:?} media={:?}",
        settings.site.theme, settings.site.locale, paths.themes, paths.media
    );

    let collaborators = Collaborators {
        form: Box::new(HtmlFormBuilder::new()),
        translator: Box::new(YamlTranslator::load(&paths.lang, &settings.site.locale)),
        csrf: Box::new(RandomCsrfProvider::from_settings(&settings.csrf)),
        media: Box::new(FsMediaLister::new(paths.media)),
        templates: Box::new(FsTemplateLister::new(paths.themes)),
        settings: Box::new(settings.site.clone()),
    };

    FieldsetRenderer::new(collaborators).with_field_class(settings.form.field_class.clone())
}
