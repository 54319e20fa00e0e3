//! Fieldset Forms Library
//!
//! Renders admin panel forms from declarative fieldset schemas. The work is
//! split across the workspace crates, re-exported here:
//!
//! - [`core`] - schema, values, naming/sizing rules, errors, logging
//! - [`render`] - the renderer and its collaborator traits
//! - [`app`] - settings, filesystem collaborators and file loaders

use std::path::PathBuf;

pub use forms_app as app;
pub use forms_core as core;
pub use forms_render as render;

use forms_core::prelude::*;
use forms_render::RequestContext;

/// Everything needed to render one fieldset from disk.
#[derive(Debug, Clone)]
pub struct RenderJob {
    /// Fieldset schema file (`.yaml`, `.yml`, `.json`)
    pub fieldset: PathBuf,
    /// Entry file providing current values (`.yaml`, `.json`, `.md`)
    pub entry: Option<PathBuf>,
    /// Entry id, used to look up the entry's media
    pub entry_id: Option<String>,
    /// Project root holding `.fsform/config.toml` and the site directories
    pub project: PathBuf,
}

/// Load the job's files and render the form.
pub fn render_job(job: &RenderJob) -> Result<String> {
    let settings = forms_app::load_settings(&job.project);
    let fieldset = forms_app::load_fieldset(&job.fieldset)?;
    let values = match &job.entry {
        Some(entry) => forms_app::load_values(entry)?,
        None => Default::default(),
    };

    let mut request = RequestContext::new();
    if let Some(id) = &job.entry_id {
        request = request.with_query(forms_render::ENTRY_ID_PARAM, id.clone());
    }

    let renderer = forms_app::build_renderer(&job.project, &settings);
    let html = renderer.render(&fieldset, &values, &request);

    info!(
        "Rendered {:?} ({} fields, {} bytes)",
        job.fieldset,
        fieldset.field_count(),
        html.len()
    );
    Ok(html)
}
