//! # forms-render - Fieldset Form Renderer
//!
//! Turns a [`Fieldset`](forms_core::Fieldset) and an entry's
//! [`Values`](forms_core::Values) into a tabbed admin form.
//!
//! The renderer owns no I/O. Everything it needs from the outside world is
//! injected through the traits in [`collaborators`]:
//!
//! - [`FormBuilder`] - builds individual controls ([`HtmlFormBuilder`] by default)
//! - [`Translator`] - label text
//! - [`CsrfTokenProvider`] - CSRF name/value pair
//! - [`MediaLister`] - files attached to the edited entry
//! - [`TemplateLister`] - templates of the active theme
//! - [`SettingsRegistry`] - active theme and date display format
//!
//! ```ignore
//! let renderer = FieldsetRenderer::new(collaborators);
//! let html = renderer.render(&fieldset, &values, &RequestContext::from_query_string("id=about"));
//! ```

pub mod collaborators;
pub mod datetime;
mod fields;
pub mod form_builder;
pub mod renderer;
pub mod request;

pub use collaborators::{
    Attributes, CsrfToken, CsrfTokenProvider, FileKind, FormBuilder, IdentityTranslator,
    MediaLister, Options, SettingsRegistry, TemplateFile, TemplateLister, Translator,
};
pub use datetime::{format_datetime, parse_datetime, DEFAULT_DATE_FORMAT};
pub use fields::HTML_EDITOR_CLASS;
pub use form_builder::HtmlFormBuilder;
pub use renderer::{Collaborators, FieldsetRenderer, DEFAULT_FIELD_CLASS, MAIN_SECTION};
pub use request::{RequestContext, ENTRY_ID_PARAM};
