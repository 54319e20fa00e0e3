//! Per-type field helpers
//!
//! Every helper except `hidden_field` wraps its control in a
//! `form-group` div carrying the field's column class, preceded by a label
//! when the field has a title.

use forms_core::prelude::*;
use forms_core::{escape, Visibility};

use crate::collaborators::Options;
use crate::datetime::format_datetime;
use crate::renderer::{FieldsetRenderer, ResolvedField};
use crate::request::RequestContext;

/// Class that activates the client-side rich text editor
pub const HTML_EDITOR_CLASS: &str = "js-html-editor";

impl FieldsetRenderer {
    fn wrap(&self, field: &ResolvedField<'_>, control: &str) -> String {
        let label = match field.title {
            Some(title) => self
                .form
                .label(field.key, &self.translator.translate(title)),
            None => String::new(),
        };

        format!(
            r#"<div class="form-group {}">{}{}</div>"#,
            field.size_class, label, control
        )
    }

    fn select_with(&self, field: &ResolvedField<'_>, options: &Options, selected: &str) -> String {
        let control = self
            .form
            .select(&field.name, options, selected, &field.attributes);
        self.wrap(field, &control)
    }

    pub(crate) fn text_field(&self, field: &ResolvedField<'_>) -> String {
        let control = self.form.input(&field.name, &field.value, &field.attributes);
        self.wrap(field, &control)
    }

    pub(crate) fn textarea_field(&self, field: &ResolvedField<'_>) -> String {
        let control = self
            .form
            .textarea(&field.name, &field.value, &field.attributes);
        self.wrap(field, &control)
    }

    pub(crate) fn hidden_field(&self, field: &ResolvedField<'_>) -> String {
        self.form.hidden(&field.name, &field.value, &field.attributes)
    }

    pub(crate) fn html_field(&self, field: &ResolvedField<'_>) -> String {
        let mut attributes = field.attributes.clone();
        let class = attributes.entry("class".to_string()).or_default();
        if !class.is_empty() {
            class.push(' ');
        }
        class.push_str(HTML_EDITOR_CLASS);

        let control = self.form.textarea(&field.name, &field.value, &attributes);
        self.wrap(field, &control)
    }

    pub(crate) fn select_field(&self, field: &ResolvedField<'_>) -> String {
        self.select_with(field, &field.property.options, &field.value)
    }

    pub(crate) fn template_select_field(&self, field: &ResolvedField<'_>) -> String {
        let theme = self.settings.theme();
        let options: Options = self
            .templates
            .templates(&theme)
            .into_iter()
            .filter(|template| template.is_html_template())
            .map(|template| (template.basename.clone(), template.basename))
            .collect();

        if options.is_empty() {
            debug!("No templates found for theme {:?}", theme);
        }

        self.select_with(field, &options, &field.value)
    }

    pub(crate) fn visibility_select_field(&self, field: &ResolvedField<'_>) -> String {
        let options: Options = Visibility::ALL
            .iter()
            .map(|v| {
                (
                    v.as_str().to_string(),
                    self.translator.translate(v.label_key()),
                )
            })
            .collect();

        let selected = if field.value.is_empty() {
            Visibility::default().as_str()
        } else {
            field.value.as_str()
        };

        self.select_with(field, &options, selected)
    }

    pub(crate) fn tags_field(&self, field: &ResolvedField<'_>) -> String {
        let control = format!(
            r#"<input type="text" value="{}" name="{}" class="form-control" data-role="tagsinput" />"#,
            escape(&field.value),
            escape(&field.name)
        );
        self.wrap(field, &control)
    }

    pub(crate) fn date_field(&self, field: &ResolvedField<'_>) -> String {
        let picker_id = format!("datetimepicker-{}", escape(&field.key.replace('.', "-")));
        let display = format_datetime(&field.value, &self.settings.date_format());

        let control = format!(
            concat!(
                r##"<div class="input-group date" id="{id}" data-target-input="nearest">"##,
                r##"<input name="{name}" type="text" class="form-control datetimepicker-input" data-target="#{id}" value="{value}" />"##,
                r##"<div class="input-group-append" data-target="#{id}" data-toggle="datetimepicker">"##,
                r##"<div class="input-group-text"><i class="far fa-calendar-alt"></i></div>"##,
                r##"</div>"##,
                r##"</div>"##,
            ),
            id = picker_id,
            name = escape(&field.name),
            value = escape(&display),
        );
        self.wrap(field, &control)
    }

    pub(crate) fn media_select_field(
        &self,
        field: &ResolvedField<'_>,
        request: &RequestContext,
    ) -> String {
        let options: Options = match request.entry_id() {
            Some(entry_id) => self
                .media
                .media(entry_id)
                .into_iter()
                .map(|file| (file.clone(), file))
                .collect(),
            None => {
                warn!(
                    "No entry id in request, media field {:?} has no options",
                    field.key
                );
                Options::new()
            }
        };

        self.select_with(field, &options, &field.value)
    }
}

