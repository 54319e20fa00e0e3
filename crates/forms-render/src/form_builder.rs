//! Default HTML form builder

use forms_core::escape;

use crate::collaborators::{Attributes, FormBuilder, Options};

/// Builds plain HTML5 controls.
///
/// Fixed attributes (`type`, `name`, `value`, ...) come first, then the
/// caller's attributes in insertion order. Caller attributes that collide
/// with a fixed one are skipped, except `type` on inputs and `method` on
/// forms, which override the defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormBuilder;

impl HtmlFormBuilder {
    pub fn new() -> Self {
        Self
    }
}

/// Render `attributes` as ` key="value"` pairs, leaving out `reserved` keys.
fn render_attributes(attributes: &Attributes, reserved: &[&str]) -> String {
    attributes
        .iter()
        .filter(|(key, _)| !reserved.contains(&key.as_str()))
        .map(|(key, value)| format!(r#" {}="{}""#, escape(key), escape(value)))
        .collect()
}

impl FormBuilder for HtmlFormBuilder {
    fn open(&self, action: &str, attributes: &Attributes) -> String {
        let method = attributes.get("method").map(String::as_str).unwrap_or("post");
        format!(
            r#"<form action="{}" method="{}"{}>"#,
            escape(action),
            escape(method),
            render_attributes(attributes, &["action", "method"])
        )
    }

    fn close(&self) -> String {
        "</form>".to_string()
    }

    fn label(&self, target: &str, text: &str) -> String {
        format!(r#"<label for="{}">{}</label>"#, escape(target), escape(text))
    }

    fn input(&self, name: &str, value: &str, attributes: &Attributes) -> String {
        let input_type = attributes.get("type").map(String::as_str).unwrap_or("text");
        format!(
            r#"<input type="{}" name="{}" value="{}"{}>"#,
            escape(input_type),
            escape(name),
            escape(value),
            render_attributes(attributes, &["type", "name", "value"])
        )
    }

    fn hidden(&self, name: &str, value: &str, attributes: &Attributes) -> String {
        format!(
            r#"<input type="hidden" name="{}" value="{}"{}>"#,
            escape(name),
            escape(value),
            render_attributes(attributes, &["type", "name", "value"])
        )
    }

    fn textarea(&self, name: &str, value: &str, attributes: &Attributes) -> String {
        format!(
            r#"<textarea name="{}"{}>{}</textarea>"#,
            escape(name),
            render_attributes(attributes, &["name", "value"]),
            escape(value)
        )
    }

    fn select(
        &self,
        name: &str,
        options: &Options,
        selected: &str,
        attributes: &Attributes,
    ) -> String {
        let mut html = format!(
            r#"<select name="{}"{}>"#,
            escape(name),
            render_attributes(attributes, &["name", "value"])
        );

        for (value, label) in options {
            let marker = if value == selected { " selected" } else { "" };
            html.push_str(&format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape(value),
                marker,
                escape(label)
            ));
        }

        html.push_str("</select>");
        html
    }
}
