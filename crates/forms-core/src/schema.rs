//! Fieldset schema: sections, fields and their properties
//!
//! Fieldsets are usually authored as YAML:
//!
//! ```yaml
//! title: Default
//! sections:
//!   main:
//!     title: admin_main
//!     fields:
//!       title:
//!         title: admin_title
//!         type: text
//!         size: 12
//! ```
//!
//! Scalar YAML values (numbers, booleans) are accepted wherever the form
//! expects text, since fieldset authors rarely quote `size: 6` or `rows: 4`.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::values::{kind_of, value_text};

/// A complete fieldset: ordered sections, each rendered as one tab.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Fieldset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub sections: IndexMap<String, Section>,
}

impl Fieldset {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::from_value(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(content)?)
    }

    /// Build a fieldset from an already parsed document.
    ///
    /// An empty document is an empty fieldset. Anything other than a mapping
    /// at the top level, or a `sections` entry that is not a mapping, is a
    /// schema error.
    pub fn from_value(value: Value) -> Result<Self> {
        match &value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => match map.get("sections") {
                None | Some(Value::Null) | Some(Value::Object(_)) => {}
                Some(other) => {
                    return Err(Error::schema(format!(
                        "sections must be a mapping, found {}",
                        kind_of(other)
                    )))
                }
            },
            other => {
                return Err(Error::schema(format!(
                    "expected a mapping at the top level, found {}",
                    kind_of(other)
                )))
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Number of fields across all sections
    pub fn field_count(&self) -> usize {
        self.sections.values().map(|s| s.fields.len()).sum()
    }
}

/// A titled group of fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Section {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub fields: IndexMap<String, FieldProperty>,
}

/// Declared properties of one field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FieldProperty {
    #[serde(rename = "type", default)]
    pub field_type: FieldType,

    /// Choices for `select`, value → label
    #[serde(default, deserialize_with = "scalar_map")]
    pub options: IndexMap<String, String>,

    /// Extra HTML attributes for the control
    #[serde(default, deserialize_with = "attribute_map")]
    pub attributes: IndexMap<String, String>,

    /// Key into the column size table, e.g. `6/12`
    #[serde(default, deserialize_with = "scalar_opt")]
    pub size: Option<String>,

    /// Default value when the entry has none
    #[serde(default, deserialize_with = "scalar_opt")]
    pub value: Option<String>,

    /// Label text (a translation key). Empty or `false` means no label.
    #[serde(default, deserialize_with = "title_opt")]
    pub title: Option<String>,
}

impl FieldProperty {
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.insert(value.into(), label.into());
        self
    }
}

/// Supported field kinds. Anything unrecognized is a plain text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Textarea,
    Hidden,
    Html,
    Select,
    TemplateSelect,
    VisibilitySelect,
    Tags,
    Datetimepicker,
    MediaSelect,
    #[default]
    #[serde(other)]
    Text,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Textarea => "textarea",
            FieldType::Hidden => "hidden",
            FieldType::Html => "html",
            FieldType::Select => "select",
            FieldType::TemplateSelect => "template_select",
            FieldType::VisibilitySelect => "visibility_select",
            FieldType::Tags => "tags",
            FieldType::Datetimepicker => "datetimepicker",
            FieldType::MediaSelect => "media_select",
            FieldType::Text => "text",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publication state of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Draft,
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub const ALL: [Visibility; 3] = [Visibility::Draft, Visibility::Visible, Visibility::Hidden];

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Draft => "draft",
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }

    /// Translation key of the option label
    pub fn label_key(&self) -> &'static str {
        match self {
            Visibility::Draft => "admin_entries_draft",
            Visibility::Visible => "admin_entries_visible",
            Visibility::Hidden => "admin_entries_hidden",
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Scalar coercion helpers
// ─────────────────────────────────────────────────────────────────

fn scalar_opt<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_text))
}

fn title_opt<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(false)) => None,
        other => other
            .as_ref()
            .and_then(value_text)
            .filter(|text| !text.is_empty()),
    })
}

fn scalar_map<'de, D>(deserializer: D) -> std::result::Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IndexMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| value_text(&value).map(|text| (key, text)))
        .collect())
}

/// Attributes follow HTML boolean semantics: `true` renders as
/// `name="name"`, `false` drops the attribute.
fn attribute_map<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IndexMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Bool(true) => Some((key.clone(), key)),
            Value::Bool(false) => None,
            other => value_text(&other).map(|text| (key, text)),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_FIELDSET: &str = r#"
title: Page
sections:
  main:
    title: Main
    fields:
      title:
        title: admin_title
        type: text
        size: 12
      content:
        title: admin_content
        type: html
        attributes:
          rows: 8
          required: true
          spellcheck: false
  seo:
    title: SEO
    fields:
      seo.title:
        type: text
        size: 6/12
"#;

    #[test]
    fn test_parse_yaml_fieldset_preserves_order() {
        let fieldset = Fieldset::from_yaml_str(PAGE_FIELDSET).unwrap();
        assert_eq!(fieldset.title.as_deref(), Some("Page"));

        let keys: Vec<_> = fieldset.sections.keys().cloned().collect();
        assert_eq!(keys, vec!["main", "seo"]);

        let main = &fieldset.sections["main"];
        let fields: Vec<_> = main.fields.keys().cloned().collect();
        assert_eq!(fields, vec!["title", "content"]);
        assert_eq!(fieldset.field_count(), 3);
    }

    #[test]
    fn test_numeric_size_coerced_to_text() {
        let fieldset = Fieldset::from_yaml_str(PAGE_FIELDSET).unwrap();
        let title = &fieldset.sections["main"].fields["title"];
        assert_eq!(title.size.as_deref(), Some("12"));
        assert_eq!(title.field_type, FieldType::Text);
    }

    #[test]
    fn test_boolean_attributes() {
        let fieldset = Fieldset::from_yaml_str(PAGE_FIELDSET).unwrap();
        let content = &fieldset.sections["main"].fields["content"];
        assert_eq!(content.field_type, FieldType::Html);
        assert_eq!(content.attributes.get("rows").map(String::as_str), Some("8"));
        assert_eq!(
            content.attributes.get("required").map(String::as_str),
            Some("required")
        );
        assert!(!content.attributes.contains_key("spellcheck"));
    }

    #[test]
    fn test_unknown_type_falls_back_to_text() {
        let yaml = r#"
sections:
  main:
    title: Main
    fields:
      color:
        type: colorpicker
      plain: {}
"#;
        let fieldset = Fieldset::from_yaml_str(yaml).unwrap();
        let fields = &fieldset.sections["main"].fields;
        assert_eq!(fields["color"].field_type, FieldType::Text);
        assert_eq!(fields["plain"].field_type, FieldType::Text);
    }

    #[test]
    fn test_all_known_types_parse() {
        for ty in [
            "textarea",
            "hidden",
            "html",
            "select",
            "template_select",
            "visibility_select",
            "tags",
            "datetimepicker",
            "media_select",
            "text",
        ] {
            let parsed: FieldType = serde_yaml::from_str(ty).unwrap();
            assert_eq!(parsed.as_str(), ty);
        }
    }

    #[test]
    fn test_missing_sections_is_empty() {
        let fieldset = Fieldset::from_yaml_str("title: Empty").unwrap();
        assert!(fieldset.sections.is_empty());
    }

    #[test]
    fn test_non_mapping_schema_rejected() {
        let err = Fieldset::from_yaml_str("- just\n- a list\n").unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
        assert!(err.to_string().contains("found a list"));

        let err = Fieldset::from_json_str(r#"{"sections": ["main"]}"#).unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
        assert!(err.to_string().contains("sections must be a mapping"));

        let err = Fieldset::from_yaml_str("just text").unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }

    #[test]
    fn test_empty_document_is_empty_fieldset() {
        let fieldset = Fieldset::from_yaml_str("").unwrap();
        assert_eq!(fieldset, Fieldset::default());
    }

    #[test]
    fn test_falsy_titles_mean_no_label() {
        let yaml = r#"
sections:
  main:
    title: Main
    fields:
      a:
        title: ''
      b:
        title: false
      c:
        title: ~
      d:
        title: 0
"#;
        let fieldset = Fieldset::from_yaml_str(yaml).unwrap();
        let fields = &fieldset.sections["main"].fields;
        assert_eq!(fields["a"].title, None);
        assert_eq!(fields["b"].title, None);
        assert_eq!(fields["c"].title, None);
        assert_eq!(fields["d"].title.as_deref(), Some("0"));
    }

    #[test]
    fn test_select_options_from_json() {
        let json = r#"{"sections": {"main": {"title": "Main", "fields": {
            "layout": {"type": "select", "options": {"wide": "Wide", "narrow": "Narrow", "2": 2}}
        }}}}"#;
        let fieldset = Fieldset::from_json_str(json).unwrap();
        let layout = &fieldset.sections["main"].fields["layout"];
        let options: Vec<_> = layout
            .options
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            options,
            vec![("wide", "Wide"), ("narrow", "Narrow"), ("2", "2")]
        );
    }

    #[test]
    fn test_visibility_labels() {
        assert_eq!(Visibility::default(), Visibility::Visible);
        assert_eq!(Visibility::Draft.label_key(), "admin_entries_draft");
        assert_eq!(
            Visibility::ALL.map(|v| v.as_str()),
            ["draft", "visible", "hidden"]
        );
    }
}
