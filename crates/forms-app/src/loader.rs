//! Loading fieldsets and entry values from disk
//!
//! Fieldsets are `.yaml`/`.yml`/`.json`. Entries may also be Markdown files
//! whose values live in `---` delimited YAML front matter; the body below the
//! front matter is exposed as the `content` value unless the front matter
//! already defines one.

use std::path::Path;

use forms_core::prelude::*;
use forms_core::{Fieldset, Values};
use serde_json::Value;

/// Value key that receives a Markdown entry's body
pub const CONTENT_KEY: &str = "content";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
    Markdown,
}

fn detect_format(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "yaml" | "yml" => Some(Format::Yaml),
        "json" => Some(Format::Json),
        "md" | "markdown" => Some(Format::Markdown),
        _ => None,
    }
}

fn read(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::not_found(path));
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Load a fieldset schema from a YAML or JSON file.
pub fn load_fieldset(path: &Path) -> Result<Fieldset> {
    let fieldset = match detect_format(path) {
        Some(Format::Yaml) => Fieldset::from_yaml_str(&read(path)?)?,
        Some(Format::Json) => Fieldset::from_json_str(&read(path)?)?,
        _ => return Err(Error::unsupported_format(path)),
    };

    debug!(
        "Loaded fieldset {:?}: {} sections, {} fields",
        path,
        fieldset.sections.len(),
        fieldset.field_count()
    );
    Ok(fieldset)
}

/// Load entry values from a YAML, JSON or Markdown file.
pub fn load_values(path: &Path) -> Result<Values> {
    let content = match detect_format(path) {
        Some(format) => (format, read(path)?),
        None => return Err(Error::unsupported_format(path)),
    };

    let values = match content {
        (Format::Yaml, text) => parse_yaml_values(&text)?,
        (Format::Json, text) => Values::from_value(serde_json::from_str(&text)?)?,
        (Format::Markdown, text) => parse_markdown_entry(&text)?,
    };

    debug!("Loaded {} values from {:?}", values.len(), path);
    Ok(values)
}

fn parse_yaml_values(text: &str) -> Result<Values> {
    let value: Value = serde_yaml::from_str(text)?;
    Values::from_value(value)
}

/// Split a Markdown entry into front matter values plus its body.
pub fn parse_markdown_entry(text: &str) -> Result<Values> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let Some((front_matter, body)) = split_front_matter(text) else {
        let mut values = Values::new();
        values.insert(CONTENT_KEY, text.to_string());
        return Ok(values);
    };

    let mut values = parse_yaml_values(front_matter)
        .map_err(|e| Error::entry(format!("front matter: {}", e)))?;

    if !values.contains(CONTENT_KEY) {
        values.insert(CONTENT_KEY, body.trim_start_matches(['\r', '\n']).to_string());
    }
    Ok(values)
}

/// Returns `(front matter, body)` when `text` opens with a `---` line that
/// is closed by another `---` line.
fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let rest = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let front = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((front, body));
        }
        offset += line.len();
    }
    None
}
