//! Label translations from YAML language files

use std::collections::HashMap;
use std::path::Path;

use forms_core::prelude::*;
use forms_render::Translator;

/// Flat `key: text` catalog loaded from `{lang_dir}/{locale}.yaml`.
///
/// Unknown keys translate to themselves, so fieldsets with literal titles
/// render unchanged.
#[derive(Debug, Clone, Default)]
pub struct YamlTranslator {
    locale: String,
    strings: HashMap<String, String>,
}

impl YamlTranslator {
    pub fn from_yaml_str(locale: impl Into<String>, content: &str) -> Result<Self> {
        let strings: Option<HashMap<String, serde_yaml::Value>> = serde_yaml::from_str(content)?;
        let strings = strings
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_yaml::Value::String(text) => Some((key, text)),
                serde_yaml::Value::Number(n) => Some((key, n.to_string())),
                serde_yaml::Value::Bool(b) => Some((key, b.to_string())),
                _ => None,
            })
            .collect();

        Ok(Self {
            locale: locale.into(),
            strings,
        })
    }

    /// Load `{lang_dir}/{locale}.yaml`, falling back to an empty catalog.
    pub fn load(lang_dir: &Path, locale: &str) -> Self {
        let path = lang_dir.join(format!("{}.yaml", locale));

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No language file at {:?}: {}", path, e);
                return Self {
                    locale: locale.to_string(),
                    strings: HashMap::new(),
                };
            }
        };

        match Self::from_yaml_str(locale, &content) {
            Ok(translator) => {
                debug!("Loaded {} strings from {:?}", translator.len(), path);
                translator
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Self {
                    locale: locale.to_string(),
                    strings: HashMap::new(),
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Translator for YamlTranslator {
    fn translate(&self, key: &str) -> String {
        match self.strings.get(key) {
            Some(text) => text.clone(),
            None => {
                trace!("No {} translation for {:?}", self.locale, key);
                key.to_string()
            }
        }
    }
}
