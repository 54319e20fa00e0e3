//! Settings parser for .fsform/config.toml

use std::path::{Path, PathBuf};

use forms_core::prelude::*;
use forms_render::{SettingsRegistry, DEFAULT_DATE_FORMAT, DEFAULT_FIELD_CLASS};
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "config.toml";
const FSFORM_DIR: &str = ".fsform";

/// Application settings (.fsform/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub site: SiteSettings,

    #[serde(default)]
    pub paths: PathSettings,

    #[serde(default)]
    pub csrf: CsrfSettings,

    #[serde(default)]
    pub form: FormSettings,
}

/// Site-wide display settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteSettings {
    /// Active theme, whose templates feed `template_select`
    #[serde(default = "default_theme")]
    pub theme: String,

    /// strftime format for date picker values
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Language file to load from `paths.lang`
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            date_format: default_date_format(),
            locale: default_locale(),
        }
    }
}

/// Site directories, relative to the project root unless absolute
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PathSettings {
    #[serde(default = "default_themes_dir")]
    pub themes: PathBuf,

    /// Per-entry media folders live under `{media}/{entry id}/`
    #[serde(default = "default_media_dir")]
    pub media: PathBuf,

    #[serde(default = "default_lang_dir")]
    pub lang: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            themes: default_themes_dir(),
            media: default_media_dir(),
            lang: default_lang_dir(),
        }
    }
}

impl PathSettings {
    /// Resolve the configured directories against `project_path`.
    pub fn resolve(&self, project_path: &Path) -> PathSettings {
        PathSettings {
            themes: project_path.join(&self.themes),
            media: project_path.join(&self.media),
            lang: project_path.join(&self.lang),
        }
    }
}

/// Field names of the CSRF hidden inputs
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CsrfSettings {
    #[serde(default = "default_csrf_name_key")]
    pub name_key: String,

    #[serde(default = "default_csrf_value_key")]
    pub value_key: String,
}

impl Default for CsrfSettings {
    fn default() -> Self {
        Self {
            name_key: default_csrf_name_key(),
            value_key: default_csrf_value_key(),
        }
    }
}

/// Form rendering settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FormSettings {
    /// Class every control starts with
    #[serde(default = "default_field_class")]
    pub field_class: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            field_class: default_field_class(),
        }
    }
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_locale() -> String {
    "en_US".to_string()
}

fn default_themes_dir() -> PathBuf {
    PathBuf::from("site/themes")
}

fn default_media_dir() -> PathBuf {
    PathBuf::from("site/uploads/entries")
}

fn default_lang_dir() -> PathBuf {
    PathBuf::from("site/lang")
}

fn default_csrf_name_key() -> String {
    "csrf_name".to_string()
}

fn default_csrf_value_key() -> String {
    "csrf_value".to_string()
}

fn default_field_class() -> String {
    DEFAULT_FIELD_CLASS.to_string()
}

impl SettingsRegistry for SiteSettings {
    fn theme(&self) -> String {
        self.theme.clone()
    }

    fn date_format(&self) -> String {
        self.date_format.clone()
    }
}

/// Path of the settings file for `project_path`
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(FSFORM_DIR).join(CONFIG_FILENAME)
}

/// Load settings from .fsform/config.toml
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the default config file in .fsform/
///
/// An existing config file is left untouched. Returns the config path.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let fsform_dir = project_path.join(FSFORM_DIR);

    if !fsform_dir.exists() {
        std::fs::create_dir_all(&fsform_dir)
            .map_err(|e| Error::config(format!("Failed to create .fsform dir: {}", e)))?;
    }

    let config_path = fsform_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Fieldset Forms Configuration

[site]
theme = "default"
date_format = "%Y-%m-%d %H:%M"   # strftime syntax
locale = "en_US"                 # loads {paths.lang}/{locale}.yaml

[paths]
themes = "site/themes"           # templates: {themes}/{theme}/templates/*.html
media = "site/uploads/entries"   # media: {media}/{entry id}/*
lang = "site/lang"

[csrf]
name_key = "csrf_name"
value_key = "csrf_value"

[form]
field_class = "form-control"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}
