//! Services the renderer depends on.
//!
//! Each concern the form needs from the surrounding admin panel is a small
//! trait injected at construction time: markup building, translation, CSRF
//! tokens, media and template discovery, and site settings. The renderer
//! never reaches for globals, so every dependency can be swapped or mocked.

use indexmap::IndexMap;

/// HTML attributes in render order.
pub type Attributes = IndexMap<String, String>;

/// Select options, value → label, in render order.
pub type Options = IndexMap<String, String>;

/// Builds individual form controls.
///
/// Implementations are responsible for escaping every name, value and label
/// they are handed.
pub trait FormBuilder: Send + Sync {
    fn open(&self, action: &str, attributes: &Attributes) -> String;

    fn close(&self) -> String;

    fn label(&self, target: &str, text: &str) -> String;

    fn input(&self, name: &str, value: &str, attributes: &Attributes) -> String;

    fn hidden(&self, name: &str, value: &str, attributes: &Attributes) -> String;

    fn textarea(&self, name: &str, value: &str, attributes: &Attributes) -> String;

    fn select(
        &self,
        name: &str,
        options: &Options,
        selected: &str,
        attributes: &Attributes,
    ) -> String;
}

/// Translates label keys into display text.
#[cfg_attr(test, mockall::automock)]
pub trait Translator: Send + Sync {
    /// Display text for `key`. Unknown keys should come back unchanged.
    fn translate(&self, key: &str) -> String;
}

/// Translator that echoes keys back, for forms whose titles are already text.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// One CSRF name/value pair, emitted as two hidden inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    pub name_key: String,
    pub name: String,
    pub value_key: String,
    pub value: String,
}

/// Issues CSRF tokens. A fresh pair is requested for every rendered form.
#[cfg_attr(test, mockall::automock)]
pub trait CsrfTokenProvider: Send + Sync {
    fn token(&self) -> CsrfToken;
}

/// Lists media files attached to an entry.
#[cfg_attr(test, mockall::automock)]
pub trait MediaLister: Send + Sync {
    /// File names attached to `entry_id`; empty when there are none.
    fn media(&self, entry_id: &str) -> Vec<String>;
}

/// Kind of a theme directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
}

/// A file or directory in a theme's template folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Name without extension, as entries refer to their template
    pub basename: String,
    pub extension: String,
    pub kind: FileKind,
}

impl TemplateFile {
    pub fn file(basename: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            basename: basename.into(),
            extension: extension.into(),
            kind: FileKind::File,
        }
    }

    pub fn dir(basename: impl Into<String>) -> Self {
        Self {
            basename: basename.into(),
            extension: String::new(),
            kind: FileKind::Dir,
        }
    }

    /// Only HTML files can be selected as entry templates
    pub fn is_html_template(&self) -> bool {
        self.kind == FileKind::File && self.extension == "html"
    }
}

/// Lists the templates of a theme.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateLister: Send + Sync {
    fn templates(&self, theme: &str) -> Vec<TemplateFile>;
}

/// Site settings consulted while rendering.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsRegistry: Send + Sync {
    /// Active theme name
    fn theme(&self) -> String;

    /// Display format for date fields, in strftime syntax
    fn date_format(&self) -> String;
}
