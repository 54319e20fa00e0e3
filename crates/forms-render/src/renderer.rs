//! Fieldset to HTML form rendering
//!
//! [`FieldsetRenderer::render`] produces one tabbed form:
//!
//! 1. `<form>` open tag
//! 2. CSRF name/value hidden inputs and the `action=save-form` marker
//! 3. a nav pill per section, then a tab pane per section holding its fields
//! 4. `</form>`
//!
//! Rendering never fails. Missing properties get defaults, empty external
//! lists give empty selects and unparseable dates are shown as stored.

use forms_core::prelude::*;
use forms_core::{element_name, escape, FieldProperty, FieldType, Fieldset, SizeTable, Values};

use crate::collaborators::{
    Attributes, CsrfTokenProvider, FormBuilder, MediaLister, SettingsRegistry, TemplateLister,
    Translator,
};
use crate::request::RequestContext;

/// Default CSS class of every form control
pub const DEFAULT_FIELD_CLASS: &str = "form-control";

/// Section whose tab starts active
pub const MAIN_SECTION: &str = "main";

/// The renderer's injected services.
pub struct Collaborators {
    pub form: Box<dyn FormBuilder>,
    pub translator: Box<dyn Translator>,
    pub csrf: Box<dyn CsrfTokenProvider>,
    pub media: Box<dyn MediaLister>,
    pub templates: Box<dyn TemplateLister>,
    pub settings: Box<dyn SettingsRegistry>,
}

/// Renders fieldsets into admin forms.
///
/// Immutable after construction; a single instance can serve concurrent
/// requests.
pub struct FieldsetRenderer {
    pub(crate) form: Box<dyn FormBuilder>,
    pub(crate) translator: Box<dyn Translator>,
    pub(crate) csrf: Box<dyn CsrfTokenProvider>,
    pub(crate) media: Box<dyn MediaLister>,
    pub(crate) templates: Box<dyn TemplateLister>,
    pub(crate) settings: Box<dyn SettingsRegistry>,
    sizes: SizeTable,
    field_class: String,
}

/// A field with every property resolved, ready for its type's helper.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedField<'a> {
    /// Field key as declared, used as the label target
    pub key: &'a str,
    /// Form control name (`seo.title` → `seo[title]`)
    pub name: String,
    pub value: String,
    pub title: Option<&'a str>,
    pub size_class: &'static str,
    pub attributes: Attributes,
    pub property: &'a FieldProperty,
}

impl FieldsetRenderer {
    pub fn new(collaborators: Collaborators) -> Self {
        let Collaborators {
            form,
            translator,
            csrf,
            media,
            templates,
            settings,
        } = collaborators;

        Self {
            form,
            translator,
            csrf,
            media,
            templates,
            settings,
            sizes: SizeTable::default(),
            field_class: DEFAULT_FIELD_CLASS.to_string(),
        }
    }

    /// Replace the class every control starts with.
    pub fn with_field_class(mut self, class: impl Into<String>) -> Self {
        self.field_class = class.into();
        self
    }

    /// Render `fieldset` with the entry's current `values`.
    #[instrument(skip_all, fields(sections = fieldset.sections.len()))]
    pub fn render(&self, fieldset: &Fieldset, values: &Values, request: &RequestContext) -> String {
        let mut form_attributes = Attributes::new();
        form_attributes.insert("id".to_string(), "form".to_string());

        let mut html = self.form.open("", &form_attributes);
        html.push_str(&self.csrf_hidden_fields());
        html.push_str(&self.action_hidden_field());

        if !fieldset.sections.is_empty() {
            let active = active_section(fieldset);

            html.push_str(r#"<ul class="nav nav-pills nav-justified" id="pills-tab" role="tablist">"#);
            for (key, section) in &fieldset.sections {
                html.push_str(&nav_item(key, &section.title, Some(key.as_str()) == active));
            }
            html.push_str("</ul>");

            html.push_str(r#"<div class="tab-content" id="pills-tabContent">"#);
            for (key, section) in &fieldset.sections {
                let is_active = Some(key.as_str()) == active;
                let key = escape(key);
                html.push_str(&format!(
                    r#"<div class="tab-pane fade{}" id="pills-{key}" role="tabpanel" aria-labelledby="pills-{key}-tab">"#,
                    if is_active { " show active" } else { "" },
                ));
                html.push_str(r#"<div class="row">"#);

                for (field_key, property) in &section.fields {
                    let field = self.resolve(field_key, property, values);
                    html.push_str(&self.render_field(&field, request));
                }

                html.push_str("</div>");
                html.push_str("</div>");
            }
            html.push_str("</div>");
        }

        html.push_str(&self.form.close());

        debug!("Rendered {} fields", fieldset.field_count());
        html
    }

    /// Apply defaults to a declared field.
    pub(crate) fn resolve<'a>(
        &self,
        key: &'a str,
        property: &'a FieldProperty,
        values: &Values,
    ) -> ResolvedField<'a> {
        let mut attributes = property.attributes.clone();
        let class = match attributes.get("class") {
            Some(extra) => format!("{} {}", self.field_class, extra),
            None => self.field_class.clone(),
        };
        attributes.insert("class".to_string(), class);

        let value = values
            .get(key)
            .or_else(|| property.value.clone())
            .unwrap_or_default();

        ResolvedField {
            key,
            name: element_name(key),
            value,
            title: property.title.as_deref().filter(|title| !title.is_empty()),
            size_class: self.sizes.class_for(property.size.as_deref()),
            attributes,
            property,
        }
    }

    /// Dispatch a resolved field to the helper for its type.
    pub(crate) fn render_field(&self, field: &ResolvedField<'_>, request: &RequestContext) -> String {
        trace!("Rendering {} field {:?}", field.property.field_type, field.key);

        match field.property.field_type {
            FieldType::Textarea => self.textarea_field(field),
            FieldType::Hidden => self.hidden_field(field),
            FieldType::Html => self.html_field(field),
            FieldType::Select => self.select_field(field),
            FieldType::TemplateSelect => self.template_select_field(field),
            FieldType::VisibilitySelect => self.visibility_select_field(field),
            FieldType::Tags => self.tags_field(field),
            FieldType::Datetimepicker => self.date_field(field),
            FieldType::MediaSelect => self.media_select_field(field, request),
            FieldType::Text => self.text_field(field),
        }
    }

    fn csrf_hidden_fields(&self) -> String {
        let token = self.csrf.token();
        let none = Attributes::new();
        let mut html = self.form.hidden(&token.name_key, &token.name, &none);
        html.push_str(&self.form.hidden(&token.value_key, &token.value, &none));
        html
    }

    fn action_hidden_field(&self) -> String {
        self.form.hidden("action", "save-form", &Attributes::new())
    }
}

/// The `main` section, or the first one when there is no `main`.
fn active_section(fieldset: &Fieldset) -> Option<&str> {
    if fieldset.sections.contains_key(MAIN_SECTION) {
        return Some(MAIN_SECTION);
    }
    fieldset.sections.keys().next().map(String::as_str)
}

fn nav_item(key: &str, title: &str, active: bool) -> String {
    let key = escape(key);
    format!(
        r##"<li class="nav-item"><a class="nav-link{}" id="pills-{key}-tab" data-toggle="pill" href="#pills-{key}" role="tab" aria-controls="pills-{key}" aria-selected="{}">{}</a></li>"##,
        if active { " active" } else { "" },
        active,
        escape(title),
    )
}
