use askama::Template;

use crate::form::FieldError;

/// A form control made of a label, the input element and its inline error message.
///
/// The input `id` is the field name, so the label points at it and the error message
/// is reachable through `aria-describedby`. Rendering is a pure function of the fields.
#[derive(Template, Debug, Clone, PartialEq, Eq)]
#[template(path = "components/input.html")]
pub struct InputField {
    pub name: String,
    pub label: Option<String>,
    pub input_type: String,
    pub value: Option<String>,
    pub error: Option<FieldError>,
    pub attributes: Vec<(String, String)>,
}

impl InputField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            input_type: "text".to_owned(),
            value: None,
            error: None,
            attributes: Vec::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn value(mut self, value: Option<&str>) -> Self {
        self.value = value.map(str::to_owned);
        self
    }

    pub fn error(mut self, error: Option<&FieldError>) -> Self {
        self.error = error.cloned();
        self
    }

    /// Extra native attribute, rendered as-is after the built-in ones.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}
