//! Declarative validation for the admin forms.
//!
//! A [`Schema`] is an ordered list of fields, each carrying an ordered list of
//! rule/message pairs. Every field is checked, and the first failing rule of a
//! field decides the message shown next to it.

use std::collections::BTreeMap;

use derive_more::Display;
use secrecy::Secret;

pub mod rule;

pub use rule::Rule;

/// Gives the validator access to the submitted values by field name.
pub trait FormData {
    fn field(&self, name: &str) -> Option<&str>;
}

/// Serde default for password fields missing from a submission.
pub fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

/// A validation failure attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", message)]
pub struct FieldError {
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Debug, Clone)]
pub struct FieldRules {
    field: &'static str,
    rules: Vec<(Rule, &'static str)>,
}

impl FieldRules {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule, message: &'static str) -> Self {
        self.rules.push((rule, message));
        self
    }

    fn first_failure<T: FormData + ?Sized>(&self, data: &T) -> Option<&'static str> {
        let value = data.field(self.field);
        self.rules
            .iter()
            .find(|(rule, _)| !rule.check(value, data))
            .map(|(_, message)| *message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }

    #[tracing::instrument(name = "Validate form", skip_all, fields(failed = tracing::field::Empty))]
    pub fn validate<T: FormData + ?Sized>(&self, data: &T) -> Result<(), FieldErrors> {
        let errors: BTreeMap<_, _> = self
            .fields
            .iter()
            .filter_map(|rules| {
                rules
                    .first_failure(data)
                    .map(|message| (rules.field, FieldError::new(message)))
            })
            .collect();

        if errors.is_empty() {
            return Ok(());
        }

        tracing::Span::current().record("failed", &tracing::field::debug(errors.keys()));
        Err(FieldErrors(errors))
    }
}
