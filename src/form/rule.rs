use unicode_segmentation::UnicodeSegmentation;
use validator::validate_email;

use super::FormData;

/// A single check applied to one field value.
///
/// An absent value only fails [`Rule::Required`]; every other rule lets it through,
/// so optional fields can still carry format rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The value must be present and non-empty. Whitespace counts as content.
    Required,
    /// The value must look like `local@domain.tld`.
    Email,
    /// The value must be at least this many user-perceived characters long.
    MinLength(usize),
    /// The value must equal the value of the named field.
    EqualsField(&'static str),
}

impl Rule {
    pub fn check<T: FormData + ?Sized>(&self, value: Option<&str>, data: &T) -> bool {
        match (self, value) {
            (Rule::Required, None) => false,
            (Rule::Required, Some(value)) => !value.is_empty(),
            (_, None) => true,
            // Emptiness is the job of `Required`.
            (Rule::Email, Some(value)) => value.is_empty() || is_email(value),
            (Rule::MinLength(min), Some(value)) => value.graphemes(true).count() >= *min,
            (Rule::EqualsField(other), Some(value)) => data.field(other) == Some(value),
        }
    }
}

/// `validator`'s check accepts bare hosts, the sign-in and create-user forms also
/// want a dotted domain.
fn is_email(value: &str) -> bool {
    if !validate_email(value) {
        return false;
    }

    match value.rsplit_once('@') {
        Some((_, domain)) => {
            let labels: Vec<&str> = domain.split('.').collect();
            labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
        }
        None => false,
    }
}
