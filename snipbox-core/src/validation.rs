//! Field-level validation for user input

use std::collections::BTreeMap;
use std::fmt;

/// A single rule violation on a named form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty or only whitespace
    Blank { field: &'static str },

    /// Field exceeds maximum length (in characters, not bytes)
    TooLong { field: &'static str, max: usize },

    /// Value is not in the permitted set
    NotPermitted { field: &'static str, allowed: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Blank { field } | Self::TooLong { field, .. } | Self::NotPermitted { field, .. } => {
                field
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank { .. } => write!(f, "This field cannot be blank"),
            Self::TooLong { max, .. } => {
                write!(f, "This field cannot be more than {} characters long", max)
            }
            Self::NotPermitted { allowed, .. } => {
                write!(f, "This field must equal {}", allowed)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Collected validation failures, at most one message per field.
///
/// The first failure recorded for a field wins, so checks should be
/// ordered from most to least fundamental.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `err` unless its field already has a message.
    pub fn add(&mut self, err: ValidationError) {
        self.0.entry(err.field()).or_insert_with(|| err.to_string());
    }

    /// Run a check and record its failure, if any.
    pub fn check(&mut self, result: Result<(), ValidationError>) {
        if let Err(err) = result {
            self.add(err);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Owned map for handing to templates.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }
}

pub fn not_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(())
}

pub fn max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

pub fn permitted_value<T>(field: &'static str, value: T, allowed: &[T]) -> Result<(), ValidationError>
where
    T: PartialEq + fmt::Display,
{
    if allowed.contains(&value) {
        return Ok(());
    }
    let allowed = allowed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(ValidationError::NotPermitted { field, allowed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "title",
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "This field cannot be more than 100 characters long"
        );
    }

    #[test]
    fn whitespace_is_blank() {
        assert!(not_blank("title", "   \t\n").is_err());
        assert!(not_blank("title", " x ").is_ok());
    }

    #[test]
    fn max_chars_counts_characters() {
        // 5 characters, 10 bytes
        assert!(max_chars("title", "ééééé", 5).is_ok());
        assert!(max_chars("title", "éééééé", 5).is_err());
    }

    #[test]
    fn permitted_lists_choices() {
        let err = permitted_value("expires", 3u16, &[1, 7, 365]).unwrap_err();
        assert_eq!(err.to_string(), "This field must equal 1, 7, 365");
    }

    #[test]
    fn first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add(ValidationError::Blank { field: "title" });
        errors.add(ValidationError::TooLong {
            field: "title",
            max: 100,
        });

        assert_eq!(errors.get("title"), Some("This field cannot be blank"));
        assert_eq!(errors.to_map().len(), 1);
    }
}
