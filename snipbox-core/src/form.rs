//! The "create snippet" form

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::validation::{self, FieldErrors};

/// Maximum title length in characters
const MAX_TITLE_CHARS: usize = 100;

/// Lifetimes (in days) offered by the create form
pub const PERMITTED_LIFETIMES: [u16; 3] = [1, 7, 365];

/// Lifetime preselected on an empty form
const DEFAULT_LIFETIME: u16 = 365;

/// Form values posted to `/snippet/create`.
///
/// `field_errors` is never read from the request; it is filled by
/// [`SnippetCreateForm::validate`] and serialized back into the page so the
/// template can show messages next to each field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetCreateForm {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub expires: u16,

    #[serde(skip_deserializing)]
    pub field_errors: BTreeMap<String, String>,
}

impl Default for SnippetCreateForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            expires: DEFAULT_LIFETIME,
            field_errors: BTreeMap::new(),
        }
    }
}

impl SnippetCreateForm {
    /// Check every field, store the messages on the form and report
    /// whether it is acceptable.
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();
        errors.check(validation::not_blank("title", &self.title));
        errors.check(validation::max_chars("title", &self.title, MAX_TITLE_CHARS));
        errors.check(validation::not_blank("content", &self.content));
        errors.check(validation::permitted_value(
            "expires",
            self.expires,
            &PERMITTED_LIFETIMES,
        ));

        self.field_errors = errors.to_map();
        errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, content: &str, expires: u16) -> SnippetCreateForm {
        SnippetCreateForm {
            title: title.into(),
            content: content.into(),
            expires,
            field_errors: BTreeMap::new(),
        }
    }

    #[test]
    fn valid_form() {
        let mut f = form("Test", "Body", 7);
        assert!(f.validate());
        assert!(f.field_errors.is_empty());
    }

    #[test]
    fn default_form_preselects_a_year() {
        assert_eq!(SnippetCreateForm::default().expires, 365);
    }

    #[test]
    fn reports_every_bad_field() {
        let mut f = form("", " ", 3);
        assert!(!f.validate());
        assert_eq!(f.field_errors["title"], "This field cannot be blank");
        assert_eq!(f.field_errors["content"], "This field cannot be blank");
        assert_eq!(f.field_errors["expires"], "This field must equal 1, 7, 365");
    }

    #[test]
    fn title_length_limit() {
        let mut f = form(&"a".repeat(100), "Body", 1);
        assert!(f.validate());

        let mut f = form(&"a".repeat(101), "Body", 1);
        assert!(!f.validate());
        assert!(f.field_errors["title"].contains("100 characters"));
    }

    #[test]
    fn revalidating_clears_stale_errors() {
        let mut f = form("", "Body", 7);
        assert!(!f.validate());
        f.title = "Fixed".into();
        assert!(f.validate());
        assert!(f.field_errors.is_empty());
    }

    #[test]
    fn field_errors_ignored_on_input() {
        let f: SnippetCreateForm = serde_json::from_str(
            r#"{"title":"t","content":"c","expires":7,"field_errors":{"title":"x"}}"#,
        )
        .unwrap();
        assert!(f.field_errors.is_empty());
    }
}
