use url::Url;

use crate::model::fact::{CreateFactDto, FactDto, UpdateFactDto};

pub const MAX_TEXT_LENGTH: usize = 200;

/// Editable state of the submit / edit fact form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactForm {
    pub text: String,
    pub source: String,
    pub category: String,
}

impl FactForm {
    pub fn from_fact(fact: &FactDto) -> Self {
        Self {
            text: fact.text.clone(),
            source: fact.source.clone(),
            category: fact.category.clone(),
        }
    }

    pub fn remaining_chars(&self) -> i64 {
        MAX_TEXT_LENGTH as i64 - self.text.trim().chars().count() as i64
    }

    /// First problem with the form, if any.
    pub fn error(&self) -> Option<&'static str> {
        let text_len = self.text.trim().chars().count();

        if text_len == 0 {
            return Some("Please write a fact");
        }
        if text_len > MAX_TEXT_LENGTH {
            return Some("A fact must have at most 200 characters");
        }
        if !is_web_url(self.source.trim()) {
            return Some("Please provide a valid http(s) source");
        }
        if self.category.is_empty() {
            return Some("Please choose a category");
        }

        None
    }

    pub fn is_valid(&self) -> bool {
        self.error().is_none()
    }

    pub fn to_create_dto(&self) -> CreateFactDto {
        CreateFactDto {
            text: self.text.trim().to_string(),
            source: self.source.trim().to_string(),
            category: self.category.clone(),
        }
    }

    pub fn to_update_dto(&self) -> UpdateFactDto {
        UpdateFactDto {
            text: Some(self.text.trim().to_string()),
            source: Some(self.source.trim().to_string()),
            category: Some(self.category.clone()),
        }
    }
}

fn is_web_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(text: &str, source: &str, category: &str) -> FactForm {
        FactForm {
            text: text.to_string(),
            source: source.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(form("Water boils at 100C", "https://example.com", "science").is_valid());
    }

    #[test]
    fn rejects_blank_and_long_text() {
        assert!(!form("   ", "https://example.com", "science").is_valid());
        assert!(!form(&"x".repeat(201), "https://example.com", "science").is_valid());
        assert!(form(&"x".repeat(200), "https://example.com", "science").is_valid());
    }

    #[test]
    fn rejects_non_web_source() {
        assert!(!form("Fact", "ftp://example.com", "science").is_valid());
        assert!(!form("Fact", "example.com", "science").is_valid());
    }

    #[test]
    fn requires_category() {
        assert_eq!(
            form("Fact", "http://example.com", "").error(),
            Some("Please choose a category")
        );
    }
}
