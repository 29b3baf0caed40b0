//! Tag input with server-side suggestions.
//!
//! The input holds comma-separated tags. Only the part after the last comma
//! is sent for suggestions, and choosing a suggestion replaces that part.

use taskboard_client::TaskApi;
use tracing::{trace, warn};

/// State of a tag input field and its suggestion list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInput {
    value: String,
    suggestions: Vec<String>,
}

impl TagInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing field value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            suggestions: Vec::new(),
        }
    }

    /// Current field value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Suggestions currently shown.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// The tag currently being typed.
    pub fn last_term(&self) -> &str {
        self.value.rsplit(',').next().unwrap_or_default().trim()
    }

    /// Handles a change of the field value and refreshes suggestions.
    ///
    /// An empty term clears the list without a request. A failed request
    /// also clears the list.
    pub async fn on_input<A: TaskApi + ?Sized>(
        &mut self,
        api: &A,
        value: impl Into<String>,
    ) -> taskboard_client::Result<usize> {
        self.value = value.into();

        let term = self.last_term().to_string();
        if term.is_empty() {
            self.suggestions.clear();
            return Ok(0);
        }

        match api.autocomplete_tags(&term).await {
            Ok(tags) => {
                trace!(term = %term, count = tags.len(), "Tag suggestions");
                self.suggestions = tags;
                Ok(self.suggestions.len())
            }
            Err(e) => {
                warn!(term = %term, error = %e, "Tag autocomplete failed");
                self.suggestions.clear();
                Err(e)
            }
        }
    }

    /// Replaces the tag being typed with `tag` and closes the list.
    ///
    /// The value ends with ", " so the next tag can be typed right away.
    pub fn choose(&mut self, tag: &str) {
        let mut parts: Vec<&str> = self.value.split(',').map(str::trim).collect();
        parts.pop();
        parts.retain(|p| !p.is_empty());
        parts.push(tag.trim());

        self.value = format!("{}, ", parts.join(", "));
        self.suggestions.clear();
    }

    /// Closes the suggestion list (click outside the field).
    pub fn click_outside(&mut self) {
        self.suggestions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, StatusReply};

    fn api() -> FakeApi {
        let mut api = FakeApi::new(StatusReply::Unreachable);
        api.tags = vec!["home".into(), "homework".into(), "work".into()];
        api
    }

    #[test]
    fn test_last_term() {
        assert_eq!(TagInput::with_value("urgent, ho").last_term(), "ho");
        assert_eq!(TagInput::with_value("ho").last_term(), "ho");
        assert_eq!(TagInput::with_value("urgent, ").last_term(), "");
        assert_eq!(TagInput::new().last_term(), "");
    }

    #[tokio::test]
    async fn test_suggestions_for_last_term() {
        let api = api();
        let mut input = TagInput::new();

        let count = input.on_input(&api, "urgent, hom").await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(input.suggestions(), &["home".to_string(), "homework".to_string()]);
        assert_eq!(api.calls(), vec!["tags hom"]);
    }

    #[tokio::test]
    async fn test_empty_term_clears_without_request() {
        let api = api();
        let mut input = TagInput::new();
        input.on_input(&api, "wo").await.unwrap();
        assert_eq!(input.suggestions().len(), 1);

        assert_eq!(input.on_input(&api, "work, ").await.unwrap(), 0);
        assert!(input.suggestions().is_empty());
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_request_clears_suggestions() {
        let mut api = api();
        let mut input = TagInput::new();
        input.on_input(&api, "ho").await.unwrap();

        api.tags_fail = true;
        assert!(input.on_input(&api, "hom").await.is_err());
        assert!(input.suggestions().is_empty());
        assert_eq!(input.value(), "hom");
    }

    #[test]
    fn test_choose_replaces_last_part() {
        let mut input = TagInput::with_value("urgent, ho");
        input.choose("home");
        assert_eq!(input.value(), "urgent, home, ");

        let mut input = TagInput::with_value("ho");
        input.choose("homework");
        assert_eq!(input.value(), "homework, ");
    }

    #[test]
    fn test_choose_after_trailing_separator() {
        let mut input = TagInput::with_value("urgent, ");
        input.choose("work");
        assert_eq!(input.value(), "urgent, work, ");

        input.choose("home");
        assert_eq!(input.value(), "urgent, work, home, ");
    }

    #[tokio::test]
    async fn test_choose_and_click_outside_close_list() {
        let api = api();
        let mut input = TagInput::new();

        input.on_input(&api, "h").await.unwrap();
        input.choose("home");
        assert!(input.suggestions().is_empty());

        input.on_input(&api, "home, w").await.unwrap();
        assert!(!input.suggestions().is_empty());
        input.click_outside();
        assert!(input.suggestions().is_empty());
    }
}
