//! Prompt constants and context assembly

/// Fixed system instruction for every question
pub const SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant that answers questions based on the following context.";

/// Substituted when the engine returns no textual content
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't retrieve a proper response.";

/// Build the context string from extracted page texts.
///
/// Single-space join in page order. No truncation, deduplication, or length
/// limiting: an arbitrarily large document produces an arbitrarily large
/// context payload.
pub fn build_context(pages: &[String]) -> String {
    pages.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_single_space_join_in_page_order() {
        let pages = vec!["Hello".to_string(), "world".to_string()];
        assert_eq!(build_context(&pages), "Hello world");
    }

    #[test]
    fn single_page_context_is_unchanged() {
        let pages = vec!["This is a test document.".to_string()];
        assert_eq!(build_context(&pages), "This is a test document.");
    }

    #[test]
    fn empty_document_yields_empty_context() {
        assert_eq!(build_context(&[]), "");
    }
}
