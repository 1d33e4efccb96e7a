//! Shared utilities for use cases.

/// Build the prompt shown when asking a quiz question.
///
/// Appends a question mark unless the author already wrote one.
pub(crate) fn question_prompt(question: &str) -> String {
    let question = question.trim_end();
    if question.ends_with('?') {
        format!("{} ", question)
    } else {
        format!("{}? ", question)
    }
}
