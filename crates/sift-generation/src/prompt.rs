//! User prompt layout.

/// The user turn: grounded context first, then the question.
///
/// An empty context still produces the `Context:` header.
pub fn build_user_prompt(context: &str, question: &str) -> String {
    format!("Context:\n{context}\n\nQuestion: {question}")
}
