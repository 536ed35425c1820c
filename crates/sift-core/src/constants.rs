/// sift version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Instruction sent as the system message of every grounded generation call.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant. Use the provided documents as context when relevant. If the answer is not in the context, answer based on your general knowledge and say when you are unsure.";

/// Label written before each document name in the assembled context.
pub const CONTEXT_DOCUMENT_LABEL: &str = "Document: ";

/// Generic message returned to API callers for any upstream failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";
