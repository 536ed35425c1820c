// Single source of truth for all default values.

// --- Embedding ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "api";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-large";
pub const DEFAULT_EMBEDDING_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 3072;
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_EMBEDDING_MAX_RETRIES: u32 = 2;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 10_000;

// --- Generation ---
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_GENERATION_TIMEOUT_MS: u64 = 120_000;
pub const DEFAULT_GENERAL_MODEL: &str = "gpt-5";
pub const DEFAULT_FAST_MODEL: &str = "gpt-5-nano";
pub const DEFAULT_DEEP_MODEL: &str = "o4-mini-deep-research";

// --- Credentials ---
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_CONTEXT_SEPARATOR: &str = "\n\n---\n\n";
pub const DEFAULT_QUERY_LOG_CAPACITY: usize = 1_000;

// --- Storage ---
pub const DEFAULT_STORAGE_BACKEND: &str = "memory";
pub const DEFAULT_DB_FILENAME: &str = "sift.db";
pub const DEFAULT_CHUNK_SIZE: usize = 1_200;
pub const DEFAULT_CHUNK_OVERLAP: usize = 150;
pub const DEFAULT_CHUNKING_ENABLED: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
