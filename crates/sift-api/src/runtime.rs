//! SiftRuntime: owns the collaborators, the query log and the config.
//!
//! Handlers borrow from the runtime, so one runtime serves any number of
//! concurrent requests.

use std::path::PathBuf;

use sift_core::config::SiftConfig;
use sift_core::constants::VERSION;
use sift_core::errors::SiftResult;
use sift_core::traits::{IDocumentStore, IEmbeddingProvider, IGenerator};
use sift_embeddings::create_provider;
use sift_generation::create_generator;
use sift_observability::{init_tracing, QueryLog};
use sift_retrieval::RetrievalEngine;
use sift_storage::{open_store, ChunkingPolicy, Ingestor};
use tracing::{info, warn};

use crate::handlers::RetrievalApi;

/// Options for building a runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// Path to a TOML config file. Takes precedence over `config_toml`.
    pub config_path: Option<PathBuf>,
    /// TOML configuration string. If neither is set, uses defaults.
    pub config_toml: Option<String>,
    /// Install the global tracing subscriber from the observability config.
    pub init_tracing: bool,
}

/// The collaborators and shared state behind the Retrieval API.
pub struct SiftRuntime {
    pub embedder: Box<dyn IEmbeddingProvider>,
    pub store: Box<dyn IDocumentStore>,
    pub generator: Box<dyn IGenerator>,
    pub query_log: QueryLog,
    pub config: SiftConfig,
}

impl SiftRuntime {
    /// Build every collaborator from configuration.
    pub fn new(opts: RuntimeOptions) -> SiftResult<Self> {
        let config = match (&opts.config_path, &opts.config_toml) {
            (Some(path), _) => SiftConfig::from_file(path)?,
            (None, Some(toml_str)) => SiftConfig::from_toml(toml_str)?,
            (None, None) => SiftConfig::default(),
        };

        if opts.init_tracing {
            if let Err(e) = init_tracing(&config.observability) {
                warn!(error = %e, "tracing already initialized");
            }
        }

        let embedder = create_provider(&config.embedding)?;
        if !embedder.is_available() {
            warn!(provider = embedder.name(), "embedding provider reports unavailable");
        }
        let store = open_store(&config.storage)?;
        let generator = create_generator(&config.generation)?;

        info!(
            version = VERSION,
            embedder = embedder.name(),
            store = %config.storage.backend,
            generator = generator.name(),
            top_k = config.retrieval.top_k,
            "runtime ready"
        );

        Ok(Self::with_collaborators(config, embedder, store, generator))
    }

    /// Assemble a runtime around existing collaborators.
    pub fn with_collaborators(
        config: SiftConfig,
        embedder: Box<dyn IEmbeddingProvider>,
        store: Box<dyn IDocumentStore>,
        generator: Box<dyn IGenerator>,
    ) -> Self {
        Self {
            embedder,
            store,
            generator,
            query_log: QueryLog::with_capacity(config.retrieval.query_log_capacity),
            config,
        }
    }

    /// The answer orchestrator over this runtime's collaborators.
    pub fn engine(&self) -> RetrievalEngine<'_> {
        RetrievalEngine::new(
            self.embedder.as_ref(),
            self.store.as_ref(),
            self.generator.as_ref(),
            self.config.retrieval.clone(),
        )
        .with_models(self.config.generation.models.clone())
    }

    /// Ingestion over this runtime's store and embedder.
    pub fn ingestor(&self) -> Ingestor<'_> {
        Ingestor::new(self.store.as_ref(), self.embedder.as_ref())
            .with_chunking(ChunkingPolicy::from(&self.config.storage))
    }

    /// Request handlers bound to this runtime, recording into its query log.
    pub fn api(&self) -> RetrievalApi<'_> {
        RetrievalApi::new(self.engine(), self.ingestor()).with_query_log(&self.query_log)
    }
}
