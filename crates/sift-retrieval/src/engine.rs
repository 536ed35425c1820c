//! RetrievalEngine: answers a question grounded on the stored documents.
//!
//! question → embed → snapshot → rank (top-k) → assemble → resolve model →
//! generate → answer + provenance.
//!
//! The engine holds no mutable state. It never writes to the document store
//! and never retries a collaborator call.
//!
//! Cancellation is observed before each collaborator call. A deadline is also
//! handed to the embedder and generator as their remaining budget, so an
//! in-flight HTTP call stops when the deadline passes.

use sift_core::config::{ModelTable, RetrievalConfig};
use sift_core::constants::SYSTEM_INSTRUCTION;
use sift_core::errors::{Collaborator, SiftError, SiftResult};
use sift_core::models::{GroundedAnswer, QueryMode, ScoredDocument};
use sift_core::traits::{GenerationRequest, IDocumentStore, IEmbeddingProvider, IGenerator};
use sift_core::CancelToken;
use sift_observability::{answer_span, embedding_span, generation_span, retrieval_span};
use tracing::{debug, info, warn};

use crate::context::assemble_with_separator;
use crate::provenance::{provenance, render_sources};
use crate::ranking::rank;

/// The answer orchestrator. Borrows its three collaborators.
pub struct RetrievalEngine<'a> {
    embedder: &'a dyn IEmbeddingProvider,
    store: &'a dyn IDocumentStore,
    generator: &'a dyn IGenerator,
    config: RetrievalConfig,
    models: ModelTable,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        embedder: &'a dyn IEmbeddingProvider,
        store: &'a dyn IDocumentStore,
        generator: &'a dyn IGenerator,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            embedder,
            store,
            generator,
            config,
            models: ModelTable::default(),
        }
    }

    /// Use a configured mode → model table instead of the built-in one.
    pub fn with_models(mut self, models: ModelTable) -> Self {
        self.models = models;
        self
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Answer a question with no caller-side cancellation.
    pub fn answer_with_context(
        &self,
        question: &str,
        mode: Option<QueryMode>,
    ) -> SiftResult<GroundedAnswer> {
        self.answer_with_cancel(question, mode, &CancelToken::new())
    }

    /// Answer a question, aborting at the next collaborator boundary once
    /// `cancel` trips. A generated answer is returned even if the token trips
    /// while generation is finishing.
    pub fn answer_with_cancel(
        &self,
        question: &str,
        mode: Option<QueryMode>,
        cancel: &CancelToken,
    ) -> SiftResult<GroundedAnswer> {
        let mode = mode.unwrap_or_default();
        let _span = answer_span!(mode).entered();

        let ranked = self.retrieve(question, cancel)?;
        let context = assemble_with_separator(&ranked, &self.config.context_separator);
        let model = self.models.model_for(Some(mode));

        if ranked.is_empty() {
            warn!("no documents to ground on, generating with empty context");
        }

        cancel.check(Collaborator::Generation)?;
        let generation = generation_span!(model).entered();
        let answer = self
            .generator
            .generate(&GenerationRequest {
                system_instruction: SYSTEM_INSTRUCTION,
                context: &context,
                question,
                model,
                timeout: cancel.remaining(),
            })
            .map_err(|e| SiftError::upstream(Collaborator::Generation, e))?;
        drop(generation);

        let top_documents = provenance(&ranked);
        info!(
            model,
            sources = top_documents.len(),
            top_score = top_documents.first().map(|d| d.score),
            context_chars = context.len(),
            "answer generated"
        );
        debug!(sources = %render_sources(&top_documents), "provenance");

        Ok(GroundedAnswer {
            answer,
            model: model.to_string(),
            top_documents,
        })
    }

    /// Embed the question and rank the current corpus snapshot.
    ///
    /// Fails with `InvalidInput` before any collaborator call when the
    /// question is empty.
    pub fn retrieve(&self, question: &str, cancel: &CancelToken) -> SiftResult<Vec<ScoredDocument>> {
        validate_question(question)?;
        let _span = retrieval_span!(self.config.top_k).entered();

        cancel.check(Collaborator::Embedding)?;
        let question_vector = embedding_span!(self.embedder.name(), self.embedder.dimensions())
            .in_scope(|| self.embedder.embed_with_timeout(question, cancel.remaining()))
            .map_err(|e| SiftError::upstream(Collaborator::Embedding, e))?;
        cancel.check(Collaborator::Embedding)?;
        debug!(
            provider = self.embedder.name(),
            dims = question_vector.len(),
            "question embedded"
        );

        cancel.check(Collaborator::DocumentStore)?;
        let corpus = self
            .store
            .list_documents()
            .map_err(|e| SiftError::upstream(Collaborator::DocumentStore, e))?;
        cancel.check(Collaborator::DocumentStore)?;

        let missing = corpus.iter().filter(|d| !d.has_embedding()).count();
        let mismatched = corpus
            .iter()
            .filter(|d| d.has_embedding() && d.embedding.len() != question_vector.len())
            .count();
        if missing + mismatched > 0 {
            debug!(missing, mismatched, "documents without a comparable embedding score 0");
        }

        let ranked = rank(&question_vector, &corpus, self.config.top_k);
        debug!(
            corpus = corpus.len(),
            selected = ranked.len(),
            top_k = self.config.top_k,
            "ranking complete"
        );
        Ok(ranked)
    }
}

fn validate_question(question: &str) -> SiftResult<()> {
    if question.is_empty() {
        return Err(SiftError::invalid_input("question is required"));
    }
    Ok(())
}
