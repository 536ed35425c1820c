//! Query logging: question, mode, model, latency, result count, top score.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sift_core::models::{GroundedAnswer, QueryMode};

/// A single answered query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub question: String,
    pub mode: QueryMode,
    pub model: String,
    pub latency: Duration,
    pub result_count: usize,
    pub top_score: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl QueryLogEntry {
    /// Create an entry from a finished answer, timestamped now.
    pub fn from_answer(
        question: impl Into<String>,
        mode: QueryMode,
        answer: &GroundedAnswer,
        latency: Duration,
    ) -> Self {
        Self {
            question: question.into(),
            mode,
            model: answer.model.clone(),
            latency,
            result_count: answer.top_documents.len(),
            top_score: answer.top_score(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded ring of recent queries. Oldest entries are dropped first.
#[derive(Debug)]
pub struct QueryLog {
    entries: Mutex<VecDeque<QueryLogEntry>>,
    max_entries: usize,
}

impl QueryLog {
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(max_entries.min(1024))),
            max_entries,
        }
    }

    /// Record a query. A zero-capacity log only emits the event.
    pub fn record(&self, entry: QueryLogEntry) {
        tracing::debug!(
            event = "query_logged",
            mode = %entry.mode,
            model = %entry.model,
            latency_ms = entry.latency.as_millis() as u64,
            result_count = entry.result_count,
            top_score = entry.top_score,
            "query logged"
        );

        if self.max_entries == 0 {
            return;
        }
        let Ok(mut entries) = self.entries.lock() else {
            tracing::warn!("query log lock poisoned, entry dropped");
            return;
        };
        entries.push_back(entry);
        while entries.len() > self.max_entries {
            entries.pop_front();
        }
    }

    /// Up to `n` most recent entries, newest first.
    pub fn recent(&self, n: usize) -> Vec<QueryLogEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().rev().take(n).cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Average latency across retained queries.
    pub fn avg_latency(&self) -> Duration {
        let Ok(entries) = self.entries.lock() else {
            return Duration::ZERO;
        };
        if entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = entries.iter().map(|e| e.latency).sum();
        total / entries.len() as u32
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use sift_core::models::DocumentRef;

    use super::*;

    fn entry(question: &str, ms: u64) -> QueryLogEntry {
        let answer = GroundedAnswer {
            answer: "a".into(),
            model: "gpt-5".into(),
            top_documents: vec![DocumentRef {
                id: "1".into(),
                name: "Doc1".into(),
                score: 0.9,
            }],
        };
        QueryLogEntry::from_answer(question, QueryMode::General, &answer, Duration::from_millis(ms))
    }

    #[test]
    fn entry_copies_answer_summary() {
        let e = entry("q", 5);
        assert_eq!(e.model, "gpt-5");
        assert_eq!(e.result_count, 1);
        assert_eq!(e.top_score, Some(0.9));
    }

    #[test]
    fn ring_drops_oldest() {
        let log = QueryLog::with_capacity(2);
        log.record(entry("first", 1));
        log.record(entry("second", 2));
        log.record(entry("third", 3));
        assert_eq!(log.len(), 2);
        let recent = log.recent(10);
        assert_eq!(recent[0].question, "third");
        assert_eq!(recent[1].question, "second");
    }

    #[test]
    fn zero_capacity_retains_nothing() {
        let log = QueryLog::with_capacity(0);
        log.record(entry("q", 1));
        assert!(log.is_empty());
    }

    #[test]
    fn average_latency() {
        let log = QueryLog::with_capacity(10);
        assert_eq!(log.avg_latency(), Duration::ZERO);
        log.record(entry("a", 10));
        log.record(entry("b", 30));
        assert_eq!(log.avg_latency(), Duration::from_millis(20));
    }
}
