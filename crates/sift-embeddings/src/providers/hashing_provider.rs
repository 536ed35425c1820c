//! Signed feature-hashing provider for document prose.
//!
//! Terms are lowercased, stripped of stopwords and common English
//! inflections, then hashed together with adjacent-term bigrams into a fixed
//! number of signed buckets. No network, no model files.

use std::collections::BTreeMap;

use sift_core::errors::SiftResult;
use sift_core::traits::IEmbeddingProvider;

/// Bigrams count for half a term.
const BIGRAM_WEIGHT: f32 = 0.5;

/// Deterministic local embedding provider.
///
/// Documents sharing vocabulary (after stemming) or short phrases land in
/// shared buckets with the same sign, so they score higher under cosine
/// similarity. Colliding unrelated features get independent signs and tend
/// to cancel. Text with no content words embeds to the zero vector.
pub struct HashingProvider {
    dimensions: usize,
}

impl HashingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Bucket index and sign for a feature, both taken from its blake3 hash.
    fn slot(feature: &str, dims: usize) -> (usize, f32) {
        let hash = blake3::hash(feature.as_bytes());
        let mut word = [0u8; 8];
        word.copy_from_slice(&hash.as_bytes()[..8]);
        let h = u64::from_le_bytes(word);
        let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
        ((h % dims as u64) as usize, sign)
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        let terms = content_terms(text);
        if terms.is_empty() {
            return vec;
        }

        // Ordered so bucket sums are bit-for-bit repeatable.
        let mut features: BTreeMap<String, (f32, f32)> = BTreeMap::new();
        for term in &terms {
            features.entry(term.clone()).or_insert((0.0, 1.0)).0 += 1.0;
        }
        for pair in terms.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            features.entry(bigram).or_insert((0.0, BIGRAM_WEIGHT)).0 += 1.0;
        }

        for (feature, (count, weight)) in &features {
            let (bucket, sign) = Self::slot(feature, self.dimensions);
            vec[bucket] += sign * weight * (1.0 + count.ln());
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

/// Lowercased, stemmed content words of two or more characters, in order.
/// Apostrophes inside words are dropped (`don't` → `dont`).
fn content_terms(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| word.chars().count() >= 2 && !is_stopword(word))
        .map(stem)
        .collect()
}

fn is_stopword(word: &str) -> bool {
    matches!(
        word,
        "an" | "and" | "are" | "as" | "at" | "be" | "been" | "but" | "by" | "can" | "do"
            | "does" | "for" | "from" | "had" | "has" | "have" | "how" | "if" | "in" | "into"
            | "is" | "it" | "its" | "me" | "my" | "no" | "not" | "of" | "on" | "or" | "our"
            | "so" | "than" | "that" | "the" | "their" | "them" | "then" | "there" | "these"
            | "they" | "this" | "to" | "was" | "we" | "were" | "what" | "when" | "where"
            | "which" | "who" | "why" | "will" | "with" | "you" | "your"
    )
}

/// Strip common English inflections so `invoices`/`invoice` and
/// `shipping`/`ship` share a feature. Stems keep at least three characters.
fn stem(word: String) -> String {
    let len = word.chars().count();
    if len > 4 {
        if let Some(base) = word.strip_suffix("ies") {
            return format!("{base}y");
        }
    }
    for suffix in ["ing", "ed"] {
        if let Some(base) = word.strip_suffix(suffix) {
            if base.chars().count() >= 3 {
                return undouble(base);
            }
        }
    }
    if word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) && len > 3 {
        let mut base = word;
        base.pop();
        return base;
    }
    word
}

/// `shipp` → `ship`, `stopp` → `stop`; `fill` and `pass` keep their pair.
fn undouble(base: &str) -> String {
    let mut chars = base.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) if a == b && !matches!(a, 'l' | 's' | 'z') && a.is_alphabetic() => {
            let mut out = base.to_string();
            out.pop();
            out
        }
        _ => base.to_string(),
    }
}

impl IEmbeddingProvider for HashingProvider {
    fn embed(&self, text: &str) -> SiftResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn stopword_only_text_is_the_zero_vector() {
        let p = HashingProvider::new(128);
        for text in ["", "   ", "how do you do it", "a I"] {
            let v = p.embed(text).unwrap();
            assert_eq!(v.len(), 128);
            assert!(v.iter().all(|&x| x == 0.0), "for {text:?}");
        }
    }

    #[test]
    fn output_is_normalized() {
        let p = HashingProvider::new(256);
        let v = p.embed("return policy for damaged items").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }

    #[test]
    fn deterministic() {
        let p = HashingProvider::new(256);
        let text = "invoices are emailed monthly to the billing contact";
        assert_eq!(p.embed(text).unwrap(), p.embed(text).unwrap());
    }

    #[test]
    fn batch_matches_individual() {
        let p = HashingProvider::new(128);
        let texts = vec!["shipping times".to_string(), "refund window".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(batch[i], p.embed(text).unwrap());
        }
    }

    #[test]
    fn shared_vocabulary_scores_higher() {
        let p = HashingProvider::new(512);
        let q = p.embed("how long does shipping take").unwrap();
        let shipping = p.embed("shipping usually takes three business days").unwrap();
        let pasta = p.embed("cooking recipes for fresh pasta").unwrap();
        assert!(cosine(&q, &shipping) > cosine(&q, &pasta));
    }

    #[test]
    fn inflections_and_stopwords_do_not_change_the_vector() {
        let p = HashingProvider::new(256);
        assert_eq!(
            p.embed("the invoices").unwrap(),
            p.embed("invoice").unwrap()
        );
        assert_eq!(p.embed("Shipping policies").unwrap(), p.embed("ship policy").unwrap());
    }

    #[test]
    fn word_order_matters_through_bigrams() {
        let p = HashingProvider::new(1024);
        let a = p.embed("password reset link").unwrap();
        let b = p.embed("link reset password").unwrap();
        assert_ne!(a, b);
        assert!(cosine(&a, &b) > 0.5);
    }

    #[test]
    fn buckets_carry_both_signs() {
        let p = HashingProvider::new(64);
        let v = p
            .embed(
                "customers may return unopened merchandise within thirty days for \
                 a full refund provided the original receipt accompanies the package \
                 and shipping labels remain attached",
            )
            .unwrap();
        assert!(v.iter().any(|&x| x > 0.0));
        assert!(v.iter().any(|&x| x < 0.0));
    }

    #[test]
    fn stemming_rules() {
        assert_eq!(stem("policies".into()), "policy");
        assert_eq!(stem("shipping".into()), "ship");
        assert_eq!(stem("stopped".into()), "stop");
        assert_eq!(stem("filled".into()), "fill");
        assert_eq!(stem("business".into()), "business");
        assert_eq!(stem("status".into()), "status");
        assert_eq!(stem("days".into()), "day");
        assert_eq!(stem("bus".into()), "bus");
        assert_eq!(stem("red".into()), "red");
    }

    #[test]
    fn apostrophes_join_words() {
        assert_eq!(content_terms("Don't panic"), ["dont", "panic"]);
    }
}
