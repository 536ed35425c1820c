//! Cosine similarity between two embedding vectors.

/// Cosine similarity: `dot(a, b) / (‖a‖ · ‖b‖)`, accumulated in `f64`.
///
/// Returns `0.0` when the lengths differ, when either vector is empty, or when
/// either norm is zero. The result is not clamped.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    dot / denom
}
