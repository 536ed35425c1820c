//! Fixed-size character windows with overlap.

/// Split `text` into windows of `size` characters, each sharing `overlap`
/// characters with the previous one.
///
/// Windows are counted in `char`s, so multi-byte text never splits inside a
/// code point. `overlap` is clamped below `size`. A `size` of 0 yields the
/// whole text as one chunk; empty text yields no chunks.
pub fn split_into_chunks(text: &str, size: usize, overlap: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if size == 0 {
        return vec![text.to_string()];
    }

    let chars: Vec<char> = text.chars().collect();
    let overlap = overlap.min(size - 1);
    let n = chars.len();

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < n {
        let end = (start + size).min(n);
        chunks.push(chars[start..end].iter().collect());
        if end == n {
            break;
        }
        start = end - overlap;
    }
    chunks
}

/// Display name for the `index`-th chunk (zero-based) of a document.
pub fn chunk_name(name: &str, index: usize) -> String {
    format!("{name} [chunk {}]", index + 1)
}
