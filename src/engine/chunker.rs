//! Chunker Module
//!
//! Splits an input text into an ordered sequence of fixed-size substrings.

// == Chunk ==
/// One contiguous piece of an input text.
///
/// Chunks are ordered, non-overlapping, and concatenating their contents in
/// index order reconstructs the original text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Ordinal position of this chunk within the text
    pub index: usize,
    /// The substring itself
    pub content: String,
}

// == Split ==
/// Splits `text` into chunks of `chunk_size` characters.
///
/// Every chunk holds exactly `chunk_size` characters except possibly the
/// last. An empty text yields no chunks; callers are expected to use the
/// reduction identity (0) without touching the pool.
///
/// Sizes are counted in Unicode scalar values, so a chunk boundary never
/// falls inside a multi-byte character.
///
/// # Panics
/// Panics if `chunk_size` is zero.
pub fn split(text: &str, chunk_size: usize) -> Vec<Chunk> {
    assert!(chunk_size > 0, "chunk_size must be positive");

    let mut chunks = Vec::new();
    let mut rest = text;
    let mut index = 0;

    while !rest.is_empty() {
        let boundary = rest
            .char_indices()
            .nth(chunk_size)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(boundary);
        chunks.push(Chunk {
            index,
            content: head.to_string(),
        });
        index += 1;
        rest = tail;
    }

    chunks
}
