//! Line-respecting chunking

/// Split `content` into chunks of whole lines
///
/// The running size of a chunk is the sum of its line lengths in characters;
/// separating newlines are not counted. A chunk is closed when the next line
/// would push it past `max_chunk_chars` and it already holds at least one
/// character. A line longer than the budget is never split and shares its
/// chunk with no other non-empty line, although empty lines that follow it
/// stay attached (`"xxxxxxxxxxxx\n"` with a budget of 5 is one chunk).
/// Joining the result with `"\n"` reproduces `content` exactly. Empty
/// content yields no chunks.
///
/// ```rust
/// use reposeek_application::split_into_chunks;
///
/// let chunks = split_into_chunks("aaaa\nbbbb\ncc", 8);
/// assert_eq!(chunks, vec!["aaaa\nbbbb", "cc"]);
/// ```
pub fn split_into_chunks(content: &str, max_chunk_chars: usize) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_size = 0usize;

    for line in content.split('\n') {
        let line_size = line.chars().count();

        // zero-length lines never close a chunk, so no empty chunk is emitted
        if current_size > 0 && line_size > 0 && current_size + line_size > max_chunk_chars {
            chunks.push(current.join("\n"));
            current.clear();
            current_size = 0;
        }

        current.push(line);
        current_size += line_size;
    }

    if !current.is_empty() {
        chunks.push(current.join("\n"));
    }

    chunks
}
