use reposeek_domain::entities::CodeChunk;

/// Path substrings that mark a file as structurally important
pub const IMPORTANT_PATH_MARKERS: &[&str] = &[
    "main.go",
    "README.md",
    "go.mod",
    "handlers/",
    "models/",
    "routes/",
    "controllers/",
    "services/",
];

/// Path substrings excluded from summaries: version control metadata and
/// temporary clone locations leaking into stored paths
const SUMMARY_EXCLUDED_MARKERS: &[&str] = &[".git/", "var/folders"];

/// Whether `file_path` contains any important marker
pub fn is_important(file_path: &str) -> bool {
    IMPORTANT_PATH_MARKERS
        .iter()
        .any(|marker| file_path.contains(marker))
}

/// Stable partition: important files first, then the rest, each in input
/// order, truncated to `limit`
pub fn rank_by_importance(chunks: Vec<CodeChunk>, limit: usize) -> Vec<CodeChunk> {
    let (mut ranked, others): (Vec<_>, Vec<_>) = chunks
        .into_iter()
        .partition(|chunk| is_important(&chunk.file_path));
    ranked.extend(others);
    ranked.truncate(limit);
    ranked
}

/// Keep at most `top_k` chunks worth showing to the language model
///
/// Drops version control paths, temporary clone paths and chunks whose
/// trimmed content is shorter than `min_content_chars` characters.
pub fn filter_for_summary(
    chunks: Vec<CodeChunk>,
    min_content_chars: usize,
    top_k: usize,
) -> Vec<CodeChunk> {
    chunks
        .into_iter()
        .filter(|chunk| {
            !chunk.file_path.starts_with(".git")
                && !SUMMARY_EXCLUDED_MARKERS
                    .iter()
                    .any(|marker| chunk.file_path.contains(marker))
        })
        .filter(|chunk| chunk.content.trim().chars().count() >= min_content_chars)
        .take(top_k)
        .collect()
}
