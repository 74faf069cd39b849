use std::fmt::Write as _;

use reposeek_domain::constants::{
    SUMMARY_MAX_TOKENS, SUMMARY_MIN_CONTENT_CHARS, SUMMARY_SYSTEM_PROMPT, SUMMARY_TEMPERATURE,
    SUMMARY_TOP_K,
};
use reposeek_domain::entities::CodeChunk;
use reposeek_domain::value_objects::ChatRequest;

/// Summary generation settings
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOptions {
    /// Maximum number of chunks shown to the model
    pub top_k: usize,
    /// Minimum trimmed content length of a chunk shown to the model
    pub min_content_chars: usize,
    /// Sampling temperature
    pub temperature: f32,
    /// Reply token ceiling
    pub max_tokens: u32,
    /// System instruction
    pub system_prompt: String,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            top_k: SUMMARY_TOP_K,
            min_content_chars: SUMMARY_MIN_CONTENT_CHARS,
            temperature: SUMMARY_TEMPERATURE,
            max_tokens: SUMMARY_MAX_TOKENS,
            system_prompt: SUMMARY_SYSTEM_PROMPT.to_string(),
        }
    }
}

/// Deterministic prompt rendering for summary requests
///
/// ```rust
/// use reposeek_application::SummaryPrompt;
/// use reposeek_domain::CodeChunk;
///
/// let chunk = CodeChunk::new("package main", "main.go", "acme/widgets", "main", "Go");
/// let context = SummaryPrompt::render_context(&[chunk]);
/// assert_eq!(context, "File: main.go\n```Go\npackage main\n```\n\n");
/// ```
pub struct SummaryPrompt;

impl SummaryPrompt {
    /// Render each chunk as a file header followed by a language-tagged fence
    pub fn render_context(chunks: &[CodeChunk]) -> String {
        let mut context = String::new();
        for chunk in chunks {
            let _ = write!(
                context,
                "File: {}\n```{}\n{}\n```\n\n",
                chunk.file_path, chunk.language, chunk.content
            );
        }
        context
    }

    /// User prompt for `query` over `chunks`
    pub fn user_prompt(query: &str, chunks: &[CodeChunk]) -> String {
        format!(
            "Question: {query}\n\nCode Context:\n{}\n\nProvide only the direct answer to the question.",
            Self::render_context(chunks)
        )
    }

    /// Full chat request for `query` over `chunks`
    pub fn build(query: &str, chunks: &[CodeChunk], options: &SummaryOptions) -> ChatRequest {
        ChatRequest {
            system: options.system_prompt.clone(),
            user: Self::user_prompt(query, chunks),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        }
    }
}
