//! Extension to language label mapping

use std::path::Path;

use reposeek_domain::constants::UNKNOWN_LANGUAGE;

/// Coarse language label for a file extension
///
/// Accepts the extension with or without its leading dot and ignores case.
/// Unmapped extensions return `"Unknown"`.
pub fn language_for_extension(extension: &str) -> &'static str {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    match extension.to_ascii_lowercase().as_str() {
        "go" => "Go",
        "js" | "jsx" => "JavaScript",
        "ts" | "tsx" => "TypeScript",
        "py" => "Python",
        "java" => "Java",
        "c" | "cpp" | "h" | "hpp" => "C/C++",
        "rb" => "Ruby",
        "php" => "PHP",
        "cs" => "C#",
        "html" => "HTML",
        "css" => "CSS",
        _ => UNKNOWN_LANGUAGE,
    }
}

/// Language label for the extension of `path`
pub fn language_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(UNKNOWN_LANGUAGE, language_for_extension)
}
