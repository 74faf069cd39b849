//! Walk entry classification
//!
//! Every entry the walker visits is either accepted or skipped with a
//! reason. A skip is a decision, not a failure: it is counted and logged and
//! the walk moves on.

use std::fmt;

use super::IndexingOptions;

/// Extensions that are never indexed, compared case-insensitively
const BINARY_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "ico", "svg", "zip", "tar", "gz", "rar", "7z", "pdf",
    "doc", "docx", "xls", "xlsx", "ppt", "pptx", "mp3", "mp4", "wav", "avi", "mov", "so", "dll",
    "exe", "bin",
];

/// Version control metadata directories
const VCS_DIRECTORIES: &[&str] = &[".git", ".hg", ".svn"];

/// Why an entry was not indexed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Version control metadata directory, pruned with its subtree
    VcsDirectory,
    /// Name starts with `.`; directories are pruned with their subtree
    Hidden,
    /// Extension is on the binary denylist
    BinaryExtension,
    /// Path looks like git internals
    VcsMarker,
    /// File is larger than the configured maximum
    TooLarge {
        /// Size of the file in bytes
        size: u64,
    },
    /// Leading bytes contain NUL or non-ASCII data
    BinaryContent,
    /// File could not be read
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VcsDirectory => f.write_str("version control directory"),
            Self::Hidden => f.write_str("hidden entry"),
            Self::BinaryExtension => f.write_str("binary extension"),
            Self::VcsMarker => f.write_str("version control marker"),
            Self::TooLarge { size } => write!(f, "too large ({size} bytes)"),
            Self::BinaryContent => f.write_str("binary content"),
            Self::Unreadable => f.write_str("unreadable"),
        }
    }
}

/// Outcome of classifying one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Keep going: descend into the directory or read the file
    Accept,
    /// Do not index
    Skip(SkipReason),
}

impl Classification {
    /// Whether the entry was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Decides which walk entries are indexed
///
/// Never called for the walk root itself: temporary clone directories may
/// carry a dot-prefixed name.
#[derive(Debug, Clone)]
pub struct FileClassifier {
    max_file_size: u64,
    binary_sniff_len: usize,
}

impl FileClassifier {
    /// Create a classifier using the thresholds in `options`
    pub fn new(options: &IndexingOptions) -> Self {
        Self {
            max_file_size: options.max_file_size,
            binary_sniff_len: options.binary_sniff_len,
        }
    }

    /// Classify an entry by its repository-relative, slash-separated path
    pub fn classify_entry(&self, relative_path: &str, is_dir: bool) -> Classification {
        let name = relative_path.rsplit('/').next().unwrap_or(relative_path);

        if is_dir {
            return if VCS_DIRECTORIES.contains(&name) {
                Classification::Skip(SkipReason::VcsDirectory)
            } else if name.starts_with('.') {
                Classification::Skip(SkipReason::Hidden)
            } else {
                Classification::Accept
            };
        }

        if name.starts_with('.') {
            return Classification::Skip(SkipReason::Hidden);
        }
        if has_binary_extension(name) {
            return Classification::Skip(SkipReason::BinaryExtension);
        }
        if is_vcs_marker(relative_path) {
            return Classification::Skip(SkipReason::VcsMarker);
        }

        Classification::Accept
    }

    /// Classify a file by its size before reading it
    pub fn classify_size(&self, size: u64) -> Classification {
        if size > self.max_file_size {
            Classification::Skip(SkipReason::TooLarge { size })
        } else {
            Classification::Accept
        }
    }

    /// Classify file content: size limit, then the binary sniffer
    ///
    /// The sniffer rejects any byte >= 128 in the inspected prefix, which also
    /// rejects UTF-8 text with non-ASCII characters near the start of a file.
    pub fn classify_content(&self, content: &[u8]) -> Classification {
        let size = content.len() as u64;
        if size > self.max_file_size {
            return Classification::Skip(SkipReason::TooLarge { size });
        }

        let sniffed = &content[..content.len().min(self.binary_sniff_len)];
        if sniffed.iter().any(|&b| b == 0 || b >= 128) {
            return Classification::Skip(SkipReason::BinaryContent);
        }

        Classification::Accept
    }
}

impl Default for FileClassifier {
    fn default() -> Self {
        Self::new(&IndexingOptions::default())
    }
}

fn has_binary_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(stem, ext)| {
        !stem.is_empty()
            && BINARY_EXTENSIONS
                .iter()
                .any(|binary| binary.eq_ignore_ascii_case(ext))
    })
}

fn is_vcs_marker(relative_path: &str) -> bool {
    relative_path.contains(".git/")
        || relative_path.starts_with(".git")
        || relative_path == "DIRC"
        || relative_path.contains("index.lock")
}
