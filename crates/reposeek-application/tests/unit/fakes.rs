//! Recording port implementations shared by the unit tests

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use reposeek_domain::ports::{
    ChatCompletionProvider, EmbeddingProvider, RepositoryCloner, VectorStoreProvider,
};
use reposeek_domain::{ChatRequest, CodeChunk, Embedding, Error, Result};

/// Embeds text as `[len, 1.0]`; fails for texts containing `fail_on`
#[derive(Default)]
pub struct RecordingEmbedder {
    pub texts: Mutex<Vec<String>>,
    pub fail_on: Option<String>,
}

impl RecordingEmbedder {
    pub fn failing_on(marker: &str) -> Self {
        Self {
            fail_on: Some(marker.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.texts.lock().expect("lock").len()
    }
}

#[async_trait]
impl EmbeddingProvider for RecordingEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let mut recorded = self.texts.lock().expect("lock");
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            if self.fail_on.as_deref().is_some_and(|m| text.contains(m)) {
                return Err(Error::embedding("quota exceeded"));
            }
            recorded.push(text.clone());
            embeddings.push(Embedding::new(vec![text.len() as f32, 1.0], "recording"));
        }
        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        2
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

/// Records stored chunks and serves canned search results
#[derive(Default)]
pub struct RecordingStore {
    pub stored: Mutex<Vec<CodeChunk>>,
    pub searches: Mutex<Vec<(String, String, usize)>>,
    pub results: Vec<CodeChunk>,
    pub fail_path: Option<String>,
}

impl RecordingStore {
    pub fn with_results(results: Vec<CodeChunk>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }

    pub fn failing_for(path: &str) -> Self {
        Self {
            fail_path: Some(path.to_string()),
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<CodeChunk> {
        self.stored.lock().expect("lock").clone()
    }
}

#[async_trait]
impl VectorStoreProvider for RecordingStore {
    async fn store(&self, chunk: &CodeChunk) -> Result<()> {
        if self.fail_path.as_deref() == Some(chunk.file_path.as_str()) {
            return Err(Error::vector_store("upsert rejected"));
        }
        self.stored.lock().expect("lock").push(chunk.clone());
        Ok(())
    }

    async fn search(
        &self,
        _vector: &[f32],
        repository: &str,
        branch: &str,
        limit: usize,
    ) -> Result<Vec<CodeChunk>> {
        self.searches
            .lock()
            .expect("lock")
            .push((repository.to_string(), branch.to_string(), limit));
        Ok(self.results.iter().take(limit).cloned().collect())
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

/// Returns a fixed reply or a fixed error and records the request
pub struct FakeChat {
    pub requests: Mutex<Vec<ChatRequest>>,
    pub reply: std::result::Result<String, String>,
}

impl FakeChat {
    pub fn replying(reply: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            reply: Ok(reply.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            reply: Err(message.to_string()),
        }
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().expect("lock").last().cloned()
    }
}

#[async_trait]
impl ChatCompletionProvider for FakeChat {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        self.requests.lock().expect("lock").push(request.clone());
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(Error::network_with_source(
                format!("chat transport failed: {message}"),
                std::io::Error::other(message.clone()),
            )),
        }
    }

    fn provider_name(&self) -> &str {
        "fake"
    }
}

/// Writes fixture files into the clone target instead of running git
#[derive(Default)]
pub struct FixtureCloner {
    pub files: Vec<(String, Vec<u8>)>,
    pub fail_with: Option<String>,
    pub targets: Mutex<Vec<PathBuf>>,
}

impl FixtureCloner {
    pub fn with_files(entries: &[(&str, &str)]) -> Self {
        Self {
            files: files(entries),
            ..Self::default()
        }
    }

    pub fn failing(stderr: &str) -> Self {
        Self {
            fail_with: Some(stderr.to_string()),
            ..Self::default()
        }
    }

    pub fn last_target(&self) -> Option<PathBuf> {
        self.targets.lock().expect("lock").last().cloned()
    }
}

#[async_trait]
impl RepositoryCloner for FixtureCloner {
    async fn clone_repository(&self, _url: &str, target: &Path, _branch: &str) -> Result<()> {
        self.targets.lock().expect("lock").push(target.to_path_buf());
        if let Some(stderr) = &self.fail_with {
            return Err(Error::io(format!("git clone failed: {stderr}")));
        }
        write_files(target, &self.files);
        Ok(())
    }
}

/// Create `files` below `root`, creating parent directories
pub fn write_files(root: &Path, files: &[(String, Vec<u8>)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write fixture");
    }
}

/// Shorthand for building fixture file lists
pub fn files(entries: &[(&str, &str)]) -> Vec<(String, Vec<u8>)> {
    entries
        .iter()
        .map(|(path, content)| ((*path).to_string(), content.as_bytes().to_vec()))
        .collect()
}

pub fn chunk(path: &str, content: &str) -> CodeChunk {
    CodeChunk::new(content, path, "acme/widgets", "main", "Go")
}
