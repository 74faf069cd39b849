//! Service graph assembly
//!
//! Builds the providers selected by [`AppConfig`] and the services and
//! dispatcher composed from them.

use std::sync::Arc;

use reposeek_application::{IndexingService, SearchService, ToolDispatcher};
use reposeek_domain::error::Result;
use reposeek_domain::ports::{
    ChatCompletionProvider, EmbeddingProvider, RepositoryCloner, VectorStoreProvider,
};
use tracing::info;

use crate::config::AppConfig;
use crate::factory::{
    ChatProviderFactory, EmbeddingProviderFactory, VectorStoreProviderFactory, create_cloner,
    create_http_client,
};

/// Port implementations the services are built from
pub struct Providers {
    /// Repository cloner
    pub cloner: Arc<dyn RepositoryCloner>,
    /// Embedding provider
    pub embedding: Arc<dyn EmbeddingProvider>,
    /// Vector store
    pub vector_store: Arc<dyn VectorStoreProvider>,
    /// Chat completion provider
    pub chat: Arc<dyn ChatCompletionProvider>,
}

impl Providers {
    /// Build every provider named in `config`
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let http_client = create_http_client()?;
        let providers = &config.providers;

        Ok(Self {
            cloner: create_cloner(),
            embedding: EmbeddingProviderFactory::create(&providers.embedding, http_client.clone())?,
            vector_store: VectorStoreProviderFactory::create(
                &providers.vector_store,
                http_client.clone(),
            )?,
            chat: ChatProviderFactory::create(&providers.chat, http_client)?,
        })
    }
}

/// Fully wired application services
pub struct AppContext {
    /// Repository ingestion
    pub indexing: Arc<IndexingService>,
    /// Retrieval and summaries
    pub search: Arc<SearchService>,
    /// Tool request routing
    pub dispatcher: ToolDispatcher,
}

impl AppContext {
    /// Build providers from `config` and wire the services
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let providers = Providers::from_config(config)?;
        Ok(Self::with_providers(config, providers))
    }

    /// Wire the services around already constructed providers
    pub fn with_providers(config: &AppConfig, providers: Providers) -> Self {
        info!(
            embedding = providers.embedding.provider_name(),
            vector_store = providers.vector_store.provider_name(),
            chat = providers.chat.provider_name(),
            "Wiring services"
        );

        let indexing = Arc::new(IndexingService::new(
            &config.indexing.to_options(),
            providers.cloner,
            Arc::clone(&providers.embedding),
            Arc::clone(&providers.vector_store),
        ));
        let search = Arc::new(SearchService::new(
            providers.embedding,
            providers.vector_store,
            providers.chat,
            config.search.to_options(),
        ));
        let dispatcher = ToolDispatcher::new(Arc::clone(&indexing), Arc::clone(&search));

        Self {
            indexing,
            search,
            dispatcher,
        }
    }
}
