use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, info};

use crate::config::Config;
use crate::credentials::CredentialStore;
use crate::error::{ApiError, CompletionError, ConfigError};
use crate::model::ChatRequest;
use crate::providers;
use crate::task::TaskRequest;

pub type ChatFuture<'a> = Pin<Box<dyn Future<Output = Result<String, ApiError>> + 'a>>;

/// One request/response exchange with a chat-completions endpoint.
pub trait ChatBackend {
    fn chat<'a>(
        &'a self,
        client: &'a Client,
        cfg: &'a Config,
        api_key: &'a str,
        request: &'a ChatRequest,
    ) -> ChatFuture<'a>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiBackend;

impl ChatBackend for OpenAiBackend {
    fn chat<'a>(
        &'a self,
        client: &'a Client,
        cfg: &'a Config,
        api_key: &'a str,
        request: &'a ChatRequest,
    ) -> ChatFuture<'a> {
        Box::pin(async move { providers::openai::chat(client, cfg, api_key, request).await })
    }
}

pub struct CompletionClient<'a, B = OpenAiBackend> {
    client: &'a Client,
    cfg: &'a Config,
    store: CredentialStore,
    backend: B,
}

impl<'a> CompletionClient<'a, OpenAiBackend> {
    pub fn new(client: &'a Client, cfg: &'a Config) -> Self {
        Self::with_backend(client, cfg, OpenAiBackend)
    }
}

impl<'a, B> CompletionClient<'a, B>
where
    B: ChatBackend,
{
    pub fn with_backend(client: &'a Client, cfg: &'a Config, backend: B) -> Self {
        Self {
            client,
            cfg,
            store: CredentialStore::new(cfg.credential_path.clone()),
            backend,
        }
    }

    /// Runs `request` against the API and returns the trimmed completion.
    pub async fn complete(&self, request: &TaskRequest) -> Result<String, CompletionError> {
        let api_key = self.store.load()?.ok_or(ConfigError::MissingApiKey)?;

        let chat_request = request.prompt_spec().into_chat_request();
        info!(task = request.kind.as_str(), "running completion task");
        debug!(
            task = request.kind.as_str(),
            user_prompt_len = chat_request.messages[1].content.len(),
            "built chat request"
        );

        let content = self
            .backend
            .chat(self.client, self.cfg, &api_key, &chat_request)
            .await?;
        Ok(content.trim().to_string())
    }
}
