use std::path::PathBuf;
use thiserror::Error;

/// Failures around the stored credential and its file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not set. Run `ai-cli-tool set-key <your-api-key>` first.")]
    MissingApiKey,

    #[error("Could not determine the home directory for the config file")]
    NoHomeDirectory,

    #[error("Failed to read config file '{}'", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "Config file '{}' is malformed (rewrite it with `ai-cli-tool set-key <your-api-key>`)",
        .path.display()
    )]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{}'", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode config file contents")]
    Encode(#[source] serde_json::Error),
}

/// Failures talking to the completion API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// No response was received.
    #[error("{message}")]
    Transport { message: String },

    #[error("Unexpected response from completion API: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Renders an error for the terminal, prefixing upstream API failures the
/// way users of the tool expect to see them.
pub fn render_error(err: &anyhow::Error) -> String {
    if let Some(CompletionError::Api(ApiError::Upstream { message, .. })) =
        err.downcast_ref::<CompletionError>()
    {
        return format!("Error from OpenAI API: {message}");
    }

    format!("Error: {err:#}")
}
