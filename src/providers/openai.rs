use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::model::ChatRequest;
use crate::providers::http_errors::transport_error;

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pulls `choices[0].message.content` out of a success body.
fn parse_completion(body: &str) -> Result<String, ApiError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|err| ApiError::MalformedResponse(format!("invalid JSON body: {err}")))?;

    parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::MalformedResponse("response contained no choices".to_string()))?
        .message
        .content
        .ok_or_else(|| {
            ApiError::MalformedResponse("first choice carried no message content".to_string())
        })
}

fn upstream_error(status: StatusCode, body: &str) -> ApiError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => format!(
            "request failed with status {}",
            status.canonical_reason().unwrap_or(status.as_str())
        ),
    };

    ApiError::Upstream {
        status: status.as_u16(),
        message,
    }
}

pub async fn chat(
    client: &Client,
    cfg: &Config,
    api_key: &str,
    request: &ChatRequest,
) -> Result<String, ApiError> {
    let api_url = cfg.chat_completions_url();
    debug!(
        api_url = %api_url,
        model = %request.model,
        message_count = request.messages.len(),
        "sending chat completion request"
    );

    let response = client
        .post(&api_url)
        .header(header::CONTENT_TYPE, "application/json")
        .bearer_auth(api_key)
        .json(request)
        .send()
        .await
        .map_err(|err| {
            warn!(api_url = %api_url, error = %err, "completion request failed");
            transport_error(err, &api_url)
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| transport_error(err, &api_url))?;

    if !status.is_success() {
        warn!(
            api_url = %api_url,
            status = %status,
            response_body_len = body.len(),
            "completion API returned non-success status"
        );
        return Err(upstream_error(status, &body));
    }

    let content = parse_completion(&body)?;
    debug!(
        model = %request.model,
        response_len = content.len(),
        "received chat completion response"
    );
    Ok(content)
}
