use std::error::Error as StdError;
use std::io::ErrorKind;

use crate::error::ApiError;

/// Walks the source chain looking for an io error of `kind`, or a message
/// containing `needle` when the io error has been flattened to text.
fn error_chain_matches(err: &(dyn StdError + 'static), kind: ErrorKind, needle: &str) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(source) = current {
        if let Some(io_err) = source.downcast_ref::<std::io::Error>()
            && io_err.kind() == kind
        {
            return true;
        }

        if source.to_string().to_ascii_lowercase().contains(needle) {
            return true;
        }

        current = source.source();
    }

    false
}

fn error_chain_has_connection_refused(err: &(dyn StdError + 'static)) -> bool {
    error_chain_matches(err, ErrorKind::ConnectionRefused, "connection refused")
}

fn error_chain_has_timeout(err: &(dyn StdError + 'static)) -> bool {
    error_chain_matches(err, ErrorKind::TimedOut, "timed out")
}

pub(crate) fn transport_error(err: reqwest::Error, api_url: &str) -> ApiError {
    let message = if err.is_timeout() || error_chain_has_timeout(&err) {
        format!(
            "Request to completion API at '{}' timed out. Check your network connection.",
            api_url
        )
    } else if err.is_connect() && error_chain_has_connection_refused(&err) {
        format!(
            "Connection refused by completion API at '{}'. \
             Check AI_CLI_TOOL_API_BASE_URL if you have overridden it.",
            api_url
        )
    } else if err.is_connect() {
        format!(
            "Failed to connect to completion API at '{}'. \
             Check AI_CLI_TOOL_API_BASE_URL and network connectivity.",
            api_url
        )
    } else {
        format!("Failed to call completion API at '{}': {}", api_url, err)
    };

    ApiError::Transport { message }
}

#[cfg(test)]
mod tests {
    use super::{error_chain_has_connection_refused, error_chain_has_timeout, transport_error};
    use crate::error::ApiError;
    use reqwest::Client;
    use std::net::TcpListener;
    use std::thread;
    use std::time::Duration;

    fn free_local_addr() -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
        let addr = listener.local_addr().expect("address should be available");
        drop(listener);
        addr
    }

    #[tokio::test]
    async fn maps_connection_refused_to_transport_error() {
        let addr = free_local_addr();
        let api_url = format!("http://{}/v1/chat/completions", addr);
        let client = Client::builder()
            .timeout(Duration::from_millis(300))
            .build()
            .expect("client should build");

        let req_err = client
            .post(&api_url)
            .send()
            .await
            .expect_err("request should fail with connection-refused");
        let mapped = transport_error(req_err, &api_url);

        let message = match mapped {
            ApiError::Transport { message } => message,
            other => panic!("expected transport error, got {other:?}"),
        };
        assert!(
            message.contains("Connection refused by completion API"),
            "unexpected message: {message}"
        );
        assert!(
            message.contains("AI_CLI_TOOL_API_BASE_URL"),
            "unexpected message: {message}"
        );
    }

    #[tokio::test]
    async fn maps_timeouts_to_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
        let addr = listener.local_addr().expect("address should be available");
        let server = thread::spawn(move || {
            let (_stream, _) = listener.accept().expect("accept should succeed");
            thread::sleep(Duration::from_secs(1));
        });

        let api_url = format!("http://{}/v1/chat/completions", addr);
        let client = Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("client should build");

        let req_err = client
            .post(&api_url)
            .send()
            .await
            .expect_err("request should fail with timeout");
        let mapped = transport_error(req_err, &api_url);

        let message = match mapped {
            ApiError::Transport { message } => message,
            other => panic!("expected transport error, got {other:?}"),
        };
        assert!(message.contains("timed out"), "unexpected message: {message}");
        assert!(message.contains(&api_url), "unexpected message: {message}");

        server.join().expect("server thread should join");
    }

    #[test]
    fn detects_timeout_from_error_kind() {
        let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline");
        assert!(error_chain_has_timeout(&err));
    }

    #[test]
    fn detects_connection_refused_from_message() {
        let err = std::io::Error::other("tcp connect error: Connection refused (os error 111)");
        assert!(error_chain_has_connection_refused(&err));
        assert!(!error_chain_has_timeout(&err));
    }
}
