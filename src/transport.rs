//! Bounded-retry HTTP transport shared by every endpoint call.

use std::time::Duration;

use reqwest::{Client, Request, RequestBuilder, StatusCode};

/// Maximum attempts per request, counting the first.
pub const MAX_ATTEMPTS: u32 = 3;

/// Connect and read timeouts applied to every attempt.
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(120);

/// Final outcome of executing a request: always a reply, never an error.
#[derive(Debug)]
pub struct TransportReply {
    /// HTTP status of the final response, or 500 for a placeholder.
    pub status: StatusCode,
    /// Response body, buffered in full. Empty for a placeholder.
    pub body: Vec<u8>,
    /// The last connection-level failure. Present only on a placeholder
    /// reply, when no attempt produced an HTTP response.
    pub network_error: Option<String>,
}

impl TransportReply {
    fn placeholder(reason: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Vec::new(),
            network_error: Some(reason),
        }
    }
}

/// HTTP transport that tries each request up to [`MAX_ATTEMPTS`] times.
///
/// Retries are immediate, with no delay between attempts. The first 2xx
/// response is returned at once. A non-2xx response is kept and the request
/// re-sent; a connection-level failure is logged and the request re-sent.
/// When the attempts run out, the most recent real response wins regardless
/// of status, and only when no attempt produced a response at all does the
/// caller receive a placeholder with status 500 and an empty body.
pub struct RetryTransport {
    client: Client,
}

impl RetryTransport {
    /// Create a transport with 120 second connect and read timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder()
            .connect_timeout(ATTEMPT_TIMEOUT)
            .read_timeout(ATTEMPT_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Start a POST request bound to this transport's client.
    #[must_use]
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.client.post(url)
    }

    /// Execute a request, trying up to [`MAX_ATTEMPTS`] times.
    ///
    /// Never returns an error: the reply is either the final HTTP response
    /// (any status) or a placeholder recording the last connection failure.
    pub async fn execute(&self, request: Request) -> TransportReply {
        let mut pending = Some(request);
        let mut last_reply: Option<TransportReply> = None;
        let mut last_error: Option<reqwest::Error> = None;

        for attempt in 1..=MAX_ATTEMPTS {
            let Some(request) = pending.take() else {
                break;
            };
            // Buffered bodies always clone; a streaming body cannot be
            // re-issued and gets a single attempt.
            pending = request.try_clone();

            match self.attempt(request).await {
                Ok(reply) if reply.status.is_success() => return reply,
                Ok(reply) => {
                    tracing::warn!(
                        "Request failed with status {}, attempt {}/{}",
                        reply.status,
                        attempt,
                        MAX_ATTEMPTS
                    );
                    last_reply = Some(reply);
                }
                Err(err) => {
                    tracing::warn!("Request failed: {}, attempt {}/{}", err, attempt, MAX_ATTEMPTS);
                    last_error = Some(err);
                }
            }
        }

        if let Some(reply) = last_reply {
            return reply;
        }
        let reason = if let Some(err) = last_error {
            err.to_string()
        } else {
            String::new()
        };
        tracing::warn!("No response after {} attempts, synthesizing a 500", MAX_ATTEMPTS);
        TransportReply::placeholder(reason)
    }

    /// One attempt: send the request and buffer the whole body.
    async fn attempt(&self, request: Request) -> reqwest::Result<TransportReply> {
        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok(TransportReply { status, body: body.to_vec(), network_error: None })
    }
}
