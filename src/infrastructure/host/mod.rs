//! Model Host
//!
//! Serves instantiation requests from a backend. Each request names a model
//! by its registered string name; the host resolves the factory through the
//! shared registry and replies with the instantiated model or an error.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::domain::host::{CreateModelMessage, HostError, HostReply};
use crate::domain::model::Model;
use crate::infrastructure::registry::SharedModelRegistry;

/// Default upper bound on the size of a single request line
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 1024 * 1024;

/// Dispatches create requests against a registry
#[derive(Debug, Clone)]
pub struct ModelHost {
    registry: Arc<SharedModelRegistry>,
    max_request_bytes: usize,
}

impl ModelHost {
    pub fn new(registry: Arc<SharedModelRegistry>) -> Self {
        Self {
            registry,
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }

    /// Limit the size of a single request line accepted by `serve`
    pub fn with_max_request_bytes(mut self, max_request_bytes: usize) -> Self {
        self.max_request_bytes = max_request_bytes;
        self
    }

    pub fn registry(&self) -> &Arc<SharedModelRegistry> {
        &self.registry
    }

    /// Resolve the requested model and create an instance from the message config
    #[instrument(skip(self, message), fields(model = %message.model))]
    pub fn instantiate(&self, message: CreateModelMessage) -> Result<Box<dyn Model>, HostError> {
        let factory = self.registry.resolve(&message.model)?;
        let model = factory.create(message.config)?;

        debug!(id = model.id(), "Model instantiated");
        Ok(model)
    }

    /// Handle a parsed message, always producing a reply
    pub fn handle(&self, message: CreateModelMessage) -> HostReply {
        let request_id = message.id.clone();

        match self.instantiate(message) {
            Ok(model) => HostReply::created(request_id, model.to_json()),
            Err(e) => {
                warn!(error = %e, "Instantiation request failed");
                HostReply::error(request_id, e.kind(), e.to_string())
            }
        }
    }

    /// Handle a single JSON encoded message
    ///
    /// A string `id` is echoed back even when the rest of the message is
    /// malformed.
    pub fn handle_line(&self, line: &str) -> HostReply {
        let value = match serde_json::from_str::<Value>(line) {
            Ok(value) => value,
            Err(e) => return Self::invalid_message(None, e.to_string()),
        };

        let request_id = value
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string);

        match serde_json::from_value::<CreateModelMessage>(value) {
            Ok(message) => self.handle(message),
            Err(e) => Self::invalid_message(request_id, e.to_string()),
        }
    }

    fn invalid_message(request_id: Option<String>, message: String) -> HostReply {
        let error = HostError::invalid_message(message);
        warn!(error = %error, "Malformed request");
        HostReply::error(request_id, error.kind(), error.to_string())
    }

    /// Serve newline delimited JSON requests until the reader is exhausted
    ///
    /// Blank lines are ignored. Lines longer than the request limit are
    /// discarded without being buffered and answered with an error.
    /// Returns the number of requests answered.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = Vec::new();
        let mut handled = 0;

        while let Some(status) =
            read_request_line(&mut reader, &mut line, self.max_request_bytes).await?
        {
            let reply = match status {
                LineStatus::Complete => {
                    let text = String::from_utf8_lossy(&line);
                    let text = text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    self.handle_line(text)
                }
                LineStatus::Oversized => Self::invalid_message(
                    None,
                    format!("request exceeds {} bytes", self.max_request_bytes),
                ),
            };

            let mut encoded = serde_json::to_vec(&reply)?;
            encoded.push(b'\n');

            writer.write_all(&encoded).await?;
            writer.flush().await?;
            handled += 1;
        }

        info!(requests = handled, "Request stream closed");
        Ok(handled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStatus {
    Complete,
    Oversized,
}

/// Read one line into `line` (without the newline), buffering at most `limit` bytes
///
/// Returns `None` once the reader is exhausted.
async fn read_request_line<R>(
    reader: &mut R,
    line: &mut Vec<u8>,
    limit: usize,
) -> std::io::Result<Option<LineStatus>>
where
    R: AsyncBufRead + Unpin,
{
    line.clear();
    let mut status = LineStatus::Complete;
    let mut read_any = false;

    loop {
        let (consumed, found_newline) = {
            let available = reader.fill_buf().await?;
            if available.is_empty() {
                return Ok(read_any.then_some(status));
            }

            let newline = available.iter().position(|&b| b == b'\n');
            let end = newline.unwrap_or(available.len());

            if status == LineStatus::Complete {
                if line.len() + end > limit {
                    status = LineStatus::Oversized;
                    line.clear();
                } else {
                    line.extend_from_slice(&available[..end]);
                }
            }

            (newline.map_or(end, |i| i + 1), newline.is_some())
        };

        reader.consume(consumed);
        read_any = true;

        if found_newline {
            return Ok(Some(status));
        }
    }
}
