//! Dispatches a configured [`McpServer`] to the selected transport.

use tracing::{Instrument, error, info, info_span};

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "tcp")]
use super::tcp::TcpTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Owns the transport choice until the server is handed over in [`run`](Self::run).
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Serve `server` until the transport stops.
    ///
    /// STDIO returns when the client disconnects; TCP and HTTP only return
    /// on a listener error.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let span = info_span!("transport", kind = self.config.kind());
        info!(parent: &span, "Serving on {}", self.config);

        let outcome = match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).instrument(span.clone()).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => {
                TcpTransport::new(cfg)
                    .run(server)
                    .instrument(span.clone())
                    .await
            }
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => {
                HttpTransport::new(cfg)
                    .run(server)
                    .instrument(span.clone())
                    .await
            }
        };

        if let Err(e) = &outcome {
            error!(parent: &span, "Transport stopped: {}", e);
        }
        outcome
    }
}
