//! HTTP server configuration object and helpers.

use std::net::{SocketAddr, TcpListener};

use super::state_builders::MovieStore;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind: Bind,
    pub(crate) store: MovieStore,
    pub(crate) cors_origins: Vec<String>,
}

/// Where the server accepts connections.
pub(crate) enum Bind {
    Address(SocketAddr),
    Listener(TcpListener),
}

impl ServerConfig {
    /// Serve `store` on `bind_addr` with cross-origin requests disabled.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: MovieStore) -> Self {
        Self {
            bind: Bind::Address(bind_addr),
            store,
            cors_origins: Vec::new(),
        }
    }

    /// Serve on an already bound listener, e.g. one bound to port 0 in tests.
    #[must_use]
    pub fn with_listener(mut self, listener: TcpListener) -> Self {
        self.bind = Bind::Listener(listener);
        self
    }

    /// Browser origins allowed to call the API; `["*"]` allows any.
    #[must_use]
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }
}
