mod health;
mod status_map;

use std::net::SocketAddr;

use axum::Router;
use caffeine_config::Config;
use caffeine_error_handler::{ErrorHandler, RouterExt};
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration and the application's routes
    ///
    /// `routes` must not claim the health or status map paths; axum
    /// rejects overlapping routes with a panic.
    pub fn new(config: &Config, routes: Router) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = routes;

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Status table introspection
        let status_map_endpoint = &config.error_handler.status_map_endpoint;
        if status_map_endpoint.enabled {
            app = app.route(
                &status_map_endpoint.path,
                axum::routing::get(status_map::status_map_handler),
            );
        }

        // Error handler goes on last so its fallbacks and panic catcher see
        // every route
        let error_handler = ErrorHandler::new().catch_panics(config.error_handler.catch_panics);
        app = app.with_error_handler(error_handler);

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
