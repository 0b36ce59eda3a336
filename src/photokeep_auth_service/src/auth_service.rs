use axum::{Router, routing::post};
use photokeep_axum::routes::{login, register};
use photokeep_core::UserDirectory;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Login service exposing the authentication and registration routes
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService backed by the provided user directory
    ///
    /// # Note on Architecture
    /// Directories implement Clone via an internal Arc for thread-safe
    /// sharing; every route receives the same directory as state.
    pub fn new<D>(directory: D) -> Self
    where
        D: UserDirectory + Clone + 'static,
    {
        let router = Router::new()
            .route("/login", post(login::<D>))
            .route("/register", post(register::<D>))
            .with_state(directory)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        Self { router }
    }

    /// Convert the AuthService into a router that can be mounted on another
    /// application
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Run as a standalone server on the given listener
    pub async fn run(self, listener: TcpListener) -> std::io::Result<()> {
        axum::serve(listener, self.router).await
    }
}
