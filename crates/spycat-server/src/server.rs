use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use log::{error, info};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

/// Builds the CORS policy.
///
/// A `*` entry allows any origin. Browsers refuse a literal wildcard on
/// credentialed requests, so with credentials enabled the request origin,
/// method and headers are echoed back instead.
pub fn cors_layer(allowed_origins: &[String], allow_credentials: bool) -> Result<CorsLayer> {
    let wildcard = allowed_origins.iter().any(|origin| origin == "*");

    let origin = match (wildcard, allow_credentials) {
        (true, true) => AllowOrigin::mirror_request(),
        (true, false) => AllowOrigin::from(Any),
        (false, _) => {
            let origins = allowed_origins
                .iter()
                .map(|origin| {
                    origin
                        .parse::<HeaderValue>()
                        .with_context(|| format!("Invalid allowed origin '{origin}'"))
                })
                .collect::<Result<Vec<_>>>()?;
            AllowOrigin::list(origins)
        }
    };

    let cors = if allow_credentials {
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    } else {
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(Any)
    };

    Ok(cors)
}

/// Serves the application until Ctrl+C is received.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let address = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("Spycat agency listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_wildcard_with_credentials() {
        assert!(cors_layer(&["*".to_string()], true).is_ok());
        assert!(cors_layer(&["*".to_string()], false).is_ok());
    }

    #[test]
    fn test_cors_layer_accepts_origin_list() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://agency.example".to_string(),
        ];
        assert!(cors_layer(&origins, true).is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_malformed_origin() {
        assert!(cors_layer(&["bad\norigin".to_string()], false).is_err());
    }
}
