mod config;
mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = match config::HostConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid host configuration");
            std::process::exit(1);
        }
    };

    let app = match routes::app() {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("failed to bind");

    tracing::info!(
        addr = %config.addr,
        api = pyxell_client::config::api_base_url(),
        "pyxell-web listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
