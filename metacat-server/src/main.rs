use metacat_server::config::ServerConfig;
use metacat_server::handlers::AppState;
use metacat_server::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ServerConfig::from_env()?;
    let app = routes::build_router(AppState::new());

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    log::info!("metadata service listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
