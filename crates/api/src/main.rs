use anyhow::Context;

use catalog_api::ApiConfig;
use catalog_products::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = catalog_api::app::build_app(Catalog::seeded());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "Servidor REST activo en http://localhost:{}", local.port());

    axum::serve(listener, catalog_api::app::make_service(app))
        .await
        .context("server terminated")?;
    Ok(())
}
