use color_eyre::eyre::Result;
use photokeep_adapters::{HashMapUserDirectory, config::ServiceSettings};
use photokeep_auth_service::{AuthService, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = ServiceSettings::load()?;

    // Persistence behind the directory is out of scope for this service;
    // swap in another UserDirectory implementation here when one exists.
    let directory = HashMapUserDirectory::new();

    let service = AuthService::new(directory);

    let listener = TcpListener::bind(settings.app.address()).await?;
    tracing::info!("Photokeep login service listening on {}", listener.local_addr()?);

    service.run(listener).await?;

    Ok(())
}
