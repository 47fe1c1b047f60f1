//! Server startup from command line arguments

use crate::config::Cli;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Load configuration, open the storage directory and serve until shutdown
pub async fn run_server(cli: Cli) -> Result<()> {
    info!("Starting {} {}", crate::NAME, crate::VERSION);

    let config = cli.load_config().await?;
    let server = HttpServer::new(&config).await?;

    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!(
        "Storing files in: {}",
        server.state().registry.base_path().display()
    );
    info!("API Endpoints:");
    info!("   GET    /health - Health check");
    info!("   POST   /api/upload - Upload a file (multipart field 'file')");
    info!("   GET    /api/files - List files");
    info!("   GET    /api/download/{{filename}} - Download a file");
    info!("   DELETE /api/files/{{filename}} - Delete a file");

    server.start().await
}
