use poem::{listener::TcpListener, Server};

use crate::api::build_app;
use crate::app_data::AppData;
use crate::config::BootstrapSettings;

/// Serve the HTTP API until the process is stopped
pub async fn run_server(settings: &BootstrapSettings, app_data: &AppData) -> Result<(), std::io::Error> {
    let app = build_app(app_data.inventory_service.clone(), &settings.public_url());
    let address = settings.server_address();

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at {}/swagger", settings.public_url());

    Server::new(TcpListener::bind(address)).run(app).await
}
