use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::services::participants::ParticipantService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
    offline: bool,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig, offline: bool) -> Self {
        Self {
            port,
            config,
            offline,
        }
    }

    pub async fn run(self) -> Result<()> {
        let mut service = ParticipantService::new(&self.config)?;
        if self.offline {
            service = service.offline();
        }
        let catalogue = service.load_catalogue().await?;

        let state = Arc::new(AppState {
            config: self.config,
            catalogue,
            service,
        });

        let app = create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
