use std::net::IpAddr;

use axum::Router;
use medspace_core_health_contracts::HealthService;
use medspace_core_lead_contracts::LeadService;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Lead> {
    health: Health,
    lead: Lead,
}

impl<Health, Lead> RestServer<Health, Lead>
where
    Health: HealthService,
    Lead: LeadService,
{
    pub fn new(health: Health, lead: Lead) -> Self {
        Self { health, lead }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::lead::router(self.lead.into()));
        // the marketing site calls this API cross-origin
        let router = router.layer(CorsLayer::permissive());
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        middlewares::panic_handler::add(router)
    }
}
