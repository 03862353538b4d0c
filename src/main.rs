pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::profile;

mod config;

use crate::config::AppConfig;
use crate::profile::adapter::outgoing::InMemoryProfileStore;
use crate::profile::application::domain::policies::attachment_policy::AttachmentPolicy;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::services::{
    DashboardSessionService, ListProfilesService, SaveProfileService,
};
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileUseCases,
    pub attachment_policy: AttachmentPolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();
    info!(
        environment = %config.environment,
        max_upload_bytes = config.max_upload_bytes,
        "Server run on: {}",
        server_url
    );

    let attachment_policy = AttachmentPolicy::new(config.max_upload_bytes);

    // One store and one dashboard session for the whole process
    let store = InMemoryProfileStore::new();
    let save = Arc::new(SaveProfileService::new(store.clone()));
    let list = Arc::new(ListProfilesService::new(store));
    let session = DashboardSessionService::new(save.clone(), list.clone(), attachment_policy.clone());

    let state = AppState {
        profile: ProfileUseCases {
            save,
            list,
            session: Arc::new(session),
        },
        attachment_policy,
    };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("Server terminated with an error")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Profiles
    cfg.service(crate::profile::adapter::incoming::web::routes::save_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::list_profiles_handler);
    // Dashboard session
    cfg.service(crate::profile::adapter::incoming::web::routes::get_session_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::dispatch_event_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
