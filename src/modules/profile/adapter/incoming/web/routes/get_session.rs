use actix_web::{get, web, Responder};

use crate::{
    profile::adapter::incoming::web::routes::dispatch_event::map_session_error,
    shared::api::ApiResponse, AppState,
};

#[get("/api/session")]
pub async fn get_session_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.session.view().await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_session_error(err),
    }
}
