use actix_web::{error, web, HttpResponse};

use crate::protocol::{error_body, ADD_SCORE_PATH, CLEAR_LEADERBOARD_PATH, GET_LEADERBOARD_PATH};

use super::handlers::{add_score, clear_leaderboard, get_leaderboard};

/// Malformed bodies answer 400 with the usual `{error}` payload.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid score submission: {}", err);
        log::warn!("{}", message);
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(error_body(message)))
            .into()
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route(ADD_SCORE_PATH, web::post().to(add_score))
        .route(GET_LEADERBOARD_PATH, web::get().to(get_leaderboard))
        .route(CLEAR_LEADERBOARD_PATH, web::post().to(clear_leaderboard));
}
