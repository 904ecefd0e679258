//! Request handlers for the score store endpoints.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::context::validate_name;
use crate::models::ScoreRecord;
use crate::protocol::{error_body, success_response, AddScoreRequest, ScoreAccepted};
use crate::store::ScoreStore;

/// State shared by every worker.
pub struct ScoreService {
    pub store: Arc<dyn ScoreStore>,
    /// Highest score a submission may claim.
    pub max_score: u32,
}

impl ScoreService {
    pub fn new(store: Arc<dyn ScoreStore>, max_score: u32) -> Self {
        Self { store, max_score }
    }
}

pub async fn add_score(
    service: web::Data<ScoreService>,
    body: web::Json<AddScoreRequest>,
) -> HttpResponse {
    let request = body.into_inner();

    let name = match validate_name(&request.name) {
        Ok(name) => name,
        Err(reason) => {
            log::warn!("Rejected score submission: {}", reason);
            return HttpResponse::BadRequest().json(error_body(reason));
        }
    };

    if request.score > service.max_score {
        log::warn!(
            "Rejected score {} from {}: above maximum {}",
            request.score,
            name,
            service.max_score
        );
        return HttpResponse::BadRequest().json(error_body(format!(
            "Score must be between 0 and {}",
            service.max_score
        )));
    }

    match service.store.add(ScoreRecord::new(name.clone(), request.score)) {
        Ok(id) => {
            log::info!("Recorded score {} for {}", request.score, name);
            HttpResponse::Created().json(ScoreAccepted {
                status: "success".to_string(),
                message: "Score added successfully.".to_string(),
                id: id.to_string(),
            })
        }
        Err(e) => {
            log::error!("Failed to record score for {}: {}", name, e);
            HttpResponse::InternalServerError().json(error_body(e.to_string()))
        }
    }
}

pub async fn get_leaderboard(service: web::Data<ScoreService>) -> HttpResponse {
    match service.store.leaderboard() {
        Ok(scores) => HttpResponse::Ok().json(scores),
        Err(e) => {
            log::error!("Failed to read leaderboard: {}", e);
            HttpResponse::InternalServerError().json(error_body(e.to_string()))
        }
    }
}

pub async fn clear_leaderboard(service: web::Data<ScoreService>) -> HttpResponse {
    match service.store.clear() {
        Ok(()) => {
            log::info!("Leaderboard cleared");
            HttpResponse::Ok().json(success_response("Leaderboard cleared successfully."))
        }
        Err(e) => {
            log::error!("Failed to clear leaderboard: {}", e);
            HttpResponse::InternalServerError().json(error_body(e.to_string()))
        }
    }
}
