//! Score store HTTP server.

use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use crate::config::ServerConfig;
use crate::store::{JsonFileScoreStore, MemoryScoreStore, ScoreStore, StoreError};
use crate::QuizError;

use super::cors::configure_cors;
use super::handlers::ScoreService;
use super::routes::configure_routes;

/// Pick the store backend the configuration asks for.
pub fn open_store(config: &ServerConfig) -> Result<Arc<dyn ScoreStore>, StoreError> {
    match &config.data_file {
        Some(path) => Ok(Arc::new(JsonFileScoreStore::open(path.clone())?)),
        None => {
            log::info!("No data file configured, scores are kept in memory");
            Ok(Arc::new(MemoryScoreStore::new()))
        }
    }
}

/// Run the score store until the server is stopped.
pub async fn run(config: ServerConfig) -> Result<(), QuizError> {
    let store = open_store(&config)?;
    let service = web::Data::new(ScoreService::new(store, config.max_score));
    let allowed_origin = config.allowed_origin.clone();
    let address = config.bind_address();

    log::info!("Score store listening on {}", address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors(&allowed_origin))
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(configure_routes)
    })
    .bind(&address)?
    .run()
    .await?;

    log::info!("Score store stopped");
    Ok(())
}
