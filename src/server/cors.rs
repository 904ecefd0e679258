use actix_cors::Cors;
use actix_web::http::header;

/// CORS policy for the quiz front-end. `*` allows any origin.
pub fn configure_cors(allowed_origin: &str) -> Cors {
    let cors = if allowed_origin == "*" {
        Cors::default().allow_any_origin()
    } else {
        Cors::default().allowed_origin(allowed_origin)
    };

    cors.allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}
