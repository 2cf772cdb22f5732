pub mod export_handler;
pub mod quiz_handler;

use actix_web::{get, HttpResponse};

pub use export_handler::{generate_pdf, generate_word};
pub use quiz_handler::{fetch_text, generate_test};

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/")]
async fn index() -> actix_web::Result<actix_files::NamedFile> {
    Ok(actix_files::NamedFile::open("static/index.html")?)
}
