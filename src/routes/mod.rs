// Route exports
pub mod pages;
pub mod students;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::index))
        .route("/health", web::get().to(students::health_check))
        .service(web::scope("/students").configure(students::configure));
}
