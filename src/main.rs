use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use flashcard_server::{
    app_state::AppState,
    config::Config,
    handlers::{flashcard_handler, health_handler},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.warn_if_incomplete();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = web::Data::new(AppState::new(config));

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(health_handler::configure)
            .configure(flashcard_handler::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
