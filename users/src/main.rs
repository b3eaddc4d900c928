use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use anyhow::Context;
use env_logger::Env;
use std::sync::Arc;
use users::api::app::create_app;
use users::domain::repository::UserRepository;
use users::infra::config::Config;
use users::infra::db;
use users::infra::repository::user::PgUserRepository;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let pool = db::pg(&config)
        .await
        .context("failed to connect to the database")?;
    db::migrate(&pool)
        .await
        .context("failed to apply migrations")?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool));
    let cors_origin = config.cors_origin.clone();

    log::info!(host = config.http_host.as_str(), port = config.http_port; "Start server");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .configure(create_app(Arc::clone(&user_repo)))
            .wrap(cors)
            .wrap(Logger::default())
    })
    .bind((config.http_host.as_str(), config.http_port))?
    .run()
    .await?;

    Ok(())
}
