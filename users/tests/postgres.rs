use actix_web::http::header::ContentType;
use actix_web::{test, App};
use sqlx::Executor;
use std::sync::Arc;
use users::api::app::create_app;
use users::domain::models::{NewUser, User};
use users::domain::repository::UserRepository;
use users::infra::config::Config;
use users::infra::db;
use users::infra::repository::user::PgUserRepository;

async fn repository() -> PgUserRepository {
    let config = Config::from_env().expect("DATABASE_URL must be set");
    let pool = db::pg(&config).await.unwrap();
    db::migrate(&pool).await.unwrap();
    pool.execute("truncate users restart identity").await.unwrap();

    PgUserRepository::new(pool)
}

#[actix_web::test]
#[ignore = "needs a Postgres database at DATABASE_URL"]
async fn test_pg_create_assigns_distinct_ids() {
    let repo = repository().await;

    let first = repo.create(NewUser::new("alex", None)).await.unwrap();
    let second = repo.create(NewUser::new("alex", None)).await.unwrap();

    assert!(first.id > 0);
    assert_ne!(first.id, second.id);
    assert_eq!(second.name, "alex");
}

#[actix_web::test]
#[ignore = "needs a Postgres database at DATABASE_URL"]
async fn test_pg_create_reports_constraint_violation() {
    let repo = repository().await;

    let email = Some("alex@example.com".to_string());
    repo.create(NewUser::new("alex", email.clone())).await.unwrap();
    let err = repo.create(NewUser::new("alex", email)).await.unwrap_err();

    assert!(err.message().contains("duplicate key"), "{}", err);
}

#[actix_web::test]
#[ignore = "needs a Postgres database at DATABASE_URL"]
async fn test_pg_register_over_http() {
    let repo = repository().await;
    let app = test::init_service(App::new().configure(create_app(Arc::new(repo)))).await;

    let req = test::TestRequest::post()
        .insert_header(ContentType::json())
        .set_payload(r#"{"name": "alex", "email": "alex@example.com"}"#)
        .uri("/users")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);

    let user: User = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert!(user.id > 0);
    assert_eq!(user.email.as_deref(), Some("alex@example.com"));

    let req = test::TestRequest::post()
        .insert_header(ContentType::json())
        .set_payload(r#"{"name": "alex", "email": "alex@example.com"}"#)
        .uri("/users")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 500);
}
