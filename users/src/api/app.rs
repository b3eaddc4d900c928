use crate::api::routes::{create_user, health};
use crate::domain::repository::UserRepository;
use crate::service::users::UserService;
use actix_web::web;
use actix_web::web::ServiceConfig;
use std::sync::Arc;

pub fn create_app(user_repo: Arc<dyn UserRepository>) -> Box<dyn Fn(&mut ServiceConfig)> {
    Box::new(move |cfg: &mut ServiceConfig| {
        let user_service = web::Data::new(UserService::new(Arc::clone(&user_repo)));

        cfg.app_data(user_service)
            .service(web::resource("/users").route(web::post().to(create_user)))
            .route("/health", web::get().to(health));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::User;
    use crate::domain::repository::MockUserRepository;
    use actix_web::http::header::ContentType;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_routes() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_create()
            .times(1)
            .returning(|new_user| Ok(User::from_new(1, new_user)));

        let app = test::init_service(App::new().configure(create_app(Arc::new(user_repo)))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let req = test::TestRequest::post()
            .insert_header(ContentType::json())
            .set_payload(r#"{"name":"Ana"}"#)
            .uri("/users")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);
        assert_eq!(test::read_body(resp).await.as_ref(), br#"{"id":1,"name":"Ana"}"#);

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 405);

        let req = test::TestRequest::post().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);
    }
}
