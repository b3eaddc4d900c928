use crate::domain::models::NewUser;
use crate::error::AppError;
use crate::service::users::UserService;
use actix_web::{web, HttpResponse, Responder};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MAX_BODY_SIZE: usize = 256 * 1024;

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserBody {
    /// Only a JSON object is a user; arrays and scalars are rejected before
    /// the struct is applied.
    pub fn parse(req_body: &[u8]) -> Result<CreateUserBody, AppError> {
        let value: Value = serde_json::from_slice(req_body).map_err(invalid_json)?;
        if !value.is_object() {
            return Err(AppError::Validation(
                "invalid JSON body: expected a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(invalid_json)
    }

    pub fn validate(self) -> Result<NewUser, AppError> {
        let name = non_blank(self.name)
            .ok_or_else(|| AppError::Validation("name is required".to_string()))?;

        Ok(NewUser::new(name, non_blank(self.email)))
    }
}

fn invalid_json(err: serde_json::Error) -> AppError {
    AppError::Validation(format!("invalid JSON body: {}", err))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

async fn read_body(mut payload: web::Payload) -> Result<web::Bytes, AppError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk =
            chunk.map_err(|err| AppError::Validation(format!("could not read body: {}", err)))?;
        if body.len() + chunk.len() > MAX_BODY_SIZE {
            return Err(AppError::PayloadTooLarge(MAX_BODY_SIZE));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body.freeze())
}

/// `POST /users`. Registered with `web::post().to(..)` rather than a route
/// macro so it stays callable as a plain function. The raw payload is read
/// here so that every rejection uses the JSON error shape.
pub async fn create_user(
    payload: web::Payload,
    app: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let new_user = match read_body(payload)
        .await
        .and_then(|body| CreateUserBody::parse(&body))
        .and_then(CreateUserBody::validate)
    {
        Ok(new_user) => new_user,
        Err(err) => {
            log::info!(reason:% = err; "Rejected create user request");
            return Err(err);
        }
    };

    let user = app.create_user(new_user).await?;

    Ok(HttpResponse::Created().json(user))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}
