//! Users API handlers.
//!
//! ```text
//! POST /users {"name":"Alice","email":"alice@example.com","password":"secret"}
//! GET /users/{id}
//! DELETE /users/{id}
//! ```

use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User, UserId, UserValidationError};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{missing_field_error, parse_uuid, FieldName};
use crate::inbound::http::ApiResult;

/// Request payload for `POST /users`.
///
/// Fields deserialise as optional so that missing values surface through
/// the shared validation envelope instead of a framework deserialisation
/// error.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequestBody {
    #[schema(value_type = String, example = "Alice")]
    pub name: Option<String>,
    #[schema(value_type = String, example = "alice@example.com")]
    pub email: Option<String>,
    #[schema(value_type = String)]
    pub password: Option<String>,
}

/// User view returned by the API.
///
/// The shape omits any credential field, so a response can never leak the
/// stored secret.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseBody {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl From<User> for UserResponseBody {
    fn from(value: User) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_string(),
            email: value.email().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserPath {
    id: String,
}

fn map_user_validation_error(err: UserValidationError) -> Error {
    let (field, code) = match err {
        UserValidationError::EmptyId | UserValidationError::InvalidId => ("id", "invalid_id"),
        UserValidationError::EmptyName => ("name", "empty_name"),
        UserValidationError::NameTooLong { .. } => ("name", "name_too_long"),
        UserValidationError::EmptyEmail => ("email", "empty_email"),
        UserValidationError::InvalidEmail => ("email", "invalid_email"),
        UserValidationError::EmptyPassword => ("password", "empty_password"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "code": code,
    }))
}

fn parse_create_payload(payload: CreateUserRequestBody) -> Result<NewUser, Error> {
    let Some(name) = payload.name else {
        return Err(missing_field_error(FieldName::new("name")));
    };
    let Some(email) = payload.email else {
        return Err(missing_field_error(FieldName::new("email")));
    };
    let Some(password) = payload.password else {
        return Err(missing_field_error(FieldName::new("password")));
    };

    NewUser::try_from_strings(name, email, password).map_err(map_user_validation_error)
}

fn parse_user_id(raw: String) -> Result<UserId, Error> {
    parse_uuid(raw, FieldName::new("id")).map(UserId::from_uuid)
}

/// Create a user from a validated request body.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequestBody,
    responses(
        (status = 200, description = "Created user", body = UserResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequestBody>,
) -> ApiResult<web::Json<UserResponseBody>> {
    let draft = parse_create_payload(payload.into_inner())?;
    let user = state.users.create_user(draft).await?;
    Ok(web::Json(UserResponseBody::from(user)))
}

/// Fetch a user by identifier.
///
/// A missing record is not an error: the response is `200` with a JSON
/// `null` body.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User identifier (UUID)")
    ),
    responses(
        (status = 200, description = "User view, or null when absent", body = UserResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<UserPath>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(path.into_inner().id)?;
    let user = state.users_query.get_user(&id).await?;
    Ok(HttpResponse::Ok().json(user.map(UserResponseBody::from)))
}

/// Delete a user by identifier.
///
/// Responds `204` with an empty body whether or not the record existed.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User identifier (UUID)")
    ),
    responses(
        (status = 204, description = "User deleted or already absent"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<UserPath>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(path.into_inner().id)?;
    state.users.delete_user(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests;
