//! Handler-level coverage for the users API over the in-memory adapter.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test as actix_test, web, App};
use rstest::rstest;
use serde_json::{json, Value};

use super::*;
use crate::domain::ports::InMemoryUserRepository;
use crate::domain::{UserCommandService, UserQueryService};

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let repository = Arc::new(InMemoryUserRepository::new());
    let state = HttpState::new(
        Arc::new(UserCommandService::new(repository.clone())),
        Arc::new(UserQueryService::new(repository)),
    );
    App::new()
        .app_data(web::Data::new(state))
        .service(create_user)
        .service(get_user)
        .service(delete_user)
}

async fn create_alice<S, B>(app: &S) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = actix_test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "secret",
        }))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("response JSON")
}

fn error_details(value: &Value) -> &serde_json::Map<String, Value> {
    value
        .get("details")
        .and_then(Value::as_object)
        .expect("details present")
}

#[actix_web::test]
async fn create_user_returns_view_without_password() {
    let app = actix_test::init_service(test_app()).await;

    let view = create_alice(&app).await;

    assert_eq!(view.get("name").and_then(Value::as_str), Some("Alice"));
    assert_eq!(
        view.get("email").and_then(Value::as_str),
        Some("alice@example.com")
    );
    let id = view.get("id").and_then(Value::as_str).expect("id present");
    assert!(uuid::Uuid::parse_str(id).is_ok(), "id is a UUID: {id}");
    assert!(view.get("password").is_none());
}

#[rstest]
#[case(json!({"email": "alice@example.com", "password": "secret"}), "name")]
#[case(json!({"name": "Alice", "password": "secret"}), "email")]
#[case(json!({"name": "Alice", "email": "alice@example.com"}), "password")]
#[actix_web::test]
async fn create_rejects_missing_fields(#[case] payload: Value, #[case] field: &str) {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/users")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("error payload");
    assert_eq!(
        value.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
    let details = error_details(&value);
    assert_eq!(details.get("field").and_then(Value::as_str), Some(field));
    assert_eq!(
        details.get("code").and_then(Value::as_str),
        Some("missing_field")
    );
}

#[rstest]
#[case(
    json!({"name": "   ", "email": "alice@example.com", "password": "secret"}),
    "name",
    "empty_name"
)]
#[case(
    json!({"name": "Alice", "email": "not-an-address", "password": "secret"}),
    "email",
    "invalid_email"
)]
#[case(
    json!({"name": "Alice", "email": "", "password": "secret"}),
    "email",
    "empty_email"
)]
#[case(
    json!({"name": "Alice", "email": "alice@example.com", "password": ""}),
    "password",
    "empty_password"
)]
#[actix_web::test]
async fn create_rejects_invalid_values(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/users")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("error payload");
    let details = error_details(&value);
    assert_eq!(details.get("field").and_then(Value::as_str), Some(field));
    assert_eq!(details.get("code").and_then(Value::as_str), Some(code));
}

#[actix_web::test]
async fn created_user_round_trips_through_get() {
    let app = actix_test::init_service(test_app()).await;
    let view = create_alice(&app).await;
    let id = view.get("id").and_then(Value::as_str).expect("id present");

    let request = actix_test::TestRequest::get()
        .uri(&format!("/users/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    let body = actix_test::read_body(response).await;
    let fetched: Value = serde_json::from_slice(&body).expect("response JSON");
    assert_eq!(fetched, view);
}

#[actix_web::test]
async fn get_missing_user_returns_null_body() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/users/3fa85f64-5717-4562-b3fc-2c963f66afa6")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("response JSON");
    assert!(value.is_null());
}

#[rstest]
#[case("not-a-uuid")]
#[case("12345")]
#[actix_web::test]
async fn get_rejects_malformed_ids(#[case] raw: &str) {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/users/{raw}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("error payload");
    let details = error_details(&value);
    assert_eq!(details.get("field").and_then(Value::as_str), Some("id"));
    assert_eq!(
        details.get("code").and_then(Value::as_str),
        Some("invalid_uuid")
    );
}

#[actix_web::test]
async fn delete_then_get_returns_null_and_repeat_delete_succeeds() {
    let app = actix_test::init_service(test_app()).await;
    let view = create_alice(&app).await;
    let id = view
        .get("id")
        .and_then(Value::as_str)
        .expect("id present")
        .to_owned();

    let delete_request = actix_test::TestRequest::delete()
        .uri(&format!("/users/{id}"))
        .to_request();
    let delete_response = actix_test::call_service(&app, delete_request).await;
    assert_eq!(
        delete_response.status(),
        actix_web::http::StatusCode::NO_CONTENT
    );
    let delete_body = actix_test::read_body(delete_response).await;
    assert!(delete_body.is_empty());

    let get_request = actix_test::TestRequest::get()
        .uri(&format!("/users/{id}"))
        .to_request();
    let get_response = actix_test::call_service(&app, get_request).await;
    assert_eq!(get_response.status(), actix_web::http::StatusCode::OK);
    let body = actix_test::read_body(get_response).await;
    let value: Value = serde_json::from_slice(&body).expect("response JSON");
    assert!(value.is_null());

    let repeat_request = actix_test::TestRequest::delete()
        .uri(&format!("/users/{id}"))
        .to_request();
    let repeat_response = actix_test::call_service(&app, repeat_request).await;
    assert_eq!(
        repeat_response.status(),
        actix_web::http::StatusCode::NO_CONTENT
    );
}

#[actix_web::test]
async fn delete_rejects_malformed_ids() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::delete()
        .uri("/users/not-a-uuid")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
}
