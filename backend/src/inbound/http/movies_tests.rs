//! Tests for movie HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    InMemoryMovieRepository, MockMovieCatalogueCommand, MockMovieCatalogueQuery,
};
use crate::inbound::http::error::json_config;

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .configure(configure)
}

fn in_memory_state() -> HttpState {
    HttpState::from_repository(Arc::new(InMemoryMovieRepository::new()))
}

#[actix_web::test]
async fn index_serves_banner() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = actix_test::read_body(res).await;
    assert_eq!(body.as_ref(), BANNER.as_bytes());
}

#[actix_web::test]
async fn create_echoes_stored_fields() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let req = actix_test::TestRequest::post()
        .uri("/movies")
        .set_json(json!({"title": "Dune", "genre": "Sci-Fi", "rating": 8.5}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "Movie added successfully");
    assert_eq!(body["title"], "Dune");
    assert_eq!(body["genre"], "Sci-Fi");
    assert_eq!(body["rating"], 8.5);
    assert_eq!(body["description"], Value::Null);
    assert!(body["id"].is_i64());
}

#[rstest]
#[case(json!({"genre": "Drama"}))]
#[case(json!({"title": ""}))]
#[case(json!({"title": "   "}))]
#[actix_web::test]
async fn create_without_title_is_rejected(#[case] payload: Value) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let req = actix_test::TestRequest::post()
        .uri("/movies")
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "title");

    let list = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/movies").to_request(),
    )
    .await;
    let movies: Vec<MovieResponse> = actix_test::read_body_json(list).await;
    assert!(movies.is_empty());
}

#[rstest]
#[case("/movies/abc")]
#[case("/movies/1.5")]
#[case("/movies/999")]
#[actix_web::test]
async fn unknown_or_non_integer_ids_are_not_found(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    for req in [
        actix_test::TestRequest::get().uri(uri).to_request(),
        actix_test::TestRequest::delete().uri(uri).to_request(),
        actix_test::TestRequest::put()
            .uri(uri)
            .set_json(json!({"title": "Ghost"}))
            .to_request(),
    ] {
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["message"], "Movie not found");
    }
}

#[actix_web::test]
async fn update_replaces_record_and_confirms() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/movies")
            .set_json(json!({"title": "Dune", "genre": "Sci-Fi", "rating": 8.5}))
            .to_request(),
    )
    .await;
    let uri = format!("/movies/{}", created["id"]);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({"title": "Dune: Part Two", "rating": "8.6"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: MessageResponse = actix_test::read_body_json(res).await;
    assert_eq!(body.message, "Movie updated successfully");

    let stored: MovieResponse = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(stored.title, "Dune: Part Two");
    assert_eq!(stored.genre, None);
    assert_eq!(stored.rating, Some(8.6));
}

#[actix_web::test]
async fn malformed_body_is_invalid_request() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let req = actix_test::TestRequest::post()
        .uri("/movies")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"title": "Dune", "rating": "great"}"#)
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}

#[actix_web::test]
async fn store_failure_is_500_with_raw_detail() {
    let mut query = MockMovieCatalogueQuery::new();
    query.expect_list_movies().times(1).return_once(|| {
        Err(crate::domain::Error::store("Movie store operation failed")
            .with_details(json!({"error": "connection refused"})))
    });
    let state = HttpState::new(Arc::new(query), Arc::new(MockMovieCatalogueCommand::new()));

    let app = actix_test::init_service(test_app(state)).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/movies").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "store_error");
    assert_eq!(body["details"]["error"], "connection refused");
}

#[rstest]
#[case(json!({"title": "Dune"}), None)]
#[case(json!({"title": "Dune", "rating": null}), None)]
#[case(json!({"title": "Dune", "rating": ""}), None)]
#[case(json!({"title": "Dune", "rating": 7}), Some(7.0))]
#[case(json!({"title": "Dune", "rating": " 7.5 "}), Some(7.5))]
fn rating_accepts_numbers_and_numeric_text(#[case] payload: Value, #[case] expected: Option<f64>) {
    let request: MovieRequest = serde_json::from_value(payload).expect("valid request");
    assert_eq!(request.rating, expected);
}
