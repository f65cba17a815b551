//! Session behaviour against a mocked API.

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::client::MockCatalogApi;
use crate::model::MovieRequest;

fn movie(id: i32, title: &str, genre: &str) -> Movie {
    Movie {
        id,
        title: title.to_owned(),
        genre: Some(genre.to_owned()),
        description: None,
        poster_url: None,
        rating: Some(8.0),
    }
}

#[fixture]
fn catalogue() -> Vec<Movie> {
    vec![movie(1, "Inception", "Sci-Fi"), movie(2, "Parasite", "Thriller")]
}

fn server_error() -> ClientError {
    ClientError::Api {
        status: 500,
        message: "Movie store operation failed".to_owned(),
    }
}

async fn loaded_session(api: MockCatalogApi) -> CatalogSession<MockCatalogApi> {
    let mut session = CatalogSession::new(api);
    session.load().await.expect("initial load");
    session
}

#[rstest]
#[tokio::test]
async fn load_replaces_collection_and_sizes_carousel(catalogue: Vec<Movie>) {
    let mut api = MockCatalogApi::new();
    let fetched = catalogue.clone();
    api.expect_list_movies()
        .times(1)
        .returning(move || Ok(fetched.clone()));

    let session = loaded_session(api).await;
    assert_eq!(session.movies(), catalogue.as_slice());
    session.carousel().advance();
    assert_eq!(session.featured().map(|m| m.id), Some(2));
    session.carousel().advance();
    assert_eq!(session.featured().map(|m| m.id), Some(1));
}

#[rstest]
#[tokio::test]
async fn failed_load_keeps_previous_collection(catalogue: Vec<Movie>) {
    let mut api = MockCatalogApi::new();
    let fetched = catalogue.clone();
    let mut calls = 0;
    api.expect_list_movies().times(2).returning(move || {
        calls += 1;
        if calls == 1 {
            Ok(fetched.clone())
        } else {
            Err(server_error())
        }
    });

    let mut session = loaded_session(api).await;
    let err = session.load().await.expect_err("second load fails");
    assert!(matches!(err, SessionError::Client(_)));
    assert_eq!(session.movies(), catalogue.as_slice());
    assert_eq!(session.alert(), Some(LOAD_FAILED));
}

#[rstest]
#[tokio::test]
async fn filtering_never_calls_the_service(catalogue: Vec<Movie>) {
    let mut api = MockCatalogApi::new();
    let fetched = catalogue.clone();
    api.expect_list_movies()
        .times(1)
        .returning(move || Ok(fetched.clone()));

    let mut session = loaded_session(api).await;
    session.set_filter("THRILL");
    let visible: Vec<i32> = session.visible_movies().iter().map(|m| m.id).collect();
    assert_eq!(visible, vec![2]);
}

#[rstest]
#[tokio::test]
async fn adding_returns_to_list_and_refetches(catalogue: Vec<Movie>) {
    let mut api = MockCatalogApi::new();
    let mut after = catalogue.clone();
    after.push(movie(3, "Dune", "Sci-Fi"));
    let mut responses = vec![after, catalogue].into_iter().rev();
    api.expect_list_movies()
        .times(2)
        .returning(move || Ok(responses.next().unwrap_or_default()));
    let expected = MovieRequest {
        genre: Some("Sci-Fi".to_owned()),
        rating: Some(8.5),
        ..MovieRequest::titled("Dune")
    };
    api.expect_create_movie()
        .with(eq(expected))
        .times(1)
        .returning(|_| Ok(movie(3, "Dune", "Sci-Fi")));

    let mut session = loaded_session(api).await;
    session.show_add();
    session.set_form(
        session
            .form()
            .clone()
            .with_title("Dune")
            .with_genre("Sci-Fi")
            .with_rating("8.5"),
    );
    session.submit_form().await.expect("submit");

    assert_eq!(session.view(), View::List);
    assert_eq!(session.form(), &MovieForm::default());
    assert_eq!(session.movies().len(), 3);
    assert_eq!(session.alert(), None);
}

#[rstest]
#[tokio::test]
async fn failed_add_keeps_form_and_raises_one_alert(catalogue: Vec<Movie>) {
    let mut api = MockCatalogApi::new();
    let fetched = catalogue.clone();
    api.expect_list_movies()
        .times(1)
        .returning(move || Ok(fetched.clone()));
    api.expect_create_movie()
        .times(1)
        .returning(|_| Err(server_error()));

    let mut session = loaded_session(api).await;
    session.show_add();
    let form = MovieForm::default().with_title("Dune");
    session.set_form(form.clone());
    session.submit_form().await.expect_err("create fails");

    assert_eq!(session.view(), View::Add);
    assert_eq!(session.form(), &form);
    assert_eq!(session.movies(), catalogue.as_slice());
    assert_eq!(session.dismiss_alert().as_deref(), Some(ADD_FAILED));
    assert_eq!(session.alert(), None);
}

#[rstest]
#[tokio::test]
async fn invalid_rating_is_rejected_before_any_call(catalogue: Vec<Movie>) {
    let mut api = MockCatalogApi::new();
    let fetched = catalogue.clone();
    api.expect_list_movies()
        .times(1)
        .returning(move || Ok(fetched.clone()));
    api.expect_create_movie().never();

    let mut session = loaded_session(api).await;
    session.show_add();
    session.set_form(MovieForm::default().with_title("Dune").with_rating("great"));
    let err = session.submit_form().await.expect_err("form rejected");

    assert!(matches!(err, SessionError::Form(FormError::InvalidRating { .. })));
    assert!(session.alert().is_some());
}

#[rstest]
#[tokio::test]
async fn editing_sends_a_full_replacement(catalogue: Vec<Movie>) {
    let mut api = MockCatalogApi::new();
    let fetched = catalogue.clone();
    api.expect_list_movies()
        .times(2)
        .returning(move || Ok(fetched.clone()));
    let expected = MovieRequest {
        genre: Some("Thriller".to_owned()),
        rating: Some(8.0),
        ..MovieRequest::titled("Parasite (2019)")
    };
    api.expect_update_movie()
        .with(eq(2), eq(expected))
        .times(1)
        .returning(|_, _| Ok(()));

    let mut session = loaded_session(api).await;
    session.show_edit(2);
    assert_eq!(session.view(), View::Edit(2));
    assert_eq!(session.form().title(), "Parasite");
    session.set_form(session.form().clone().with_title("Parasite (2019)"));
    session.submit_form().await.expect("update");
    assert_eq!(session.view(), View::List);
}

#[rstest]
#[tokio::test]
async fn editing_an_unlisted_movie_alerts(catalogue: Vec<Movie>) {
    let mut api = MockCatalogApi::new();
    let fetched = catalogue.clone();
    api.expect_list_movies()
        .times(1)
        .returning(move || Ok(fetched.clone()));

    let mut session = loaded_session(api).await;
    session.show_edit(99);
    assert_eq!(session.view(), View::List);
    assert_eq!(session.alert(), Some(UNKNOWN_MOVIE));
}

#[rstest]
#[tokio::test]
async fn delete_refetches_on_success(catalogue: Vec<Movie>) {
    let mut api = MockCatalogApi::new();
    let remaining: Vec<Movie> = catalogue.iter().filter(|m| m.id != 1).cloned().collect();
    let mut responses = vec![remaining, catalogue].into_iter().rev();
    api.expect_list_movies()
        .times(2)
        .returning(move || Ok(responses.next().unwrap_or_default()));
    api.expect_delete_movie()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(()));

    let mut session = loaded_session(api).await;
    session.delete(1).await.expect("delete");
    let ids: Vec<i32> = session.movies().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![2]);
}

#[rstest]
#[tokio::test]
async fn failed_delete_leaves_collection_unchanged(catalogue: Vec<Movie>) {
    let mut api = MockCatalogApi::new();
    let fetched = catalogue.clone();
    api.expect_list_movies()
        .times(1)
        .returning(move || Ok(fetched.clone()));
    api.expect_delete_movie().times(1).returning(|_| {
        Err(ClientError::Api {
            status: 404,
            message: "Movie not found".to_owned(),
        })
    });

    let mut session = loaded_session(api).await;
    session.delete(1).await.expect_err("delete fails");
    assert_eq!(session.movies(), catalogue.as_slice());
    assert_eq!(session.alert(), Some(DELETE_FAILED));
}

#[rstest]
fn location_is_stored_or_alerted() {
    let mut session = CatalogSession::new(MockCatalogApi::new());
    session.set_coordinates(Coordinates {
        latitude: 51.5,
        longitude: -0.12,
    });
    assert_eq!(
        session.coordinates(),
        Some(Coordinates {
            latitude: 51.5,
            longitude: -0.12
        })
    );
    session.location_denied();
    assert_eq!(session.alert(), Some(LOCATION_DENIED));
}

#[rstest]
#[tokio::test]
async fn submitting_from_the_list_view_does_nothing() {
    let mut session = CatalogSession::new(MockCatalogApi::new());
    session.submit_form().await.expect("no-op");
    assert!(session.movies().is_empty());
}
