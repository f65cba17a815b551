//! The client and session against a real in-process catalogue server backed
//! by the in-memory store.

use std::net::TcpListener;

use actix_web::dev::ServerHandle;
use actix_web::web;
use backend::inbound::http::health::HealthState;
use backend::server::{MovieStore, ServerConfig, create_server};
use catalog_client::{
    CatalogApi, CatalogClient, CatalogSession, ClientError, MovieForm, MovieRequest, View,
};

struct RunningServer {
    base_url: String,
    handle: ServerHandle,
}

impl RunningServer {
    fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let config = ServerConfig::new(addr, MovieStore::in_memory()).with_listener(listener);
        let server =
            create_server(web::Data::new(HealthState::new()), config).expect("create server");
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    fn client(&self) -> CatalogClient {
        CatalogClient::new(&self.base_url).expect("client")
    }

    async fn stop(self) {
        self.handle.stop(true).await;
    }
}

#[actix_web::test]
async fn client_covers_the_crud_contract() {
    let server = RunningServer::start();
    let client = server.client();

    assert!(client.list_movies().await.expect("list").is_empty());

    let request = MovieRequest {
        genre: Some("Sci-Fi".to_owned()),
        rating: Some(8.5),
        ..MovieRequest::titled("Dune")
    };
    let created = client.create_movie(&request).await.expect("create");
    assert_eq!(created.title, "Dune");
    assert_eq!(created.genre.as_deref(), Some("Sci-Fi"));

    let fetched = client.get_movie(created.id).await.expect("get");
    assert_eq!(fetched, created);

    client
        .update_movie(created.id, &MovieRequest::titled("Dune: Part One"))
        .await
        .expect("update");
    let updated = client.get_movie(created.id).await.expect("get");
    assert_eq!(updated.title, "Dune: Part One");
    assert_eq!(updated.genre, None);
    assert_eq!(updated.rating, None);

    client.delete_movie(created.id).await.expect("delete");
    let err = client.get_movie(created.id).await.expect_err("deleted");
    assert_eq!(
        err,
        ClientError::Api {
            status: 404,
            message: "Movie not found".to_owned(),
        }
    );

    server.stop().await;
}

#[actix_web::test]
async fn validation_failures_surface_the_service_message() {
    let server = RunningServer::start();
    let client = server.client();

    let err = client
        .create_movie(&MovieRequest::titled("   "))
        .await
        .expect_err("blank title");
    assert_eq!(err.status(), Some(400));
    assert!(client.list_movies().await.expect("list").is_empty());

    server.stop().await;
}

#[actix_web::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = CatalogClient::new(&format!("http://{addr}")).expect("client");
    let err = client.list_movies().await.expect_err("nothing listening");
    assert!(matches!(err, ClientError::Transport { .. }));
}

#[actix_web::test]
async fn session_round_trip() {
    let server = RunningServer::start();
    let mut session = CatalogSession::new(server.client());
    session.load().await.expect("load");

    for (title, genre) in [("Inception", "Sci-Fi"), ("Parasite", "Thriller")] {
        session.show_add();
        session.set_form(MovieForm::default().with_title(title).with_genre(genre));
        session.submit_form().await.expect("add");
    }
    assert_eq!(session.movies().len(), 2);
    assert_eq!(session.view(), View::List);

    let parasite = session
        .movies()
        .iter()
        .find(|m| m.title == "Parasite")
        .map(|m| m.id)
        .expect("parasite listed");
    session.show_edit(parasite);
    session.set_form(session.form().clone().with_rating("8.6"));
    session.submit_form().await.expect("edit");
    let rating = session
        .movies()
        .iter()
        .find(|m| m.id == parasite)
        .and_then(|m| m.rating);
    assert_eq!(rating, Some(8.6));

    session.set_filter("sci");
    let visible: Vec<&str> = session
        .visible_movies()
        .iter()
        .map(|m| m.title.as_str())
        .collect();
    assert_eq!(visible, vec!["Inception"]);

    session.delete(parasite).await.expect("delete");
    session.delete(parasite).await.expect_err("already gone");
    assert_eq!(session.movies().len(), 1);
    assert!(session.alert().is_some());

    server.stop().await;
}
