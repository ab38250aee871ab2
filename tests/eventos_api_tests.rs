use cartelera::eventos::api::{APIError, EventosAPI};
use cartelera::eventos::model::{Category, Status};
use chrono::NaiveDate;
use mockito::Matcher;
use serde_json::json;

const EVENTS_BODY: &str = r##"
  [
    {
      "id": 1,
      "nombre": "Feria del Libro",
      "categoria": "festivales",
      "fecha": "2024-01-10",
      "descripcion": "Feria anual.",
      "imagen": "https://example.org/feria.jpg",
      "estado": "activo"
    },
    {
      "id": 2,
      "nombre": "Teatro X",
      "categoria": "teatro",
      "fecha": "2024-02-01",
      "descripcion": "",
      "imagen": "",
      "estado": "inactivo"
    }
  ]"##;

#[test_log::test(tokio::test)]
async fn should_get_every_event_the_backend_returns() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/eventos")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(EVENTS_BODY)
        .create_async()
        .await;
    let api = EventosAPI::new(&server.url());

    let events = api.get_events().await.unwrap();

    mock.assert_async().await;
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, "1");
    assert_eq!(events[0].category, Some(Category::Festivales));
    assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    assert_eq!(events[1].status, Status::Inactivo);
}

#[test_log::test(tokio::test)]
async fn a_server_error_should_be_a_load_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/eventos")
        .with_status(500)
        .create_async()
        .await;
    let api = EventosAPI::new(&server.url());

    let result = api.get_events().await;

    assert_eq!(result.unwrap_err(), APIError::LoadFailure);
}

#[test_log::test(tokio::test)]
async fn an_undecodable_body_should_be_a_load_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/eventos")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;
    let api = EventosAPI::new(&server.url());

    let result = api.get_events().await;

    assert_eq!(result.unwrap_err(), APIError::LoadFailure);
}

#[test_log::test(tokio::test)]
async fn deactivating_should_patch_the_status_only() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/eventos/1")
        .match_body(Matcher::Json(json!({ "estado": "inactivo" })))
        .with_status(200)
        .create_async()
        .await;
    let api = EventosAPI::new(&server.url());

    let result = api.deactivate_event("1").await;

    mock.assert_async().await;
    assert!(result.is_ok());
}

#[test_log::test(tokio::test)]
async fn a_rejected_patch_should_be_an_update_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PATCH", "/eventos/1")
        .with_status(500)
        .create_async()
        .await;
    let api = EventosAPI::new(&server.url());

    let result = api.deactivate_event("1").await;

    assert_eq!(result.unwrap_err(), APIError::UpdateFailure);
}
