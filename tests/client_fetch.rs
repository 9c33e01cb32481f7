// Tests for the HTTP fetcher against a mocked search API.
use mockito::Server;
use vitrine::client::{HttpSource, RecordSource};
use vitrine::model::RawRecord;
use vitrine::Error;

const ENVELOPE: &str = r#"{
    "collection": {
        "items": [
            {
                "links": [{"href": "thumb.jpg"}, {"href": "full.jpg"}],
                "data": [{"title": "Moon Landing", "description": "Apollo 11", "secondary_creator": "NASA"}]
            },
            {
                "links": [{"href": "b.jpg"}],
                "data": [{"title": "Earthrise", "description": "x", "photographer": "Bill Anders"}]
            }
        ]
    }
}"#;

#[tokio::test]
async fn test_search_envelope_extracted_in_order() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search?q=moon&media_type=image")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ENVELOPE)
        .create_async()
        .await;

    let source = HttpSource::new(server.url()).unwrap();
    let records = source.fetch("moon").await.unwrap();

    assert_eq!(records.len(), 2);
    match &records[0] {
        RawRecord::Image(item) => {
            assert_eq!(item.links.len(), 2);
            assert_eq!(item.data[0].title, "Moon Landing");
            assert_eq!(item.data[0].secondary_creator.as_deref(), Some("NASA"));
        }
        other => panic!("expected image record, got {:?}", other),
    }
    match &records[1] {
        RawRecord::Image(item) => {
            assert_eq!(item.data[0].title, "Earthrise");
            // photographer lands in the same slot as secondary_creator
            assert_eq!(
                item.data[0].secondary_creator.as_deref(),
                Some("Bill Anders")
            );
        }
        other => panic!("expected image record, got {:?}", other),
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_term_is_interpolated_verbatim() {
    let mut server = Server::new_async().await;
    // No escaping is applied to the term; the raw URL shape is the contract.
    let mock = server
        .mock("GET", "/search?q=moon&extra=1&media_type=image")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"collection": {"items": []}}"#)
        .create_async()
        .await;

    let source = HttpSource::new(server.url()).unwrap();
    let records = source.fetch("moon&extra=1").await.unwrap();
    assert!(records.is_empty());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_success_indicator_short_circuits() {
    let mut server = Server::new_async().await;
    // The body is deliberately a valid envelope: it must never be read.
    let mock = server
        .mock("GET", "/search?q=moon&media_type=image")
        .with_status(404)
        .with_body(ENVELOPE)
        .create_async()
        .await;

    let source = HttpSource::new(server.url()).unwrap();
    let err = source.fetch("moon").await.unwrap_err();
    assert_eq!(err, Error::Status { status: 404 });

    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_json_is_invalid_shape() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search?q=moon&media_type=image")
        .with_status(200)
        .with_body("this is not json")
        .create_async()
        .await;

    let source = HttpSource::new(server.url()).unwrap();
    assert!(matches!(
        source.fetch("moon").await,
        Err(Error::InvalidShape { .. })
    ));
}

#[tokio::test]
async fn test_missing_collection_is_invalid_shape() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search?q=moon&media_type=image")
        .with_status(200)
        .with_body(r#"{"version": "1.0"}"#)
        .create_async()
        .await;

    let source = HttpSource::new(server.url()).unwrap();
    assert!(matches!(
        source.fetch("moon").await,
        Err(Error::InvalidShape { .. })
    ));
}

#[tokio::test]
async fn test_empty_items_is_a_valid_empty_result() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search?q=nothing&media_type=image")
        .with_status(200)
        .with_body(r#"{"collection": {"items": []}}"#)
        .create_async()
        .await;

    let source = HttpSource::new(server.url()).unwrap();
    assert_eq!(source.fetch("nothing").await.unwrap(), vec![]);
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    // Nothing listens on port 1.
    let source = HttpSource::new("http://127.0.0.1:1").unwrap();
    assert!(matches!(
        source.fetch("moon").await,
        Err(Error::Network { .. })
    ));
}
