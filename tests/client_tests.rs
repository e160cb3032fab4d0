//! Session load-stage tests: file source, TCP source, failure paths.

use citymap::client::{FetchError, MapSource, Session};
use citymap::core::{build_layers, Cell};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

fn asset(name: &str) -> String {
    format!("{}/assets/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[tokio::test]
async fn loads_the_shipped_assets() {
    let source = MapSource::file(asset("tileset.json"), asset("sample_map.json"));
    let session = Session::load(&source).await.unwrap();

    let doc = session.document();
    assert_eq!(doc.name(), "Sample Region");
    assert_eq!(doc.width(), 8);
    assert_eq!(doc.height(), 6);

    // The loaded snapshot renders without any further fetch.
    let layers = build_layers(doc, session.table()).unwrap();
    assert_eq!(layers.width(), 8);
    assert_eq!(layers.height(), 6);
}

#[tokio::test]
async fn hit_test_suppresses_out_of_range_cells() {
    let source = MapSource::file(asset("tileset.json"), asset("sample_map.json"));
    let session = Session::load(&source).await.unwrap();

    assert!(session.hit_test(Cell::new(0, 0)).is_some());
    assert!(session.hit_test(Cell::new(8, 0)).is_none());
    assert!(session.hit_test(Cell::new(0, 6)).is_none());
}

#[tokio::test]
async fn missing_map_file_fails_the_load() {
    let source = MapSource::file(asset("tileset.json"), asset("no_such_map.json"));
    let err = Session::load(&source).await.unwrap_err();
    assert!(matches!(err, FetchError::Read { .. }), "got {err:?}");
}

#[tokio::test]
async fn malformed_map_json_fails_the_load() {
    let path = std::env::temp_dir().join(format!("citymap-bad-map-{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").unwrap();

    let source = MapSource::file(asset("tileset.json"), &path);
    let err = Session::load(&source).await.unwrap_err();
    let _ = std::fs::remove_file(&path);

    assert!(matches!(err, FetchError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn fetches_a_map_over_the_line_json_endpoint() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let map_json = std::fs::read_to_string(asset("sample_map.json")).unwrap();
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut reader = BufReader::new(stream);
        let mut request = String::new();
        reader.read_line(&mut request).await.unwrap();
        assert!(request.contains("\"get_map\""), "request was {request:?}");
        assert!(request.contains("\"id\":3"));

        let mut stream = reader.into_inner();
        stream
            .write_all(format!("{}\n", map_json.replace('\n', " ")).as_bytes())
            .await
            .unwrap();
    });

    let source = MapSource::remote(asset("tileset.json"), addr.to_string(), 3);
    let session = Session::load(&source).await.unwrap();
    assert_eq!(session.document().name(), "Sample Region");

    server.await.unwrap();
}

#[tokio::test]
async fn endpoint_hangup_is_a_fetch_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        // Read the request, then hang up without responding.
        let mut reader = BufReader::new(stream);
        let mut request = String::new();
        reader.read_line(&mut request).await.unwrap();
    });

    let source = MapSource::remote(asset("tileset.json"), addr.to_string(), 3);
    let err = Session::load(&source).await.unwrap_err();
    assert!(matches!(err, FetchError::ClosedEarly { .. }), "got {err:?}");

    server.await.unwrap();
}
