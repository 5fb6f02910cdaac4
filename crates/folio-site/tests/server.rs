//! End-to-end test over a real socket.

use folio_site::{Server, ServerConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_serves_detail_page_over_tcp() {
    let bound = Server::new(ServerConfig {
        port: 0,
        ..ServerConfig::default()
    })
    .bind()
    .await
    .unwrap();
    let addr = bound.local_addr().unwrap();

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(bound.serve_until(async {
        let _ = rx.await;
    }));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /case-studies/hive HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("Hive Meeting Rooms Display"));

    tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
