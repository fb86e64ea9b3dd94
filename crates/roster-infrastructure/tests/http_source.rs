//! HttpEmployeeSource against a local one-shot HTTP server.

use std::time::Duration;

use roster_core::employee::EmployeeSource;
use roster_infrastructure::HttpEmployeeSource;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const USERS_BODY: &str = r#"{
    "users": [
        {
            "id": 1, "firstName": "Emily", "lastName": "Johnson",
            "email": "emily.johnson@x.dummyjson.com", "age": 28, "phone": "+81 965-431-3024",
            "address": {"address": "626 Main Street", "city": "Phoenix", "state": "Mississippi"},
            "image": "https://dummyjson.com/icon/emilys/128",
            "company": {"department": "Engineering", "title": "Sales Manager"}
        },
        {
            "id": 2, "firstName": "Michael", "lastName": "Williams",
            "email": "michael.williams@x.dummyjson.com", "age": 35, "phone": "+49 258-627-6644",
            "address": {"address": "385 Fifth Street", "city": "Houston", "state": "Alabama"},
            "image": "https://dummyjson.com/icon/michaelw/128"
        }
    ],
    "total": 208,
    "skip": 0,
    "limit": 2
}"#;

/// Serves exactly one response, returning the base URL and a handle that
/// yields the raw request line.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let n = socket.read(&mut buf).await.unwrap();
        let request = String::from_utf8_lossy(&buf[..n]).to_string();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        request.lines().next().unwrap_or_default().to_string()
    });

    (format!("http://{}/users", addr), handle)
}

#[tokio::test]
async fn test_fetches_and_parses_users() {
    let (url, server) = serve_once("200 OK", USERS_BODY).await;
    let source = HttpEmployeeSource::new(url, 20);

    let users = source.fetch_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].first_name, "Emily");
    assert_eq!(users[1].address.city, "Houston");
    assert!(users[1].company.is_none());

    let request_line = server.await.unwrap();
    assert!(
        request_line.starts_with("GET /users?limit=20 "),
        "unexpected request line: {}",
        request_line
    );
}

#[tokio::test]
async fn test_server_error_is_fetch_error() {
    let (url, _server) = serve_once("500 Internal Server Error", "{}").await;
    let err = HttpEmployeeSource::new(url, 20)
        .fetch_users()
        .await
        .unwrap_err();
    assert!(err.is_fetch(), "{:?}", err);
}

#[tokio::test]
async fn test_malformed_body_is_fetch_error() {
    let (url, _server) = serve_once("200 OK", r#"{"users": "nope"}"#).await;
    let err = HttpEmployeeSource::new(url, 20)
        .fetch_users()
        .await
        .unwrap_err();
    assert!(err.is_fetch(), "{:?}", err);
}

#[tokio::test]
async fn test_connection_refused_is_fetch_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = HttpEmployeeSource::new(format!("http://{}/users", addr), 20)
        .with_timeout(Duration::from_secs(5))
        .fetch_users()
        .await
        .unwrap_err();
    assert!(err.is_fetch(), "{:?}", err);
}
