//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

/// A canned upstream reply.
#[derive(Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: &'static str,
}

impl UpstreamReply {
    pub fn json(body: &'static str) -> Self {
        Self {
            status: 200,
            content_type: Some("application/json"),
            body,
        }
    }
}

/// Start a mock upstream on an ephemeral port that returns a fixed reply.
/// Returns the bound address and a counter of connections served.
pub async fn start_mock_upstream(reply: UpstreamReply) -> (SocketAddr, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let hit_counter = hits.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    hit_counter.fetch_add(1, Ordering::SeqCst);
                    let reply = reply.clone();
                    tokio::spawn(async move {
                        let status_text = match reply.status {
                            200 => "200 OK",
                            201 => "201 Created",
                            404 => "404 Not Found",
                            418 => "418 I'm a teapot",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let content_type_line = match reply.content_type {
                            Some(ct) => format!("Content-Type: {}\r\n", ct),
                            None => String::new(),
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            content_type_line,
                            reply.body.len(),
                            reply.body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, hits)
}

/// Reserve an address nothing is listening on. Connecting to it fails
/// with connection refused.
pub async fn dead_upstream_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
