//! Local HTTP servers for tests. Regular and stalled replies come from a
//! `wiremock` server; a body cut short against its `Content-Length` needs a raw
//! socket, since wiremock always sends the full body.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone)]
pub enum Reply {
    /// Complete response with the given status and body.
    Complete { status: u16, body: Vec<u8> },
    /// Headers promise more bytes than are sent before the connection closes.
    Truncated,
    /// Accepts the request and does not answer within any test's patience.
    Hang,
}

impl Reply {
    pub fn ok(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Reply::Complete { status, body: body.into() }
    }
}

/// A running server. It stops serving once dropped, so keep it alive for the
/// duration of the test.
pub struct TestServer {
    /// Base URL, with trailing slash.
    pub url: String,
    _mock: Option<MockServer>,
}

pub async fn spawn(reply: Reply) -> TestServer {
    let template = match reply {
        Reply::Complete { status, body } => ResponseTemplate::new(status).set_body_bytes(body),
        Reply::Hang => ResponseTemplate::new(200).set_delay(Duration::from_secs(3600)),
        Reply::Truncated => {
            return TestServer {
                url: spawn_truncated().await,
                _mock: None,
            };
        }
    };

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(template)
        .mount(&server)
        .await;

    TestServer {
        url: format!("{}/", server.uri()),
        _mock: Some(server),
    }
}

/// A URL on a port nobody listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind probe");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/")
}

async fn spawn_truncated() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test server");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let _ = serve_truncated(stream).await;
            });
        }
    });

    format!("http://{addr}/")
}

async fn serve_truncated(mut stream: TcpStream) -> std::io::Result<()> {
    // Drain the request head so closing the socket doesn't turn into a reset.
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    stream
        .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial")
        .await?;
    stream.shutdown().await
}
