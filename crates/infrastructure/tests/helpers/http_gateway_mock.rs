#![allow(dead_code)]
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Minimal HTTP/1.1 server standing in for a store gateway.
///
/// Paths registered with `node` answer 200, paths registered with `status`
/// answer that status, everything else answers 404.
pub struct MockHttpGateway {
    addr: SocketAddr,
    requests: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

#[derive(Default, Clone)]
pub struct GatewayRoutes {
    routes: HashMap<String, (u16, Vec<u8>)>,
}

impl GatewayRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, path: &str, body: &str) -> Self {
        self.routes.insert(path.to_string(), (200, body.as_bytes().to_vec()));
        self
    }

    pub fn status(mut self, path: &str, status: u16) -> Self {
        self.routes.insert(path.to_string(), (status, Vec::new()));
        self
    }
}

impl MockHttpGateway {
    pub async fn start(routes: GatewayRoutes) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&requests);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { continue };
                        counter.fetch_add(1, Ordering::SeqCst);
                        let routes = routes.clone();
                        tokio::spawn(async move {
                            let _ = Self::respond(stream, &routes).await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    async fn respond(
        stream: tokio::net::TcpStream,
        routes: &GatewayRoutes,
    ) -> Result<(), std::io::Error> {
        let (reader, mut writer) = stream.into_split();
        let mut reader = BufReader::new(reader);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).await?;
        let path = request_line
            .split_whitespace()
            .nth(1)
            .unwrap_or("/")
            .to_string();

        loop {
            let mut header = String::new();
            let n = reader.read_line(&mut header).await?;
            if n == 0 || header == "\r\n" || header == "\n" {
                break;
            }
        }

        let (status, body) = routes
            .routes
            .get(&path)
            .cloned()
            .unwrap_or((404, Vec::new()));
        let reason = match status {
            200 => "OK",
            404 => "Not Found",
            _ => "Error",
        };

        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            reason,
            body.len()
        );
        writer.write_all(head.as_bytes()).await?;
        writer.write_all(&body).await?;
        writer.shutdown().await
    }
}

impl Drop for MockHttpGateway {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
