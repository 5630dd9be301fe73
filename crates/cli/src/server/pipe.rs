use tokio::net::TcpListener;
use tracing::info;
use zkns_pdns_infrastructure::pipe::{serve_stdio, serve_tcp, SessionFactory};

/// Serves one session on stdin/stdout, or many over TCP when `listen` is set.
pub async fn start_pipe_server(listen: Option<&str>, factory: SessionFactory) -> anyhow::Result<()> {
    match listen {
        Some(addr) => {
            let listener = TcpListener::bind(addr).await?;
            info!(bind_address = %addr, "Pipe listener bound");
            serve_tcp(listener, factory).await?;
        }
        None => {
            serve_stdio(&factory).await?;
            info!("Pipe input closed");
        }
    }

    Ok(())
}
