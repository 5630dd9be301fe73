use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tracing::{error, info, info_span, warn, Instrument};
use zkns_pdns_application::use_cases::LookupNameUseCase;

use super::session::PipeSession;

/// Hands out fresh sessions that share one resolver.
#[derive(Clone)]
pub struct SessionFactory {
    resolver: Arc<LookupNameUseCase>,
    banner: Arc<str>,
}

impl SessionFactory {
    pub fn new(resolver: Arc<LookupNameUseCase>, banner: impl Into<Arc<str>>) -> Self {
        Self {
            resolver,
            banner: banner.into(),
        }
    }

    pub fn session(&self) -> PipeSession {
        PipeSession::new(Arc::clone(&self.resolver), Arc::clone(&self.banner))
    }
}

/// Co-process mode: the nameserver talks to us over stdin and stdout.
pub async fn serve_stdio(factory: &SessionFactory) -> io::Result<()> {
    info!("Serving pipe session on stdin/stdout");
    factory
        .session()
        .serve(tokio::io::stdin(), tokio::io::stdout())
        .await
}

/// Accepts connections forever, one independent session per connection.
pub async fn serve_tcp(listener: TcpListener, factory: SessionFactory) -> io::Result<()> {
    info!(bind_address = %listener.local_addr()?, "Accepting pipe sessions");

    let mut sessions: JoinSet<()> = JoinSet::new();

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "Failed to accept pipe connection");
                        continue;
                    }
                };

                let session = factory.session();
                sessions.spawn(
                    async move {
                        let (reader, writer) = stream.into_split();
                        if let Err(e) = session.serve(reader, writer).await {
                            warn!(error = %e, "Pipe session I/O error");
                        }
                    }
                    .instrument(info_span!("pipe_session", peer = %peer)),
                );
            }
            Some(joined) = sessions.join_next(), if !sessions.is_empty() => {
                if let Err(e) = joined {
                    error!(error = %e, "Pipe session task panicked");
                }
            }
        }
    }
}
