use std::io;
use std::sync::Arc;
use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter,
};
use tracing::{debug, error, info, warn};
use zkns_pdns_application::use_cases::LookupNameUseCase;
use zkns_pdns_domain::{parse_handshake, DomainError, PipeQuery, PipeResponse};

/// Longest input line accepted, newline excluded.
pub const MAX_LINE_LEN: usize = 8 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingHandshake,
    Serving,
    Closed,
}

/// One pipe protocol conversation with the nameserver.
///
/// Strictly sequential: a line is fully answered before the next one is
/// read, so responses come out in query order.
pub struct PipeSession {
    state: SessionState,
    banner: Arc<str>,
    resolver: Arc<LookupNameUseCase>,
}

impl PipeSession {
    pub fn new(resolver: Arc<LookupNameUseCase>, banner: impl Into<Arc<str>>) -> Self {
        Self {
            state: SessionState::AwaitingHandshake,
            banner: banner.into(),
            resolver,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Feeds one input line (without its newline) through the state machine.
    pub async fn handle_line(&mut self, line: &str) -> Vec<PipeResponse> {
        match self.state {
            SessionState::AwaitingHandshake => match parse_handshake(line) {
                Ok(version) => {
                    info!(abi_version = version, "Pipe handshake accepted");
                    self.state = SessionState::Serving;
                    vec![PipeResponse::Banner(Arc::clone(&self.banner))]
                }
                Err(e) => {
                    warn!(error = %e, "Pipe handshake rejected");
                    self.state = SessionState::Closed;
                    Vec::new()
                }
            },
            SessionState::Serving => self.answer(line).await,
            SessionState::Closed => Vec::new(),
        }
    }

    /// Answers a line that is not valid UTF-8.
    pub fn handle_undecodable_line(&mut self) -> Vec<PipeResponse> {
        match self.state {
            SessionState::AwaitingHandshake => {
                warn!("Pipe handshake rejected: line is not valid UTF-8");
                self.state = SessionState::Closed;
                Vec::new()
            }
            SessionState::Serving => {
                warn!("Pipe line is not valid UTF-8");
                vec![PipeResponse::Fail]
            }
            SessionState::Closed => Vec::new(),
        }
    }

    /// End of input.
    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }

    async fn answer(&self, line: &str) -> Vec<PipeResponse> {
        let query = match PipeQuery::parse(line) {
            Ok(query) => query,
            Err(e) => {
                warn!(error = %e, "Unsupported pipe line");
                return vec![PipeResponse::Fail];
            }
        };

        match self.resolver.execute(&query).await {
            Ok(answer) => answer.into_responses(),
            Err(e @ DomainError::DomainMismatch(_)) => {
                debug!(qname = %query.name, error = %e, "Query outside served zone");
                vec![PipeResponse::Fail]
            }
            Err(e) => {
                error!(qname = %query.name, qtype = %query.qtype, error = %e, "Lookup failed");
                vec![PipeResponse::Fail]
            }
        }
    }

    /// Runs the session until `reader` reaches end of input, the handshake
    /// is rejected, or a line exceeds [`MAX_LINE_LEN`]. Each response is
    /// flushed before the next line is read.
    pub async fn serve<R, W>(mut self, reader: R, writer: W) -> io::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = BufReader::new(reader);
        let mut writer = BufWriter::new(writer);
        let mut buf = Vec::with_capacity(256);

        while self.state != SessionState::Closed {
            buf.clear();
            let limit = (MAX_LINE_LEN + 2) as u64;
            let n = (&mut reader)
                .take(limit)
                .read_until(b'\n', &mut buf)
                .await?;
            if n == 0 {
                break;
            }

            // A cut-off line still holds more than MAX_LINE_LEN bytes here.
            let line = strip_line_ending(&buf);

            let responses = if line.len() > MAX_LINE_LEN {
                warn!(limit = MAX_LINE_LEN, "Pipe line too long, closing session");
                let responses = match self.state {
                    SessionState::Serving => vec![PipeResponse::Fail],
                    _ => Vec::new(),
                };
                self.close();
                responses
            } else {
                match std::str::from_utf8(line) {
                    Ok(text) => self.handle_line(text).await,
                    Err(_) => self.handle_undecodable_line(),
                }
            };

            if responses.is_empty() {
                continue;
            }

            let mut out = String::new();
            for response in &responses {
                out.push_str(&response.to_string());
                out.push('\n');
            }
            writer.write_all(out.as_bytes()).await?;
            writer.flush().await?;
        }

        self.close();
        writer.flush().await?;
        debug!("Pipe session closed");
        Ok(())
    }
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}
