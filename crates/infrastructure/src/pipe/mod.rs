pub mod listener;
pub mod session;

pub use listener::{serve_stdio, serve_tcp, SessionFactory};
pub use session::{PipeSession, SessionState, MAX_LINE_LEN};
