pub mod pipe;

pub use pipe::start_pipe_server;
