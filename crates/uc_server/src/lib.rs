//! uc_server: request/reply tokenization service.
//!
//! One bound reply socket, one tokenizer, one request in flight. Every
//! request that is received gets exactly one reply, success or error.
//! Entry points: `Server::new(channel, tokenizer)`, `serve(&config)`.
mod channel;
mod config;
mod error;
mod protocol;
mod server;

pub use channel::{ReplyChannel, ZmqReply};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_LANGUAGE, ServerConfig};
pub use error::{ProtocolError, RequestError, ServerError, TransportError};
pub use protocol::{ErrorKind, ErrorReply, Op, Reply, Request};
pub use server::{Server, ServerState};

use tracing::info;
use uc_lexer::PythonTokenizer;

/// Bind the configured endpoint and serve until the transport fails.
pub fn serve(config: &ServerConfig) -> Result<(), ServerError> {
    let tokenizer = PythonTokenizer;
    config.check_language(&tokenizer)?;

    let ctx = zmq::Context::new();
    let channel = ZmqReply::bind(&ctx, &config.endpoint)?;
    info!(endpoint = channel.endpoint(), language = %config.language, "listening");

    let mut server = Server::new(channel, Box::new(tokenizer));
    server.run()
}
