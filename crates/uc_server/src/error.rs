use thiserror::Error;
use uc_syntax::TokenizeError;

/// A request that cannot be served as sent.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("request has no `language` field")]
    MissingLanguage,
    #[error("request has no `body` field")]
    MissingBody,
    #[error("unsupported language `{got}`, this server handles `{expected}`")]
    UnsupportedLanguage { expected: &'static str, got: String },
}

/// Anything that turns a request into an error reply.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("zmq: {0}")]
    Zmq(#[from] zmq::Error),
    #[error("channel closed")]
    Closed,
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
    #[error("configured language `{configured}` is not served by the `{available}` tokenizer")]
    UnsupportedLanguage {
        configured: String,
        available: &'static str,
    },
}
