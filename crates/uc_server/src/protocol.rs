//! Wire shapes. Requests and replies are single JSON documents.
use serde::{Deserialize, Serialize};
use uc_syntax::{Position, TokenStream};

use crate::{ProtocolError, RequestError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    #[default]
    Lex,
    Scrub,
    Stringify,
}

impl Op {
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Lex => "lex",
            Op::Scrub => "scrub",
            Op::Stringify => "stringify",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub op: Op,
}

impl Request {
    pub fn new(language: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            body: Some(body.into()),
            op: Op::Lex,
        }
    }

    pub fn with_op(mut self, op: Op) -> Self {
        self.op = op;
        self
    }

    pub fn decode(payload: &[u8]) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_slice(payload)?)
    }

    /// Check the request against the served language and hand back the body.
    pub fn validate(&self, expected: &'static str) -> Result<&str, ProtocolError> {
        let language = self.language.as_deref().ok_or(ProtocolError::MissingLanguage)?;
        if !language.eq_ignore_ascii_case(expected) {
            return Err(ProtocolError::UnsupportedLanguage {
                expected,
                got: language.to_string(),
            });
        }
        self.body.as_deref().ok_or(ProtocolError::MissingBody)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    ProtocolError,
    TokenizeError,
    InternalError,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl ErrorReply {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: ErrorKind::InternalError,
            message: message.into(),
            position: None,
        }
    }
}

impl From<RequestError> for ErrorReply {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Protocol(err) => Self {
                error: ErrorKind::ProtocolError,
                message: err.to_string(),
                position: None,
            },
            RequestError::Tokenize(err) => Self {
                error: ErrorKind::TokenizeError,
                message: err.kind.message().to_string(),
                position: Some(err.pos),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    Tokens(TokenStream),
    Strings(Vec<String>),
    Error(ErrorReply),
}

impl Reply {
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }
}
