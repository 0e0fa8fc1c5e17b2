#![allow(dead_code)]

use std::collections::VecDeque;

use serde_json::Value;
use uc_server::{ReplyChannel, TransportError};
use uc_syntax::{TokenStream, TokenizeError, TokenizeErrorKind, Tokenizer};

/// Scripted channel: hands out queued requests, records replies.
#[derive(Default)]
pub struct MockChannel {
    inbox: VecDeque<Vec<u8>>,
    pub sent: Vec<Vec<u8>>,
    pub fail_send: bool,
}

impl MockChannel {
    pub fn with_requests<I, B>(requests: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        Self {
            inbox: requests.into_iter().map(|r| r.as_ref().to_vec()).collect(),
            ..Self::default()
        }
    }

    pub fn replies(&self) -> Vec<Value> {
        self.sent
            .iter()
            .map(|bytes| serde_json::from_slice(bytes).unwrap())
            .collect()
    }
}

impl ReplyChannel for MockChannel {
    fn recv(&mut self) -> Result<Vec<u8>, TransportError> {
        self.inbox.pop_front().ok_or(TransportError::Closed)
    }

    fn send(&mut self, reply: &[u8]) -> Result<(), TransportError> {
        if self.fail_send {
            return Err(TransportError::Closed);
        }
        self.sent.push(reply.to_vec());
        Ok(())
    }
}

/// Tokenizer that fails every input with the same error.
pub struct BrokenTokenizer;

impl Tokenizer for BrokenTokenizer {
    fn language(&self) -> &'static str {
        "python"
    }

    fn lex(&self, _source: &str) -> Result<TokenStream, TokenizeError> {
        Err(TokenizeError::new(
            TokenizeErrorKind::InconsistentDedent,
            (3, 1).into(),
        ))
    }
}

pub fn request(language: &str, body: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({ "language": language, "body": body })).unwrap()
}
