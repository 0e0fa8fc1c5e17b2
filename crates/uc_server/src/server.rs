use tracing::{debug, error, warn};
use uc_normalize::{scrub, stringify};
use uc_syntax::Tokenizer;

use crate::{ErrorReply, Op, ReplyChannel, Reply, Request, RequestError, ServerError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for the next request.
    Idle,
    /// A request has been received and its reply is not yet sent.
    Handling,
}

pub struct Server<C> {
    channel: C,
    tokenizer: Box<dyn Tokenizer + Send>,
    state: ServerState,
    handled: u64,
}

impl<C: ReplyChannel> Server<C> {
    pub fn new(channel: C, tokenizer: Box<dyn Tokenizer + Send>) -> Self {
        Self {
            channel,
            tokenizer,
            state: ServerState::Idle,
            handled: 0,
        }
    }

    pub fn state(&self) -> ServerState {
        self.state
    }

    /// Number of requests answered so far.
    pub fn handled(&self) -> u64 {
        self.handled
    }

    pub fn language(&self) -> &'static str {
        self.tokenizer.language()
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn into_channel(self) -> C {
        self.channel
    }

    /// Serve requests until the transport fails.
    pub fn run(&mut self) -> Result<(), ServerError> {
        loop {
            self.handle_next()?;
        }
    }

    /// Receive one request and send exactly one reply to it.
    pub fn handle_next(&mut self) -> Result<(), ServerError> {
        let payload = self.channel.recv().inspect_err(|err| {
            error!(%err, "receive failed");
        })?;
        self.state = ServerState::Handling;

        let reply = self.respond(&payload);
        let bytes = encode(&reply);
        let sent = self.channel.send(&bytes);
        self.state = ServerState::Idle;

        if let Err(err) = sent {
            error!(%err, "send failed");
            return Err(err.into());
        }
        self.handled += 1;
        Ok(())
    }

    /// Compute the reply for one raw request payload.
    pub fn respond(&self, payload: &[u8]) -> Reply {
        match self.dispatch(payload) {
            Ok(reply) => reply,
            Err(err) => {
                warn!(%err, "request rejected");
                Reply::Error(ErrorReply::from(err))
            }
        }
    }

    fn dispatch(&self, payload: &[u8]) -> Result<Reply, RequestError> {
        let request = Request::decode(payload)?;
        let body = request.validate(self.tokenizer.language())?;
        debug!(op = request.op.as_str(), bytes = body.len(), "request");

        let stream = self.tokenizer.lex(body)?;
        Ok(match request.op {
            Op::Lex => Reply::Tokens(stream),
            Op::Scrub => Reply::Tokens(scrub(&stream)),
            Op::Stringify => {
                Reply::Strings(stream.iter().map(|tok| stringify(tok).into_owned()).collect())
            }
        })
    }
}

fn encode(reply: &Reply) -> Vec<u8> {
    serde_json::to_vec(reply).unwrap_or_else(|err| {
        error!(%err, "reply encoding failed");
        let fallback = Reply::Error(ErrorReply::internal(err.to_string()));
        serde_json::to_vec(&fallback).unwrap_or_else(|_| {
            br#"{"error":"InternalError","message":"reply encoding failed"}"#.to_vec()
        })
    })
}
