use crate::TransportError;

/// The reply side of a strict request/reply exchange.
///
/// Implementations alternate: one `recv`, then one `send`.
pub trait ReplyChannel {
    fn recv(&mut self) -> Result<Vec<u8>, TransportError>;
    fn send(&mut self, reply: &[u8]) -> Result<(), TransportError>;
}

/// A bound ZeroMQ REP socket. Dropping it closes the socket.
pub struct ZmqReply {
    socket: zmq::Socket,
    endpoint: String,
}

impl ZmqReply {
    pub fn bind(ctx: &zmq::Context, endpoint: &str) -> Result<Self, TransportError> {
        let socket = ctx.socket(zmq::REP)?;
        socket.set_linger(0)?;
        socket.bind(endpoint)?;
        // Resolves wildcard ports such as `tcp://127.0.0.1:*`.
        let endpoint = match socket.get_last_endpoint()? {
            Ok(resolved) => resolved,
            Err(_) => endpoint.to_string(),
        };
        Ok(Self { socket, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ReplyChannel for ZmqReply {
    fn recv(&mut self) -> Result<Vec<u8>, TransportError> {
        Ok(self.socket.recv_bytes(0)?)
    }

    fn send(&mut self, reply: &[u8]) -> Result<(), TransportError> {
        self.socket.send(reply, 0)?;
        Ok(())
    }
}
