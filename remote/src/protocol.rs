use serde::Serialize;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

pub const DEFAULT_PORT: u16 = 3382;
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, DEFAULT_PORT));
pub const LINE_TERMINATOR: &[u8] = b"\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommandKind {
    Set,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Method {
    Frequency,
}

/// One control message, sent as a JSON object followed by CRLF.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Command {
    pub command: CommandKind,
    pub method: Method,
    pub value: f64,
}

impl Command {
    pub fn tune(frequency: f64) -> Self {
        Self {
            command: CommandKind::Set,
            method: Method::Frequency,
            value: frequency,
        }
    }
}
