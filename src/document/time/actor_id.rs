use hex::FromHex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width of an actor identity in raw bytes.
pub const ACTOR_ID_SIZE: usize = 12;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ActorIdError {
    #[error("empty actor id")]
    Empty,

    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// ActorId identifies the editor behind a change.
///
/// It is 12 opaque bytes, rendered as a 24-character lowercase hex string,
/// and totally ordered byte-lexicographically so that ties between
/// concurrent edits resolve the same way on every replica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId {
    bytes: [u8; ACTOR_ID_SIZE],
}

impl ActorId {
    pub fn new(bytes: [u8; ACTOR_ID_SIZE]) -> Self {
        Self { bytes }
    }

    /// Parses the 24-character hexadecimal form.
    pub fn from_hex(hex_str: &str) -> Result<Self, ActorIdError> {
        if hex_str.is_empty() {
            return Err(ActorIdError::Empty);
        }

        let bytes = <[u8; ACTOR_ID_SIZE]>::from_hex(hex_str)?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8; ACTOR_ID_SIZE] {
        &self.bytes
    }
}

impl FromStr for ActorId {
    type Err = ActorIdError;

    fn from_str(hex_str: &str) -> Result<Self, Self::Err> {
        Self::from_hex(hex_str)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.bytes))
    }
}
