//! Wire format for telemetry and session checkpoints.
//!
//! Everything leaving the driver goes through an [`Envelope`] so a reader can
//! reject bytes written by an incompatible build before trusting the payload.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use flight::{CameraPose, FlightSim, MinimapSnapshot, ShipCosmetics, SimCheckpoint};

/// Bump whenever a message layout changes.
pub const PROTOCOL_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("failed to encode message: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode message: {0}")]
    Decode(#[source] bincode::Error),
    #[error("protocol version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("expected {expected} message, got {found}")]
    UnexpectedMessage {
        expected: &'static str,
        found: &'static str,
    },
}

/// Per-frame state a renderer or HUD needs, without the simulation internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameTelemetry {
    pub frame: u64,
    pub boost_level: f32,
    pub boosting: bool,
    pub minimap: MinimapSnapshot,
    pub camera: CameraPose,
    pub cosmetics: ShipCosmetics,
}

impl FrameTelemetry {
    pub fn from_sim(sim: &FlightSim) -> Self {
        Self {
            frame: sim.frame(),
            boost_level: sim.boost_level(),
            boosting: sim.last_boost().boosting,
            minimap: sim.snapshot(),
            camera: sim.camera,
            cosmetics: sim.cosmetics(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    Hello { version: u32 },
    Telemetry(FrameTelemetry),
    Checkpoint(SimCheckpoint),
}

impl Message {
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Hello { .. } => "Hello",
            Message::Telemetry(_) => "Telemetry",
            Message::Checkpoint(_) => "Checkpoint",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub version: u32,
    pub message: Message,
}

pub fn encode(msg: &Message) -> Result<Vec<u8>, ProtocolError> {
    let envelope = Envelope {
        version: PROTOCOL_VERSION,
        message: msg.clone(),
    };
    bincode::serialize(&envelope).map_err(ProtocolError::Encode)
}

pub fn decode(bytes: &[u8]) -> Result<Message, ProtocolError> {
    let envelope: Envelope = bincode::deserialize(bytes).map_err(ProtocolError::Decode)?;
    if envelope.version != PROTOCOL_VERSION {
        return Err(ProtocolError::VersionMismatch {
            expected: PROTOCOL_VERSION,
            found: envelope.version,
        });
    }
    Ok(envelope.message)
}

pub fn encode_checkpoint(checkpoint: &SimCheckpoint) -> Result<Vec<u8>, ProtocolError> {
    encode(&Message::Checkpoint(checkpoint.clone()))
}

pub fn decode_checkpoint(bytes: &[u8]) -> Result<SimCheckpoint, ProtocolError> {
    match decode(bytes)? {
        Message::Checkpoint(cp) => Ok(cp),
        other => Err(ProtocolError::UnexpectedMessage {
            expected: "Checkpoint",
            found: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_round_trips() {
        let bytes = encode(&Message::Hello { version: PROTOCOL_VERSION }).unwrap();
        assert_eq!(decode(&bytes).unwrap(), Message::Hello { version: PROTOCOL_VERSION });
    }

    #[test]
    fn foreign_version_is_rejected() {
        let envelope = Envelope {
            version: PROTOCOL_VERSION + 1,
            message: Message::Hello { version: PROTOCOL_VERSION + 1 },
        };
        let bytes = bincode::serialize(&envelope).unwrap();
        match decode(&bytes) {
            Err(ProtocolError::VersionMismatch { expected, found }) => {
                assert_eq!(expected, PROTOCOL_VERSION);
                assert_eq!(found, PROTOCOL_VERSION + 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn checkpoint_decoder_refuses_other_messages() {
        let bytes = encode(&Message::Hello { version: PROTOCOL_VERSION }).unwrap();
        assert!(matches!(
            decode_checkpoint(&bytes),
            Err(ProtocolError::UnexpectedMessage { found: "Hello", .. })
        ));
    }

    #[test]
    fn truncated_bytes_fail_to_decode() {
        let bytes = encode(&Message::Hello { version: PROTOCOL_VERSION }).unwrap();
        assert!(matches!(decode(&bytes[..2]), Err(ProtocolError::Decode(_))));
    }
}
