// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI error types.
//!
//! Only structural violations surface as errors: operations on closed or
//! absent ports, and messages too mangled to decode. Table lookup misses
//! (unknown manufacturers, sub-IDs, controller numbers) resolve to an
//! "Undefined" label instead and are handled where the lookup happens.

use thiserror::Error;

/// Errors surfaced by port lifecycle operations and message decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MidiError {
    /// Opening a port failed: the driver has no endpoint with this name,
    /// or refused the connection.
    #[error("MIDI port '{name}' is not available: {reason}")]
    PortUnavailable { name: String, reason: String },

    /// An operation that requires an open port was called on a closed one.
    #[error("MIDI port is not open")]
    PortClosed,

    /// A system exclusive payload is below the minimum decodable length.
    #[error("system exclusive message too short ({len} bytes)")]
    SysExTooShort { len: usize },

    /// The raw bytes match no known status-byte pattern, or the message
    /// is truncated.
    #[error("malformed MIDI message: [{}]", format_bytes(.bytes))]
    MalformedMessage { bytes: Vec<u8> },
}

fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_unavailable_names_the_port() {
        let err = MidiError::PortUnavailable {
            name: "Fake Port 3".to_string(),
            reason: "no such input port".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("Fake Port 3"));
        assert!(message.contains("no such input port"));
    }

    #[test]
    fn test_malformed_message_shows_hex() {
        let err = MidiError::MalformedMessage {
            bytes: vec![0x90, 0x3C],
        };
        assert_eq!(err.to_string(), "malformed MIDI message: [90 3C]");
    }
}
