// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! midir-based MIDI backend.
//!
//! Cross-platform driver implementation of the [`MidiBackend`] trait over
//! midir (ALSA, Core MIDI, WinMM). Sensing, timing, and system exclusive
//! bytes are all delivered; a monitor wants everything.

use midir::{Ignore, MidiInput, MidiOutput};
use tracing::warn;

use super::error::MidiError;
use super::{InputConnection, MidiBackend, OutputConnection, RawForwarder};

/// Production backend over midir.
pub struct MidirBackend {
    client_name: String,
}

impl MidirBackend {
    pub fn new() -> Self {
        Self {
            client_name: "midiscope".to_string(),
        }
    }

    fn input_client(&self) -> Option<MidiInput> {
        match MidiInput::new(&self.client_name) {
            Ok(mut input) => {
                input.ignore(Ignore::None);
                Some(input)
            }
            Err(err) => {
                warn!(error = %err, "failed to create MIDI input client");
                None
            }
        }
    }

    fn output_client(&self) -> Option<MidiOutput> {
        match MidiOutput::new(&self.client_name) {
            Ok(output) => Some(output),
            Err(err) => {
                warn!(error = %err, "failed to create MIDI output client");
                None
            }
        }
    }
}

impl Default for MidirBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MidiBackend for MidirBackend {
    fn input_names(&self) -> Vec<String> {
        match self.input_client() {
            Some(input) => input
                .ports()
                .iter()
                .filter_map(|port| input.port_name(port).ok())
                .collect(),
            None => Vec::new(),
        }
    }

    fn output_names(&self) -> Vec<String> {
        match self.output_client() {
            Some(output) => output
                .ports()
                .iter()
                .filter_map(|port| output.port_name(port).ok())
                .collect(),
            None => Vec::new(),
        }
    }

    fn connect_input(
        &self,
        name: &str,
        mut forward: RawForwarder,
    ) -> Result<Box<dyn InputConnection>, MidiError> {
        let input = self.input_client().ok_or_else(|| MidiError::PortUnavailable {
            name: name.to_string(),
            reason: "could not create MIDI input client".to_string(),
        })?;
        let port = input
            .ports()
            .into_iter()
            .find(|port| input.port_name(port).map(|n| n == name).unwrap_or(false))
            .ok_or_else(|| MidiError::PortUnavailable {
                name: name.to_string(),
                reason: "no such input port".to_string(),
            })?;
        let conn = input
            .connect(
                &port,
                &self.client_name,
                move |stamp, bytes, _| forward(stamp, bytes),
                (),
            )
            .map_err(|err| MidiError::PortUnavailable {
                name: name.to_string(),
                reason: err.to_string(),
            })?;
        Ok(Box::new(MidirInputConnection { conn }))
    }

    fn connect_output(&self, name: &str) -> Result<Box<dyn OutputConnection>, MidiError> {
        let output = self
            .output_client()
            .ok_or_else(|| MidiError::PortUnavailable {
                name: name.to_string(),
                reason: "could not create MIDI output client".to_string(),
            })?;
        let port = output
            .ports()
            .into_iter()
            .find(|port| output.port_name(port).map(|n| n == name).unwrap_or(false))
            .ok_or_else(|| MidiError::PortUnavailable {
                name: name.to_string(),
                reason: "no such output port".to_string(),
            })?;
        let conn = output
            .connect(&port, &self.client_name)
            .map_err(|err| MidiError::PortUnavailable {
                name: name.to_string(),
                reason: err.to_string(),
            })?;
        Ok(Box::new(MidirOutputConnection { conn }))
    }
}

struct MidirInputConnection {
    conn: midir::MidiInputConnection<()>,
}

impl InputConnection for MidirInputConnection {
    fn close(self: Box<Self>) {
        self.conn.close();
    }
}

struct MidirOutputConnection {
    conn: midir::MidiOutputConnection,
}

impl OutputConnection for MidirOutputConnection {
    fn send(&mut self, message: &[u8]) -> Result<(), MidiError> {
        // A send failing on an established connection means the endpoint
        // went away underneath us.
        self.conn
            .send(message)
            .map_err(|_| MidiError::PortClosed)
    }

    fn close(self: Box<Self>) {
        self.conn.close();
    }
}
