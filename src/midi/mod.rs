// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI I/O abstraction layer.
//!
//! This module provides a trait-based abstraction over the MIDI driver,
//! allowing different backends (midir in production, fakes in tests) to be
//! used interchangeably, plus the message typing, system exclusive
//! decoding, and port lifecycle built on top of it.

pub mod backend;
pub mod constants;
pub mod error;
pub mod message;
pub mod notes;
pub mod ports;
pub mod sysex;

pub use backend::MidirBackend;
pub use error::MidiError;
pub use message::{MessageKind, MidiMessage, RawMidiMessage, CHANNEL_VOICE_KINDS};
pub use notes::{note_name, NoteNameStyle};
pub use ports::{Destination, InputPort, OutputPort, PortDirection, PortInfo, ReceiveMode};
pub use sysex::{DecodedSysEx, IdGroup, IdRegion, SubId, SysExId, SysExPayload};

/// Handler installed on an input connection at connect time. Receives the
/// driver's timestamp (microseconds, driver epoch) and the raw bytes of
/// one message, on the driver's thread.
pub type RawForwarder = Box<dyn FnMut(u64, &[u8]) + Send>;

/// Trait for MIDI driver backends.
///
/// This is the complete surface the capture core needs from a driver:
/// enumerate ports by name, open an input with a byte forwarder, open an
/// output, send on it, and close. Anything with MIDI 1.0 byte-stream
/// semantics fits.
pub trait MidiBackend {
    /// Names of the available input ports.
    fn input_names(&self) -> Vec<String>;

    /// Names of the available output ports.
    fn output_names(&self) -> Vec<String>;

    /// Open the named input and install `forward` as its receive handler.
    ///
    /// # Returns
    /// * `Ok(connection)` on success
    /// * `Err(MidiError::PortUnavailable)` if the driver does not list
    ///   the name or refuses the connection
    fn connect_input(
        &self,
        name: &str,
        forward: RawForwarder,
    ) -> Result<Box<dyn InputConnection>, MidiError>;

    /// Open the named output.
    fn connect_output(&self, name: &str) -> Result<Box<dyn OutputConnection>, MidiError>;
}

/// An open driver input connection. Dropping it also disconnects, but
/// `close` makes the release explicit.
pub trait InputConnection: Send {
    fn close(self: Box<Self>);
}

/// An open driver output connection.
pub trait OutputConnection: Send {
    /// Send one complete message's raw bytes.
    ///
    /// # Arguments
    /// * `message` - Raw MIDI bytes (e.g., `[0x90, 60, 127]` for Note On)
    fn send(&mut self, message: &[u8]) -> Result<(), MidiError>;

    fn close(self: Box<Self>);
}

/// MIDI message constants
pub mod messages {
    // Channel Voice Messages (upper nibble, lower nibble is channel 0-15)
    pub const NOTE_OFF: u8 = 0x80;
    pub const NOTE_ON: u8 = 0x90;
    pub const POLY_PRESSURE: u8 = 0xA0;
    pub const CONTROL_CHANGE: u8 = 0xB0;
    pub const PROGRAM_CHANGE: u8 = 0xC0;
    pub const CHANNEL_PRESSURE: u8 = 0xD0;
    pub const PITCH_BEND: u8 = 0xE0;

    // System Common Messages
    pub const TIME_CODE_QUARTER_FRAME: u8 = 0xF1;
    pub const SONG_POSITION: u8 = 0xF2;
    pub const SONG_SELECT: u8 = 0xF3;
    pub const TUNE_REQUEST: u8 = 0xF6;

    // System Real-Time Messages
    pub const TIMING_CLOCK: u8 = 0xF8;
    pub const START: u8 = 0xFA;
    pub const CONTINUE: u8 = 0xFB;
    pub const STOP: u8 = 0xFC;
    pub const ACTIVE_SENSING: u8 = 0xFE;
    pub const SYSTEM_RESET: u8 = 0xFF;

    // System Exclusive Messages
    pub const SYSEX_START: u8 = 0xF0;
    pub const SYSEX_END: u8 = 0xF7;
}

/// Enumerate the backend's input ports as [`PortInfo`] values.
pub fn list_inputs(backend: &dyn MidiBackend) -> Vec<PortInfo> {
    backend
        .input_names()
        .iter()
        .map(|name| PortInfo::new(name, PortDirection::Input))
        .collect()
}

/// Enumerate the backend's output ports as [`PortInfo`] values.
pub fn list_outputs(backend: &dyn MidiBackend) -> Vec<PortInfo> {
    backend
        .output_names()
        .iter()
        .map(|name| PortInfo::new(name, PortDirection::Output))
        .collect()
}
