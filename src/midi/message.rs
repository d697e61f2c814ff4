// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI message typing and decoding.
//!
//! [`MessageKind`] maps message types to and from status bytes, including
//! the channel-voice expansion where the channel number lives in the low
//! nibble of the status byte. [`RawMidiMessage`] wraps the captured bytes
//! and decodes them on demand into typed fields.

use super::error::MidiError;
use super::messages;
use super::sysex::DecodedSysEx;

/// The fixed set of MIDI 1.0 message kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    // Channel Voice (status high nibble, channel in low nibble)
    NoteOff,
    NoteOn,
    PolyPressure,
    ControlChange,
    ProgramChange,
    ChannelPressure,
    PitchBend,
    // System Common
    TimeCodeQuarterFrame,
    SongPosition,
    SongSelect,
    TuneRequest,
    // System Exclusive
    SystemExclusive,
    EndOfExclusive,
    // System Real-Time
    TimingClock,
    Start,
    Continue,
    Stop,
    ActiveSensing,
    SystemReset,
}

/// The seven channel-voice kinds, in status-byte order.
pub const CHANNEL_VOICE_KINDS: [MessageKind; 7] = [
    MessageKind::NoteOff,
    MessageKind::NoteOn,
    MessageKind::PolyPressure,
    MessageKind::ControlChange,
    MessageKind::ProgramChange,
    MessageKind::ChannelPressure,
    MessageKind::PitchBend,
];

impl MessageKind {
    /// Whether this kind carries a channel in its status byte.
    pub fn is_channel_voice(self) -> bool {
        matches!(
            self,
            MessageKind::NoteOff
                | MessageKind::NoteOn
                | MessageKind::PolyPressure
                | MessageKind::ControlChange
                | MessageKind::ProgramChange
                | MessageKind::ChannelPressure
                | MessageKind::PitchBend
        )
    }

    /// The status byte for this kind. Channel-voice kinds place `channel`
    /// (masked to 4 bits) in the low nibble; system kinds ignore it.
    pub fn status_byte(self, channel: u8) -> u8 {
        let channel = channel & 0x0F;
        match self {
            MessageKind::NoteOff => messages::NOTE_OFF | channel,
            MessageKind::NoteOn => messages::NOTE_ON | channel,
            MessageKind::PolyPressure => messages::POLY_PRESSURE | channel,
            MessageKind::ControlChange => messages::CONTROL_CHANGE | channel,
            MessageKind::ProgramChange => messages::PROGRAM_CHANGE | channel,
            MessageKind::ChannelPressure => messages::CHANNEL_PRESSURE | channel,
            MessageKind::PitchBend => messages::PITCH_BEND | channel,
            MessageKind::TimeCodeQuarterFrame => messages::TIME_CODE_QUARTER_FRAME,
            MessageKind::SongPosition => messages::SONG_POSITION,
            MessageKind::SongSelect => messages::SONG_SELECT,
            MessageKind::TuneRequest => messages::TUNE_REQUEST,
            MessageKind::SystemExclusive => messages::SYSEX_START,
            MessageKind::EndOfExclusive => messages::SYSEX_END,
            MessageKind::TimingClock => messages::TIMING_CLOCK,
            MessageKind::Start => messages::START,
            MessageKind::Continue => messages::CONTINUE,
            MessageKind::Stop => messages::STOP,
            MessageKind::ActiveSensing => messages::ACTIVE_SENSING,
            MessageKind::SystemReset => messages::SYSTEM_RESET,
        }
    }

    /// Reverse lookup from a status byte. Channel-voice bytes have the
    /// channel stripped from the low nibble and returned alongside the
    /// kind; system bytes match exactly. Data bytes and the undefined
    /// system statuses (0xF4, 0xF5, 0xF9, 0xFD) have no kind.
    pub fn from_status(status: u8) -> Option<(MessageKind, Option<u8>)> {
        let channel = status & 0x0F;
        match status {
            0x80..=0x8F => Some((MessageKind::NoteOff, Some(channel))),
            0x90..=0x9F => Some((MessageKind::NoteOn, Some(channel))),
            0xA0..=0xAF => Some((MessageKind::PolyPressure, Some(channel))),
            0xB0..=0xBF => Some((MessageKind::ControlChange, Some(channel))),
            0xC0..=0xCF => Some((MessageKind::ProgramChange, Some(channel))),
            0xD0..=0xDF => Some((MessageKind::ChannelPressure, Some(channel))),
            0xE0..=0xEF => Some((MessageKind::PitchBend, Some(channel))),
            0xF0 => Some((MessageKind::SystemExclusive, None)),
            0xF1 => Some((MessageKind::TimeCodeQuarterFrame, None)),
            0xF2 => Some((MessageKind::SongPosition, None)),
            0xF3 => Some((MessageKind::SongSelect, None)),
            0xF6 => Some((MessageKind::TuneRequest, None)),
            0xF7 => Some((MessageKind::EndOfExclusive, None)),
            0xF8 => Some((MessageKind::TimingClock, None)),
            0xFA => Some((MessageKind::Start, None)),
            0xFB => Some((MessageKind::Continue, None)),
            0xFC => Some((MessageKind::Stop, None)),
            0xFE => Some((MessageKind::ActiveSensing, None)),
            0xFF => Some((MessageKind::SystemReset, None)),
            _ => None,
        }
    }

    /// Human-readable name, per the specification tables.
    pub fn name(self) -> &'static str {
        match self {
            MessageKind::NoteOff => "Note Off",
            MessageKind::NoteOn => "Note On",
            MessageKind::PolyPressure => "Polyphonic Key Pressure (Aftertouch)",
            MessageKind::ControlChange => "Control Change",
            MessageKind::ProgramChange => "Program Change",
            MessageKind::ChannelPressure => "Channel Pressure (Aftertouch)",
            MessageKind::PitchBend => "Pitch Bend Change",
            MessageKind::TimeCodeQuarterFrame => "MIDI Time Code Quarter Frame",
            MessageKind::SongPosition => "Song Position Pointer",
            MessageKind::SongSelect => "Song Select",
            MessageKind::TuneRequest => "Tune Request",
            MessageKind::SystemExclusive => "System Exclusive",
            MessageKind::EndOfExclusive => "End of System Exclusive",
            MessageKind::TimingClock => "Timing Clock",
            MessageKind::Start => "Start",
            MessageKind::Continue => "Continue",
            MessageKind::Stop => "Stop",
            MessageKind::ActiveSensing => "Active Sensing",
            MessageKind::SystemReset => "System Reset",
        }
    }
}

/// A MIDI message decoded into its type-specific fields.
///
/// Channel numbers are 0-15, data fields 7-bit except where noted. Note On
/// with velocity 0 is reported verbatim; consumers that want running
/// note-off semantics fold it themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MidiMessage {
    NoteOff { channel: u8, note: u8, velocity: u8 },
    NoteOn { channel: u8, note: u8, velocity: u8 },
    PolyPressure { channel: u8, note: u8, pressure: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    ProgramChange { channel: u8, program: u8 },
    ChannelPressure { channel: u8, pressure: u8 },
    /// 14-bit value recentered to -8192..=8191
    PitchBend { channel: u8, value: i16 },
    TimeCodeQuarterFrame { frame_type: u8, value: u8 },
    /// 14-bit position in MIDI beats
    SongPosition { beats: u16 },
    SongSelect { song: u8 },
    TuneRequest,
    /// Payload between the 0xF0 and 0xF7 markers, markers stripped
    SystemExclusive { data: Vec<u8> },
    EndOfExclusive,
    TimingClock,
    Start,
    Continue,
    Stop,
    ActiveSensing,
    SystemReset,
}

impl MidiMessage {
    /// The kind tag for this message.
    pub fn kind(&self) -> MessageKind {
        match self {
            MidiMessage::NoteOff { .. } => MessageKind::NoteOff,
            MidiMessage::NoteOn { .. } => MessageKind::NoteOn,
            MidiMessage::PolyPressure { .. } => MessageKind::PolyPressure,
            MidiMessage::ControlChange { .. } => MessageKind::ControlChange,
            MidiMessage::ProgramChange { .. } => MessageKind::ProgramChange,
            MidiMessage::ChannelPressure { .. } => MessageKind::ChannelPressure,
            MidiMessage::PitchBend { .. } => MessageKind::PitchBend,
            MidiMessage::TimeCodeQuarterFrame { .. } => MessageKind::TimeCodeQuarterFrame,
            MidiMessage::SongPosition { .. } => MessageKind::SongPosition,
            MidiMessage::SongSelect { .. } => MessageKind::SongSelect,
            MidiMessage::TuneRequest => MessageKind::TuneRequest,
            MidiMessage::SystemExclusive { .. } => MessageKind::SystemExclusive,
            MidiMessage::EndOfExclusive => MessageKind::EndOfExclusive,
            MidiMessage::TimingClock => MessageKind::TimingClock,
            MidiMessage::Start => MessageKind::Start,
            MidiMessage::Continue => MessageKind::Continue,
            MidiMessage::Stop => MessageKind::Stop,
            MidiMessage::ActiveSensing => MessageKind::ActiveSensing,
            MidiMessage::SystemReset => MessageKind::SystemReset,
        }
    }

    /// The channel for channel-voice messages.
    pub fn channel(&self) -> Option<u8> {
        match self {
            MidiMessage::NoteOff { channel, .. }
            | MidiMessage::NoteOn { channel, .. }
            | MidiMessage::PolyPressure { channel, .. }
            | MidiMessage::ControlChange { channel, .. }
            | MidiMessage::ProgramChange { channel, .. }
            | MidiMessage::ChannelPressure { channel, .. }
            | MidiMessage::PitchBend { channel, .. } => Some(*channel),
            _ => None,
        }
    }
}

/// An immutable captured byte sequence, decoded on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMidiMessage {
    bytes: Vec<u8>,
}

impl RawMidiMessage {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// The raw bytes as received from the driver.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The leading status byte, if any.
    pub fn status(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    /// The message kind derived from the status byte.
    pub fn kind(&self) -> Result<MessageKind, MidiError> {
        let status = self.status().ok_or_else(|| self.malformed())?;
        MessageKind::from_status(status)
            .map(|(kind, _)| kind)
            .ok_or_else(|| self.malformed())
    }

    /// Decode into typed fields.
    ///
    /// Fails with [`MidiError::MalformedMessage`] when the status byte
    /// matches no known pattern or the message is truncated. Decoding one
    /// captured message never affects another; callers drain past errors.
    pub fn decode(&self) -> Result<MidiMessage, MidiError> {
        let status = self.status().ok_or_else(|| self.malformed())?;
        let (kind, channel) = MessageKind::from_status(status).ok_or_else(|| self.malformed())?;
        let channel = channel.unwrap_or(0);
        let data = &self.bytes[1..];

        let message = match kind {
            MessageKind::NoteOff => MidiMessage::NoteOff {
                channel,
                note: *data.first().ok_or_else(|| self.malformed())? & 0x7F,
                velocity: *data.get(1).ok_or_else(|| self.malformed())? & 0x7F,
            },
            MessageKind::NoteOn => MidiMessage::NoteOn {
                channel,
                note: *data.first().ok_or_else(|| self.malformed())? & 0x7F,
                velocity: *data.get(1).ok_or_else(|| self.malformed())? & 0x7F,
            },
            MessageKind::PolyPressure => MidiMessage::PolyPressure {
                channel,
                note: *data.first().ok_or_else(|| self.malformed())? & 0x7F,
                pressure: *data.get(1).ok_or_else(|| self.malformed())? & 0x7F,
            },
            MessageKind::ControlChange => MidiMessage::ControlChange {
                channel,
                controller: *data.first().ok_or_else(|| self.malformed())? & 0x7F,
                value: *data.get(1).ok_or_else(|| self.malformed())? & 0x7F,
            },
            MessageKind::ProgramChange => MidiMessage::ProgramChange {
                channel,
                program: *data.first().ok_or_else(|| self.malformed())? & 0x7F,
            },
            MessageKind::ChannelPressure => MidiMessage::ChannelPressure {
                channel,
                pressure: *data.first().ok_or_else(|| self.malformed())? & 0x7F,
            },
            MessageKind::PitchBend => {
                let lsb = (*data.first().ok_or_else(|| self.malformed())? & 0x7F) as i16;
                let msb = (*data.get(1).ok_or_else(|| self.malformed())? & 0x7F) as i16;
                MidiMessage::PitchBend {
                    channel,
                    value: ((msb << 7) | lsb) - 8192,
                }
            }
            MessageKind::TimeCodeQuarterFrame => {
                let byte = *data.first().ok_or_else(|| self.malformed())? & 0x7F;
                MidiMessage::TimeCodeQuarterFrame {
                    frame_type: byte >> 4,
                    value: byte & 0x0F,
                }
            }
            MessageKind::SongPosition => {
                let lsb = (*data.first().ok_or_else(|| self.malformed())? & 0x7F) as u16;
                let msb = (*data.get(1).ok_or_else(|| self.malformed())? & 0x7F) as u16;
                MidiMessage::SongPosition {
                    beats: (msb << 7) | lsb,
                }
            }
            MessageKind::SongSelect => MidiMessage::SongSelect {
                song: *data.first().ok_or_else(|| self.malformed())? & 0x7F,
            },
            MessageKind::TuneRequest => MidiMessage::TuneRequest,
            MessageKind::SystemExclusive => {
                let data = match data.last() {
                    Some(&messages::SYSEX_END) => &data[..data.len() - 1],
                    _ => data,
                };
                MidiMessage::SystemExclusive {
                    data: data.to_vec(),
                }
            }
            MessageKind::EndOfExclusive => MidiMessage::EndOfExclusive,
            MessageKind::TimingClock => MidiMessage::TimingClock,
            MessageKind::Start => MidiMessage::Start,
            MessageKind::Continue => MidiMessage::Continue,
            MessageKind::Stop => MidiMessage::Stop,
            MessageKind::ActiveSensing => MidiMessage::ActiveSensing,
            MessageKind::SystemReset => MidiMessage::SystemReset,
        };
        Ok(message)
    }

    /// The structured system exclusive view, when this is a SysEx message.
    ///
    /// Returns `None` for non-SysEx messages; the inner result carries
    /// structural decode failures ([`MidiError::SysExTooShort`]).
    pub fn sysex(&self) -> Option<Result<DecodedSysEx, MidiError>> {
        match self.status() {
            Some(messages::SYSEX_START) => Some(DecodedSysEx::decode(&self.bytes[1..])),
            _ => None,
        }
    }

    /// Hex dump of the raw bytes ("90 3C 64").
    pub fn to_hex(&self) -> String {
        self.bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn malformed(&self) -> MidiError {
        MidiError::MalformedMessage {
            bytes: self.bytes.clone(),
        }
    }
}

impl From<&[u8]> for RawMidiMessage {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}
