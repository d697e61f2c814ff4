// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! System Exclusive decoding.
//!
//! Decodes the bytes between the 0xF0 start marker and the 0xF7 end marker
//! into identifier, device ID, and payload. Universal identifiers (0x7E,
//! 0x7F) additionally resolve Sub-ID #1 and, where defined, Sub-ID #2
//! against the specification tables. A syntactically valid message with an
//! unrecognized manufacturer or sub-ID always decodes; unknown values
//! resolve to "Undefined" labels. Only structurally short input is an
//! error.

use std::fmt;

use super::constants;
use super::error::MidiError;
use super::messages;

/// ID classification by the first identifier byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGroup {
    /// 0x00-0x7C, registered manufacturers
    Manufacturer,
    /// 0x7D, reserved for non-commercial use
    Reserved,
    /// 0x7E (non-real-time) and 0x7F (real-time)
    Universal,
}

impl IdGroup {
    pub fn label(self) -> &'static str {
        match self {
            IdGroup::Manufacturer => "Manufacturer",
            IdGroup::Reserved => "Reserved",
            IdGroup::Universal => "Universal",
        }
    }
}

/// Geographic registration region of a manufacturer ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdRegion {
    American,
    European,
    Japanese,
}

impl IdRegion {
    pub fn label(self) -> &'static str {
        match self {
            IdRegion::American => "American",
            IdRegion::European => "European",
            IdRegion::Japanese => "Japanese",
        }
    }
}

/// A system exclusive identifier: one byte, or three bytes when the first
/// is 0x00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysExId {
    Short(u8),
    Long([u8; 3]),
}

impl SysExId {
    /// The raw identifier bytes.
    pub fn bytes(&self) -> &[u8] {
        match self {
            SysExId::Short(id) => std::slice::from_ref(id),
            SysExId::Long(id) => id,
        }
    }

    /// Group classification from the first byte.
    pub fn group(&self) -> IdGroup {
        let first = match self {
            SysExId::Short(id) => *id,
            SysExId::Long(id) => id[0],
        };
        match first {
            0x7D => IdGroup::Reserved,
            0x7E | 0x7F => IdGroup::Universal,
            _ => IdGroup::Manufacturer,
        }
    }

    /// Registration region. Keyed on the ID byte for 1-byte identifiers
    /// and on the second byte for 3-byte identifiers; Universal and
    /// unassigned ranges have none.
    pub fn region(&self) -> Option<IdRegion> {
        let index = match self {
            SysExId::Short(id) => *id,
            SysExId::Long(id) => id[1],
        };
        match index {
            0x00..=0x1F => Some(IdRegion::American),
            0x20..=0x3F => Some(IdRegion::European),
            0x40..=0x5F => Some(IdRegion::Japanese),
            _ => None,
        }
    }

    /// Registered name, "Undefined" on any miss.
    pub fn name(&self) -> &'static str {
        match self {
            SysExId::Short(id) => constants::manufacturer_name_short(*id),
            SysExId::Long(id) => constants::manufacturer_name_long(id[1], id[2]),
        }
    }
}

impl fmt::Display for SysExId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self
            .bytes()
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} ({})", hex, self.name())
    }
}

/// A resolved sub-identifier byte with its table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubId {
    pub value: u8,
    pub name: &'static str,
}

/// Payload following the device ID, selected once at decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SysExPayload {
    /// Manufacturer or reserved ID: opaque data
    Plain { data: Vec<u8> },
    /// Universal Non-Real-Time (0x7E)
    UniversalNonRealTime {
        sub_id1: SubId,
        sub_id2: Option<SubId>,
        data: Vec<u8>,
    },
    /// Universal Real-Time (0x7F)
    UniversalRealTime {
        sub_id1: SubId,
        sub_id2: Option<SubId>,
        data: Vec<u8>,
    },
}

impl SysExPayload {
    /// The undecoded data bytes after any sub-identifiers.
    pub fn data(&self) -> &[u8] {
        match self {
            SysExPayload::Plain { data }
            | SysExPayload::UniversalNonRealTime { data, .. }
            | SysExPayload::UniversalRealTime { data, .. } => data,
        }
    }
}

/// Read-only decoded view over a system exclusive payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSysEx {
    pub identifier: SysExId,
    pub device_id: u8,
    pub payload: SysExPayload,
}

impl DecodedSysEx {
    /// Decode the bytes strictly between the 0xF0 and 0xF7 markers; a
    /// trailing 0xF7 is tolerated and stripped.
    ///
    /// At least an identifier, a device ID, and one payload byte must
    /// remain (5 bytes for a 3-byte identifier), else
    /// [`MidiError::SysExTooShort`].
    pub fn decode(payload: &[u8]) -> Result<Self, MidiError> {
        let body = match payload.last() {
            Some(&messages::SYSEX_END) => &payload[..payload.len() - 1],
            _ => payload,
        };
        if body.len() < 3 {
            return Err(MidiError::SysExTooShort { len: body.len() });
        }

        let (identifier, device_index) = if body[0] == 0x00 {
            if body.len() < 5 {
                return Err(MidiError::SysExTooShort { len: body.len() });
            }
            (SysExId::Long([body[0], body[1], body[2]]), 3)
        } else {
            (SysExId::Short(body[0]), 1)
        };

        let device_id = body[device_index];
        let rest = &body[device_index + 1..];

        let payload = match identifier {
            SysExId::Short(0x7E) => {
                let (sub_id1, sub_id2, data) = decode_universal(
                    rest,
                    constants::non_real_time_sub_id_1_name,
                    constants::non_real_time_has_sub_id_2,
                    constants::non_real_time_sub_id_2_name,
                );
                SysExPayload::UniversalNonRealTime {
                    sub_id1,
                    sub_id2,
                    data,
                }
            }
            SysExId::Short(0x7F) => {
                let (sub_id1, sub_id2, data) = decode_universal(
                    rest,
                    constants::real_time_sub_id_1_name,
                    constants::real_time_has_sub_id_2,
                    constants::real_time_sub_id_2_name,
                );
                SysExPayload::UniversalRealTime {
                    sub_id1,
                    sub_id2,
                    data,
                }
            }
            _ => SysExPayload::Plain {
                data: rest.to_vec(),
            },
        };

        Ok(Self {
            identifier,
            device_id,
            payload,
        })
    }
}

// The minimum-length check guarantees at least one byte after the device
// ID, so Sub-ID #1 is always present. Sub-ID #2 is resolved only when its
// table exists for this Sub-ID #1 and a byte remains; a message cut off
// right after Sub-ID #1 is still decodable.
fn decode_universal(
    rest: &[u8],
    sub_id_1_name: fn(u8) -> &'static str,
    has_sub_id_2: fn(u8) -> bool,
    sub_id_2_name: fn(u8, u8) -> &'static str,
) -> (SubId, Option<SubId>, Vec<u8>) {
    let sub_id1 = SubId {
        value: rest[0],
        name: sub_id_1_name(rest[0]),
    };
    let mut data_start = 1;
    let sub_id2 = if has_sub_id_2(rest[0]) {
        rest.get(1).map(|&value| {
            data_start = 2;
            SubId {
                value,
                name: sub_id_2_name(rest[0], value),
            }
        })
    } else {
        None
    };
    (sub_id1, sub_id2, rest[data_start..].to_vec())
}
