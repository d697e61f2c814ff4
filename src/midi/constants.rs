// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI constant tables.
//!
//! Derived from the MIDI 1.0 Detailed Specification v4.2.1 and the MMA/AMEI
//! manufacturer ID registries. Every lookup in this module is total: a value
//! that is not in a table resolves to [`UNDEFINED`] (or an equivalent
//! reserved label), never to an error. Unknown identifiers are data to
//! display, not failures.

/// Fallback label for any table miss.
pub const UNDEFINED: &str = "Undefined";

/// Control Change controller number names (spec table T-3).
///
/// Total over 0-127; numbers 120-127 are reserved for channel mode messages
/// and resolve through [`channel_mode_name`] when the caller wants the
/// specific mode name.
pub fn controller_name(number: u8) -> &'static str {
    match number {
        0 => "Bank Select",
        1 => "Modulation wheel or lever",
        2 => "Breath controller",
        4 => "Foot controller",
        5 => "Portamento time",
        6 => "Data entry MSB",
        7 => "Channel Volume",
        8 => "Balance",
        10 => "Pan",
        11 => "Expression Controller",
        12 => "Effect Control 1",
        13 => "Effect Control 2",
        16 => "General Purpose Controller 1",
        17 => "General Purpose Controller 2",
        18 => "General Purpose Controller 3",
        19 => "General Purpose Controller 4",
        // LSB for values 0-31
        32 => "Bank Select LSB",
        33 => "Modulation wheel or lever LSB",
        34 => "Breath controller LSB",
        35 => "Undefined LSB (3)",
        36 => "Foot controller LSB",
        37 => "Portamento time LSB",
        38 => "Data entry LSB",
        39 => "Channel Volume LSB",
        40 => "Balance LSB",
        41 => "Undefined LSB (9)",
        42 => "Pan LSB",
        43 => "Expression Controller LSB",
        44 => "Effect Control 1 LSB",
        45 => "Effect Control 2 LSB",
        46 => "Undefined LSB (14)",
        47 => "Undefined LSB (15)",
        48 => "General Purpose Controller 1 LSB",
        49 => "General Purpose Controller 2 LSB",
        50 => "General Purpose Controller 3 LSB",
        51 => "General Purpose Controller 4 LSB",
        52 => "Undefined LSB (20)",
        53 => "Undefined LSB (21)",
        54 => "Undefined LSB (22)",
        55 => "Undefined LSB (23)",
        56 => "Undefined LSB (24)",
        57 => "Undefined LSB (25)",
        58 => "Undefined LSB (26)",
        59 => "Undefined LSB (27)",
        60 => "Undefined LSB (28)",
        61 => "Undefined LSB (29)",
        62 => "Undefined LSB (30)",
        63 => "Undefined LSB (31)",
        64 => "Damper pedal (sustain)",
        65 => "Portamento On/Off",
        66 => "Sostenuto",
        67 => "Soft pedal",
        68 => "Legato Footswitch",
        69 => "Hold 2",
        70 => "Sound Controller 1",
        71 => "Sound Controller 2",
        72 => "Sound Controller 3",
        73 => "Sound Controller 4",
        74 => "Sound Controller 5",
        75 => "Sound Controller 6",
        76 => "Sound Controller 7",
        77 => "Sound Controller 8",
        78 => "Sound Controller 9",
        79 => "Sound Controller 10",
        80 => "General Purpose Controller 5",
        81 => "General Purpose Controller 6",
        82 => "General Purpose Controller 7",
        83 => "General Purpose Controller 8",
        84 => "Portamento Control",
        91 => "Effects 1 Depth",
        92 => "Effects 2 Depth",
        93 => "Effects 3 Depth",
        94 => "Effects 4 Depth",
        95 => "Effects 5 Depth",
        96 => "Data increment",
        97 => "Data decrement",
        98 => "Non-Registered Parameter Number LSB",
        99 => "Non-Registered Parameter Number MSB",
        100 => "Registered Parameter Number LSB",
        101 => "Registered Parameter Number MSB",
        120..=127 => "Reserved for Channel Mode Messages",
        _ => UNDEFINED,
    }
}

/// Channel mode message names for controller numbers 120-127 (table T-5).
/// Only valid on the device's basic channel.
pub fn channel_mode_name(number: u8) -> Option<&'static str> {
    match number {
        120 => Some("All Sound Off"),
        121 => Some("Reset All Controllers"),
        122 => Some("Local Control"),
        123 => Some("All Notes Off"),
        124 => Some("Omni Mode Off (All Notes Off)"),
        125 => Some("Omni Mode On (All Notes Off)"),
        126 => Some("Mono Mode On (Poly Mode Off) (All Notes Off)"),
        127 => Some("Poly Mode On (Mono Mode Off) (All Notes Off)"),
        _ => None,
    }
}

/// Registered parameter number names (table T-4). LSB only, MSB is 0x00.
pub fn registered_parameter_name(lsb: u8) -> &'static str {
    match lsb {
        0x00 => "Pitch Bend Sensitivity",
        0x01 => "Fine Tuning",
        0x02 => "Coarse Tuning",
        0x03 => "Tuning Program Select",
        0x04 => "Tuning Bank Select",
        _ => UNDEFINED,
    }
}

/// 1-byte system exclusive ID names (table T-11 plus AMEI updates).
pub fn manufacturer_name_short(id: u8) -> &'static str {
    match id {
        // American Group (01-1F)
        0x01 => "Sequencial",
        0x02 => "IDP",
        0x03 => "Voyetra/Octave-Plateau",
        0x04 => "Moog",
        0x05 => "Passport Designs",
        0x06 => "Lexicon",
        0x07 => "Kurzweil",
        0x08 => "Fender",
        0x09 => "Gulbransen",
        0x0A => "AKG Acoustics",
        0x0B => "Voyce Music",
        0x0C => "Waveframe Corp",
        0x0D => "ADA Signal Processors",
        0x0E => "Garfield Electronics",
        0x0F => "Ensoniq",
        0x10 => "Oberheim",
        0x11 => "Apple Computer",
        0x12 => "Grey Matter Response",
        0x13 => "Digidesign",
        0x14 => "Palm Tree Instruments",
        0x15 => "JLCooper Electronics",
        0x16 => "Lowrey",
        0x17 => "Adams-Smith",
        0x18 => "Emu Systems",
        0x19 => "Harmony Systems",
        0x1A => "ART",
        0x1B => "Baldwin",
        0x1C => "Eventide",
        0x1D => "Inventronics",
        0x1F => "Clarity",
        // European Group (20-3F)
        0x20 => "Passac",
        0x21 => "SIEL",
        0x22 => "Synthaxe",
        0x24 => "Hohner",
        0x25 => "Twister",
        0x26 => "Solton",
        0x27 => "Jellinghaus MS",
        0x28 => "Southworth Music Systems",
        0x29 => "PPG",
        0x2A => "JEN",
        0x2B => "SSL Limited",
        0x2C => "Audio Veritrieb",
        0x2F => "Elka",
        0x30 => "Dynacord",
        0x31 => "Viscount",
        0x33 => "Clavia Digital Instruments",
        0x34 => "Audio Architecture",
        0x35 => "General Music Corp.",
        0x39 => "Soundcraft Electronics",
        0x3B => "Wersi",
        0x3C => "Avab Electronik Ab",
        0x3D => "Digigram",
        0x3E => "Waldorf Electronics",
        0x3F => "Quasimidi",
        // Japanese Group (40-5F)
        0x40 => "Kawai",
        0x41 => "Roland",
        0x42 => "Korg",
        0x43 => "Yamaha",
        0x44 => "Casio",
        0x46 => "Kamiya Studio",
        0x47 => "Akai",
        0x48 => "Japan Victor",
        0x49 => "Mesosha",
        0x4A => "Hoshino Gakki",
        0x4B => "Fujitsu Elect",
        0x4C => "Sony",
        0x4D => "Nisshin Onpa",
        0x4E => "TEAC",
        0x50 => "Matsushita Electric",
        0x51 => "Fostex",
        0x52 => "Zoom",
        0x53 => "Midori Electronics",
        0x54 => "Matsushita Communication Industrial",
        0x55 => "Suzuki Musical Inst. Mfg.",
        0x56 => "Fuji Onkyo Co., Ltd.",
        0x57 => "Onkyo Research Institute Co., Ltd.",
        0x5A => "Internet Co., Ltd.",
        0x5C => "Seekers Co., Ltd.",
        0x5F => "SD Card Association",
        // Special Group (7D-7F)
        0x7D => "Non Commercial",
        0x7E => "Non-Real Time",
        0x7F => "Realtime",
        _ => UNDEFINED,
    }
}

/// 3-byte system exclusive ID names, looked up by the second and third
/// bytes (the first is always 0x00). The second byte selects the regional
/// sub-table exactly as registered; a miss at either level is undefined.
pub fn manufacturer_name_long(byte1: u8, byte2: u8) -> &'static str {
    match byte1 {
        0x00 => american_long_id(byte2),
        0x20 => european_long_id(byte2),
        0x40 => japanese_long_id_40(byte2),
        0x48 => japanese_long_id_48(byte2),
        _ => UNDEFINED,
    }
}

// American Group (3-byte IDs 00 00 xx)
fn american_long_id(byte2: u8) -> &'static str {
    match byte2 {
        0x00 => "Not to be used!",
        0x01 => "Time Warner Interactive",
        0x07 => "Digital Music Corp.",
        0x08 => "IOTA Systems",
        0x09 => "New England Digital",
        0x0A => "Artisyn",
        0x0B => "IVL Technologies",
        0x0C => "Southern Music Systems",
        0x0D => "Lake Butler Sound Company",
        0x0E => "Alesis",
        0x10 => "DOD Electronics",
        0x11 => "Studer-Editech",
        0x14 => "Perfect Fretworks",
        0x15 => "KAT",
        0x16 => "Opcode",
        0x17 => "Rane Corp.",
        0x18 => "Anadi Inc.",
        0x19 => "KMX",
        0x1A => "Allen & Heath Brenell",
        0x1B => "Peavey Electronics",
        0x1C => "360 Systems",
        0x1D => "Spectrum Design and Development",
        0x1E => "Marquis Music",
        0x1F => "Zeta Systems",
        0x20 => "Axxes",
        0x21 => "Orban",
        0x24 => "KTI",
        0x25 => "Breakaway Technologies",
        0x26 => "CAE",
        0x29 => "Rocktron Corp.",
        0x2A => "PianoDisc",
        0x2B => "Cannon Research Group",
        0x2D => "Regors Instrument Corp.",
        0x2E => "Blue Sky Logic",
        0x2F => "Encore Electronics",
        0x30 => "Uptown",
        0x31 => "Voce",
        0x32 => "CTI Audio, Inc. (Music. Intel Dev.)",
        0x33 => "S&S Research",
        0x34 => "Broderbund Software, Inc.",
        0x35 => "Allen Organ Co.",
        0x37 => "Music Quest",
        0x38 => "APHEX",
        0x39 => "Gallien Krueger",
        0x3A => "IBM",
        0x3C => "Hotz Instruments Technologies",
        0x3D => "ETA Lighting",
        0x3E => "NSI Corporation",
        0x3F => "Ad Lib, Inc.",
        0x40 => "Richmond Sound Design",
        0x41 => "Microsoft",
        0x42 => "The Software Toolworks",
        0x43 => "Niche/RJMG",
        0x44 => "Intone",
        0x47 => "GT Electronics/Groove Tubes",
        0x49 => "Timeline Vista",
        0x4A => "Mesa Boogie",
        0x4C => "Sequoia Development",
        0x4D => "Studio Electrionics",
        0x4E => "Euphonix",
        0x4F => "InterMIDI",
        0x50 => "MIDI Solutions",
        0x51 => "3DO Company",
        0x52 => "Lightwave Research",
        0x53 => "Micro-W",
        0x54 => "Spectral Synthesis",
        0x55 => "Lone Wolf",
        0x56 => "Studio Technologies",
        0x57 => "Peterson EMP",
        0x58 => "Atari",
        0x59 => "Marion Systems",
        0x5A => "Design Event",
        0x5B => "Winjammer Software",
        0x5C => "AT&T Bell Labs",
        0x5E => "Symetrix",
        0x5F => "MIDI the world",
        0x60 => "Desper Products",
        0x61 => "Micros 'N MIDI",
        0x62 => "Accordians Intl",
        0x63 => "EuPhonics",
        0x64 => "Musonix",
        0x65 => "Turtle Beach Systems",
        0x66 => "Mackie Designs",
        0x67 => "Compuserve",
        0x68 => "BES Technologies",
        0x69 => "QRS Music Rolls",
        0x6A => "P G Music",
        0x6B => "Sierra Semiconductor",
        0x6C => "EpiGraf Audio Visual",
        0x6D => "Electronics Deiversified",
        0x6E => "Tune 1000",
        0x6F => "Advanced Micro Devices",
        0x70 => "Mediamation",
        0x71 => "Sabine Music",
        0x72 => "Woog Labs",
        0x73 => "Micropolis",
        0x74 => "Ta Horng Musical Inst.",
        0x75 => "eTek (formerly Forte)",
        0x76 => "Electrovoice",
        0x77 => "Midisoft",
        0x78 => "Q-Sound Labs",
        0x79 => "Westrex",
        0x7A => "NVidia",
        0x7B => "ESS Technology",
        0x7C => "MediaTrix Peripherals",
        0x7D => "Brooktree",
        0x7E => "Otari",
        0x7F => "Key Electronics",
        0x80 => "Crystalake Multimedia",
        0x81 => "Crystal Semiconductor",
        0x82 => "Rockwell Semiconductor",
        _ => UNDEFINED,
    }
}

// European Group (3-byte IDs 00 20 xx)
fn european_long_id(byte2: u8) -> &'static str {
    match byte2 {
        0x00 => "Dream",
        0x01 => "Strand Lighting",
        0x02 => "Amek Systems",
        0x04 => "Böhm Electronic",
        0x06 => "Trident Audio",
        0x07 => "Real World Studio",
        0x09 => "Yes Technology",
        0x0A => "Automatica",
        0x0B => "Bontempi/Farfisa",
        0x0C => "F.B.T. Elettronica",
        0x0D => "MidiTemp",
        0x0E => "LA Audio (Larking Audio)",
        0x0F => "Zero 88 Lighting Limited",
        0x10 => "Micon Audio Electronics GmbH",
        0x11 => "Forefront Technology",
        0x13 => "Kenton Electronics",
        0x15 => "ADB",
        0x16 => "Marshall Products",
        0x17 => "DDA",
        0x18 => "BSS",
        0x19 => "MA Lighting Technology",
        0x1A => "Fatar",
        0x1B => "QSC Audio",
        0x1C => "Artisan Classic Organ",
        0x1D => "Orla Spa",
        0x1E => "Pinnacle Audio",
        0x1F => "TC Electronics",
        0x20 => "Doepfer Musikelektronik",
        0x21 => "Creative Technology Pte",
        0x22 => "Minami/Seiyddo",
        0x23 => "Goldstar",
        0x24 => "Midisoft s.a.s. di M. Cima",
        0x25 => "Samick",
        0x26 => "Penny and Giles",
        0x27 => "Acorn Computer",
        0x28 => "LSC Electronics",
        0x29 => "Novation EMS",
        0x2A => "Samkyung Mechatroncis",
        0x2B => "Medeli Electronics",
        0x2C => "Charlie Lab",
        0x2D => "Blue Chip Music Tech",
        0x2E => "BBE OH Corp",
        _ => UNDEFINED,
    }
}

// Japanese Group (3-byte IDs 00 40 xx)
fn japanese_long_id_40(byte2: u8) -> &'static str {
    match byte2 {
        0x00 => "Crimson Technology Inc.",
        0x01 => "Vodafone Co., Ltd.",
        0x03 => "D & M Holdings Co., Ltd.",
        0x04 => "XING Inc.",
        0x05 => "AlphaTheta Corporation",
        0x06 => "Pioneer Corporation",
        0x07 => "Slick Co., Ltd.",
        _ => UNDEFINED,
    }
}

// Japanese Group (3-byte IDs 00 48 xx)
fn japanese_long_id_48(byte2: u8) -> &'static str {
    match byte2 {
        0x00 => "sigboost Co., Ltd.",
        0x01 => "Lost Technology",
        0x02 => "Uchiwa Fujin",
        0x03 => "Tsukuba Science Co., Ltd.",
        0x04 => "Sonicware Co., Ltd.",
        0x05 => "Poppy only workshop",
        0x06 => "BLACK CORPORATION GK",
        0x07 => "G-TONE Giken Co., Ltd.",
        _ => UNDEFINED,
    }
}

/// Universal Non-Real-Time (0x7E) Sub-ID #1 names (table T-9).
pub fn non_real_time_sub_id_1_name(value: u8) -> &'static str {
    match value {
        0x00 => "Unused",
        0x01 => "Sample Dump Header",
        0x02 => "Sample Data Packet",
        0x03 => "Sample Dump Request",
        0x04 => "MIDI Time Code",
        0x05 => "Sample Dump Extensions",
        0x06 => "General Information",
        0x07 => "File Dump",
        0x08 => "MIDI Tuning Standard",
        0x09 => "General MIDI",
        0x7B => "End of File",
        0x7C => "Wait",
        0x7D => "Cancel",
        0x7E => "NAK",
        0x7F => "ACK",
        _ => UNDEFINED,
    }
}

/// Whether a Non-Real-Time Sub-ID #1 defines a Sub-ID #2 table.
pub fn non_real_time_has_sub_id_2(sub_id_1: u8) -> bool {
    matches!(sub_id_1, 0x04..=0x09)
}

/// Universal Non-Real-Time Sub-ID #2 names, keyed by Sub-ID #1.
pub fn non_real_time_sub_id_2_name(sub_id_1: u8, sub_id_2: u8) -> &'static str {
    match (sub_id_1, sub_id_2) {
        // MIDI Time Code (0x04)
        (0x04, 0x00) => "Special",
        (0x04, 0x01) => "Punch In Points",
        (0x04, 0x02) => "Punch Out Points",
        (0x04, 0x03) => "Delete Punch In Points",
        (0x04, 0x04) => "Delete Punch Out Points",
        (0x04, 0x05) => "Event Start Point",
        (0x04, 0x06) => "Event Stop Point",
        (0x04, 0x07) => "Event Start Points with additional info.",
        (0x04, 0x08) => "Event Stop Points with additional info.",
        (0x04, 0x09) => "Delete Event Start Point",
        (0x04, 0x0A) => "Delete Event Stop Point",
        (0x04, 0x0B) => "Cue Points",
        (0x04, 0x0C) => "Cue Points with additional info.",
        (0x04, 0x0D) => "Delete Cue Point",
        (0x04, 0x0E) => "Event Name in additional info.",
        // Sample Dump Extensions (0x05)
        (0x05, 0x01) => "Multiple Loop Points",
        (0x05, 0x02) => "Loop Points Request",
        // General Information (0x06)
        (0x06, 0x01) => "Identity Request",
        (0x06, 0x02) => "Identity Reply",
        // File Dump (0x07)
        (0x07, 0x01) => "Header",
        (0x07, 0x02) => "Data Packet",
        (0x07, 0x03) => "Request",
        // MIDI Tuning Standard (0x08)
        (0x08, 0x00) => "Bulk Dump Request",
        (0x08, 0x01) => "Bulk Dump Reply",
        // General MIDI (0x09)
        (0x09, 0x01) => "General MIDI System On",
        (0x09, 0x02) => "General MIDI System Off",
        _ => UNDEFINED,
    }
}

/// Universal Real-Time (0x7F) Sub-ID #1 names (table T-10).
pub fn real_time_sub_id_1_name(value: u8) -> &'static str {
    match value {
        0x00 => "Unused",
        0x01 => "MIDI Time Code",
        0x02 => "MIDI Show Control",
        0x03 => "Notation Information",
        0x04 => "Device Control",
        0x05 => "Real Time MTC Cueing",
        0x06 => "MIDI Machine Control Commands",
        0x07 => "MIDI Machine Control Responses",
        0x08 => "MIDI Tuning Standard",
        _ => UNDEFINED,
    }
}

/// Whether a Real-Time Sub-ID #1 defines a Sub-ID #2 table.
pub fn real_time_has_sub_id_2(sub_id_1: u8) -> bool {
    matches!(sub_id_1, 0x01..=0x08)
}

/// Universal Real-Time Sub-ID #2 names, keyed by Sub-ID #1.
pub fn real_time_sub_id_2_name(sub_id_1: u8, sub_id_2: u8) -> &'static str {
    match (sub_id_1, sub_id_2) {
        // MIDI Time Code (0x01)
        (0x01, 0x01) => "Full Message",
        (0x01, 0x02) => "User Bits",
        // MIDI Show Control (0x02), from the MSC specification
        (0x02, 0x00) => "(Reserved)",
        (0x02, 0x01) => "Lighting (General Category)",
        (0x02, 0x02) => "Moving Lights",
        (0x02, 0x03) => "Color Changers",
        (0x02, 0x04) => "Strobes",
        (0x02, 0x05) => "Lasers",
        (0x02, 0x06) => "Chasers",
        (0x02, 0x10) => "Sound (General Category)",
        (0x02, 0x11) => "Music",
        (0x02, 0x12) => "CD Players",
        (0x02, 0x13) => "EPROM Playback",
        (0x02, 0x14) => "Audio Tape Machines",
        (0x02, 0x15) => "Intecoms",
        (0x02, 0x16) => "Amplifiers",
        (0x02, 0x17) => "Audio Effects Devices",
        (0x02, 0x18) => "Equalizers",
        (0x02, 0x20) => "Machinery (General Category)",
        (0x02, 0x21) => "Rigging",
        (0x02, 0x22) => "Flys",
        (0x02, 0x23) => "Lifts",
        (0x02, 0x24) => "Turntables",
        (0x02, 0x25) => "Trusses",
        (0x02, 0x26) => "Robots",
        (0x02, 0x27) => "Animation",
        (0x02, 0x28) => "Floats",
        (0x02, 0x29) => "Breakaways",
        (0x02, 0x2A) => "Barges",
        (0x02, 0x30) => "Video (General Category)",
        (0x02, 0x31) => "Video Tape Machines",
        (0x02, 0x32) => "Video Cassette Machines",
        (0x02, 0x33) => "Video Disc Players",
        (0x02, 0x34) => "Video Switchers",
        (0x02, 0x35) => "Video Effects",
        (0x02, 0x36) => "Video Character Generators",
        (0x02, 0x37) => "Video Still Stores",
        (0x02, 0x38) => "Video Monitors",
        (0x02, 0x40) => "Projection (General Category)",
        (0x02, 0x41) => "Film Projectors",
        (0x02, 0x42) => "Slide Projectors",
        (0x02, 0x43) => "Video Projectors",
        (0x02, 0x44) => "Dissolvers",
        (0x02, 0x45) => "Shutter Controls",
        (0x02, 0x50) => "Process Control (General Category)",
        (0x02, 0x51) => "Hydraulic Oil",
        (0x02, 0x52) => "H2O",
        (0x02, 0x53) => "CO2",
        (0x02, 0x54) => "Compressed Air",
        (0x02, 0x55) => "Natural Gas",
        (0x02, 0x56) => "Fog",
        (0x02, 0x57) => "Smoke",
        (0x02, 0x58) => "Cracked Haze",
        (0x02, 0x60) => "Pyro (General Category)",
        (0x02, 0x61) => "Fireworks",
        (0x02, 0x62) => "Explosions",
        (0x02, 0x63) => "Flame",
        (0x02, 0x64) => "Smoke pots",
        (0x02, 0x7F) => "All-types",
        // Notation Information (0x03)
        (0x03, 0x01) => "Bar Number",
        (0x03, 0x02) => "Time Signature (Immediate)",
        (0x03, 0x03) => "Time Signature (Delayed)",
        // Device Control (0x04)
        (0x04, 0x01) => "Master Volume",
        (0x04, 0x02) => "Master Balance",
        // Real Time MTC Cueing (0x05)
        (0x05, 0x00) => "Special",
        (0x05, 0x01) => "Punch In Points",
        (0x05, 0x02) => "Punch Out Points",
        (0x05, 0x03) => "(Reserved)",
        (0x05, 0x04) => "(Reserved)",
        (0x05, 0x05) => "Event Start Point",
        (0x05, 0x06) => "Event Stop Point",
        (0x05, 0x07) => "Event Start Points with additional info.",
        (0x05, 0x08) => "Event Stop Points with additional info.",
        (0x05, 0x09) => "(Reserved)",
        (0x05, 0x0A) => "(Reserved)",
        (0x05, 0x0B) => "Cue Points",
        (0x05, 0x0C) => "Cue Points with additional info.",
        (0x05, 0x0D) => "(Reserved)",
        (0x05, 0x0E) => "Event Name in additional info.",
        // MIDI Machine Control Commands (0x06), from the MMC specification
        (0x06, 0x00) => "(Reserved)",
        (0x06, 0x01) => "STOP",
        (0x06, 0x02) => "PLAY",
        (0x06, 0x03) => "DEFERRED PLAY",
        (0x06, 0x04) => "FAST FORWARD",
        (0x06, 0x05) => "REWIND",
        (0x06, 0x06) => "RECORD STROBE",
        (0x06, 0x07) => "RECORD EXIT",
        (0x06, 0x08) => "RECORD PAUSE",
        (0x06, 0x09) => "PAUSE",
        (0x06, 0x0A) => "EJECT",
        (0x06, 0x0B) => "CHASE",
        (0x06, 0x0C) => "COMMAND ERROR RESET",
        (0x06, 0x0D) => "MMC RESET",
        (0x06, 0x40) => "WRITE",
        (0x06, 0x41) => "MASKED WRITE",
        (0x06, 0x42) => "READ",
        (0x06, 0x43) => "UPDATE",
        (0x06, 0x44) => "LOCATE",
        (0x06, 0x45) => "VARIABLE PLAY",
        (0x06, 0x46) => "SEARCH",
        (0x06, 0x47) => "SHUTTLE",
        (0x06, 0x48) => "STEP",
        (0x06, 0x49) => "ASSIGN SYSTEM MASTER",
        (0x06, 0x4A) => "GENERATOR COMMAND",
        (0x06, 0x4B) => "MIDI TIME CODE COMMAND",
        (0x06, 0x4C) => "MOVE",
        (0x06, 0x4D) => "ADD",
        (0x06, 0x4E) => "SUBTRACT",
        (0x06, 0x4F) => "DROP FRAME ADJUST",
        (0x06, 0x50) => "PROCEDURE",
        (0x06, 0x51) => "EVENT",
        (0x06, 0x52) => "GROUP",
        (0x06, 0x53) => "COMMAND SEGMENT",
        (0x06, 0x54) => "DEFERRED VARIABLE PLAY",
        (0x06, 0x55) => "RECORD STROBE VARIABLE",
        (0x06, 0x7C) => "WAIT",
        (0x06, 0x7F) => "RESUME",
        // MIDI Machine Control Responses (0x07), from the MMC specification
        (0x07, 0x00) => "(Reserved)",
        (0x07, 0x01) => "SELECTED TIME CODE",
        (0x07, 0x02) => "SELECTED MASTER CODE",
        (0x07, 0x03) => "REQUESTED OFFSET",
        (0x07, 0x04) => "ACTUAL OFFSET",
        (0x07, 0x05) => "LOCK DEVIATION",
        (0x07, 0x06) => "GENERATOR TIME CODE",
        (0x07, 0x07) => "MIDI TIME CODE INPUT",
        (0x07, 0x08) => "GP0 / LOCATE POINT",
        (0x07, 0x09) => "GP1",
        (0x07, 0x0A) => "GP2",
        (0x07, 0x0B) => "GP3",
        (0x07, 0x0C) => "GP4",
        (0x07, 0x0D) => "GP5",
        (0x07, 0x0E) => "GP6",
        (0x07, 0x0F) => "GP7",
        (0x07, 0x20) => "(Reserved)",
        (0x07, 0x21) => "Short SELECTED TIME CODE",
        (0x07, 0x22) => "Short SELECTED MASTER CODE",
        (0x07, 0x23) => "Short REQUESTED OFFSET",
        (0x07, 0x24) => "Short ACTUAL OFFSET",
        (0x07, 0x25) => "Short LOCK DEVIATION",
        (0x07, 0x26) => "Short GENERATOR TIME CODE",
        (0x07, 0x27) => "Short MIDI TIME CODE INPUT",
        (0x07, 0x28) => "Short GP0 / LOCATE POINT",
        (0x07, 0x29) => "Short GP1",
        (0x07, 0x2A) => "Short GP2",
        (0x07, 0x2B) => "Short GP3",
        (0x07, 0x2C) => "Short GP4",
        (0x07, 0x2D) => "Short GP5",
        (0x07, 0x2E) => "Short GP6",
        (0x07, 0x2F) => "Short GP7",
        (0x07, 0x40) => "SIGNATURE",
        (0x07, 0x41) => "UPDATE RATE",
        (0x07, 0x42) => "RESPONSE ERROR",
        (0x07, 0x43) => "COMMAND ERROR",
        (0x07, 0x44) => "COMMAND ERROR LEVEL",
        (0x07, 0x45) => "TIME STANDARD",
        (0x07, 0x46) => "SELECTED TIME CODE SOURCE",
        (0x07, 0x47) => "SELECTED TIME CODE USERBITS",
        (0x07, 0x48) => "MOTION CONTROL TALLY",
        (0x07, 0x49) => "VELOCITY TALLY",
        (0x07, 0x4A) => "STOP MODE",
        (0x07, 0x4B) => "FAST MODE",
        (0x07, 0x4C) => "RECORD MODE",
        (0x07, 0x4D) => "RECORD STATUS",
        (0x07, 0x4E) => "TRACK RECORD STATUS",
        (0x07, 0x4F) => "TRACK RECORD READY",
        (0x07, 0x50) => "GLOBAL MONITOR",
        (0x07, 0x51) => "RECORD MONITOR",
        (0x07, 0x52) => "TRACK SYNC MONITOR",
        (0x07, 0x53) => "TRACK INPUT MONITOR",
        (0x07, 0x54) => "STEP LENGTH",
        (0x07, 0x55) => "PLAY SPEED REFERENCE",
        (0x07, 0x56) => "FIXED SPEED",
        (0x07, 0x57) => "LIFTER DEFEAT",
        (0x07, 0x58) => "CONTROL DISABLE",
        (0x07, 0x59) => "RESOLVED PLAY MODE",
        (0x07, 0x5A) => "CHASE MODE",
        (0x07, 0x5B) => "GENERATOR COMMAND TALLY",
        (0x07, 0x5C) => "GENERATOR SET UP",
        (0x07, 0x5D) => "GENERATOR USERBITS",
        (0x07, 0x5E) => "MIDI TIME CODE COMMAND TALLY",
        (0x07, 0x5F) => "MID TIME CODE SET UP",
        (0x07, 0x60) => "PROCEDURE RESPONSE",
        (0x07, 0x61) => "EVENT RESPONSE",
        (0x07, 0x62) => "TRACK MUTE",
        (0x07, 0x63) => "VITC INSERT ENABLE",
        (0x07, 0x64) => "RESPONSE SEGMENT",
        (0x07, 0x65) => "FAILURE",
        (0x07, 0x7C) => "WAIT",
        (0x07, 0x7F) => "RESUME",
        // MIDI Tuning Standard (0x08)
        (0x08, 0x02) => "Note Change",
        _ => UNDEFINED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_names() {
        assert_eq!(controller_name(0), "Bank Select");
        assert_eq!(controller_name(7), "Channel Volume");
        assert_eq!(controller_name(64), "Damper pedal (sustain)");
        assert_eq!(controller_name(38), "Data entry LSB");
        assert_eq!(controller_name(3), UNDEFINED);
        assert_eq!(controller_name(120), "Reserved for Channel Mode Messages");
    }

    #[test]
    fn test_channel_mode_names() {
        assert_eq!(channel_mode_name(120), Some("All Sound Off"));
        assert_eq!(channel_mode_name(123), Some("All Notes Off"));
        assert_eq!(channel_mode_name(119), None);
    }

    #[test]
    fn test_registered_parameter_names() {
        assert_eq!(registered_parameter_name(0x00), "Pitch Bend Sensitivity");
        assert_eq!(registered_parameter_name(0x04), "Tuning Bank Select");
        assert_eq!(registered_parameter_name(0x05), UNDEFINED);
    }

    #[test]
    fn test_short_manufacturer_names() {
        assert_eq!(manufacturer_name_short(0x41), "Roland");
        assert_eq!(manufacturer_name_short(0x43), "Yamaha");
        assert_eq!(manufacturer_name_short(0x7D), "Non Commercial");
        // Gaps in the registry resolve to undefined
        assert_eq!(manufacturer_name_short(0x1E), UNDEFINED);
        assert_eq!(manufacturer_name_short(0x60), UNDEFINED);
    }

    #[test]
    fn test_long_manufacturer_names() {
        assert_eq!(manufacturer_name_long(0x00, 0x0E), "Alesis");
        assert_eq!(manufacturer_name_long(0x20, 0x29), "Novation EMS");
        assert_eq!(manufacturer_name_long(0x40, 0x06), "Pioneer Corporation");
        assert_eq!(manufacturer_name_long(0x48, 0x04), "Sonicware Co., Ltd.");
        // Misses at either level are undefined
        assert_eq!(manufacturer_name_long(0x00, 0x02), UNDEFINED);
        assert_eq!(manufacturer_name_long(0x60, 0x00), UNDEFINED);
    }

    #[test]
    fn test_non_real_time_sub_ids() {
        assert_eq!(non_real_time_sub_id_1_name(0x06), "General Information");
        assert_eq!(non_real_time_sub_id_1_name(0x7F), "ACK");
        assert_eq!(non_real_time_sub_id_1_name(0x20), UNDEFINED);

        assert!(non_real_time_has_sub_id_2(0x06));
        assert!(!non_real_time_has_sub_id_2(0x01));
        assert!(!non_real_time_has_sub_id_2(0x7F));

        assert_eq!(non_real_time_sub_id_2_name(0x06, 0x01), "Identity Request");
        assert_eq!(non_real_time_sub_id_2_name(0x06, 0x02), "Identity Reply");
        assert_eq!(non_real_time_sub_id_2_name(0x06, 0x7F), UNDEFINED);
    }

    #[test]
    fn test_real_time_sub_ids() {
        assert_eq!(real_time_sub_id_1_name(0x02), "MIDI Show Control");
        assert_eq!(real_time_sub_id_1_name(0x30), UNDEFINED);

        assert!(real_time_has_sub_id_2(0x01));
        assert!(real_time_has_sub_id_2(0x08));
        assert!(!real_time_has_sub_id_2(0x00));
        assert!(!real_time_has_sub_id_2(0x09));

        assert_eq!(real_time_sub_id_2_name(0x06, 0x06), "RECORD STROBE");
        assert_eq!(real_time_sub_id_2_name(0x02, 0x61), "Fireworks");
        assert_eq!(real_time_sub_id_2_name(0x08, 0x02), "Note Change");
        assert_eq!(real_time_sub_id_2_name(0x08, 0x03), UNDEFINED);
    }
}
