// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};

use midiscope::capture::{CaptureChannel, CapturedEvent};
use midiscope::config::MonitorConfig;
use midiscope::midi::{
    constants, list_inputs, list_outputs, note_name, Destination, InputPort, MessageKind,
    MidiBackend, MidiMessage, MidirBackend, NoteNameStyle, OutputPort, RawMidiMessage,
    ReceiveMode, SysExPayload,
};
use midiscope::timing::{Clock, Timestamp};

const CONFIG_FILE: &str = "midiscope.yaml";

fn print_usage() {
    println!("midiscope - MIDI monitor and decoder");
    println!();
    println!("Usage: midiscope [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --list-ports              List available MIDI inputs and outputs");
    println!("  --monitor <N|NAME>        Monitor MIDI input N (index) or by name");
    println!("      --poll                Use polling instead of callback receive");
    println!("  --decode-sysex <HEX>..    Decode a system exclusive message from hex bytes");
    println!("  --send-note <N|NAME>      Send a test note to MIDI output N or by name");
    println!("  --help                    Show this help message");
}

fn list_ports(backend: &dyn MidiBackend) {
    let inputs = list_inputs(backend);
    if inputs.is_empty() {
        println!("No MIDI inputs found.");
    } else {
        println!("Available MIDI inputs:");
        for (index, port) in inputs.iter().enumerate() {
            match port.num() {
                Some(num) => println!("  {}: {} [{}]", index, port.label(), num),
                None => println!("  {}: {}", index, port.label()),
            }
        }
    }

    let outputs = list_outputs(backend);
    if outputs.is_empty() {
        println!("No MIDI outputs found.");
    } else {
        println!("Available MIDI outputs:");
        for (index, port) in outputs.iter().enumerate() {
            match port.num() {
                Some(num) => println!("  {}: {} [{}]", index, port.label(), num),
                None => println!("  {}: {}", index, port.label()),
            }
        }
    }
}

/// Resolve a port argument against the driver's name list: an index, an
/// exact name, or a case-insensitive partial match.
fn resolve_port(names: &[String], target: &str) -> Result<String> {
    if let Ok(index) = target.parse::<usize>() {
        return names
            .get(index)
            .cloned()
            .ok_or_else(|| anyhow!("port index {} out of range ({} available)", index, names.len()));
    }
    if let Some(name) = names.iter().find(|name| name.as_str() == target) {
        return Ok(name.clone());
    }
    names
        .iter()
        .find(|name| name.to_lowercase().contains(&target.to_lowercase()))
        .cloned()
        .ok_or_else(|| anyhow!("no MIDI port matching '{}' found", target))
}

fn format_timestamp(timestamp: Timestamp) -> String {
    format!(
        "{:>11.6} +{:.6}",
        timestamp.value.as_secs_f64(),
        timestamp.delta.as_secs_f64()
    )
}

fn describe_sysex(message: &RawMidiMessage) -> String {
    match message.sysex() {
        Some(Ok(decoded)) => {
            let mut text = format!(
                "System Exclusive id {} device {:02X}",
                decoded.identifier, decoded.device_id
            );
            match &decoded.payload {
                SysExPayload::Plain { data } => {
                    if let Some(region) = decoded.identifier.region() {
                        text.push_str(&format!(" [{}]", region.label()));
                    }
                    text.push_str(&format!(" data {}", hex(data)));
                }
                SysExPayload::UniversalNonRealTime {
                    sub_id1,
                    sub_id2,
                    data,
                }
                | SysExPayload::UniversalRealTime {
                    sub_id1,
                    sub_id2,
                    data,
                } => {
                    text.push_str(&format!(" {}", sub_id1.name));
                    if let Some(sub_id2) = sub_id2 {
                        text.push_str(&format!(" / {}", sub_id2.name));
                    }
                    if !data.is_empty() {
                        text.push_str(&format!(" data {}", hex(data)));
                    }
                }
            }
            text
        }
        Some(Err(err)) => format!("could not decode ({}): {}", message.to_hex(), err),
        None => format!("could not decode ({})", message.to_hex()),
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_message(message: &RawMidiMessage, style: NoteNameStyle) -> String {
    let decoded = match message.decode() {
        Ok(decoded) => decoded,
        Err(_) => return format!("could not decode ({})", message.to_hex()),
    };
    match decoded {
        MidiMessage::NoteOff {
            channel,
            note,
            velocity,
        } => format!(
            "Note Off ch {} {} vel {}",
            channel + 1,
            note_name(note, style),
            velocity
        ),
        MidiMessage::NoteOn {
            channel,
            note,
            velocity,
        } => format!(
            "Note On ch {} {} vel {}",
            channel + 1,
            note_name(note, style),
            velocity
        ),
        MidiMessage::PolyPressure {
            channel,
            note,
            pressure,
        } => format!(
            "Poly Pressure ch {} {} pressure {}",
            channel + 1,
            note_name(note, style),
            pressure
        ),
        MidiMessage::ControlChange {
            channel,
            controller,
            value,
        } => format!(
            "Control Change ch {} cc {} ({}) value {}",
            channel + 1,
            controller,
            constants::channel_mode_name(controller)
                .unwrap_or_else(|| constants::controller_name(controller)),
            value
        ),
        MidiMessage::ProgramChange { channel, program } => {
            format!("Program Change ch {} program {}", channel + 1, program)
        }
        MidiMessage::ChannelPressure { channel, pressure } => {
            format!("Channel Pressure ch {} pressure {}", channel + 1, pressure)
        }
        MidiMessage::PitchBend { channel, value } => {
            format!("Pitch Bend ch {} value {}", channel + 1, value)
        }
        MidiMessage::TimeCodeQuarterFrame { frame_type, value } => {
            format!("MTC Quarter Frame type {} value {}", frame_type, value)
        }
        MidiMessage::SongPosition { beats } => format!("Song Position {} beats", beats),
        MidiMessage::SongSelect { song } => format!("Song Select {}", song),
        MidiMessage::SystemExclusive { .. } => describe_sysex(message),
        other => other.kind().name().to_string(),
    }
}

fn monitor(target: &str, mode: ReceiveMode, config: &MonitorConfig) -> Result<()> {
    let backend = MidirBackend::new();
    let name = resolve_port(&backend.input_names(), target)?;

    let channel = CaptureChannel::new();
    let clock = Clock::new();
    let destination = Destination::Module("monitor".to_string());

    let mut port = InputPort::new(&name);
    port.open(&backend, &channel, &clock, destination.clone())
        .with_context(|| format!("Failed to open MIDI input '{}'", name))?;
    if mode == ReceiveMode::Polling {
        port.set_mode(ReceiveMode::Polling)?;
    }

    println!(
        "Monitoring '{}' in {} mode for 60 seconds...",
        port.label(),
        match mode {
            ReceiveMode::Callback => "callback",
            ReceiveMode::Polling => "polling",
        }
    );
    println!();

    let started = Instant::now();
    let run_duration = Duration::from_secs(60);
    let frame = Duration::from_millis(config.frame_interval_ms.max(1));

    while started.elapsed() < run_duration {
        if mode == ReceiveMode::Polling {
            let source = port.label().to_string();
            for message in port.poll()? {
                channel.push(CapturedEvent {
                    timestamp: clock.now(),
                    source: source.clone(),
                    destination: destination.clone(),
                    message,
                });
            }
        }

        // A decode failure on one event never stops the drain.
        for event in channel.drain() {
            println!(
                "[{}] {} -> {}: {}",
                format_timestamp(event.timestamp),
                event.source,
                event.destination,
                describe_message(&event.message, config.note_names)
            );
        }

        thread::sleep(frame);
    }

    port.close();
    println!();
    println!("Monitor complete!");
    Ok(())
}

fn decode_sysex_args(args: &[String]) -> Result<()> {
    let mut bytes = Vec::new();
    for arg in args {
        for token in arg.split_whitespace() {
            let byte = u8::from_str_radix(token.trim_start_matches("0x"), 16)
                .with_context(|| format!("'{}' is not a hex byte", token))?;
            bytes.push(byte);
        }
    }
    if bytes.is_empty() {
        return Err(anyhow!("no bytes to decode"));
    }

    // Accept the full message or just the payload between the markers.
    if bytes[0] != 0xF0 {
        bytes.insert(0, 0xF0);
    }
    let message = RawMidiMessage::new(bytes);
    println!("{}", describe_sysex(&message));
    Ok(())
}

fn send_note(target: &str) -> Result<()> {
    let backend = MidirBackend::new();
    let name = resolve_port(&backend.output_names(), target)?;

    let mut port = OutputPort::new(&name);
    port.open(&backend)
        .with_context(|| format!("Failed to open MIDI output '{}'", name))?;

    let channel = 0;
    let note = 60; // Middle C
    let velocity = 100;

    println!("Sending test note (Middle C, velocity {})...", velocity);
    port.send(&[MessageKind::NoteOn.status_byte(channel), note, velocity])?;
    thread::sleep(Duration::from_millis(500));
    port.send(&[MessageKind::NoteOff.status_byte(channel), note, 0])?;
    port.close();

    println!("Test complete!");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = MonitorConfig::load(CONFIG_FILE).unwrap_or_default();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "--list-ports" => {
            let backend = MidirBackend::new();
            list_ports(&backend);
        }
        "--monitor" => {
            let target = args
                .get(2)
                .filter(|arg| !arg.starts_with("--"))
                .cloned()
                .or_else(|| config.input.clone())
                .ok_or_else(|| anyhow!("--monitor requires a port (or an 'input' config entry)"))?;
            let mode = if args.iter().any(|arg| arg == "--poll") {
                ReceiveMode::Polling
            } else {
                config.mode
            };
            monitor(&target, mode, &config)?;
        }
        "--decode-sysex" => {
            if args.len() < 3 {
                return Err(anyhow!("--decode-sysex requires hex bytes"));
            }
            decode_sysex_args(&args[2..])?;
        }
        "--send-note" => {
            let target = args
                .get(2)
                .cloned()
                .or_else(|| config.output.clone())
                .ok_or_else(|| anyhow!("--send-note requires a port (or an 'output' config entry)"))?;
            send_note(&target)?;
        }
        "--help" => print_usage(),
        unknown => {
            println!("Unknown option: {}", unknown);
            println!();
            print_usage();
        }
    }

    Ok(())
}
