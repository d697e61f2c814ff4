// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI port lifecycle management.
//!
//! A port is either Closed or Open; while open it owns exactly one driver
//! connection. Inputs deliver into a [`CaptureChannel`] in one of two
//! mutually exclusive receive modes: callback (the driver thread delivers
//! straight to the queue) or polling (messages buffer until [`InputPort::poll`]).
//!
//! Teardown ordering is the correctness-sensitive part: `close` clears the
//! channel's receiver slot under the capture lock *before* releasing the
//! driver handle, so a callback that is already in flight cannot deliver
//! into a half-torn-down port.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::MidiError;
use super::message::RawMidiMessage;
use super::{InputConnection, MidiBackend, OutputConnection};
use crate::capture::{CaptureChannel, ReceiverId};
use crate::timing::Clock;

/// Which way MIDI flows through a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

/// How an open input receives messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiveMode {
    /// The driver invokes a handler on its own thread per message.
    /// Recommended.
    Callback,
    /// The consumer pulls buffered messages each loop iteration.
    Polling,
}

impl Default for ReceiveMode {
    fn default() -> Self {
        ReceiveMode::Callback
    }
}

/// Where an input's captured messages are routed: a named output port, or
/// a logical module such as the probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Port(String),
    Module(String),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Port(name) | Destination::Module(name) => write!(f, "{}", name),
        }
    }
}

/// Driver-reported identity of a port plus derived display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortInfo {
    name: String,
    label: String,
    num: Option<String>,
    direction: PortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum System {
    Windows,
    Linux,
    Other,
}

fn current_system() -> System {
    if cfg!(target_os = "windows") {
        System::Windows
    } else if cfg!(target_os = "linux") {
        System::Linux
    } else {
        System::Other
    }
}

// Windows (MME) appends a numeric id to the port name; Linux (ALSA)
// prefixes the client name and appends an "x:y" id pair; Core MIDI names
// pass through untouched.
fn split_name(name: &str, system: System) -> (String, Option<String>) {
    match system {
        System::Windows => match name.rsplit_once(' ') {
            Some((label, num)) => (label.to_string(), Some(num.to_string())),
            None => (name.to_string(), None),
        },
        System::Linux => {
            let rest = name.split_once(':').map(|(_, rest)| rest).unwrap_or(name);
            match rest.rsplit_once(' ') {
                Some((label, num)) => (label.to_string(), Some(num.to_string())),
                None => (rest.to_string(), None),
            }
        }
        System::Other => (name.to_string(), None),
    }
}

impl PortInfo {
    pub fn new(name: &str, direction: PortDirection) -> Self {
        let (label, num) = split_name(name, current_system());
        Self {
            name: name.to_string(),
            label,
            num,
            direction,
        }
    }

    /// The exact name the driver reports, used to open the port.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable name with platform id noise stripped.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Platform-specific numeric id, where the platform exposes one.
    pub fn num(&self) -> Option<&str> {
        self.num.as_deref()
    }

    pub fn direction(&self) -> PortDirection {
        self.direction
    }
}

struct OpenInput {
    channel: CaptureChannel,
    clock: Clock,
    receiver: ReceiverId,
    destination: Destination,
    conn: Box<dyn InputConnection>,
}

/// An input endpoint: Closed ⇄ Open(Callback | Polling).
pub struct InputPort {
    info: PortInfo,
    open: Option<OpenInput>,
}

impl InputPort {
    /// A closed input port for the named endpoint.
    pub fn new(name: &str) -> Self {
        Self {
            info: PortInfo::new(name, PortDirection::Input),
            open: None,
        }
    }

    pub fn info(&self) -> &PortInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn label(&self) -> &str {
        self.info.label()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The destination recorded at open; `None` while closed.
    pub fn destination(&self) -> Option<&Destination> {
        self.open.as_ref().map(|open| &open.destination)
    }

    /// The current receive mode; `None` while closed.
    pub fn mode(&self) -> Option<ReceiveMode> {
        let open = self.open.as_ref()?;
        open.channel.mode(open.receiver)
    }

    /// Open the port and bind its captures to `destination`.
    ///
    /// Registers a receiver slot (callback mode, the default) and connects
    /// the driver with a forwarder that timestamps as early as possible
    /// and delivers under the capture lock.
    pub fn open(
        &mut self,
        backend: &dyn MidiBackend,
        channel: &CaptureChannel,
        clock: &Clock,
        destination: Destination,
    ) -> Result<(), MidiError> {
        if self.open.is_some() {
            debug!(port = %self.info.label(), "already open");
            return Ok(());
        }

        let receiver = channel.register(self.info.label().to_string(), destination.clone());
        let forward = {
            let channel = channel.clone();
            let clock = clock.clone();
            let source = self.info.label().to_string();
            Box::new(move |_driver_stamp: u64, bytes: &[u8]| {
                // Stamp before taking the capture lock.
                let timestamp = clock.now();
                debug!(source = %source, bytes = ?bytes, "callback data");
                channel.deliver(receiver, timestamp, RawMidiMessage::from(bytes));
            })
        };
        let conn = match backend.connect_input(self.info.name(), forward) {
            Ok(conn) => conn,
            Err(err) => {
                channel.unregister(receiver);
                return Err(err);
            }
        };

        info!(port = %self.info.label(), destination = %destination, "opened input port");
        self.open = Some(OpenInput {
            channel: channel.clone(),
            clock: clock.clone(),
            receiver,
            destination,
            conn,
        });
        Ok(())
    }

    /// Swap between callback and polling under the capture lock.
    pub fn set_mode(&mut self, mode: ReceiveMode) -> Result<(), MidiError> {
        let open = self.open.as_ref().ok_or(MidiError::PortClosed)?;
        open.channel.set_mode(open.receiver, mode, &open.clock);
        Ok(())
    }

    /// Drain driver-buffered messages (polling mode). Returns a finite
    /// sequence, empty when nothing is pending.
    pub fn poll(&self) -> Result<std::vec::IntoIter<RawMidiMessage>, MidiError> {
        let open = self.open.as_ref().ok_or(MidiError::PortClosed)?;
        Ok(open.channel.take_pending(open.receiver).into_iter())
    }

    /// Close the port. The receiver slot is cleared under the capture
    /// lock first, then the driver handle is released; the port can be
    /// opened again afterwards.
    pub fn close(&mut self) {
        if let Some(open) = self.open.take() {
            open.channel.unregister(open.receiver);
            open.conn.close();
            info!(port = %self.info.label(), "closed input port");
        }
    }
}

impl Drop for InputPort {
    fn drop(&mut self) {
        self.close();
    }
}

/// An output endpoint: Closed ⇄ Open.
pub struct OutputPort {
    info: PortInfo,
    conn: Option<Box<dyn OutputConnection>>,
}

impl OutputPort {
    /// A closed output port for the named endpoint.
    pub fn new(name: &str) -> Self {
        Self {
            info: PortInfo::new(name, PortDirection::Output),
            conn: None,
        }
    }

    pub fn info(&self) -> &PortInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn label(&self) -> &str {
        self.info.label()
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    pub fn open(&mut self, backend: &dyn MidiBackend) -> Result<(), MidiError> {
        if self.conn.is_some() {
            debug!(port = %self.info.label(), "already open");
            return Ok(());
        }
        self.conn = Some(backend.connect_output(self.info.name())?);
        info!(port = %self.info.label(), "opened output port");
        Ok(())
    }

    /// Forward a complete message's bytes to the driver.
    pub fn send(&mut self, message: &[u8]) -> Result<(), MidiError> {
        let conn = self.conn.as_mut().ok_or(MidiError::PortClosed)?;
        conn.send(message)
    }

    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            conn.close();
            info!(port = %self.info.label(), "closed output port");
        }
    }
}

impl Drop for OutputPort {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_split_name_windows() {
        let (label, num) = split_name("UM-ONE 1", System::Windows);
        assert_eq!(label, "UM-ONE");
        assert_eq!(num.as_deref(), Some("1"));
    }

    #[test]
    fn test_split_name_linux() {
        let (label, num) = split_name("UM-ONE:UM-ONE MIDI 1 20:0", System::Linux);
        assert_eq!(label, "UM-ONE MIDI 1");
        assert_eq!(num.as_deref(), Some("20:0"));
    }

    #[test]
    fn test_split_name_other_passthrough() {
        let (label, num) = split_name("IAC Driver Bus 1", System::Other);
        assert_eq!(label, "IAC Driver Bus 1");
        assert_eq!(num, None);
    }

    #[test]
    fn test_split_name_without_id() {
        let (label, num) = split_name("Through", System::Windows);
        assert_eq!(label, "Through");
        assert_eq!(num, None);
    }

    /// Backend double that accepts one fixed input and output name and
    /// records sent bytes.
    struct StubBackend {
        sent: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl StubBackend {
        fn new() -> Self {
            Self {
                sent: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    struct StubInput;

    impl InputConnection for StubInput {
        fn close(self: Box<Self>) {}
    }

    struct StubOutput {
        sent: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl OutputConnection for StubOutput {
        fn send(&mut self, message: &[u8]) -> Result<(), MidiError> {
            self.sent.lock().unwrap().push(message.to_vec());
            Ok(())
        }

        fn close(self: Box<Self>) {}
    }

    impl MidiBackend for StubBackend {
        fn input_names(&self) -> Vec<String> {
            vec!["Stub In".to_string()]
        }

        fn output_names(&self) -> Vec<String> {
            vec!["Stub Out".to_string()]
        }

        fn connect_input(
            &self,
            name: &str,
            _forward: super::super::RawForwarder,
        ) -> Result<Box<dyn InputConnection>, MidiError> {
            if name != "Stub In" {
                return Err(MidiError::PortUnavailable {
                    name: name.to_string(),
                    reason: "no such input port".to_string(),
                });
            }
            Ok(Box::new(StubInput))
        }

        fn connect_output(&self, name: &str) -> Result<Box<dyn OutputConnection>, MidiError> {
            if name != "Stub Out" {
                return Err(MidiError::PortUnavailable {
                    name: name.to_string(),
                    reason: "no such output port".to_string(),
                });
            }
            Ok(Box::new(StubOutput {
                sent: self.sent.clone(),
            }))
        }
    }

    #[test]
    fn test_input_lifecycle() {
        let backend = StubBackend::new();
        let channel = CaptureChannel::new();
        let clock = Clock::new();

        let mut port = InputPort::new("Stub In");
        assert!(!port.is_open());
        assert_eq!(port.destination(), None);
        assert_eq!(port.mode(), None);

        port.open(
            &backend,
            &channel,
            &clock,
            Destination::Module("probe".to_string()),
        )
        .unwrap();
        assert!(port.is_open());
        assert_eq!(
            port.destination(),
            Some(&Destination::Module("probe".to_string()))
        );
        // Callback is the default mode after open
        assert_eq!(port.mode(), Some(ReceiveMode::Callback));

        port.set_mode(ReceiveMode::Polling).unwrap();
        assert_eq!(port.mode(), Some(ReceiveMode::Polling));

        port.close();
        assert!(!port.is_open());
        assert_eq!(port.destination(), None);
        assert_eq!(port.mode(), None);

        // Re-openable after close
        port.open(
            &backend,
            &channel,
            &clock,
            Destination::Port("Stub Out".to_string()),
        )
        .unwrap();
        assert!(port.is_open());
    }

    #[test]
    fn test_open_unknown_port_fails() {
        let backend = StubBackend::new();
        let channel = CaptureChannel::new();
        let clock = Clock::new();

        let mut port = InputPort::new("Missing");
        let err = port
            .open(
                &backend,
                &channel,
                &clock,
                Destination::Module("probe".to_string()),
            )
            .unwrap_err();
        assert!(matches!(err, MidiError::PortUnavailable { .. }));
        assert!(!port.is_open());
    }

    #[test]
    fn test_closed_port_operations_fail() {
        let mut port = InputPort::new("Stub In");
        assert_eq!(port.set_mode(ReceiveMode::Polling), Err(MidiError::PortClosed));
        assert!(matches!(port.poll(), Err(MidiError::PortClosed)));
    }

    #[test]
    fn test_output_send_requires_open() {
        let backend = StubBackend::new();
        let mut port = OutputPort::new("Stub Out");

        assert_eq!(port.send(&[0x90, 60, 100]), Err(MidiError::PortClosed));

        port.open(&backend).unwrap();
        port.send(&[0x90, 60, 100]).unwrap();
        port.send(&[0x80, 60, 0]).unwrap();
        assert_eq!(
            *backend.sent.lock().unwrap(),
            vec![vec![0x90, 60, 100], vec![0x80, 60, 0]]
        );

        port.close();
        assert_eq!(port.send(&[0xF8]), Err(MidiError::PortClosed));
    }
}
