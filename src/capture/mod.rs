// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Thread-safe hand-off between MIDI producers and the consumer.
//!
//! A [`CaptureChannel`] is the single point where driver callback threads
//! (callback mode) or the consumer's own poll loop (polling mode) hand
//! captured events to the drain loop. One mutex guards the whole capture
//! subsystem: the FIFO event queue and every input's receiver slot (its
//! receive mode and polling buffer). The lock is held only for the
//! enqueue or slot swap, never across driver I/O.
//!
//! The queue is unbounded; `push` never blocks and never drops. If the
//! consumer stalls, memory growth is the accepted failure mode.
//!
//! Receiver slots make teardown safe: closing a port unregisters its slot
//! under the lock *before* the driver handle is released, so a callback
//! still in flight finds no slot and its delivery is discarded instead of
//! landing in a dead port's name.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::midi::message::RawMidiMessage;
use crate::midi::ports::{Destination, ReceiveMode};
use crate::timing::{Clock, Timestamp};

/// One captured MIDI event: when it arrived, where from, where it was
/// routed, and the raw message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    pub timestamp: Timestamp,
    pub source: String,
    pub destination: Destination,
    pub message: RawMidiMessage,
}

/// Identity of an input's receiver slot within a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiverId(u64);

#[derive(Default)]
struct CaptureState {
    queue: VecDeque<CapturedEvent>,
    receivers: HashMap<ReceiverId, Receiver>,
    next_receiver: u64,
}

struct Receiver {
    source: String,
    destination: Destination,
    mode: ReceiveMode,
    pending: VecDeque<RawMidiMessage>,
}

/// Shared capture queue. Clones refer to the same queue and mutex.
#[derive(Clone, Default)]
pub struct CaptureChannel {
    shared: Arc<Mutex<CaptureState>>,
}

impl CaptureChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue one event. Called by the poll loop, and internally by
    /// callback-mode delivery.
    pub fn push(&self, event: CapturedEvent) {
        self.lock().queue.push_back(event);
    }

    /// Remove and return all queued events in arrival order.
    ///
    /// Safe to call every frame; returns an empty vec when idle.
    pub fn drain(&self) -> Vec<CapturedEvent> {
        self.lock().queue.drain(..).collect()
    }

    /// Number of events currently queued.
    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().queue.is_empty()
    }

    /// Register a receiver slot for an opened input. The slot starts in
    /// callback mode, the default after open.
    pub(crate) fn register(&self, source: String, destination: Destination) -> ReceiverId {
        let mut state = self.lock();
        state.next_receiver += 1;
        let id = ReceiverId(state.next_receiver);
        state.receivers.insert(
            id,
            Receiver {
                source,
                destination,
                mode: ReceiveMode::Callback,
                pending: VecDeque::new(),
            },
        );
        id
    }

    /// Remove a receiver slot. Must happen before the driver handle is
    /// released; deliveries for an unregistered slot are discarded.
    pub(crate) fn unregister(&self, id: ReceiverId) {
        self.lock().receivers.remove(&id);
    }

    /// Swap a slot's receive mode. Switching to callback mode flushes any
    /// polling-buffered messages into the main queue so none are lost.
    pub(crate) fn set_mode(&self, id: ReceiverId, mode: ReceiveMode, clock: &Clock) {
        let mut guard = self.lock();
        let state = &mut *guard;
        if let Some(receiver) = state.receivers.get_mut(&id) {
            if mode == ReceiveMode::Callback && !receiver.pending.is_empty() {
                let now = clock.now();
                for message in receiver.pending.drain(..) {
                    state.queue.push_back(CapturedEvent {
                        timestamp: now,
                        source: receiver.source.clone(),
                        destination: receiver.destination.clone(),
                        message,
                    });
                }
            }
            receiver.mode = mode;
        }
    }

    /// The slot's current receive mode, if it is registered.
    pub(crate) fn mode(&self, id: ReceiverId) -> Option<ReceiveMode> {
        self.lock().receivers.get(&id).map(|r| r.mode)
    }

    /// Deliver raw bytes from a driver forwarder. Routes to the main
    /// queue (callback mode) or the slot's polling buffer; deliveries for
    /// an unregistered slot are dropped.
    pub(crate) fn deliver(&self, id: ReceiverId, timestamp: Timestamp, message: RawMidiMessage) {
        let mut guard = self.lock();
        let state = &mut *guard;
        match state.receivers.get_mut(&id) {
            Some(receiver) => match receiver.mode {
                ReceiveMode::Callback => {
                    let event = CapturedEvent {
                        timestamp,
                        source: receiver.source.clone(),
                        destination: receiver.destination.clone(),
                        message,
                    };
                    state.queue.push_back(event);
                }
                ReceiveMode::Polling => receiver.pending.push_back(message),
            },
            None => {
                drop(guard);
                debug!("dropped delivery for unregistered receiver");
            }
        }
    }

    /// Drain a slot's polling buffer.
    pub(crate) fn take_pending(&self, id: ReceiverId) -> Vec<RawMidiMessage> {
        let mut state = self.lock();
        match state.receivers.get_mut(&id) {
            Some(receiver) => receiver.pending.drain(..).collect(),
            None => Vec::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CaptureState> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
