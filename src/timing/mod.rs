// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Capture timing.

pub mod clock;

pub use clock::{Clock, Timestamp};
