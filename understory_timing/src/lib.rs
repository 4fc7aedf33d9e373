// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: frame-driven animation and timer primitives.
//!
//! This crate provides small, host-agnostic building blocks for time-based UI
//! behavior. Nothing here owns a thread, a timer wheel, or a frame clock:
//! callers pass the current time (in milliseconds, from whatever clock they
//! trust) into every query, which keeps the primitives deterministic and easy
//! to drive from tests.
//!
//! - [`Easing`]: interpolation curves mapping linear progress to eased progress.
//! - [`Tween`]: a fixed-duration interpolation of an integer offset, sampled
//!   once per frame.
//! - [`Debounce`]: a cancellable, re-armable delayed trigger.
//!
//! ## Tween example
//!
//! ```rust
//! use understory_timing::{Easing, Tween};
//!
//! // Animate an offset of 1_000 over 150ms, starting at t = 10_000.
//! let tween = Tween::new(10_000, 150, 1_000, Easing::AccelerateDecelerate);
//!
//! let first = tween.sample(10_000);
//! assert_eq!(first.value, 0);
//! assert!(!first.finished);
//!
//! let last = tween.sample(10_150);
//! assert_eq!(last.value, 1_000);
//! assert!(last.finished);
//! ```
//!
//! ## Debounce example
//!
//! ```rust
//! use understory_timing::Debounce;
//!
//! let mut settle = Debounce::new();
//! settle.arm(0, 500);
//! // Re-arming pushes the deadline out.
//! settle.arm(300, 500);
//! assert!(!settle.poll(500));
//! assert!(settle.poll(800));
//! // Fires only once per arming.
//! assert!(!settle.poll(900));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod debounce;
mod easing;
mod tween;

pub use debounce::Debounce;
pub use easing::Easing;
pub use tween::{Tween, TweenSample};
