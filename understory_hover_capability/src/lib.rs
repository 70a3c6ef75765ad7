// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_hover_capability --heading-base-level=0

//! Understory Hover Capability: does the primary pointer really hover?
//!
//! Hover-dependent affordances (tooltips on hover, reveal-on-hover toolbars,
//! `:hover` styles) misbehave on touch screens, where hover is emulated and
//! tends to stick after a tap. The Media Queries Level 4 `(hover: hover)`
//! feature answers the question directly, but older and non-compliant user
//! agents either lack it or ship it under a vendor prefix.
//!
//! This crate answers the same question from whatever signals a host has:
//!
//! - The `hover` media feature, in every vendor-prefixed spelling.
//! - Pointer Events and the primary pointer's touch point count.
//! - The legacy `touch-enabled` media feature and `ontouchstart`.
//! - For hosts without `matchMedia` at all, a short list of user agent markers.
//!
//! The check order is documented in [`detect`](mod@detect). The answer is a
//! one-time snapshot; nothing listens for devices being attached or removed.
//!
//! ## Hosts
//!
//! Signals are read through the [`HostCapabilities`] trait:
//!
//! - On `wasm32`, `web::WebHost` reads a live `web_sys::Window`, and
//!   `web::supports_true_hover()` checks the running browser in one call.
//! - [`HostSnapshot`] is a plain description of a host, for tests and for
//!   embedders that already know their platform.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_hover_capability::{HostSnapshot, HoverCapabilityDetector, HoverReason};
//!
//! // A phone browser that implements `hover` under the WebKit prefix.
//! let phone = HostSnapshot::modern()
//!     .matching("(-webkit-hover: none)")
//!     .with_pointer_events(5);
//! let detector = HoverCapabilityDetector::new(&phone);
//! assert!(!detector.supports_true_hover());
//! assert_eq!(detector.detect(), HoverReason::HoverNone);
//!
//! // An old desktop browser without `matchMedia`.
//! let ie8 = HostSnapshot::legacy("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1)");
//! assert!(HoverCapabilityDetector::new(&ie8).supports_true_hover());
//! ```
//!
//! ## Logging
//!
//! Each detection emits a `tracing` debug event naming the deciding
//! [`HoverReason`]. The crate never installs a subscriber.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to `tracing`.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod detect;
pub mod host;
pub mod queries;
pub mod user_agent;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use detect::{HoverCapabilityDetector, HoverReason, detect, supports_true_hover};
pub use host::{HostCapabilities, HostSnapshot};
