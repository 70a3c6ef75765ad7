// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media query synonym lists.
//!
//! The Media Queries Level 4 `hover` feature shipped under several vendor
//! prefixes before it was standardized, so each question is asked with every
//! known spelling. The lists are ordered: unprefixed first, then `-moz-`,
//! `-ms-` and `-webkit-`. A list matches when any one of its entries matches,
//! which is the same answer a host gives for the comma-joined query list.

use crate::host::HostCapabilities;

/// Queries reporting that the primary pointer cannot hover, or can only hover on demand.
pub const HOVER_NONE_OR_ON_DEMAND: &[&str] = &[
    "(hover: none)",
    "(-moz-hover: none)",
    "(-ms-hover: none)",
    "(-webkit-hover: none)",
    "(hover: on-demand)",
    "(-moz-hover: on-demand)",
    "(-ms-hover: on-demand)",
    "(-webkit-hover: on-demand)",
];

/// Queries reporting that the primary pointer hovers.
pub const HOVER_HOVER: &[&str] = &[
    "(hover: hover)",
    "(-moz-hover: hover)",
    "(-ms-hover: hover)",
    "(-webkit-hover: hover)",
];

/// Legacy `touch-enabled` media feature, last seen as `-moz-touch-enabled`.
pub const TOUCH_ENABLED: &[&str] = &[
    "(touch-enabled)",
    "(-moz-touch-enabled)",
    "(-ms-touch-enabled)",
    "(-webkit-touch-enabled)",
];

/// Returns `true` if the host matches any query in `queries`.
///
/// Queries are evaluated in order and evaluation stops at the first match.
/// An empty list never matches.
pub fn matches_any<H: HostCapabilities + ?Sized>(host: &H, queries: &[&str]) -> bool {
    queries.iter().any(|query| host.matches_media(query))
}
