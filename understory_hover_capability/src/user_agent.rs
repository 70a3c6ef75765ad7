// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User agent markers for hosts without a media query evaluator.
//!
//! Hosts that lack `matchMedia` are either very old desktop browsers or one of
//! a short, known list of mobile browsers. The lists here are a blocklist:
//! anything not named is assumed to be a desktop-class host.
//!
//! Matching is a plain, case-sensitive substring search. The user agent is
//! never parsed.

/// Marker for Opera Mini, which never supports true hovering.
pub const OPERA_MINI: &str = "Opera Mini";

/// Markers for mobile shells known to lack true hover.
///
/// `XBLWP7` and `ZuneWP7` identify IE Mobile 9 in desktop view. `Windows CE`
/// is listed out of caution.
pub const MOBILE_WITHOUT_HOVER: &[&str] = &[
    "IEMobile",
    "Windows Phone",
    "XBLWP7",
    "ZuneWP7",
    "Windows CE",
];

/// Which marker family a user agent string belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAgentClass {
    /// Contains [`OPERA_MINI`].
    OperaMini,
    /// Contains one of [`MOBILE_WITHOUT_HOVER`].
    MobileWithoutHover,
    /// No marker found.
    Unlisted,
}

/// Classify a user agent string against the marker lists.
///
/// Opera Mini is checked first; a string carrying both kinds of marker is
/// reported as [`UserAgentClass::OperaMini`].
pub fn classify(user_agent: &str) -> UserAgentClass {
    if user_agent.contains(OPERA_MINI) {
        UserAgentClass::OperaMini
    } else if contains_any(user_agent, MOBILE_WITHOUT_HOVER) {
        UserAgentClass::MobileWithoutHover
    } else {
        UserAgentClass::Unlisted
    }
}

/// Returns `true` if `user_agent` contains any of `markers`.
pub fn contains_any(user_agent: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| user_agent.contains(marker))
}
