// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capability surface consulted by the detector.
//!
//! [`HostCapabilities`] is the seam between the decision cascade and whatever
//! actually answers the questions: a browser window (see the `web` module on
//! `wasm32`), an embedder that already knows its platform, or a
//! [`HostSnapshot`] written out by hand in a test.
//!
//! Every signal is advisory. Implementations report a missing capability as
//! `false` or `None` and never fail.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

/// Read-only view of the capability signals a host exposes.
pub trait HostCapabilities {
    /// Whether the host has a media query evaluator at all (`window.matchMedia`).
    fn has_media_queries(&self) -> bool;

    /// Evaluate a single media query.
    ///
    /// Only called when [`has_media_queries`](Self::has_media_queries) is `true`.
    /// Unknown or unsupported features must evaluate to `false`.
    fn matches_media(&self, query: &str) -> bool;

    /// The host's identification string (`navigator.userAgent`).
    fn user_agent(&self) -> Cow<'_, str>;

    /// Whether the standard `PointerEvent` interface is exposed.
    fn has_pointer_events(&self) -> bool;

    /// Whether the IE10 `MSPointerEvent` interface is exposed.
    fn has_ms_pointer_events(&self) -> bool {
        false
    }

    /// `navigator.maxTouchPoints`, if the host reports it.
    fn max_touch_points(&self) -> Option<u32>;

    /// `navigator.msMaxTouchPoints`, if the host reports it.
    fn ms_max_touch_points(&self) -> Option<u32> {
        None
    }

    /// Whether the global event surface declares `ontouchstart`.
    fn declares_touch_start(&self) -> bool;
}

impl<H: HostCapabilities + ?Sized> HostCapabilities for &H {
    fn has_media_queries(&self) -> bool {
        (**self).has_media_queries()
    }

    fn matches_media(&self, query: &str) -> bool {
        (**self).matches_media(query)
    }

    fn user_agent(&self) -> Cow<'_, str> {
        (**self).user_agent()
    }

    fn has_pointer_events(&self) -> bool {
        (**self).has_pointer_events()
    }

    fn has_ms_pointer_events(&self) -> bool {
        (**self).has_ms_pointer_events()
    }

    fn max_touch_points(&self) -> Option<u32> {
        (**self).max_touch_points()
    }

    fn ms_max_touch_points(&self) -> Option<u32> {
        (**self).ms_max_touch_points()
    }

    fn declares_touch_start(&self) -> bool {
        (**self).declares_touch_start()
    }
}

/// A fixed, synthetic description of a host.
///
/// The default snapshot has no media query evaluator, an empty user agent and
/// no pointer or touch signals; detection on it falls to the legacy desktop
/// branch.
///
/// ```
/// use understory_hover_capability::{HostSnapshot, supports_true_hover};
///
/// // A touch-first tablet whose browser predates the `hover` media feature.
/// let tablet = HostSnapshot::modern().with_pointer_events(10);
/// assert!(!supports_true_hover(&tablet));
///
/// // A desktop browser that answers `(hover: hover)`.
/// let desktop = HostSnapshot::modern().matching("(hover: hover)");
/// assert!(supports_true_hover(&desktop));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostSnapshot {
    /// Queries the evaluator answers `true` for, or `None` when there is no evaluator.
    ///
    /// Queries are compared verbatim; anything not listed evaluates to `false`.
    pub matching_media: Option<Vec<String>>,
    /// Identification string.
    pub user_agent: String,
    /// `PointerEvent` is exposed.
    pub pointer_events: bool,
    /// `MSPointerEvent` is exposed.
    pub ms_pointer_events: bool,
    /// `navigator.maxTouchPoints`.
    pub max_touch_points: Option<u32>,
    /// `navigator.msMaxTouchPoints`.
    pub ms_max_touch_points: Option<u32>,
    /// `ontouchstart` is declared on the global event surface.
    pub touch_start: bool,
}

impl HostSnapshot {
    /// A host without a media query evaluator, identified by `user_agent`.
    pub fn legacy(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }

    /// A host with a media query evaluator that matches nothing.
    pub fn modern() -> Self {
        Self {
            matching_media: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Make `query` evaluate to `true`, adding an evaluator if there is none.
    #[must_use]
    pub fn matching(mut self, query: impl Into<String>) -> Self {
        self.matching_media
            .get_or_insert_with(Vec::new)
            .push(query.into());
        self
    }

    /// Replace the identification string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Expose `PointerEvent` with the given `maxTouchPoints`.
    #[must_use]
    pub fn with_pointer_events(mut self, max_touch_points: u32) -> Self {
        self.pointer_events = true;
        self.max_touch_points = Some(max_touch_points);
        self
    }

    /// Expose the prefixed `MSPointerEvent` with the given `msMaxTouchPoints`.
    #[must_use]
    pub fn with_ms_pointer_events(mut self, ms_max_touch_points: u32) -> Self {
        self.ms_pointer_events = true;
        self.ms_max_touch_points = Some(ms_max_touch_points);
        self
    }

    /// Declare `ontouchstart` on the global event surface.
    #[must_use]
    pub fn with_touch_start(mut self) -> Self {
        self.touch_start = true;
        self
    }
}

impl HostCapabilities for HostSnapshot {
    fn has_media_queries(&self) -> bool {
        self.matching_media.is_some()
    }

    fn matches_media(&self, query: &str) -> bool {
        self.matching_media
            .as_deref()
            .is_some_and(|queries| queries.iter().any(|q| q == query))
    }

    fn user_agent(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.user_agent)
    }

    fn has_pointer_events(&self) -> bool {
        self.pointer_events
    }

    fn has_ms_pointer_events(&self) -> bool {
        self.ms_pointer_events
    }

    fn max_touch_points(&self) -> Option<u32> {
        self.max_touch_points
    }

    fn ms_max_touch_points(&self) -> Option<u32> {
        self.ms_max_touch_points
    }

    fn declares_touch_start(&self) -> bool {
        self.touch_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_has_no_signals() {
        let host = HostSnapshot::default();
        assert!(!host.has_media_queries());
        assert!(!host.matches_media("(hover: hover)"));
        assert_eq!(host.user_agent(), "");
        assert!(!host.has_pointer_events());
        assert!(!host.has_ms_pointer_events());
        assert_eq!(host.max_touch_points(), None);
        assert_eq!(host.ms_max_touch_points(), None);
        assert!(!host.declares_touch_start());
    }

    #[test]
    fn modern_snapshot_evaluates_but_matches_nothing() {
        let host = HostSnapshot::modern();
        assert!(host.has_media_queries());
        assert!(!host.matches_media("(hover: hover)"));
        assert!(!host.matches_media(""));
    }

    #[test]
    fn matching_adds_an_evaluator_to_legacy_hosts() {
        let host = HostSnapshot::legacy("Mozilla/4.0").matching("(hover: none)");
        assert!(host.has_media_queries());
        assert!(host.matches_media("(hover: none)"));
        assert!(!host.matches_media("(hover:none)"));
        assert_eq!(host.user_agent(), "Mozilla/4.0");
    }

    #[test]
    fn pointer_event_builders_set_presence_and_counts() {
        let host = HostSnapshot::modern()
            .with_pointer_events(0)
            .with_ms_pointer_events(5)
            .with_touch_start();
        assert!(host.has_pointer_events());
        assert!(host.has_ms_pointer_events());
        assert_eq!(host.max_touch_points(), Some(0));
        assert_eq!(host.ms_max_touch_points(), Some(5));
        assert!(host.declares_touch_start());
    }

    #[test]
    fn references_forward_to_the_host() {
        struct Minimal;
        impl HostCapabilities for Minimal {
            fn has_media_queries(&self) -> bool {
                true
            }
            fn matches_media(&self, query: &str) -> bool {
                query == "(hover: hover)"
            }
            fn user_agent(&self) -> Cow<'_, str> {
                Cow::Borrowed("minimal")
            }
            fn has_pointer_events(&self) -> bool {
                false
            }
            fn max_touch_points(&self) -> Option<u32> {
                None
            }
            fn declares_touch_start(&self) -> bool {
                false
            }
        }

        let host = &Minimal;
        assert!(HostCapabilities::matches_media(&host, "(hover: hover)"));
        assert_eq!(HostCapabilities::user_agent(&host), "minimal");
        // Defaults apply to the prefixed signals.
        assert!(!HostCapabilities::has_ms_pointer_events(&host));
        assert_eq!(HostCapabilities::ms_max_touch_points(&host), None);
    }
}
