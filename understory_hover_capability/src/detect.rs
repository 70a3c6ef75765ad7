// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover decision cascade.
//!
//! ## Order of checks
//!
//! Without a media query evaluator only the user agent is consulted:
//!
//! 1. Opera Mini: no true hover.
//! 2. Known mobile shells (IE Mobile and friends): no true hover.
//! 3. Anything else: assumed to be an old desktop browser with real hover.
//!
//! With an evaluator, the first signal found decides:
//!
//! 1. `(hover: none)` or `(hover: on-demand)`, any prefix: no true hover.
//! 2. `(hover: hover)`, any prefix: true hover.
//! 3. Pointer Events: true hover unless the primary pointer reports touch points.
//! 4. `(touch-enabled)`, any prefix: no true hover.
//! 5. `ontouchstart` declared: no true hover.
//! 6. Nothing touch-like found: true hover.
//!
//! An explicit `none`/`on-demand` answer is never overridden by a later check.
//! Touch counts as no true hover because emulated `:hover` tends to stick after
//! a tap.

use crate::host::HostCapabilities;
use crate::queries::{self, HOVER_HOVER, HOVER_NONE_OR_ON_DEMAND, TOUCH_ENABLED};
use crate::user_agent::{self, UserAgentClass};

/// The check that decided a detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverReason {
    /// No evaluator; the user agent names Opera Mini.
    OperaMini,
    /// No evaluator; the user agent names a mobile shell without hover.
    MobileUserAgent,
    /// No evaluator and no known mobile marker.
    LegacyDesktop,
    /// The host reported `hover: none` or `hover: on-demand`.
    HoverNone,
    /// The host reported `hover: hover`.
    HoverHover,
    /// Pointer Events are supported and the primary pointer has touch points.
    PointerEventsTouch,
    /// Pointer Events are supported and no touch points are reported.
    PointerEventsNoTouch,
    /// The legacy `touch-enabled` media feature matched.
    TouchEnabledMedia,
    /// `ontouchstart` is declared on the global event surface.
    TouchStartEvent,
    /// No signal pointed at touch.
    Fallback,
}

impl HoverReason {
    /// The detection result this reason stands for.
    #[must_use]
    pub const fn supports_true_hover(self) -> bool {
        match self {
            Self::LegacyDesktop
            | Self::HoverHover
            | Self::PointerEventsNoTouch
            | Self::Fallback => true,
            Self::OperaMini
            | Self::MobileUserAgent
            | Self::HoverNone
            | Self::PointerEventsTouch
            | Self::TouchEnabledMedia
            | Self::TouchStartEvent => false,
        }
    }
}

/// Answers whether a host's primary pointer supports true hover.
///
/// The detector holds no state beyond its host, and every call re-reads the
/// host's signals.
#[derive(Clone, Debug, Default)]
pub struct HoverCapabilityDetector<H> {
    host: H,
}

impl<H: HostCapabilities> HoverCapabilityDetector<H> {
    /// Create a detector reading from `host`.
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// The host this detector reads from.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Consume the detector, returning its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Whether the primary pointer supports true hover.
    pub fn supports_true_hover(&self) -> bool {
        self.detect().supports_true_hover()
    }

    /// Run the cascade and report which check decided.
    pub fn detect(&self) -> HoverReason {
        let reason = if self.host.has_media_queries() {
            self.from_media_and_touch()
        } else {
            self.from_user_agent()
        };
        tracing::debug!(
            ?reason,
            supports_true_hover = reason.supports_true_hover(),
            "hover capability detected"
        );
        reason
    }

    fn from_user_agent(&self) -> HoverReason {
        match user_agent::classify(&self.host.user_agent()) {
            UserAgentClass::OperaMini => HoverReason::OperaMini,
            UserAgentClass::MobileWithoutHover => HoverReason::MobileUserAgent,
            UserAgentClass::Unlisted => HoverReason::LegacyDesktop,
        }
    }

    fn from_media_and_touch(&self) -> HoverReason {
        let host = &self.host;
        if queries::matches_any(host, HOVER_NONE_OR_ON_DEMAND) {
            return HoverReason::HoverNone;
        }
        if queries::matches_any(host, HOVER_HOVER) {
            return HoverReason::HoverHover;
        }
        // The `hover` feature is not implemented; fall back to touch heuristics.
        if host.has_pointer_events() || host.has_ms_pointer_events() {
            return if self.touch_points() > 0 {
                HoverReason::PointerEventsTouch
            } else {
                HoverReason::PointerEventsNoTouch
            };
        }
        if queries::matches_any(host, TOUCH_ENABLED) {
            return HoverReason::TouchEnabledMedia;
        }
        if host.declares_touch_start() {
            return HoverReason::TouchStartEvent;
        }
        HoverReason::Fallback
    }

    /// `maxTouchPoints` when nonzero, otherwise `msMaxTouchPoints`.
    fn touch_points(&self) -> u32 {
        self.host
            .max_touch_points()
            .filter(|&count| count > 0)
            .or_else(|| self.host.ms_max_touch_points())
            .unwrap_or(0)
    }
}

/// Run the cascade against `host` and report which check decided.
pub fn detect<H: HostCapabilities + ?Sized>(host: &H) -> HoverReason {
    HoverCapabilityDetector::new(host).detect()
}

/// Whether `host`'s primary pointer supports true hover.
pub fn supports_true_hover<H: HostCapabilities + ?Sized>(host: &H) -> bool {
    detect(host).supports_true_hover()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostSnapshot;

    #[test]
    fn legacy_branch_never_consults_touch_signals() {
        let host = HostSnapshot::legacy("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1)")
            .with_pointer_events(5)
            .with_touch_start();
        assert_eq!(detect(&host), HoverReason::LegacyDesktop);
    }

    #[test]
    fn legacy_branch_reports_mobile_markers() {
        assert_eq!(
            detect(&HostSnapshot::legacy("Opera Mini/4.2")),
            HoverReason::OperaMini
        );
        assert_eq!(
            detect(&HostSnapshot::legacy("Mozilla/4.0 (compatible; MSIE 6.0; Windows CE)")),
            HoverReason::MobileUserAgent
        );
    }

    #[test]
    fn modern_branch_ignores_user_agent_markers() {
        let host = HostSnapshot::modern().with_user_agent("Opera Mini/8.0");
        assert_eq!(detect(&host), HoverReason::Fallback);
    }

    #[test]
    fn explicit_none_beats_explicit_hover() {
        let host = HostSnapshot::modern()
            .matching("(hover: hover)")
            .matching("(-webkit-hover: on-demand)");
        assert_eq!(detect(&host), HoverReason::HoverNone);
    }

    #[test]
    fn explicit_hover_beats_touch_heuristics() {
        let host = HostSnapshot::modern()
            .matching("(-moz-hover: hover)")
            .with_pointer_events(10)
            .matching("(touch-enabled)")
            .with_touch_start();
        assert_eq!(detect(&host), HoverReason::HoverHover);
    }

    #[test]
    fn pointer_events_decide_before_touch_media() {
        let host = HostSnapshot::modern()
            .with_pointer_events(0)
            .matching("(-moz-touch-enabled)")
            .with_touch_start();
        assert_eq!(detect(&host), HoverReason::PointerEventsNoTouch);
    }

    #[test]
    fn zero_standard_count_falls_back_to_prefixed_count() {
        let mut host = HostSnapshot::modern().with_pointer_events(0);
        host.ms_max_touch_points = Some(2);
        assert_eq!(detect(&host), HoverReason::PointerEventsTouch);
    }

    #[test]
    fn nonzero_standard_count_wins_over_prefixed_count() {
        let host = HostSnapshot::modern()
            .with_pointer_events(1)
            .with_ms_pointer_events(0);
        assert_eq!(detect(&host), HoverReason::PointerEventsTouch);
    }

    #[test]
    fn prefixed_pointer_events_alone_are_enough() {
        let host = HostSnapshot::modern().with_ms_pointer_events(0);
        assert_eq!(detect(&host), HoverReason::PointerEventsNoTouch);

        let host = HostSnapshot::modern().with_ms_pointer_events(4);
        assert_eq!(detect(&host), HoverReason::PointerEventsTouch);
    }

    #[test]
    fn missing_touch_counts_read_as_zero() {
        let host = HostSnapshot {
            pointer_events: true,
            ..HostSnapshot::modern()
        };
        assert_eq!(detect(&host), HoverReason::PointerEventsNoTouch);
    }

    #[test]
    fn touch_counts_without_pointer_events_are_ignored() {
        let host = HostSnapshot {
            max_touch_points: Some(5),
            ms_max_touch_points: Some(5),
            ..HostSnapshot::modern()
        };
        assert_eq!(detect(&host), HoverReason::Fallback);
    }

    #[test]
    fn touch_start_is_the_last_touch_signal() {
        let host = HostSnapshot::modern().with_touch_start();
        assert_eq!(detect(&host), HoverReason::TouchStartEvent);
    }

    #[test]
    fn reason_maps_to_result() {
        let positive = [
            HoverReason::LegacyDesktop,
            HoverReason::HoverHover,
            HoverReason::PointerEventsNoTouch,
            HoverReason::Fallback,
        ];
        let negative = [
            HoverReason::OperaMini,
            HoverReason::MobileUserAgent,
            HoverReason::HoverNone,
            HoverReason::PointerEventsTouch,
            HoverReason::TouchEnabledMedia,
            HoverReason::TouchStartEvent,
        ];
        assert!(positive.iter().all(|r| r.supports_true_hover()));
        assert!(negative.iter().all(|r| !r.supports_true_hover()));
    }

    #[test]
    fn detector_hands_back_its_host() {
        let host = HostSnapshot::modern().matching("(hover: hover)");
        let detector = HoverCapabilityDetector::new(host.clone());
        assert!(detector.supports_true_hover());
        assert_eq!(detector.host(), &host);
        assert_eq!(detector.into_host(), host);
    }
}
