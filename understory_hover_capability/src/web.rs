// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser host backed by `web_sys::Window`.
//!
//! Properties are probed through `Reflect` rather than the typed `web_sys`
//! accessors, because the hosts this crate cares about are exactly the ones
//! where those properties may be missing. A thrown exception, an absent
//! property and a value of the wrong type all read as "signal absent".
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn enable_hover_affordances() -> bool {
//!     understory_hover_capability::web::supports_true_hover()
//! }
//! ```

use alloc::borrow::Cow;

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::detect::HoverCapabilityDetector;
use crate::host::HostCapabilities;

/// A [`HostCapabilities`] reading from a live browser window.
#[derive(Clone, Debug)]
pub struct WebHost {
    window: Window,
}

impl WebHost {
    /// Wrap an existing window.
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// The global window, or `None` when running outside a window context
    /// (for example in a worker).
    pub fn from_global() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    /// The wrapped window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    fn has(target: &JsValue, key: &str) -> bool {
        Reflect::has(target, &JsValue::from_str(key)).unwrap_or_else(|err| {
            tracing::trace!(key, ?err, "`in` check threw");
            false
        })
    }

    fn get(target: &JsValue, key: &str) -> Option<JsValue> {
        match Reflect::get(target, &JsValue::from_str(key)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => Some(value),
            Ok(_) => None,
            Err(err) => {
                tracing::trace!(key, ?err, "property read threw");
                None
            }
        }
    }

    fn navigator_count(&self, key: &str) -> Option<u32> {
        let navigator = Self::get(&self.window, "navigator")?;
        Self::get(&navigator, key)?.as_f64().map(count_from_f64)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The value is clamped to the `u32` range and truncated toward zero first."
)]
fn count_from_f64(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.min(f64::from(u32::MAX)) as u32
    }
}

impl HostCapabilities for WebHost {
    fn has_media_queries(&self) -> bool {
        Self::get(&self.window, "matchMedia").is_some_and(|f| f.is_function())
    }

    fn matches_media(&self, query: &str) -> bool {
        match self.window.match_media(query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(err) => {
                tracing::trace!(query, ?err, "matchMedia threw");
                false
            }
        }
    }

    fn user_agent(&self) -> Cow<'_, str> {
        let user_agent = Self::get(&self.window, "navigator")
            .and_then(|navigator| Self::get(&navigator, "userAgent"))
            .and_then(|value| value.as_string());
        Cow::Owned(user_agent.unwrap_or_default())
    }

    fn has_pointer_events(&self) -> bool {
        Self::get(&self.window, "PointerEvent").is_some()
    }

    fn has_ms_pointer_events(&self) -> bool {
        Self::get(&self.window, "MSPointerEvent").is_some()
    }

    fn max_touch_points(&self) -> Option<u32> {
        self.navigator_count("maxTouchPoints")
    }

    fn ms_max_touch_points(&self) -> Option<u32> {
        self.navigator_count("msMaxTouchPoints")
    }

    fn declares_touch_start(&self) -> bool {
        Self::has(&self.window, "ontouchstart")
    }
}

/// Whether the running browser's primary pointer supports true hover.
///
/// Outside a window context there is nothing touch-like to find, so this
/// returns `true`.
pub fn supports_true_hover() -> bool {
    WebHost::from_global()
        .is_none_or(|host| HoverCapabilityDetector::new(host).supports_true_hover())
}
