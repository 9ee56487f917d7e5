//! Device capability probing used to turn decorative motion off on
//! constrained devices.

use web_sys::js_sys::Reflect;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceCapabilities {
    pub prefers_reduced_motion: bool,
    /// Approximate RAM in GB, when the browser exposes `navigator.deviceMemory`.
    pub device_memory_gb: Option<f64>,
    pub touch: bool,
    pub viewport_width: f64,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self {
            prefers_reduced_motion: false,
            device_memory_gb: None,
            touch: false,
            viewport_width: 1024.0,
        }
    }
}

impl DeviceCapabilities {
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let navigator = window.navigator();

        let prefers_reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);
        let device_memory_gb = Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
            .ok()
            .and_then(|v| v.as_f64());
        let touch = Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
            || navigator.max_touch_points() > 0;
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);

        Self {
            prefers_reduced_motion,
            device_memory_gb,
            touch,
            viewport_width,
        }
    }

    pub fn is_small_screen(&self) -> bool {
        self.viewport_width < config::SMALL_SCREEN_MAX_WIDTH
    }

    /// Scroll-linked parallax runs only when nothing argues against it.
    pub fn allows_parallax(&self) -> bool {
        let low_memory = self
            .device_memory_gb
            .map_or(false, |gb| gb <= config::LOW_MEMORY_GB);
        !(self.prefers_reduced_motion || low_memory || self.touch || self.is_small_screen())
    }

    /// Lighter entry animations; an unknown memory size counts as enough.
    pub fn allows_animations(&self) -> bool {
        let memory = self.device_memory_gb.unwrap_or(config::ANIMATION_MEMORY_GB);
        memory >= config::ANIMATION_MEMORY_GB && !self.prefers_reduced_motion
    }
}

#[hook]
pub fn use_device_capabilities() -> DeviceCapabilities {
    (*use_state(DeviceCapabilities::detect)).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> DeviceCapabilities {
        DeviceCapabilities {
            prefers_reduced_motion: false,
            device_memory_gb: Some(8.0),
            touch: false,
            viewport_width: 1440.0,
        }
    }

    #[test]
    fn capable_desktop_gets_parallax() {
        assert!(desktop().allows_parallax());
        assert!(desktop().allows_animations());
    }

    #[test]
    fn any_single_constraint_disables_parallax() {
        let constrained = [
            DeviceCapabilities { prefers_reduced_motion: true, ..desktop() },
            DeviceCapabilities { device_memory_gb: Some(2.0), ..desktop() },
            DeviceCapabilities { touch: true, ..desktop() },
            DeviceCapabilities { viewport_width: 767.0, ..desktop() },
        ];
        for caps in constrained {
            assert!(!caps.allows_parallax(), "{caps:?}");
        }
        assert!(DeviceCapabilities { viewport_width: 768.0, ..desktop() }.allows_parallax());
    }

    #[test]
    fn animations_need_memory_and_no_reduced_motion() {
        assert!(DeviceCapabilities { device_memory_gb: None, ..desktop() }.allows_animations());
        assert!(!DeviceCapabilities { device_memory_gb: Some(2.0), ..desktop() }.allows_animations());
        assert!(!DeviceCapabilities { prefers_reduced_motion: true, ..desktop() }.allows_animations());
    }
}
