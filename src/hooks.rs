use std::fmt::Debug;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Logs a failed DOM call at `warn`. Returns whether the call succeeded.
pub fn warn_on_dom_error<E: Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to {}: {:?}", action, e);
            false
        }
    }
}

/// Tracks `window.scrollY`, updated from a scroll listener that is removed
/// when the component unmounts.
#[hook]
pub fn use_window_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    let target = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        scroll_y.set(target.scroll_y().unwrap_or(0.0));
                    }) as Box<dyn FnMut()>);
                    warn_on_dom_error(
                        "attach scroll listener",
                        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()),
                    );
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        warn_on_dom_error(
                            "detach scroll listener",
                            window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()),
                        );
                    }
                }
            },
            (),
        );
    }

    *scroll_y
}

/// True once the referenced element has scrolled into view. Never turns
/// false again, so reveal animations play once.
#[hook]
pub fn use_revealed(node: NodeRef) -> bool {
    let revealed = use_state(|| false);
    let scroll_y = use_window_scroll_y();

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                if !*revealed {
                    if let Some(element) = node.cast::<Element>() {
                        if is_in_view(&element) {
                            revealed.set(true);
                        }
                    }
                }
                || ()
            },
            scroll_y.to_bits(),
        );
    }

    *revealed
}

/// Top edge above 85% of the viewport height counts as in view.
fn is_in_view(element: &Element) -> bool {
    let viewport = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    element.get_bounding_client_rect().top() < viewport * 0.85
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_errors_are_reported_not_dropped() {
        assert!(warn_on_dom_error::<String>("attach scroll listener", Ok(())));
        assert!(!warn_on_dom_error("detach keydown listener", Err("listener not found".to_string())));
    }
}
