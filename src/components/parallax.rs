use yew::prelude::*;

use crate::config;
use crate::device::use_device_capabilities;
use crate::hooks::use_window_scroll_y;

/// Background shift, in percent of its own height, for the current scroll
/// position. Scrubs linearly from 0 at the top of the page to `max_percent`
/// at the bottom.
pub fn parallax_offset(scroll_y: f64, scroll_height: f64, viewport_height: f64, max_percent: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0) * max_percent
}

fn page_metrics() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let height = window.inner_height().ok()?.as_f64()?;
    let scroll_height = window.document()?.document_element()?.scroll_height();
    Some((f64::from(scroll_height), height))
}

#[function_component(ParallaxBackground)]
pub fn parallax_background() -> Html {
    let caps = use_device_capabilities();
    let enabled = caps.allows_parallax();
    let scroll_y = use_window_scroll_y();

    let style = if enabled {
        let offset = page_metrics()
            .map(|(scroll_height, viewport)| {
                parallax_offset(scroll_y, scroll_height, viewport, config::PARALLAX_Y_PERCENT)
            })
            .unwrap_or(0.0);
        format!("transform: translate3d(0, {:.2}%, 0);", offset)
    } else {
        String::new()
    };

    html! {
        <>
            <style>
                {r#"
                    .parallax-bg {
                        position: fixed;
                        inset: 0;
                        z-index: -10;
                        background-image: url('/images/hero-bg.jpg');
                        background-size: cover;
                        background-position: center;
                        will-change: transform;
                        transition: opacity 0.5s, filter 0.5s;
                    }
                    .parallax-bg.static {
                        opacity: 0.6;
                        filter: blur(4px);
                    }
                "#}
            </style>
            <div class={classes!("parallax-bg", (!enabled).then_some("static"))} style={style} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_scrubs_across_the_page() {
        assert_eq!(parallax_offset(0.0, 3000.0, 1000.0, 20.0), 0.0);
        assert_eq!(parallax_offset(1000.0, 3000.0, 1000.0, 20.0), 10.0);
        assert_eq!(parallax_offset(2000.0, 3000.0, 1000.0, 20.0), 20.0);
        assert_eq!(parallax_offset(5000.0, 3000.0, 1000.0, 20.0), 20.0);
    }

    #[test]
    fn short_pages_do_not_move() {
        assert_eq!(parallax_offset(100.0, 800.0, 1000.0, 20.0), 0.0);
    }
}
