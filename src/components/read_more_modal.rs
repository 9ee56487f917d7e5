use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, TouchEvent};
use yew::prelude::*;

use crate::carousel::{key_direction, swipe_direction, Carousel, Nav, Slide};
use crate::config;
use crate::hooks::warn_on_dom_error;
use crate::scroll_lock::use_scroll_lock;

enum CarouselAction {
    Navigate(Nav),
    Settle,
}

#[derive(PartialEq)]
struct CarouselState(Carousel);

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CarouselAction::Navigate(nav) => match self.0.navigate(nav) {
                Some(next) => Rc::new(CarouselState(next)),
                None => self,
            },
            CarouselAction::Settle => Rc::new(CarouselState(self.0.settle())),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ReadMoreModalProps {
    pub slides: Rc<Vec<Slide>>,
    pub start_index: usize,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_index_change: Callback<usize>,
}

/// Mount to open, unmount to close.
#[function_component(ReadMoreModal)]
pub fn read_more_modal(props: &ReadMoreModalProps) -> Html {
    let state = use_reducer({
        let len = props.slides.len();
        let start = props.start_index;
        move || CarouselState(Carousel::new(len, start))
    });
    let touch_start = use_mut_ref(|| None::<i32>);
    let carousel = state.0;

    use_scroll_lock(true);

    // Keyboard navigation while mounted.
    {
        let dispatcher = state.dispatcher();
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    } else if let Some(nav) = key_direction(&e.key()) {
                        dispatcher.dispatch(CarouselAction::Navigate(nav));
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);
                if let Some(window) = &window {
                    warn_on_dom_error(
                        "attach keydown listener",
                        window.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()),
                    );
                }
                move || {
                    if let Some(window) = window {
                        warn_on_dom_error(
                            "detach keydown listener",
                            window.remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()),
                        );
                    }
                }
            },
            (),
        );
    }

    // Release the transition lock once the slide animation has played.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(_, transitioning)| {
                let timeout = transitioning.then(|| {
                    Timeout::new(config::READ_MORE_TRANSITION_MS, move || {
                        dispatcher.dispatch(CarouselAction::Settle)
                    })
                });
                move || drop(timeout)
            },
            (carousel.index(), carousel.is_transitioning()),
        );
    }

    {
        let on_index_change = props.on_index_change.clone();
        use_effect_with_deps(
            move |index| {
                debug!("Read-more slide {}", index);
                on_index_change.emit(*index);
                || ()
            },
            carousel.index(),
        );
    }

    let navigate = |nav: Nav| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Navigate(nav)))
    };

    let on_touch_start = {
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            *touch_start.borrow_mut() = e.touches().get(0).map(|t| t.client_x());
        })
    };
    let on_touch_end = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: TouchEvent| {
            let start = touch_start.borrow_mut().take();
            let end = e.changed_touches().get(0).map(|t| t.client_x());
            if let (Some(start), Some(end)) = (start, end) {
                if let Some(nav) = swipe_direction(start, end) {
                    dispatcher.dispatch(CarouselAction::Navigate(nav));
                }
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close_on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };

    let Some(slide) = props.slides.get(carousel.index()) else {
        return html! {};
    };

    html! {
        <div class="modal-backdrop" onclick={close_on_backdrop}>
            <style>
                {r#"
                    .read-more {
                        position: relative;
                        width: 100%;
                        max-width: 42rem;
                        background: #ffffff;
                        color: #1f2937;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
                        animation: modalIn 0.3s ease-out;
                        touch-action: pan-y;
                    }
                    .read-more-slide { animation: slideFade 0.3s ease-out; }
                    @keyframes slideFade {
                        from { opacity: 0; transform: translateX(24px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .read-more-image { width: 100%; height: 12rem; object-fit: cover; border-radius: 0.75rem; }
                    .read-more h2 { font-size: 1.5rem; font-weight: 600; margin: 1rem 0 0.5rem; }
                    .read-more p { color: #374151; line-height: 1.6; }
                    .read-more-nav { display: flex; justify-content: space-between; align-items: center; padding-top: 1rem; }
                    .read-more-nav button { background: none; border: none; font-size: 1.5rem; cursor: pointer; }
                    .read-more-nav button:hover { color: #006c67; }
                    .dots { display: flex; gap: 0.5rem; }
                    .dot { width: 0.6rem; height: 0.6rem; border-radius: 50%; border: none; background: #d1d5db; cursor: pointer; padding: 0; }
                    .dot.active { background: #006c67; }
                    .modal-close { position: absolute; top: 0.75rem; right: 0.75rem; background: none; border: none; font-size: 1.25rem; cursor: pointer; color: #4b5563; }
                    .modal-close:hover { color: #ef4444; }
                "#}
            </style>
            <div
                class="read-more"
                role="dialog"
                aria-modal="true"
                aria-labelledby="read-more-title"
                ontouchstart={on_touch_start}
                ontouchend={on_touch_end}
            >
                <button class="modal-close" aria-label="Close modal" onclick={close}>{"✕"}</button>
                <div key={carousel.index()} class="read-more-slide">
                    <img class="read-more-image" src={slide.image} alt={slide.title} />
                    <h2 id="read-more-title">{slide.title}</h2>
                    <p>{slide.text}</p>
                </div>
                <div class="read-more-nav">
                    <button aria-label="Previous content" onclick={navigate(Nav::Prev)}>{"←"}</button>
                    <div class="dots">
                        { for (0..carousel.len()).map(|i| html! {
                            <button
                                class={classes!("dot", (i == carousel.index()).then_some("active"))}
                                aria-label={format!("Go to slide {}", i + 1)}
                                onclick={navigate(Nav::Jump(i))}
                            />
                        }) }
                    </div>
                    <button aria-label="Next content" onclick={navigate(Nav::Next)}>{"→"}</button>
                </div>
            </div>
        </div>
    }
}
