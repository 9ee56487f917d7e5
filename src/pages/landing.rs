use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::carousel::{wrap_next, wrap_prev};
use crate::components::counter::Counter;
use crate::components::faq::Faq;
use crate::components::parallax::ParallaxBackground;
use crate::components::plan_finder::PlanFinder;
use crate::components::quote_modal::QuoteModal;
use crate::components::read_more_modal::ReadMoreModal;
use crate::config;
use crate::content::{
    insurance_slides, InsuranceType, CORE_VALUES, COUNTERS, INSURANCE_TYPES, MILESTONES, PRICING_TIERS,
    RATING_SUMMARY, TESTIMONIALS, WHY_CHOOSE,
};
use crate::device::use_device_capabilities;
use crate::hooks::use_revealed;
use crate::wizard::WizardAnswers;
use crate::Route;

#[derive(Properties, PartialEq)]
struct RevealProps {
    #[prop_or_default]
    id: Option<AttrValue>,
    #[prop_or_default]
    class: Classes,
    children: Children,
}

/// Section that fades in the first time it enters the viewport.
#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_revealed(node.clone());

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("section", "reveal", visible.then_some("visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </section>
    }
}

/// Index the autoplay timer moves to, or `None` when there is nothing to
/// rotate.
fn autoplay_next(current: usize, len: usize, enabled: bool) -> Option<usize> {
    (enabled && len > 1).then(|| wrap_next(current, len))
}

/// Where closing the quote modal sends the browser. Leaving `/quote` lets
/// the "Get Quote" links open the modal again.
fn route_after_quote_close(opened_by_route: bool) -> Option<Route> {
    opened_by_route.then_some(Route::Home)
}

/// Advances `index` every `period_ms` while mounted. Any index change,
/// manual or automatic, restarts the wait.
#[hook]
fn use_autoplay(index: UseStateHandle<usize>, len: usize, period_ms: u32, enabled: bool) {
    let current = *index;
    use_effect_with_deps(
        move |&(current, enabled)| {
            let timeout = autoplay_next(current, len, enabled)
                .map(|next| Timeout::new(period_ms, move || index.set(next)));
            move || drop(timeout)
        },
        (current, enabled),
    );
}

fn insurance_card(insurance: &InsuranceType, on_read_more: Callback<MouseEvent>) -> Html {
    html! {
        <div class="insurance-card">
            <img src={insurance.image} alt={insurance.title} loading="lazy" />
            <h3>{insurance.title}</h3>
            <p>{insurance.description}</p>
            <button class="btn-link" onclick={on_read_more}>{"Read More →"}</button>
        </div>
    }
}

fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating.min(5)))
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Arriving through `/quote` opens the quote modal straight away.
    #[prop_or_default]
    pub open_quote_on_mount: bool,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let device = use_device_capabilities();
    let navigator = use_navigator();
    let quote_open = use_state(|| props.open_quote_on_mount);
    let read_more = use_state(|| None::<usize>);
    let slides = use_memo(|_| insurance_slides(), ());
    let testimonial = use_state(|| 0usize);
    let insurance_index = use_state(|| 0usize);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    {
        let quote_open = quote_open.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    quote_open.set(true);
                }
                || ()
            },
            props.open_quote_on_mount,
        );
    }

    use_autoplay(testimonial.clone(), TESTIMONIALS.len(), config::TESTIMONIAL_AUTOPLAY_MS, true);
    use_autoplay(
        insurance_index.clone(),
        INSURANCE_TYPES.len(),
        config::INSURANCE_AUTOPLAY_MS,
        device.is_small_screen() && read_more.is_none(),
    );

    let open_quote = {
        let quote_open = quote_open.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Opening quote modal");
            quote_open.set(true);
        })
    };
    let close_quote = {
        let quote_open = quote_open.clone();
        let target = route_after_quote_close(props.open_quote_on_mount);
        Callback::from(move |_| {
            quote_open.set(false);
            if let (Some(navigator), Some(route)) = (&navigator, &target) {
                navigator.push(route);
            }
        })
    };
    let on_plan_quote = {
        let quote_open = quote_open.clone();
        Callback::from(move |answers: WizardAnswers| {
            match serde_json::to_string(&answers) {
                Ok(json) => info!("Prefilled answers: {}", json),
                Err(e) => warn!("Could not serialize wizard answers: {}", e),
            }
            quote_open.set(true);
        })
    };
    let open_read_more = |index: usize| {
        let read_more = read_more.clone();
        Callback::from(move |_: MouseEvent| read_more.set(Some(index)))
    };
    let close_read_more = {
        let read_more = read_more.clone();
        Callback::from(move |_| read_more.set(None))
    };
    let track_read_more = {
        let read_more = read_more.clone();
        Callback::from(move |index: usize| {
            if *read_more != Some(index) {
                read_more.set(Some(index));
            }
        })
    };
    let step_testimonial = |forward: bool| {
        let testimonial = testimonial.clone();
        Callback::from(move |_: MouseEvent| {
            let len = TESTIMONIALS.len();
            testimonial.set(if forward { wrap_next(*testimonial, len) } else { wrap_prev(*testimonial, len) });
        })
    };

    let insurance_view = if device.is_small_screen() {
        let index = *insurance_index;
        html! {
            <div class="insurance-carousel">
                { INSURANCE_TYPES.get(index).map(|insurance| html! {
                    <div key={index} class="carousel-slide">
                        { insurance_card(insurance, open_read_more(index)) }
                    </div>
                }).unwrap_or_default() }
                <div class="dots">
                    { for (0..INSURANCE_TYPES.len()).map(|i| {
                        let insurance_index = insurance_index.clone();
                        html! {
                            <button
                                class={classes!("dot", (i == index).then_some("active"))}
                                aria-label={format!("Show insurance {}", i + 1)}
                                onclick={Callback::from(move |_: MouseEvent| insurance_index.set(i))}
                            />
                        }
                    }) }
                </div>
            </div>
        }
    } else {
        html! {
            <div class="insurance-grid">
                { for INSURANCE_TYPES.iter().enumerate().map(|(i, insurance)| insurance_card(insurance, open_read_more(i))) }
            </div>
        }
    };

    let current_testimonial = TESTIMONIALS.get(*testimonial);

    html! {
        <div class="landing">
            <style>
                {r#"
                    .landing { color: #ffffff; }
                    .section { max-width: 72rem; margin: 0 auto; padding: 5rem 1.5rem; }
                    .section h2 { font-size: 2rem; font-weight: 700; text-align: center; margin-bottom: 2.5rem; }
                    .reveal { opacity: 0; transform: translateY(40px); transition: opacity 0.8s ease-out, transform 0.8s ease-out; }
                    .reveal.visible { opacity: 1; transform: translateY(0); }
                    .hero {
                        min-height: 90vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        padding: 6rem 1.5rem 4rem;
                        background: linear-gradient(to bottom, rgba(0, 108, 103, 0.75), rgba(0, 0, 0, 0.55));
                    }
                    .hero h1 { font-size: clamp(2rem, 5vw, 3.5rem); font-weight: 800; max-width: 48rem; }
                    .hero p { font-size: 1.125rem; max-width: 40rem; margin: 1.5rem 0 2rem; opacity: 0.9; }
                    .timeline { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
                    .timeline-item { border-left: 3px solid #f4a261; padding-left: 1rem; }
                    .timeline-year { font-size: 1.5rem; font-weight: 700; color: #f4a261; }
                    .card-row { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
                    .glass-card {
                        padding: 1.5rem;
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                    }
                    .glass-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
                    .feature-icon { font-size: 2.5rem; }
                    .insurance-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
                    .insurance-card {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        padding: 1rem;
                        border-radius: 12px;
                        background: #ffffff;
                        color: #1f2937;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                        transition: transform 0.2s;
                    }
                    .insurance-card:hover { transform: translateY(-4px); }
                    .insurance-card img { width: 100%; height: 9rem; object-fit: cover; border-radius: 8px; }
                    .insurance-card .btn-link { color: #006c67; align-self: flex-start; }
                    .carousel-slide { animation: slideIn 0.5s ease-out; }
                    .insurance-carousel .dots, .testimonial .dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 1rem; }
                    .rating { text-align: center; }
                    .rating .stars { font-size: 2rem; color: #f4a261; }
                    .cta { text-align: center; }
                    .testimonial { max-width: 40rem; margin: 0 auto; text-align: center; }
                    .testimonial blockquote { font-size: 1.125rem; font-style: italic; margin: 1rem 0; }
                    .testimonial-nav { display: flex; justify-content: center; gap: 1rem; margin-top: 1rem; }
                    .counters { display: flex; justify-content: center; flex-wrap: wrap; gap: 3rem; }
                    .pricing-card { display: flex; flex-direction: column; align-items: center; gap: 1rem; text-align: center; }
                    .pricing-card .price { font-size: 1.75rem; font-weight: 700; color: #f4a261; }
                    .pricing-card ul { list-style: none; padding: 0; margin: 0; }
                    @media (max-width: 1024px) { .insurance-grid, .timeline { grid-template-columns: repeat(2, 1fr); } }
                    @media (max-width: 768px) { .card-row, .timeline { grid-template-columns: 1fr; } }
                "#}
            </style>
            <ParallaxBackground />

            <section class="hero">
                <h1>{"Drive with confidence. Insure with Hobbiton."}</h1>
                <p>{"Affordable motor insurance for Zambian drivers, quoted online in minutes."}</p>
                <button class="btn-light" onclick={open_quote.clone()}>{"Start My Quote"}</button>
            </section>

            <Reveal id="about">
                <h2>{"Our Journey"}</h2>
                <p class="lead">
                    {"Hobbiton started with a simple idea: insurance should be easy to understand and easy to buy. \
                      Today we help thousands of drivers across Zambia protect what matters."}
                </p>
            </Reveal>

            <Reveal id="milestones">
                <h2>{"Milestones"}</h2>
                <div class="timeline">
                    { for MILESTONES.iter().map(|m| html! {
                        <div class="timeline-item">
                            <span class="timeline-year">{m.year}</span>
                            <p>{m.event}</p>
                        </div>
                    }) }
                </div>
            </Reveal>

            <Reveal id="values">
                <h2>{"Our Core Values"}</h2>
                <div class="card-row">
                    { for CORE_VALUES.iter().map(|v| html! {
                        <div class="glass-card">
                            <h3>{v.title}</h3>
                            <p>{v.text}</p>
                        </div>
                    }) }
                </div>
            </Reveal>

            <Reveal id="insurance">
                <h2>{"Types of Motor Insurance"}</h2>
                { insurance_view }
            </Reveal>

            <Reveal id="plan-finder">
                <h2>{"Find the Right Plan"}</h2>
                <PlanFinder on_request_quote={on_plan_quote} />
            </Reveal>

            <Reveal id="why">
                <h2>{"Why Choose Hobbiton?"}</h2>
                <div class="card-row">
                    { for WHY_CHOOSE.iter().map(|f| html! {
                        <div class="glass-card">
                            <span class="feature-icon">{f.icon}</span>
                            <h3>{f.title}</h3>
                            <p>{f.text}</p>
                        </div>
                    }) }
                </div>
            </Reveal>

            <Reveal class="rating">
                <span class="stars">{stars(5)}</span>
                <p>{RATING_SUMMARY}</p>
            </Reveal>

            <Reveal id="faq">
                <h2>{"Frequently Asked Questions"}</h2>
                <Faq />
            </Reveal>

            <Reveal class="cta">
                <h2>{"Ready to get covered?"}</h2>
                <button class="btn-light" onclick={open_quote.clone()}>{"Get a Quote"}</button>
            </Reveal>

            <Reveal id="testimonials">
                <h2>{"What Our Customers Say"}</h2>
                if let Some(t) = current_testimonial {
                    <div class="testimonial">
                        <div key={*testimonial} class="carousel-slide">
                            <span class="stars">{stars(t.rating)}</span>
                            <blockquote>{format!("“{}”", t.comment)}</blockquote>
                            <p class="author">{"- "}{t.name}</p>
                        </div>
                        <div class="testimonial-nav">
                            <button class="btn-link" aria-label="Previous testimonial" onclick={step_testimonial(false)}>{"←"}</button>
                            <button class="btn-link" aria-label="Next testimonial" onclick={step_testimonial(true)}>{"→"}</button>
                        </div>
                    </div>
                }
            </Reveal>

            <Reveal id="numbers">
                <h2>{"By the Numbers"}</h2>
                <div class="counters">
                    { for COUNTERS.iter().map(|c| html! {
                        <Counter label={c.label} value={c.value} suffix={c.suffix} />
                    }) }
                </div>
            </Reveal>

            <Reveal id="pricing">
                <h2>{"Pricing"}</h2>
                <div class="card-row">
                    { for PRICING_TIERS.iter().map(|tier| html! {
                        <div class="glass-card pricing-card">
                            <h3>{tier.title}</h3>
                            <span class="price">{tier.price}</span>
                            <ul>
                                { for tier.features.iter().map(|f| html! { <li>{"✓ "}{*f}</li> }) }
                            </ul>
                            <button class="btn-light" onclick={open_quote.clone()}>{"Choose Plan"}</button>
                        </div>
                    }) }
                </div>
            </Reveal>

            <QuoteModal open={*quote_open} on_close={close_quote} />
            if let Some(index) = *read_more {
                <ReadMoreModal
                    slides={Rc::clone(&slides)}
                    start_index={index}
                    on_close={close_read_more}
                    on_index_change={track_read_more}
                />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_capped_at_five() {
        assert_eq!(stars(4), "★★★★");
        assert_eq!(stars(9), "★★★★★");
        assert_eq!(stars(0), "");
    }

    #[test]
    fn autoplay_wraps_and_stays_idle_when_disabled() {
        assert_eq!(autoplay_next(0, 3, true), Some(1));
        assert_eq!(autoplay_next(2, 3, true), Some(0));
        assert_eq!(autoplay_next(1, 3, false), None);
        assert_eq!(autoplay_next(0, 1, true), None);
        assert_eq!(autoplay_next(0, 0, true), None);
    }

    #[test]
    fn closing_a_route_opened_quote_returns_home() {
        assert_eq!(route_after_quote_close(true), Some(Route::Home));
        assert_eq!(route_after_quote_close(false), None);
    }
}
