use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::FAQ_ENTRIES;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div id={format!("faq-{}", props.index + 1)} class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

/// Accordion over the FAQ entries; opening one item closes the others.
#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |index: usize| {
            let next = if *open == Some(index) { None } else { Some(index) };
            open.set(next);
        })
    };

    html! {
        <div class="faq-list">
            <style>
                {r#"
                    .faq-list { max-width: 56rem; margin: 0 auto; }
                    .faq-item {
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 1.25rem;
                        background: none;
                        border: none;
                        color: #ffffff;
                        font: inherit;
                        font-weight: 500;
                        text-align: left;
                        cursor: pointer;
                    }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        padding: 0 1.25rem;
                        color: #e5e7eb;
                        font-size: 0.875rem;
                        transition: max-height 0.3s ease, padding 0.3s ease;
                    }
                    .faq-item.open .faq-answer {
                        max-height: 20rem;
                        padding: 0 1.25rem 1rem;
                    }
                "#}
            </style>
            { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| html! {
                <FaqItem
                    key={index}
                    index={index}
                    question={entry.question}
                    answer={entry.answer}
                    open={*open == Some(index)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
        </div>
    }
}
