use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::form_field::FormField;
use crate::components::loader::Loader;
use crate::components::notification::use_toaster;
use crate::config;
use crate::forms::card::{format_card_number, format_expiry};
use crate::forms::quote::{PaymentMethod, QuoteForm};
use crate::forms::validation::{error_for, FieldError};
use crate::scroll_lock::use_scroll_lock;
use crate::services::use_backend;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Properties, PartialEq)]
pub struct QuoteModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

fn file_names(input: &HtmlInputElement) -> Vec<String> {
    input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).map(|f| f.name()).collect())
        .unwrap_or_default()
}

#[function_component(QuoteModal)]
pub fn quote_modal(props: &QuoteModalProps) -> Html {
    let form = use_state(QuoteForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let phase = use_state(|| Phase::Editing);
    // Bumped whenever the modal opens or closes so late completions are dropped.
    let generation = use_mut_ref(|| 0u32);
    let backend = use_backend();
    let toaster = use_toaster();

    use_scroll_lock(props.open);

    {
        let form = form.clone();
        let errors = errors.clone();
        let phase = phase.clone();
        let generation = generation.clone();
        use_effect_with_deps(
            move |open| {
                *generation.borrow_mut() += 1;
                form.set(QuoteForm::default());
                errors.set(Vec::new());
                phase.set(Phase::Editing);
                debug!("Quote modal open: {}", open);
                || ()
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let text = |apply: fn(&mut QuoteForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let files = |apply: fn(&mut QuoteForm, Vec<String>)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, file_names(&input));
            form.set(next);
        })
    };
    let on_payment_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.payment_method = PaymentMethod::from_value(&select.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let phase = phase.clone();
        let generation = generation.clone();
        let backend = backend.clone();
        let toaster = toaster.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let today = Local::now().date_naive();
            let request = match form.to_request(today) {
                Ok(request) => request,
                Err(found) => {
                    info!("Quote form has {} invalid field(s)", found.len());
                    errors.set(found);
                    return;
                }
            };
            errors.set(Vec::new());
            phase.set(Phase::Submitting);

            let current = *generation.borrow();
            let form = form.clone();
            let phase = phase.clone();
            let generation = generation.clone();
            let backend = backend.clone();
            let toaster = toaster.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let result = backend.submit_quote(request).await;
                if *generation.borrow() != current {
                    return;
                }
                match result {
                    Ok(()) => {
                        phase.set(Phase::Submitted);
                        toaster.success("Quote submitted successfully");
                        form.set(QuoteForm::default());
                        TimeoutFuture::new(config::QUOTE_SUCCESS_HOLD_MS).await;
                        if *generation.borrow() == current {
                            on_close.emit(());
                        }
                    }
                    Err(e) => {
                        warn!("Quote submission failed: {}", e);
                        phase.set(Phase::Editing);
                        toaster.error(e.to_string());
                    }
                }
            });
        })
    };

    let err = |field: &str| error_for(&errors, field).map(|m| AttrValue::from(m.to_string()));
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
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let card_type = form.card.card_type();

    let body = match *phase {
        Phase::Submitting => html! { <Loader label="Submitting your quote..." /> },
        Phase::Submitted => html! {
            <div class="quote-success">
                <span class="success-icon">{"✔"}</span>
                <p>{"Submission Successful!"}</p>
            </div>
        },
        Phase::Editing => html! {
            <form class="quote-form" onsubmit={onsubmit} novalidate=true>
                <div class="form-row">
                    <FormField label="Full Name" error={err("full_name")}>
                        <input type="text" placeholder="e.g. Pumulo Mubiana" value={form.full_name.clone()}
                            oninput={text(|f, v| f.full_name = v)} />
                    </FormField>
                    <FormField label="Email Address" error={err("email")}>
                        <input type="email" placeholder="e.g. pumulomubiana@example.com" value={form.email.clone()}
                            oninput={text(|f, v| f.email = v)} />
                    </FormField>
                </div>
                <div class="form-row">
                    <FormField label="Car Make" error={err("car_make")}>
                        <input type="text" placeholder="e.g. Toyota" value={form.car_make.clone()}
                            oninput={text(|f, v| f.car_make = v)} />
                    </FormField>
                    <FormField label="Car Model" error={err("car_model")}>
                        <input type="text" placeholder="e.g. Corolla" value={form.car_model.clone()}
                            oninput={text(|f, v| f.car_model = v)} />
                    </FormField>
                </div>
                <div class="form-row">
                    <FormField label="Year" error={err("year")}>
                        <input type="number" placeholder="e.g. 2022" value={form.year.clone()}
                            oninput={text(|f, v| f.year = v)} />
                    </FormField>
                    <FormField label="Preferred Payment Method" error={err("payment_method")}>
                        <select onchange={on_payment_change}>
                            <option value="" selected={form.payment_method.is_none()} disabled=true>{"Choose method"}</option>
                            { for PaymentMethod::ALL.into_iter().map(|method| html! {
                                <option value={method.value()} selected={form.payment_method == Some(method)}>
                                    {method.label()}
                                </option>
                            }) }
                        </select>
                    </FormField>
                </div>

                {
                    match form.payment_method {
                        Some(method) if method.is_mobile_money() => html! {
                            <FormField label={format!("{} Number", method.label())} error={err("mobile_number")}>
                                <input type="tel" placeholder="e.g. 0977 000 000" value={form.mobile_number.clone()}
                                    oninput={text(|f, v| f.mobile_number = v)} />
                            </FormField>
                        },
                        Some(PaymentMethod::Card) => html! {
                            <fieldset class="card-subform">
                                <legend>{"Card Details"}</legend>
                                <FormField label="Cardholder Name" error={err("card_holder")}>
                                    <input type="text" autocomplete="cc-name" value={form.card.holder.clone()}
                                        oninput={text(|f, v| f.card.holder = v)} />
                                </FormField>
                                <FormField label="Card Number" error={err("card_number")}>
                                    <div class="card-number">
                                        <input type="text" inputmode="numeric" autocomplete="cc-number"
                                            placeholder="1234 5678 9012 3456" value={form.card.number.clone()}
                                            oninput={text(|f, v| f.card.number = format_card_number(&v))} />
                                        if let Some(card_type) = card_type {
                                            <img class="card-logo" src={card_type.logo()} alt={card_type.label()} title={card_type.label()} />
                                        }
                                    </div>
                                </FormField>
                                <div class="form-row">
                                    <FormField label="Expiry" error={err("card_expiry")}>
                                        <input type="text" inputmode="numeric" autocomplete="cc-exp" placeholder="MM/YY"
                                            value={form.card.expiry.clone()}
                                            oninput={text(|f, v| f.card.expiry = format_expiry(&v))} />
                                    </FormField>
                                    <FormField label="CVV" error={err("card_cvv")}>
                                        <input type="password" inputmode="numeric" autocomplete="cc-csc"
                                            maxlength={card_type.map_or(3, |c| c.cvv_len()).to_string()}
                                            value={form.card.cvv.clone()}
                                            oninput={text(|f, v| f.card.cvv = v.chars().filter(char::is_ascii_digit).collect())} />
                                    </FormField>
                                </div>
                            </fieldset>
                        },
                        _ => html! {},
                    }
                }

                <div class="form-row">
                    <FormField label="Cover Start Date" error={err("cover_start")}>
                        <input type="date" min={today.clone()} value={form.cover_start.clone()}
                            oninput={text(|f, v| f.cover_start = v)} />
                    </FormField>
                    <FormField label="Cover End Date" error={err("cover_end")}>
                        <input type="date" min={today} value={form.cover_end.clone()}
                            oninput={text(|f, v| f.cover_end = v)} />
                    </FormField>
                </div>
                <div class="form-row">
                    <FormField label="Upload Vehicle Image" error={err("vehicle_image")}>
                        <input type="file" accept="image/*" onchange={files(|f, names| f.vehicle_images = names)} />
                    </FormField>
                    <FormField label="Upload NRC / Driver’s License" error={err("id_document")}>
                        <input type="file" accept="image/*,application/pdf" onchange={files(|f, names| f.id_documents = names)} />
                    </FormField>
                </div>
                <button type="submit" class="btn-submit">{"Submit Quote"}</button>
            </form>
        },
    };

    html! {
        <div class="modal-backdrop" onclick={close_on_backdrop}>
            <style>
                {r#"
                    .quote-modal {
                        position: relative;
                        width: 100%;
                        max-width: 620px;
                        max-height: 90vh;
                        overflow-y: auto;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.85);
                        backdrop-filter: blur(16px);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: #111827;
                        animation: modalIn 0.3s ease-out;
                    }
                    .quote-modal h2 { text-align: center; font-size: 1.5rem; font-weight: 700; margin-bottom: 1.5rem; }
                    .quote-form { display: flex; flex-direction: column; gap: 1rem; }
                    .card-subform { border: 1px solid rgba(0, 0, 0, 0.1); border-radius: 0.75rem; padding: 1rem; display: flex; flex-direction: column; gap: 1rem; }
                    .card-number { position: relative; }
                    .card-logo { position: absolute; right: 0.5rem; top: 50%; transform: translateY(-50%); height: 1.5rem; }
                    .btn-submit {
                        width: 100%;
                        height: 3rem;
                        margin-top: 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: #000000;
                        color: #ffffff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .btn-submit:hover { opacity: 0.8; }
                    .quote-success { display: flex; flex-direction: column; align-items: center; padding: 4rem 0; }
                    .success-icon { font-size: 4rem; color: #4ade80; animation: bounce 1s infinite; }
                    @keyframes bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-12px); } }
                "#}
            </style>
            <div class="quote-modal" role="dialog" aria-modal="true">
                <button class="modal-close" aria-label="Close" onclick={close}>{"✕"}</button>
                <h2>{"Request a Motor Insurance Quote"}</h2>
                { body }
            </div>
        </div>
    }
}
