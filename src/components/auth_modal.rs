use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::form_field::FormField;
use crate::components::loader::Loader;
use crate::components::notification::use_toaster;
use crate::config;
use crate::device::use_device_capabilities;
use crate::forms::auth::{AuthTab, LoginForm, Nationality, ResetForm, SignupForm, SIGNUP_TEXT_FIELDS};
use crate::forms::validation::{error_for, FieldError};
use crate::models::User;
use crate::scroll_lock::use_scroll_lock;
use crate::services::use_backend;

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_success: Callback<User>,
}

fn message(errors: &[FieldError], field: &str) -> Option<AttrValue> {
    error_for(errors, field).map(|m| AttrValue::from(m.to_string()))
}

#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let tab = use_state(|| AuthTab::Login);
    let login = use_state(LoginForm::default);
    let signup = use_state(SignupForm::default);
    let reset = use_state(ResetForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let loading = use_state(|| false);
    let generation = use_mut_ref(|| 0u32);
    let backend = use_backend();
    let toaster = use_toaster();
    let device = use_device_capabilities();

    use_scroll_lock(props.open);

    // Opening or closing drops everything typed so far and any pending work.
    {
        let tab = tab.clone();
        let login = login.clone();
        let signup = signup.clone();
        let reset = reset.clone();
        let errors = errors.clone();
        let loading = loading.clone();
        let generation = generation.clone();
        use_effect_with_deps(
            move |open| {
                *generation.borrow_mut() += 1;
                tab.set(AuthTab::Login);
                login.set(LoginForm::default());
                signup.set(SignupForm::default());
                reset.set(ResetForm::default());
                errors.set(Vec::new());
                loading.set(false);
                debug!("Auth modal open: {}", open);
                || ()
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let select_tab = |target: AuthTab| {
        let tab = tab.clone();
        let errors = errors.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            errors.set(Vec::new());
            tab.set(target);
        })
    };

    let on_login = {
        let login = login.clone();
        let errors = errors.clone();
        let loading = loading.clone();
        let generation = generation.clone();
        let backend = backend.clone();
        let toaster = toaster.clone();
        let on_success = props.on_success.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = login.validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(Vec::new());
            loading.set(true);

            let credentials = (*login).clone();
            let current = *generation.borrow();
            let loading = loading.clone();
            let generation = generation.clone();
            let backend = backend.clone();
            let toaster = toaster.clone();
            let on_success = on_success.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let result = backend.login(credentials).await;
                if *generation.borrow() != current {
                    return;
                }
                loading.set(false);
                match result {
                    Ok(user) => {
                        info!("Signed in as {}", user.name);
                        toaster.success("Login successful");
                        on_success.emit(user);
                        on_close.emit(());
                    }
                    Err(e) => {
                        info!("Sign in rejected: {}", e);
                        toaster.error(e.to_string());
                    }
                }
            });
        })
    };

    let on_signup = {
        let signup = signup.clone();
        let errors = errors.clone();
        let loading = loading.clone();
        let generation = generation.clone();
        let backend = backend.clone();
        let toaster = toaster.clone();
        let on_success = props.on_success.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = signup.validate(Local::now().date_naive());
            if !found.is_empty() {
                info!("Signup form has {} invalid field(s)", found.len());
                errors.set(found);
                return;
            }
            errors.set(Vec::new());
            loading.set(true);

            let form = (*signup).clone();
            let current = *generation.borrow();
            let loading = loading.clone();
            let generation = generation.clone();
            let backend = backend.clone();
            let toaster = toaster.clone();
            let on_success = on_success.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let result = backend.signup(form).await;
                if *generation.borrow() != current {
                    return;
                }
                match result {
                    Ok(user) => {
                        toaster.success("Account created! Logging in...");
                        TimeoutFuture::new(config::SIGNUP_CLOSE_DELAY_MS).await;
                        if *generation.borrow() != current {
                            return;
                        }
                        loading.set(false);
                        on_success.emit(user);
                        on_close.emit(());
                    }
                    Err(e) => {
                        loading.set(false);
                        toaster.error(e.to_string());
                    }
                }
            });
        })
    };

    let on_reset = {
        let reset = reset.clone();
        let tab = tab.clone();
        let errors = errors.clone();
        let loading = loading.clone();
        let generation = generation.clone();
        let backend = backend.clone();
        let toaster = toaster.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = reset.validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(Vec::new());
            loading.set(true);

            let email = reset.email.trim().to_string();
            let current = *generation.borrow();
            let reset = reset.clone();
            let tab = tab.clone();
            let loading = loading.clone();
            let generation = generation.clone();
            let backend = backend.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let result = backend.request_password_reset(email).await;
                if *generation.borrow() != current {
                    return;
                }
                loading.set(false);
                match result {
                    Ok(()) => {
                        toaster.success("Reset link sent");
                        reset.set(ResetForm::default());
                        tab.set(AuthTab::Login);
                    }
                    Err(e) => toaster.error(e.to_string()),
                }
            });
        })
    };

    let login_input = |apply: fn(&mut LoginForm, String)| {
        let login = login.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*login).clone();
            apply(&mut next, input.value());
            login.set(next);
        })
    };
    let signup_text = |field: &'static str| {
        let signup = signup.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*signup).clone();
            next.set_text(field, input.value());
            signup.set(next);
        })
    };
    let signup_flag = |apply: fn(&mut SignupForm, bool)| {
        let signup = signup.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*signup).clone();
            apply(&mut next, input.checked());
            signup.set(next);
        })
    };
    let on_nationality = {
        let signup = signup.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*signup).clone();
            next.nationality = Nationality::from_label(&select.value());
            signup.set(next);
        })
    };
    let on_reset_email = {
        let reset = reset.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            reset.set(ResetForm { email: input.value() });
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

    let panel = match *tab {
        AuthTab::Login => html! {
            <form class="auth-form" onsubmit={on_login} novalidate=true>
                <FormField label="Email" error={message(&errors, "email")}>
                    <input type="email" autocomplete="email" value={login.email.clone()}
                        oninput={login_input(|f, v| f.email = v)} />
                </FormField>
                <FormField label="Password" error={message(&errors, "password")}>
                    <input type="password" autocomplete="current-password" value={login.password.clone()}
                        oninput={login_input(|f, v| f.password = v)} />
                </FormField>
                <button type="submit" class="btn-auth" disabled={*loading}>{"Login"}</button>
                <a href="#" class="btn-link forgot-link" onclick={select_tab(AuthTab::Forgot)}>{"Forgot password?"}</a>
            </form>
        },
        AuthTab::SignUp => html! {
            <form class="auth-form" onsubmit={on_signup} novalidate=true>
                <div class="form-grid">
                    { for SIGNUP_TEXT_FIELDS.into_iter().map(|(field, label)| html! {
                        <FormField label={label} error={message(&errors, field)}>
                            <input type={if field == "email" { "email" } else { "text" }}
                                value={signup.text(field).to_string()}
                                oninput={signup_text(field)} />
                        </FormField>
                    }) }
                    <FormField label="Nationality" error={message(&errors, "nationality")}>
                        <select onchange={on_nationality}>
                            <option value="" selected={signup.nationality.is_none()} disabled=true>{"Select"}</option>
                            { for Nationality::ALL.into_iter().map(|n| html! {
                                <option value={n.label()} selected={signup.nationality == Some(n)}>{n.label()}</option>
                            }) }
                        </select>
                    </FormField>
                    <FormField label="Date of Birth" error={message(&errors, "dob")}>
                        <input type="date" value={signup.dob.clone()}
                            max={Local::now().date_naive().format("%Y-%m-%d").to_string()}
                            oninput={signup_text("dob")} />
                    </FormField>
                </div>
                <label class="check">
                    <input type="checkbox" checked={signup.add_card} onchange={signup_flag(|f, v| f.add_card = v)} />
                    {"Add credit card"}
                </label>
                if signup.add_card {
                    <FormField label="Card Number" error={message(&errors, "card_number")}>
                        <input type="text" inputmode="numeric" autocomplete="cc-number"
                            value={signup.card_number.clone()} oninput={signup_text("card_number")} />
                    </FormField>
                }
                <label class={classes!("check", error_for(&errors, "terms").is_some().then_some("has-error"))}>
                    <input type="checkbox" checked={signup.terms} onchange={signup_flag(|f, v| f.terms = v)} />
                    {"I agree to the Terms & Conditions"}
                </label>
                if let Some(error) = message(&errors, "terms") {
                    <span class="field-error">{error}</span>
                }
                <label class="check">
                    <input type="checkbox" checked={signup.newsletter} onchange={signup_flag(|f, v| f.newsletter = v)} />
                    {"Subscribe to newsletter"}
                </label>
                <button type="submit" class="btn-auth" disabled={*loading}>{"Create Account"}</button>
            </form>
        },
        AuthTab::Forgot => html! {
            <form class="auth-form" onsubmit={on_reset} novalidate=true>
                <p class="auth-hint">{"Enter your email and we'll send you a reset link."}</p>
                <FormField label="Email" error={message(&errors, "email")}>
                    <input type="email" autocomplete="email" value={reset.email.clone()} oninput={on_reset_email} />
                </FormField>
                <button type="submit" class="btn-auth" disabled={*loading}>{"Send Reset Link"}</button>
            </form>
        },
    };

    html! {
        <div class="modal-backdrop" onclick={close_on_backdrop}>
            <style>
                {r#"
                    .auth-modal {
                        position: relative;
                        width: 100%;
                        max-width: 560px;
                        max-height: 90vh;
                        overflow-y: auto;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: #ffffff;
                        color: #111827;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
                    }
                    .auth-tabs { display: flex; border-bottom: 1px solid #e5e7eb; margin-bottom: 1.5rem; }
                    .auth-tab {
                        flex: 1;
                        padding: 0.75rem;
                        background: none;
                        border: none;
                        border-bottom: 2px solid transparent;
                        font: inherit;
                        font-weight: 600;
                        color: #6b7280;
                        cursor: pointer;
                    }
                    .auth-tab.active { color: #006c67; border-bottom-color: #006c67; }
                    .auth-panel.animated { animation: tabIn 0.3s ease-out; }
                    @keyframes tabIn {
                        from { opacity: 0; transform: translateY(12px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .auth-form { display: flex; flex-direction: column; gap: 1rem; }
                    .form-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
                    .check { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; }
                    .auth-hint { color: #4b5563; font-size: 0.875rem; }
                    .forgot-link { align-self: center; }
                    .btn-auth {
                        height: 2.75rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: #006c67;
                        color: #ffffff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .btn-auth:disabled { opacity: 0.6; cursor: not-allowed; }
                    @media (max-width: 768px) { .form-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="auth-modal" role="dialog" aria-modal="true">
                <button class="modal-close" aria-label="Close" onclick={close}>{"✕"}</button>
                <div class="auth-tabs" role="tablist">
                    { for AuthTab::ALL.into_iter().map(|t| html! {
                        <button
                            role="tab"
                            class={classes!("auth-tab", (*tab == t).then_some("active"))}
                            aria-selected={(*tab == t).to_string()}
                            onclick={select_tab(t)}
                        >
                            {t.label()}
                        </button>
                    }) }
                </div>
                <div key={tab.label()} class={classes!("auth-panel", device.allows_animations().then_some("animated"))}>
                    if *loading {
                        <Loader />
                    } else {
                        { panel }
                    }
                </div>
            </div>
        </div>
    }
}
