use yew::prelude::*;

use crate::wizard::{Priority, Step, VehicleType, Wizard, WizardAnswers};

#[derive(Properties, PartialEq)]
pub struct PlanFinderProps {
    pub on_request_quote: Callback<WizardAnswers>,
}

fn option_button(label: &'static str, icon: (&'static str, &'static str), onclick: Callback<MouseEvent>) -> Html {
    let (glyph, color) = icon;
    html! {
        <button class="wizard-option" onclick={onclick}>
            <span class="wizard-icon" style={format!("color: {};", color)}>{glyph}</span>
            <span class="wizard-option-label">{label}</span>
        </button>
    }
}

/// The three-step "find the right plan" quiz.
#[function_component(PlanFinder)]
pub fn plan_finder(props: &PlanFinderProps) -> Html {
    let wizard = use_state(Wizard::default);

    let body = match wizard.step() {
        Step::VehicleType => html! {
            <div key="step1" class="wizard-step">
                <p class="wizard-question">{"What do you need insurance for?"}</p>
                <div class="wizard-grid">
                    { for VehicleType::ALL.into_iter().map(|vehicle| {
                        let wizard = wizard.clone();
                        option_button(
                            vehicle.label(),
                            vehicle.icon(),
                            Callback::from(move |_| wizard.set(wizard.choose_vehicle(vehicle))),
                        )
                    }) }
                </div>
            </div>
        },
        Step::Priority => html! {
            <div key="step2" class="wizard-step">
                <p class="wizard-question">{"What's most important to you?"}</p>
                <div class="wizard-grid">
                    { for Priority::ALL.into_iter().map(|priority| {
                        let wizard = wizard.clone();
                        option_button(
                            priority.label(),
                            priority.icon(),
                            Callback::from(move |_| wizard.set(wizard.choose_priority(priority))),
                        )
                    }) }
                </div>
            </div>
        },
        Step::Result => {
            let label = wizard.recommendation().map_or("Standard", |r| r.label());
            let request_quote = {
                let on_request_quote = props.on_request_quote.clone();
                let answers = wizard.answers().clone();
                Callback::from(move |_: MouseEvent| on_request_quote.emit(answers.clone()))
            };
            let start_over = {
                let wizard = wizard.clone();
                Callback::from(move |_: MouseEvent| wizard.set(wizard.start_over()))
            };
            html! {
                <div key="step3" class="wizard-step wizard-result">
                    <p class="wizard-recommendation">
                        {"We recommend the "}
                        <span class="highlight">{label}</span>
                        {" plan for you."}
                    </p>
                    <button class="btn-light" onclick={request_quote}>{"Request a Quote"}</button>
                    <button class="btn-link" onclick={start_over}>{"Start Over"}</button>
                </div>
            }
        }
    };

    html! {
        <div class="wizard-card">
            <style>
                {r#"
                    .wizard-card {
                        max-width: 42rem;
                        margin: 0 auto;
                        padding: 2rem;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 12px;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .wizard-step { animation: stepIn 0.5s ease-out; }
                    @keyframes stepIn {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .wizard-question { font-size: 1.125rem; font-weight: 500; margin-bottom: 1.5rem; }
                    .wizard-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
                    .wizard-option {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem;
                        border: none;
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.2);
                        color: #ffffff;
                        font: inherit;
                        cursor: pointer;
                        transition: transform 0.2s, background 0.2s;
                    }
                    .wizard-option:hover { transform: scale(1.05); background: rgba(255, 255, 255, 0.3); }
                    .wizard-icon { font-size: 3rem; line-height: 1; }
                    .wizard-option-label { font-weight: 600; text-align: center; }
                    .wizard-result { text-align: center; display: flex; flex-direction: column; align-items: center; gap: 1.5rem; }
                    .wizard-recommendation { font-size: 1.25rem; font-weight: 600; }
                    .wizard-recommendation .highlight { color: #4fd1c5; }
                    @media (max-width: 768px) { .wizard-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <p class="wizard-progress">{format!("Step {} of 3", wizard.step().number())}</p>
            { body }
        </div>
    }
}
