use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub children: Children,
}

/// Label, control and the inline validation message underneath.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <label class={classes!("form-field", props.error.is_some().then_some("has-error"))}>
            <span class="form-label">{&props.label}</span>
            { for props.children.iter() }
            if let Some(error) = &props.error {
                <span class="field-error">{error}</span>
            }
        </label>
    }
}
