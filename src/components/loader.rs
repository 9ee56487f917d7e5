use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    html! {
        <div class="loader">
            <span class="loading-spinner"></span>
            if let Some(label) = &props.label {
                <p class="loader-label">{label}</p>
            }
        </div>
    }
}
