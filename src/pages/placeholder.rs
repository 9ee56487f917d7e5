use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const PAGE_STYLE: &str = r#"
    .placeholder-page {
        min-height: 70vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1.25rem;
        padding: 8rem 1.5rem 4rem;
        text-align: center;
        color: #ffffff;
        background: linear-gradient(to bottom, #006c67, #004d49);
    }
    .placeholder-page h1 { font-size: 2.5rem; font-weight: 700; }
    .placeholder-page p { max-width: 36rem; opacity: 0.9; }
"#;

#[derive(Properties, PartialEq)]
pub struct ProductPageProps {
    pub title: AttrValue,
    pub blurb: AttrValue,
}

/// Product pages exist so the navigation has somewhere to land.
#[function_component(ProductPage)]
pub fn product_page(props: &ProductPageProps) -> Html {
    html! {
        <div class="placeholder-page">
            <style>{PAGE_STYLE}</style>
            <h1>{&props.title}</h1>
            <p>{&props.blurb}</p>
            <p>{"More details are on the way."}</p>
            <Link<Route> to={Route::Quote} classes="btn-light">{"Get a Quote"}</Link<Route>>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="placeholder-page">
            <style>{PAGE_STYLE}</style>
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="btn-light">{"Back to Home"}</Link<Route>>
        </div>
    }
}
