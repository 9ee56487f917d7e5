use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::COUNTERS;
use crate::models::Session;
use crate::Route;

#[function_component]
pub fn AdminDashboard() -> Html {
    let session = use_context::<Session>().unwrap_or_default();

    let style = html! {
        <style>
            {r#"
                .admin-page {
                    min-height: 70vh;
                    padding: 8rem 1.5rem 4rem;
                    color: #ffffff;
                    background: linear-gradient(to bottom, #006c67, #003f3c);
                }
                .admin-inner { max-width: 64rem; margin: 0 auto; }
                .admin-inner h1 { font-size: 2rem; font-weight: 700; margin-bottom: 0.5rem; }
                .admin-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-top: 2rem; }
                .admin-stat { padding: 1.5rem; border-radius: 12px; background: rgba(255, 255, 255, 0.1); }
                .admin-stat strong { display: block; font-size: 2rem; color: #f4a261; }
                .admin-notice { text-align: center; display: flex; flex-direction: column; align-items: center; gap: 1rem; }
                @media (max-width: 768px) { .admin-stats { grid-template-columns: 1fr; } }
            "#}
        </style>
    };

    let Some(user) = session.user.as_ref().filter(|u| u.is_admin()) else {
        info!("Dashboard requested without admin rights");
        let login = {
            let request_login = session.request_login.clone();
            Callback::from(move |_: MouseEvent| request_login.emit(()))
        };
        return html! {
            <div class="admin-page">
                { style }
                <div class="admin-inner admin-notice">
                    <h1>{"Admins only"}</h1>
                    <p>{"You need an administrator account to view this page."}</p>
                    if session.user.is_none() {
                        <button class="btn-light" onclick={login}>{"Login"}</button>
                    }
                    <Link<Route> to={Route::Home} classes="btn-link">{"Back to Home"}</Link<Route>>
                </div>
            </div>
        };
    };

    html! {
        <div class="admin-page">
            { style }
            <div class="admin-inner">
                <h1>{format!("Welcome back, {}", user.name)}</h1>
                <p>{"Quote requests and customer accounts will show up here once a backend is connected."}</p>
                <div class="admin-stats">
                    { for COUNTERS.iter().map(|c| html! {
                        <div class="admin-stat">
                            <strong>{c.value}{c.suffix}</strong>
                            <span>{c.label}</span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
