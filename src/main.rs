use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod models;
mod wizard;
mod carousel;
mod services;
mod scroll_lock;
mod device;
mod hooks;
mod forms {
    pub mod validation;
    pub mod card;
    pub mod quote;
    pub mod auth;
}
mod components {
    pub mod notification;
    pub mod loader;
    pub mod form_field;
    pub mod counter;
    pub mod parallax;
    pub mod header;
    pub mod footer;
    pub mod faq;
    pub mod plan_finder;
    pub mod read_more_modal;
    pub mod quote_modal;
    pub mod auth_modal;
}
mod pages {
    pub mod landing;
    pub mod placeholder;
}
mod admin {
    pub mod dashboard;
}

use admin::dashboard::AdminDashboard;
use components::{
    auth_modal::AuthModal,
    footer::Footer,
    header::Header,
    notification::{Notification, Toast, ToastKind, Toaster},
};
use models::{Session, User};
use pages::{
    landing::Landing,
    placeholder::{NotFound, ProductPage},
};
use services::BackendHandle;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/quote")]
    Quote,
    #[at("/insurance")]
    Insurance,
    #[at("/savings")]
    Savings,
    #[at("/loans")]
    Loans,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Quote => {
            info!("Rendering Home page with quote modal");
            html! { <Landing open_quote_on_mount=true /> }
        }
        Route::Insurance => {
            info!("Rendering Insurance page");
            html! {
                <ProductPage
                    title="Insurance"
                    blurb="Motor cover for private cars, fleets, motorbikes and taxis."
                />
            }
        }
        Route::Savings => {
            info!("Rendering Savings page");
            html! {
                <ProductPage
                    title="Savings"
                    blurb="Goal-based savings plans that grow with you."
                />
            }
        }
        Route::Loans => {
            info!("Rendering Loans page");
            html! {
                <ProductPage
                    title="Loans"
                    blurb="Fast, transparent lending for individuals and small businesses."
                />
            }
        }
        Route::Dashboard => {
            info!("Rendering Dashboard page");
            html! { <AdminDashboard /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let user = use_state(|| None::<User>);
    let show_auth = use_state(|| false);
    let toast = use_state(|| None::<Toast>);
    let next_toast_id = use_mut_ref(|| 0u32);
    let backend = use_state(BackendHandle::default);

    let toaster = {
        let toast = toast.clone();
        Toaster(Callback::from(move |(kind, message): (ToastKind, String)| {
            let id = {
                let mut next = next_toast_id.borrow_mut();
                *next += 1;
                *next
            };
            match kind {
                ToastKind::Success => info!("Toast: {}", message),
                ToastKind::Error => warn!("Toast: {}", message),
            }
            toast.set(Some(Toast { id, kind, message }));
        }))
    };
    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |id: u32| {
            if (*toast).as_ref().map(|t| t.id) == Some(id) {
                toast.set(None);
            }
        })
    };

    let open_auth = {
        let show_auth = show_auth.clone();
        Callback::from(move |_| {
            info!("Opening auth modal");
            show_auth.set(true);
        })
    };
    let close_auth = {
        let show_auth = show_auth.clone();
        Callback::from(move |_| show_auth.set(false))
    };
    let handle_login = {
        let user = user.clone();
        Callback::from(move |signed_in: User| user.set(Some(signed_in)))
    };
    let handle_logout = {
        let user = user.clone();
        let toaster = toaster.clone();
        Callback::from(move |_| {
            info!("Signing out");
            user.set(None);
            toaster.success("Logged out");
        })
    };

    let session = Session {
        user: (*user).clone(),
        request_login: open_auth.clone(),
    };

    html! {
        <ContextProvider<BackendHandle> context={(*backend).clone()}>
            <ContextProvider<Toaster> context={toaster}>
                <ContextProvider<Session> context={session}>
                    <BrowserRouter>
                        <Header user={(*user).clone()} on_login={open_auth} on_logout={handle_logout} />
                        <main>
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                        <AuthModal open={*show_auth} on_close={close_auth} on_success={handle_login} />
                    </BrowserRouter>
                    <Notification toast={(*toast).clone()} on_dismiss={dismiss_toast} />
                </ContextProvider<Session>>
            </ContextProvider<Toaster>>
        </ContextProvider<BackendHandle>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
