use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::PRODUCT_LINKS;
use crate::hooks::use_window_scroll_y;
use crate::models::User;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub user: Option<User>,
    pub on_login: Callback<()>,
    pub on_logout: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct AvatarProps {
    user: User,
}

#[function_component(Avatar)]
fn avatar(props: &AvatarProps) -> Html {
    match &props.user.avatar_url {
        Some(url) => html! { <img class="avatar" src={url.clone()} alt={props.user.name.clone()} /> },
        None => html! { <span class="avatar avatar-initial">{props.user.initial()}</span> },
    }
}

fn role_tag(user: &User) -> Html {
    let class = if user.is_admin() { "role-tag admin" } else { "role-tag" };
    html! { <span class={class}>{user.role.as_str()}</span> }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { user, on_login, on_logout } = props;
    let drawer_open = use_state(|| false);
    let products_open = use_state(|| false);
    let user_menu_open = use_state(|| false);
    let scrolled = use_window_scroll_y() > f64::from(config::HEADER_SCROLL_THRESHOLD);
    let current = use_route::<Route>();

    let products_ref = use_node_ref();
    let user_menu_ref = use_node_ref();
    {
        let products_open = products_open.clone();
        use_click_away(products_ref.clone(), move |_: Event| products_open.set(false));
    }
    {
        let user_menu_open = user_menu_open.clone();
        use_click_away(user_menu_ref.clone(), move |_: Event| user_menu_open.set(false));
    }

    let link_class = |route: &Route| {
        classes!("nav-link", (current.as_ref() == Some(route)).then_some("active"))
    };

    let open_auth = {
        let on_login = on_login.clone();
        let drawer_open = drawer_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            drawer_open.set(false);
            on_login.emit(());
        })
    };

    let logout = {
        let on_logout = on_logout.clone();
        let drawer_open = drawer_open.clone();
        let user_menu_open = user_menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            drawer_open.set(false);
            user_menu_open.set(false);
            on_logout.emit(());
        })
    };

    let show_products = {
        let products_open = products_open.clone();
        Callback::from(move |_: MouseEvent| products_open.set(true))
    };
    let hide_products = {
        let products_open = products_open.clone();
        Callback::from(move |_: MouseEvent| products_open.set(false))
    };
    let toggle_user_menu = {
        let user_menu_open = user_menu_open.clone();
        Callback::from(move |_: MouseEvent| user_menu_open.set(!*user_menu_open))
    };
    let open_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(true))
    };
    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(false))
    };

    let is_admin = user.as_ref().map_or(false, User::is_admin);

    html! {
        <header class={classes!("site-header", scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: #ffffff;
                        box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);
                        transition: box-shadow 0.3s ease;
                    }
                    .site-header.scrolled {
                        box-shadow: 0 6px 20px rgba(0, 0, 0, 0.15);
                    }
                    .header-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.75rem 1rem;
                    }
                    .header-logo img { height: 2rem; width: auto; }
                    .desktop-nav { display: flex; align-items: center; gap: 2rem; }
                    .nav-link { color: #374151; text-decoration: none; transition: color 0.2s; }
                    .nav-link:hover, .nav-link.active { color: #006c67; }
                    .nav-link.active { font-weight: 600; }
                    .dropdown { position: relative; }
                    .dropdown-trigger {
                        background: none;
                        border: none;
                        color: #374151;
                        cursor: pointer;
                        font: inherit;
                    }
                    .dropdown-menu {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        min-width: 10rem;
                        margin-top: 0.5rem;
                        background: #ffffff;
                        border-radius: 6px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                        overflow: hidden;
                        z-index: 20;
                        animation: slideIn 0.2s ease-out;
                    }
                    .dropdown-menu.right { left: auto; right: 0; }
                    .dropdown-menu a, .dropdown-menu button, .dropdown-menu .menu-label {
                        display: block;
                        width: 100%;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        color: #374151;
                        background: none;
                        border: none;
                        text-align: left;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .dropdown-menu .menu-label { color: #9ca3af; cursor: default; }
                    .dropdown-menu a:hover, .dropdown-menu button:hover { background: #006c67; color: #ffffff; }
                    .auth-buttons { display: flex; gap: 0.5rem; margin-left: 1.5rem; }
                    .btn-text { background: none; border: none; cursor: pointer; color: #374151; font: inherit; }
                    .btn-primary {
                        background: #006c67;
                        color: #ffffff;
                        border: none;
                        border-radius: 6px;
                        padding: 0.4rem 1rem;
                        cursor: pointer;
                        font: inherit;
                    }
                    .user-trigger { display: flex; align-items: center; gap: 0.5rem; cursor: pointer; background: none; border: none; }
                    .avatar { width: 1.75rem; height: 1.75rem; border-radius: 50%; object-fit: cover; }
                    .avatar-initial {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        background: #1677ff;
                        color: #ffffff;
                        font-size: 0.8rem;
                    }
                    .role-tag {
                        font-size: 0.75rem;
                        padding: 0 0.4rem;
                        border-radius: 4px;
                        border: 1px solid #91caff;
                        color: #1677ff;
                        background: #e6f4ff;
                    }
                    .role-tag.admin { border-color: #ffa39e; color: #cf1322; background: #fff1f0; }
                    .mobile-actions { display: none; align-items: center; gap: 1rem; }
                    .drawer-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        z-index: 60;
                    }
                    .drawer {
                        position: fixed;
                        top: 0;
                        right: 0;
                        height: 100%;
                        width: 85vw;
                        background: #ffffff;
                        z-index: 61;
                        padding: 1rem;
                        overflow-y: auto;
                        animation: drawerIn 0.25s ease-out;
                    }
                    @keyframes drawerIn { from { transform: translateX(100%); } to { transform: translateX(0); } }
                    .drawer-title { display: flex; align-items: center; gap: 0.5rem; color: #006c67; font-weight: 700; font-size: 1.125rem; }
                    .drawer-user {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.5rem 0 1rem;
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .drawer nav { display: flex; flex-direction: column; gap: 1rem; margin-top: 1rem; }
                    .drawer .sub-links { display: flex; flex-direction: column; gap: 0.75rem; padding-left: 1rem; }
                    @media (max-width: 768px) {
                        .desktop-nav { display: none; }
                        .mobile-actions { display: flex; }
                    }
                "#}
            </style>
            <div class="header-inner">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <img src="/hobbiton2.png" alt="Hobbiton Logo" />
                </Link<Route>>

                <nav class="desktop-nav">
                    <Link<Route> to={Route::Home} classes={link_class(&Route::Home)}>{"Home"}</Link<Route>>

                    <div class="dropdown" ref={products_ref} onmouseenter={show_products.clone()} onmouseleave={hide_products}>
                        <button
                            class="dropdown-trigger"
                            aria-haspopup="menu"
                            aria-expanded={products_open.to_string()}
                            onclick={show_products}
                        >
                            {"Products ▾"}
                        </button>
                        if *products_open {
                            <div class="dropdown-menu" role="menu">
                                { for PRODUCT_LINKS.iter().map(|link| html! {
                                    <Link<Route> to={link.route.clone()} classes="menu-item">{link.label}</Link<Route>>
                                }) }
                            </div>
                        }
                    </div>

                    <Link<Route> to={Route::Quote} classes={link_class(&Route::Quote)}>{"Get Quote"}</Link<Route>>

                    if is_admin {
                        <Link<Route> to={Route::Dashboard} classes={link_class(&Route::Dashboard)}>{"Dashboard"}</Link<Route>>
                    }

                    {
                        if let Some(user) = user {
                            html! {
                                <div class="dropdown" ref={user_menu_ref}>
                                    <button class="user-trigger" onclick={toggle_user_menu}>
                                        <Avatar user={user.clone()} />
                                        { role_tag(user) }
                                    </button>
                                    if *user_menu_open {
                                        <div class="dropdown-menu right" role="menu">
                                            <span class="menu-label">{&user.name}</span>
                                            if user.is_admin() {
                                                <Link<Route> to={Route::Dashboard}>{"Admin Dashboard"}</Link<Route>>
                                            }
                                            <button onclick={logout.clone()}>{"Logout"}</button>
                                        </div>
                                    }
                                </div>
                            }
                        } else {
                            html! {
                                <div class="auth-buttons">
                                    <button class="btn-text" onclick={open_auth.clone()}>{"Login"}</button>
                                    <button class="btn-primary" onclick={open_auth.clone()}>{"Sign Up"}</button>
                                </div>
                            }
                        }
                    }
                </nav>

                <div class="mobile-actions">
                    <button class="btn-text" aria-label="Account" onclick={open_auth.clone()}>{"👤"}</button>
                    <button class="btn-text" aria-label="Open menu" onclick={open_drawer}>{"☰"}</button>
                </div>
            </div>

            if *drawer_open {
                <div class="drawer-backdrop" onclick={close_drawer.clone()} />
                <aside class="drawer">
                    <div class="drawer-title">
                        <img src="/hobbiton2.png" alt="Hobbiton Logo" width="24" height="24" />
                        {"Hobbiton"}
                    </div>
                    {
                        if let Some(user) = user {
                            html! {
                                <div class="drawer-user">
                                    <div style="display: flex; align-items: center; gap: 0.5rem;">
                                        <Avatar user={user.clone()} />
                                        <div>
                                            <div>{&user.name}</div>
                                            { role_tag(user) }
                                        </div>
                                    </div>
                                    <button class="btn-text" onclick={logout.clone()}>{"Logout"}</button>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <nav onclick={close_drawer}>
                        <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                        <span class="nav-link">{"Products"}</span>
                        <div class="sub-links">
                            { for PRODUCT_LINKS.iter().map(|link| html! {
                                <Link<Route> to={link.route.clone()} classes="nav-link">{link.label}</Link<Route>>
                            }) }
                        </div>
                        <Link<Route> to={Route::Quote} classes="nav-link">{"Get Quote"}</Link<Route>>
                        if is_admin {
                            <Link<Route> to={Route::Dashboard} classes="nav-link">{"Admin Dashboard"}</Link<Route>>
                        }
                    </nav>
                    if user.is_none() {
                        <nav>
                            <button class="btn-text" onclick={open_auth.clone()}>{"Login"}</button>
                            <button class="btn-primary" onclick={open_auth}>{"Sign Up"}</button>
                        </nav>
                    }
                </aside>
            }
        </header>
    }
}
