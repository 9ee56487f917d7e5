use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, FOOTER_LINKS, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #006c67;
                        color: #ffffff;
                        padding: 4rem 0;
                        animation: slideIn 0.8s ease-out;
                    }
                    .footer-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 3rem;
                    }
                    .footer-brand { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; }
                    .footer-brand span { font-size: 1.25rem; font-weight: 600; letter-spacing: 0.025em; }
                    .site-footer h3 { font-size: 1.125rem; font-weight: 600; margin-bottom: 1.5rem; }
                    .site-footer ul { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 0.75rem; }
                    .site-footer a { color: inherit; text-decoration: none; opacity: 0.9; transition: color 0.2s, transform 0.2s; }
                    .site-footer a:hover { color: #f4a261; }
                    .site-footer p, .site-footer li { font-size: 0.875rem; opacity: 0.9; }
                    .footer-note { margin-top: 4rem; text-align: center; font-size: 0.75rem; color: rgba(255, 255, 255, 0.6); user-select: none; }
                    @media (max-width: 1024px) { .footer-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (max-width: 768px) { .footer-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <img src="/hobbiton2.png" alt="Hobbiton Logo" width="40" height="40" />
                        <span>{"Hobbiton Technologies"}</span>
                    </div>
                    <p>{"Building digital solutions that elevate user experiences in savings, insurance, lending, and payments."}</p>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { for FOOTER_LINKS.iter().map(|link| html! {
                            <li><Link<crate::Route> to={link.route.clone()}>{link.label}</Link<crate::Route>></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3>{"Contact Us"}</h3>
                    <ul>
                        <li>{"📞 "}{CONTACT_PHONE}</li>
                        <li>{"✉️ "}{CONTACT_EMAIL}</li>
                        <li>{"📍 "}{CONTACT_ADDRESS}</li>
                    </ul>
                </div>

                <div>
                    <h3>{"Follow Us"}</h3>
                    <ul>
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <li>
                                <a href={social.url} target="_blank" rel="noopener noreferrer">
                                    {social.name}{" ↗"}
                                </a>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="footer-note">
                {format!("© {} Hobbiton Technologies Limited. All rights reserved.", year)}
            </div>
        </footer>
    }
}
