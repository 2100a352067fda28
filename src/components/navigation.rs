use web_sys::MouseEvent;
use yew::prelude::*;

use crate::pages::portfolio::SECTIONS;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub is_scrolled: bool,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<MouseEvent>,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let menu_class = if props.menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let nav_link = |id: &'static str, label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(id);
        });
        html! {
            <a href={format!("#{}", id)} class="nav-link" {onclick}>
                { label }
            </a>
        }
    };

    let logo_click = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit("home");
        })
    };

    html! {
        <nav class={classes!("top-nav", props.is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={logo_click}>
                    {"Ananya Mehta"}
                </a>

                <button class="burger-menu" onclick={props.on_toggle_menu.clone()}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTIONS.iter().map(|section| nav_link(section.id, section.label)) }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        padding: 1rem 2rem;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(6, 11, 9, 0.92);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 1px 0 rgba(52, 211, 153, 0.15);
                        padding: 0.6rem 2rem;
                    }

                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 1.3rem;
                        color: #ffffff;
                        text-decoration: none;
                        letter-spacing: 0.05em;
                    }

                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.8rem;
                    }

                    .nav-link {
                        color: #c7cfc9;
                        text-decoration: none;
                        font-size: 0.95rem;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #34d399;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 6px;
                    }

                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        background: #e8ece9;
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-right {
                            position: fixed;
                            top: 0;
                            right: 0;
                            height: 100vh;
                            width: 70%;
                            max-width: 300px;
                            flex-direction: column;
                            justify-content: center;
                            background: rgba(4, 8, 6, 0.97);
                            transform: translateX(100%);
                            transition: transform 0.3s ease;
                        }

                        .nav-right.mobile-menu-open {
                            transform: translateX(0);
                        }

                        .nav-link {
                            font-size: 1.2rem;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
