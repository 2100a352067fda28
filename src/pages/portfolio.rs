use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact::Contact;
use crate::components::experience::Experience;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navigation::Navigation;
use crate::components::practice_areas::PracticeAreas;
use crate::components::statistics::Statistics;
use crate::components::testimonials::Testimonials;
use crate::config;
use crate::lifecycle::{self, LoadingGate, ScrollMonitor};

/// One anchorable region of the page. Ids are stable and unique; the nav
/// menu targets them by id.
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub render: fn() -> Html,
}

fn hero_section() -> Html {
    html! { <Hero /> }
}

fn statistics_section() -> Html {
    html! { <Statistics /> }
}

fn practice_section() -> Html {
    html! { <PracticeAreas /> }
}

fn experience_section() -> Html {
    html! { <Experience /> }
}

fn testimonials_section() -> Html {
    html! { <Testimonials /> }
}

fn contact_section() -> Html {
    html! { <Contact /> }
}

pub const SECTIONS: &[Section] = &[
    Section {
        id: "home",
        label: "Home",
        render: hero_section,
    },
    Section {
        id: "about",
        label: "About",
        render: statistics_section,
    },
    Section {
        id: "practice",
        label: "Practice",
        render: practice_section,
    },
    Section {
        id: "experience",
        label: "Experience",
        render: experience_section,
    },
    Section {
        id: "testimonials",
        label: "Testimonials",
        render: testimonials_section,
    },
    Section {
        id: "contact",
        label: "Contact",
        render: contact_section,
    },
];

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let is_loading = use_state(|| true);
    let is_scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let is_loading = is_loading.clone();
        use_effect_with_deps(
            move |_| {
                let gate = LoadingGate::start(config::INTRO_OVERLAY_MS, move || {
                    info!("Intro overlay released");
                    is_loading.set(false);
                });
                move || drop(gate)
            },
            (),
        );
    }

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let monitor =
                    ScrollMonitor::attach(config::NAV_SCROLL_THRESHOLD_PX, move |past| {
                        is_scrolled.set(past);
                    });
                move || drop(monitor)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // The menu only closes when the anchor actually resolved; a stale id
    // leaves everything as it was.
    let on_navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |section_id: &'static str| {
            info!("Navigating to section {}", section_id);
            if lifecycle::navigate_to_section(section_id) {
                menu_open.set(false);
            }
        })
    };

    let shell_class = if *is_loading {
        "portfolio-shell veiled"
    } else {
        "portfolio-shell revealed"
    };

    html! {
        <>
            { if *is_loading {
                html! {
                    <div class="loading-overlay">
                        <span class="loading-mark">{"⚖"}</span>
                    </div>
                }
            } else {
                html! {}
            } }
            <div class={shell_class}>
                <Navigation
                    is_scrolled={*is_scrolled}
                    menu_open={*menu_open}
                    on_toggle_menu={toggle_menu}
                    on_navigate={on_navigate}
                />
                <main>
                    { for SECTIONS.iter().map(|section| html! {
                        <section id={section.id} key={section.id}>
                            { (section.render)() }
                        </section>
                    }) }
                </main>
                <Footer />
                <style>
                    {r#"
                        body {
                            margin: 0;
                            background: #060b09;
                            color: #e8ece9;
                            font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
                        }

                        .portfolio-shell {
                            min-height: 100vh;
                            background: #060b09;
                        }

                        .portfolio-shell.veiled {
                            opacity: 0;
                        }

                        .portfolio-shell.revealed {
                            opacity: 1;
                            transition: opacity 1s ease;
                        }

                        .loading-overlay {
                            position: fixed;
                            top: 0;
                            left: 0;
                            right: 0;
                            bottom: 0;
                            background: #030605;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            z-index: 50;
                        }

                        .loading-mark {
                            font-size: 3rem;
                            color: #34d399;
                            animation: overlay-spin 1.2s linear infinite;
                        }

                        @keyframes overlay-spin {
                            from { transform: rotate(0deg); }
                            to { transform: rotate(360deg); }
                        }

                        .portfolio-shell section {
                            scroll-margin-top: 74px;
                        }

                        .glass-card {
                            background: rgba(18, 28, 23, 0.72);
                            border: 1px solid rgba(52, 211, 153, 0.12);
                            border-radius: 16px;
                            backdrop-filter: blur(12px);
                            transition: box-shadow 0.5s ease, transform 0.5s ease;
                        }

                        .glass-card:hover {
                            box-shadow: 0 8px 40px rgba(16, 185, 129, 0.15);
                        }

                        .gradient-text {
                            background: linear-gradient(45deg, #ffffff, #34d399);
                            -webkit-background-clip: text;
                            -webkit-text-fill-color: transparent;
                        }

                        .section-heading {
                            font-family: Georgia, 'Times New Roman', serif;
                            font-weight: 300;
                            font-size: 2.8rem;
                            color: #ffffff;
                            margin: 0 0 1rem 0;
                        }

                        .section-kicker {
                            display: flex;
                            align-items: center;
                            gap: 1rem;
                            margin-bottom: 1rem;
                            text-transform: uppercase;
                            letter-spacing: 0.2em;
                            font-size: 0.85rem;
                            color: rgba(52, 211, 153, 0.8);
                        }

                        .section-kicker::before {
                            content: '';
                            width: 48px;
                            height: 1px;
                            background: rgba(52, 211, 153, 0.3);
                        }

                        @media (max-width: 768px) {
                            .section-heading {
                                font-size: 2.1rem;
                            }
                        }
                    "#}
                </style>
            </div>
        </>
    }
}
