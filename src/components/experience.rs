use yew::prelude::*;

struct TimelineCard {
    anchor: &'static str,
    icon: &'static str,
    title: &'static str,
    org: &'static str,
    location: &'static str,
    span: &'static str,
    points: &'static [&'static str],
}

const EDUCATION: &[TimelineCard] = &[
    TimelineCard {
        anchor: "mumbai-edu",
        icon: "🎓",
        title: "Bachelor of Laws",
        org: "University of Mumbai",
        location: "Mumbai, India",
        span: "2015 - 2019",
        points: &[
            "Foundation in Indian Constitutional Law and Legal Procedures with honors.",
            "Active member of the University Legal Aid Society, providing assistance to underserved communities.",
            "Received merit scholarship for academic excellence throughout the program.",
        ],
    },
    TimelineCard {
        anchor: "bangalore-edu",
        icon: "🎓",
        title: "Master of Laws",
        org: "University of Bangalore",
        location: "Bangalore, India",
        span: "2019 - 2021",
        points: &[
            "Specialized in International Business Law with focus on cross-border transactions and regulatory frameworks.",
            "Conducted research on emerging legal challenges in global digital commerce and fintech regulations.",
            "Published paper on comparative analysis of privacy laws in India and the European Union.",
        ],
    },
    TimelineCard {
        anchor: "queens-edu",
        icon: "🎓",
        title: "Master of Laws (LL.M)",
        org: "Queens Law School",
        location: "New York, USA",
        span: "2021 - 2023",
        points: &[
            "Specialized in International Law and Cross-Border Legal Frameworks with focus on US-India relations.",
            "Published research on the evolution of contract law in digital economies across international jurisdictions.",
            "Graduated with honors and recognition for contributions to international legal scholarship.",
        ],
    },
];

const CAREER: &[TimelineCard] = &[
    TimelineCard {
        anchor: "writer-exp",
        icon: "🏢",
        title: "Sr. Legal Associate",
        org: "Writer Information",
        location: "Mumbai, India",
        span: "Apr 2022 - May 2023",
        points: &[
            "Managed end-to-end contract lifecycle from drafting to negotiations and renewal, ensuring legal compliance and risk mitigation.",
            "Coordinated with legal team and stakeholders to develop standardized contract templates and processes.",
            "Handled service contracts and commercial agreements for multinational transactions spanning US and Indian jurisdictions.",
        ],
    },
    TimelineCard {
        anchor: "ivmerchant-exp",
        icon: "🏢",
        title: "Advocate Associate",
        org: "I.V Merchant & Company",
        location: "Delhi, India",
        span: "May 2023 - Present",
        points: &[
            "Drafted and vetted comprehensive legal documents including leases, licenses, and agreements across international jurisdictions.",
            "Researched US laws including Small Business Entity Tax Pass Through Act and implemented compliance measures.",
            "Drafted website policies and contracts for global compliance with regulations including COPPA and GDPR.",
        ],
    },
    TimelineCard {
        anchor: "xyz-exp",
        icon: "🏢",
        title: "Legal Intern",
        org: "XYZ Legal",
        location: "New York, USA",
        span: "Jan 2023 - Present",
        points: &[
            "Assisted senior attorneys in researching cross-border legal precedents and preparing comprehensive briefs.",
            "Contributed to international compliance documentation and regulatory framework analysis.",
            "Participated in client consultations and developed draft responses to complex legal inquiries.",
        ],
    },
];

fn timeline_card(card: &TimelineCard, index: usize, last: bool) -> Html {
    // Cards alternate sides around the center line; even indexes sit left.
    let side = if index % 2 == 0 {
        "timeline-card left"
    } else {
        "timeline-card right"
    };
    let connector = if last {
        html! {}
    } else if index % 2 == 0 {
        html! {
            <div class="timeline-connection from-left">
                <div class="timeline-path"></div>
                <span class="timeline-plane">{"✈"}</span>
            </div>
        }
    } else {
        html! {
            <div class="timeline-connection from-right">
                <span class="timeline-plane flipped">{"✈"}</span>
                <div class="timeline-path"></div>
            </div>
        }
    };

    html! {
        <div id={card.anchor} class={classes!("glass-card", side)}>
            <div class="card-grid">
                <div class="card-meta">
                    <span class="card-icon">{ card.icon }</span>
                    <h3>{ card.title }</h3>
                    <p class="card-org">{ card.org }</p>
                    <p class="card-org">{ card.location }</p>
                    <p class="card-span">{"📅 "}{ card.span }</p>
                </div>
                <div class="card-points">
                    { for card.points.iter().map(|&point| html! {
                        <p>{ point }</p>
                    }) }
                </div>
            </div>
            { connector }
        </div>
    }
}

fn timeline(cards: &'static [TimelineCard]) -> Html {
    html! {
        <div class="timeline">
            <div class="timeline-line"></div>
            <div class="timeline-cards">
                { for cards.iter().enumerate().map(|(index, card)| {
                    timeline_card(card, index, index + 1 == cards.len())
                }) }
            </div>
        </div>
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    html! {
        <div class="experience-section">
            <div class="experience-intro">
                <p>
                    {"My journey in international legal practice has taken me from academic excellence to specialized practice, building expertise across jurisdictions while crafting innovative legal solutions for diverse clients."}
                </p>
            </div>

            <div class="experience-block">
                <div class="section-kicker">{"Academic Path"}</div>
                <h2 class="section-heading">
                    <span class="gradient-text">{"Education"}</span>
                </h2>
                { timeline(EDUCATION) }
            </div>

            <div class="experience-block">
                <div class="section-kicker">{"Career Journey"}</div>
                <h2 class="section-heading">
                    {"Professional "}<span class="gradient-text">{"Experience"}</span>
                </h2>
                { timeline(CAREER) }
            </div>

            <style>
                {r#"
                    .experience-section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 7rem 2rem;
                        position: relative;
                    }

                    .experience-intro {
                        max-width: 720px;
                        margin: 0 auto 5rem auto;
                        text-align: center;
                    }

                    .experience-intro p {
                        color: #c7cfc9;
                        font-size: 1.25rem;
                        font-style: italic;
                        line-height: 1.8;
                    }

                    .experience-block {
                        margin-bottom: 6rem;
                    }

                    .timeline {
                        position: relative;
                        margin-top: 3rem;
                    }

                    .timeline-line {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 1px;
                        height: 100%;
                        background: linear-gradient(to bottom,
                            transparent,
                            rgba(16, 185, 129, 0.3),
                            transparent);
                    }

                    .timeline-cards {
                        display: flex;
                        flex-direction: column;
                        gap: 5rem;
                    }

                    .timeline-card {
                        position: relative;
                        padding: 2.5rem;
                        width: calc(50% - 24px);
                    }

                    .timeline-card.left {
                        margin-right: auto;
                    }

                    .timeline-card.right {
                        margin-left: auto;
                    }

                    .card-grid {
                        display: grid;
                        grid-template-columns: 1fr 2fr;
                        gap: 2rem;
                    }

                    .card-icon {
                        font-size: 1.6rem;
                    }

                    .card-meta h3 {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-weight: 400;
                        font-size: 1.4rem;
                        color: #ffffff;
                        margin: 0.8rem 0;
                    }

                    .card-org {
                        color: #c7cfc9;
                        font-weight: 500;
                        margin: 0.2rem 0;
                    }

                    .card-span {
                        color: #9aa39d;
                        font-size: 0.9rem;
                        margin-top: 0.8rem;
                    }

                    .card-points {
                        border-left: 1px solid rgba(52, 211, 153, 0.15);
                        padding-left: 1.5rem;
                    }

                    .card-points p {
                        color: #9aa39d;
                        line-height: 1.8;
                        margin: 0 0 1.2rem 0;
                    }

                    .timeline-connection {
                        position: absolute;
                        bottom: -64px;
                        display: flex;
                        align-items: center;
                        z-index: 10;
                    }

                    .timeline-connection.from-left {
                        left: 50%;
                        right: -40%;
                    }

                    .timeline-connection.from-right {
                        right: 50%;
                        left: -40%;
                    }

                    .timeline-path {
                        flex: 1;
                        height: 3px;
                        background: linear-gradient(to right,
                            rgba(16, 185, 129, 0.6),
                            rgba(52, 211, 153, 0.9));
                        box-shadow: 0 0 10px rgba(52, 211, 153, 0.8);
                    }

                    .timeline-plane {
                        font-size: 1.8rem;
                        color: #34d399;
                        filter: drop-shadow(0 0 8px rgba(52, 211, 153, 0.9));
                    }

                    .timeline-plane.flipped {
                        transform: scaleX(-1);
                    }

                    @media (max-width: 1024px) {
                        .timeline-line,
                        .timeline-connection {
                            display: none;
                        }

                        .timeline-card {
                            width: auto;
                        }

                        .card-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
