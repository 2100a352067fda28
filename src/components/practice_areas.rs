use yew::prelude::*;

struct PracticeArea {
    icon: &'static str,
    title: &'static str,
    summary: &'static str,
    points: &'static [&'static str],
}

const AREAS: &[PracticeArea] = &[
    PracticeArea {
        icon: "📄",
        title: "Contract Lifecycle",
        summary: "End-to-end ownership of commercial agreements, from first draft to renewal.",
        points: &[
            "Service contracts and commercial agreements",
            "Standardized templates and negotiation playbooks",
            "Risk review and compliance sign-off",
        ],
    },
    PracticeArea {
        icon: "🌐",
        title: "Cross-Border Transactions",
        summary: "Deals and documentation spanning US and Indian jurisdictions.",
        points: &[
            "Multinational service and licensing arrangements",
            "US entity and tax-structure research",
            "Leases, licenses and agreements across jurisdictions",
        ],
    },
    PracticeArea {
        icon: "🔐",
        title: "Privacy & Data Protection",
        summary: "Website policies and privacy frameworks built for global compliance.",
        points: &[
            "GDPR and COPPA-compliant policy drafting",
            "Comparative privacy-law analysis (India / EU)",
            "Terms of service and data-processing agreements",
        ],
    },
    PracticeArea {
        icon: "🏛️",
        title: "Corporate & Commercial Advisory",
        summary: "Ongoing counsel for founders and in-house teams.",
        points: &[
            "Regulatory framework analysis and briefs",
            "Client consultations and legal research",
            "Responses to complex commercial inquiries",
        ],
    },
];

#[function_component(PracticeAreas)]
pub fn practice_areas() -> Html {
    html! {
        <div class="practice-section">
            <div class="section-kicker">{"What I Do"}</div>
            <h2 class="section-heading">
                {"Practice "}<span class="gradient-text">{"Areas"}</span>
            </h2>
            <div class="practice-grid">
                { for AREAS.iter().map(|area| html! {
                    <div class="practice-card glass-card">
                        <span class="practice-icon">{ area.icon }</span>
                        <h3>{ area.title }</h3>
                        <p>{ area.summary }</p>
                        <ul>
                            { for area.points.iter().map(|&point| html! {
                                <li>{ point }</li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                    .practice-section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 7rem 2rem;
                    }

                    .practice-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                        margin-top: 3rem;
                    }

                    .practice-card {
                        padding: 2.5rem;
                    }

                    .practice-icon {
                        font-size: 1.8rem;
                    }

                    .practice-card h3 {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-weight: 400;
                        font-size: 1.5rem;
                        color: #ffffff;
                        margin: 1rem 0 0.5rem 0;
                    }

                    .practice-card p {
                        color: #9aa39d;
                        line-height: 1.7;
                    }

                    .practice-card ul {
                        margin: 1.2rem 0 0 0;
                        padding-left: 1.1rem;
                        color: #c7cfc9;
                        line-height: 2;
                    }

                    @media (max-width: 768px) {
                        .practice-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
