use yew::prelude::*;

const STATS: &[(&str, &str)] = &[
    ("6+", "Years in legal practice"),
    ("200+", "Contracts drafted & negotiated"),
    ("3", "Jurisdictions of practice"),
    ("40+", "Clients across industries"),
];

#[function_component(Statistics)]
pub fn statistics() -> Html {
    html! {
        <div class="stats-section">
            <div class="stats-intro">
                <div class="section-kicker">{"About"}</div>
                <h2 class="section-heading">
                    {"Practice in "}<span class="gradient-text">{"numbers"}</span>
                </h2>
                <p>
                    {"From contract lifecycle management in Mumbai to cross-border advisory in New York, my work spans the agreements, policies and regulatory frameworks that let businesses operate in more than one legal system at once."}
                </p>
            </div>
            <div class="stats-grid">
                { for STATS.iter().map(|&(value, label)| html! {
                    <div class="stat-card glass-card">
                        <span class="stat-value gradient-text">{ value }</span>
                        <span class="stat-label">{ label }</span>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                    .stats-section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 7rem 2rem;
                    }

                    .stats-intro {
                        max-width: 640px;
                        margin-bottom: 4rem;
                    }

                    .stats-intro p {
                        color: #9aa39d;
                        font-size: 1.1rem;
                        line-height: 1.8;
                    }

                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }

                    .stat-card {
                        padding: 2.2rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.6rem;
                        text-align: center;
                    }

                    .stat-value {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 2.6rem;
                    }

                    .stat-label {
                        color: #9aa39d;
                        font-size: 0.95rem;
                    }

                    @media (max-width: 768px) {
                        .stats-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </div>
    }
}
