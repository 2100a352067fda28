use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-backdrop"></div>
            <div class="hero-content">
                <p class="hero-kicker">{"Advocate & International Legal Consultant"}</p>
                <h1 class="hero-title">
                    {"Counsel that travels "}
                    <span class="gradient-text">{"across borders"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Contracts, compliance and corporate advisory for businesses operating between Indian, US and European jurisdictions."}
                </p>
                <div class="hero-cta-group">
                    <a href="#contact" class="hero-cta">{"Work With Me"}</a>
                    <a href="#practice" class="hero-link">{"Explore practice areas"}</a>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                    }

                    .hero-backdrop {
                        position: absolute;
                        top: -20%;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 60vw;
                        height: 60vw;
                        background: rgba(16, 185, 129, 0.07);
                        filter: blur(120px);
                        border-radius: 50%;
                        pointer-events: none;
                    }

                    .hero-content {
                        position: relative;
                        max-width: 760px;
                        padding: 0 2rem;
                    }

                    .hero-kicker {
                        text-transform: uppercase;
                        letter-spacing: 0.25em;
                        font-size: 0.85rem;
                        color: rgba(52, 211, 153, 0.8);
                        margin-bottom: 1.5rem;
                    }

                    .hero-title {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-weight: 300;
                        font-size: 3.8rem;
                        line-height: 1.15;
                        color: #ffffff;
                        margin: 0 0 1.5rem 0;
                    }

                    .hero-subtitle {
                        font-size: 1.2rem;
                        line-height: 1.7;
                        color: #9aa39d;
                        max-width: 560px;
                        margin: 0 auto 2.5rem auto;
                    }

                    .hero-cta-group {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                        flex-wrap: wrap;
                    }

                    .hero-cta {
                        display: inline-block;
                        padding: 0.9rem 2.2rem;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #10b981, #34d399);
                        color: #04110b;
                        font-weight: 600;
                        text-decoration: none;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }

                    .hero-cta:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 8px 24px rgba(16, 185, 129, 0.35);
                    }

                    .hero-link {
                        color: #c7cfc9;
                        text-decoration: underline;
                        text-underline-offset: 4px;
                    }

                    .hero-link:hover {
                        color: #34d399;
                    }

                    @media (max-width: 768px) {
                        .hero-title {
                            font-size: 2.6rem;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
