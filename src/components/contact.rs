use yew::prelude::*;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-section">
            <div class="section-kicker">{"Get in Touch"}</div>
            <h2 class="section-heading">
                {"Let's discuss your "}<span class="gradient-text">{"matter"}</span>
            </h2>
            <p class="contact-lead">
                {"Available for engagements in India and the United States, remote or on-site. Initial consultations are free of charge."}
            </p>
            <div class="contact-grid">
                <a class="contact-card glass-card" href="mailto:ananya@mehtalegal.in">
                    <span class="contact-icon">{"📧"}</span>
                    <span class="contact-label">{"Email"}</span>
                    <span class="contact-value">{"ananya@mehtalegal.in"}</span>
                </a>
                <a class="contact-card glass-card" href="tel:+919820012345">
                    <span class="contact-icon">{"📞"}</span>
                    <span class="contact-label">{"Phone"}</span>
                    <span class="contact-value">{"+91 98200 12345"}</span>
                </a>
                <div class="contact-card glass-card">
                    <span class="contact-icon">{"📍"}</span>
                    <span class="contact-label">{"Offices"}</span>
                    <span class="contact-value">{"Delhi, India · New York, USA"}</span>
                </div>
            </div>
            <style>
                {r#"
                    .contact-section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 7rem 2rem;
                        text-align: center;
                    }

                    .contact-section .section-kicker {
                        justify-content: center;
                    }

                    .contact-lead {
                        color: #9aa39d;
                        font-size: 1.1rem;
                        max-width: 520px;
                        margin: 0 auto 3rem auto;
                        line-height: 1.8;
                    }

                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }

                    .contact-card {
                        padding: 2.2rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        text-decoration: none;
                    }

                    .contact-icon {
                        font-size: 1.6rem;
                    }

                    .contact-label {
                        color: #9aa39d;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        font-size: 0.75rem;
                    }

                    .contact-value {
                        color: #e8ece9;
                    }

                    a.contact-card:hover .contact-value {
                        color: #34d399;
                    }

                    @media (max-width: 768px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
