use yew::prelude::*;

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Ananya's grasp of both Indian and US contract law saved our expansion months of back-and-forth. One counsel, two jurisdictions.",
        "Rohan K.",
        "Operations Director, SaaS platform",
    ),
    (
        "Precise, responsive and commercially minded. Our vendor agreements finally read like they were written for our business, not against it.",
        "Meera S.",
        "Founder, e-commerce startup",
    ),
    (
        "She drafted our entire privacy framework for three markets and walked the team through every obligation in plain language.",
        "Daniel W.",
        "General Counsel, media group",
    ),
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <div class="testimonials-section">
            <div class="section-kicker">{"Client Voices"}</div>
            <h2 class="section-heading">
                {"What clients "}<span class="gradient-text">{"say"}</span>
            </h2>
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().map(|&(quote, name, role)| html! {
                    <figure class="testimonial-card glass-card">
                        <blockquote>{ quote }</blockquote>
                        <figcaption>
                            <span class="testimonial-name">{ name }</span>
                            <span class="testimonial-role">{ role }</span>
                        </figcaption>
                    </figure>
                }) }
            </div>
            <style>
                {r#"
                    .testimonials-section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 7rem 2rem;
                    }

                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        margin-top: 3rem;
                    }

                    .testimonial-card {
                        margin: 0;
                        padding: 2.2rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                    }

                    .testimonial-card blockquote {
                        margin: 0 0 1.8rem 0;
                        color: #c7cfc9;
                        font-style: italic;
                        line-height: 1.8;
                    }

                    .testimonial-card blockquote::before {
                        content: '\201C';
                        display: block;
                        font-family: Georgia, serif;
                        font-size: 2.5rem;
                        color: rgba(52, 211, 153, 0.5);
                        line-height: 1;
                    }

                    .testimonial-name {
                        display: block;
                        color: #ffffff;
                        font-weight: 600;
                    }

                    .testimonial-role {
                        display: block;
                        color: #9aa39d;
                        font-size: 0.85rem;
                        margin-top: 0.2rem;
                    }

                    @media (max-width: 900px) {
                        .testimonials-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
