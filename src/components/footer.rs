use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p class="footer-name">{"Ananya Mehta"}</p>
            <p class="footer-line">
                {"Advocate, Bar Council of Delhi · International Legal Consultant"}
            </p>
            <p class="footer-copy">{"© 2025 Ananya Mehta. All rights reserved."}</p>
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(52, 211, 153, 0.12);
                        padding: 3rem 2rem 4rem 2rem;
                        text-align: center;
                    }

                    .footer-name {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 1.2rem;
                        color: #ffffff;
                        margin-bottom: 0.4rem;
                    }

                    .footer-line {
                        color: #9aa39d;
                        font-size: 0.9rem;
                        margin: 0.2rem 0;
                    }

                    .footer-copy {
                        color: #5f6a63;
                        font-size: 0.8rem;
                        margin-top: 1.5rem;
                    }
                "#}
            </style>
        </footer>
    }
}
