use yew::prelude::*;

pub mod config;
pub mod lifecycle;

pub mod components {
    pub mod contact;
    pub mod experience;
    pub mod footer;
    pub mod hero;
    pub mod navigation;
    pub mod practice_areas;
    pub mod statistics;
    pub mod testimonials;
}

pub mod pages {
    pub mod portfolio;
}

use pages::portfolio::Portfolio;

#[function_component(App)]
pub fn app() -> Html {
    html! { <Portfolio /> }
}
