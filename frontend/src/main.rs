use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod theme;
mod data {
    pub mod projects;
    pub mod socials;
}
mod effects {
    pub mod frame_loop;
    pub mod listener;
    pub mod resize;
}
mod showcase {
    pub mod device;
    pub mod frame;
    pub mod layout;
    pub mod preview;
    pub mod project_card;
    pub mod scale;
    pub mod section;
    pub mod view_toggle;
}
mod components {
    pub mod about;
    pub mod cursor;
    pub mod footer;
    pub mod hero;
    pub mod hero_canvas;
    pub mod icons;
    pub mod loader;
    pub mod nav;
    pub mod site_styles;
}
mod pages {
    pub mod home;
    pub mod maintenance;
    pub mod not_found;
}

use components::site_styles::SiteStyles;
use pages::{home::Home, maintenance::Maintenance, not_found::NotFound};
use theme::ThemeProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/maintenance")]
    Maintenance,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Maintenance => {
            info!("Rendering Maintenance page");
            html! { <Maintenance /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <SiteStyles />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting {} ({})", config::SITE_NAME, config::get_site_origin());
    yew::Renderer::<App>::new().render();
}
