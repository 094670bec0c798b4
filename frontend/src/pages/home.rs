use log::info;
use yew::prelude::*;

use crate::components::{
    about::About, cursor::Cursor, footer::Footer, hero::Hero, loader::Loader, nav::Nav,
};
use crate::config;
use crate::showcase::section::{Showcase, ShowcaseConfig};

#[function_component(Home)]
pub fn home() -> Html {
    let loaded = use_state(|| false);

    use_effect_with_deps(
        move |_| {
            config::set_document_title(&config::page_title(None));
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_done = {
        let loaded = loaded.clone();
        Callback::from(move |_: ()| {
            info!("Revealing home page");
            loaded.set(true);
        })
    };

    html! {
        <>
            <Loader on_done={on_done} />
            <Cursor />
            {
                if *loaded {
                    html! {
                        <>
                            <Nav />
                            <main>
                                <Hero />
                                <Showcase config={ShowcaseConfig::default()} />
                                <About />
                            </main>
                            <Footer />
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
