use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;

mod config;
mod content;
mod chat;
mod scan;
mod theme;
mod components {
    pub mod chat_bot;
    pub mod toast;
}
mod sections {
    pub mod hero;
    pub mod eye_scan;
    pub mod behavior_change;
    pub mod resources;
    pub mod team;
}
mod pages {
    pub mod index;
}
mod utils {
    pub mod dom;
}

use content::SiteContent;
use pages::index::Index;

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Option<Rc<SiteContent>>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    match &props.content {
        Some(content) => html! { <Index content={content.clone()} /> },
        None => html! {
            <main style="padding: 4rem; text-align: center; font-family: sans-serif;">
                <h1>{"AnaemiCheck"}</h1>
                <p>{"Something went wrong while loading this page. Please refresh to try again."}</p>
            </main>
        },
    }
}

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::Info;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(LOG_LEVEL) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");

    let content = match SiteContent::load() {
        Ok(content) => Some(Rc::new(content)),
        Err(e) => {
            error!("Could not load site content: {}", e);
            None
        }
    };

    yew::Renderer::<App>::with_props(AppProps { content }).render();
}
