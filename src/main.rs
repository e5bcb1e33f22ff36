use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod carousel;
mod config;
mod lead;
mod components {
    pub mod contact;
    pub mod integration_carousel;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use components::toast::ToastHost;
use config::SubmissionConfig;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct PagesProps {
    submission: SubmissionConfig,
}

#[function_component(Pages)]
fn pages(props: &PagesProps) -> Html {
    match use_route::<Route>() {
        Some(Route::Home) => {
            info!("Rendering landing page");
            html! { <Landing submission={props.submission.clone()} /> }
        }
        _ => {
            info!("Rendering not found page");
            html! {
                <div class="not-found" style="min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
                    <h1>{"Página não encontrada"}</h1>
                    <Link<Route> to={Route::Home}>{"Voltar para o início"}</Link<Route>>
                </div>
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(win) = web_sys::window() {
                    if let Ok(scroll_y) = win.scroll_y() {
                        is_scrolled.set(scroll_y > 80.0);
                    }
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        transition: background 0.3s, box-shadow 0.3s;
                    }
                    .top-nav.scrolled {
                        background: #fff;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    }
                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 800;
                        color: #1e88e5;
                        text-decoration: none;
                    }
                    .nav-cta {
                        color: #1e88e5;
                        font-weight: 600;
                        text-decoration: none;
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"talkaio"}
                </Link<Route>>
                <a class="nav-cta" href="#contact">{"Fale conosco"}</a>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    // Read once per mount; later renders reuse the same values.
    let submission = use_state(SubmissionConfig::from_host_element);

    html! {
        <BrowserRouter>
            <ToastHost>
                <Nav />
                <Pages submission={(*submission).clone()} />
            </ToastHost>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting landing page");
    let host = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(config::HOST_ELEMENT_ID));

    match host {
        Some(host) => {
            yew::Renderer::<App>::with_root(host).render();
        }
        None => {
            yew::Renderer::<App>::new().render();
        }
    }
}
