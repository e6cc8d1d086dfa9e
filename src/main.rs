use yew::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod scroll;
mod admission {
    pub mod form;
    pub mod phone;
    pub mod submit;
    pub mod validation;
}
mod components {
    pub mod admission_form;
    pub mod collapse;
    pub mod confetti;
}
mod pages {
    pub mod admissions;
}

use components::collapse::close_mobile_nav;
use pages::admissions::{AdmissionsPage, SECTIONS};
use scroll::Debouncer;

const NAVBAR_STYLE: &str = "background-color: rgba(255, 255, 255, 0.1); backdrop-filter: blur(10px); -webkit-backdrop-filter: blur(10px);";

#[function_component(Nav)]
pub fn nav() -> Html {
    let active = use_state(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let window_clone = window.clone();

            let mut debouncer = Debouncer::new(config::NAV_DEBOUNCE_MS, move || {
                active.set(scroll::current_section(&window_clone));
            });
            let scroll_callback = Closure::wrap(Box::new(move || {
                debouncer.call();
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    html! {
        <nav class="navbar navbar-expand-lg navbar-dark fixed-top" style={NAVBAR_STYLE}>
            <div class="container">
                <a class="navbar-brand" href="#home">{"Brightwood Academy"}</a>
                <button
                    class="navbar-toggler"
                    type="button"
                    data-bs-toggle="collapse"
                    data-bs-target="#mainNav"
                    aria-controls="mainNav"
                    aria-expanded="false"
                    aria-label="Toggle navigation"
                >
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class="collapse navbar-collapse" id="mainNav">
                    <ul class="navbar-nav ms-auto">
                        { for SECTIONS.iter().map(|(id, label)| {
                            let href = format!("#{}", id);
                            let is_active = scroll::is_link_active(&href, active.as_deref());
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                scroll::scroll_to_section(id);
                                close_mobile_nav();
                            });
                            html! {
                                <li class="nav-item" key={*id}>
                                    <a class={classes!("nav-link", is_active.then(|| "active"))} {href} {onclick}>
                                        {*label}
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </div>
        </nav>
    }
}


fn mark_loaded() {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().add_1("loaded");
    }
    info!("All resources loaded successfully!");
}


#[function_component]
fn App() -> Html {
    use_effect_with_deps(move |_| {
        let window = web_sys::window().unwrap();
        let already_complete = window
            .document()
            .map(|d| d.ready_state() == "complete")
            .unwrap_or(false);
        if already_complete {
            mark_loaded();
        } else {
            let on_load = Closure::once_into_js(mark_loaded);
            let _ = window.add_event_listener_with_callback("load", on_load.unchecked_ref());
        }
        || ()
    }, ());

    html! {
        <>
            <Nav />
            <AdmissionsPage />
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Brightwood Academy website loaded successfully!");
    yew::Renderer::<App>::new().render();
}
