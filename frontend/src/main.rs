use std::rc::Rc;

use log::info;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

mod config;
mod estimate;
mod overlay;
mod pricing;
mod scheduler;
mod scroll;
mod submit;

mod components {
    pub mod calculator;
    pub mod header;
    pub mod lead_form;
    pub mod menu;
    pub mod modal;
    pub mod pricing;
    pub mod triggers;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use config::LandingConfig;
use overlay::{apply_body_scroll, OverlayController, OverlayView};
use pages::{landing::Landing, not_found::NotFound};
use scheduler::BrowserScheduler;
use submit::{DemoNotice, Submitter};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| LandingConfig::load(), ());
    let overlay = {
        let delay = config.menu_close_delay_ms;
        (*use_memo(
            move |_| OverlayController::new(Rc::new(BrowserScheduler), delay),
            (),
        ))
        .clone()
    };
    let submitter = {
        let texts = config.texts.clone();
        (*use_memo(
            move |_| Submitter(Rc::new(DemoNotice::new(texts.lead_ack, texts.estimate_ack))),
            (),
        ))
        .clone()
    };
    let view = use_state_eq(|| overlay.view());

    {
        let overlay = overlay.clone();
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                overlay.subscribe(Callback::from(move |next: OverlayView| view.set(next)));
                move || overlay.unsubscribe()
            },
            (),
        );
    }

    use_effect_with_deps(
        |locked: &bool| {
            apply_body_scroll(*locked);
            || ()
        },
        view.scroll_locked,
    );

    {
        let overlay = overlay.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                overlay.escape();
            }
        });
    }

    html! {
        <ContextProvider<Rc<LandingConfig>> context={config}>
            <ContextProvider<OverlayController> context={overlay}>
                <ContextProvider<OverlayView> context={(*view).clone()}>
                    <ContextProvider<Submitter> context={submitter}>
                        <BrowserRouter>
                            <Switch<Route> render={switch} />
                        </BrowserRouter>
                    </ContextProvider<Submitter>>
                </ContextProvider<OverlayView>>
            </ContextProvider<OverlayController>>
        </ContextProvider<Rc<LandingConfig>>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
