use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::triggers::LeadButton;
use crate::config::LandingConfig;
use crate::overlay::OverlayController;
use crate::scroll::ScrollWatcher;

#[function_component(Header)]
pub fn header() -> Html {
    let config = use_context::<Rc<LandingConfig>>().unwrap_or_default();
    let overlay = use_context::<OverlayController>();
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        let watcher = ScrollWatcher::new(config.scroll_threshold_px);
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            is_scrolled.set(watcher.is_scrolled(scroll_y));
        });
    }

    let open_menu = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(overlay) = &overlay {
            overlay.open_menu();
        }
    });

    html! {
        <header data-header="" class={classes!("header", (*is_scrolled).then(|| "is-scrolled"))}>
            <div class="header__inner">
                <a class="header__logo" href="#top">{"Roadside 24/7"}</a>
                <nav class="header__nav">
                    <a href="#services">{"Services"}</a>
                    <a href="#calculator">{"Estimate"}</a>
                    <a href="#prices">{"Prices"}</a>
                    <a href="#contacts">{"Contacts"}</a>
                </nav>
                <a class="header__phone" href={config.tel_href()}>{&config.phone}</a>
                <LeadButton class="btn btn--primary header__cta" label="Request a call" />
                <button
                    type="button"
                    class="header__burger"
                    data-menu-open=""
                    aria-label="Open menu"
                    onclick={open_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}
