use std::rc::Rc;

use yew::prelude::*;

use crate::components::triggers::LeadButton;
use crate::config::LandingConfig;
use crate::overlay::{OverlayController, OverlayView};

/// Off-canvas navigation plus its backdrop. Registers itself with the
/// overlay controller while mounted.
#[function_component(OffCanvasMenu)]
pub fn off_canvas_menu() -> Html {
    let config = use_context::<Rc<LandingConfig>>().unwrap_or_default();
    let overlay = use_context::<OverlayController>();
    let view = use_context::<OverlayView>().unwrap_or_default();

    {
        let overlay = overlay.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(overlay) = &overlay {
                    overlay.attach_menu();
                }
                move || {
                    if let Some(overlay) = overlay {
                        overlay.detach_menu();
                    }
                }
            },
            (),
        );
    }

    let close_menu = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(overlay) = &overlay {
            overlay.close_menu();
        }
    });

    let active = view.menu_active.then(|| "is-active");

    html! {
        <>
            <div
                class={classes!("overlay", active)}
                data-overlay=""
                hidden={view.menu_hidden}
                onclick={close_menu.clone()}
            ></div>
            <aside
                class={classes!("menu", active)}
                data-menu=""
                hidden={view.menu_hidden}
                aria-hidden={if view.menu_hidden { "true" } else { "false" }}
            >
                <button
                    type="button"
                    class="menu__close"
                    data-menu-close=""
                    aria-label="Close menu"
                    onclick={close_menu}
                >
                    {"×"}
                </button>
                <nav class="menu__nav">
                    <a href="#services">{"Services"}</a>
                    <a href="#calculator">{"Estimate"}</a>
                    <a href="#prices">{"Prices"}</a>
                    <a href="#contacts">{"Contacts"}</a>
                </nav>
                <a class="menu__phone" href={config.tel_href()}>{&config.phone}</a>
                <LeadButton class="btn btn--primary menu__cta" label="Request a call" />
            </aside>
        </>
    }
}
