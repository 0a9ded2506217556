use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::overlay::{OverlayController, OverlayView};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub name: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let overlay = use_context::<OverlayController>();
    let view = use_context::<OverlayView>().unwrap_or_default();
    let panel_ref = use_node_ref();

    {
        let overlay = overlay.clone();
        use_effect_with_deps(
            move |name: &AttrValue| {
                let name = name.clone();
                if let Some(overlay) = &overlay {
                    overlay.register_modal(&name);
                }
                move || {
                    if let Some(overlay) = overlay {
                        overlay.unregister_modal(&name);
                    }
                }
            },
            props.name.clone(),
        );
    }

    // Clicks on the dimmed area around the panel dismiss the dialog.
    let on_backdrop = {
        let overlay = overlay.clone();
        let panel_ref = panel_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let (Some(overlay), Some(panel)) = (&overlay, panel_ref.get()) else {
                return;
            };
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            overlay.backdrop_click(panel.contains(target.as_ref()));
        })
    };

    let close = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(overlay) = &overlay {
            overlay.close_modal();
        }
    });

    let open = view.is_modal_open(&props.name);

    html! {
        <div
            class="modal"
            data-modal={props.name.clone()}
            hidden={!open}
            aria-hidden={if open { "false" } else { "true" }}
            onclick={on_backdrop}
        >
            <div class="modal__panel" ref={panel_ref} role="dialog" aria-modal="true">
                <button
                    type="button"
                    class="modal__close"
                    data-modal-close=""
                    aria-label="Close"
                    onclick={close}
                >
                    {"×"}
                </button>
                <h2 class="modal__title">{props.title.to_string()}</h2>
                { for props.children.iter() }
            </div>
        </div>
    }
}
