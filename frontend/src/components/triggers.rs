use yew::prelude::*;

use crate::components::calculator::PresetService;
use crate::estimate::Service;
use crate::overlay::{OverlayController, CALC_MODAL, LEAD_MODAL};

#[derive(Properties, PartialEq)]
pub struct LeadButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LeadButton)]
pub fn lead_button(props: &LeadButtonProps) -> Html {
    let overlay = use_context::<OverlayController>();
    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(overlay) = &overlay {
            overlay.open_modal(LEAD_MODAL);
        }
    });

    html! {
        <button type="button" class={props.class.clone()} data-open-lead="" {onclick}>
            {props.label.to_string()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CalcButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Pre-selects this service in the calculator dialog.
    #[prop_or_default]
    pub service: Option<Service>,
}

#[function_component(CalcButton)]
pub fn calc_button(props: &CalcButtonProps) -> Html {
    let overlay = use_context::<OverlayController>();
    let preset = use_context::<PresetService>();
    let service = props.service;

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(overlay) = &overlay {
            overlay.open_modal(CALC_MODAL);
        }
        if let (Some(service), Some(preset)) = (service, &preset) {
            preset.0.emit(service);
        }
    });

    html! {
        <button
            type="button"
            class={props.class.clone()}
            data-open-calc=""
            data-service={service.map(Service::as_str)}
            {onclick}
        >
            {props.label.to_string()}
        </button>
    }
}
