use std::rc::Rc;

use log::warn;
use web_sys::{window, HtmlSelectElement};
use yew::prelude::*;

use crate::config::LandingConfig;
use crate::estimate::{format_price, CalcInput, Service, Situation, Vehicle};
use crate::submit::{EstimateRequest, SubmissionHandler, Submitter};

/// A service picked from a trigger outside the form. `seq` changes on every
/// pick so choosing the same service again still re-applies it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServicePreset {
    pub service: Service,
    pub seq: u32,
}

impl ServicePreset {
    /// The preset following `previous` for a click on `service`.
    pub fn next(previous: Option<ServicePreset>, service: Service) -> Self {
        Self {
            service,
            seq: previous.map_or(1, |p| p.seq.wrapping_add(1)),
        }
    }
}

/// Hands the current selection off and returns the `tel:` link to follow
/// when calling straight away is enabled.
pub fn submit_estimate(
    handler: Option<&dyn SubmissionHandler>,
    input: CalcInput,
    config: &LandingConfig,
) -> Option<String> {
    if let Some(handler) = handler {
        handler.submit_estimate(&EstimateRequest {
            input,
            estimate: input.estimate(),
        });
    }
    config.offer_call.then(|| config.tel_href())
}

/// Context callback used by calculator triggers to preset the service.
#[derive(Clone, PartialEq)]
pub struct PresetService(pub Callback<Service>);

#[derive(Clone, Default)]
struct CalcFields {
    service: NodeRef,
    vehicle: NodeRef,
    situation: NodeRef,
}

impl CalcFields {
    fn value(field: &NodeRef) -> String {
        field
            .cast::<HtmlSelectElement>()
            .map(|select| select.value())
            .unwrap_or_default()
    }

    fn read(&self) -> CalcInput {
        CalcInput::from_fields(
            &Self::value(&self.service),
            &Self::value(&self.vehicle),
            &Self::value(&self.situation),
        )
    }

    fn set_service(&self, service: Service) {
        if let Some(select) = self.service.cast::<HtmlSelectElement>() {
            select.set_value(service.as_str());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CalcFormProps {
    #[prop_or_default]
    pub preset: Option<ServicePreset>,
}

#[function_component(CalcForm)]
pub fn calc_form(props: &CalcFormProps) -> Html {
    let config = use_context::<Rc<LandingConfig>>().unwrap_or_default();
    let submitter = use_context::<Submitter>();
    let fields = use_memo(|_| CalcFields::default(), ());
    let input = use_state_eq(CalcInput::default);

    // Pick up whatever the browser restored into the selects.
    {
        let fields = fields.clone();
        let input = input.clone();
        use_effect_with_deps(
            move |_| {
                input.set(fields.read());
                || ()
            },
            (),
        );
    }

    {
        let fields = fields.clone();
        let input = input.clone();
        use_effect_with_deps(
            move |preset: &Option<ServicePreset>| {
                if let Some(preset) = preset {
                    fields.set_service(preset.service);
                    input.set(fields.read());
                }
                || ()
            },
            props.preset,
        );
    }

    let onchange = {
        let fields = fields.clone();
        let input = input.clone();
        Callback::from(move |_: Event| input.set(fields.read()))
    };

    let onsubmit = {
        let fields = fields.clone();
        let input = input.clone();
        let config = config.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = fields.read();
            input.set(current);

            let handler = submitter.as_ref().map(|s| s.0.as_ref());
            let Some(href) = submit_estimate(handler, current, &config) else {
                return;
            };
            if let Some(window) = window() {
                if let Err(e) = window.location().set_href(&href) {
                    warn!("Failed to start call: {:?}", e);
                }
            }
        })
    };

    let estimate = input.estimate();

    html! {
        <form class="calc" data-calc-form="" {onchange} {onsubmit}>
            <label class="field">
                <span>{"Service"}</span>
                <select name="service" ref={fields.service.clone()}>
                    { for Service::ALL.iter().map(|s| html! {
                        <option value={s.as_str()}>{s.label()}</option>
                    }) }
                </select>
            </label>
            <label class="field">
                <span>{"Vehicle"}</span>
                <select name="vehicle" ref={fields.vehicle.clone()}>
                    { for Vehicle::ALL.iter().map(|v| html! {
                        <option value={v.as_str()}>{v.label()}</option>
                    }) }
                </select>
            </label>
            <label class="field">
                <span>{"Situation"}</span>
                <select name="case" ref={fields.situation.clone()}>
                    { for Situation::ALL.iter().map(|c| html! {
                        <option value={c.as_str()}>{c.label()}</option>
                    }) }
                </select>
            </label>
            <div class="calc__result" data-calc-result="">
                <p class="calc__price">
                    {format!("{} ", config.texts.price_prefix)}
                    <strong>{format_price(estimate.price_from, &config.currency_suffix)}</strong>
                </p>
                <p class="calc__eta">
                    {format!("{} ", config.texts.eta_prefix)}
                    <strong>{estimate.eta}</strong>
                </p>
            </div>
            <button type="submit" class="btn btn--primary">{"Get an estimate"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::recording::{Handed, RecordingHandler};
    use pretty_assertions::assert_eq;

    fn stuck_moto() -> CalcInput {
        CalcInput {
            service: Service::Fuel,
            vehicle: Vehicle::Moto,
            situation: Situation::NoFuel,
        }
    }

    #[test]
    fn submit_hands_off_the_current_selection() {
        let handler = RecordingHandler::default();
        let call = submit_estimate(Some(&handler), stuck_moto(), &LandingConfig::default());

        assert_eq!(call, None);
        let handed = handler.handed.borrow();
        assert_eq!(handed.len(), 1);
        let Handed::Estimate(request) = &handed[0] else {
            panic!("expected an estimate, got {:?}", handed[0]);
        };
        assert_eq!(request.input, stuck_moto());
        assert_eq!(request.estimate.price_from, 1100);
    }

    #[test]
    fn call_link_only_when_enabled() {
        let config = LandingConfig {
            offer_call: true,
            ..LandingConfig::default()
        };
        let handler = RecordingHandler::default();

        assert_eq!(
            submit_estimate(Some(&handler), CalcInput::default(), &config),
            Some("tel:+74952041652".to_string())
        );
        assert_eq!(*handler.events.borrow(), vec!["handler"]);
    }

    #[test]
    fn submit_without_a_handler_still_offers_the_call() {
        let config = LandingConfig {
            offer_call: true,
            ..LandingConfig::default()
        };
        assert_eq!(
            submit_estimate(None, CalcInput::default(), &config).as_deref(),
            Some("tel:+74952041652")
        );
    }

    #[test]
    fn same_service_twice_is_a_new_preset() {
        let first = ServicePreset::next(None, Service::Tech);
        let second = ServicePreset::next(Some(first), Service::Tech);

        assert_eq!(first, ServicePreset { service: Service::Tech, seq: 1 });
        assert_eq!(second.service, Service::Tech);
        assert_ne!(first, second);
    }

    #[test]
    fn preset_sequence_wraps() {
        let last = ServicePreset {
            service: Service::Sober,
            seq: u32::MAX,
        };
        assert_eq!(ServicePreset::next(Some(last), Service::Tow).seq, 0);
    }
}
