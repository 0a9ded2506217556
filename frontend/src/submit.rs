//! Where submitted forms go. The landing page ships with [`DemoNotice`],
//! which only acknowledges the submission; a handler that posts to a real
//! endpoint plugs in through the same trait.

use std::rc::Rc;

use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::estimate::{CalcInput, Estimate};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LeadSubmission {
    /// `(name, value)` of every named control, in document order.
    pub fields: Vec<(String, String)>,
}

impl LeadSubmission {
    pub fn from_form(form: &HtmlFormElement) -> Self {
        let mut fields = Vec::new();
        let Ok(controls) = form.query_selector_all("[name]") else {
            return Self { fields };
        };
        for i in 0..controls.length() {
            let Some(node) = controls.item(i) else { continue };
            let field = if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
                (input.name(), input.value())
            } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
                (select.name(), select.value())
            } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
                (area.name(), area.value())
            } else {
                continue;
            };
            fields.push(field);
        }
        Self { fields }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EstimateRequest {
    pub input: CalcInput,
    pub estimate: Estimate,
}

pub trait SubmissionHandler {
    fn submit_lead(&self, lead: &LeadSubmission);
    fn submit_estimate(&self, request: &EstimateRequest);
}

/// Blocking `alert` acknowledgements in place of a real backend.
pub struct DemoNotice {
    lead_ack: String,
    estimate_ack: String,
}

impl DemoNotice {
    pub fn new(lead_ack: impl Into<String>, estimate_ack: impl Into<String>) -> Self {
        Self {
            lead_ack: lead_ack.into(),
            estimate_ack: estimate_ack.into(),
        }
    }

    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                warn!("alert failed: {:?}", e);
            }
        }
    }
}

impl SubmissionHandler for DemoNotice {
    fn submit_lead(&self, lead: &LeadSubmission) {
        info!("Lead form submitted ({} fields)", lead.fields.len());
        Self::alert(&self.lead_ack);
    }

    fn submit_estimate(&self, request: &EstimateRequest) {
        info!(
            "Estimate requested: {:?} -> {}",
            request.input, request.estimate.price_from
        );
        Self::alert(&self.estimate_ack);
    }
}

/// Context handle so components share one handler.
#[derive(Clone)]
pub struct Submitter(pub Rc<dyn SubmissionHandler>);

impl PartialEq for Submitter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{Service, Situation, Vehicle};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn estimate_request_json_shape() {
        let input = CalcInput {
            service: Service::Fuel,
            vehicle: Vehicle::Moto,
            situation: Situation::NoFuel,
        };
        let request = EstimateRequest {
            input,
            estimate: input.estimate(),
        };
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({
                "input": {"service": "fuel", "vehicle": "moto", "situation": "no-fuel"},
                "estimate": {"price_from": 1100, "eta": "20–40 minutes"}
            })
        );
    }
}
