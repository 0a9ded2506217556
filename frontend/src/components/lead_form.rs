use log::debug;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::overlay::OverlayController;
use crate::submit::{LeadSubmission, SubmissionHandler, Submitter};

/// Hands the lead off, clears the form, then dismisses whatever dialog the
/// form was shown in.
pub fn intercept_lead(
    handler: Option<&dyn SubmissionHandler>,
    overlay: Option<&OverlayController>,
    lead: &LeadSubmission,
    reset: impl FnOnce(),
) {
    if let Some(handler) = handler {
        handler.submit_lead(lead);
    }
    reset();
    if let Some(overlay) = overlay {
        overlay.close_modal();
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    /// Drops the comment field, for the header dialog.
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let overlay = use_context::<OverlayController>();
    let submitter = use_context::<Submitter>();
    let form_ref = use_node_ref();

    let onsubmit = {
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                debug!("lead form submitted before mount");
                return;
            };

            intercept_lead(
                submitter.as_ref().map(|s| s.0.as_ref()),
                overlay.as_ref(),
                &LeadSubmission::from_form(&form),
                || form.reset(),
            );
        })
    };

    html! {
        <form class="lead-form" data-lead-form="" ref={form_ref} {onsubmit}>
            <label class="field">
                <span>{"Name"}</span>
                <input type="text" name="name" autocomplete="name" />
            </label>
            <label class="field">
                <span>{"Phone"}</span>
                <input type="tel" name="phone" autocomplete="tel" required={true} />
            </label>
            if !props.compact {
                <label class="field">
                    <span>{"Where are you and what happened?"}</span>
                    <textarea name="comment" rows="3"></textarea>
                </label>
            }
            <button type="submit" class="btn btn--primary">{"Send request"}</button>
            <p class="lead-form__note">{"We will call you back within 5 minutes."}</p>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::LEAD_MODAL;
    use crate::scheduler::manual::ManualScheduler;
    use crate::submit::recording::{Handed, RecordingHandler};
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    fn lead() -> LeadSubmission {
        LeadSubmission {
            fields: vec![
                ("name".to_string(), "Anna".to_string()),
                ("phone".to_string(), "+7 900 000-00-00".to_string()),
            ],
        }
    }

    #[test]
    fn hands_off_then_resets_then_closes_the_dialog() {
        let overlay = OverlayController::new(Rc::new(ManualScheduler::new()), 300);
        overlay.register_modal(LEAD_MODAL);
        overlay.open_modal(LEAD_MODAL);

        let handler = RecordingHandler::default();
        let events = handler.events.clone();
        let dialog_open_at_reset = Rc::new(std::cell::Cell::new(false));
        {
            let dialog_open_at_reset = dialog_open_at_reset.clone();
            let overlay_at_reset = overlay.clone();
            intercept_lead(Some(&handler), Some(&overlay), &lead(), move || {
                events.borrow_mut().push("reset");
                dialog_open_at_reset.set(overlay_at_reset.view().is_modal_open(LEAD_MODAL));
            });
        }

        assert_eq!(*handler.events.borrow(), vec!["handler", "reset"]);
        assert_eq!(*handler.handed.borrow(), vec![Handed::Lead(lead())]);
        assert!(dialog_open_at_reset.get());
        assert_eq!(overlay.view().active_modal, None);
        assert!(!overlay.view().scroll_locked);
    }

    #[test]
    fn inline_form_without_a_dialog_still_resets() {
        let overlay = OverlayController::new(Rc::new(ManualScheduler::new()), 300);
        let handler = RecordingHandler::default();
        let mut reset = false;

        intercept_lead(Some(&handler), Some(&overlay), &lead(), || reset = true);

        assert!(reset);
        assert_eq!(handler.handed.borrow().len(), 1);
        assert_eq!(overlay.view().active_modal, None);
    }

    #[test]
    fn missing_handler_and_overlay_are_skipped() {
        let mut reset = false;
        intercept_lead(None, None, &lead(), || reset = true);
        assert!(reset);
    }
}
