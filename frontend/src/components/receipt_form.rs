use gloo_timers::callback::Timeout;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::config::SUBMIT_DELAY_MS;
use crate::dom;
use crate::state::submission::{SubmissionAction, SubmissionState};

const SUBMIT_LABEL: &str = "Send Receipt";

/// Receipt form whose submission is simulated locally; nothing leaves the browser.
#[function_component(ReceiptForm)]
pub fn receipt_form() -> Html {
    let form = use_node_ref();
    let submission = use_reducer(SubmissionState::default);
    // Dropping a Timeout cancels it, so this also dies with the component
    let pending = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let form = form.clone();
        let submission = submission.clone();
        let pending = pending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let ticket = submission.next_ticket();
            // Snapshot the timer checks against; a newer submission drops this timer first
            let submitted = (*submission).next(SubmissionAction::Submit);
            submission.dispatch(SubmissionAction::Submit);
            log::info!("Simulating receipt submission #{}", ticket);

            let form = form.clone();
            let submission = submission.clone();
            let timeout = Timeout::new(SUBMIT_DELAY_MS, move || {
                if let Some(completion) = submitted.completion(ticket) {
                    dom::notify(completion.notice);
                    if completion.reset_form {
                        if let Some(form) = form.cast::<HtmlFormElement>() {
                            form.reset();
                        }
                    }
                }
                submission.dispatch(SubmissionAction::Complete(ticket));
                log::info!("Receipt submission #{} finished", ticket);
            });

            // Replacing the handle cancels any earlier submission still waiting
            *pending.borrow_mut() = Some(timeout);
        })
    };

    let cancel = {
        let submission = submission.clone();
        let pending = pending.clone();
        Callback::from(move |_: MouseEvent| {
            if pending.borrow_mut().take().is_some() {
                log::info!("Receipt submission cancelled");
            }
            submission.dispatch(SubmissionAction::Cancel);
        })
    };

    let is_pending = submission.is_pending();

    html! {
        <form id="contact-form" class="contact-form" ref={form} {onsubmit}>
            <div class="form-group">
                <label for="name">{"Full name"}</label>
                <input type="text" id="name" name="name" required=true />
            </div>
            <div class="form-group">
                <label for="email">{"E-mail"}</label>
                <input type="email" id="email" name="email" required=true />
            </div>
            <div class="form-group">
                <label for="receipt">{"Payment receipt"}</label>
                <input type="file" id="receipt" name="receipt" accept="image/*,.pdf" />
            </div>
            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea id="message" name="message" rows="4"></textarea>
            </div>
            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled={is_pending}>
                    {submission.button_label(SUBMIT_LABEL)}
                </button>
                {
                    if is_pending {
                        html! {
                            <button type="button" class="btn-link" onclick={cancel}>{"Cancel"}</button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </form>
    }
}
