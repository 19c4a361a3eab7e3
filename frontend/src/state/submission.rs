use std::rc::Rc;
use yew::prelude::*;

use crate::config::{RECEIPT_SENT_MESSAGE, SUBMIT_PENDING_LABEL};

/// Phase of the simulated receipt submission.
///
/// Every submission gets a ticket; only the completion carrying the current ticket
/// takes effect, so a superseded timer can never restore the form early.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SubmissionState {
    pending: Option<u64>,
    issued: u64,
}

/// What the page does when the submission delay for a ticket runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    pub notice: &'static str,
    pub reset_form: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SubmissionAction {
    Submit,
    Complete(u64),
    Cancel,
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket the next `Submit` will be issued.
    pub fn next_ticket(&self) -> u64 {
        self.issued + 1
    }

    pub fn button_label<'a>(&self, idle_label: &'a str) -> &'a str {
        if self.is_pending() {
            SUBMIT_PENDING_LABEL
        } else {
            idle_label
        }
    }

    /// Whether a completion for `ticket` would be applied.
    pub fn accepts(&self, ticket: u64) -> bool {
        self.pending == Some(ticket)
    }

    /// Effects of the delay for `ticket` ending; `None` for a superseded or cancelled ticket.
    pub fn completion(&self, ticket: u64) -> Option<Completion> {
        self.accepts(ticket).then_some(Completion {
            notice: RECEIPT_SENT_MESSAGE,
            reset_form: true,
        })
    }

    pub fn next(self, action: SubmissionAction) -> Self {
        match action {
            SubmissionAction::Submit => {
                let ticket = self.next_ticket();
                SubmissionState { pending: Some(ticket), issued: ticket }
            }
            SubmissionAction::Complete(ticket) if self.accepts(ticket) => {
                SubmissionState { pending: None, ..self }
            }
            SubmissionAction::Complete(_) => self,
            SubmissionAction::Cancel => SubmissionState { pending: None, ..self },
        }
    }
}

impl Reducible for SubmissionState {
    type Action = SubmissionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_then_complete_restores_idle() {
        let idle = SubmissionState::default();
        assert_eq!(idle.button_label("Send Receipt"), "Send Receipt");

        let ticket = idle.next_ticket();
        let pending = idle.next(SubmissionAction::Submit);
        assert!(pending.is_pending());
        assert_eq!(pending.button_label("Send Receipt"), "Sending...");

        let done = pending.next(SubmissionAction::Complete(ticket));
        assert!(!done.is_pending());
        assert_eq!(done.button_label("Send Receipt"), "Send Receipt");
    }

    #[test]
    fn timer_completion_clears_form_and_restores_button() {
        let idle = SubmissionState::default();
        let ticket = idle.next_ticket();
        let pending = idle.next(SubmissionAction::Submit);
        assert!(pending.is_pending());

        let completion = pending.completion(ticket).unwrap();
        assert!(completion.reset_form);
        assert_eq!(completion.notice, RECEIPT_SENT_MESSAGE);

        let done = pending.next(SubmissionAction::Complete(ticket));
        assert!(!done.is_pending());
        assert_eq!(done.button_label("Send Receipt"), "Send Receipt");
        assert_eq!(done.completion(ticket), None);
    }

    #[test]
    fn superseded_timer_has_no_effects() {
        let first = SubmissionState::default();
        let old_ticket = first.next_ticket();
        let second = first
            .next(SubmissionAction::Submit)
            .next(SubmissionAction::Submit);
        assert_eq!(second.completion(old_ticket), None);
        assert!(second.completion(old_ticket + 1).is_some());

        let cancelled = second.next(SubmissionAction::Cancel);
        assert_eq!(cancelled.completion(old_ticket + 1), None);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let first = SubmissionState::default().next(SubmissionAction::Submit);
        let stale = first.next_ticket() - 1;
        let second = first.next(SubmissionAction::Submit);

        let after_stale = second.next(SubmissionAction::Complete(stale));
        assert!(after_stale.is_pending());
        assert!(!after_stale.accepts(stale));

        let current = second.next_ticket() - 1;
        assert!(!second.next(SubmissionAction::Complete(current)).is_pending());
    }

    #[test]
    fn completion_after_cancel_is_ignored() {
        let pending = SubmissionState::default().next(SubmissionAction::Submit);
        let ticket = pending.next_ticket() - 1;
        let cancelled = pending.next(SubmissionAction::Cancel);
        assert!(!cancelled.is_pending());
        assert_eq!(cancelled.next(SubmissionAction::Complete(ticket)), cancelled);
    }
}
