use crate::config::{bank_details_message, TUTORIAL_UNAVAILABLE_MESSAGE};
use crate::state::payment::{CtaIntent, PaymentMethod};

/// How a guarded link reacts to a click: whether navigation is suppressed and what to tell the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickResponse {
    pub prevent_default: bool,
    pub notice: Option<String>,
}

impl ClickResponse {
    pub fn follow() -> Self {
        ClickResponse { prevent_default: false, notice: None }
    }

    pub fn blocked(notice: impl Into<String>) -> Self {
        ClickResponse { prevent_default: true, notice: Some(notice.into()) }
    }
}

/// The tutorial PDF is not published yet.
pub fn tutorial_click() -> ClickResponse {
    ClickResponse::blocked(TUTORIAL_UNAVAILABLE_MESSAGE)
}

pub fn cta_click(method: PaymentMethod) -> ClickResponse {
    match method.click_intent() {
        CtaIntent::FollowLink => ClickResponse::follow(),
        CtaIntent::ShowBankDetails => ClickResponse::blocked(bank_details_message()),
    }
}
