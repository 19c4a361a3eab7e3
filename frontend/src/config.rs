use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Hosted checkout used by both the PIX and card options.
pub const CHECKOUT_URL: &str = "https://mpago.la/2Afm7Ld";

pub const RECEIPT_EMAIL: &str = "comprovantes@zudoeditor.com";
pub const BANK_HOLDER: &str = "Zudo Editor Software";
pub const BANK_ACCOUNT: &str = "0001 / 47264-2";

pub const TUTORIAL_PDF: &str = "tutorial_completo.pdf";

// Scroll geometry, in CSS pixels
pub const ACTIVE_LOOKAHEAD_PX: f64 = 100.0;
pub const ANCHOR_MARGIN_PX: f64 = 20.0;
pub const REVEAL_VIEWPORT_RATIO: f64 = 0.9;
pub const REVEAL_OFFSET_PX: u32 = 20;
pub const REVEAL_TRANSITION: &str = "opacity 0.5s ease-out, transform 0.5s ease-out";

pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const SUBMIT_PENDING_LABEL: &str = "Sending...";

pub const RECEIPT_SENT_MESSAGE: &str =
    "Receipt sent successfully! We will get in touch shortly.";
pub const TUTORIAL_UNAVAILABLE_MESSAGE: &str =
    "The complete tutorial will be made available once your purchase is finished. \
     For the free version, a basic tutorial will be sent by e-mail.";

pub fn bank_details_message() -> String {
    format!(
        "Bank Transfer Details:\n\nName: {}\nAccount: {}\n\nAfter the transfer, send the receipt to {}",
        BANK_HOLDER, BANK_ACCOUNT, RECEIPT_EMAIL
    )
}
