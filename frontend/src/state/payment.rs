use std::fmt;
use std::str::FromStr;

use crate::config::CHECKOUT_URL;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    Pix,
    CreditCard,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Pix,
        PaymentMethod::CreditCard,
        PaymentMethod::BankTransfer,
    ];

    /// Id of the radio input for this method.
    pub fn id(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "pix",
            PaymentMethod::CreditCard => "credit-card",
            PaymentMethod::BankTransfer => "bank-transfer",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "PIX",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }

    pub fn call_to_action(&self) -> CallToAction {
        match self {
            PaymentMethod::Pix => CallToAction { href: CHECKOUT_URL, label: "Pay with PIX" },
            PaymentMethod::CreditCard => CallToAction { href: CHECKOUT_URL, label: "Pay with Card" },
            PaymentMethod::BankTransfer => CallToAction { href: "#", label: "View Bank Details" },
        }
    }

    pub fn click_intent(&self) -> CtaIntent {
        match self {
            PaymentMethod::BankTransfer => CtaIntent::ShowBankDetails,
            PaymentMethod::Pix | PaymentMethod::CreditCard => CtaIntent::FollowLink,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.id() == id)
            .ok_or_else(|| UnknownPaymentMethod(id.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub href: &'static str,
    pub label: &'static str,
}

/// What a click on the call-to-action should do for the selected method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaIntent {
    FollowLink,
    ShowBankDetails,
}
