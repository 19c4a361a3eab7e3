use yew::prelude::*;

use crate::components::payment::PaymentSelector;
use crate::components::receipt_form::ReceiptForm;
use crate::components::tutorial::TutorialDownload;
use crate::config::RECEIPT_EMAIL;

#[function_component(Payment)]
pub fn payment() -> Html {
    html! {
        <main class="payment-page">
            <section id="checkout" class="checkout">
                <h1>{"Complete Your Purchase"}</h1>
                <p>{"Lifetime license, all modules included."}</p>
                <PaymentSelector />
            </section>

            <section id="receipt" class="receipt">
                <h2>{"Paid by Bank Transfer?"}</h2>
                <p>
                    {"Send us the receipt with the form below, or e-mail it to "}
                    <a href={format!("mailto:{}", RECEIPT_EMAIL)}>{RECEIPT_EMAIL}</a>
                    {"."}
                </p>
                <ReceiptForm />
            </section>

            <section id="tutorial" class="tutorial">
                <h2>{"Tutorial"}</h2>
                <TutorialDownload />
            </section>
        </main>
    }
}
