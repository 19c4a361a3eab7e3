use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::dom;
use crate::state::clicks::cta_click;
use crate::state::payment::{PaymentMethod, UnknownPaymentMethod};

/// Payment radio group plus the call-to-action it reprograms.
#[function_component(PaymentSelector)]
pub fn payment_selector() -> Html {
    let method = use_state_eq(PaymentMethod::default);

    let onchange = {
        let method = method.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.id().parse::<PaymentMethod>() {
                Ok(selected) => {
                    log::info!("Payment method changed to {}", selected);
                    method.set(selected);
                }
                Err(UnknownPaymentMethod(id)) => {
                    log::debug!("Ignoring unknown payment option '{}'", id);
                }
            }
        })
    };

    // One handler for the lifetime of the button; it only acts while bank transfer is selected
    let on_cta_click = {
        let method = method.clone();
        Callback::from(move |e: MouseEvent| {
            dom::respond(&e, &cta_click(*method));
        })
    };

    let cta = method.call_to_action();

    html! {
        <div class="payment-selector">
            <div class="payment-methods">
                { for PaymentMethod::ALL.iter().map(|option| html! {
                    <label class={classes!("payment-method", (*method == *option).then_some("selected"))} for={option.id()}>
                        <input
                            type="radio"
                            name="payment"
                            id={option.id()}
                            value={option.id()}
                            checked={*method == *option}
                            onchange={onchange.clone()}
                        />
                        <span class="payment-method-title">{option.title()}</span>
                    </label>
                }) }
            </div>
            <div class="payment-action">
                <a class="btn btn-large" href={cta.href} onclick={on_cta_click}>
                    {cta.label}
                </a>
            </div>
        </div>
    }
}
