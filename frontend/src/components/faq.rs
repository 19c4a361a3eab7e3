use yew::prelude::*;

use crate::state::faq::FaqState;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
}

/// Accordion where opening one question closes the others.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let state = use_reducer(FaqState::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let is_active = state.is_active(index);
                let toggle = {
                    let state = state.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        state.dispatch(index);
                    })
                };

                html! {
                    <div class={classes!("faq-item", is_active.then_some("active"))}>
                        <button class="faq-question" onclick={toggle}>
                            <span class="question-text">{entry.question}</span>
                            <span class="toggle-icon">{if is_active { "−" } else { "+" }}</span>
                        </button>
                        <div class="faq-answer">
                            <p>{entry.answer}</p>
                        </div>
                    </div>
                }
            }) }
            <style>
                {r#"
                .faq-item .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .faq-item.active .faq-answer {
                    max-height: 500px;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1.1rem;
                    padding: 1rem 0;
                }
                "#}
            </style>
        </div>
    }
}
