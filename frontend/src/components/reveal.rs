use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom;
use crate::state::reveal::RevealState;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that fades its children in the first time they scroll into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let reveal = use_state_eq(RevealState::default);

    let check = {
        let node = node.clone();
        let reveal = reveal.clone();
        move || {
            if reveal.revealed {
                return;
            }
            if let Some(element) = node.cast::<Element>() {
                let top = element.get_bounding_client_rect().top();
                reveal.set(reveal.observe(top, dom::viewport_height()));
            }
        }
    };

    // Above-the-fold content must not wait for a scroll
    {
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                check();
                || ()
            },
            (),
        );
    }

    {
        let check = check.clone();
        use_event_with_window("scroll", move |_: Event| check());
    }
    use_event_with_window("resize", move |_: Event| check());

    html! {
        <div
            ref={node}
            class={classes!("animate-fade-in", props.class.clone())}
            style={reveal.style()}
        >
            { for props.children.iter() }
        </div>
    }
}
