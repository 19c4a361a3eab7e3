use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom;
use crate::state::scrollspy::current_landmark;

/// Id of the landmark matching `selector` that the page is currently scrolled to.
///
/// Evaluated once after mount (and whenever `deps` changes) and again on every
/// window scroll. The listener goes away with the component.
#[hook]
pub fn use_scroll_spy<D>(selector: &'static str, deps: D) -> Option<String>
where
    D: PartialEq + 'static,
{
    let current = use_state_eq(|| None::<String>);

    let update = {
        let current = current.clone();
        move || {
            current.set(current_landmark(
                dom::scroll_y(),
                dom::header_height(),
                &dom::landmarks(selector),
            ));
        }
    };

    {
        let update = update.clone();
        use_effect_with_deps(
            move |_| {
                update();
                || ()
            },
            deps,
        );
    }

    use_event_with_window("scroll", move |_: Event| update());

    (*current).clone()
}
