use yew::prelude::*;

use crate::dom;
use crate::state::anchor::anchor_target;
use crate::state::menu::{MenuAction, MenuContext};

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Runs before the scroll, e.g. to toggle a submenu owned by the link.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Same-page link that smooth-scrolls to its target instead of jumping,
/// closing the mobile menu on the way.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let menu = use_context::<MenuContext>();

    let onclick = {
        let href = props.href.clone();
        let before = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(before) = &before {
                before.emit(e.clone());
            }
            let Some(id) = anchor_target(&href) else {
                return;
            };
            e.prevent_default();
            if dom::scroll_to_id(id) {
                if let Some(menu) = &menu {
                    menu.dispatch(MenuAction::Close);
                }
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
