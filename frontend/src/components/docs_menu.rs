use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::anchor::AnchorLink;
use crate::dom;
use crate::state::docs_menu::{DocsEntry, DocsMenuAction, DocsMenuState};
use crate::state::scrollspy::current_landmark;

const DOCS_HEADINGS: &str = ".docs-content h2[id], .docs-content h3[id]";

#[derive(Properties, PartialEq)]
pub struct DocsMenuProps {
    pub entries: Vec<DocsEntry>,
}

/// Documentation side-nav. Follows the heading in view and keeps its submenu open.
#[function_component(DocsMenu)]
pub fn docs_menu(props: &DocsMenuProps) -> Html {
    let state = {
        let len = props.entries.len();
        use_reducer(move || DocsMenuState::new(len))
    };

    // Dispatched on every scroll, unchanged or not, so the active link's submenu is re-forced open
    let sync = {
        let state = state.clone();
        let entries = props.entries.clone();
        move || {
            let current = current_landmark(
                dom::scroll_y(),
                dom::header_height(),
                &dom::landmarks(DOCS_HEADINGS),
            );
            state.dispatch(DocsMenuAction::activate(&entries, current.as_deref()));
        }
    };

    {
        let sync = sync.clone();
        use_effect_with_deps(
            move |_| {
                sync();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| sync());

    let link_class = |href: &str| classes!(state.is_active(href).then_some("active"));

    html! {
        <aside class="docs-sidebar">
            <ul class="docs-menu">
                { for props.entries.iter().enumerate().map(|(index, entry)| {
                    if entry.has_submenu() {
                        let toggle = {
                            let state = state.clone();
                            Callback::from(move |_: MouseEvent| {
                                state.dispatch(DocsMenuAction::Toggle(index));
                            })
                        };
                        html! {
                            <li>
                                <AnchorLink href={entry.link.href} class={link_class(entry.link.href)} onclick={toggle}>
                                    {entry.link.title}
                                </AnchorLink>
                                <ul class={classes!("submenu", state.is_open(index).then_some("open"))}>
                                    { for entry.submenu.iter().map(|link| html! {
                                        <li>
                                            <AnchorLink href={link.href} class={link_class(link.href)}>
                                                {link.title}
                                            </AnchorLink>
                                        </li>
                                    }) }
                                </ul>
                            </li>
                        }
                    } else {
                        html! {
                            <li>
                                <AnchorLink href={entry.link.href} class={link_class(entry.link.href)}>
                                    {entry.link.title}
                                </AnchorLink>
                            </li>
                        }
                    }
                }) }
            </ul>
            <style>
                {r#"
                .docs-menu .submenu {
                    display: none;
                    padding-left: 1rem;
                }
                .docs-menu .submenu.open {
                    display: block;
                }
                .docs-menu a.active {
                    color: #ff5722;
                    font-weight: 600;
                }
                "#}
            </style>
        </aside>
    }
}
