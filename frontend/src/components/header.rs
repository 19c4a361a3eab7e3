use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::dom;
use crate::hooks::use_scroll_spy;
use crate::state::menu::{MenuAction, MenuContext};
use crate::state::scrollspy::is_link_active;
use crate::Route;

const HOME_SECTIONS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#pricing", "Pricing"),
    ("#faq", "FAQ"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu: MenuContext,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { menu } = props;
    let route = use_route::<Route>();
    let current = use_scroll_spy("section[id]", route.clone());
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                is_scrolled.set(dom::scroll_y() > dom::header_height());
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.dispatch(MenuAction::Close);
        })
    };

    let on_home = route == Some(Route::Home);

    html! {
        <header class={classes!("site-header", (*is_scrolled).then_some("scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="logo">
                    {"Zudo Editor"}
                </Link<Route>>

                <button class="mobile-menu-btn" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav>
                    <ul class={classes!(menu.open.then_some("open"))}>
                        {
                            if on_home {
                                HOME_SECTIONS.iter().map(|(href, label)| {
                                    let class = classes!(
                                        "nav-link",
                                        is_link_active(href, current.as_deref()).then_some("active"),
                                    );
                                    html! {
                                        <li>
                                            <AnchorLink href={*href} {class}>{*label}</AnchorLink>
                                        </li>
                                    }
                                }).collect::<Html>()
                            } else {
                                html! {
                                    <li onclick={close_menu.clone()}>
                                        <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                                    </li>
                                }
                            }
                        }
                        <li onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Docs} classes="nav-link">{"Documentation"}</Link<Route>>
                        </li>
                        <li onclick={close_menu}>
                            <Link<Route> to={Route::Payment} classes="nav-link btn-nav">{"Buy Now"}</Link<Route>>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}
