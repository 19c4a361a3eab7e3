use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod dom;
mod hooks;
mod state {
    pub mod anchor;
    pub mod clicks;
    pub mod docs_menu;
    pub mod faq;
    pub mod menu;
    pub mod payment;
    pub mod reveal;
    pub mod scrollspy;
    pub mod submission;
}
mod components {
    pub mod anchor;
    pub mod docs_menu;
    pub mod faq;
    pub mod header;
    pub mod payment;
    pub mod receipt_form;
    pub mod reveal;
    pub mod tutorial;
}
mod pages {
    pub mod docs;
    pub mod home;
    pub mod payment;
}

use components::header::Header;
use pages::{
    docs::Docs,
    home::Home,
    payment::Payment,
};
use state::menu::{MenuContext, MenuState};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/docs")]
    Docs,
    #[at("/payment")]
    Payment,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Docs => {
            info!("Rendering Documentation page");
            html! { <Docs /> }
        },
        Route::Payment => {
            info!("Rendering Payment page");
            html! { <Payment /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <main class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to home"}</Link<Route>>
                </main>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
    let menu = use_reducer(MenuState::default);

    html! {
        <BrowserRouter>
            <ContextProvider<MenuContext> context={menu.clone()}>
                <Header {menu} />
                <Switch<Route> render={switch} />
            </ContextProvider<MenuContext>>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
