use yew::prelude::*;

use crate::config::TUTORIAL_PDF;
use crate::dom;
use crate::state::clicks::tutorial_click;

// The PDF is not published yet; the link stays visible but never navigates.
#[function_component(TutorialDownload)]
pub fn tutorial_download() -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        log::info!("Blocked download of {}", TUTORIAL_PDF);
        dom::respond(&e, &tutorial_click());
    });

    html! {
        <a href={TUTORIAL_PDF} class="btn btn-secondary tutorial-download" {onclick}>
            {"Download the Complete Tutorial (PDF)"}
        </a>
    }
}
