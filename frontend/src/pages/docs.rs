use yew::prelude::*;

use crate::components::docs_menu::DocsMenu;
use crate::state::docs_menu::{DocsEntry, DocsLink};

fn docs_entries() -> Vec<DocsEntry> {
    vec![
        DocsEntry {
            link: DocsLink { href: "#introduction", title: "Introduction" },
            submenu: vec![],
        },
        DocsEntry {
            link: DocsLink { href: "#installation", title: "Installation" },
            submenu: vec![
                DocsLink { href: "#requirements", title: "Requirements" },
                DocsLink { href: "#first-run", title: "First Run" },
            ],
        },
        DocsEntry {
            link: DocsLink { href: "#usage", title: "Usage" },
            submenu: vec![
                DocsLink { href: "#scripts", title: "Writing Scripts" },
                DocsLink { href: "#voices", title: "Voices" },
                DocsLink { href: "#subtitles", title: "Subtitles" },
                DocsLink { href: "#uploading", title: "Uploading" },
            ],
        },
        DocsEntry {
            link: DocsLink { href: "#troubleshooting", title: "Troubleshooting" },
            submenu: vec![],
        },
    ]
}

#[function_component(Docs)]
pub fn docs() -> Html {
    html! {
        <main class="docs-container">
            <DocsMenu entries={docs_entries()} />
            <article class="docs-content">
                <h2 id="introduction">{"Introduction"}</h2>
                <p>{"The software watches a folder for new scripts and turns each one into a finished, uploaded video."}</p>

                <h2 id="installation">{"Installation"}</h2>
                <h3 id="requirements">{"Requirements"}</h3>
                <ul>
                    <li>{"Windows 10 or newer"}</li>
                    <li>{"8 GB of RAM"}</li>
                    <li>{"FFmpeg on the PATH"}</li>
                </ul>
                <h3 id="first-run">{"First Run"}</h3>
                <p>{"Start the launcher, pick the watched folder and sign in to your video channel once."}</p>

                <h2 id="usage">{"Usage"}</h2>
                <h3 id="scripts">{"Writing Scripts"}</h3>
                <p>{"The first line of the text file becomes the title; the rest is narrated."}</p>
                <h3 id="voices">{"Voices"}</h3>
                <p>{"Choose the narration voice and speed in the settings panel."}</p>
                <h3 id="subtitles">{"Subtitles"}</h3>
                <p>{"Subtitles are generated from the narration and burned into the video."}</p>
                <h3 id="uploading">{"Uploading"}</h3>
                <p>{"Rendered videos are queued and uploaded one at a time."}</p>

                <h2 id="troubleshooting">{"Troubleshooting"}</h2>
                <p>{"If a video is not produced, check the log window of the launcher for the failing step."}</p>
            </article>
        </main>
    }
}
