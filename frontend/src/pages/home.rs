use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::faq::{FaqEntry, FaqList};
use crate::components::reveal::FadeIn;
use crate::Route;

const FEATURES: [(&str, &str); 4] = [
    ("Automatic narration", "Turn any script into a natural sounding voice-over with text to speech."),
    ("Synced subtitles", "Subtitles are timed to the narration word by word, no manual editing."),
    ("Smart backgrounds", "Background footage is picked and cut to fit the length of each video."),
    ("Hands-free uploads", "Finished videos are uploaded to your channel as soon as they render."),
];

const STEPS: [(&str, &str); 3] = [
    ("Drop a script", "Save a text file into the watched folder."),
    ("Let it render", "Narration, subtitles and background are combined into a finished video."),
    ("Publish", "The video is uploaded with its title and description filled in."),
];

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Do I need to know how to edit videos?",
            answer: "No. You write the script, the software handles narration, subtitles, footage and export.",
        },
        FaqEntry {
            question: "Which payment methods are accepted?",
            answer: "PIX, credit card and bank transfer. PIX and card purchases are confirmed right away.",
        },
        FaqEntry {
            question: "How do I get access after a bank transfer?",
            answer: "Send the transfer receipt through the form on the payment page and we will activate your license.",
        },
        FaqEntry {
            question: "Does it run on my computer?",
            answer: "Yes. Everything runs locally on Windows; only the final upload uses the internet.",
        },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home-page">
            <section id="home" class="hero">
                <FadeIn class="hero-content">
                    <h1>{"Video Automation Software"}</h1>
                    <p>{"From script to published video without opening an editor."}</p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Payment} classes="btn btn-primary">{"Get Started"}</Link<Route>>
                        <AnchorLink href="#how-it-works" class="btn btn-secondary">{"See How It Works"}</AnchorLink>
                    </div>
                </FadeIn>
            </section>

            <section id="features" class="features">
                <h2>{"Features"}</h2>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(title, text)| html! {
                        <FadeIn class="feature-card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </FadeIn>
                    }) }
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <h2>{"How It Works"}</h2>
                <ol class="steps">
                    { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                        <li>
                            <FadeIn class="step">
                                <span class="step-number">{i + 1}</span>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </FadeIn>
                        </li>
                    }) }
                </ol>
            </section>

            <section id="pricing" class="pricing">
                <h2>{"Pricing"}</h2>
                <FadeIn class="pricing-card">
                    <h3>{"Lifetime License"}</h3>
                    <p class="price">{"R$ 197"}</p>
                    <ul>
                        <li>{"All automation modules"}</li>
                        <li>{"Free updates"}</li>
                        <li>{"Complete PDF tutorial"}</li>
                    </ul>
                    <Link<Route> to={Route::Payment} classes="btn btn-primary">{"Buy Now"}</Link<Route>>
                </FadeIn>
            </section>

            <section id="faq" class="faq">
                <h2>{"Frequently Asked Questions"}</h2>
                <FaqList entries={faq_entries()} />
            </section>
        </main>
    }
}
