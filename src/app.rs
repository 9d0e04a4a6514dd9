use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::audio::{self, WebAudioSink};
use crate::content::{self, section, ResumeCategory, ResumeEntry};
use crate::input::{self, Action, Effect};
use crate::view_state::ViewState;

fn scroll_to_section(id: &str) {
    let Some(document) = window().document() else {
        return;
    };
    // A target that is not mounted makes the control a no-op.
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn resume_entry(entry: &'static ResumeEntry) -> impl IntoView {
    view! {
        <div class="resume-entry">
            <h4>{entry.title}</h4>
            <p class="accent">{entry.organization}</p>
            <p class="muted">{entry.period}</p>
            <p>{entry.summary}</p>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (state, set_state) = signal(ViewState::default());

    let dispatch = move |actions: &[Action]| {
        for &action in actions {
            let mut effect = None;
            set_state.update(|s| effect = input::apply(s, action));
            match effect {
                Some(Effect::Scroll(id)) => scroll_to_section(id),
                Some(Effect::Blip) => audio::play_if_enabled(
                    state.get_untracked().sound_enabled,
                    &WebAudioSink,
                    &audio::UI_BLIP,
                ),
                None => {}
            }
        }
    };

    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        dispatch(input::actions_for_key(&ev.key()));
    });
    if window()
        .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("global keydown listener could not be installed");
    }
    on_cleanup(move || {
        // The listener and its closure are torn down together, so a
        // remount starts from a clean window.
        let _ = window()
            .remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
    });

    let header = move || {
        view! {
            <header class="topbar">
                <div class="wordmark">"<MS />"</div>
                <div class="topbar-controls">
                    <button
                        class="icon-button"
                        title="Toggle sound"
                        on:click=move |_| dispatch(&[Action::FlipSound])
                    >
                        {move || if state.get().sound_enabled { "🔊" } else { "🔇" }}
                    </button>
                    <button
                        class="icon-button"
                        title="Toggle theme"
                        on:click=move |_| dispatch(&[Action::FlipTheme])
                    >
                        {move || if state.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                </div>
            </header>
        }
    };

    let hero = move || {
        view! {
            <section class="hero">
                <img class="portrait" src=content::PROFILE_IMAGE alt=content::NAME />
                <h1 class="glitch">{content::NAME}</h1>
                <h2 class="role">{content::ROLE}</h2>
                <p class="motto">{content::MOTTO}</p>
                <div class="hero-actions">
                    <button
                        class="button"
                        on:click=move |_| dispatch(&[Action::Blip, Action::Scroll(section::PROJECTS)])
                    >
                        "View Projects"
                    </button>
                    <button
                        class="button button-outline"
                        on:click=move |_| dispatch(&[Action::Blip, Action::Scroll(section::RESUME)])
                    >
                        "Download Resume"
                    </button>
                </div>
            </section>
        }
    };

    let about = move || {
        view! {
            <section class="panel-section">
                <h2 class="section-title">"> About"</h2>
                <div class="panel">
                    {content::ABOUT
                        .iter()
                        .map(|paragraph| view! { <p>{*paragraph}</p> })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        }
    };

    let projects = move || {
        view! {
            <section id=section::PROJECTS class="panel-section alt">
                <h2 class="section-title">"> Featured Projects"</h2>
                <div class="project-grid">
                    {content::PROJECTS
                        .iter()
                        .map(|project| view! {
                            <article class="panel project-card">
                                <div class="project-thumb">{project.initials()}</div>
                                <h3>{project.name}</h3>
                                <p class="muted">{project.description}</p>
                                <div class="badge-row">
                                    {project
                                        .tech
                                        .iter()
                                        .map(|tag| view! { <span class="badge">{*tag}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                                <div class="project-links">
                                    <a
                                        class="button button-outline small"
                                        href=project.code_url
                                        on:click=move |_| dispatch(&[Action::Blip])
                                    >
                                        "Code"
                                    </a>
                                    <a
                                        class="button small"
                                        href=project.demo_url
                                        on:click=move |_| dispatch(&[Action::Blip])
                                    >
                                        "Demo"
                                    </a>
                                </div>
                            </article>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        }
    };

    let resume = move || {
        view! {
            <section id=section::RESUME class="panel-section">
                <h2 class="section-title">"> Resume"</h2>
                <div class="panel resume">
                    <div class="resume-header">
                        <h3>{content::FULL_NAME}</h3>
                        <p class="muted">{content::PHONE}" · "{content::EMAIL}</p>
                        <button class="button" on:click=move |_| dispatch(&[Action::Blip])>
                            "Download PDF"
                        </button>
                    </div>
                    <h3 class="resume-heading">"Education"</h3>
                    {content::resume_entries(ResumeCategory::Education)
                        .map(resume_entry)
                        .collect::<Vec<_>>()}
                    <h3 class="resume-heading">"Experience"</h3>
                    {content::resume_entries(ResumeCategory::Experience)
                        .map(resume_entry)
                        .collect::<Vec<_>>()}
                    <h3 class="resume-heading">"Technical Skills"</h3>
                    <div class="badge-row">
                        {content::SKILLS
                            .iter()
                            .map(|skill| view! { <span class="badge">{*skill}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>
        }
    };

    let contact = move || {
        view! {
            <section class="panel-section alt">
                <h2 class="section-title">"> Contact"</h2>
                <div class="panel contact">
                    <p>"Let's build something amazing together"</p>
                    <div class="contact-links">
                        {content::CONTACTS
                            .iter()
                            .map(|link| view! {
                                <a
                                    class="button button-outline"
                                    href=link.url
                                    on:click=move |_| dispatch(&[Action::Blip])
                                >
                                    {link.label}
                                </a>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>
        }
    };

    let terminal = move || {
        view! {
            <Show when=move || state.get().terminal.is_open()>
                <div class="terminal-backdrop">
                    <div class="terminal">
                        <div class="terminal-titlebar">
                            <span>"Terminal"</span>
                            <button
                                class="icon-button"
                                title="Close terminal"
                                on:click=move |_| dispatch(&[Action::CloseTerminal])
                            >
                                "✕"
                            </button>
                        </div>
                        <div class="terminal-body">
                            {content::TERMINAL_TRANSCRIPT
                                .iter()
                                .map(|(command, output)| view! {
                                    <div class="term-line">"> "{*command}</div>
                                    <div class="term-line">{*output}</div>
                                })
                                .collect::<Vec<_>>()}
                            <div class="term-line">"> _"<span class="cursor">"█"</span></div>
                        </div>
                    </div>
                </div>
            </Show>
        }
    };

    let footer = move || {
        view! {
            <footer class="footer">
                <p class="muted">
                    "© 2024 Musab Sarmad. Built with Leptos & Trunk. Press ~ for terminal."
                </p>
            </footer>
        }
    };

    view! {
        <div class=move || state.get().theme_class()>
            {header}
            <main>
                {hero}
                {about}
                {projects}
                {resume}
                {contact}
            </main>
            {terminal}
            {footer}
        </div>
    }
}
