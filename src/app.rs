mod contact;
mod footer;
mod gallery;
mod header;
mod hero;
mod homepage;
mod skills;

use std::time::Duration;

use homepage::HomePage;
use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::page::{
    contact::DeferredAction,
    schedule::Scheduler,
    sections::{Bounds, ScrollTo, Section, SectionLayout},
    PageController,
};

pub type Page = RwSignal<PageController<BrowserScheduler>>;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Portfolio - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Runs deferred form transitions on browser timers. A fired action is
/// written to `fired`; the page picks it up from there and feeds it back into
/// the controller.
#[derive(Debug, Clone, Copy)]
pub struct BrowserScheduler {
    fired: WriteSignal<Option<DeferredAction>>,
}

impl BrowserScheduler {
    pub fn new(fired: WriteSignal<Option<DeferredAction>>) -> Self {
        Self { fired }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = Option<TimeoutHandle>;

    fn schedule(&mut self, delay: Duration, action: DeferredAction) -> Self::Handle {
        let fired = self.fired;
        match set_timeout_with_handle(move || fired.set(Some(action)), delay) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("couldn't set timer for {action:?}, applying now: {e:?}");
                fired.set(Some(action));
                None
            }
        }
    }

    fn cancel(&mut self, handle: Self::Handle) {
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}

/// The rendered `<section>` elements, measured on demand.
#[derive(Debug, Clone, Copy)]
pub struct SectionRefs {
    hero: NodeRef<html::Section>,
    projects: NodeRef<html::Section>,
    skills: NodeRef<html::Section>,
    contact: NodeRef<html::Section>,
}

impl SectionRefs {
    pub fn new() -> Self {
        Self {
            hero: NodeRef::new(),
            projects: NodeRef::new(),
            skills: NodeRef::new(),
            contact: NodeRef::new(),
        }
    }

    pub fn get(self, section: Section) -> NodeRef<html::Section> {
        match section {
            Section::Hero => self.hero,
            Section::Projects => self.projects,
            Section::Skills => self.skills,
            Section::Contact => self.contact,
        }
    }
}

impl Default for SectionRefs {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionLayout for SectionRefs {
    fn bounds(&self, section: Section) -> Option<Bounds> {
        let el = self.get(section).get_untracked()?;
        Some(Bounds {
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
    }
}

pub fn scroll_window(target: ScrollTo) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(target.top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
