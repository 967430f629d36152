use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};

use super::{
    contact::ContactSection, footer::Footer, gallery::ProjectGallery, header::Header,
    hero::HeroSection, scroll_window, skills::SkillsSection, BrowserScheduler, Page, SectionRefs,
};
use crate::content::{Content, Project};
use crate::page::{contact::FormField, sections::Section, PageController};

#[component]
pub fn HomePage() -> impl IntoView {
    match Content::builtin() {
        Ok(content) => Either::Left(view! { <Portfolio content /> }),
        Err(e) => {
            log::error!("couldn't load site content: {e}");
            Either::Right(view! {
                <Title text="Error" />
                <p class="p-8 text-center text-red">"Something went wrong loading this page."</p>
            })
        }
    }
}

#[component]
fn Portfolio(content: Content) -> impl IntoView {
    let (fired, set_fired) = signal(None);
    let skills = content.skills().to_vec();
    let page: Page = RwSignal::new(PageController::new(
        content,
        BrowserScheduler::new(set_fired),
    ));
    let sections = SectionRefs::new();
    let model = Memo::new(move |_| page.with(|p| p.snapshot()));

    Effect::watch(
        move || fired.get(),
        move |action, _, _| {
            if let Some(action) = *action {
                page.update(|p| p.fire(action));
            }
        },
        false,
    );

    let track_scroll = move || {
        let y = match window().scroll_y() {
            Ok(y) => y,
            Err(_) => return,
        };
        page.maybe_update(|p| p.on_scroll(&sections, y));
    };
    let _ = use_event_listener(use_window(), leptos::ev::scroll, move |_| track_scroll());
    Effect::new(move |_| track_scroll());

    on_cleanup(move || {
        page.try_update_untracked(|p| p.teardown());
    });

    let on_navigate = Callback::new(move |section: Section| {
        if let Some(target) = page
            .try_update(|p| p.navigate_to(&sections, section))
            .flatten()
        {
            scroll_window(target);
        }
    });
    let on_toggle_menu = Callback::new(move |_: ()| page.update(|p| p.toggle_menu()));
    let on_select = Callback::new(move |category: String| {
        page.update(|p| p.select_category(category))
    });
    let on_search = Callback::new(move |query: String| page.update(|p| p.set_query(query)));
    let on_details = Callback::new(move |project: Project| {
        log::info!("project details requested: {}", project.id);
        if let Some(link) = project.link.as_deref() {
            if let Err(e) = window().open_with_url_and_target(link, "_blank") {
                log::warn!("couldn't open {link}: {e:?}");
            }
        }
    });
    let on_edit = Callback::new(move |(field, value): (FormField, String)| {
        page.update(|p| p.edit(field, value))
    });
    let on_submit = Callback::new(move |_: ()| page.update(|p| p.submit()));

    view! {
        <Title text="Home" />
        <div class="min-h-screen">
            <Header model on_navigate on_toggle_menu />
            <main>
                <HeroSection section_ref=sections.get(Section::Hero) on_navigate />
                <section
                    id=Section::Projects.id()
                    node_ref=sections.get(Section::Projects)
                    class="py-20 bg-muted/30"
                >
                    <div class="container mx-auto px-4">
                        <div class="text-center mb-12 section-content">
                            <h2 class="text-3xl md:text-4xl font-bold mb-4">"My Projects"</h2>
                            <p class="text-muted max-w-2xl mx-auto">
                                "Explore my recent work and creative endeavors across various domains and technologies."
                            </p>
                        </div>
                        <ProjectGallery
                            categories=Signal::derive(move || model.with(|m| m.categories.clone()))
                            selected=Signal::derive(move || {
                                model.with(|m| m.selected_category.clone())
                            })
                            query=Signal::derive(move || model.with(|m| m.query.clone()))
                            projects=Signal::derive(move || {
                                model.with(|m| m.filtered_projects.clone())
                            })
                            on_select
                            on_search
                            on_details
                        />
                    </div>
                </section>
                <section
                    id=Section::Skills.id()
                    node_ref=sections.get(Section::Skills)
                    class="py-20"
                >
                    <div class="container mx-auto px-4">
                        <div class="text-center mb-12 section-content">
                            <h2 class="text-3xl md:text-4xl font-bold mb-4">"Skills & Expertise"</h2>
                            <p class="text-muted max-w-2xl mx-auto">
                                "A comprehensive overview of my technical expertise and proficiency levels."
                            </p>
                        </div>
                        <SkillsSection categories=skills />
                    </div>
                </section>
                <ContactSection
                    section_ref=sections.get(Section::Contact)
                    model
                    on_edit
                    on_submit
                />
            </main>
            <Footer />
        </div>
    }
}
