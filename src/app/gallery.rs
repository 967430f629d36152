use leptos::prelude::*;

use crate::content::Project;

#[component]
pub fn ProjectGallery(
    #[prop(into)] categories: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] query: Signal<String>,
    #[prop(into)] projects: Signal<Vec<Project>>,
    on_select: Callback<String>,
    on_search: Callback<String>,
    on_details: Callback<Project>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            <div class="flex flex-col md:flex-row justify-between items-center mb-8 gap-4">
                <div class="flex flex-wrap gap-2 justify-center md:justify-start">
                    <For
                        each=move || categories.get()
                        key=|category| category.clone()
                        children=move |category| {
                            let name = category.clone();
                            view! {
                                <button
                                    class=move || {
                                        if selected.get() == name {
                                            "px-4 py-2 rounded-full text-sm font-medium transition-colors bg-cyan text-background"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm font-medium transition-colors bg-brightBlack/40 hover:bg-brightBlack/60"
                                        }
                                    }
                                    on:click={
                                        let category = category.clone();
                                        move |_| on_select.run(category.clone())
                                    }
                                >
                                    {category}
                                </button>
                            }
                        }
                    />
                </div>
                <div class="w-full md:w-64">
                    <input
                        type="text"
                        placeholder="Search projects..."
                        class="w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground placeholder-muted"
                        prop:value=move || query.get()
                        on:input=move |ev| on_search.run(event_target_value(&ev))
                    />
                </div>
            </div>
            <Show
                when=move || projects.with(|p| !p.is_empty())
                fallback=|| {
                    view! {
                        <div class="text-center py-12">
                            <p class="text-muted">
                                "No projects found matching your criteria. Try adjusting your filters."
                            </p>
                        </div>
                    }
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || projects.get()
                        key=|project| project.id.clone()
                        children=move |project| view! { <ProjectCard project on_details /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, on_details: Callback<Project>) -> impl IntoView {
    let Project {
        title,
        description,
        image,
        technologies,
        link,
        ..
    } = project.clone();

    view! {
        <div class="h-full overflow-hidden group rounded-lg border border-muted/30 bg-brightBlack/20 transition-transform duration-300 hover:-translate-y-1">
            <div class="relative overflow-hidden h-48">
                <img
                    src=image
                    alt=title.clone()
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-black/60 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex flex-col justify-center items-center p-4 text-white">
                    <p class="text-sm text-center mb-4">{description}</p>
                    <button
                        class="mt-2 px-3 py-1 rounded-md text-sm bg-brightBlack hover:bg-brightBlack/80"
                        on:click=move |_| on_details.run(project.clone())
                    >
                        "View Details"
                    </button>
                </div>
            </div>
            <div class="p-4">
                <h3 class="font-bold text-lg mb-2 truncate">{title}</h3>
                <div class="flex flex-wrap gap-1 mb-3">
                    {technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-md px-2 py-1 bg-brightBlack text-xs">{tech}</span>
                            }
                        })
                        .collect_view()}
                </div>
                {link
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-sm text-cyan hover:underline"
                            >
                                "Live ↗"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
