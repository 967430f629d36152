use leptos::{html, prelude::*};

use crate::decor::hero_blobs;
use crate::page::sections::Section;

#[component]
pub fn HeroSection(
    section_ref: NodeRef<html::Section>,
    on_navigate: Callback<Section>,
) -> impl IntoView {
    view! {
        <section
            id=Section::Hero.id()
            node_ref=section_ref
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="absolute inset-0 z-0">
                <div class="absolute inset-0 bg-gradient-to-br from-cyan/5 to-background/80"></div>
                <div class="absolute inset-0 opacity-5">
                    {hero_blobs()
                        .into_iter()
                        .map(|blob| {
                            view! { <div class="absolute rounded-full bg-cyan" style=blob.style()></div> }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="container mx-auto px-4 z-10">
                <div class="max-w-3xl mx-auto text-center section-content">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6">
                        <span class="text-cyan">"Creative"</span>
                        " Developer & Designer"
                    </h1>
                    <p class="text-xl md:text-2xl text-muted mb-8">
                        "Crafting beautiful digital experiences with code and creativity"
                    </p>
                    <button
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-8 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                        on:click=move |_| on_navigate.run(Section::Projects)
                    >
                        "View My Work"
                    </button>
                </div>
            </div>
            <button
                class="absolute bottom-10 left-1/2 -translate-x-1/2 text-2xl text-muted animate-bounce"
                aria-label="Scroll to projects"
                on:click=move |_| on_navigate.run(Section::Projects)
            >
                "⌄"
            </button>
        </section>
    }
}
