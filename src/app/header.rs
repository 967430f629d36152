use leptos::prelude::*;

use crate::page::{sections::Section, RenderModel};

#[component]
pub fn Header(
    model: Memo<RenderModel>,
    on_navigate: Callback<Section>,
    on_toggle_menu: Callback<()>,
) -> impl IntoView {
    let active = Memo::new(move |_| model.with(|m| m.active_section));
    let menu_open = Memo::new(move |_| model.with(|m| m.menu_open));

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-sm border-b border-muted/30">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <button class="text-2xl font-bold" on:click=move |_| on_navigate.run(Section::Hero)>
                    <span class="text-cyan">"Portfolio"</span>
                </button>
                <nav class="hidden md:flex space-x-8">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == section {
                                            "text-sm font-medium text-cyan"
                                        } else {
                                            "text-sm font-medium text-muted hover:text-foreground"
                                        }
                                    }
                                    on:click=move |_| on_navigate.run(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    class="md:hidden text-foreground text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| on_toggle_menu.run(())
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-background border-b border-muted/30">
                    <div class="container mx-auto px-4 py-4 flex flex-col space-y-4">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class=move || {
                                            if active.get() == section {
                                                "text-left py-2 px-4 rounded-md bg-cyan/10 text-cyan"
                                            } else {
                                                "text-left py-2 px-4 rounded-md text-muted hover:bg-brightBlack/30"
                                            }
                                        }
                                        on:click=move |_| on_navigate.run(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </header>
    }
}
