use leptos::prelude::*;

use crate::content::{Skill, SkillCategory};

#[component]
pub fn SkillsSection(categories: Vec<SkillCategory>) -> impl IntoView {
    let first = categories.first().map(|c| c.name.clone()).unwrap_or_default();
    let (active_tab, set_active_tab) = signal(first);

    let tabs = categories
        .iter()
        .map(|category| {
            let name = category.name.clone();
            let label = category.name.clone();
            view! {
                <button
                    role="tab"
                    class=move || {
                        if active_tab.get() == name {
                            "py-2 px-4 rounded-md text-sm font-medium bg-background text-foreground shadow"
                        } else {
                            "py-2 px-4 rounded-md text-sm font-medium text-muted hover:text-foreground"
                        }
                    }
                    on:click={
                        let label = label.clone();
                        move |_| set_active_tab.set(label.clone())
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let panels = categories
        .into_iter()
        .map(|category| {
            let name = category.name;
            view! {
                <div
                    role="tabpanel"
                    class="grid grid-cols-1 md:grid-cols-2 gap-6"
                    class:hidden=move || active_tab.get() != name
                >
                    {category.skills.into_iter().map(|skill| view! { <SkillCard skill /> }).collect_view()}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="max-w-6xl mx-auto">
            <div role="tablist" class="flex justify-center gap-2 mb-8 w-full max-w-md mx-auto p-1 rounded-lg bg-brightBlack/30">
                {tabs}
            </div>
            {panels}
        </div>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    let level = skill.level();
    view! {
        <div class="overflow-hidden rounded-lg border border-muted/30 p-6">
            <div class="flex justify-between items-center mb-2">
                <h3 class="text-lg font-medium">{skill.name}</h3>
                <div class="relative group">
                    <button
                        class="text-muted hover:text-foreground transition-colors"
                        aria-label="About this skill"
                    >
                        "ⓘ"
                    </button>
                    <div
                        role="tooltip"
                        class="absolute bottom-full right-0 mb-2 w-64 p-2 rounded-md text-sm bg-brightBlack text-foreground opacity-0 pointer-events-none group-hover:opacity-100 group-focus-within:opacity-100 transition-opacity"
                    >
                        {skill.description}
                    </div>
                </div>
            </div>
            <div class="space-y-2">
                <div class="flex justify-between text-sm">
                    <span>"Proficiency"</span>
                    <span>{format!("{level}%")}</span>
                </div>
                <div class="h-2 w-full rounded-full bg-brightBlack/40 overflow-hidden">
                    <div
                        class="h-full bg-cyan transition-all duration-1000 ease-in-out"
                        style=format!("width: {level}%")
                    ></div>
                </div>
            </div>
        </div>
    }
}
