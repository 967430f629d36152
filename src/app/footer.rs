use chrono::{DateTime, Datelike};
use leptos::prelude::*;

const SOCIALS: [&str; 4] = ["github", "twitter", "linkedin", "dribbble"];

fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .expect("BUILD_TIME should be RFC 3339")
        .year()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-muted/30">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <p class="text-muted mb-4 md:mb-0">
                        {format!("© {} Portfolio. All rights reserved.", copyright_year())}
                    </p>
                    <div class="flex space-x-6">
                        {SOCIALS
                            .into_iter()
                            .map(|social| {
                                let initial = social
                                    .chars()
                                    .next()
                                    .map(|c| c.to_ascii_uppercase().to_string())
                                    .unwrap_or_default();
                                view! {
                                    <a
                                        href=format!("#{social}")
                                        aria-label=social
                                        class="text-muted hover:text-foreground transition-colors"
                                    >
                                        <span class="w-8 h-8 rounded-full bg-brightBlack/40 flex items-center justify-center">
                                            {initial}
                                        </span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
