use leptos::{either::Either, html, prelude::*};

use crate::page::{contact::FormField, sections::Section, RenderModel};

#[component]
pub fn ContactSection(
    section_ref: NodeRef<html::Section>,
    model: Memo<RenderModel>,
    on_edit: Callback<(FormField, String)>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let is_submitted = Memo::new(move |_| model.with(|m| m.is_submitted));

    view! {
        <section id=Section::Contact.id() node_ref=section_ref class="py-20 bg-muted/30">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12 section-content">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Get In Touch"</h2>
                    <p class="text-muted max-w-2xl mx-auto">
                        "Have a project in mind or want to collaborate? Feel free to reach out!"
                    </p>
                </div>
                <div class="max-w-xl mx-auto">
                    {move || {
                        if is_submitted.get() {
                            Either::Left(view! { <SentNotice /> })
                        } else {
                            Either::Right(view! { <ContactForm model on_edit on_submit /> })
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SentNotice() -> impl IntoView {
    view! {
        <div class="bg-green/10 border border-green/30 rounded-lg p-8 text-center">
            <div class="text-4xl text-green mb-4">"✓"</div>
            <h3 class="text-xl font-bold mb-2">"Message Sent!"</h3>
            <p class="text-muted">"Thank you for reaching out. I'll get back to you soon."</p>
        </div>
    }
}

#[component]
fn ContactForm(
    model: Memo<RenderModel>,
    on_edit: Callback<(FormField, String)>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let is_submitting = Memo::new(move |_| model.with(|m| m.is_submitting));

    view! {
        <form
            class="space-y-6"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <Field model on_edit field=FormField::Name label="Name" placeholder="Your name" />
            <Field
                model
                on_edit
                field=FormField::Email
                label="Email"
                placeholder="your.email@example.com"
            />
            <Field
                model
                on_edit
                field=FormField::Message
                label="Message"
                placeholder="Your message here..."
            />
            <button
                type="submit"
                class="w-full bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30 disabled:opacity-50"
                disabled=move || is_submitting.get()
            >
                {move || if is_submitting.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

#[component]
fn Field(
    model: Memo<RenderModel>,
    on_edit: Callback<(FormField, String)>,
    field: FormField,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = field.as_str();
    let input_type = if field == FormField::Email { "email" } else { "text" };
    let value = move || model.with(|m| m.form_state.get(field).to_string());
    let error = Memo::new(move |_| model.with(|m| m.form_errors.get(field).to_string()));
    let disabled = move || model.with(|m| m.is_submitting);
    let input_class = move || {
        if error.with(|e| e.is_empty()) {
            "w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground"
        } else {
            "w-full px-4 py-2 rounded-md border border-red focus:outline-none focus:ring-2 focus:ring-red bg-background text-foreground"
        }
    };
    let on_input = move |ev: leptos::ev::Event| on_edit.run((field, event_target_value(&ev)));

    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-2">
                {label}
            </label>
            {if field == FormField::Message {
                Either::Left(
                    view! {
                        <textarea
                            id=id
                            name=id
                            rows="5"
                            class=input_class
                            placeholder=placeholder
                            prop:value=value
                            prop:disabled=disabled
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=id
                            name=id
                            type=input_type
                            class=input_class
                            placeholder=placeholder
                            prop:value=value
                            prop:disabled=disabled
                            on:input=on_input
                        />
                    },
                )
            }}
            <Show when=move || error.with(|e| !e.is_empty())>
                <p class="text-red text-sm mt-1">{move || error.get()}</p>
            </Show>
        </div>
    }
}
