use leptos::{html, prelude::*};

use super::components::{IconGlyph, SectionHeading};
use super::toast::{use_toasts, Toasts};
use crate::contact::{ContactForm, Field};
use crate::icon::Icon;
use crate::portfolio::Profile;

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-white/10 bg-background/50 focus:outline-none focus:border-primary focus:ring-2 focus:ring-primary/40";

/// Submits the entered values. Returns `true` when the form should be reset.
fn accept_submission(toasts: Toasts, name: String, email: String, message: String) -> bool {
    let mut form = ContactForm::new(name, email, message);
    match form.submit() {
        Ok(notification) => {
            toasts.show(notification);
            true
        }
        Err(e) => {
            log::warn!("contact form rejected: {e}");
            false
        }
    }
}

#[component]
pub fn ContactSection(profile: Profile) -> impl IntoView {
    let toasts = use_toasts();
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    view! {
        <section id="contact" class="py-24 relative overflow-hidden">
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[600px] bg-primary/10 rounded-full blur-[100px] -z-10"></div>

            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Get in Touch"
                    subtitle="Interested in collaboration? Let's discuss your next project."
                />

                <div class="grid md:grid-cols-5 gap-8 bg-card/50 backdrop-blur-md rounded-3xl border border-white/5 overflow-hidden shadow-2xl">
                    <div class="md:col-span-2 bg-gradient-to-br from-primary to-blue-600 p-8 text-white flex flex-col justify-between">
                        <div>
                            <h3 class="text-2xl font-bold font-display mb-4">"Contact Info"</h3>
                            <p class="text-blue-100 mb-8">
                                "I'm always open to discussing new projects, creative ideas or opportunities to be part of your visions."
                            </p>
                            <div class="space-y-6">
                                <a
                                    href=format!("mailto:{}", profile.email)
                                    class="flex items-center gap-3 text-blue-100 hover:text-white transition-colors"
                                >
                                    <IconGlyph icon=Icon::Mail classes="w-5 h-5" />
                                    <span>{profile.name}</span>
                                </a>
                            </div>
                        </div>
                        <div class="mt-12 md:mt-0">
                            <div class="w-16 h-16 bg-white/20 rounded-full flex items-center justify-center backdrop-blur-sm">
                                <IconGlyph icon=Icon::Mail classes="w-8 h-8 text-white" />
                            </div>
                        </div>
                    </div>

                    <div class="md:col-span-3 p-8">
                        <form
                            node_ref=form_ref
                            class="space-y-6"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                let (Some(form_el), Some(name), Some(email), Some(message)) = (
                                    form_ref.get_untracked(),
                                    name_ref.get_untracked(),
                                    email_ref.get_untracked(),
                                    message_ref.get_untracked(),
                                ) else {
                                    log::warn!("contact form submitted before it was mounted");
                                    return;
                                };
                                if accept_submission(
                                    toasts,
                                    name.value(),
                                    email.value(),
                                    message.value(),
                                ) {
                                    form_el.reset();
                                }
                            }
                        >
                            <div>
                                <label for=Field::Name.id() class="text-sm font-medium mb-2 block">
                                    "Name"
                                </label>
                                <input
                                    node_ref=name_ref
                                    id=Field::Name.id()
                                    name=Field::Name.id()
                                    placeholder="John Doe"
                                    class=INPUT_CLASS
                                    required=true
                                />
                            </div>
                            <div>
                                <label for=Field::Email.id() class="text-sm font-medium mb-2 block">
                                    "Email"
                                </label>
                                <input
                                    node_ref=email_ref
                                    id=Field::Email.id()
                                    name=Field::Email.id()
                                    type="email"
                                    placeholder="john@example.com"
                                    class=INPUT_CLASS
                                    required=true
                                />
                            </div>
                            <div>
                                <label for=Field::Message.id() class="text-sm font-medium mb-2 block">
                                    "Message"
                                </label>
                                <textarea
                                    node_ref=message_ref
                                    id=Field::Message.id()
                                    name=Field::Message.id()
                                    placeholder="Tell me about your project..."
                                    class=format!("{INPUT_CLASS} min-h-[120px] resize-none")
                                    required=true
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                class="w-full px-4 py-2 rounded-md font-medium text-white bg-gradient-to-r from-primary to-blue-500 hover:from-primary/90 hover:to-blue-600 shadow-lg shadow-primary/25"
                            >
                                "Send Message"
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
