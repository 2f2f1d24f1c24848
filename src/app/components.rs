use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

use crate::icon::Icon;
use crate::motion::RevealOnce;

#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold font-display mb-4">{title}</h2>
            <p class="text-muted-foreground text-lg max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[prop(default = "")] classes: &'static str) -> impl IntoView {
    view! {
        <svg
            data-icon=icon.name()
            class=format!("inline-block shrink-0 {classes}")
            viewBox="0 0 24 24"
            width="24"
            height="24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

/// Flips to `true` the first time `target` enters the viewport, then stops
/// observing.
pub fn use_reveal_once(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let mut latch = RevealOnce::default();
    use_intersection_observer(target, move |entries, observer| {
        let intersecting = entries.iter().any(|entry| entry.is_intersecting());
        if latch.observe(intersecting) {
            set_revealed.set(true);
            observer.disconnect();
        }
    });
    revealed
}
