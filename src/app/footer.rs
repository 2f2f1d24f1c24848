use leptos::prelude::*;

use crate::build_info::build_year;

#[component]
pub fn Footer(name: String) -> impl IntoView {
    let year = build_year().map(|y| format!("{y} ")).unwrap_or_default();
    view! {
        <footer class="py-8 border-t border-white/5">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center text-sm text-muted-foreground">
                {format!("© {year}{name}. All rights reserved.")}
            </div>
        </footer>
    }
}
