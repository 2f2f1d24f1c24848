use leptos::prelude::*;

use super::components::IconGlyph;
use crate::icon::Icon;
use crate::portfolio::Profile;

const NAV_LINKS: [(&str, &str); 3] = [
    ("Projects", "#projects"),
    ("Skills", "#skills"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navbar(profile: Profile) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let nav_links = move |mobile: bool| {
        let class = if mobile {
            "block px-3 py-2 rounded-md text-base font-medium text-muted-foreground hover:text-foreground hover:bg-white/5"
        } else {
            "text-sm font-medium text-muted-foreground hover:text-foreground transition-colors"
        };
        NAV_LINKS
            .iter()
            .map(|(label, href)| {
                view! {
                    <a href=*href class=class on:click=move |_| set_menu_open.set(false)>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed inset-x-0 top-0 z-50 bg-background/80 backdrop-blur-md border-b border-white/5">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#" class="flex items-baseline gap-3">
                        <span class="text-xl font-bold font-display">{profile.name}</span>
                        <span class="hidden lg:inline text-sm text-muted-foreground">
                            {profile.tagline}
                        </span>
                    </a>
                    <div class="hidden md:flex items-center gap-8">{nav_links(false)}</div>
                    <button
                        type="button"
                        class="md:hidden p-2 rounded-md text-muted-foreground hover:text-foreground"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
                            view! { <IconGlyph icon classes="w-6 h-6" /> }
                        }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden px-2 pt-2 pb-3 space-y-1 border-t border-white/5">
                    {nav_links(true)}
                </div>
            </Show>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_navbar_links() {
        let profile = Profile {
            name: "Jane Roe".to_string(),
            email: "jane@example.com".to_string(),
            tagline: "Mobile Engineer".to_string(),
        };
        let html = Owner::new().with(|| view! { <Navbar profile /> }.to_html());

        assert!(html.contains("Jane Roe"));
        for (_, href) in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{href}\"")));
        }
        // mobile menu starts closed
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn test_menu_toggle_draws_a_glyph() {
        let html = Owner::new().with(|| view! { <Navbar profile=Profile::default() /> }.to_html());

        let start = html
            .find("aria-label=\"Toggle menu\"")
            .expect("toggle rendered");
        let end = start + html[start..].find("</button>").expect("toggle closed");
        let toggle = &html[start..end];
        assert!(toggle.contains("<svg"));
        assert!(toggle.contains("data-icon=\"menu\""));
        for d in Icon::Menu.paths() {
            assert!(toggle.contains(&format!("d=\"{d}\"")));
        }
    }
}
