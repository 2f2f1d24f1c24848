use leptos::{html, prelude::*};
use leptos_meta::Title;

use super::components::{use_reveal_once, IconGlyph, SectionHeading};
use super::contact::ContactSection;
use super::footer::Footer;
use super::navbar::Navbar;
use super::project_card::ProjectCard;
use super::scroll::use_scroll_transform;
use crate::icon::category_icon;
use crate::motion::{parallax_style, reveal_style, FADE_OUT, PARALLAX};
use crate::portfolio::{Project, SkillGroup, PORTFOLIO};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let portfolio = &*PORTFOLIO;
    let parallax = use_scroll_transform(PARALLAX);
    let fade = use_scroll_transform(FADE_OUT);

    view! {
        <Title text="Portfolio" />
        <div class="relative min-h-screen bg-background text-foreground overflow-hidden">
            <div
                aria-hidden="true"
                class="pointer-events-none absolute inset-x-0 top-0 h-[600px] -z-10 bg-gradient-to-b from-primary/20 to-transparent blur-3xl"
                style=move || parallax_style(parallax.get(), fade.get())
            ></div>
            <Navbar profile=portfolio.profile.clone() />
            <ProjectsSection projects=portfolio.projects.clone() />
            <SkillsSection skills=portfolio.skills.clone() />
            <ContactSection profile=portfolio.profile.clone() />
            <Footer name=portfolio.profile.name.clone() />
        </div>
    }
}

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id="projects" class="py-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="Scalable applications impacting millions of users"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || projects.clone().into_iter().enumerate()
                        key=|(_, project)| project.id
                        children=|(index, project)| view! { <ProjectCard project index /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection(skills: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <section id="skills" class="py-24 relative overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <SectionHeading
                    title="Technical Expertise"
                    subtitle="A comprehensive toolkit for modern application development"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || skills.clone().into_iter().enumerate()
                        key=|(_, group)| group.id
                        children=|(index, group)| view! { <SkillBlock group index /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBlock(group: SkillGroup, index: usize) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal_once(target);
    let icon = category_icon(&group.category);
    let SkillGroup {
        id,
        category,
        items,
    } = group;

    view! {
        <div
            node_ref=target
            data-skill-group-id=id.to_string()
            style=move || reveal_style(index, revealed.get())
            class="skill-group bg-card/50 backdrop-blur-sm border border-white/5 rounded-2xl p-6 hover:bg-card hover:border-primary/20"
        >
            <div class="flex items-center gap-3 mb-6">
                <div class="p-2.5 rounded-lg bg-blue-500/10 text-blue-400">
                    <IconGlyph icon classes="w-6 h-6" />
                </div>
                <h3 class="text-xl font-bold font-display">{category}</h3>
            </div>
            <div class="flex flex-wrap gap-2">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="skill-chip px-3 py-1.5 rounded-md bg-white/5 text-sm font-mono text-muted-foreground border border-white/5 hover:border-primary/30 hover:text-primary transition-colors">
                                {item}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn project(id: u32, title: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            tags: vec![format!("{title}-tag")],
            link: None,
            repo: None,
        }
    }

    fn group(id: u32, category: &str, items: &[&str]) -> SkillGroup {
        SkillGroup {
            id,
            category: category.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    // Helper to pull attribute values out of rendered html, in document order
    fn attr_values(html: &str, attr: &str) -> Vec<String> {
        let needle = format!("{attr}=\"");
        html.match_indices(&needle)
            .map(|(i, _)| {
                let rest = &html[i + needle.len()..];
                rest[..rest.find('"').unwrap()].to_string()
            })
            .collect()
    }

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| html.find(n).unwrap_or_else(|| panic!("{n} not rendered")))
            .collect()
    }

    fn is_sorted(v: &[usize]) -> bool {
        v.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_one_card_per_project_in_order() {
        let projects = vec![project(30, "Gamma"), project(10, "Alpha"), project(20, "Beta")];
        let html = Owner::new().with(|| view! { <ProjectsSection projects /> }.to_html());

        assert_eq!(attr_values(&html, "data-project-id"), vec!["30", "10", "20"]);
        assert_eq!(html.matches("class=\"project-card").count(), 3);
        assert!(is_sorted(&positions(&html, &["Gamma", "Alpha", "Beta"])));
        assert!(html.contains("Featured Projects"));
        // hidden until the card scrolls into view
        assert!(html.contains("opacity: 0; transform: translateY(20px);"));
        assert!(html.contains("ease-out 200ms"));
        // hover colours keep animating under the inline transition
        assert!(html.contains("background-color 300ms, border-color 300ms;"));
    }

    #[test]
    fn test_project_links_optional() {
        let mut linked = project(1, "Linked");
        linked.link = Some("https://example.com/live".to_string());
        linked.repo = Some("https://example.com/repo".to_string());
        let projects = vec![linked, project(2, "Plain")];
        let html = Owner::new().with(|| view! { <ProjectsSection projects /> }.to_html());

        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
        assert!(html.contains("https://example.com/live"));
        assert!(html.contains("https://example.com/repo"));
    }

    #[test]
    fn test_skill_blocks_and_chips_in_order() {
        let skills = vec![
            group(2, "Programming Languages", &["Rust", "Kotlin", "Swift"]),
            group(1, "Build Tools", &["Cargo", "Gradle"]),
            group(5, "Soft Skills", &[]),
        ];
        let html = Owner::new().with(|| view! { <SkillsSection skills /> }.to_html());

        assert_eq!(attr_values(&html, "data-skill-group-id"), vec!["2", "1", "5"]);
        assert_eq!(html.matches("class=\"skill-chip").count(), 5);
        assert!(is_sorted(&positions(
            &html,
            &["Programming Languages", "Rust", "Kotlin", "Swift", "Build Tools", "Cargo", "Gradle", "Soft Skills"],
        )));
    }

    #[test]
    fn test_skill_icons() {
        let skills = vec![
            group(1, "Programming Languages", &["Rust"]),
            group(2, "Mobile Platforms", &["iOS"]),
            group(3, "Frameworks", &["Leptos"]),
            group(4, "Build Tools", &["Cargo"]),
            group(5, "Unknown", &["?"]),
        ];
        let html = Owner::new().with(|| view! { <SkillsSection skills /> }.to_html());

        assert!(is_sorted(&positions(
            &html,
            &[
                "data-icon=\"code\"",
                "data-icon=\"smartphone\"",
                "data-icon=\"globe\"",
                "data-icon=\"terminal\"",
                "data-icon=\"database\"",
            ],
        )));
    }

    #[test]
    fn test_empty_collections() {
        let html = Owner::new().with(|| {
            view! {
                <ProjectsSection projects=vec![] />
                <SkillsSection skills=vec![] />
            }
            .to_html()
        });
        assert!(attr_values(&html, "data-project-id").is_empty());
        assert!(attr_values(&html, "data-skill-group-id").is_empty());
        assert!(html.contains("Technical Expertise"));
    }
}
