use leptos::{html, prelude::*};

use super::components::{use_reveal_once, IconGlyph};
use crate::icon::Icon;
use crate::motion::reveal_style;
use crate::portfolio::Project;

#[component]
pub fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal_once(target);
    let Project {
        id,
        title,
        description,
        tags,
        link,
        repo,
    } = project;

    view! {
        <div
            node_ref=target
            data-project-id=id.to_string()
            style=move || reveal_style(index, revealed.get())
            class="project-card group flex flex-col bg-card/50 backdrop-blur-sm border border-white/5 rounded-2xl p-6 hover:bg-card hover:border-primary/20"
        >
            <div class="flex items-start justify-between gap-4 mb-4">
                <h3 class="text-xl font-bold font-display group-hover:text-primary transition-colors">
                    {title}
                </h3>
                <div class="flex gap-3 text-muted-foreground">
                    {link
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="Live project"
                                    class="hover:text-primary transition-colors"
                                >
                                    <IconGlyph icon=Icon::ExternalLink classes="w-5 h-5" />
                                </a>
                            }
                        })}
                    {repo
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="Source code"
                                    class="hover:text-primary transition-colors"
                                >
                                    <IconGlyph icon=Icon::Github classes="w-5 h-5" />
                                </a>
                            }
                        })}
                </div>
            </div>
            <p class="flex-grow text-muted-foreground mb-6 leading-relaxed">{description}</p>
            <div class="flex flex-wrap gap-2">
                {tags
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <span class="project-tag px-2.5 py-1 rounded-md bg-primary/10 text-primary text-xs font-mono">
                                {tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
