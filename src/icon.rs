/// Stroke glyphs drawn inline as 24x24 SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Code,
    Smartphone,
    Globe,
    Terminal,
    Database,
    Mail,
    ExternalLink,
    Github,
    Menu,
    Close,
}

impl Icon {
    #[cfg(test)]
    pub const ALL: [Icon; 10] = [
        Icon::Code,
        Icon::Smartphone,
        Icon::Globe,
        Icon::Terminal,
        Icon::Database,
        Icon::Mail,
        Icon::ExternalLink,
        Icon::Github,
        Icon::Menu,
        Icon::Close,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Icon::Code => "code",
            Icon::Smartphone => "smartphone",
            Icon::Globe => "globe",
            Icon::Terminal => "terminal",
            Icon::Database => "database",
            Icon::Mail => "mail",
            Icon::ExternalLink => "external-link",
            Icon::Github => "github",
            Icon::Menu => "menu",
            Icon::Close => "close",
        }
    }

    /// Path data in a `0 0 24 24` viewBox, stroked with `currentColor`.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Code => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
            Icon::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Icon::Globe => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
                "M12 2a14.5 14.5 0 0 0 0 20a14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
            Icon::Database => &[
                "M3 5c0 1.66 4 3 9 3s9-1.34 9-3-4-3-9-3-9 1.34-9 3",
                "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
                "M3 12c0 1.66 4 3 9 3s9-1.34 9-3",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 6-10 7L2 6",
            ],
            Icon::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

/// Kind of a skill group, derived from its free-form category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Language,
    Mobile,
    Framework,
    Tool,
    Other,
}

impl CategoryKind {
    // checked in order, first hit wins
    const KEYWORDS: [(&'static str, CategoryKind); 4] = [
        ("Language", CategoryKind::Language),
        ("Mobile", CategoryKind::Mobile),
        ("Framework", CategoryKind::Framework),
        ("Tool", CategoryKind::Tool),
    ];

    pub fn classify(category: &str) -> Self {
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| category.contains(keyword))
            .map(|(_, kind)| *kind)
            .unwrap_or(CategoryKind::Other)
    }

    pub fn icon(self) -> Icon {
        match self {
            CategoryKind::Language => Icon::Code,
            CategoryKind::Mobile => Icon::Smartphone,
            CategoryKind::Framework => Icon::Globe,
            CategoryKind::Tool => Icon::Terminal,
            CategoryKind::Other => Icon::Database,
        }
    }
}

pub fn category_icon(category: &str) -> Icon {
    CategoryKind::classify(category).icon()
}
