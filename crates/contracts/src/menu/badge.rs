//! Badge labels -> semantic kind, icon and CSS class.

use crate::shared::text::{escape_html, normalize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    Popular,
    Hot,
    Veg,
    /// Unrecognised label, shown as plain text
    Plain,
}

impl BadgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeKind::Popular => "popular",
            BadgeKind::Hot => "hot",
            BadgeKind::Veg => "veg",
            BadgeKind::Plain => "none",
        }
    }

    /// Modifier class, e.g. `badge--hot`. Plain badges have none.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            BadgeKind::Popular => Some("badge--popular"),
            BadgeKind::Hot => Some("badge--hot"),
            BadgeKind::Veg => Some("badge--veg"),
            BadgeKind::Plain => None,
        }
    }

    /// Inline SVG glyph: star, chili, leaf.
    pub fn icon_svg(&self) -> Option<&'static str> {
        match self {
            BadgeKind::Popular => Some(
                r#"<svg aria-hidden="true" viewBox="0 0 24 24" fill="currentColor"><path d="M12 17.27 18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z"/></svg>"#,
            ),
            BadgeKind::Hot => Some(
                r#"<svg aria-hidden="true" viewBox="0 0 24 24" fill="currentColor"><path d="M13 3c0 2-1 3-3 4 2 0 4-1 5-3 3 2 6 9 1 14-4 4-10 3-12-1-2-3-1-7 2-9-1 2-1 4 0 5 1 1 3 1 4 0 2-1 3-4 3-6z"/></svg>"#,
            ),
            BadgeKind::Veg => Some(
                r#"<svg aria-hidden="true" viewBox="0 0 24 24" fill="currentColor"><path d="M5 21c7 0 14-5 14-14V5h-2C8 5 3 12 3 19v2h2zm0-2c0-5.52 4.48-10 10-10 0 5.52-4.48 10-10 10z"/></svg>"#,
            ),
            BadgeKind::Plain => None,
        }
    }
}

/// Classify an already-normalized label. First matching rule wins.
pub fn classify(key: &str) -> BadgeKind {
    if key == "beliebt" || key.contains("empfohlen") || key.contains("top") {
        return BadgeKind::Popular;
    }
    if ["scharf", "hot", "spicy"].iter().any(|w| key.contains(w)) {
        return BadgeKind::Hot;
    }
    if key.contains("vegan") || key.contains("vegetar") {
        return BadgeKind::Veg;
    }
    BadgeKind::Plain
}

/// Display form of one badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    /// Trimmed raw label, used for `title` and `aria-label`
    pub label: String,
    pub kind: BadgeKind,
    /// Inner markup; the label part is always HTML-escaped
    pub markup: String,
}

impl BadgeView {
    pub fn from_label(raw: &str) -> Self {
        let label = raw.trim().to_string();
        let kind = classify(&normalize(&label));
        let escaped = escape_html(&label);
        let markup = match kind.icon_svg() {
            Some(svg) => format!(r#"{}<span class="badge-label">{}</span>"#, svg, escaped),
            None => escaped,
        };
        Self {
            label,
            kind,
            markup,
        }
    }

    /// `badge`, plus `has-icon badge--<kind>` for recognised kinds.
    pub fn class(&self) -> String {
        match self.kind.css_class() {
            Some(modifier) => format!("badge has-icon {}", modifier),
            None => "badge".to_string(),
        }
    }
}
