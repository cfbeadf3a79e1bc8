// Icon Component
// Inline Lucide outlines drawn with currentColor

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    ArrowRight,
    ArrowUpRight,
    Calendar,
    Check,
    ChevronDown,
    Github,
    LoaderCircle,
    Mail,
    Search,
    Trash,
    X,
    Zap,
}

impl IconName {
    fn body(self) -> &'static str {
        match self {
            IconName::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            IconName::ArrowUpRight => r#"<path d="M7 7h10v10"/><path d="M7 17 17 7"/>"#,
            IconName::Calendar => {
                r#"<path d="M8 2v4"/><path d="M16 2v4"/><rect width="18" height="18" x="3" y="4" rx="2"/><path d="M3 10h18"/>"#
            }
            IconName::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
            IconName::ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
            IconName::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            IconName::LoaderCircle => r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#,
            IconName::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            IconName::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            IconName::Trash => {
                r#"<path d="M3 6h18"/><path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"/><path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"/><line x1="10" x2="10" y1="11" y2="17"/><line x1="14" x2="14" y1="11" y2="17"/>"#
            }
            IconName::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            IconName::Zap => {
                r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconSize {
    Small,
    Medium,
    Large,
}

impl IconSize {
    pub fn to_px(self) -> u32 {
        match self {
            IconSize::Small => 16,
            IconSize::Medium => 20,
            IconSize::Large => 24,
        }
    }
}

/// Complete `<svg>` markup for `name` at `size_px`.
pub fn svg_markup(name: IconName, size_px: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size_px}" height="{size_px}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="square" stroke-linejoin="miter" aria-hidden="true">{}</svg>"#,
        name.body()
    )
}

pub struct IconBuilder {
    name: IconName,
    size: IconSize,
    color: Option<&'static str>,
}

impl IconBuilder {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: IconSize::Small,
            color: None,
        }
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Without a color the icon inherits the surrounding text color.
    pub fn color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    pub fn build(self) -> impl Element {
        let size_px = self.size.to_px();
        let markup = svg_markup(self.name, size_px);
        let color = self.color.unwrap_or("currentColor");

        El::new()
            .s(Width::exact(size_px))
            .s(Height::exact(size_px))
            .s(Align::center())
            .child(
                RawHtmlEl::new("span")
                    .style("display", "inline-flex")
                    .style("color", color)
                    .inner_markup(&markup),
            )
    }
}

pub fn icon(name: IconName) -> IconBuilder {
    IconBuilder::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_is_sized_and_uses_current_color() {
        let markup = svg_markup(IconName::Check, 20);
        assert!(markup.starts_with("<svg"));
        assert!(markup.contains(r#"width="20" height="20""#));
        assert!(markup.contains(r#"stroke="currentColor""#));
        assert!(markup.contains(r#"d="M20 6 9 17l-5-5""#));
        assert!(markup.ends_with("</svg>"));
    }
}
