// Typography Components
// Headings, body text, captions, keyboard keys and code

use crate::tokens::*;
use zoon::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    #[default]
    Xl2,
    Xl3,
    Xl4,
    Xl5,
}

impl HeadingSize {
    pub fn to_px(self) -> u32 {
        match self {
            HeadingSize::Xs => FONT_SIZE_12,
            HeadingSize::Sm => FONT_SIZE_14,
            HeadingSize::Md => FONT_SIZE_16,
            HeadingSize::Lg => FONT_SIZE_18,
            HeadingSize::Xl => FONT_SIZE_20,
            HeadingSize::Xl2 => FONT_SIZE_24,
            HeadingSize::Xl3 => FONT_SIZE_30,
            HeadingSize::Xl4 => FONT_SIZE_36,
            HeadingSize::Xl5 => FONT_SIZE_48,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingVariant {
    #[default]
    Default,
    Mono,
    Uppercase,
}

pub struct HeadingBuilder {
    text: String,
    level: u8,
    size: HeadingSize,
    variant: HeadingVariant,
    accent: bool,
}

impl HeadingBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: 2,
            size: HeadingSize::default(),
            variant: HeadingVariant::default(),
            accent: false,
        }
    }

    /// Document outline level, clamped to 1..=6.
    pub fn level(mut self, level: u8) -> Self {
        self.level = level.clamp(1, 6);
        self
    }

    pub fn size(mut self, size: HeadingSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: HeadingVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Acid bar hanging in the left gutter.
    pub fn accent(mut self) -> Self {
        self.accent = true;
        self
    }

    pub fn build(self) -> impl Element {
        let family = match self.variant {
            HeadingVariant::Mono => FONT_FAMILY_MONO,
            HeadingVariant::Default | HeadingVariant::Uppercase => FONT_FAMILY_SANS,
        };
        let mut heading = RawHtmlEl::new(heading_tag(self.level))
            .style("margin", "0")
            .style("font-family", family)
            .style("font-size", &format!("{}px", self.size.to_px()))
            .style("font-weight", &FONT_WEIGHT_7.to_string())
            .style("line-height", "1.25")
            .style("color", COLOR_WHITE);
        if self.variant == HeadingVariant::Uppercase {
            heading = heading
                .style("text-transform", "uppercase")
                .style("letter-spacing", &format!("{LETTER_SPACING_WIDER}em"));
        }
        if self.accent {
            heading = heading
                .style("border-left", &format!("{BORDER_WIDTH_4}px solid {COLOR_ACID}"))
                .style("margin-left", &format!("-{SPACING_16}px"))
                .style("padding-left", &format!("{}px", SPACING_16 - BORDER_WIDTH_4));
        }
        heading.child(Text::new(self.text))
    }
}

fn heading_tag(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}

pub fn heading(text: impl Into<String>) -> HeadingBuilder {
    HeadingBuilder::new(text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    Xs,
    Sm,
    #[default]
    Base,
    Lg,
}

impl TextSize {
    pub fn to_px(self) -> u32 {
        match self {
            TextSize::Xs => FONT_SIZE_12,
            TextSize::Sm => FONT_SIZE_14,
            TextSize::Base => FONT_SIZE_16,
            TextSize::Lg => FONT_SIZE_18,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTone {
    #[default]
    Default,
    Muted,
    Dim,
    Accent,
    Success,
    Warning,
    Error,
    Info,
}

impl TextTone {
    pub fn color(self) -> &'static str {
        match self {
            TextTone::Default => COLOR_WHITE,
            TextTone::Muted => COLOR_MUTED,
            TextTone::Dim => COLOR_DIM,
            TextTone::Accent => COLOR_ACID,
            TextTone::Success => COLOR_SUCCESS,
            TextTone::Warning => COLOR_WARNING,
            TextTone::Error => COLOR_ERROR,
            TextTone::Info => COLOR_INFO,
        }
    }
}

pub struct TextBuilder {
    content: String,
    size: TextSize,
    tone: TextTone,
    mono: bool,
    uppercase: bool,
    bold: bool,
}

impl TextBuilder {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: TextSize::default(),
            tone: TextTone::default(),
            mono: false,
            uppercase: false,
            bold: false,
        }
    }

    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    pub fn tone(mut self, tone: TextTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn mono(mut self) -> Self {
        self.mono = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn build(self) -> impl Element {
        let family = if self.mono { FONT_FAMILY_MONO } else { FONT_FAMILY_SANS };
        let weight = if self.bold { FontWeight::Bold } else { FontWeight::Regular };
        let uppercase = self.uppercase;
        Paragraph::new()
            .s(Font::new()
                .family([FontFamily::new(family)])
                .size(self.size.to_px())
                .weight(weight)
                .color(self.tone.color()))
            .update_raw_el(move |raw_el| {
                let raw_el = raw_el.style("line-height", "1.625");
                if uppercase {
                    raw_el
                        .style("text-transform", "uppercase")
                        .style("letter-spacing", &format!("{LETTER_SPACING_WIDER}em"))
                } else {
                    raw_el
                }
            })
            .content(self.content)
    }
}

pub fn text(content: impl Into<String>) -> TextBuilder {
    TextBuilder::new(content)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptionSize {
    Xs,
    #[default]
    Sm,
}

/// Small mono label, uppercase and tracked out.
pub fn caption(content: impl Into<String>) -> CaptionBuilder {
    CaptionBuilder {
        content: content.into(),
        size: CaptionSize::default(),
        tone: TextTone::Muted,
    }
}

pub struct CaptionBuilder {
    content: String,
    size: CaptionSize,
    tone: TextTone,
}

impl CaptionBuilder {
    pub fn size(mut self, size: CaptionSize) -> Self {
        self.size = size;
        self
    }

    /// Only `Muted`, `Dim` and `Accent` differ visually; anything else reads as muted.
    pub fn tone(mut self, tone: TextTone) -> Self {
        self.tone = match tone {
            TextTone::Dim | TextTone::Accent => tone,
            _ => TextTone::Muted,
        };
        self
    }

    pub fn build(self) -> impl Element {
        let size = match self.size {
            CaptionSize::Xs => FONT_SIZE_10,
            CaptionSize::Sm => FONT_SIZE_12,
        };
        El::new()
            .s(font_mono())
            .s(Font::new().size(size).color(self.tone.color()))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("text-transform", "uppercase")
                    .style("letter-spacing", &format!("{LETTER_SPACING_WIDER}em"))
            })
            .child(Text::new(self.content))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KbdSize {
    Sm,
    #[default]
    Md,
}

impl KbdSize {
    /// (min width, height, font size)
    fn metrics(self) -> (u32, u32, u32) {
        match self {
            KbdSize::Sm => (24, 24, FONT_SIZE_10),
            KbdSize::Md => (32, 28, FONT_SIZE_12),
        }
    }
}

pub fn kbd(key: impl Into<String>) -> impl Element {
    kbd_sized(key, KbdSize::Md)
}

pub fn kbd_sized(key: impl Into<String>, size: KbdSize) -> impl Element {
    let (min_width, height, font_size) = size.metrics();
    RawHtmlEl::new("kbd")
        .style("display", "inline-flex")
        .style("align-items", "center")
        .style("justify-content", "center")
        .style("box-sizing", "border-box")
        .style("min-width", &format!("{min_width}px"))
        .style("height", &format!("{height}px"))
        .style("padding", &format!("2px {SPACING_8}px"))
        .style("font-family", FONT_FAMILY_MONO)
        .style("font-size", &format!("{font_size}px"))
        .style("font-weight", &FONT_WEIGHT_7.to_string())
        .style("background-color", COLOR_CONCRETE)
        .style("color", COLOR_WHITE)
        .style("border", &format!("{BORDER_WIDTH_1}px solid {COLOR_LINE}"))
        .child(Text::new(key.into()))
}

pub struct CodeBuilder {
    source: String,
    block: bool,
}

impl CodeBuilder {
    /// Full-width scrollable block instead of an inline run.
    pub fn block(mut self) -> Self {
        self.block = true;
        self
    }

    pub fn build(self) -> impl Element {
        let code = RawHtmlEl::new("code")
            .style("font-family", FONT_FAMILY_MONO)
            .style("font-size", &format!("{FONT_SIZE_14}px"))
            .style("background-color", COLOR_CONCRETE)
            .style("color", COLOR_ACID)
            .style("border", &format!("{BORDER_WIDTH_1}px solid {COLOR_LINE}"));
        let code = if self.block {
            code.style("display", "block")
                .style("box-sizing", "border-box")
                .style("width", "100%")
                .style("padding", &format!("{SPACING_16}px"))
                .style("overflow-x", "auto")
                .style("white-space", "pre")
        } else {
            code.style("padding", "2px 6px")
        };
        code.child(Text::new(self.source))
    }
}

pub fn code(source: impl Into<String>) -> CodeBuilder {
    CodeBuilder {
        source: source.into(),
        block: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_defaults_to_h2_at_2xl() {
        let heading = heading("Title");
        assert_eq!(heading.level, 2);
        assert_eq!(heading.size.to_px(), 24);
        assert_eq!(heading_tag(heading.level), "h2");
    }

    #[test]
    fn heading_level_is_clamped() {
        assert_eq!(heading_tag(heading("x").level(0).level), "h1");
        assert_eq!(heading_tag(heading("x").level(9).level), "h6");
    }

    #[test]
    fn text_tones_map_to_palette() {
        assert_eq!(TextTone::Accent.color(), COLOR_ACID);
        assert_eq!(TextTone::Muted.color(), COLOR_MUTED);
        assert_eq!(TextTone::Error.color(), COLOR_ERROR);
        assert_eq!(TextSize::default().to_px(), 16);
    }

    #[test]
    fn caption_only_keeps_its_own_tones() {
        assert_eq!(caption("x").tone(TextTone::Accent).tone, TextTone::Accent);
        assert_eq!(caption("x").tone(TextTone::Error).tone, TextTone::Muted);
    }
}
