use crate::router::{Route, Router};
use moonzoon_brutalui::*;
use zoon::*;

pub fn page(router: &Router) -> impl Element {
    let router = router.clone();
    section()
        .size(SectionSize::Full)
        .item(
            Column::new()
                .s(Width::fill().max(672))
                .s(Height::screen())
                .s(Padding::new().x(SPACING_24))
                .s(Align::center())
                .s(Gap::new().y(SPACING_24))
                .s(Font::new().center())
                .update_raw_el(|raw_el| raw_el.style("justify-content", "center").style("align-items", "center"))
                .item(
                    heading("MINIMAX DEMO")
                        .level(1)
                        .size(HeadingSize::Xl5)
                        .variant(HeadingVariant::Mono)
                        .accent()
                        .build(),
                )
                .item(
                    text("A TanStack React Router application with a custom brutalist design system.")
                        .tone(TextTone::Muted)
                        .size(TextSize::Lg)
                        .build(),
                )
                .item(
                    text("Rust • MoonZoon • WebAssembly")
                        .tone(TextTone::Accent)
                        .size(TextSize::Sm)
                        .mono()
                        .uppercase()
                        .bold()
                        .build(),
                )
                .item(
                    button()
                        .label("Explore the Design System")
                        .end_icon(IconName::ArrowRight)
                        .on_press(move || router.go(Route::DesignSystem))
                        .build(),
                ),
        )
        .build()
}
