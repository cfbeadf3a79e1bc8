use crate::config::initial_pagination;
use moonzoon_brutalui::*;
use shared::{demo_users, ShowcaseConfig, UserRecord, UserStatus};
use zoon::*;

pub fn page(config: &ShowcaseConfig, toaster: &Toaster) -> impl Element {
    Column::new()
        .s(Width::fill())
        .item(header())
        .item(
            Column::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .s(Padding::new().x(SPACING_24).y(SPACING_32))
                .item(typography_section())
                .item(buttons_section())
                .item(inputs_section())
                .item(forms_section(toaster))
                .item(data_table_section(config))
                .item(toasts_section(toaster))
                .item(cards_section())
                .item(visual_effects_section())
                .item(color_palette_section()),
        )
        .item(footer())
}

fn header() -> impl Element {
    let github_hovered = Mutable::new(false);
    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).y(SPACING_16))
        .s(Background::new().color(COLOR_SURFACE))
        .s(Borders::new().bottom(Border::new().width(BORDER_WIDTH_2).color(COLOR_LINE)))
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "sticky")
                .style("top", "0")
                .style("z-index", "50")
        })
        .item(
            Row::new()
                .s(Gap::new().x(SPACING_12))
                .s(Align::new().center_y())
                .item(
                    El::new()
                        .s(Width::exact(40))
                        .s(Height::exact(40))
                        .s(Background::new().color(COLOR_PRIMARY))
                        .child(
                            El::new()
                                .s(Align::center())
                                .child(icon(IconName::Zap).size(IconSize::Large).color(COLOR_WHITE).build()),
                        ),
                )
                .item(
                    heading("Design System")
                        .level(1)
                        .size(HeadingSize::Lg)
                        .variant(HeadingVariant::Mono)
                        .build(),
                ),
        )
        .item(
            El::new()
                .s(Align::new().right().center_y())
                .s(transition_colors())
                .s(Font::new().color_signal(
                    github_hovered.signal().map(|hovered| if hovered { COLOR_PRIMARY } else { COLOR_MUTED }),
                ))
                .on_hovered_change(move |hovered| github_hovered.set_neq(hovered))
                .child(
                    RawHtmlEl::new("a")
                        .attr("href", "https://github.com")
                        .attr("target", "_blank")
                        .attr("rel", "noopener noreferrer")
                        .attr("aria-label", "GitHub")
                        .style("color", "inherit")
                        .child(icon(IconName::Github).size(IconSize::Medium).build()),
                ),
        )
}

fn footer() -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().y(SPACING_32))
        .s(Background::new().color(COLOR_SURFACE))
        .s(Borders::new().top(Border::new().width(BORDER_WIDTH_2).color(COLOR_LINE)))
        .s(Font::new().center())
        .update_raw_el(|raw_el| raw_el.style("margin-top", &format!("{SPACING_64}px")))
        .child(
            text("Built with the Brutalist Design System")
                .tone(TextTone::Muted)
                .size(TextSize::Sm)
                .build(),
        )
}

/// Page band with a title, an intro line and the showcase content.
fn showcase_section(
    id: &str,
    title: &str,
    title_size: HeadingSize,
    intro: &str,
    grid_pattern: bool,
    content: impl Element,
) -> impl Element {
    let section = section().id(id).size(SectionSize::Large);
    let section = if grid_pattern { section.grid_pattern() } else { section };
    section
        .item(
            El::new()
                .s(Padding::new().bottom(SPACING_32))
                .child(heading(title).level(2).size(title_size).build()),
        )
        .item(
            El::new()
                .s(Width::fill().max(672))
                .s(Padding::new().bottom(SPACING_24))
                .child(text(intro).tone(TextTone::Muted).build()),
        )
        .item(content)
        .build()
}

/// Responsive grid of cards, as many columns of at least `min_column` px as fit.
fn card_grid(items: Vec<RawElOrText>, min_column: u32) -> impl Element {
    Column::new()
        .s(Width::fill())
        .update_raw_el(move |raw_el| {
            raw_el
                .style("display", "grid")
                .style(
                    "grid-template-columns",
                    &format!("repeat(auto-fit, minmax({min_column}px, 1fr))"),
                )
                .style("gap", &format!("{SPACING_24}px"))
                .style("align-items", "start")
        })
        .items(items)
}

fn stacked(items: Vec<RawElOrText>) -> impl Element {
    Column::new().s(Width::fill()).s(Gap::new().y(SPACING_16)).items(items)
}

fn wrapping_row(items: Vec<RawElOrText>) -> impl Element {
    Row::new().multiline().s(Gap::both(SPACING_12)).s(Align::new().center_y()).items(items)
}

fn titled_card(title: &str, description: Option<&str>, content: impl Element) -> impl Element {
    card()
        .item(card_header(title, description.map(str::to_owned)))
        .item(card_content(content))
        .build()
}

// ===== TYPOGRAPHY =====

fn typography_section() -> impl Element {
    let sample = |label: &str, level: u8, size: HeadingSize, title: &str| {
        Column::new()
            .s(Gap::new().y(SPACING_4))
            .item(caption(label).size(CaptionSize::Xs).build())
            .item(heading(title).level(level).size(size).build())
            .unify()
    };
    let headings = titled_card(
        "Headings",
        Some("Space Grotesk in multiple weights"),
        stacked(vec![
            sample("Display (5xl)", 1, HeadingSize::Xl5, "Display Heading"),
            sample("Hero (4xl)", 2, HeadingSize::Xl4, "Hero Title"),
            sample("Section (3xl)", 3, HeadingSize::Xl3, "Section Title"),
            sample("Subsection (2xl)", 4, HeadingSize::Xl2, "Subsection Title"),
        ]),
    );
    let text_styles = titled_card(
        "Text Styles",
        Some("Monospace for all text elements"),
        stacked(vec![
            text("Bold Body Text").size(TextSize::Lg).bold().build().unify(),
            text("Muted text for secondary information").tone(TextTone::Muted).build().unify(),
            text("Dim text for tertiary").tone(TextTone::Dim).build().unify(),
            text("Accent text for emphasis").tone(TextTone::Accent).build().unify(),
            Row::new()
                .s(Gap::new().x(SPACING_8))
                .s(Align::new().center_y())
                .item(kbd_sized("Ctrl", KbdSize::Sm))
                .item(kbd_sized("K", KbdSize::Sm))
                .item(text("Keyboard shortcut").size(TextSize::Sm).build())
                .unify(),
            code(r#"const greeting = "Hello World";"#).build().unify(),
        ]),
    );

    showcase_section(
        "typography",
        "Typography",
        HeadingSize::Xl4,
        "Distinctive type system using Space Grotesk for headings and monospace for technical text. Bold, brutalist, and unmistakably modern.",
        true,
        card_grid(vec![headings.unify(), text_styles.unify()], 420),
    )
}

// ===== BUTTONS =====

fn buttons_section() -> impl Element {
    let variants = wrapping_row(
        [
            ("Primary", ButtonVariant::Primary),
            ("Secondary", ButtonVariant::Secondary),
            ("Outline", ButtonVariant::Outline),
            ("Ghost", ButtonVariant::Ghost),
        ]
        .into_iter()
        .map(|(label, variant)| button().label(label).variant(variant).build().unify())
        .collect(),
    );
    let sizes = wrapping_row(
        [
            ("Small", ButtonSize::Small),
            ("Medium", ButtonSize::Medium),
            ("Large", ButtonSize::Large),
        ]
        .into_iter()
        .map(|(label, size)| button().label(label).size(size).build().unify())
        .collect(),
    );
    let with_icons = wrapping_row(vec![
        button().label("Get Started").start_icon(IconName::ArrowRight).build().unify(),
        button()
            .label("Learn More")
            .variant(ButtonVariant::Outline)
            .end_icon(IconName::ArrowRight)
            .build()
            .unify(),
        button()
            .label("View Docs")
            .variant(ButtonVariant::Secondary)
            .end_icon(IconName::ArrowUpRight)
            .build()
            .unify(),
        button().label("Processing...").loading(true).build().unify(),
    ]);
    let states = wrapping_row(vec![
        button().label("Default").build().unify(),
        button().label("Disabled").disabled(true).build().unify(),
        button().label("Full Width Button").full_width(true).build().unify(),
    ]);

    showcase_section(
        "buttons",
        "Buttons",
        HeadingSize::Xl3,
        "High-contrast buttons with sharp edges and bold hover states. No rounded corners, no subtlety.",
        false,
        stacked(vec![
            titled_card("Variants", None, variants).unify(),
            titled_card("Sizes", None, sizes).unify(),
            titled_card("With Icons", None, with_icons).unify(),
            titled_card("States", None, states).unify(),
        ]),
    )
}

// ===== INPUTS =====

fn inputs_section() -> impl Element {
    let email = Mutable::new(String::new());
    let password = Mutable::new(String::new());

    let inputs = card_grid(
        vec![
            input()
                .label("Email Address")
                .placeholder("you@example.com")
                .start_icon(IconName::Mail)
                .text_signal(email.signal_cloned())
                .on_change(move |value| email.set_neq(value))
                .build()
                .unify(),
            input()
                .label("Password")
                .kind(InputKind::Password)
                .placeholder("Enter password")
                .helper_text("Must be at least 8 characters")
                .text_signal(password.signal_cloned())
                .on_change(move |value| password.set_neq(value))
                .build()
                .unify(),
            input()
                .label("Error State")
                .placeholder("Error input")
                .error_text("This field is required")
                .build()
                .unify(),
            input()
                .label("Disabled")
                .placeholder("Disabled input")
                .disabled(true)
                .build()
                .unify(),
        ],
        280,
    );

    showcase_section(
        "inputs",
        "Inputs",
        HeadingSize::Xl3,
        "Sharp-edged inputs with bold focus states. No border radius, no soft shadows.",
        true,
        titled_card("Form Inputs", None, inputs),
    )
}

// ===== FORMS =====

fn forms_section(toaster: &Toaster) -> impl Element {
    let contact = FormHandle::new(
        FormState::new()
            .field("email", "", [Rule::Required, Rule::Email])
            .field("password", "", [Rule::Required])
            .field("role", "user", [Rule::Required]),
    );
    let contact_form = form(&contact)
        .item(
            form_field(&contact, "email")
                .label("Email")
                .placeholder("you@example.com")
                .kind(InputKind::Email)
                .build(),
        )
        .item(
            form_field(&contact, "password")
                .label("Password")
                .placeholder("Enter password")
                .kind(InputKind::Password)
                .build(),
        )
        .item(
            form_select(&contact, "role")
                .label("Role")
                .option("user", "User")
                .option("admin", "Admin")
                .option("editor", "Editor")
                .build(),
        )
        .on_submit({
            let toaster = toaster.clone();
            move |values| {
                let toaster = toaster.clone();
                async move {
                    zoon::println!("Form submitted: {values:?}");
                    Timer::sleep(1000).await;
                    let field = |name: &str| values.get(name).cloned().unwrap_or_default();
                    toaster.add(
                        ToastSpec::success("Form Submitted")
                            .description(format!("Signed up {} as {}.", field("email"), field("role"))),
                    );
                }
            }
        })
        .build();

    let settings = FormHandle::new(FormState::new().field("newsletter", "weekly", []));
    let inline_form = form(&settings)
        .item(
            form_select(&settings, "newsletter")
                .label("Newsletter")
                .option("daily", "Daily Digest")
                .option("weekly", "Weekly Roundup")
                .option("monthly", "Monthly Update")
                .on_change(|value| zoon::println!("Newsletter: {value}"))
                .build(),
        )
        .item(
            El::new().s(Padding::new().top(SPACING_8)).child(
                button()
                    .label("Delete")
                    .size(ButtonSize::Small)
                    .variant(ButtonVariant::Outline)
                    .start_icon(IconName::Trash)
                    .on_press(|| zoon::println!("Delete requested"))
                    .build(),
            ),
        )
        .without_submit()
        .build();

    showcase_section(
        "forms",
        "Forms",
        HeadingSize::Xl3,
        "Field registry with validation and a submit lifecycle. Errors show once a field was touched.",
        false,
        card_grid(
            vec![
                titled_card("Contact Form", Some("Complete form with validation"), contact_form).unify(),
                titled_card("Inline Form", Some("Compact layout for settings"), inline_form).unify(),
            ],
            420,
        ),
    )
}

// ===== DATA TABLE =====

fn user_columns() -> Vec<ColumnSpec<UserRecord>> {
    vec![
        ColumnSpec::new("id", "ID", |user: &UserRecord| user.id)
            .cell(|user| text(format!("#{}", user.id)).mono().build().unify()),
        ColumnSpec::new("name", "Name", |user: &UserRecord| user.name.clone())
            .sortable()
            .cell(|user| text(user.name.clone()).bold().build().unify()),
        ColumnSpec::new("email", "Email", |user: &UserRecord| user.email.clone())
            .cell(|user| text(user.email.clone()).tone(TextTone::Muted).size(TextSize::Sm).build().unify()),
        ColumnSpec::new("role", "Role", |user: &UserRecord| user.role.clone())
            .sortable()
            .cell(|user| kbd_sized(user.role.clone(), KbdSize::Sm).unify()),
        ColumnSpec::new("status", "Status", |user: &UserRecord| user.status.as_str())
            .sortable()
            .cell(|user| {
                let tone = match user.status {
                    UserStatus::Active => TextTone::Success,
                    UserStatus::Inactive => TextTone::Dim,
                };
                text(user.status.as_str().to_uppercase()).tone(tone).size(TextSize::Sm).build().unify()
            }),
    ]
}

fn data_table_section(config: &ShowcaseConfig) -> impl Element {
    let filters = Mutable::new(Vec::<ColumnFilter>::new());

    let name_filter = input()
        .placeholder("Filter by name...")
        .kind(InputKind::Search)
        .start_icon(IconName::Search)
        .size(InputSize::Small)
        .on_change({
            let filters = filters.clone();
            move |needle| {
                let next = if needle.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![ColumnFilter::contains("name", needle.trim())]
                };
                filters.set(next);
            }
        })
        .build();

    let table = data_table::<UserRecord>()
        .rows(demo_users())
        .columns(user_columns())
        .filters(filters)
        .on_filters_change(|filters| zoon::println!("Table filters: {filters:?}"))
        .initial_pagination(initial_pagination(config))
        .empty_message("No users match the filter.")
        .build();

    showcase_section(
        "data-table",
        "Data Table",
        HeadingSize::Xl3,
        "Filter, sort and paginate with brutalist styling. Sharp grid lines, monospace data, clear hierarchy.",
        true,
        titled_card(
            "User Management",
            Some("Sortable user data with status indicators"),
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(SPACING_16))
                .item(El::new().s(Width::fill().max(320)).child(name_filter))
                .item(table),
        ),
    )
}

// ===== TOASTS =====

fn toasts_section(toaster: &Toaster) -> impl Element {
    let trigger = |label: &str, variant: ButtonVariant, spec: ToastSpec| {
        let toaster = toaster.clone();
        button()
            .label(label)
            .variant(variant)
            .size(ButtonSize::Small)
            .on_press(move || {
                toaster.add(spec.clone());
            })
            .build()
            .unify()
    };
    let triggers = wrapping_row(vec![
        trigger(
            "Success",
            ButtonVariant::Primary,
            ToastSpec::success("Operation Successful").description("Your changes have been saved to the system."),
        ),
        trigger(
            "Error",
            ButtonVariant::Outline,
            ToastSpec::error("Error Detected").description("Something went wrong. Please try again."),
        ),
        trigger(
            "Info",
            ButtonVariant::Secondary,
            ToastSpec::info("System Update").description("New features are now available."),
        ),
        trigger(
            "Warning",
            ButtonVariant::Ghost,
            ToastSpec::warning("Warning").description("Please review before proceeding."),
        ),
    ]);

    showcase_section(
        "toasts",
        "Toast Notifications",
        HeadingSize::Xl3,
        "Non-blocking notifications with progress bars and brutalist styling.",
        false,
        titled_card(
            "Toast Notifications",
            Some("Hover a toast to pause its countdown."),
            triggers,
        ),
    )
}

// ===== CARDS =====

fn showcase_card(builder: CardBuilder, label: &str, title: &str, description: &str, body: &str) -> CardBuilder {
    builder
        .item(
            Column::new()
                .s(Gap::new().y(SPACING_4))
                .item(caption(label).size(CaptionSize::Xs).build())
                .item(card_header(title, Some(description.to_owned()))),
        )
        .item(card_content(text(body).tone(TextTone::Muted).size(TextSize::Sm).build()))
}

fn cards_section() -> impl Element {
    let cards = vec![
        showcase_card(
            card().hoverable(),
            "Default",
            "Hoverable Card",
            "Translate and shadow on hover",
            "Hover to see the brutalist hover effect.",
        )
        .item(card_footer(vec![button().label("Action").size(ButtonSize::Small).build().unify()]))
        .build()
        .unify(),
        showcase_card(
            card().variant(CardVariant::Elevated),
            "Elevated",
            "Hard Shadow",
            "4px offset shadow, no blur",
            "Depth without softness.",
        )
        .build()
        .unify(),
        showcase_card(
            card().variant(CardVariant::Outlined),
            "Outlined",
            "Minimal Card",
            "Clean white border on dark",
            "Perfect for overlay contexts.",
        )
        .build()
        .unify(),
        showcase_card(
            card().accent(CardAccent::Left),
            "Accent",
            "Left Accent",
            "Vertical accent border",
            "Draws attention to content.",
        )
        .build()
        .unify(),
        showcase_card(
            card()
                .variant(CardVariant::Glitch)
                .on_press(|| zoon::println!("Glitch card pressed")),
            "Glitch",
            "RGB Shift Effect",
            "Cyberpunk glitch animation",
            "Constant jitter on an acid border.",
        )
        .build()
        .unify(),
        showcase_card(
            card().accent(CardAccent::Corner),
            "Interactive",
            "Action Card",
            "With action buttons",
            "Combine cards with buttons.",
        )
        .item(
            Row::new()
                .s(Gap::new().x(SPACING_8))
                .s(Padding::new().top(SPACING_16))
                .item(
                    button()
                        .label("Schedule")
                        .size(ButtonSize::Small)
                        .start_icon(IconName::Calendar)
                        .build(),
                )
                .item(button().label("Cancel").size(ButtonSize::Small).variant(ButtonVariant::Outline).build()),
        )
        .build()
        .unify(),
    ];

    showcase_section(
        "cards",
        "Cards",
        HeadingSize::Xl3,
        "Versatile card components with multiple variants. From subtle to dramatic.",
        false,
        card_grid(cards, 300),
    )
}

// ===== VISUAL EFFECTS =====

fn visual_effects_section() -> impl Element {
    let preloaders = Row::new()
        .multiline()
        .s(Gap::both(SPACING_32))
        .item(preloader().size(PreloaderSize::Small).label("Loading").build())
        .item(
            preloader()
                .size(PreloaderSize::Medium)
                .variant(PreloaderVariant::Electric)
                .label("Loading")
                .build(),
        )
        .item(
            preloader()
                .size(PreloaderSize::Large)
                .variant(PreloaderVariant::White)
                .label("Loading")
                .build(),
        );

    let ticker = marquee()
        .speed(25)
        .repeat(2)
        .content(|| {
            text("IMPORTANT ANNOUNCEMENT • NEW FEATURES AVAILABLE • CHECK IT OUT •")
                .tone(TextTone::Accent)
                .size(TextSize::Lg)
                .bold()
                .build()
        })
        .build();

    let overlays = section()
        .size(SectionSize::Small)
        .grid_pattern()
        .scanlines()
        .vignette()
        .item(
            text("Grid pattern, scanlines and vignette")
                .tone(TextTone::Accent)
                .mono()
                .uppercase()
                .size(TextSize::Sm)
                .build(),
        )
        .build();

    showcase_section(
        "visual-effects",
        "Visual Effects",
        HeadingSize::Xl3,
        "Animated components that add character without softness.",
        true,
        card_grid(
            vec![
                titled_card("Preloader", Some("Animated loading states"), preloaders).unify(),
                titled_card("Marquee", Some("Infinite scrolling text, hover to pause"), ticker).unify(),
                titled_card("Section Overlays", Some("Decorative layers for page bands"), overlays).unify(),
            ],
            420,
        ),
    )
}

// ===== COLOR PALETTE =====

fn swatch(swatch: &Swatch, outlined: bool) -> RawElOrText {
    let value = swatch.value;
    let label_color = if outlined { COLOR_MUTED } else { contrast_text(value) };
    let tile = El::new()
        .s(Width::exact(64))
        .s(Height::exact(64))
        .s(Background::new().color(value))
        .update_raw_el(move |raw_el| raw_el.attr("title", value))
        .child(
            El::new()
                .s(Align::center())
                .s(Font::new().size(FONT_SIZE_10).color(label_color).weight(if outlined {
                    FontWeight::Regular
                } else {
                    FontWeight::Bold
                }))
                .child(Text::new(swatch.name)),
        );
    if outlined {
        tile.s(Borders::all(Border::new().width(BORDER_WIDTH_2).color(COLOR_LINE))).unify()
    } else {
        tile.unify()
    }
}

fn color_palette_section() -> impl Element {
    let last = PALETTE.len() - 1;
    let groups = PALETTE.iter().enumerate().map(|(index, group)| {
        let outlined = group.title == "Backgrounds";
        Column::new()
            .s(Width::fill())
            .s(Padding::all(SPACING_16))
            .s(Gap::new().y(SPACING_12))
            .s(Borders::new().bottom(Border::new().width(if index == last { 0 } else { BORDER_WIDTH_2 }).color(COLOR_LINE)))
            .item(caption(group.title).size(CaptionSize::Xs).build())
            .item(wrapping_row(group.swatches.iter().map(|entry| swatch(entry, outlined)).collect()))
            .unify()
    });

    showcase_section(
        "colors",
        "Color Palette",
        HeadingSize::Xl3,
        "High-contrast brutalist palette. Hot pink primary, electric secondary, acid accents.",
        false,
        card().size(CardSize::Small).item(Column::new().s(Width::fill()).items(groups)).build(),
    )
}
