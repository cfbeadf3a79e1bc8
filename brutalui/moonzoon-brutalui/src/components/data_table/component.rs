use super::column::ColumnSpec;
use super::pipeline::{settle_page, TablePage};
use super::state::*;
use crate::components::button::*;
use crate::components::select::*;
use crate::tokens::*;
use std::rc::Rc;
use zoon::*;

const EMPTY_MESSAGE: &str = "No results.";

/// Rows together with the page derived from them.
struct DerivedPage<R> {
    rows: Rc<Vec<R>>,
    page: TablePage,
}

impl<R> Clone for DerivedPage<R> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            page: self.page.clone(),
        }
    }
}

pub struct DataTableBuilder<R: 'static> {
    rows: Vec<R>,
    rows_signal: Option<std::pin::Pin<Box<dyn Signal<Item = Vec<R>>>>>,
    columns: Vec<ColumnSpec<R>>,
    sorting: Option<Mutable<Vec<SortSpec>>>,
    on_sorting_change: Option<Rc<dyn Fn(Vec<SortSpec>)>>,
    filters: Option<Mutable<Vec<ColumnFilter>>>,
    on_filters_change: Option<Rc<dyn Fn(Vec<ColumnFilter>)>>,
    pagination: Option<Mutable<Pagination>>,
    on_pagination_change: Option<Rc<dyn Fn(Pagination)>>,
    initial_pagination: Pagination,
    multi_sort: bool,
    empty_message: String,
}

impl<R: 'static> DataTableBuilder<R> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            rows_signal: None,
            columns: Vec::new(),
            sorting: None,
            on_sorting_change: None,
            filters: None,
            on_filters_change: None,
            pagination: None,
            on_pagination_change: None,
            initial_pagination: Pagination::default(),
            multi_sort: false,
            empty_message: EMPTY_MESSAGE.to_owned(),
        }
    }

    pub fn rows(mut self, rows: Vec<R>) -> Self {
        self.rows = rows;
        self
    }

    /// Replaces the rows every time the signal yields.
    pub fn rows_signal(mut self, rows: impl Signal<Item = Vec<R>> + 'static) -> Self {
        self.rows_signal = Some(rows.boxed_local());
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnSpec<R>>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }

    pub fn column(mut self, column: ColumnSpec<R>) -> Self {
        self.columns.push(column);
        self
    }

    /// Hands sorting over to the caller. The table never writes to `sorting`.
    pub fn sorting(mut self, sorting: Mutable<Vec<SortSpec>>) -> Self {
        self.sorting = Some(sorting);
        self
    }

    pub fn on_sorting_change(mut self, handler: impl Fn(Vec<SortSpec>) + 'static) -> Self {
        self.on_sorting_change = Some(Rc::new(handler));
        self
    }

    pub fn filters(mut self, filters: Mutable<Vec<ColumnFilter>>) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn on_filters_change(mut self, handler: impl Fn(Vec<ColumnFilter>) + 'static) -> Self {
        self.on_filters_change = Some(Rc::new(handler));
        self
    }

    pub fn pagination(mut self, pagination: Mutable<Pagination>) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn on_pagination_change(mut self, handler: impl Fn(Pagination) + 'static) -> Self {
        self.on_pagination_change = Some(Rc::new(handler));
        self
    }

    /// Seed of the table-owned pagination, ignored when pagination is controlled.
    pub fn initial_pagination(mut self, pagination: Pagination) -> Self {
        self.initial_pagination = pagination;
        self
    }

    /// Header clicks add to the sort order instead of replacing it.
    pub fn multi_sort(mut self, multi_sort: bool) -> Self {
        self.multi_sort = multi_sort;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn build(self) -> impl Element {
        let sorting = slot(self.sorting, Vec::new(), self.on_sorting_change);
        let filters = slot(self.filters, Vec::new(), self.on_filters_change);
        let pagination = slot(
            self.pagination,
            self.initial_pagination,
            self.on_pagination_change,
        );
        let columns = Rc::new(self.columns);
        let multi_sort = self.multi_sort;
        let empty_message = self.empty_message;

        let rows = Mutable::new(Rc::new(self.rows));
        let rows_sync = self.rows_signal.map(|signal| {
            Task::start_droppable({
                let rows = rows.clone();
                async move {
                    signal
                        .for_each_sync(move |next| rows.set(Rc::new(next)))
                        .await
                }
            })
        });

        let initial_state = TableState {
            sorting: sorting.get(),
            filters: filters.get(),
            pagination: pagination.get(),
        };
        let derived = Mutable::new(DerivedPage {
            rows: rows.get_cloned(),
            page: settle_page(&rows.lock_ref(), &columns, None, &initial_state, &pagination),
        });
        let derive_task = Task::start_droppable({
            let derived = derived.clone();
            let columns = columns.clone();
            let pagination_slot = pagination.clone();
            let mut previous = initial_state;
            let state = map_ref! {
                let rows = rows.signal_cloned(),
                let sorting = sorting.signal(),
                let filters = filters.signal(),
                let pagination = pagination.signal() =>
                (rows.clone(), TableState {
                    sorting: sorting.clone(),
                    filters: filters.clone(),
                    pagination: *pagination,
                })
            };
            async move {
                state
                    .for_each_sync(move |(rows, state)| {
                        let page = settle_page(&rows, &columns, Some(&previous), &state, &pagination_slot);
                        previous = state;
                        derived.set(DerivedPage { rows, page });
                    })
                    .await
            }
        });

        Column::new()
            .s(Width::fill())
            .s(Borders::all(Border::new().width(BORDER_WIDTH_2).color(COLOR_LINE)))
            .s(Background::new().color(COLOR_SURFACE))
            .update_raw_el(|raw_el| raw_el.attr("role", "table"))
            .item(header_row(&columns, &sorting, multi_sort))
            .item(body(&columns, &derived, empty_message))
            .item(pager(&derived, &pagination))
            .after_remove(move |_| {
                drop(derive_task);
                drop(rows_sync);
            })
    }
}

impl<R: 'static> Default for DataTableBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn slot<T: Clone + 'static>(
    controlled: Option<Mutable<T>>,
    initial: T,
    on_change: Option<Rc<dyn Fn(T)>>,
) -> StateSlot<T> {
    match controlled {
        Some(value) => StateSlot::controlled(value),
        None => StateSlot::uncontrolled(initial),
    }
    .on_change(on_change)
}

fn aria_sort(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    }
}

fn header_row<R: 'static>(
    columns: &Rc<Vec<ColumnSpec<R>>>,
    sorting: &StateSlot<Vec<SortSpec>>,
    multi_sort: bool,
) -> impl Element + use<R> {
    Row::new()
        .s(Width::fill())
        .s(Background::new().color(COLOR_CONCRETE))
        .s(Borders::new().bottom(Border::new().width(BORDER_WIDTH_2).color(COLOR_LINE)))
        .update_raw_el(|raw_el| raw_el.attr("role", "row"))
        .items(columns.iter().map(|column| header_cell(column, sorting, multi_sort)))
}

fn header_cell<R>(column: &ColumnSpec<R>, sorting: &StateSlot<Vec<SortSpec>>, multi_sort: bool) -> impl Element + use<R> {
    let column_id = column.id().to_owned();
    let sortable = column.is_sortable();
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);

    let direction_signal = {
        let column_id = column_id.clone();
        move |sorting: &StateSlot<Vec<SortSpec>>| {
            let column_id = column_id.clone();
            sorting
                .signal()
                .map(move |sorting| sort_direction(&sorting, &column_id))
        }
    };

    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_16).y(SPACING_12))
        .s(Gap::new().x(SPACING_8))
        .s(font_mono())
        .s(Font::new().size(FONT_SIZE_12).weight(FontWeight::Bold).no_wrap())
        .s(Font::new().color_signal(
            hovered_signal.map(move |hovered| if hovered && sortable { COLOR_ACID } else { COLOR_MUTED }),
        ))
        .s(transition_colors())
        .update_raw_el({
            let direction = direction_signal(sorting);
            move |raw_el| {
                raw_el
                    .attr("role", "columnheader")
                    .style("text-transform", "uppercase")
                    .style("letter-spacing", &format!("{LETTER_SPACING_WIDE}em"))
                    .style("user-select", "none")
                    .style("cursor", if sortable { "pointer" } else { "default" })
                    .attr_signal("aria-sort", direction.map(move |direction| sortable.then(|| aria_sort(direction))))
            }
        })
        .item(Text::new(column.header()))
        .item(sortable.then(|| {
            El::new()
                .s(Font::new().color(COLOR_ACID))
                .child(Text::with_signal(
                    direction_signal(sorting).map(|direction| direction.map_or("", SortDirection::indicator)),
                ))
        }))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .on_click({
            let sorting = sorting.clone();
            move || {
                if sortable {
                    sorting.request(toggle_sort(&sorting.get(), &column_id, multi_sort));
                }
            }
        })
}

fn body<R: 'static>(
    columns: &Rc<Vec<ColumnSpec<R>>>,
    derived: &Mutable<DerivedPage<R>>,
    empty_message: String,
) -> impl Element + use<R> {
    let columns = columns.clone();
    Column::new()
        .s(Width::fill())
        .update_raw_el(|raw_el| raw_el.attr("role", "rowgroup"))
        .items_signal_vec(
            derived
                .signal_cloned()
                .map(move |derived| {
                    derived
                        .page
                        .row_indices
                        .iter()
                        .filter_map(|&index| derived.rows.get(index))
                        .map(|row| body_row(row, &columns))
                        .collect::<Vec<_>>()
                })
                .to_signal_vec(),
        )
        .item_signal(derived.signal_ref(|derived| derived.page.filtered_count == 0).map(move |empty| {
            empty.then(|| {
                El::new()
                    .s(Width::fill())
                    .s(Padding::all(SPACING_32))
                    .s(Align::new().center_x())
                    .s(font_mono())
                    .s(Font::new().size(FONT_SIZE_14).color(COLOR_DIM).center())
                    .update_raw_el(|raw_el| raw_el.attr("role", "row"))
                    .child(Text::new(empty_message.clone()))
            })
        }))
}

fn body_row<R>(row: &R, columns: &[ColumnSpec<R>]) -> impl Element + use<R> {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    Row::new()
        .s(Width::fill())
        .s(Borders::new().bottom(Border::new().width(BORDER_WIDTH_1).color(COLOR_LINE)))
        .s(Background::new().color_signal(
            hovered_signal.map(|hovered| if hovered { COLOR_CONCRETE } else { "transparent" }),
        ))
        .s(transition_colors())
        .update_raw_el(|raw_el| raw_el.attr("role", "row"))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .items(columns.iter().map(|column| {
            let content = match column.renderer() {
                Some(render) => render(row),
                None => Text::new(column.value(row).to_string()).unify(),
            };
            El::new()
                .s(Width::fill())
                .s(Padding::new().x(SPACING_16).y(SPACING_12))
                .s(Font::new().size(FONT_SIZE_14).color(COLOR_WHITE))
                .update_raw_el(|raw_el| raw_el.attr("role", "cell"))
                .child(content)
        }))
}

fn pager<R: 'static>(derived: &Mutable<DerivedPage<R>>, pagination: &StateSlot<Pagination>) -> impl Element + use<R> {
    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_16).y(SPACING_12))
        .s(Gap::new().x(SPACING_16))
        .s(Borders::new().top(Border::new().width(BORDER_WIDTH_2).color(COLOR_LINE)))
        .s(font_mono())
        .s(Font::new().size(FONT_SIZE_12).color(COLOR_MUTED))
        .item(page_size_select(pagination))
        .item(
            El::new().s(Align::new().center_x()).child(Text::with_signal(derived.signal_ref(|derived| {
                format!(
                    "Page {} of {}",
                    derived.page.pagination.page_index() + 1,
                    derived.page.page_count
                )
            }))),
        )
        .item(
            Row::new()
                .s(Align::new().right())
                .s(Gap::new().x(SPACING_8))
                .item(pager_button("Previous", derived, pagination, PagerStep::Previous))
                .item(pager_button("Next", derived, pagination, PagerStep::Next)),
        )
}

#[derive(Clone, Copy)]
enum PagerStep {
    Previous,
    Next,
}

fn pager_button<R: 'static>(
    label: &str,
    derived: &Mutable<DerivedPage<R>>,
    pagination: &StateSlot<Pagination>,
    step: PagerStep,
) -> impl Element + use<R> {
    let blocked = derived.signal_ref(move |derived| match step {
        PagerStep::Previous => !derived.page.can_previous(),
        PagerStep::Next => !derived.page.can_next(),
    });
    button()
        .label(label)
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Small)
        .disabled_signal(blocked)
        .on_press({
            let derived = derived.clone();
            let pagination = pagination.clone();
            move || {
                // Step from the page actually shown, which may be a clamped one.
                let current = derived.lock_ref().page.clone();
                let next = match step {
                    PagerStep::Previous => current.pagination.previous(current.filtered_count),
                    PagerStep::Next => current.pagination.next(current.filtered_count),
                };
                pagination.request(next);
            }
        })
        .build()
}

fn page_size_select(pagination: &StateSlot<Pagination>) -> impl Element + use<> {
    El::new().s(Width::exact(120)).child(
        select()
            .aria_label("Rows per page")
            .compact()
            .options(
                PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|size| SelectOption::new(size.to_string(), format!("Show {size}"))),
            )
            .value_signal(pagination.signal().map(|pagination| pagination.page_size().to_string()))
            .on_change({
                let pagination = pagination.clone();
                move |value| match value.parse::<usize>() {
                    Ok(size) => pagination.request(pagination.get().with_page_size(size)),
                    Err(error) => zoon::eprintln!("Invalid page size '{value}': {error}"),
                }
            })
            .build(),
    )
}

pub fn data_table<R: 'static>() -> DataTableBuilder<R> {
    DataTableBuilder::new()
}
