use super::column::CellValue;
use std::ops::Range;
use std::rc::Rc;
use zoon::{Mutable, Signal};

pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Closest preset to `size`, preferring the smaller one on a tie.
pub fn nearest_page_size(size: usize) -> usize {
    PAGE_SIZE_OPTIONS
        .into_iter()
        .min_by_key(|option| option.abs_diff(size))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

/// Current page of a table.
///
/// `page_size` is always one of [`PAGE_SIZE_OPTIONS`]. `page_index` may
/// point past the last page after the rows shrink; [`Pagination::clamped`]
/// pulls it back and every derivation goes through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size: nearest_page_size(page_size),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn with_page_index(self, page_index: usize) -> Self {
        Self { page_index, ..self }
    }

    /// Keeps the page index as it is, even if it is now out of range.
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self::new(self.page_index, page_size)
    }

    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size).max(1)
    }

    pub fn clamped(self, row_count: usize) -> Self {
        let last_page = self.page_count(row_count) - 1;
        self.with_page_index(self.page_index.min(last_page))
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, row_count: usize) -> bool {
        self.page_index.saturating_add(1) < self.page_count(row_count)
    }

    pub fn previous(self, row_count: usize) -> Self {
        let current = self.clamped(row_count);
        current.with_page_index(current.page_index.saturating_sub(1))
    }

    pub fn next(self, row_count: usize) -> Self {
        let current = self.clamped(row_count);
        if current.can_next(row_count) {
            current.with_page_index(current.page_index + 1)
        } else {
            current
        }
    }

    /// Rows of the (clamped) current page as positions in a result set of `row_count`.
    pub fn row_range(&self, row_count: usize) -> Range<usize> {
        let current = self.clamped(row_count);
        let start = (current.page_index * current.page_size).min(row_count);
        let end = (start + current.page_size).min(row_count);
        start..end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub column_id: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }
}

pub fn sort_direction(sorting: &[SortSpec], column_id: &str) -> Option<SortDirection> {
    sorting
        .iter()
        .find(|spec| spec.column_id == column_id)
        .map(|spec| spec.direction)
}

/// Next sorting after a header click: unsorted → ascending → descending → unsorted.
///
/// A plain click replaces the whole sorting with the clicked column. With
/// `multi` the other columns keep their place and the clicked one is
/// updated in place, appended, or removed.
pub fn toggle_sort(sorting: &[SortSpec], column_id: &str, multi: bool) -> Vec<SortSpec> {
    let next = match sort_direction(sorting, column_id) {
        None => Some(SortDirection::Ascending),
        Some(SortDirection::Ascending) => Some(SortDirection::Descending),
        Some(SortDirection::Descending) => None,
    };
    if !multi {
        return next.map(|direction| vec![SortSpec::new(column_id, direction)]).unwrap_or_default();
    }
    let mut sorting = sorting.to_vec();
    let position = sorting.iter().position(|spec| spec.column_id == column_id);
    match (position, next) {
        (Some(index), Some(direction)) => sorting[index].direction = direction,
        (Some(index), None) => {
            sorting.remove(index);
        }
        (None, Some(direction)) => sorting.push(SortSpec::new(column_id, direction)),
        (None, None) => {}
    }
    sorting
}

/// Predicate of a column filter.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    /// Case-insensitive substring of the displayed value; empty matches everything.
    Contains(String),
    Equals(CellValue),
    /// Inclusive numeric range; non-numbers never match.
    Range { min: Option<f64>, max: Option<f64> },
}

impl FilterValue {
    pub fn matches(&self, value: &CellValue) -> bool {
        match self {
            FilterValue::Contains(needle) => {
                needle.is_empty() || value.to_string().to_lowercase().contains(&needle.to_lowercase())
            }
            FilterValue::Equals(expected) => value == expected,
            FilterValue::Range { min, max } => match value {
                CellValue::Number(number) => {
                    min.is_none_or(|min| *number >= min) && max.is_none_or(|max| *number <= max)
                }
                _ => false,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnFilter {
    pub column_id: String,
    pub value: FilterValue,
}

impl ColumnFilter {
    pub fn new(column_id: impl Into<String>, value: FilterValue) -> Self {
        Self {
            column_id: column_id.into(),
            value,
        }
    }

    pub fn contains(column_id: impl Into<String>, needle: impl Into<String>) -> Self {
        Self::new(column_id, FilterValue::Contains(needle.into()))
    }
}

/// Inputs of one derivation besides the rows and columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableState {
    pub sorting: Vec<SortSpec>,
    pub filters: Vec<ColumnFilter>,
    pub pagination: Pagination,
}

/// One piece of table state, owned either by the caller or by the table.
///
/// A controlled slot wraps the caller's `Mutable` and never writes to it:
/// change requests only reach `on_change`, and the caller decides whether
/// to store them. An uncontrolled slot stores every request itself and
/// then notifies `on_change` as well. Readers see the same `Mutable` in
/// both cases.
pub struct StateSlot<T> {
    value: Mutable<T>,
    controlled: bool,
    on_change: Option<Rc<dyn Fn(T)>>,
}

impl<T> Clone for StateSlot<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            controlled: self.controlled,
            on_change: self.on_change.clone(),
        }
    }
}

impl<T: Clone + 'static> StateSlot<T> {
    pub fn uncontrolled(initial: T) -> Self {
        Self {
            value: Mutable::new(initial),
            controlled: false,
            on_change: None,
        }
    }

    pub fn controlled(value: Mutable<T>) -> Self {
        Self {
            value,
            controlled: true,
            on_change: None,
        }
    }

    pub fn on_change(mut self, on_change: Option<Rc<dyn Fn(T)>>) -> Self {
        self.on_change = on_change;
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    pub fn get(&self) -> T {
        self.value.get_cloned()
    }

    pub fn signal(&self) -> impl Signal<Item = T> + Unpin + use<T> {
        self.value.signal_cloned()
    }

    pub fn request(&self, next: T) {
        if !self.controlled {
            self.value.set(next.clone());
        }
        if let Some(on_change) = &self.on_change {
            on_change(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn default_pagination_is_first_page_of_ten() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page_index(), 0);
        assert_eq!(pagination.page_size(), 10);
    }

    #[test]
    fn page_size_snaps_to_a_preset() {
        assert_eq!(Pagination::new(0, 20).page_size(), 20);
        assert_eq!(Pagination::new(0, 24).page_size(), 20);
        assert_eq!(Pagination::new(0, 25).page_size(), 20);
        assert_eq!(Pagination::new(0, 0).page_size(), 10);
        assert_eq!(Pagination::new(0, 1000).page_size(), 50);
    }

    #[test]
    fn page_count_is_at_least_one() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page_count(0), 1);
        assert_eq!(pagination.page_count(10), 1);
        assert_eq!(pagination.page_count(11), 2);
        assert_eq!(pagination.page_count(23), 3);
    }

    #[test]
    fn clamp_pulls_a_stale_index_onto_the_last_page() {
        let pagination = Pagination::new(2, 10);
        assert_eq!(pagination.clamped(25).page_index(), 2);
        assert_eq!(pagination.clamped(5).page_index(), 0);
        assert_eq!(pagination.clamped(0).page_index(), 0);
    }

    #[test]
    fn changing_page_size_preserves_the_index() {
        let pagination = Pagination::new(4, 10).with_page_size(50);
        assert_eq!(pagination.page_index(), 4);
        assert_eq!(pagination.page_size(), 50);
        assert_eq!(pagination.clamped(60).page_index(), 1);
    }

    #[test]
    fn previous_and_next_stop_at_the_ends() {
        let first = Pagination::default();
        assert!(!first.can_previous());
        assert_eq!(first.previous(23), first);

        let last = first.next(23).next(23);
        assert_eq!(last.page_index(), 2);
        assert!(!last.can_next(23));
        assert_eq!(last.next(23), last);
    }

    #[test]
    fn huge_stale_index_cannot_go_forward() {
        let stale = Pagination::new(usize::MAX, 10);
        assert!(!stale.can_next(25));
        assert_eq!(stale.next(25).page_index(), 2);
    }

    #[test]
    fn navigation_starts_from_the_clamped_page() {
        let stale = Pagination::new(7, 10);
        assert_eq!(stale.previous(25).page_index(), 1);
    }

    #[test]
    fn row_range_covers_the_partial_last_page() {
        assert_eq!(Pagination::new(2, 10).row_range(23), 20..23);
        assert_eq!(Pagination::new(9, 10).row_range(23), 20..23);
        assert_eq!(Pagination::default().row_range(0), 0..0);
    }

    #[test]
    fn plain_clicks_cycle_through_three_states() {
        let once = toggle_sort(&[], "name", false);
        assert_eq!(once, vec![SortSpec::new("name", SortDirection::Ascending)]);
        let twice = toggle_sort(&once, "name", false);
        assert_eq!(twice, vec![SortSpec::new("name", SortDirection::Descending)]);
        let thrice = toggle_sort(&twice, "name", false);
        assert!(thrice.is_empty());
    }

    #[test]
    fn plain_click_replaces_other_columns() {
        let sorting = vec![SortSpec::new("role", SortDirection::Descending)];
        assert_eq!(
            toggle_sort(&sorting, "name", false),
            vec![SortSpec::new("name", SortDirection::Ascending)]
        );
    }

    #[test]
    fn multi_sort_stacks_and_removes_in_place() {
        let sorting = toggle_sort(&[], "role", true);
        let sorting = toggle_sort(&sorting, "name", true);
        assert_eq!(
            sorting,
            vec![
                SortSpec::new("role", SortDirection::Ascending),
                SortSpec::new("name", SortDirection::Ascending),
            ]
        );
        let sorting = toggle_sort(&sorting, "role", true);
        assert_eq!(sort_direction(&sorting, "role"), Some(SortDirection::Descending));
        assert_eq!(sorting[0].column_id, "role");
        let sorting = toggle_sort(&sorting, "role", true);
        assert_eq!(sorting, vec![SortSpec::new("name", SortDirection::Ascending)]);
    }

    #[test]
    fn contains_filter_ignores_case() {
        let filter = FilterValue::Contains("CHEN".to_string());
        assert!(filter.matches(&CellValue::from("Alex Chen")));
        assert!(!filter.matches(&CellValue::from("Sarah Miller")));
        assert!(FilterValue::Contains(String::new()).matches(&CellValue::Empty));
    }

    #[test]
    fn range_filter_is_inclusive_and_numeric() {
        let filter = FilterValue::Range { min: Some(18.0), max: Some(30.0) };
        assert!(filter.matches(&CellValue::from(18)));
        assert!(filter.matches(&CellValue::from(30)));
        assert!(!filter.matches(&CellValue::from(31)));
        assert!(!filter.matches(&CellValue::from("20")));
        assert!(FilterValue::Range { min: None, max: None }.matches(&CellValue::from(-1)));
    }

    #[test]
    fn uncontrolled_slot_stores_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let slot = StateSlot::uncontrolled(Pagination::default()).on_change(Some(Rc::new({
            let seen = seen.clone();
            move |pagination: Pagination| seen.borrow_mut().push(pagination.page_index())
        })));
        slot.request(Pagination::new(1, 10));
        assert!(!slot.is_controlled());
        assert_eq!(slot.get().page_index(), 1);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn controlled_slot_only_notifies() {
        let owned = Mutable::new(Vec::<SortSpec>::new());
        let requested = Rc::new(RefCell::new(None));
        let slot = StateSlot::controlled(owned.clone()).on_change(Some(Rc::new({
            let requested = requested.clone();
            move |sorting: Vec<SortSpec>| *requested.borrow_mut() = Some(sorting)
        })));
        slot.request(toggle_sort(&slot.get(), "name", false));
        assert!(slot.is_controlled());
        assert!(owned.get_cloned().is_empty());
        assert_eq!(
            requested.borrow().clone(),
            Some(vec![SortSpec::new("name", SortDirection::Ascending)])
        );

        owned.set(vec![SortSpec::new("name", SortDirection::Descending)]);
        assert_eq!(sort_direction(&slot.get(), "name"), Some(SortDirection::Descending));
    }
}
