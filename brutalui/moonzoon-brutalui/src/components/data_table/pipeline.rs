use super::column::{CellValue, ColumnSpec};
use super::state::{ColumnFilter, Pagination, SortDirection, SortSpec, StateSlot, TableState};
use std::cmp::Ordering;

/// Result of one pass of the row pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TablePage {
    /// Positions in the input rows, in display order.
    pub row_indices: Vec<usize>,
    /// The requested pagination pulled back into range.
    pub pagination: Pagination,
    pub page_count: usize,
    pub filtered_count: usize,
}

impl TablePage {
    pub fn can_previous(&self) -> bool {
        self.pagination.can_previous()
    }

    pub fn can_next(&self) -> bool {
        self.pagination.can_next(self.filtered_count)
    }
}

/// Filter, then sort, then slice one page.
pub fn derive_page<R>(rows: &[R], columns: &[ColumnSpec<R>], state: &TableState) -> TablePage {
    let filtered = filter_rows(rows, columns, &state.filters);
    let sorted = sort_rows(rows, columns, &state.sorting, filtered);
    let filtered_count = sorted.len();
    let pagination = state.pagination.clamped(filtered_count);
    TablePage {
        row_indices: sorted[pagination.row_range(filtered_count)].to_vec(),
        pagination,
        page_count: pagination.page_count(filtered_count),
        filtered_count,
    }
}

/// [`derive_page`] that also keeps the pagination slot in range.
///
/// New sorting or filters since `previous` go back to the first page. When
/// the shown pagination differs from the stored one it is requested
/// through `slot`, so an uncontrolled table stores it and a controlled
/// owner hears about it.
pub fn settle_page<R>(
    rows: &[R],
    columns: &[ColumnSpec<R>],
    previous: Option<&TableState>,
    state: &TableState,
    slot: &StateSlot<Pagination>,
) -> TablePage {
    let criteria_changed =
        previous.is_some_and(|previous| previous.sorting != state.sorting || previous.filters != state.filters);
    let page = if criteria_changed {
        let first_page = TableState {
            pagination: state.pagination.with_page_index(0),
            ..state.clone()
        };
        derive_page(rows, columns, &first_page)
    } else {
        derive_page(rows, columns, state)
    };
    if page.pagination != state.pagination {
        slot.request(page.pagination);
    }
    page
}

fn find_column<'a, R>(columns: &'a [ColumnSpec<R>], column_id: &str) -> Option<&'a ColumnSpec<R>> {
    columns.iter().find(|column| column.id() == column_id)
}

/// Positions of rows passing every filter. Filters naming an unknown column are ignored.
pub fn filter_rows<R>(rows: &[R], columns: &[ColumnSpec<R>], filters: &[ColumnFilter]) -> Vec<usize> {
    let active: Vec<_> = filters
        .iter()
        .filter_map(|filter| find_column(columns, &filter.column_id).map(|column| (column, &filter.value)))
        .collect();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| active.iter().all(|(column, value)| value.matches(&column.value(row))))
        .map(|(index, _)| index)
        .collect()
}

/// Stable multi-key sort of `indices`; equal rows keep their incoming order.
/// Sort specs naming an unknown or non-sortable column are ignored.
pub fn sort_rows<R>(rows: &[R], columns: &[ColumnSpec<R>], sorting: &[SortSpec], indices: Vec<usize>) -> Vec<usize> {
    let keys: Vec<_> = sorting
        .iter()
        .filter_map(|spec| {
            find_column(columns, &spec.column_id)
                .filter(|column| column.is_sortable())
                .map(|column| (column, spec.direction))
        })
        .collect();
    if keys.is_empty() {
        return indices;
    }

    let mut keyed: Vec<(usize, Vec<CellValue>)> = indices
        .into_iter()
        .map(|index| (index, keys.iter().map(|(column, _)| column.value(&rows[index])).collect()))
        .collect();
    keyed.sort_by(|(_, left), (_, right)| {
        keys.iter()
            .zip(left.iter().zip(right))
            .map(|((_, direction), (left, right))| match direction {
                SortDirection::Ascending => left.compare(right),
                SortDirection::Descending => right.compare(left),
            })
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
    keyed.into_iter().map(|(index, _)| index).collect()
}

#[cfg(test)]
mod tests {
    use super::super::state::{toggle_sort, FilterValue};
    use super::*;

    #[derive(Clone, Debug)]
    struct User {
        id: u32,
        name: String,
        role: &'static str,
        active: bool,
    }

    fn users(count: u32) -> Vec<User> {
        let roles = ["Admin", "Editor", "Viewer"];
        (1..=count)
            .map(|id| User {
                id,
                name: format!("User {id:02}"),
                role: roles[(id as usize) % roles.len()],
                active: id % 4 != 0,
            })
            .collect()
    }

    fn columns() -> Vec<ColumnSpec<User>> {
        vec![
            ColumnSpec::new("id", "ID", |user: &User| user.id).sortable(),
            ColumnSpec::new("name", "Name", |user: &User| user.name.clone()).sortable(),
            ColumnSpec::new("role", "Role", |user: &User| user.role).sortable(),
            ColumnSpec::new("active", "Active", |user: &User| user.active),
        ]
    }

    fn ids(rows: &[User], page: &TablePage) -> Vec<u32> {
        page.row_indices.iter().map(|&index| rows[index].id).collect()
    }

    #[test]
    fn unsorted_unfiltered_first_page_is_input_order() {
        let rows = users(12);
        let page = derive_page(&rows, &columns(), &TableState::default());
        assert_eq!(ids(&rows, &page), (1..=10).collect::<Vec<_>>());
        assert_eq!(page.page_count, 2);
        assert_eq!(page.filtered_count, 12);
    }

    #[test]
    fn twenty_three_rows_page_through_three_pages() {
        let rows = users(23);
        let columns = columns();
        let mut state = TableState::default();

        let page = derive_page(&rows, &columns, &state);
        assert_eq!(ids(&rows, &page), (1..=10).collect::<Vec<_>>());
        assert!(!page.can_previous());
        assert!(page.can_next());

        state.pagination = page.pagination.next(page.filtered_count);
        let page = derive_page(&rows, &columns, &state);
        assert_eq!(ids(&rows, &page), (11..=20).collect::<Vec<_>>());
        assert!(page.can_previous());
        assert!(page.can_next());

        state.pagination = page.pagination.next(page.filtered_count);
        let page = derive_page(&rows, &columns, &state);
        assert_eq!(ids(&rows, &page), vec![21, 22, 23]);
        assert!(page.can_previous());
        assert!(!page.can_next());
    }

    #[test]
    fn shrinking_filter_clamps_the_page_index() {
        let rows = users(25);
        let columns = columns();
        let mut state = TableState {
            pagination: Pagination::new(2, 10),
            ..TableState::default()
        };
        let page = derive_page(&rows, &columns, &state);
        assert_eq!(page.pagination.page_index(), 2);
        assert_eq!(page.row_indices.len(), 5);

        state.filters = vec![ColumnFilter::new("id", FilterValue::Range { min: None, max: Some(5.0) })];
        let page = derive_page(&rows, &columns, &state);
        assert_eq!(page.filtered_count, 5);
        assert_eq!(page.pagination.page_index(), 0);
        assert_eq!(ids(&rows, &page), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let rows = users(5);
        let state = TableState {
            filters: vec![ColumnFilter::contains("name", "nobody")],
            pagination: Pagination::new(3, 10),
            ..TableState::default()
        };
        let page = derive_page(&rows, &columns(), &state);
        assert!(page.row_indices.is_empty());
        assert_eq!(page.page_count, 1);
        assert_eq!(page.pagination.page_index(), 0);
        assert!(!page.can_previous());
        assert!(!page.can_next());
    }

    #[test]
    fn filters_are_conjunctive() {
        let rows = users(12);
        let state = TableState {
            filters: vec![
                ColumnFilter::new("role", FilterValue::Equals(CellValue::from("Admin"))),
                ColumnFilter::new("active", FilterValue::Equals(CellValue::from(true))),
            ],
            ..TableState::default()
        };
        let page = derive_page(&rows, &columns(), &state);
        assert_eq!(ids(&rows, &page), vec![3, 6, 9]);
    }

    #[test]
    fn filter_on_unknown_column_is_ignored() {
        let rows = users(3);
        let state = TableState {
            filters: vec![ColumnFilter::contains("missing", "zzz")],
            ..TableState::default()
        };
        assert_eq!(derive_page(&rows, &columns(), &state).filtered_count, 3);
    }

    #[test]
    fn header_clicks_cycle_ascending_descending_unsorted() {
        let rows: Vec<User> = users(6).into_iter().rev().collect();
        let columns = columns();
        let original = derive_page(&rows, &columns, &TableState::default());

        let mut state = TableState::default();
        state.sorting = toggle_sort(&state.sorting, "id", false);
        let ascending = ids(&rows, &derive_page(&rows, &columns, &state));
        assert_eq!(ascending, vec![1, 2, 3, 4, 5, 6]);

        state.sorting = toggle_sort(&state.sorting, "id", false);
        let descending = ids(&rows, &derive_page(&rows, &columns, &state));
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);

        state.sorting = toggle_sort(&state.sorting, "id", false);
        assert!(state.sorting.is_empty());
        assert_eq!(derive_page(&rows, &columns, &state), original);
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let rows = users(12);
        let state = TableState {
            sorting: vec![SortSpec::new("role", SortDirection::Ascending)],
            pagination: Pagination::new(0, 20),
            ..TableState::default()
        };
        let page = derive_page(&rows, &columns(), &state);
        assert_eq!(ids(&rows, &page), vec![3, 6, 9, 12, 1, 4, 7, 10, 2, 5, 8, 11]);
    }

    #[test]
    fn descending_sort_is_stable_too() {
        let rows = users(6);
        let state = TableState {
            sorting: vec![SortSpec::new("role", SortDirection::Descending)],
            ..TableState::default()
        };
        let page = derive_page(&rows, &columns(), &state);
        assert_eq!(ids(&rows, &page), vec![2, 5, 1, 4, 3, 6]);
    }

    #[test]
    fn secondary_key_breaks_primary_ties() {
        let rows = users(6);
        let state = TableState {
            sorting: vec![
                SortSpec::new("role", SortDirection::Ascending),
                SortSpec::new("id", SortDirection::Descending),
            ],
            ..TableState::default()
        };
        let page = derive_page(&rows, &columns(), &state);
        assert_eq!(ids(&rows, &page), vec![6, 3, 4, 1, 5, 2]);
    }

    #[test]
    fn sorting_a_non_sortable_column_is_ignored() {
        let rows = users(4);
        let state = TableState {
            sorting: vec![SortSpec::new("active", SortDirection::Ascending)],
            ..TableState::default()
        };
        let page = derive_page(&rows, &columns(), &state);
        assert_eq!(ids(&rows, &page), vec![1, 2, 3, 4]);
    }

    #[test]
    fn sorting_runs_before_pagination() {
        let rows = users(23);
        let state = TableState {
            sorting: vec![SortSpec::new("id", SortDirection::Descending)],
            ..TableState::default()
        };
        let page = derive_page(&rows, &columns(), &state);
        assert_eq!(ids(&rows, &page), (14..=23).rev().collect::<Vec<_>>());
    }

    fn current_state(slot: &StateSlot<Pagination>, filters: Vec<ColumnFilter>) -> TableState {
        TableState {
            filters,
            pagination: slot.get(),
            ..TableState::default()
        }
    }

    #[test]
    fn shrinking_filter_resets_the_stored_page() {
        let rows = users(25);
        let columns = columns();
        let slot = StateSlot::uncontrolled(Pagination::new(2, 10));

        let unfiltered = current_state(&slot, Vec::new());
        let page = settle_page(&rows, &columns, None, &unfiltered, &slot);
        assert_eq!(ids(&rows, &page), (21..=25).collect::<Vec<_>>());
        assert_eq!(slot.get().page_index(), 2);

        let filtered = current_state(&slot, vec![ColumnFilter::contains("name", "User 0")]);
        let page = settle_page(&rows, &columns, Some(&unfiltered), &filtered, &slot);
        assert_eq!(page.filtered_count, 9);
        assert_eq!(page.pagination.page_index(), 0);
        assert_eq!(slot.get().page_index(), 0);

        let cleared = current_state(&slot, Vec::new());
        let page = settle_page(&rows, &columns, Some(&filtered), &cleared, &slot);
        assert_eq!(ids(&rows, &page), (1..=10).collect::<Vec<_>>());
        assert_eq!(slot.get().page_index(), 0);
    }

    #[test]
    fn shrinking_rows_clamp_the_stored_page() {
        let columns = columns();
        let slot = StateSlot::uncontrolled(Pagination::new(2, 10));
        let state = current_state(&slot, Vec::new());

        let rows = users(25);
        settle_page(&rows, &columns, None, &state, &slot);
        assert_eq!(slot.get().page_index(), 2);

        let rows = users(12);
        let page = settle_page(&rows, &columns, Some(&state), &state, &slot);
        assert_eq!(ids(&rows, &page), vec![11, 12]);
        assert_eq!(slot.get(), Pagination::new(1, 10));
    }

    #[test]
    fn new_sorting_returns_to_the_first_page() {
        let rows = users(25);
        let columns = columns();
        let slot = StateSlot::uncontrolled(Pagination::new(1, 10));
        let unsorted = current_state(&slot, Vec::new());
        let sorted = TableState {
            sorting: toggle_sort(&[], "id", false),
            ..unsorted.clone()
        };
        let page = settle_page(&rows, &columns, Some(&unsorted), &sorted, &slot);
        assert_eq!(ids(&rows, &page), (1..=10).collect::<Vec<_>>());
        assert_eq!(slot.get().page_index(), 0);
    }

    #[test]
    fn controlled_owner_hears_the_clamped_page() {
        let rows = users(25);
        let columns = columns();
        let owner = zoon::Mutable::new(Pagination::new(2, 10));
        let heard = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let slot = StateSlot::controlled(owner.clone()).on_change(Some(std::rc::Rc::new({
            let heard = heard.clone();
            move |pagination: Pagination| heard.borrow_mut().push(pagination)
        })));

        let unfiltered = current_state(&slot, Vec::new());
        settle_page(&rows, &columns, None, &unfiltered, &slot);
        assert!(heard.borrow().is_empty());

        let filtered = current_state(&slot, vec![ColumnFilter::contains("name", "User 0")]);
        let page = settle_page(&rows, &columns, Some(&unfiltered), &filtered, &slot);
        assert_eq!(page.pagination.page_index(), 0);
        assert_eq!(*heard.borrow(), vec![Pagination::new(0, 10)]);
        assert_eq!(owner.get().page_index(), 2);
    }

    #[test]
    fn settled_pages_request_nothing() {
        let rows = users(25);
        let columns = columns();
        let heard = std::rc::Rc::new(std::cell::Cell::new(0));
        let slot = StateSlot::uncontrolled(Pagination::new(1, 10)).on_change(Some(std::rc::Rc::new({
            let heard = heard.clone();
            move |_: Pagination| heard.set(heard.get() + 1)
        })));
        let state = current_state(&slot, Vec::new());
        settle_page(&rows, &columns, Some(&state), &state, &slot);
        assert_eq!(heard.get(), 0);
    }
}
