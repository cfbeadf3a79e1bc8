use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use zoon::RawElOrText;

/// A value read out of a row for filtering, sorting and default rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::Text(_) => 3,
        }
    }

    /// Total order used by sorting. Text compares case-insensitively first
    /// so "alex" and "Alex" sit together; values of different kinds order
    /// empty < bool < number < text.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Bool(left), CellValue::Bool(right)) => left.cmp(right),
            (CellValue::Number(left), CellValue::Number(right)) => left.total_cmp(right),
            (CellValue::Text(left), CellValue::Text(right)) => left
                .to_lowercase()
                .cmp(&right.to_lowercase())
                .then_with(|| left.cmp(right)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(value) => write!(f, "{value}"),
            CellValue::Number(value) => write!(f, "{value}"),
            CellValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// Binds one table column to a row accessor and its renderers.
pub struct ColumnSpec<R> {
    id: String,
    header: String,
    accessor: Rc<dyn Fn(&R) -> CellValue>,
    cell: Option<Rc<dyn Fn(&R) -> RawElOrText>>,
    sortable: bool,
}

impl<R> Clone for ColumnSpec<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            cell: self.cell.clone(),
            sortable: self.sortable,
        }
    }
}

impl<R> ColumnSpec<R> {
    pub fn new<V: Into<CellValue>>(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> V + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Rc::new(move |row| accessor(row).into()),
            cell: None,
            sortable: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Custom body cell. Without one the cell shows the accessor value as text.
    pub fn cell(mut self, renderer: impl Fn(&R) -> RawElOrText + 'static) -> Self {
        self.cell = Some(Rc::new(renderer));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    pub fn renderer(&self) -> Option<&Rc<dyn Fn(&R) -> RawElOrText>> {
        self.cell.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_sorts_case_insensitively() {
        let alex = CellValue::from("alex");
        let bob = CellValue::from("Bob");
        assert_eq!(alex.compare(&bob), Ordering::Less);
        assert_eq!(bob.compare(&alex), Ordering::Greater);
    }

    #[test]
    fn numbers_sort_numerically() {
        assert_eq!(CellValue::from(9).compare(&CellValue::from(10)), Ordering::Less);
        assert_eq!(CellValue::from(2.5).compare(&CellValue::from(2.5)), Ordering::Equal);
    }

    #[test]
    fn empty_sorts_before_anything_else() {
        let empty = CellValue::from(None::<u32>);
        assert_eq!(empty, CellValue::Empty);
        assert_eq!(empty.compare(&CellValue::from(false)), Ordering::Less);
        assert_eq!(CellValue::from("a").compare(&empty), Ordering::Greater);
    }

    #[test]
    fn display_renders_plain_values() {
        assert_eq!(CellValue::from("Admin").to_string(), "Admin");
        assert_eq!(CellValue::from(42).to_string(), "42");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn column_reads_rows_through_its_accessor() {
        let column = ColumnSpec::new("len", "Length", |row: &String| row.len() as u32).sortable();
        assert_eq!(column.id(), "len");
        assert_eq!(column.header(), "Length");
        assert!(column.is_sortable());
        assert_eq!(column.value(&"four".to_string()), CellValue::Number(4.0));
    }
}
