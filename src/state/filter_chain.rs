use std::rc::Rc;

use crate::state::data_model::{self, Row};
use crate::ui::control::Control;

/// Reserved option value meaning "no filtering on this column".
pub const ANY: &str = "Any";

/// A pure row-set transform. Filters receive the previous filter's output
/// and must be total over any slice, including the empty one.
pub type Filter = Box<dyn Fn(&[Row]) -> Vec<Row>>;

/// Ordered composition of row-set transforms. Application order is
/// registration order, full stop.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Filter>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Left-folds every registered filter over the rows. An empty chain is
    /// the identity.
    pub fn apply(&self, rows: &[Row]) -> Vec<Row> {
        let mut current = rows.to_vec();
        for filter in &self.filters {
            current = filter(&current);
        }
        current
    }
}

/// Exact-match filter over one column, driven by a selectable control.
///
/// The sentinel value `"Any"` passes all rows. Without a delimiter the cell
/// must equal the selected value exactly (case-sensitive); with one, the
/// cell is split on it and any trimmed segment may match.
pub fn column_filter(
    control: Rc<dyn Control>,
    column: impl Into<String>,
    delimiter: Option<String>,
) -> Filter {
    let column = column.into();
    Box::new(move |rows| {
        let selected = control.value();
        if selected == ANY {
            return rows.to_vec();
        }
        rows.iter()
            .filter(|row| {
                let value = data_model::cell(row, &column);
                match &delimiter {
                    None => value == selected,
                    Some(delimiter) => data_model::split_cell(value, delimiter)
                        .iter()
                        .any(|part| *part == selected),
                }
            })
            .cloned()
            .collect()
    })
}

/// Case-insensitive substring search across a set of columns, driven by a
/// text control. A blank (or all-whitespace) query passes all rows.
pub fn search_filter(control: Rc<dyn Control>, columns: Vec<String>) -> Filter {
    Box::new(move |rows| {
        let needle = control.value().trim().to_ascii_lowercase();
        if needle.is_empty() {
            return rows.to_vec();
        }
        rows.iter()
            .filter(|row| {
                columns.iter().any(|column| {
                    data_model::cell(row, column)
                        .to_ascii_lowercase()
                        .contains(&needle)
                })
            })
            .cloned()
            .collect()
    })
}
