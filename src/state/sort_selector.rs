use std::cmp::Ordering;
use std::rc::Rc;

use crate::state::data_model::{self, Row};
use crate::ui::control::{Control, ControlOption};

pub type Comparator = Box<dyn Fn(&Row, &Row) -> Ordering>;

pub struct SortOption {
    pub label: String,
    pub compare: Comparator,
}

impl SortOption {
    pub fn new(label: impl Into<String>, compare: Comparator) -> Self {
        Self {
            label: label.into(),
            compare,
        }
    }
}

/// At most one comparator is active at a time, selected by matching the
/// bound control's current value against the registered labels.
#[derive(Default)]
pub struct SortSelector {
    options: Vec<SortOption>,
    control: Option<Rc<dyn Control>>,
}

impl SortSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the comparators and appends their labels to the control in
    /// registration order. When the control's current value matches none of
    /// the registered labels, the first registered label becomes the
    /// selection.
    pub fn register(&mut self, options: Vec<SortOption>, control: Rc<dyn Control>) {
        let mut listed = control.options();
        for option in &options {
            listed.push(ControlOption::plain(option.label.as_str()));
        }
        control.replace_options(listed);
        self.options.extend(options);

        // Hosts are not required to adopt an option on rebuild.
        let selected = control.value();
        if !self.options.iter().any(|option| option.label == selected) {
            if let Some(first) = self.options.first() {
                control.set_value(&first.label);
            }
        }
        self.control = Some(control);
    }

    /// Returns a stably sorted copy of the rows per the active comparator,
    /// or the input order unchanged when no label matches the control's
    /// current value.
    pub fn apply(&self, rows: &[Row]) -> Vec<Row> {
        let mut out = rows.to_vec();
        if let Some(compare) = self.active_comparator() {
            out.sort_by(|a, b| compare(a, b));
        }
        out
    }

    fn active_comparator(&self) -> Option<&Comparator> {
        let control = self.control.as_ref()?;
        let selected = control.value();
        self.options
            .iter()
            .find(|option| option.label == selected)
            .map(|option| &option.compare)
    }
}

/// Builds a lexicographic, case-insensitive comparator over one column.
pub fn column_sort(column: impl Into<String>) -> Comparator {
    let column = column.into();
    Box::new(move |a, b| {
        let left = data_model::cell(a, &column).to_ascii_lowercase();
        let right = data_model::cell(b, &column).to_ascii_lowercase();
        left.cmp(&right)
    })
}
