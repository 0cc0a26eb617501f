use std::collections::BTreeSet;
use std::rc::Rc;

use crate::state::data_model;
use crate::state::filter_chain::ANY;
use crate::state::row_store::RowStore;
use crate::ui::control::{Control, ControlOption};

/// Display label for an empty-string option value.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Association between a filterable column, an optional delimiter, and the
/// live control whose option list mirrors the column's values. Lives for
/// the lifetime of the owning sheet; its option list is fully rebuilt on
/// every data refresh.
pub struct BoundInput {
    column: String,
    delimiter: Option<String>,
    control: Rc<dyn Control>,
}

impl BoundInput {
    pub fn new(
        control: Rc<dyn Control>,
        column: impl Into<String>,
        delimiter: Option<String>,
    ) -> Self {
        Self {
            column: column.into(),
            delimiter,
            control,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn control(&self) -> &Rc<dyn Control> {
        &self.control
    }
}

/// Rebuilds a bound input's option list from the current rows: the distinct
/// column values (split segments when a delimiter is set) in default string
/// order, with the `"Any"` sentinel prepended. The prior selection is
/// restored when still listed, else the control falls back to `"Any"`.
/// Always a full rebuild, never a diff.
pub fn sync(store: &RowStore, input: &BoundInput) {
    let mut values = BTreeSet::new();
    for row in store.rows() {
        let cell = data_model::cell(row, &input.column);
        match &input.delimiter {
            None => {
                values.insert(cell.to_string());
            }
            Some(delimiter) => values.extend(data_model::split_cell(cell, delimiter)),
        }
    }

    // A control that has never been populated carries a stale value, not a
    // real selection.
    let previous = if input.control.options().is_empty() {
        ANY.to_string()
    } else {
        input.control.value()
    };

    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(ControlOption::plain(ANY));
    for value in values {
        // A cell valued "Any" would shadow the sentinel.
        if value == ANY {
            continue;
        }
        let label = if value.is_empty() {
            NOT_SPECIFIED.to_string()
        } else {
            value.clone()
        };
        options.push(ControlOption::new(value, label));
    }

    let restored = options.iter().any(|option| option.value == previous);
    input.control.replace_options(options);
    if restored {
        input.control.set_value(&previous);
    } else {
        input.control.set_value(ANY);
    }
}
