use tracing::debug;

use crate::state::data_model::Row;
use crate::state::filter_chain::FilterChain;
use crate::state::row_store::RowStore;
use crate::state::sort_selector::SortSelector;
use crate::ui::control::OutputSurface;

/// Runs the full pipeline: filter, sort, template each surviving row in
/// final order, and replace the output surface's entire content with the
/// concatenation.
pub fn render_into(
    store: &RowStore,
    filters: &FilterChain,
    sorter: &SortSelector,
    template: &dyn Fn(&Row) -> String,
    output: &dyn OutputSurface,
) {
    let rows = sorter.apply(&filters.apply(store.rows()));
    let mut content = String::new();
    for row in &rows {
        content.push_str(&template(row));
    }
    debug!(total = store.len(), rendered = rows.len(), "rendered sheet");
    output.replace_content(&content);
}
