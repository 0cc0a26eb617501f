use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, error};

use crate::io::source::{SheetSource, SourceError};
use crate::state::data_model::Row;
use crate::state::filter_chain::{self, Filter, FilterChain};
use crate::state::option_sync::{self, BoundInput};
use crate::state::row_store::RowStore;
use crate::state::sort_selector::{SortOption, SortSelector};
use crate::ui::control::{Control, OutputSurface};
use crate::ui::render;

pub type Template = Box<dyn Fn(&Row) -> String>;
pub type ErrorHandler = Box<dyn Fn(&SourceError)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingSheet,
    MissingTemplate,
    MissingQuery,
    MissingLabels,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let option = match self {
            ConfigError::MissingSheet => "sheet",
            ConfigError::MissingTemplate => "template",
            ConfigError::MissingQuery => "query",
            ConfigError::MissingLabels => "labels",
        };
        write!(f, "missing required option '{option}'")
    }
}

impl std::error::Error for ConfigError {}

/// Construction options. `sheet`, `template`, `query`, and `labels` are
/// required and validated in that order; `error_handler` defaults to a
/// logging no-op.
#[derive(Default)]
pub struct Config {
    pub sheet: Option<String>,
    pub template: Option<Template>,
    pub query: Option<String>,
    pub labels: Option<Vec<String>>,
    pub error_handler: Option<ErrorHandler>,
}

/// Orchestrates the fetch → store → option-sync → render flow over a set of
/// bound controls. Single-threaded by design; the only shared mutable
/// resource is the row store, replaced wholesale on each refresh.
pub struct WebSheet {
    sheet: String,
    query: String,
    labels: Vec<String>,
    template: Template,
    error_handler: ErrorHandler,
    output: Rc<dyn OutputSurface>,
    store: RefCell<RowStore>,
    filters: RefCell<FilterChain>,
    sorter: RefCell<SortSelector>,
    bound_inputs: RefCell<Vec<BoundInput>>,
}

impl WebSheet {
    pub fn new(config: Config, output: Rc<dyn OutputSurface>) -> Result<Rc<Self>, ConfigError> {
        let Some(sheet) = config.sheet else {
            return Err(ConfigError::MissingSheet);
        };
        let Some(template) = config.template else {
            return Err(ConfigError::MissingTemplate);
        };
        let Some(query) = config.query else {
            return Err(ConfigError::MissingQuery);
        };
        let Some(labels) = config.labels else {
            return Err(ConfigError::MissingLabels);
        };
        let error_handler = config
            .error_handler
            .unwrap_or_else(|| Box::new(|err: &SourceError| error!("sheet fetch failed: {err}")));

        Ok(Rc::new(Self {
            sheet,
            query,
            labels,
            template,
            error_handler,
            output,
            store: RefCell::new(RowStore::new()),
            filters: RefCell::new(FilterChain::new()),
            sorter: RefCell::new(SortSelector::new()),
            bound_inputs: RefCell::new(Vec::new()),
        }))
    }

    /// Registers an arbitrary row-set transform at the end of the chain.
    pub fn add_filter(&self, filter: Filter) {
        self.filters.borrow_mut().register(filter);
    }

    /// Registers an exact/delimited column filter driven by a selectable
    /// control. The control's option list is rebuilt from the live data on
    /// every refresh, and its change event re-renders the sheet.
    pub fn bind_column_filter(
        self: &Rc<Self>,
        control: Rc<dyn Control>,
        column: impl Into<String>,
        delimiter: Option<String>,
    ) {
        let column = column.into();
        self.filters.borrow_mut().register(filter_chain::column_filter(
            control.clone(),
            column.clone(),
            delimiter.clone(),
        ));
        self.bound_inputs
            .borrow_mut()
            .push(BoundInput::new(control.clone(), column, delimiter));
        self.wire(control);
    }

    /// Registers a substring search filter over the named columns, driven
    /// by a text control. Text controls carry no option list, so no bound
    /// input is recorded.
    pub fn bind_search_filter(self: &Rc<Self>, control: Rc<dyn Control>, columns: Vec<String>) {
        self.filters
            .borrow_mut()
            .register(filter_chain::search_filter(control.clone(), columns));
        self.wire(control);
    }

    /// Registers the sort options on a selectable control and re-renders on
    /// its change event.
    pub fn bind_sort(self: &Rc<Self>, control: Rc<dyn Control>, options: Vec<SortOption>) {
        self.sorter.borrow_mut().register(options, control.clone());
        self.wire(control);
    }

    fn wire(self: &Rc<Self>, control: Rc<dyn Control>) {
        let sheet = Rc::downgrade(self);
        control.on_change(Rc::new(move || {
            if let Some(sheet) = sheet.upgrade() {
                sheet.render();
            }
        }));
    }

    /// Drives the fetch collaborator with the configured sheet, query, and
    /// labels. On success the row store is replaced, every bound input's
    /// option list is rebuilt, and the sheet re-renders. On error the
    /// handler is invoked and prior row/render state stays untouched.
    ///
    /// Overlapping refreshes are not sequenced; the last completion wins by
    /// overwriting the store.
    pub async fn refresh(&self, source: &dyn SheetSource) {
        match source.fetch(&self.sheet, &self.query, &self.labels).await {
            Ok(rows) => self.accept_rows(rows),
            Err(err) => (self.error_handler)(&err),
        }
    }

    fn accept_rows(&self, rows: Vec<Row>) {
        self.store.borrow_mut().load(rows, self.labels.clone());
        debug!(rows = self.store.borrow().len(), "sheet loaded");
        for input in self.bound_inputs.borrow().iter() {
            option_sync::sync(&self.store.borrow(), input);
        }
        self.render();
    }

    /// Single re-render entry point: filters, sorts, templates each row,
    /// and replaces the output surface's content.
    pub fn render(&self) {
        render::render_into(
            &self.store.borrow(),
            &self.filters.borrow(),
            &self.sorter.borrow(),
            self.template.as_ref(),
            self.output.as_ref(),
        );
    }

    /// Snapshot of the currently stored rows, before filtering.
    pub fn rows(&self) -> Vec<Row> {
        self.store.borrow().rows().to_vec()
    }
}
