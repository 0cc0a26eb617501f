use std::cell::RefCell;
use std::rc::Rc;

use crate::ui::control::{ChangeHandler, Control, ControlOption, OutputSurface};

#[derive(Default)]
struct SelectState {
    value: RefCell<String>,
    options: RefCell<Vec<ControlOption>>,
    handlers: RefCell<Vec<ChangeHandler>>,
}

/// In-memory stand-in for a `<select>` element. Clones share state, so a
/// clone can drive the control while another is held by the sheet.
#[derive(Clone, Default)]
pub struct SelectControl {
    state: Rc<SelectState>,
}

impl SelectControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user picking `value`: updates the control and fires
    /// every change handler.
    pub fn change(&self, value: &str) {
        *self.state.value.borrow_mut() = value.to_string();
        self.fire();
    }

    fn fire(&self) {
        let handlers: Vec<ChangeHandler> = self.state.handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
    }
}

impl Control for SelectControl {
    fn value(&self) -> String {
        self.state.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.state.value.borrow_mut() = value.to_string();
    }

    fn options(&self) -> Vec<ControlOption> {
        self.state.options.borrow().clone()
    }

    fn replace_options(&self, options: Vec<ControlOption>) {
        // Native select semantics: a value absent from the new list snaps
        // to the first option.
        let current = self.state.value.borrow().clone();
        if !options.iter().any(|option| option.value == current) {
            *self.state.value.borrow_mut() = options
                .first()
                .map(|option| option.value.clone())
                .unwrap_or_default();
        }
        *self.state.options.borrow_mut() = options;
    }

    fn on_change(&self, handler: ChangeHandler) {
        self.state.handlers.borrow_mut().push(handler);
    }
}

#[derive(Default)]
struct TextState {
    value: RefCell<String>,
    handlers: RefCell<Vec<ChangeHandler>>,
}

/// In-memory stand-in for a free-text input. Carries no option list.
#[derive(Clone, Default)]
pub struct TextControl {
    state: Rc<TextState>,
}

impl TextControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user typing `value`: updates the control and fires
    /// every change handler.
    pub fn change(&self, value: &str) {
        *self.state.value.borrow_mut() = value.to_string();
        let handlers: Vec<ChangeHandler> = self.state.handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
    }
}

impl Control for TextControl {
    fn value(&self) -> String {
        self.state.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.state.value.borrow_mut() = value.to_string();
    }

    fn options(&self) -> Vec<ControlOption> {
        Vec::new()
    }

    fn replace_options(&self, _options: Vec<ControlOption>) {}

    fn on_change(&self, handler: ChangeHandler) {
        self.state.handlers.borrow_mut().push(handler);
    }
}

/// In-memory output surface holding the latest rendered content.
#[derive(Clone, Default)]
pub struct OutputBuffer {
    content: Rc<RefCell<String>>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }
}

impl OutputSurface for OutputBuffer {
    fn replace_content(&self, content: &str) {
        *self.content.borrow_mut() = content.to_string();
    }
}
