use std::rc::Rc;

/// One entry in a selectable control's option list. `value` is what filters
/// compare against; `label` is what the host displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlOption {
    pub value: String,
    pub label: String,
}

impl ControlOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

pub type ChangeHandler = Rc<dyn Fn()>;

/// Capability surface for a host-toolkit input control. Text inputs report
/// an empty option list and ignore option mutation.
pub trait Control {
    fn value(&self) -> String;

    /// Programmatic update; must not fire change handlers, matching DOM
    /// semantics where only user interaction emits events.
    fn set_value(&self, value: &str);

    fn options(&self) -> Vec<ControlOption>;

    fn replace_options(&self, options: Vec<ControlOption>);

    /// Subscribes to the control's user-interaction event.
    fn on_change(&self, handler: ChangeHandler);
}

/// Replaceable content region that receives the rendered rows. Content is
/// always replaced wholesale, never patched.
pub trait OutputSurface {
    fn replace_content(&self, content: &str);
}
