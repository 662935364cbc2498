// ============================================================================
// FAKE DOM - Doble en memoria para tests
// ============================================================================

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use super::{DomElement, DomError, NavRoot};

#[derive(Debug, Default)]
struct FakeState {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

/// Elemento falso; los clones comparten estado como los handles de web_sys
#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    state: Rc<RefCell<FakeState>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(name: &str, value: &str) -> Self {
        let element = Self::new();
        element
            .state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        element
    }

    pub fn with_class(self, class: &str) -> Self {
        self.state.borrow_mut().classes.insert(class.to_string());
        self
    }

    /// Foto del estado para comparar snapshots
    pub fn snapshot(&self) -> (BTreeMap<String, String>, BTreeSet<String>) {
        let state = self.state.borrow();
        (state.attributes.clone(), state.classes.clone())
    }
}

impl DomElement for FakeElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<(), DomError> {
        self.state.borrow_mut().attributes.remove(name);
        Ok(())
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn add_class(&self, class: &str) -> Result<(), DomError> {
        self.state.borrow_mut().classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), DomError> {
        self.state.borrow_mut().classes.remove(class);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }
}

/// `<nav>` falso con sus botones
#[derive(Debug, Clone, Default)]
pub struct FakeNav {
    pub buttons: Vec<FakeElement>,
}

impl NavRoot for FakeNav {
    type Button = FakeElement;

    fn buttons(&self) -> Vec<FakeElement> {
        self.buttons.clone()
    }
}
