//! Definitions parsed from `.msg`, `.srv` and `.action` files.

use crate::FieldMap;

/// One `.msg` file. `name` is the file stem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub name: String,
    pub fields: FieldMap,
}

/// One `.srv` file: the sections before and after the `---` line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub request: FieldMap,
    pub response: FieldMap,
}

/// One `.action` file: three sections separated by two `---` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Action {
    pub name: String,
    pub goal: FieldMap,
    pub result: FieldMap,
    pub feedback: FieldMap,
}

/// Every definition found in one interface package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfacePackage {
    pub package_name: String,
    pub messages: Vec<Message>,
    pub services: Vec<Service>,
    pub actions: Vec<Action>,
}

impl InterfacePackage {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.services.is_empty() && self.actions.is_empty()
    }
}
