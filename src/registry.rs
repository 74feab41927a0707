use crate::builder::Builder;
use crate::queue::Buildable;
use crate::Result;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// An argument forwarded to a dispatched method or macro.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl Arg {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// What a macro produced.
pub enum MacroOutput {
    /// The macro did its work directly (or through the builder it was given)
    Handled,
    /// The macro produced a declaration to append to the queue
    Queue(Rc<RefCell<dyn Buildable>>),
}

type MacroCallback = Rc<dyn Fn(&Builder, &[Arg]) -> Result<MacroOutput>>;

/// Runtime-registered extensions to the fluent vocabulary.
///
/// The registry is populated once at bootstrap, wrapped in `Rc` and handed
/// to every builder at construction; dispatch only ever reads it.
#[derive(Default)]
pub struct MacroRegistry {
    macros: IndexMap<String, MacroCallback>,
}

impl MacroRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a macro under the given method name. Registering the same
    /// name again replaces the earlier callback.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&Builder, &[Arg]) -> Result<MacroOutput> + 'static,
    {
        self.macros.insert(name.into(), Rc::new(callback));
    }

    pub fn has_macro(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    pub(crate) fn get(&self, name: &str) -> Option<&MacroCallback> {
        self.macros.get(name)
    }
}
