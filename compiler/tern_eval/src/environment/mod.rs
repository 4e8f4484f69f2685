//! Scope frames for the interpreter.
//!
//! Frames form a parent chain from the innermost scope out to the global
//! frame. A frame is created on block entry, on every call and on every loop
//! iteration, and lives as long as something references it: the evaluator
//! while control is inside, or a closure that captured it. Parent links are
//! set at creation and never change, so the chain cannot form a cycle.
//!
//! Identifiers carry a resolution depth computed ahead of time, so lookups
//! walk exactly that many parents instead of searching by name.

use rustc_hash::FxHashMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use tern_ir::Name;

use crate::errors::{illegal_declaration, EvalError};
use crate::value::Value;

/// Single-threaded shared handle to a frame.
///
/// All frame allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

/// One frame: its own bindings plus the enclosing frame.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// A root frame with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this frame. A name may be declared once per frame.
    pub fn declare(&mut self, name: Name, value: Value) -> Result<(), EvalError> {
        if self.bindings.contains_key(&name) {
            return Err(illegal_declaration(&name));
        }
        self.bindings.insert(name, value);
        Ok(())
    }

    /// Look up `name` in this frame only.
    #[inline]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    /// Overwrite an existing binding in this frame. Returns `false` if the
    /// frame has no such binding.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        match self.bindings.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn is_global(&self) -> bool {
        self.parent.is_none()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Handle to the active frame.
pub type Environment = LocalScope<Scope>;

impl LocalScope<Scope> {
    /// A fresh root frame.
    pub fn global() -> Self {
        LocalScope::new(Scope::new())
    }

    /// A fresh frame whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        LocalScope::new(Scope::with_parent(self.clone()))
    }

    /// The frame `depth` parents out (`0` is `self`).
    pub fn ancestor(&self, depth: u32) -> Option<Self> {
        let mut frame = self.clone();
        for _ in 0..depth {
            let parent = frame.borrow().parent.clone()?;
            frame = parent;
        }
        Some(frame)
    }

    pub fn declare(&self, name: Name, value: Value) -> Result<(), EvalError> {
        self.borrow_mut().declare(name, value)
    }

    pub fn get_at(&self, depth: u32, name: &str) -> Option<Value> {
        self.ancestor(depth)?.borrow().get(name)
    }

    /// Assign into the frame `depth` parents out. Returns `false` if that
    /// frame does not bind `name`.
    pub fn assign_at(&self, depth: u32, name: &str, value: Value) -> bool {
        match self.ancestor(depth) {
            Some(frame) => frame.borrow_mut().set(name, value),
            None => false,
        }
    }
}
