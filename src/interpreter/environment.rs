use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{lexer::Token, value::Value},
};

/// The variable store: a stack of lexical scopes.
///
/// The innermost scope is the last frame. Lookup and assignment walk the
/// stack from innermost to outermost, so an inner binding shadows any outer
/// binding with the same name. The global frame is created on construction
/// and is never popped.
#[derive(Debug, Default)]
pub struct Environment {
    scopes: Vec<HashMap<String, Value>>,
}

impl Environment {
    /// Creates an environment holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Environment { scopes: vec![HashMap::new()], }
    }

    /// Opens a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Discards the innermost scope and every binding it holds.
    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Binds `name` to `value` in the innermost scope.
    ///
    /// Re-declaring a name already bound in the innermost scope overwrites
    /// its value rather than erroring.
    pub fn define(&mut self, name: &str, value: Value) {
        self.scopes
            .last_mut()
            .expect("at least the global frame")
            .insert(name.to_string(), value);
    }

    /// Looks up the value bound to `name`, innermost scope first.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] when no scope binds the
    /// name.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(&name.lexeme))
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.lexeme.clone(),
                                                             line: name.line, })
    }

    /// Rebinds the nearest existing binding of `name` to `value`.
    ///
    /// Assignment never creates a binding; the name must already be declared
    /// in some enclosing scope.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] when no scope binds the
    /// name.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(&name.lexeme) {
                *slot = value;
                return Ok(());
            }
        }

        Err(RuntimeError::UndefinedVariable { name: name.lexeme.clone(),
                                              line: name.line, })
    }
}
