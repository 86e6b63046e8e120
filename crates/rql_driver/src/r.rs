//! Root term constructors, the `r.` of a query.

use serde_json::Value;

use crate::term::{Term, TermType};

/// Convert a JSON value into a term, see [`Term::expr`].
#[inline]
pub fn expr(value: impl Into<Value>) -> Term {
    Term::expr(value)
}

/// Select a database.
pub fn db(name: impl Into<Term>) -> Term {
    Term::root(TermType::Db, [name.into()])
}

/// List all databases.
pub fn db_list() -> Term {
    Term::root(TermType::DbList, [])
}

/// Select a table of the connection's default database.
pub fn table(name: impl Into<Term>) -> Term {
    Term::root(TermType::Table, [name.into()])
}

/// The document currently being processed, inside `filter` and similar.
pub fn row() -> Term {
    Term::root(TermType::ImplicitVar, [])
}

/// Evaluate a JavaScript expression on the server.
pub fn js(source: impl Into<Term>) -> Term {
    Term::root(TermType::Javascript, [source.into()])
}

/// Raise a query error with the given message.
pub fn error(message: impl Into<Term>) -> Term {
    Term::root(TermType::Error, [message.into()])
}
