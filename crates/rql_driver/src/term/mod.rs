//! Query terms.
//!
//! A [`Term`] is a node of the query tree sent to the server. It owns its wire
//! representation (see its [`Serialize`] implementation), so structural
//! encoders must treat it as opaque.

// -----------------------------------------------------------------------------
// Modules

mod ops;
mod term_type;

// -----------------------------------------------------------------------------
// Exports

pub use term_type::TermType;

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;

// -----------------------------------------------------------------------------
// Term

/// A node of a query.
///
/// Terms are built by chaining, starting from the root constructors in
/// [`r`](crate::r):
///
/// ```
/// use rql_driver::r;
///
/// let query = r::db("blog").table("posts").get(7);
/// assert_eq!(query.to_string(), r#"r.db("blog").table("posts").get(7)"#);
/// assert_eq!(query.to_json().unwrap(), r#"[16,[[15,[[14,["blog"]],"posts"]],7]]"#);
/// ```
#[derive(Clone, PartialEq)]
pub struct Term {
    term_type: TermType,
    datum: Option<Value>,
    args: Vec<Term>,
    opt_args: BTreeMap<String, Term>,
    // Printed as `r.name(..)` instead of `receiver.name(..)`.
    root: bool,
}

impl Term {
    /// Create a term with positional arguments.
    ///
    /// The first argument is the receiver when the term is printed.
    pub fn new(term_type: TermType, args: impl IntoIterator<Item = Term>) -> Self {
        Self {
            term_type,
            datum: None,
            args: args.into_iter().collect(),
            opt_args: BTreeMap::new(),
            root: false,
        }
    }

    /// Create a term that has no receiver, such as `r.db(..)`.
    pub fn root(term_type: TermType, args: impl IntoIterator<Item = Term>) -> Self {
        Self {
            root: true,
            ..Self::new(term_type, args)
        }
    }

    /// Convert a JSON value into a term.
    ///
    /// Scalars become datum terms. Arrays and objects become `make_array`
    /// and `make_obj` terms, a raw JSON array would otherwise be read as a
    /// term by the server.
    pub fn expr(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Array(items) => Self::new(TermType::MakeArray, items.into_iter().map(Self::expr)),
            Value::Object(fields) => {
                let mut term = Self::new(TermType::MakeObj, []);
                term.opt_args = fields
                    .into_iter()
                    .map(|(key, value)| (key, Self::expr(value)))
                    .collect();
                term
            }
            scalar => Self {
                term_type: TermType::Datum,
                datum: Some(scalar),
                args: Vec::new(),
                opt_args: BTreeMap::new(),
                root: false,
            },
        }
    }

    /// Attach a named optional argument.
    pub fn opt_arg(mut self, key: impl Into<String>, value: impl Into<Term>) -> Self {
        self.opt_args.insert(key.into(), value.into());
        self
    }

    /// The kind of this term.
    #[inline]
    pub const fn term_type(&self) -> TermType {
        self.term_type
    }

    /// The datum value, for datum terms.
    #[inline]
    pub fn datum(&self) -> Option<&Value> {
        self.datum.as_ref()
    }

    /// Positional arguments.
    #[inline]
    pub fn args(&self) -> &[Term] {
        &self.args
    }

    /// Named optional arguments.
    #[inline]
    pub fn opt_args(&self) -> &BTreeMap<String, Term> {
        &self.opt_args
    }

    /// Encode the term to its JSON wire form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Encode the term to a JSON value.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn chain(self, term_type: TermType, rest: impl IntoIterator<Item = Term>) -> Self {
        Self::new(term_type, core::iter::once(self).chain(rest))
    }

    /// Select a table of this database.
    pub fn table(self, name: impl Into<Term>) -> Self {
        self.chain(TermType::Table, [name.into()])
    }

    /// List the tables of this database.
    pub fn table_list(self) -> Self {
        self.chain(TermType::TableList, [])
    }

    /// Get a document by primary key.
    pub fn get(self, key: impl Into<Term>) -> Self {
        self.chain(TermType::Get, [key.into()])
    }

    /// Get all documents matching any of the keys.
    pub fn get_all<K: Into<Term>>(self, keys: impl IntoIterator<Item = K>) -> Self {
        self.chain(TermType::GetAll, keys.into_iter().map(Into::into))
    }

    /// Select a single field of an object.
    pub fn field(self, name: impl Into<Term>) -> Self {
        self.chain(TermType::GetField, [name.into()])
    }

    /// Keep the documents the predicate holds for.
    pub fn filter(self, predicate: impl Into<Term>) -> Self {
        self.chain(TermType::Filter, [predicate.into()])
    }

    /// Sort by the given keys.
    pub fn order_by<K: Into<Term>>(self, keys: impl IntoIterator<Item = K>) -> Self {
        self.chain(TermType::OrderBy, keys.into_iter().map(Into::into))
    }

    /// Keep at most `n` elements.
    pub fn limit(self, n: impl Into<Term>) -> Self {
        self.chain(TermType::Limit, [n.into()])
    }

    /// Count the elements of a sequence.
    pub fn count(self) -> Self {
        self.chain(TermType::Count, [])
    }

    /// Insert documents into a table.
    pub fn insert(self, documents: impl Into<Term>) -> Self {
        self.chain(TermType::Insert, [documents.into()])
    }

    /// Update the selected documents.
    pub fn update(self, patch: impl Into<Term>) -> Self {
        self.chain(TermType::Update, [patch.into()])
    }

    /// Delete the selected documents.
    pub fn delete(self) -> Self {
        self.chain(TermType::Delete, [])
    }

    /// Equality test, as a query term.
    ///
    /// Not [`PartialEq::eq`], which compares two terms.
    pub fn eq_to(self, other: impl Into<Term>) -> Self {
        self.chain(TermType::Eq, [other.into()])
    }

    /// Inequality test, as a query term.
    pub fn ne_to(self, other: impl Into<Term>) -> Self {
        self.chain(TermType::Ne, [other.into()])
    }

    /// Less than `other`.
    pub fn lt(self, other: impl Into<Term>) -> Self {
        self.chain(TermType::Lt, [other.into()])
    }

    /// Less than or equal to `other`.
    pub fn le(self, other: impl Into<Term>) -> Self {
        self.chain(TermType::Le, [other.into()])
    }

    /// Greater than `other`.
    pub fn gt(self, other: impl Into<Term>) -> Self {
        self.chain(TermType::Gt, [other.into()])
    }

    /// Greater than or equal to `other`.
    pub fn ge(self, other: impl Into<Term>) -> Self {
        self.chain(TermType::Ge, [other.into()])
    }
}

// -----------------------------------------------------------------------------
// Conversions

impl From<Value> for Term {
    #[inline]
    fn from(value: Value) -> Self {
        Self::expr(value)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Term {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::expr(value)
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i32, i64, u32, u64, f64, &str, String);

// -----------------------------------------------------------------------------
// Wire form

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(datum) = &self.datum {
            return datum.serialize(serializer);
        }
        let len = if self.opt_args.is_empty() { 2 } else { 3 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.term_type.code())?;
        seq.serialize_element(&self.args)?;
        if !self.opt_args.is_empty() {
            seq.serialize_element(&self.opt_args)?;
        }
        seq.end()
    }
}

// -----------------------------------------------------------------------------
// Printing

fn write_joined(f: &mut fmt::Formatter<'_>, terms: &[Term]) -> fmt::Result {
    for (index, term) in terms.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{term}")?;
    }
    Ok(())
}

fn write_object(f: &mut fmt::Formatter<'_>, fields: &BTreeMap<String, Term>) -> fmt::Result {
    f.write_str("{")?;
    for (index, (key, value)) in fields.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key:?}: {value}")?;
    }
    f.write_str("}")
}

impl Term {
    fn write_call(&self, f: &mut fmt::Formatter<'_>, args: &[Term]) -> fmt::Result {
        write!(f, "{}(", self.term_type.name())?;
        write_joined(f, args)?;
        if !self.opt_args.is_empty() {
            if !args.is_empty() {
                f.write_str(", ")?;
            }
            write_object(f, &self.opt_args)?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(datum) = &self.datum {
            return write!(f, "{datum}");
        }
        match self.term_type {
            TermType::MakeArray => {
                f.write_str("[")?;
                write_joined(f, &self.args)?;
                f.write_str("]")
            }
            TermType::MakeObj => write_object(f, &self.opt_args),
            TermType::ImplicitVar => f.write_str("r.row"),
            _ => match self.args.split_first() {
                Some((receiver, rest)) if !self.root => {
                    write!(f, "{receiver}.")?;
                    self.write_call(f, rest)
                }
                _ => {
                    f.write_str("r.")?;
                    self.write_call(f, &self.args)
                }
            },
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({self})")
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use serde_json::json;

    use super::{Term, TermType};
    use crate::r;

    #[test]
    fn scalar_datum() {
        let term = Term::expr(5);
        assert_eq!(term.term_type(), TermType::Datum);
        assert_eq!(term.datum(), Some(&json!(5)));
        assert_eq!(term.to_json().unwrap(), "5");
        assert_eq!(Term::from("x").to_json().unwrap(), r#""x""#);
    }

    #[test]
    fn arrays_and_objects_are_wrapped() {
        let term = Term::expr(json!([1, {"a": true}]));
        assert_eq!(term.term_type(), TermType::MakeArray);
        assert_eq!(term.to_value().unwrap(), json!([2, [1, [3, [], {"a": true}]]]));
        assert_eq!(term.to_string(), r#"[1, {"a": true}]"#);
    }

    #[test]
    fn chained_query() {
        let query = r::db("test")
            .table("users")
            .filter(r::row().field("age").gt(18))
            .limit(10);

        assert_eq!(
            query.to_value().unwrap(),
            json!([71, [[39, [[15, [[14, ["test"]], "users"]], [21, [[31, [[13, []], "age"]], 18]]]], 10]])
        );
        assert_eq!(
            query.to_string(),
            r#"r.db("test").table("users").filter(r.row.field("age").gt(18)).limit(10)"#
        );
    }

    #[test]
    fn opt_args() {
        let query = r::table("users")
            .insert(json!({"name": "ada"}))
            .opt_arg("durability", "soft");

        assert_eq!(
            query.to_value().unwrap(),
            json!([56, [[15, ["users"]], [3, [], {"name": "ada"}]], {"durability": "soft"}])
        );
        assert_eq!(
            query.to_string(),
            r#"r.table("users").insert({"name": "ada"}, {"durability": "soft"})"#
        );
    }

    #[test]
    fn root_terms_without_args() {
        assert_eq!(r::db_list().to_json().unwrap(), "[59,[]]");
        assert_eq!(r::db_list().to_string(), "r.db_list()");
        assert_eq!(r::db("a").table_list().to_string(), r#"r.db("a").table_list()"#);
    }

    #[test]
    fn comparisons_build_terms() {
        let query = r::table("users").filter(r::row().field("name").eq_to("ada"));
        assert_eq!(
            query.to_json().unwrap(),
            r#"[39,[[15,["users"]],[17,[[31,[[13,[]],"name"]],"ada"]]]]"#
        );
        assert_eq!(r::expr(1).ne_to(2).to_json().unwrap(), "[18,[1,2]]");
        assert_eq!(r::expr(1).le(2).term_type(), TermType::Le);
        assert_eq!(r::expr(1).ge(2).term_type(), TermType::Ge);
        assert_eq!(r::expr(1).lt(2).to_string(), "1.lt(2)");
    }

    #[test]
    fn partial_eq_compares_terms() {
        let a = r::table("users").get(1);
        let b = r::table("users").get(1);
        let same: bool = a.eq(&b);
        assert!(same);
        assert!(a.ne(&r::table("users").get(2)));
        assert!(a != r::table("posts").get(1));
    }

    #[test]
    fn sequence_builders() {
        let term = r::table("users")
            .get_all(["a", "b"])
            .order_by(["name"])
            .count();
        assert_eq!(
            term.to_json().unwrap(),
            r#"[43,[[41,[[78,[[15,["users"]],"a","b"]],"name"]]]]"#
        );
        assert_eq!(
            r::table("users").get(1).update(json!({"n": 2})).to_json().unwrap(),
            r#"[53,[[16,[[15,["users"]],1]],[3,[],{"n":2}]]]"#
        );
        assert_eq!(r::table("users").delete().to_string(), r#"r.table("users").delete()"#);
        assert_eq!(r::js("1 + 1").to_json().unwrap(), r#"[11,["1 + 1"]]"#);
        assert_eq!(r::error("boom").to_string(), r#"r.error("boom")"#);
    }

    #[test]
    fn operators() {
        let term = (r::expr(1) + 2) * 3;
        assert_eq!(term.to_json().unwrap(), "[26,[[24,[1,2]],3]]");
        assert_eq!((!r::expr(true)).to_json().unwrap(), "[23,[true]]");
    }
}
