use core::fmt;

/// Query term kinds, numbered as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
#[non_exhaustive]
pub enum TermType {
    Datum = 1,
    MakeArray = 2,
    MakeObj = 3,
    Javascript = 11,
    Error = 12,
    ImplicitVar = 13,
    Db = 14,
    Table = 15,
    Get = 16,
    Eq = 17,
    Ne = 18,
    Lt = 19,
    Le = 20,
    Gt = 21,
    Ge = 22,
    Not = 23,
    Add = 24,
    Sub = 25,
    Mul = 26,
    Div = 27,
    Mod = 28,
    GetField = 31,
    Filter = 39,
    OrderBy = 41,
    Count = 43,
    Update = 53,
    Delete = 54,
    Insert = 56,
    DbList = 59,
    TableList = 62,
    Limit = 71,
    GetAll = 78,
}

impl TermType {
    /// The protocol number.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// The query-language name, as used when printing a term.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Datum => "datum",
            Self::MakeArray => "make_array",
            Self::MakeObj => "make_obj",
            Self::Javascript => "js",
            Self::Error => "error",
            Self::ImplicitVar => "row",
            Self::Db => "db",
            Self::Table => "table",
            Self::Get => "get",
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Not => "not",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::GetField => "field",
            Self::Filter => "filter",
            Self::OrderBy => "order_by",
            Self::Count => "count",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Insert => "insert",
            Self::DbList => "db_list",
            Self::TableList => "table_list",
            Self::Limit => "limit",
            Self::GetAll => "get_all",
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
