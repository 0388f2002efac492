use std::fmt::{self, Display, Formatter};

/// The value carried by a literal token or a literal expression.
///
/// `Nil` doubles as "no literal" for tokens that aren't strings or numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Literal<'a> {
    #[default]
    Nil,
    Number(f64),
    Boolean(bool),
    Str(&'a str),
}

impl Literal<'_> {
    /// True only for the absent value. `false` and `0` are real values.
    pub fn is_nil(&self) -> bool {
        matches!(self, Literal::Nil)
    }
}

impl Display for Literal<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Nil => Ok(()),
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Boolean(b) => write!(f, "{b}"),
            Literal::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Literal<'_> {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<bool> for Literal<'_> {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

impl<'a> From<&'a str> for Literal<'a> {
    fn from(s: &'a str) -> Self {
        Literal::Str(s)
    }
}
