use std::fmt::{self, Display, Formatter};

use scanner::{Literal, Token};

use crate::{AstPrinter, Visitor};

/// An expression tree. Every node owns its children, so dropping the root
/// drops the whole tree.
#[derive(Debug, PartialEq)]
pub enum Expr<'a> {
    Binary { left: Box<Expr<'a>>, operator: Token<'a>, right: Box<Expr<'a>> },
    Grouping(Box<Expr<'a>>),
    Literal(Literal<'a>),
    Unary { operator: Token<'a>, right: Box<Expr<'a>> },
}

impl<'a> Expr<'a> {
    pub fn binary(left: Expr<'a>, operator: Token<'a>, right: Expr<'a>) -> Self {
        Expr::Binary { left: Box::new(left), operator, right: Box::new(right) }
    }

    pub fn grouping(expression: Expr<'a>) -> Self {
        Expr::Grouping(Box::new(expression))
    }

    pub fn literal(value: impl Into<Literal<'a>>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn nil() -> Self {
        Expr::Literal(Literal::Nil)
    }

    pub fn unary(operator: Token<'a>, right: Expr<'a>) -> Self {
        Expr::Unary { operator, right: Box::new(right) }
    }

    /// Hands this node to the matching `visit_*` method of `visitor`.
    pub fn accept<V: Visitor<'a>>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Binary { left, operator, right } => visitor.visit_binary(left, operator, right),
            Expr::Grouping(expression) => visitor.visit_grouping(expression),
            Expr::Literal(value) => visitor.visit_literal(value),
            Expr::Unary { operator, right } => visitor.visit_unary(operator, right),
        }
    }
}

impl Display for Expr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", AstPrinter::print(self))
    }
}
