use itertools::Itertools;
use scanner::{Literal, Token};

use crate::{Expr, Visitor};

fn literal_text(value: &Literal) -> String {
    match value {
        Literal::Nil => "nil".to_string(),
        value => value.to_string(),
    }
}

/// Renders an expression in Lisp-like prefix notation, e.g. `(* (- 123) (group 45.67))`.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(expr: &Expr) -> String {
        expr.accept(&mut AstPrinter)
    }

    fn parenthesize<'a>(&mut self, name: &str, exprs: &[&Expr<'a>]) -> String {
        format!("({} {})", name, exprs.iter().map(|expr| expr.accept(self)).join(" "))
    }
}

impl<'a> Visitor<'a> for AstPrinter {
    type Output = String;

    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>) -> String {
        self.parenthesize(operator.lexeme, &[left, right])
    }

    fn visit_grouping(&mut self, expression: &Expr<'a>) -> String {
        self.parenthesize("group", &[expression])
    }

    fn visit_literal(&mut self, value: &Literal<'a>) -> String {
        literal_text(value)
    }

    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> String {
        self.parenthesize(operator.lexeme, &[right])
    }
}

/// Renders an expression in reverse polish notation, e.g. `123 - 45.67 group *`.
///
/// Groupings keep their `group` marker, placed after the inner expression.
pub struct RpnPrinter;

impl RpnPrinter {
    pub fn print(expr: &Expr) -> String {
        expr.accept(&mut RpnPrinter)
    }
}

impl<'a> Visitor<'a> for RpnPrinter {
    type Output = String;

    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>) -> String {
        format!("{} {} {}", left.accept(self), right.accept(self), operator.lexeme)
    }

    fn visit_grouping(&mut self, expression: &Expr<'a>) -> String {
        format!("{} group", expression.accept(self))
    }

    fn visit_literal(&mut self, value: &Literal<'a>) -> String {
        literal_text(value)
    }

    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> String {
        format!("{} {}", right.accept(self), operator.lexeme)
    }
}
