use scanner::{Literal, Token};

use crate::Expr;

/// A read-only traversal over an [`Expr`] tree, with one method per node kind.
///
/// Implementations recurse into children with [`Expr::accept`] and combine
/// the results.
pub trait Visitor<'a> {
    type Output;

    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>)
        -> Self::Output;
    fn visit_grouping(&mut self, expression: &Expr<'a>) -> Self::Output;
    fn visit_literal(&mut self, value: &Literal<'a>) -> Self::Output;
    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use scanner::{Line, TokenKind};

    use super::*;

    /// Counts nodes and tracks the deepest nesting level.
    #[derive(Default)]
    struct Shape {
        depth: usize,
    }

    impl<'a> Visitor<'a> for Shape {
        type Output = (usize, usize);

        fn visit_binary(
            &mut self,
            left: &Expr<'a>,
            _: &Token<'a>,
            right: &Expr<'a>,
        ) -> (usize, usize) {
            self.depth += 1;
            let (l_nodes, l_depth) = left.accept(self);
            let (r_nodes, r_depth) = right.accept(self);
            self.depth -= 1;
            (l_nodes + r_nodes + 1, l_depth.max(r_depth) + 1)
        }

        fn visit_grouping(&mut self, expression: &Expr<'a>) -> (usize, usize) {
            let (nodes, depth) = expression.accept(self);
            (nodes + 1, depth + 1)
        }

        fn visit_literal(&mut self, _: &Literal<'a>) -> (usize, usize) {
            (1, 1)
        }

        fn visit_unary(&mut self, _: &Token<'a>, right: &Expr<'a>) -> (usize, usize) {
            let (nodes, depth) = right.accept(self);
            (nodes + 1, depth + 1)
        }
    }

    fn op(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, Literal::Nil, Line(1), 0)
    }

    #[test]
    fn custom_traversal() {
        let expr = Expr::binary(
            Expr::unary(op(TokenKind::Minus, "-"), Expr::literal(1.0)),
            op(TokenKind::Plus, "+"),
            Expr::grouping(Expr::grouping(Expr::literal(true))),
        );

        let mut shape = Shape::default();
        assert_eq!(expr.accept(&mut shape), (6, 4));
        assert_eq!(shape.depth, 0);
    }

    #[test]
    fn deep_trees_are_walked() {
        let mut expr = Expr::literal(0.0);
        for _ in 0..500 {
            expr = Expr::unary(op(TokenKind::Bang, "!"), expr);
        }

        assert_eq!(expr.accept(&mut Shape::default()), (501, 501));
    }
}
