mod expr;
mod printer;
mod visitor;

pub use expr::Expr;
pub use printer::{AstPrinter, RpnPrinter};
pub use visitor::Visitor;

pub use scanner::{Literal, Token, TokenKind};
