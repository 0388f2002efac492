use cursor::Cursor;
use diagnostics::Diagnostics;

mod literal;
pub use literal::Literal;

pub mod token;
pub use token::{Token, TokenKind};
use TokenKind::*;

pub use cursor::Line;

/// Scans `source` into tokens, reporting lexical errors to `diagnostics`.
pub fn scan_tokens<'a>(source: &'a str, diagnostics: &mut Diagnostics) -> Vec<Token<'a>> {
    Scanner::new(source, diagnostics).scan_tokens()
}

pub struct Scanner<'a, 'd> {
    start: Cursor<'a>,
    current: Cursor<'a>,
    tokens: Vec<Token<'a>>,
    diagnostics: &'d mut Diagnostics,
}

impl<'a, 'd> Scanner<'a, 'd> {
    pub fn new(source: &'a str, diagnostics: &'d mut Diagnostics) -> Self {
        Self {
            start: Cursor::new(source),
            current: Cursor::new(source),
            tokens: Vec::new(),
            diagnostics,
        }
    }

    fn lexeme(&self) -> &'a str {
        self.start.slice_until(&self.current)
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, Literal::Nil)
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal<'a>) {
        let token =
            Token::new(kind, self.lexeme(), literal, self.start.line(), self.start.offset());
        log::trace!("Scanned {}", token);
        self.tokens.push(token);
    }

    fn add_token_if_next_matches(&mut self, expected: char, matched: TokenKind, single: TokenKind) {
        if self.current.advance_if_eq(expected) {
            self.add_token(matched)
        } else {
            self.add_token(single)
        }
    }

    /// Never fails: lexical errors end up in the diagnostics and the scan
    /// continues with the next character.
    pub fn scan_tokens(mut self) -> Vec<Token<'a>> {
        loop {
            self.start = self.current.clone();
            let Some(c) = self.current.next() else {
                break;
            };

            match c {
                '(' => self.add_token(LeftParen),
                ')' => self.add_token(RightParen),
                '{' => self.add_token(LeftBrace),
                '}' => self.add_token(RightBrace),
                ',' => self.add_token(Comma),
                '.' => self.add_token(Dot),
                '-' => self.add_token(Minus),
                '+' => self.add_token(Plus),
                ';' => self.add_token(Semicolon),
                '*' => self.add_token(Star),

                '!' => self.add_token_if_next_matches('=', BangEqual, Bang),
                '=' => self.add_token_if_next_matches('=', EqualEqual, Equal),
                '<' => self.add_token_if_next_matches('=', LessEqual, Less),
                '>' => self.add_token_if_next_matches('=', GreaterEqual, Greater),

                '/' => {
                    if self.current.advance_if_eq('/') {
                        // Comment, the newline is left for the line counter
                        self.current.advance_while(|c| c != '\n');
                    } else {
                        self.add_token(Slash)
                    }
                }

                '"' => self.string(),

                d if d.is_ascii_digit() => self.number(),

                c if is_identifier_start(c) => self.identifier(),

                // The cursor counts lines for us
                ' ' | '\r' | '\t' | '\n' => (),

                _ => self.diagnostics.error(self.current.line(), "Unexpected character."),
            }
        }

        self.tokens.push(Token::new(
            Eof,
            "",
            Literal::Nil,
            self.current.line(),
            self.current.offset(),
        ));

        self.tokens
    }

    fn string(&mut self) {
        self.current.advance_while(|c| c != '"');

        if !self.current.advance_if_eq('"') {
            self.diagnostics.error(self.start.line(), "Unterminated string.");
            return;
        }

        let lexeme = self.lexeme();
        self.add_literal_token(Str, Literal::Str(&lexeme[1..lexeme.len() - 1]));
    }

    fn number(&mut self) {
        self.current.advance_while(|c| c.is_ascii_digit());

        if self.current.peek() == Some('.')
            && self.current.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.current.next(); // '.'
            self.current.advance_while(|c| c.is_ascii_digit());
        }

        match self.lexeme().parse() {
            Ok(value) => self.add_literal_token(Number, Literal::Number(value)),
            Err(_) => self.diagnostics.error(self.start.line(), "Invalid number."),
        }
    }

    fn identifier(&mut self) {
        self.current.advance_while(is_identifier_continue);

        let kind = TokenKind::keyword(self.lexeme()).unwrap_or(Identifier);
        self.add_token(kind)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}
