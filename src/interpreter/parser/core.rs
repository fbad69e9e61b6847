use std::mem;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::expression::binary_operator,
    },
};

/// Result type used throughout the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Binding strength of an operator position, lowest first.
///
/// The derived ordering is what drives the expression loop: parsing
/// continues to the right only while the upcoming operator binds strictly
/// tighter than the current level, which also makes equal-precedence chains
/// associate to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting level; binds nothing.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `-x` and `!x`
    Prefix,
    /// Calls `f(x)` and indexing `a[i]`
    Call,
}

impl Precedence {
    /// The precedence `token` has when it appears in infix position.
    /// Tokens that cannot appear there sit at `Lowest`, which keeps the
    /// expression loop from consuming them.
    pub(crate) fn of(token: &Token) -> Self {
        match token {
            Token::Eq | Token::NotEq => Self::Equals,
            Token::Lt | Token::Gt => Self::LessGreater,
            Token::Plus | Token::Minus => Self::Sum,
            Token::Asterisk | Token::Slash => Self::Product,
            Token::LParen | Token::LBracket => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// A Pratt parser over the token stream of one source string.
///
/// Holds the lexer, a (current, peek) token window and the accumulated
/// error list. Parsing never aborts: a malformed statement records one
/// error, the parser resynchronizes at the next `;`, and the remaining
/// statements still parse. Callers must check [`Parser::errors`] before
/// trusting (or evaluating) the returned program.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    pub(crate) cur_token: Token,
    pub(crate) peek_token: Token,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser and primes its two-token window.
    #[must_use]
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser =
            Self { lexer, cur_token: Token::Eof, peek_token: Token::Eof, errors: Vec::new() };
        parser.advance();
        parser.advance();
        parser
    }

    /// Parses the whole input into a [`Program`].
    ///
    /// Always returns a program; statements that failed to parse are
    /// dropped from it and show up in [`Parser::errors`] instead.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while self.cur_token != Token::Eof {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                },
            }
            self.advance();
        }
        Program { statements }
    }

    /// The errors accumulated so far, in source order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and hands back its accumulated errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// The heart of the parser. Parses one expression at the given binding
    /// level: a prefix handler produces the left arm, then infix handlers
    /// fold onto it while the peeked token binds strictly tighter than
    /// `precedence` (and is not a statement-ending `;`).
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expr> {
        let mut left = self.parse_prefix()?;

        while self.peek_token != Token::Semicolon && precedence < Precedence::of(&self.peek_token) {
            left = if self.peek_token == Token::LParen {
                self.advance();
                self.parse_call_expression(left)?
            } else if self.peek_token == Token::LBracket {
                self.advance();
                self.parse_index_expression(left)?
            } else if let Some(op) = binary_operator(&self.peek_token) {
                self.advance();
                self.parse_binary_expression(left, op)?
            } else {
                // No infix handler for the peeked token: the expression
                // ends here and the token is someone else's problem.
                break;
            };
        }

        Ok(left)
    }

    /// Slides the token window one step.
    pub(crate) fn advance(&mut self) {
        self.cur_token = mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// Advances past the peeked token when it matches `want`, and otherwise
    /// reports what was found instead.
    pub(crate) fn expect_peek(&mut self, want: Token) -> ParseResult<()> {
        if self.peek_token == want {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { want, got: self.peek_token.clone() })
        }
    }

    /// Like [`Parser::expect_peek`] for identifiers, returning the name.
    pub(crate) fn expect_identifier(&mut self) -> ParseResult<String> {
        if let Token::Identifier(name) = &self.peek_token {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::UnexpectedToken {
                want: Token::Identifier(String::new()),
                got: self.peek_token.clone(),
            })
        }
    }

    /// Records an out-of-range integer literal. The caller substitutes a
    /// zero literal and keeps parsing.
    pub(crate) fn record_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Skips to the next statement boundary after a parse failure so one
    /// bad statement yields one error rather than a cascade.
    fn synchronize(&mut self) {
        while self.cur_token != Token::Semicolon && self.cur_token != Token::Eof {
            self.advance();
        }
    }
}
