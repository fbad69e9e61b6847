use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// Maps a token to the binary operator it denotes in infix position, or
/// `None` for tokens that are not binary operators.
pub(crate) fn binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Asterisk => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Lt => Some(BinaryOperator::Lt),
        Token::Gt => Some(BinaryOperator::Gt),
        Token::Eq => Some(BinaryOperator::Eq),
        Token::NotEq => Some(BinaryOperator::NotEq),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses the expression form that can start at the current token.
    ///
    /// This is the prefix half of the operator-precedence core: literals,
    /// identifiers, prefix operators, grouping, array literals, `if`
    /// expressions and function literals. A token nothing here handles is
    /// the "no prefix parse function" parse error.
    pub(crate) fn parse_prefix(&mut self) -> ParseResult<Expr> {
        match self.cur_token.clone() {
            Token::Identifier(name) => Ok(Expr::Identifier { name }),
            Token::Integer(literal) => Ok(self.parse_integer_literal(&literal)),
            Token::Str(value) => Ok(Expr::Str { value }),
            Token::True => Ok(Expr::Boolean { value: true }),
            Token::False => Ok(Expr::Boolean { value: false }),
            Token::Bang => self.parse_prefix_expression(UnaryOperator::Not),
            Token::Minus => self.parse_prefix_expression(UnaryOperator::Negate),
            Token::LParen => self.parse_grouped_expression(),
            Token::LBracket => self.parse_array_literal(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            token => Err(ParseError::NoPrefixParse { token }),
        }
    }

    /// Converts an integer literal's spelling into its value. A literal
    /// outside the 64-bit range records an error and stands in as zero so
    /// the surrounding expression still parses.
    fn parse_integer_literal(&mut self, literal: &str) -> Expr {
        match literal.parse::<i64>() {
            Ok(value) => Expr::Integer { value },
            Err(_) => {
                self.record_error(ParseError::BadIntegerLiteral { literal: literal.to_string() });
                Expr::Integer { value: 0 }
            },
        }
    }

    fn parse_prefix_expression(&mut self, op: UnaryOperator) -> ParseResult<Expr> {
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expr::Prefix { op, right: Box::new(right) })
    }

    /// `( <expression> )`. The parentheses only steer precedence; no node
    /// survives them.
    fn parse_grouped_expression(&mut self) -> ParseResult<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::RParen)?;
        Ok(expr)
    }

    fn parse_array_literal(&mut self) -> ParseResult<Expr> {
        let elements = self.parse_expression_list(Token::RBracket)?;
        Ok(Expr::Array { elements })
    }

    /// `if (<condition>) { ... }` with an optional `else { ... }`.
    fn parse_if_expression(&mut self) -> ParseResult<Expr> {
        self.expect_peek(Token::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::RParen)?;
        self.expect_peek(Token::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_token == Token::Else {
            self.advance();
            self.expect_peek(Token::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::If { condition: Box::new(condition), consequence, alternative })
    }

    /// `fn(<parameters>) { ... }`
    fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        self.expect_peek(Token::LParen)?;
        let parameters = self.parse_parameters()?;
        self.expect_peek(Token::LBrace)?;
        let body = self.parse_block()?;
        Ok(Expr::Function { parameters, body })
    }

    fn parse_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();
        if self.peek_token == Token::RParen {
            self.advance();
            return Ok(parameters);
        }

        parameters.push(self.expect_identifier()?);
        while self.peek_token == Token::Comma {
            self.advance();
            parameters.push(self.expect_identifier()?);
        }
        self.expect_peek(Token::RParen)?;
        Ok(parameters)
    }

    /// Infix handler for `(`: the expression parsed so far becomes the
    /// callee and the parenthesized list its arguments.
    pub(crate) fn parse_call_expression(&mut self, function: Expr) -> ParseResult<Expr> {
        let arguments = self.parse_expression_list(Token::RParen)?;
        Ok(Expr::Call { function: Box::new(function), arguments })
    }

    /// Infix handler for `[`: `<target>[<index>]`.
    pub(crate) fn parse_index_expression(&mut self, target: Expr) -> ParseResult<Expr> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::RBracket)?;
        Ok(Expr::Index { target: Box::new(target), index: Box::new(index) })
    }

    /// Infix handler for the binary operators. The right operand parses at
    /// the operator's own precedence, so equal levels fold left.
    pub(crate) fn parse_binary_expression(
        &mut self,
        left: Expr,
        op: BinaryOperator,
    ) -> ParseResult<Expr> {
        let precedence = Precedence::of(&self.cur_token);
        self.advance();
        let right = self.parse_expression(precedence)?;
        Ok(Expr::Infix { left: Box::new(left), op, right: Box::new(right) })
    }

    /// Parses a comma-separated expression list up to `closing`. Shared by
    /// array literals and call arguments; an immediate `closing` gives the
    /// empty list.
    fn parse_expression_list(&mut self, closing: Token) -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();
        if self.peek_token == closing {
            self.advance();
            return Ok(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_token == Token::Comma {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.expect_peek(closing)?;
        Ok(items)
    }
}
