use crate::{
    ast::{Expression, Identifier, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
    util::num::parse_integer,
};

impl Parser<'_> {
    /// Parses an expression at the given precedence level.
    ///
    /// Dispatches the current token to its prefix handler, then folds infix
    /// operators left-associatively while the peek token binds more strongly
    /// than `precedence`.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while self.peek != Token::Semicolon && precedence < Precedence::of(&self.peek) {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Dispatches the current token to its prefix handler.
    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.clone() {
            Token::Ident(value) => {
                Some(Expression::Identifier(Identifier { token: self.current.clone(), value }))
            },
            Token::Int(_) => self.parse_integer_literal(),
            Token::Str(value) => {
                Some(Expression::StringLiteral { token: self.current.clone(), value })
            },
            Token::True => Some(Expression::BooleanLiteral { token: self.current.clone(), value: true }),
            Token::False => {
                Some(Expression::BooleanLiteral { token: self.current.clone(), value: false })
            },
            Token::Bang => self.parse_prefix_expression(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_expression(PrefixOperator::Negate),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_hash_literal(),
            other => {
                self.errors.push(ParseError::NoPrefixParseFn { token: other.type_name() });
                None
            },
        }
    }

    /// Dispatches the current token to its infix handler, folding `left`
    /// into a larger expression. Only called for tokens
    /// [`Precedence::of`] ranks above [`Precedence::Lowest`].
    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match &self.current {
            Token::Plus => self.parse_infix_expression(left, InfixOperator::Add),
            Token::Minus => self.parse_infix_expression(left, InfixOperator::Sub),
            Token::Asterisk => self.parse_infix_expression(left, InfixOperator::Mul),
            Token::Slash => self.parse_infix_expression(left, InfixOperator::Div),
            Token::Lt => self.parse_infix_expression(left, InfixOperator::Less),
            Token::Gt => self.parse_infix_expression(left, InfixOperator::Greater),
            Token::Eq => self.parse_infix_expression(left, InfixOperator::Equal),
            Token::NotEq => self.parse_infix_expression(left, InfixOperator::NotEqual),
            Token::LParen => self.parse_call_expression(left),
            Token::LBracket => self.parse_index_expression(left),
            Token::Dot => self.parse_dot_expression(left),
            _ => Some(left),
        }
    }

    /// Parses an integer literal, detecting a `0b`/`0o`/`0x` base prefix.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        match parse_integer(token.literal()) {
            Some(value) => Some(Expression::IntegerLiteral { token, value }),
            None => {
                self.errors.push(ParseError::InvalidIntegerLiteral {
                    literal: token.literal().to_owned(),
                });
                None
            },
        }
    }

    /// Parses `!x` or `-x`; the operand binds at prefix strength.
    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> Option<Expression> {
        let token = self.current.clone();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { token, operator, right: Box::new(right) })
    }

    /// Parses `( <expression> )`. Grouping restarts precedence from the
    /// bottom; the node itself is the inner expression.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        Some(expression)
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek == Token::Else {
            self.next_token();
            if !self.expect_peek(&Token::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If { token, condition: Box::new(condition), consequence, alternative })
    }

    /// Parses `fn(<params>) { ... }`. Zero parameters is legal.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral { token, parameters, body })
    }

    /// Parses the parenthesised, comma-separated parameter list of a
    /// function literal. Entered with the cursor on `(`; consumes the `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek == Token::RParen {
            self.next_token();
            return Some(parameters);
        }

        parameters.push(self.expect_ident()?);
        while self.peek == Token::Comma {
            self.next_token();
            parameters.push(self.expect_ident()?);
        }

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        Some(parameters)
    }

    /// Parses `[a, b, c]`.
    fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let elements = self.parse_expression_list(&Token::RBracket)?;

        Some(Expression::ArrayLiteral { token, elements })
    }

    /// Parses `{ key : value , ... }`. Keys are arbitrary expressions; their
    /// hashability is checked at evaluation, not here.
    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let mut pairs = Vec::new();

        while self.peek != Token::RBrace {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if self.peek != Token::RBrace && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::RBrace) {
            return None;
        }
        Some(Expression::HashLiteral { token, pairs })
    }

    /// Parses the right-hand side of a binary operator at its own
    /// precedence, making the fold left-associative.
    fn parse_infix_expression(
        &mut self,
        left: Expression,
        operator: InfixOperator,
    ) -> Option<Expression> {
        let token = self.current.clone();
        let precedence = Precedence::of(&self.current);

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Parses the argument list of a call. Entered with the cursor on `(`.
    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_expression_list(&Token::RParen)?;

        Some(Expression::Call { token, function: Box::new(function), arguments })
    }

    /// Parses `left[index]`. Entered with the cursor on `[`.
    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();

        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&Token::RBracket) {
            return None;
        }

        Some(Expression::Index { token, left: Box::new(left), index: Box::new(index) })
    }

    /// Parses `left.name`. Entered with the cursor on `.`.
    fn parse_dot_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let name = self.expect_ident()?;

        Some(Expression::Dot { token, left: Box::new(left), name })
    }

    /// Parses a comma-separated expression list up to (and including) the
    /// `end` token. Entered with the cursor on the opening delimiter.
    fn parse_expression_list(&mut self, end: &Token) -> Option<Vec<Expression>> {
        let mut expressions = Vec::new();

        if self.peek.same_kind(end) {
            self.next_token();
            return Some(expressions);
        }

        self.next_token();
        expressions.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek == Token::Comma {
            self.next_token();
            self.next_token();
            expressions.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(expressions)
    }
}
