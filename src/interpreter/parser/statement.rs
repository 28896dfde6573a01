use crate::{
    ast::{BlockStatement, Identifier, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses one statement, dispatching on the current token.
    ///
    /// `let` and `return` select their statement forms by keyword; an
    /// identifier immediately followed by `=` is an assignment; everything
    /// else is an expression statement. A trailing `;` is optional on every
    /// form.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match &self.current {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            Token::Ident(_) if self.peek == Token::Assign => self.parse_assignment_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <name> = <value>;`.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        let name = self.expect_ident()?;
        if !self.expect_peek(&Token::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Let { token, name, value })
    }

    /// Parses `return;` or `return <value>;`. A `return` directly followed
    /// by `;`, `}` or the end of input carries no value.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if matches!(self.peek, Token::Semicolon | Token::RBrace | Token::Eof) {
            self.skip_optional_semicolon();
            return Some(Statement::Return { token, value: None });
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Return { token, value: Some(value) })
    }

    /// Parses `<name> = <value>;`. Only entered when the current token is an
    /// identifier and the peek token is `=`.
    fn parse_assignment_statement(&mut self) -> Option<Statement> {
        let Token::Ident(target) = self.current.clone() else {
            return None;
        };
        let name = Identifier { token: self.current.clone(), value: target };

        self.next_token();
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Assignment { token: name.token.clone(), name, value })
    }

    /// Parses an expression used as a statement.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Expression { token, expression })
    }

    /// Parses a brace-delimited statement sequence. Entered with the cursor
    /// on `{`; returns with the cursor on the matching `}` (or at the end of
    /// input if the block never closes).
    ///
    /// Blocks introduce no scope; the scope boundary of the language is the
    /// function call.
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.next_token();
        while !matches!(self.current, Token::RBrace | Token::Eof) {
            match self.parse_statement() {
                Some(statement) => statements.push(statement),
                None => {
                    self.synchronize();
                    if matches!(self.current, Token::RBrace | Token::Eof) {
                        break;
                    }
                },
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }

    /// Advances over the peek token if it is an identifier and returns it;
    /// otherwise records a diagnostic.
    pub(crate) fn expect_ident(&mut self) -> Option<Identifier> {
        if let Token::Ident(name) = &self.peek {
            let identifier = Identifier { token: self.peek.clone(), value: name.clone() };
            self.next_token();
            Some(identifier)
        } else {
            self.peek_error("IDENT");
            None
        }
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek == Token::Semicolon {
            self.next_token();
        }
    }
}
