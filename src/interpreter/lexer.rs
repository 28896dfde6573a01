use logos::Logos;

/// Raw lexical classes recognized by the scanner.
///
/// This enum drives the `logos` DFA. It is deliberately private: `Ident`,
/// `Int` and `Illegal` need their source slice attached and end-of-input
/// needs an explicit token, so the public surface is [`Token`], produced by
/// [`Lexer::next_token`].
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
enum RawToken {
    /// `let`
    #[token("let")]
    Let,
    /// `fn`
    #[token("fn")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// Identifier tokens; names such as `x`, `$tmp` or `total_count`.
    /// Keywords win over identifiers of the same length.
    #[regex(r"[A-Za-z_$][A-Za-z_$]*")]
    Ident,
    /// Integer literal tokens: decimal, or `0b`/`0o`/`0x` prefixed.
    ///
    /// The digit part of a prefixed literal may be empty so that `0b2` scans
    /// as `0b` followed by `2`; the parser rejects the empty digits. The
    /// slice keeps the prefix, value parsing happens in the parser.
    #[regex(r"0b[01]*|0o[0-7]*|0x[0-9a-fA-F]*|[0-9]+")]
    Int,
    /// String literal tokens. The callback consumes up to the closing quote
    /// (or end of input) and yields the escape-processed contents.
    #[token("\"", read_string)]
    Str(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `!`
    #[token("!")]
    Bang,
    /// `+`
    #[token("+")]
    Plus,
    /// `++`
    #[token("++")]
    Increment,
    /// `-`
    #[token("-")]
    Minus,
    /// `--`
    #[token("--")]
    Decrement,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
}

/// A lexical token of the language.
///
/// Tokens pair a kind with the literal text that matters for that kind:
/// identifiers carry their name, integer literals carry the raw source text
/// (base prefix included), strings carry their escape-processed contents.
/// Unrecognized bytes become [`Token::Illegal`]; past the end of input the
/// lexer hands out [`Token::Eof`] forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An identifier such as `x` or `counter`.
    Ident(String),
    /// An integer literal, e.g. `42` or `0x1F`. The text is kept verbatim.
    Int(String),
    /// A string literal with escape sequences already applied.
    Str(String),
    /// `let`
    Let,
    /// `fn`
    Function,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
    /// `true`
    True,
    /// `false`
    False,
    /// `=`
    Assign,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `!`
    Bang,
    /// `+`
    Plus,
    /// `++`
    Increment,
    /// `-`
    Minus,
    /// `--`
    Decrement,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// A byte sequence the scanner does not recognize, carried verbatim.
    Illegal(String),
    /// End of input.
    Eof,
}

impl Token {
    /// Returns the diagnostic name of this token's kind, e.g. `IDENT`, `)` or
    /// `EOF`. Parse diagnostics are phrased in terms of these names.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Ident(_) => "IDENT",
            Self::Int(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Let => "LET",
            Self::Function => "FUNCTION",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Assign => "=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Bang => "!",
            Self::Plus => "+",
            Self::Increment => "++",
            Self::Minus => "-",
            Self::Decrement => "--",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
        }
    }

    /// Returns the literal text of this token as it would appear in source.
    ///
    /// For identifiers, integers and illegal bytes this is the scanned slice;
    /// for strings it is the processed contents; for everything else it is
    /// the fixed spelling. [`Token::Eof`] has no spelling and yields `""`.
    #[must_use]
    pub fn literal(&self) -> &str {
        match self {
            Self::Ident(text) | Self::Int(text) | Self::Str(text) | Self::Illegal(text) => text,
            Self::Let => "let",
            Self::Function => "fn",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::True => "true",
            Self::False => "false",
            Self::Assign => "=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Bang => "!",
            Self::Plus => "+",
            Self::Increment => "++",
            Self::Minus => "-",
            Self::Decrement => "--",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Eof => "",
        }
    }

    /// Returns `true` if `self` and `other` are the same kind of token,
    /// ignoring any literal payload.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// The scanner: turns source text into a stream of [`Token`]s.
///
/// The scanner never fails. Unrecognized bytes surface as
/// [`Token::Illegal`] and are reported by the parser; once the input is
/// exhausted every further call yields [`Token::Eof`].
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, RawToken>,
}

impl<'source> Lexer<'source> {
    /// Creates a scanner over the given source text.
    #[must_use]
    pub fn new(input: &'source str) -> Self {
        Self { inner: RawToken::lexer(input) }
    }

    /// Returns the next token and advances the scanner.
    pub fn next_token(&mut self) -> Token {
        let Some(raw) = self.inner.next() else {
            return Token::Eof;
        };

        let slice = self.inner.slice();
        match raw {
            Ok(RawToken::Ident) => Token::Ident(slice.to_owned()),
            Ok(RawToken::Int) => Token::Int(slice.to_owned()),
            Ok(RawToken::Str(contents)) => Token::Str(contents),
            Ok(RawToken::Let) => Token::Let,
            Ok(RawToken::Function) => Token::Function,
            Ok(RawToken::If) => Token::If,
            Ok(RawToken::Else) => Token::Else,
            Ok(RawToken::Return) => Token::Return,
            Ok(RawToken::True) => Token::True,
            Ok(RawToken::False) => Token::False,
            Ok(RawToken::Assign) => Token::Assign,
            Ok(RawToken::Eq) => Token::Eq,
            Ok(RawToken::NotEq) => Token::NotEq,
            Ok(RawToken::Bang) => Token::Bang,
            Ok(RawToken::Plus) => Token::Plus,
            Ok(RawToken::Increment) => Token::Increment,
            Ok(RawToken::Minus) => Token::Minus,
            Ok(RawToken::Decrement) => Token::Decrement,
            Ok(RawToken::Asterisk) => Token::Asterisk,
            Ok(RawToken::Slash) => Token::Slash,
            Ok(RawToken::Lt) => Token::Lt,
            Ok(RawToken::Gt) => Token::Gt,
            Ok(RawToken::Comma) => Token::Comma,
            Ok(RawToken::Semicolon) => Token::Semicolon,
            Ok(RawToken::Colon) => Token::Colon,
            Ok(RawToken::Dot) => Token::Dot,
            Ok(RawToken::LParen) => Token::LParen,
            Ok(RawToken::RParen) => Token::RParen,
            Ok(RawToken::LBrace) => Token::LBrace,
            Ok(RawToken::RBrace) => Token::RBrace,
            Ok(RawToken::LBracket) => Token::LBracket,
            Ok(RawToken::RBracket) => Token::RBracket,
            Err(()) => Token::Illegal(slice.to_owned()),
        }
    }
}

/// Consumes a string literal after its opening quote.
///
/// Recognized escapes are `\t`, `\n`, `\r` and `\"`; any other `\X` passes
/// through as a literal backslash followed by `X`. A string that never closes
/// ends at the end of input and yields whatever was accumulated.
fn read_string(lex: &mut logos::Lexer<RawToken>) -> String {
    let remainder = lex.remainder();
    let mut contents = String::new();
    let mut consumed = 0;

    let mut chars = remainder.char_indices();
    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => {
                consumed = offset + c.len_utf8();
                break;
            },
            '\\' => match chars.next() {
                Some((escape_offset, escaped)) => {
                    match escaped {
                        't' => contents.push('\t'),
                        'n' => contents.push('\n'),
                        'r' => contents.push('\r'),
                        '"' => contents.push('"'),
                        other => {
                            contents.push('\\');
                            contents.push(other);
                        },
                    }
                    consumed = escape_offset + escaped.len_utf8();
                },
                None => {
                    contents.push('\\');
                    consumed = remainder.len();
                },
            },
            other => {
                contents.push(other);
                consumed = offset + other.len_utf8();
            },
        }
    }

    lex.bump(consumed);
    contents
}
