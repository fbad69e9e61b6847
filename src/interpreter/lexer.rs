use logos::Logos;

/// Represents a lexical token in sorrel source text.
/// A token is the smallest meaningful unit the parser works with.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
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
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
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
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; names such as `x` or `addTwo`. Identifier
    /// characters are ASCII letters and `_` in every position, so a digit
    /// ends an identifier rather than extending it.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens such as `42`, carried as their source
    /// spelling. The parser owns the conversion, so an out-of-range literal
    /// becomes a parse error instead of a lexing failure.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// String literal tokens. The opening quote starts a raw scan to the
    /// next `"` or to the end of input; the closing quote is consumed but
    /// excluded, and no escape sequences are recognized.
    #[token("\"", scan_string)]
    Str(String),
    /// Any input no other rule matches, carried verbatim.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),
    /// Spaces, tabs and line breaks between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
    /// End of input. Never produced by the token rules; the [`Lexer`]
    /// yields it once the source is exhausted.
    Eof,
}

/// Scans the remainder of a string literal after its opening quote.
fn scan_string(lex: &mut logos::Lexer<Token>) -> String {
    let rest = lex.remainder();
    match rest.find('"') {
        Some(end) => {
            let content = rest[..end].to_string();
            lex.bump(end + 1);
            content
        },
        None => {
            let content = rest.to_string();
            lex.bump(rest.len());
            content
        },
    }
}

impl std::fmt::Display for Token {
    /// Renders the token's kind the way parse error messages name it:
    /// punctuation and keywords as their spelling, literal categories as
    /// `IDENT`, `INT` and `STRING`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "fn",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::Identifier(_) => "IDENT",
            Self::Integer(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Illegal(_) => "ILLEGAL",
            Self::Whitespace => " ",
            Self::Eof => "EOF",
        };
        write!(f, "{kind}")
    }
}

/// An on-demand token cursor over a source string.
///
/// `next_token` hands out one token at a time and yields [`Token::Eof`]
/// forever once the input is exhausted. Lexing is total: input that matches
/// no token rule comes back as [`Token::Illegal`] and is reported downstream
/// by the parser, so this type has no error path of its own.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner: Token::lexer(source) }
    }

    /// Returns the next token in the input.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(token)) => token,
            // The catch-all rule makes lexing total; keep the arm so a
            // future rule change cannot panic here.
            Some(Err(())) => Token::Illegal(self.inner.slice().to_string()),
            None => Token::Eof,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            match lexer.next_token() {
                Token::Eof => break,
                token => out.push(token),
            }
        }
        out
    }

    fn ident(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    fn int(literal: &str) -> Token {
        Token::Integer(literal.to_string())
    }

    #[test]
    fn fixed_tokens() {
        assert_eq!(
            tokens("=+-!*/<>,;:(){}[]"),
            vec![
                Token::Assign,
                Token::Plus,
                Token::Minus,
                Token::Bang,
                Token::Asterisk,
                Token::Slash,
                Token::Lt,
                Token::Gt,
                Token::Comma,
                Token::Semicolon,
                Token::Colon,
                Token::LParen,
                Token::RParen,
                Token::LBrace,
                Token::RBrace,
                Token::LBracket,
                Token::RBracket,
            ]
        );
    }

    #[test]
    fn two_character_operators_win_over_single() {
        assert_eq!(tokens("== != = !"), vec![
            Token::Eq,
            Token::NotEq,
            Token::Assign,
            Token::Bang,
        ]);
    }

    #[test]
    fn keywords() {
        assert_eq!(tokens("fn let true false if else return"), vec![
            Token::Function,
            Token::Let,
            Token::True,
            Token::False,
            Token::If,
            Token::Else,
            Token::Return,
        ]);
    }

    #[test]
    fn identifiers() {
        assert_eq!(tokens("x addTwo _private lettuce"), vec![
            ident("x"),
            ident("addTwo"),
            ident("_private"),
            ident("lettuce"),
        ]);
    }

    #[test]
    fn digits_end_an_identifier() {
        assert_eq!(tokens("foo123"), vec![ident("foo"), int("123")]);
    }

    #[test]
    fn integers_keep_their_spelling() {
        assert_eq!(tokens("5 10 9999999999999999999"), vec![
            int("5"),
            int("10"),
            int("9999999999999999999"),
        ]);
    }

    #[test]
    fn string_literals() {
        assert_eq!(tokens(r#""hello world" "" "a b""#), vec![
            Token::Str("hello world".to_string()),
            Token::Str(String::new()),
            Token::Str("a b".to_string()),
        ]);
    }

    #[test]
    fn unterminated_string_runs_to_end_of_input() {
        assert_eq!(tokens("\"abc"), vec![Token::Str("abc".to_string())]);
    }

    #[test]
    fn illegal_characters() {
        assert_eq!(tokens("@"), vec![Token::Illegal("@".to_string())]);
        assert_eq!(tokens("1 ~ 2"), vec![int("1"), Token::Illegal("~".to_string()), int("2")]);
    }

    #[test]
    fn eof_is_sticky() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token(), ident("x"));
        assert_eq!(lexer.next_token(), Token::Eof);
        assert_eq!(lexer.next_token(), Token::Eof);
    }

    #[test]
    fn whole_program() {
        let input = "let five = 5;\n\
                     let add = fn(x, y) { x + y };\n\
                     let result = add(five, 10);\n\
                     if (result != 15) { puts(\"no\") } else { [1, 2][0] }";
        assert_eq!(tokens(input), vec![
            Token::Let,
            ident("five"),
            Token::Assign,
            int("5"),
            Token::Semicolon,
            Token::Let,
            ident("add"),
            Token::Assign,
            Token::Function,
            Token::LParen,
            ident("x"),
            Token::Comma,
            ident("y"),
            Token::RParen,
            Token::LBrace,
            ident("x"),
            Token::Plus,
            ident("y"),
            Token::RBrace,
            Token::Semicolon,
            Token::Let,
            ident("result"),
            Token::Assign,
            ident("add"),
            Token::LParen,
            ident("five"),
            Token::Comma,
            int("10"),
            Token::RParen,
            Token::Semicolon,
            Token::If,
            Token::LParen,
            ident("result"),
            Token::NotEq,
            int("15"),
            Token::RParen,
            Token::LBrace,
            ident("puts"),
            Token::LParen,
            Token::Str("no".to_string()),
            Token::RParen,
            Token::RBrace,
            Token::Else,
            Token::LBrace,
            Token::LBracket,
            int("1"),
            Token::Comma,
            int("2"),
            Token::RBracket,
            Token::LBracket,
            int("0"),
            Token::RBracket,
            Token::RBrace,
        ]);
    }
}
