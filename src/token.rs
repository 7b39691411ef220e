#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TokenType {
    // Single-character tokens.
    LeftParen, RightParen, Prime, Plus, Star,

    // A single letter naming a boolean input.
    Variable,

    // Anything the scanner does not recognize.  It flows through so the
    // parser can report it; the scanner itself never fails.
    Unknown,

    Eof,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'a> {
    pub token_type: TokenType,
    pub lexeme: &'a str,
    pub name: Option<char>,
    pub column: usize,
}

impl<'a> Token<'a> {
    pub fn new(token_type: TokenType,
               lexeme: &'a str,
               name: Option<char>,
               column: usize)
        -> Token<'a>
    {
        Token {
            token_type,
            lexeme,
            name,
            column,
        }
    }

    // How the token reads in a diagnostic.
    pub fn describe(&self) -> String {
        match self.token_type {
            TokenType::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}
