use std::mem;

use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

use crate::token::*;

pub struct Scanner<'source> {
    grapheme_indices: GraphemeIndices<'source>,
    tokens: Vec<Token<'source>>,
    column: usize,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Scanner<'source> {
        Scanner {
            grapheme_indices: source.grapheme_indices(true),
            tokens: Vec::new(),
            column: 0,
        }
    }

    // Scanning is total: whitespace disappears, every other grapheme cluster
    // becomes exactly one token, and whatever the grammar has no name for is
    // passed through as Unknown for the parser to reject.
    pub fn scan_tokens(&mut self) -> Vec<Token<'source>> {
        while let Some(grapheme_cluster) = self.advance() {
            self.scan_token(grapheme_cluster);
        }

        let eof_column = self.column + 1;
        self.tokens.push(Token::new(TokenType::Eof, "", None, eof_column));

        mem::replace(&mut self.tokens, Vec::new())
    }

    fn scan_token(&mut self, grapheme_cluster: &'source str) {
        use crate::token::TokenType::*;
        match grapheme_cluster {
            "(" => self.add_token(LeftParen, grapheme_cluster),
            ")" => self.add_token(RightParen, grapheme_cluster),
            "'" => self.add_token(Prime, grapheme_cluster),
            "+" => self.add_token(Plus, grapheme_cluster),
            "*" => self.add_token(Star, grapheme_cluster),
            _ => {
                if is_blank(grapheme_cluster) {
                    // Ignore whitespace.
                } else if let Some(name) = variable_name(grapheme_cluster) {
                    let token = Token::new(Variable, grapheme_cluster,
                                           Some(name), self.column);
                    self.tokens.push(token);
                } else {
                    self.add_token(Unknown, grapheme_cluster);
                }
            }
        };
    }

    // Advance the grapheme cluster iterator.  The column counts every
    // cluster, skipped whitespace included, so diagnostics point into the
    // raw input.
    fn advance(&mut self) -> Option<&'source str> {
        match self.grapheme_indices.next() {
            None => None,
            Some((_, grapheme_cluster)) => {
                self.column += 1;

                Some(grapheme_cluster)
            }
        }
    }

    fn add_token(&mut self, token_type: TokenType, lexeme: &'source str) {
        let token = Token::new(token_type, lexeme, None, self.column);
        self.tokens.push(token);
    }
}

fn is_blank(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}

// Variables are single ASCII letters.  Anything longer (or any other
// alphabet) scans as Unknown and the parser reports it.
fn variable_name(grapheme: &str) -> Option<char> {
    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}
