use crate::scanner::*;
use crate::token::*;

#[test]
fn test_scan_single_tokens() {
    let mut s = Scanner::new("(");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::LeftParen, "(", None, 1),
                                     Token::new(TokenType::Eof, "", None, 2)]);
    let mut s = Scanner::new(")");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::RightParen, ")", None, 1),
                                     Token::new(TokenType::Eof, "", None, 2)]);
    let mut s = Scanner::new("'");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Prime, "'", None, 1),
                                     Token::new(TokenType::Eof, "", None, 2)]);
    let mut s = Scanner::new("+");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Plus, "+", None, 1),
                                     Token::new(TokenType::Eof, "", None, 2)]);
    let mut s = Scanner::new("*");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Star, "*", None, 1),
                                     Token::new(TokenType::Eof, "", None, 2)]);
}

#[test]
fn test_scan_variables() {
    let mut s = Scanner::new("a");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Variable, "a", Some('a'), 1),
                                     Token::new(TokenType::Eof, "", None, 2)]);
    let mut s = Scanner::new("Z");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Variable, "Z", Some('Z'), 1),
                                     Token::new(TokenType::Eof, "", None, 2)]);
    let mut s = Scanner::new("ab");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Variable, "a", Some('a'), 1),
                                     Token::new(TokenType::Variable, "b", Some('b'), 2),
                                     Token::new(TokenType::Eof, "", None, 3)]);
}

#[test]
fn test_scan_skips_whitespace() {
    // Columns keep counting through skipped whitespace so diagnostics point
    // into the raw input.
    let mut s = Scanner::new(" a + b ");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Variable, "a", Some('a'), 2),
                                     Token::new(TokenType::Plus, "+", None, 4),
                                     Token::new(TokenType::Variable, "b", Some('b'), 6),
                                     Token::new(TokenType::Eof, "", None, 8)]);
    let mut s = Scanner::new("a\t\nb");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Variable, "a", Some('a'), 1),
                                     Token::new(TokenType::Variable, "b", Some('b'), 4),
                                     Token::new(TokenType::Eof, "", None, 5)]);
}

#[test]
fn test_scan_expression() {
    let mut s = Scanner::new("(a+b)'");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::LeftParen, "(", None, 1),
                                     Token::new(TokenType::Variable, "a", Some('a'), 2),
                                     Token::new(TokenType::Plus, "+", None, 3),
                                     Token::new(TokenType::Variable, "b", Some('b'), 4),
                                     Token::new(TokenType::RightParen, ")", None, 5),
                                     Token::new(TokenType::Prime, "'", None, 6),
                                     Token::new(TokenType::Eof, "", None, 7)]);
}

#[test]
fn test_scan_unknown_passes_through() {
    // Scanning never fails; the parser owns rejection.
    let mut s = Scanner::new("@");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Unknown, "@", None, 1),
                                     Token::new(TokenType::Eof, "", None, 2)]);
    let mut s = Scanner::new("a&b");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Variable, "a", Some('a'), 1),
                                     Token::new(TokenType::Unknown, "&", None, 2),
                                     Token::new(TokenType::Variable, "b", Some('b'), 3),
                                     Token::new(TokenType::Eof, "", None, 4)]);
    // Non-ASCII letters are not variables.
    let mut s = Scanner::new("λ");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Unknown, "λ", None, 1),
                                     Token::new(TokenType::Eof, "", None, 2)]);
}

#[test]
fn test_scan_empty_input() {
    let mut s = Scanner::new("");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Eof, "", None, 1)]);
    let mut s = Scanner::new("   ");
    assert_eq!(s.scan_tokens(), vec![Token::new(TokenType::Eof, "", None, 4)]);
}

#[test]
fn test_describe() {
    let mut s = Scanner::new("a)");
    let tokens = s.scan_tokens();
    assert_eq!(tokens[0].describe(), "'a'");
    assert_eq!(tokens[1].describe(), "')'");
    assert_eq!(tokens[2].describe(), "end of input");
}
