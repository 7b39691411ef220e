use crate::ast::Expr;
use crate::error::SyntaxError;
use crate::scanner::Scanner;
use crate::token::*;

// Grammar, loosest binding first:
//
//   expression -> term ("+" expression)?
//   term       -> prod ("*" term)?
//               | prod (term)?
//   prod       -> variable ("'")?
//               | "(" expression ")" ("'")?
//   variable   -> [a-zA-Z]
//
// OR and AND are right-associative by construction, juxtaposition is AND,
// and the postfix prime negates only the prod it trails.
pub fn parse(source: &str) -> Result<Expr, SyntaxError> {
    let tokens = Scanner::new(source).scan_tokens();
    let mut parser = Parser::new(tokens);

    parser.parse()
}

#[derive(Debug)]
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Parser<'a> {
        Parser {
            tokens,
            current: 0,
        }
    }

    pub fn parse(&mut self) -> Result<Expr, SyntaxError> {
        let expr = self.expression()?;
        self.expect(TokenType::Eof, "end of input")?;

        Ok(expr)
    }

    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        let left = self.term()?;

        if self.matches(TokenType::Plus) {
            let right = self.expression()?;
            Ok(Expr::or(left, right))
        } else {
            Ok(left)
        }
    }

    fn term(&mut self) -> Result<Expr, SyntaxError> {
        let left = self.prod()?;

        // A variable or open paren right after a prod is an implicit AND;
        // "*" spells the same thing explicitly.
        let right = if self.check(TokenType::Variable)
                || self.check(TokenType::LeftParen) {
            Some(self.term()?)
        } else if self.matches(TokenType::Star) {
            Some(self.term()?)
        } else {
            None
        };

        match right {
            Some(right) => Ok(Expr::and(left, right)),
            None => Ok(left),
        }
    }

    fn prod(&mut self) -> Result<Expr, SyntaxError> {
        let expr = if self.matches(TokenType::LeftParen) {
            let expr = self.expression()?;
            self.expect(TokenType::RightParen, "')'")?;
            expr
        } else {
            self.variable()?
        };

        if self.matches(TokenType::Prime) {
            Ok(Expr::not(expr))
        } else {
            Ok(expr)
        }
    }

    fn variable(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.peek();
        match (token.token_type, token.name) {
            (TokenType::Variable, Some(name)) => {
                self.advance();
                Ok(Expr::Variable(name))
            }
            _ => Err(self.error_expected("variable")),
        }
    }

    fn expect(&mut self, token_type: TokenType, description: &str)
        -> Result<(), SyntaxError>
    {
        if self.matches(token_type) {
            Ok(())
        } else {
            Err(self.error_expected(description))
        }
    }

    fn error_expected(&self, description: &str) -> SyntaxError {
        let token = self.peek();

        SyntaxError::new(token.column, description, &token.describe())
    }

    fn matches(&mut self, token_type: TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, token_type: TokenType) -> bool {
        self.peek().token_type == token_type
    }

    fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        self.current += 1;
    }

    // The scanner always terminates the stream with Eof, so there is a
    // current token at every cursor position.
    fn peek(&self) -> &Token<'a> {
        &self.tokens[self.current]
    }

    fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::Eof
    }
}
