use std::fmt;

// The parser stops at the first token that does not fit the grammar and
// reports what it wanted against what it found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntaxError {
    pub column: usize,
    pub expected: String,
    pub found: String,
}

impl SyntaxError {
    pub fn new(column: usize, expected: &str, found: &str) -> SyntaxError {
        SyntaxError {
            column,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expected {}, got {}", self.expected, self.found)
    }
}

// A variable with no entry in the binding under evaluation.  The enumerator
// always supplies total bindings, so seeing this outside of direct library
// use means an invariant was broken upstream.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EvalError {
    pub name: char,
}

impl EvalError {
    pub fn new(name: char) -> EvalError {
        EvalError { name }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unbound variable: {}", self.name)
    }
}
