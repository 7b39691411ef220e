use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    Variable(char),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn not(operand: Expr) -> Expr {
        Expr::Not(Box::new(operand))
    }

    pub fn and(left: Expr, right: Expr) -> Expr {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Expr {
        Expr::Or(Box::new(left), Box::new(right))
    }

    // Distinct variables in order of first appearance, depth-first and
    // left-to-right.  This order fixes the table's column order and the
    // enumeration order of its rows.
    pub fn variables(&self) -> Vec<char> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);

        vars
    }

    fn collect_variables(&self, vars: &mut Vec<char>) {
        match self {
            Expr::Variable(name) => {
                if !vars.contains(name) {
                    vars.push(*name);
                }
            }
            Expr::Not(operand) => operand.collect_variables(vars),
            Expr::And(left, right) | Expr::Or(left, right) => {
                left.collect_variables(vars);
                right.collect_variables(vars);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Not(operand) => {
                match operand.as_ref() {
                    Expr::Variable(name) => write!(f, "{}'", name),
                    _ => write!(f, "({})'", operand),
                }
            }
            Expr::And(left, right) => {
                write_and_operand(f, left)?;
                write_and_operand(f, right)
            }
            Expr::Or(left, right) => write!(f, "{}+{}", left, right),
        }
    }
}

// AND renders as juxtaposition, so an OR child needs parentheses to keep
// its looser binding visible.
fn write_and_operand(f: &mut fmt::Formatter, operand: &Expr) -> fmt::Result {
    match operand {
        Expr::Or(_, _) => write!(f, "({})", operand),
        _ => write!(f, "{}", operand),
    }
}
