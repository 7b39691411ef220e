use crate::ast::Expr;
use crate::binding::Binding;
use crate::error::EvalError;

// Reduce the tree to a truth value under one binding.  Both operands of a
// connective are evaluated before combining, so an unbound variable is
// reported no matter what the other side works out to.
pub fn evaluate(expr: &Expr, binding: &Binding) -> Result<bool, EvalError> {
    match expr {
        Expr::Variable(name) => {
            binding.get(*name).ok_or_else(|| EvalError::new(*name))
        }
        Expr::Not(operand) => {
            let value = evaluate(operand, binding)?;

            Ok(!value)
        }
        Expr::And(left, right) => {
            let left_value = evaluate(left, binding)?;
            let right_value = evaluate(right, binding)?;

            Ok(left_value && right_value)
        }
        Expr::Or(left, right) => {
            let left_value = evaluate(left, binding)?;
            let right_value = evaluate(right, binding)?;

            Ok(left_value || right_value)
        }
    }
}
