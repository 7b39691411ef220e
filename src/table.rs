use prettytable::{Cell, Row, Table};

use crate::ast::Expr;
use crate::binding::Binding;

// Compose the truth table: one column per variable in the order given, then
// a result column headed by the expression itself.  Rows render in the order
// supplied; cells are 1 and 0.  No evaluation happens here.
pub fn render(expr: &Expr, vars: &[char], rows: &[(Binding, bool)]) -> Table {
    let mut table = Table::new();

    let mut titles = Row::new(
        vars.iter()
            .map(|name| Cell::new(&name.to_string()))
            .collect(),
    );
    titles.add_cell(Cell::new(&expr.to_string()));
    table.set_titles(titles);

    for (binding, value) in rows {
        let mut row = Row::new(
            vars.iter()
                .map(|name| bit_cell(binding.get(*name).unwrap_or(false)))
                .collect(),
        );
        row.add_cell(bit_cell(*value));
        table.add_row(row);
    }

    table
}

fn bit_cell(value: bool) -> Cell {
    Cell::new(if value { "1" } else { "0" })
}
