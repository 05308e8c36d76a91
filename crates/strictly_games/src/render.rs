//! Text rendering of the engine projections.

use strictly_catalog::{COLUMNS, IN_STOCK_LABEL, Row, SEARCH_PLACEHOLDER};
use strictly_tictactoe::GameView;

/// Renders the board grid, status line and move list.
pub fn game(view: &GameView) -> String {
    let mut out = String::new();
    out.push_str(&view.status);
    out.push('\n');

    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                match view.cells[index].as_str() {
                    "" => format!(" {index} "),
                    mark => format!(" {mark} "),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    for entry in &view.moves {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}. {}", entry.index, entry.label));
        if let Some(placed) = entry.placed {
            out.push_str(&format!(" ({placed})"));
        }
        out.push('\n');
    }
    out
}

/// Renders the search controls and the product table.
pub fn catalog(filter_text: &str, in_stock_only: bool, rows: &[Row]) -> String {
    let name_width = rows
        .iter()
        .map(|row| match row {
            Row::Product { product } => product.name().len(),
            Row::Category { .. } => 0,
        })
        .chain(std::iter::once(COLUMNS[0].len()))
        .max()
        .unwrap_or(0);

    let search = if filter_text.is_empty() {
        SEARCH_PLACEHOLDER
    } else {
        filter_text
    };
    let checkbox = if in_stock_only { "[x]" } else { "[ ]" };

    let mut out = format!("Search: {search}\n{checkbox} {IN_STOCK_LABEL}\n\n");
    out.push_str(&format!(
        "{:<name_width$}  {}\n",
        COLUMNS[0], COLUMNS[1]
    ));
    for row in rows {
        match row {
            Row::Category { name } => out.push_str(&format!("{name}\n")),
            Row::Product { product } => {
                // Out-of-stock products are marked with `*`.
                let flag = if *product.stocked() { ' ' } else { '*' };
                out.push_str(&format!(
                    "  {:<name_width$}{flag} {}\n",
                    product.name(),
                    product.price()
                ));
            }
        }
    }
    out
}
