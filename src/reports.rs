use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use wordgrid::render::CharGrid;

pub fn print_grid(title: &str, grid: &CharGrid) {
    println!("\n{}", title);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in grid {
        let cells: Vec<Cell> = row
            .iter()
            .map(|&ch| Cell::new(ch).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}
