use comfy_table::Table;

use drivedocs_core::DocumentTable;

fn files_table(table: &DocumentTable) -> Table {
    let mut rendered = Table::new();
    rendered.set_header(vec!["File", "Associated With", "Expiry Date"]);

    for row in table.page() {
        rendered.add_row(vec![
            row.file.file_name.clone(),
            DocumentTable::associated_summary(row),
            table.expiry_cell(row),
        ]);
    }
    rendered
}

pub fn print_files_table(table: &DocumentTable) {
    println!("{}", files_table(table));
    println!(
        "Page {} of {} | {} rows",
        table.page_index() + 1,
        table.page_count().max(1),
        table.row_count()
    );
}
