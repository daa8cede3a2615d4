//! In-memory filter/sort/paginate engine over the tagged document list.
//!
//! Stateless with respect to the remote world: it owns one snapshot of rows
//! and recomputes the visible set from its filter state on demand. Action
//! affordances (download/open) are not cells and never participate in
//! filtering.

mod fuzzy;

pub use fuzzy::{MatchRank, alphanumeric_cmp, rank_item};

use chrono::{DateTime, Utc};

use crate::files::TaggedFile;

/// Page-size choices offered to the user.
pub const PAGE_SIZES: [usize; 5] = [10, 20, 30, 40, 50];

/// Configuration default page size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Rendered expiry text for one document: formatted date (or `None`) plus
/// the Active/Expired status at `now`.
pub fn expiry_cell_text(file: &drivedocs_models::DriveFile, now: DateTime<Utc>) -> String {
    let status = file.expiry_status(now).as_str();
    match file.expiry_date {
        Some(expiry) => format!("{} {status}", expiry.format("%B %-d, %Y")),
        None => format!("None {status}"),
    }
}

/// Filterable columns. Order matches the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    FileName,
    Associated,
    Expiry,
}

/// Document table state: one row snapshot plus filter and pagination state.
pub struct DocumentTable {
    rows: Vec<TaggedFile>,
    /// Evaluation time for expiry cells, fixed at construction.
    now: DateTime<Utc>,
    global_filter: String,
    column_filters: Vec<(Column, String)>,
    fuzzy: Option<(Column, String)>,
    page_index: usize,
    page_size: usize,
}

impl DocumentTable {
    pub fn new(rows: Vec<TaggedFile>, now: DateTime<Utc>) -> Self {
        Self {
            rows,
            now,
            global_filter: String::new(),
            column_filters: Vec::new(),
            fuzzy: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// The text a column cell filters against.
    pub fn cell_text(&self, row: &TaggedFile, column: Column) -> String {
        match column {
            Column::FileName => row.file.file_name.clone(),
            Column::Associated => row.associated.join(" "),
            Column::Expiry => self.expiry_cell(row),
        }
    }

    /// Rendered expiry cell: formatted date (or `None`) plus status.
    pub fn expiry_cell(&self, row: &TaggedFile) -> String {
        expiry_cell_text(&row.file, self.now)
    }

    /// Associated cell summary: first five entries, ellipsis when truncated.
    pub fn associated_summary(row: &TaggedFile) -> String {
        let shown: Vec<&str> = row.associated.iter().take(5).map(String::as_str).collect();
        let mut summary = shown.join(", ");
        if row.associated.len() > 5 {
            summary.push_str("...");
        }
        summary
    }

    // --- filter state -----------------------------------------------------

    /// Case-insensitive substring over every cell. Changing any filter
    /// returns to the first page.
    pub fn set_global_filter(&mut self, filter: impl Into<String>) {
        self.global_filter = filter.into();
        self.page_index = 0;
    }

    /// Set or clear (empty value) one column's substring filter. Column
    /// filters AND with each other and with the global filter.
    pub fn set_column_filter(&mut self, column: Column, value: impl Into<String>) {
        let value = value.into();
        self.column_filters.retain(|(existing, _)| *existing != column);
        if !value.is_empty() {
            self.column_filters.push((column, value));
        }
        self.page_index = 0;
    }

    /// Set or clear (empty query) the ranked search on one column. Rows that
    /// fail to rank are excluded; the rest sort by descending rank with an
    /// alphanumeric tiebreak on the cell value.
    pub fn set_fuzzy(&mut self, column: Column, query: impl Into<String>) {
        let query = query.into();
        self.fuzzy = if query.is_empty() { None } else { Some((column, query)) };
        self.page_index = 0;
    }

    // --- row models -------------------------------------------------------

    fn matches_global(&self, row: &TaggedFile) -> bool {
        if self.global_filter.is_empty() {
            return true;
        }
        let needle = self.global_filter.to_lowercase();
        [Column::FileName, Column::Associated, Column::Expiry]
            .into_iter()
            .any(|column| self.cell_text(row, column).to_lowercase().contains(&needle))
    }

    fn matches_columns(&self, row: &TaggedFile) -> bool {
        self.column_filters.iter().all(|(column, value)| {
            self.cell_text(row, *column).to_lowercase().contains(&value.to_lowercase())
        })
    }

    /// The filtered (and, with a ranked search active, sorted) row model,
    /// before pagination.
    pub fn visible(&self) -> Vec<&TaggedFile> {
        let rows = self
            .rows
            .iter()
            .filter(|row| self.matches_global(row) && self.matches_columns(row));

        match &self.fuzzy {
            None => rows.collect(),
            Some((column, query)) => {
                let mut ranked: Vec<(MatchRank, String, &TaggedFile)> = rows
                    .filter_map(|row| {
                        let cell = self.cell_text(row, *column);
                        rank_item(&cell, query).map(|rank| (rank, cell, row))
                    })
                    .collect();
                ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| alphanumeric_cmp(&a.1, &b.1)));
                ranked.into_iter().map(|(_, _, row)| row).collect()
            }
        }
    }

    /// Pre-pagination row count.
    pub fn row_count(&self) -> usize {
        self.visible().len()
    }

    // --- pagination -------------------------------------------------------

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.row_count().div_ceil(self.page_size)
    }

    pub fn page_index(&self) -> usize {
        self.page_index.min(self.page_count().saturating_sub(1))
    }

    /// Rows of the current page.
    pub fn page(&self) -> Vec<&TaggedFile> {
        let visible = self.visible();
        visible
            .into_iter()
            .skip(self.page_index() * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Jump to a page, clamped to the valid range.
    pub fn set_page_index(&mut self, index: usize) {
        self.page_index = index.min(self.page_count().saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index().saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        self.set_page_index(self.page_index() + 1);
    }

    pub fn last_page(&mut self) {
        self.page_index = self.page_count().saturating_sub(1);
    }

    /// Change the page size; values outside [`PAGE_SIZES`] are ignored. The
    /// page index re-clamps when it would fall past the new page count.
    pub fn set_page_size(&mut self, size: usize) {
        if !PAGE_SIZES.contains(&size) {
            tracing::debug!(size, "ignoring unsupported page size");
            return;
        }
        self.page_size = size;
        self.page_index = self.page_index.min(self.page_count().saturating_sub(1));
    }
}
