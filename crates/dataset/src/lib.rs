//! Tabular datasets used as optional agent context.
//!
//! Spreadsheets (`xlsx`, `xlsm`, `xls`, `ods`) and CSV files are loaded into
//! a [`Dataset`]; only a short textual preview of the first rows is ever
//! handed to the agents.

pub mod loader;
pub mod preview;

use serde::{Deserialize, Serialize};

pub use loader::load_dataset;
pub use preview::context_snippet;

/// A rectangular table with named columns.
///
/// Every row holds exactly `columns.len()` cells; empty cells are `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset, naming blank headers and squaring ragged rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let columns: Vec<String> = columns
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                if name.trim().is_empty() {
                    format!("Unnamed: {}", i)
                } else {
                    name
                }
            })
            .collect();

        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
