use linebreak_core::{BreakClass, PairTable};
use serde::{Deserialize, Serialize};

/// Full grid view of a pair table, keyed by class codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableExport {
    pub classes: Vec<String>,
    /// `rows[before][after]`, as short action codes.
    pub rows: Vec<Vec<String>>,
}

impl TableExport {
    pub fn from_table<T: PairTable + ?Sized>(table: &T) -> Self {
        let paired = BreakClass::paired();
        let classes = paired.iter().map(|class| class.code().to_string()).collect();
        let rows = paired
            .iter()
            .map(|&before| {
                paired
                    .iter()
                    .map(|&after| table.action(before, after).code().to_string())
                    .collect()
            })
            .collect();
        Self { classes, rows }
    }

    /// Plain text grid, one row per "before" class.
    pub fn to_grid(&self) -> String {
        let mut out = String::from("    ");
        for class in &self.classes {
            out.push_str(&format!(" {class:<3}"));
        }
        out.push('\n');
        for (class, row) in self.classes.iter().zip(&self.rows) {
            out.push_str(&format!("{class:<4}"));
            for cell in row {
                out.push_str(&format!(" {cell:<3}"));
            }
            out.push('\n');
        }
        out
    }
}
