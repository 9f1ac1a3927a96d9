use linebreak_core::{BreakAction, BreakClass, DensePairTable, PairTable};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{TailoringError, TailoringResult};

pub const TAILORING_SCHEMA: u32 = 1;

/// A pair table described as a base table plus ordered cell overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailoringFile {
    #[serde(default = "default_schema")]
    pub schema: u32,
    #[serde(default)]
    pub base: BaseTable,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<PairRule>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseTable {
    #[default]
    Uax14,
    /// Every pair prohibited.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairRule {
    pub before: ClassSelector,
    pub after: ClassSelector,
    pub action: String,
}

/// One class code, a list of codes, or `"*"` for every paired class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassSelector {
    One(String),
    Many(Vec<String>),
}

fn default_schema() -> u32 {
    TAILORING_SCHEMA
}

impl Default for TailoringFile {
    fn default() -> Self {
        Self {
            schema: TAILORING_SCHEMA,
            base: BaseTable::Uax14,
            rules: Vec::new(),
        }
    }
}

impl BaseTable {
    pub fn table(self) -> DensePairTable {
        match self {
            BaseTable::Uax14 => DensePairTable::uax14(),
            BaseTable::Empty => DensePairTable::filled(BreakAction::Prohibited),
        }
    }
}

impl ClassSelector {
    pub fn classes(&self) -> TailoringResult<Vec<BreakClass>> {
        match self {
            ClassSelector::One(code) if code.trim() == "*" => Ok(BreakClass::paired().to_vec()),
            ClassSelector::One(code) => Ok(vec![parse_paired_class(code)?]),
            ClassSelector::Many(codes) => codes.iter().map(|code| parse_paired_class(code)).collect(),
        }
    }
}

impl PairRule {
    pub fn new(before: BreakClass, after: BreakClass, action: BreakAction) -> Self {
        Self {
            before: ClassSelector::One(before.code().to_string()),
            after: ClassSelector::One(after.code().to_string()),
            action: action.name().to_string(),
        }
    }

    pub fn action(&self) -> TailoringResult<BreakAction> {
        BreakAction::from_code(&self.action)
            .ok_or_else(|| TailoringError::UnknownAction(self.action.clone()))
    }
}

impl TailoringFile {
    /// Applies the rules in order on top of the base table; later rules win.
    pub fn build(&self) -> TailoringResult<DensePairTable> {
        if self.schema != TAILORING_SCHEMA {
            return Err(TailoringError::UnsupportedSchema(self.schema));
        }
        let mut table = self.base.table();
        let mut cells = 0usize;
        for rule in &self.rules {
            let action = rule.action()?;
            let before = rule.before.classes()?;
            let after = rule.after.classes()?;
            for &b in &before {
                for &a in &after {
                    table.set(b, a, action)?;
                    cells += 1;
                }
            }
        }
        debug!(
            "built pair table from {:?} base with {} rules ({cells} cells)",
            self.base,
            self.rules.len()
        );
        Ok(table)
    }

    /// Describes `table` as one rule per paired cell that differs from the
    /// UAX #14 table.
    pub fn from_table<T: PairTable + ?Sized>(table: &T) -> Self {
        let base = BaseTable::Uax14.table();
        let mut rules = Vec::new();
        for &before in BreakClass::paired() {
            for &after in BreakClass::paired() {
                let action = table.action(before, after);
                if action != base.action(before, after) {
                    rules.push(PairRule::new(before, after, action));
                }
            }
        }
        Self {
            rules,
            ..Self::default()
        }
    }
}

fn parse_paired_class(code: &str) -> TailoringResult<BreakClass> {
    let class =
        BreakClass::from_code(code).ok_or_else(|| TailoringError::UnknownClass(code.to_string()))?;
    if !class.is_paired() {
        return Err(TailoringError::ClassOutsideTable(code.to_string()));
    }
    Ok(class)
}
