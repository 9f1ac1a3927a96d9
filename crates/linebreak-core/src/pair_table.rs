use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use crate::{BreakAction, BreakClass, CoreError, CoreResult, PAIRED_CLASS_COUNT};

/// Looks up the break action for a pair of adjacent classes.
///
/// Implementations must be total: any pair a table does not cover resolves to
/// [`BreakAction::Prohibited`].
pub trait PairTable {
    fn action(&self, before: BreakClass, after: BreakClass) -> BreakAction;
}

impl<T: PairTable + ?Sized> PairTable for &T {
    fn action(&self, before: BreakClass, after: BreakClass) -> BreakAction {
        (**self).action(before, after)
    }
}

impl<T: PairTable + ?Sized> PairTable for Box<T> {
    fn action(&self, before: BreakClass, after: BreakClass) -> BreakAction {
        (**self).action(before, after)
    }
}

const DI: BreakAction = BreakAction::Direct;
const IN: BreakAction = BreakAction::Indirect;
const CI: BreakAction = BreakAction::CombiningIndirect;
const CP: BreakAction = BreakAction::CombiningProhibited;
const PR: BreakAction = BreakAction::Prohibited;

/// Example pair table from <https://www.unicode.org/reports/tr14/#Table2>.
///
/// `UAX14_PAIRS[before][after]`, indexed by [`BreakClass::index`].
#[rustfmt::skip]
pub static UAX14_PAIRS: [[BreakAction; PAIRED_CLASS_COUNT]; PAIRED_CLASS_COUNT] = [
//   after:
//   OP  CL  CP  QU  GL  NS  EX  SY  IS  PR  PO  NU  AL  HL  ID  IN  HY  BA  BB  B2  ZW  CM  WJ  H2  H3  JL  JV  JT  RI       before:
    [PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, CP, PR, PR, PR, PR, PR, PR, PR], // OP
    [DI, PR, PR, IN, IN, PR, PR, PR, PR, IN, IN, DI, DI, DI, DI, DI, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // CL
    [DI, PR, PR, IN, IN, PR, PR, PR, PR, IN, IN, IN, IN, IN, DI, DI, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // CP
    [PR, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, PR, CI, PR, IN, IN, IN, IN, IN, IN], // QU
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, PR, CI, PR, IN, IN, IN, IN, IN, IN], // GL
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, DI, DI, DI, DI, DI, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // NS
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, DI, DI, DI, DI, DI, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // EX
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, IN, DI, DI, DI, DI, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // SY
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, IN, IN, IN, DI, DI, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // IS
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, IN, IN, IN, IN, DI, IN, IN, DI, DI, PR, CI, PR, IN, IN, IN, IN, IN, DI], // PR
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, IN, IN, IN, DI, DI, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // PO
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // NU
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, IN, IN, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // AL
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, IN, IN, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // HL
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // ID
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // IN
    [DI, PR, PR, IN, DI, IN, PR, PR, PR, DI, DI, IN, DI, DI, DI, DI, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // HY
    [DI, PR, PR, IN, DI, IN, PR, PR, PR, DI, DI, DI, DI, DI, DI, DI, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // BA
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, PR, CI, PR, IN, IN, IN, IN, IN, IN], // BB
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, DI, DI, DI, DI, DI, IN, IN, DI, PR, PR, CI, PR, DI, DI, DI, DI, DI, DI], // B2
    [DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, PR, DI, DI, DI, DI, DI, DI, DI, DI], // ZW
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, IN, IN, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI], // CM
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, PR, CI, PR, IN, IN, IN, IN, IN, IN], // WJ
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, IN, IN, DI], // H2
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, IN, DI], // H3
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, IN, IN, IN, IN, DI, DI], // JL
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, IN, IN, DI], // JV
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, IN, DI], // JT
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, DI, DI, DI, DI, DI, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, IN], // RI
];

/// Zero-sized handle on [`UAX14_PAIRS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Uax14PairTable;

impl PairTable for Uax14PairTable {
    fn action(&self, before: BreakClass, after: BreakClass) -> BreakAction {
        lookup(&UAX14_PAIRS, before, after)
    }
}

/// Owned pair table that can be smaller than the paired class set, ragged, or
/// edited cell by cell to tailor break behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DensePairTable {
    rows: Vec<Vec<BreakAction>>,
}

impl DensePairTable {
    pub fn new(rows: Vec<Vec<BreakAction>>) -> CoreResult<Self> {
        let too_wide = rows.iter().any(|row| row.len() > PAIRED_CLASS_COUNT);
        if rows.len() > PAIRED_CLASS_COUNT || too_wide {
            return Err(CoreError::Unsupported("pair table wider than paired classes"));
        }
        Ok(Self { rows })
    }

    pub fn uax14() -> Self {
        Self {
            rows: UAX14_PAIRS.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// Full-size table with every cell set to `action`.
    pub fn filled(action: BreakAction) -> Self {
        Self {
            rows: vec![vec![action; PAIRED_CLASS_COUNT]; PAIRED_CLASS_COUNT],
        }
    }

    /// Sets one cell, growing short rows with [`BreakAction::Prohibited`].
    pub fn set(
        &mut self,
        before: BreakClass,
        after: BreakClass,
        action: BreakAction,
    ) -> CoreResult<()> {
        if !before.is_paired() || !after.is_paired() {
            return Err(CoreError::InvalidInput("class outside pair table"));
        }
        if self.rows.len() <= before.index() {
            self.rows.resize_with(before.index() + 1, Vec::new);
        }
        let row = &mut self.rows[before.index()];
        if row.len() <= after.index() {
            row.resize(after.index() + 1, PR);
        }
        row[after.index()] = action;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for DensePairTable {
    fn default() -> Self {
        Self::uax14()
    }
}

impl PairTable for DensePairTable {
    fn action(&self, before: BreakClass, after: BreakClass) -> BreakAction {
        lookup(&self.rows, before, after)
    }
}

fn lookup<R>(rows: &[R], before: BreakClass, after: BreakClass) -> BreakAction
where
    R: AsRef<[BreakAction]>,
{
    rows.get(before.index())
        .and_then(|row| row.as_ref().get(after.index()))
        .copied()
        .unwrap_or(PR)
}
