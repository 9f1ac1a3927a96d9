//! Unicode line breaking, following the pair table approach of
//! [UAX #14](https://www.unicode.org/reports/tr14/).
//!
//! A [`Scanner`] walks a sequence of code points and reports, one call at a
//! time, the [`BreakAction`] for the position before each of them. Classes come
//! from a [`ClassResolver`] and pair actions from a [`PairTable`]; both can be
//! replaced to tailor the result.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod action;
mod class;
mod error;
mod opportunities;
mod pair_table;
mod resolver;
mod scanner;

pub use action::BreakAction;
pub use class::{BreakClass, PAIRED_CLASS_COUNT};
pub use error::{CoreError, CoreResult};
pub use opportunities::{
    BreakOpportunity, Segment, break_opportunities, break_opportunities_with, segments,
    segments_with,
};
pub use pair_table::{DensePairTable, PairTable, UAX14_PAIRS, Uax14PairTable};
pub use resolver::{ClassResolver, DefaultResolver, raw_class, resolve_class};
pub use scanner::{Break, Context, ScanStatus, Scanner, Transition, transition};
