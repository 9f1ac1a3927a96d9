use alloc::vec::Vec;

use crate::{BreakAction, ClassResolver, DefaultResolver, PairTable, Scanner, Uax14PairTable};

/// Break opportunity type, as seen by code that wraps lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreakOpportunity {
    /// A line must break at this spot.
    Mandatory,
    /// A line is allowed to end at this spot.
    Allowed,
}

impl BreakOpportunity {
    pub fn from_action(action: BreakAction) -> Option<Self> {
        match action {
            BreakAction::Mandatory => Some(BreakOpportunity::Mandatory),
            action if action.is_break() => Some(BreakOpportunity::Allowed),
            _ => None,
        }
    }
}

/// A run of text between two break opportunities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub start: usize,
    pub text: &'a str,
    /// How the segment ends.
    pub opportunity: BreakOpportunity,
}

/// Byte offsets of every break opportunity in `text`, each naming the
/// character that follows the break. The end of the text is always reported as
/// mandatory.
pub fn break_opportunities(text: &str) -> Vec<(usize, BreakOpportunity)> {
    break_opportunities_with(text, DefaultResolver, Uax14PairTable)
}

pub fn break_opportunities_with<R, T>(
    text: &str,
    resolver: R,
    table: T,
) -> Vec<(usize, BreakOpportunity)>
where
    R: ClassResolver,
    T: PairTable,
{
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(core::iter::once(text.len()))
        .collect();
    Scanner::with_parts(text.chars(), resolver, table)
        .filter_map(|brk| {
            let opportunity = BreakOpportunity::from_action(brk.action)?;
            let offset = offsets.get(brk.position).copied()?;
            Some((offset, opportunity))
        })
        .collect()
}

/// Splits `text` at its break opportunities. Trailing spaces stay with the
/// segment they follow.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    segments_with(text, DefaultResolver, Uax14PairTable)
}

pub fn segments_with<R, T>(text: &str, resolver: R, table: T) -> Vec<Segment<'_>>
where
    R: ClassResolver,
    T: PairTable,
{
    let mut start = 0;
    let mut out = Vec::new();
    for (offset, opportunity) in break_opportunities_with(text, resolver, table) {
        if offset <= start {
            continue;
        }
        out.push(Segment {
            start,
            text: &text[start..offset],
            opportunity,
        });
        start = offset;
    }
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{BreakOpportunity, break_opportunities, break_opportunities_with, segments};
    use crate::{BreakAction, BreakClass, DefaultResolver, DensePairTable};

    use BreakOpportunity::{Allowed, Mandatory};

    #[test]
    fn reports_byte_offsets() {
        assert_eq!(
            break_opportunities("a b \nc"),
            vec![(2, Allowed), (5, Mandatory), (6, Mandatory)]
        );
        assert_eq!(break_opportunities("Hello world!"), vec![(6, Allowed), (12, Mandatory)]);
    }

    #[test]
    fn multibyte_offsets_follow_char_boundaries() {
        let found = break_opportunities("中文");
        assert_eq!(found, vec![(3, Allowed), (6, Mandatory)]);
    }

    #[test]
    fn empty_text_has_one_mandatory_break() {
        assert_eq!(break_opportunities(""), vec![(0, Mandatory)]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn tailored_table_changes_opportunities() {
        let mut table = DensePairTable::uax14();
        table
            .set(BreakClass::Alphabetic, BreakClass::Alphabetic, BreakAction::Prohibited)
            .expect("set");
        let found = break_opportunities_with("a b", DefaultResolver, table);
        assert_eq!(found, vec![(3, Mandatory)]);
    }

    #[test]
    fn segments_keep_trailing_spaces() {
        let found: Vec<(&str, BreakOpportunity)> = segments("one two  three\nfour")
            .into_iter()
            .map(|segment| (segment.text, segment.opportunity))
            .collect();
        assert_eq!(
            found,
            vec![
                ("one ", Allowed),
                ("two  ", Allowed),
                ("three\n", Mandatory),
                ("four", Mandatory),
            ]
        );
    }

    #[test]
    fn from_action_collapses_actions() {
        assert_eq!(BreakOpportunity::from_action(BreakAction::Direct), Some(Allowed));
        assert_eq!(
            BreakOpportunity::from_action(BreakAction::CombiningIndirect),
            Some(Allowed)
        );
        assert_eq!(BreakOpportunity::from_action(BreakAction::Mandatory), Some(Mandatory));
        assert_eq!(BreakOpportunity::from_action(BreakAction::CombiningProhibited), None);
    }
}
