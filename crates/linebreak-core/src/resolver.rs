use unicode_linebreak::BreakClass as Property;

use crate::BreakClass;

/// Maps a single code point to the class the scanner works with.
pub trait ClassResolver {
    fn resolve(&self, ch: char) -> BreakClass;
}

impl<F> ClassResolver for F
where
    F: Fn(char) -> BreakClass,
{
    fn resolve(&self, ch: char) -> BreakClass {
        self(ch)
    }
}

/// Default resolver: Unicode Line_Break property followed by [`resolve_class`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultResolver;

impl ClassResolver for DefaultResolver {
    fn resolve(&self, ch: char) -> BreakClass {
        resolve_class(ch, raw_class(ch))
    }
}

/// Unresolved Line_Break property of `ch`.
///
/// Classes newer than the pair table map onto the class they were split from:
/// emoji bases are ideographic, emoji modifiers and the zero width joiner
/// attach like combining marks.
#[allow(unreachable_patterns)]
pub fn raw_class(ch: char) -> BreakClass {
    match unicode_linebreak::break_property(ch as u32) {
        Property::Mandatory => BreakClass::Mandatory,
        Property::CarriageReturn => BreakClass::CarriageReturn,
        Property::LineFeed => BreakClass::LineFeed,
        Property::CombiningMark => BreakClass::CombiningMark,
        Property::NextLine => BreakClass::NextLine,
        Property::Surrogate => BreakClass::Surrogate,
        Property::WordJoiner => BreakClass::WordJoiner,
        Property::ZeroWidthSpace => BreakClass::ZeroWidthSpace,
        Property::NonBreakingGlue => BreakClass::Glue,
        Property::Space => BreakClass::Space,
        Property::ZeroWidthJoiner => BreakClass::CombiningMark,
        Property::BeforeAndAfter => BreakClass::BeforeAndAfter,
        Property::After => BreakClass::After,
        Property::Before => BreakClass::Before,
        Property::Hyphen => BreakClass::Hyphen,
        Property::Contingent => BreakClass::Contingent,
        Property::ClosePunctuation => BreakClass::ClosePunctuation,
        Property::CloseParenthesis => BreakClass::CloseParenthesis,
        Property::Exclamation => BreakClass::Exclamation,
        Property::Inseparable => BreakClass::Inseparable,
        Property::NonStarter => BreakClass::NonStarter,
        Property::OpenPunctuation => BreakClass::OpenPunctuation,
        Property::Quotation => BreakClass::Quotation,
        Property::InfixSeparator => BreakClass::InfixSeparator,
        Property::Numeric => BreakClass::Numeric,
        Property::Postfix => BreakClass::Postfix,
        Property::Prefix => BreakClass::Prefix,
        Property::Symbol => BreakClass::Symbol,
        Property::Ambiguous => BreakClass::Ambiguous,
        Property::Alphabetic => BreakClass::Alphabetic,
        Property::ConditionalJapaneseStarter => BreakClass::ConditionalJapaneseStarter,
        Property::EmojiBase => BreakClass::Ideographic,
        Property::EmojiModifier => BreakClass::CombiningMark,
        Property::HangulLvSyllable => BreakClass::HangulLvSyllable,
        Property::HangulLvtSyllable => BreakClass::HangulLvtSyllable,
        Property::HebrewLetter => BreakClass::HebrewLetter,
        Property::Ideographic => BreakClass::Ideographic,
        Property::HangulLJamo => BreakClass::HangulLJamo,
        Property::HangulVJamo => BreakClass::HangulVJamo,
        Property::HangulTJamo => BreakClass::HangulTJamo,
        Property::RegionalIndicator => BreakClass::RegionalIndicator,
        Property::ComplexContext => BreakClass::ComplexContext,
        Property::Unknown => BreakClass::Unknown,
        _ => BreakClass::Unknown,
    }
}

/// LB1: resolves AI, CB, CJ, SA, SG and XX using the generic resolution
/// proposed in UAX #14.
///
/// CB should only be resolved after LB9, LB10 and LB20 have been applied.
/// Treating it as ID up front is an approximation.
pub fn resolve_class(ch: char, class: BreakClass) -> BreakClass {
    match class {
        BreakClass::Ambiguous | BreakClass::Surrogate | BreakClass::Unknown => {
            BreakClass::Alphabetic
        }
        BreakClass::ConditionalJapaneseStarter => BreakClass::NonStarter,
        BreakClass::ComplexContext => {
            if is_combining_mark(ch) {
                BreakClass::CombiningMark
            } else {
                BreakClass::Alphabetic
            }
        }
        BreakClass::Contingent => BreakClass::Ideographic,
        other => other,
    }
}

// General_Category Mn or Mc, restricted to the scripts carrying Line_Break=SA.
const SA_MARKS: &[(u32, u32)] = &[
    // Thai
    (0x0E31, 0x0E31),
    (0x0E34, 0x0E3A),
    (0x0E47, 0x0E4E),
    // Lao
    (0x0EB1, 0x0EB1),
    (0x0EB4, 0x0EBC),
    (0x0EC8, 0x0ECE),
    // Myanmar
    (0x102B, 0x103E),
    (0x1056, 0x1059),
    (0x105E, 0x1060),
    (0x1062, 0x1064),
    (0x1067, 0x106D),
    (0x1071, 0x1074),
    (0x1082, 0x108D),
    (0x108F, 0x108F),
    (0x109A, 0x109D),
    // Khmer
    (0x17B4, 0x17D3),
    (0x17DD, 0x17DD),
    // Tai Tham
    (0x1A55, 0x1A5E),
    (0x1A60, 0x1A7C),
    (0x1A7F, 0x1A7F),
    // Myanmar Extended-B
    (0xA9E5, 0xA9E5),
    // Myanmar Extended-A
    (0xAA7B, 0xAA7D),
    // Tai Viet
    (0xAAB0, 0xAAB0),
    (0xAAB2, 0xAAB4),
    (0xAAB7, 0xAAB8),
    (0xAABE, 0xAABF),
    (0xAAC1, 0xAAC1),
    // Ahom
    (0x1171D, 0x1172B),
];

fn is_combining_mark(ch: char) -> bool {
    let cp = ch as u32;
    SA_MARKS
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                core::cmp::Ordering::Less
            } else if lo > cp {
                core::cmp::Ordering::Greater
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .is_ok()
}
