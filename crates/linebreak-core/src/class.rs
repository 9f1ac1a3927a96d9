use core::fmt;
use core::str::FromStr;

use crate::CoreError;

/// Number of classes that take part in pair table lookups.
pub const PAIRED_CLASS_COUNT: usize = 29;

/// Unicode line breaking class.
///
/// The first [`PAIRED_CLASS_COUNT`] variants index the pair table in declaration
/// order. The rest are resolved by the class resolver or by the scanner before a
/// lookup ever happens.
///
/// See <https://www.unicode.org/reports/tr14/#Table1>.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BreakClass {
    OpenPunctuation,
    ClosePunctuation,
    CloseParenthesis,
    Quotation,
    Glue,
    NonStarter,
    Exclamation,
    Symbol,
    InfixSeparator,
    Prefix,
    Postfix,
    Numeric,
    Alphabetic,
    HebrewLetter,
    Ideographic,
    Inseparable,
    Hyphen,
    After,
    Before,
    BeforeAndAfter,
    ZeroWidthSpace,
    CombiningMark,
    WordJoiner,
    HangulLvSyllable,
    HangulLvtSyllable,
    HangulLJamo,
    HangulVJamo,
    HangulTJamo,
    RegionalIndicator,
    // Resolved outside of the pair table.
    Mandatory,
    CarriageReturn,
    LineFeed,
    NextLine,
    Surrogate,
    Space,
    Contingent,
    Ambiguous,
    ConditionalJapaneseStarter,
    ComplexContext,
    Unknown,
}

use BreakClass::*;

impl BreakClass {
    pub const ALL: [BreakClass; 40] = [
        OpenPunctuation,
        ClosePunctuation,
        CloseParenthesis,
        Quotation,
        Glue,
        NonStarter,
        Exclamation,
        Symbol,
        InfixSeparator,
        Prefix,
        Postfix,
        Numeric,
        Alphabetic,
        HebrewLetter,
        Ideographic,
        Inseparable,
        Hyphen,
        After,
        Before,
        BeforeAndAfter,
        ZeroWidthSpace,
        CombiningMark,
        WordJoiner,
        HangulLvSyllable,
        HangulLvtSyllable,
        HangulLJamo,
        HangulVJamo,
        HangulTJamo,
        RegionalIndicator,
        Mandatory,
        CarriageReturn,
        LineFeed,
        NextLine,
        Surrogate,
        Space,
        Contingent,
        Ambiguous,
        ConditionalJapaneseStarter,
        ComplexContext,
        Unknown,
    ];

    /// Classes with a row and a column in the pair table, in index order.
    pub fn paired() -> &'static [BreakClass] {
        let all: &'static [BreakClass; 40] = &Self::ALL;
        &all[..PAIRED_CLASS_COUNT]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_paired(self) -> bool {
        self.index() < PAIRED_CLASS_COUNT
    }

    /// Two letter code used by the Unicode Line_Break property.
    pub const fn code(self) -> &'static str {
        match self {
            OpenPunctuation => "OP",
            ClosePunctuation => "CL",
            CloseParenthesis => "CP",
            Quotation => "QU",
            Glue => "GL",
            NonStarter => "NS",
            Exclamation => "EX",
            Symbol => "SY",
            InfixSeparator => "IS",
            Prefix => "PR",
            Postfix => "PO",
            Numeric => "NU",
            Alphabetic => "AL",
            HebrewLetter => "HL",
            Ideographic => "ID",
            Inseparable => "IN",
            Hyphen => "HY",
            After => "BA",
            Before => "BB",
            BeforeAndAfter => "B2",
            ZeroWidthSpace => "ZW",
            CombiningMark => "CM",
            WordJoiner => "WJ",
            HangulLvSyllable => "H2",
            HangulLvtSyllable => "H3",
            HangulLJamo => "JL",
            HangulVJamo => "JV",
            HangulTJamo => "JT",
            RegionalIndicator => "RI",
            Mandatory => "BK",
            CarriageReturn => "CR",
            LineFeed => "LF",
            NextLine => "NL",
            Surrogate => "SG",
            Space => "SP",
            Contingent => "CB",
            Ambiguous => "AI",
            ConditionalJapaneseStarter => "CJ",
            ComplexContext => "SA",
            Unknown => "XX",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            OpenPunctuation => "Open Punctuation",
            ClosePunctuation => "Close Punctuation",
            CloseParenthesis => "Close Parenthesis",
            Quotation => "Quotation",
            Glue => "Non-breaking (\"Glue\")",
            NonStarter => "Nonstarter",
            Exclamation => "Exclamation/Interrogation",
            Symbol => "Symbols Allowing Break After",
            InfixSeparator => "Infix Numeric Separator",
            Prefix => "Prefix Numeric",
            Postfix => "Postfix Numeric",
            Numeric => "Numeric",
            Alphabetic => "Alphabetic",
            HebrewLetter => "Hebrew Letter",
            Ideographic => "Ideographic",
            Inseparable => "Inseparable",
            Hyphen => "Hyphen",
            After => "Break After",
            Before => "Break Before",
            BeforeAndAfter => "Break Opportunity Before and After",
            ZeroWidthSpace => "Zero Width Space",
            CombiningMark => "Combining Mark",
            WordJoiner => "Word Joiner",
            HangulLvSyllable => "Hangul LV Syllable",
            HangulLvtSyllable => "Hangul LVT Syllable",
            HangulLJamo => "Hangul L Jamo",
            HangulVJamo => "Hangul V Jamo",
            HangulTJamo => "Hangul T Jamo",
            RegionalIndicator => "Regional Indicator",
            Mandatory => "Mandatory Break",
            CarriageReturn => "Carriage Return",
            LineFeed => "Line Feed",
            NextLine => "Next Line",
            Surrogate => "Surrogate",
            Space => "Space",
            Contingent => "Contingent Break Opportunity",
            Ambiguous => "Ambiguous (Alphabetic or Ideographic)",
            ConditionalJapaneseStarter => "Conditional Japanese Starter",
            ComplexContext => "Complex Context Dependent (South East Asian)",
            Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for BreakClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BreakClass {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BreakClass::from_code(value).ok_or(CoreError::InvalidInput("unknown break class"))
    }
}
