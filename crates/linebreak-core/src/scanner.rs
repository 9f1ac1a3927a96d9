use core::iter::FusedIterator;

use log::trace;

use crate::{BreakAction, BreakClass, ClassResolver, DefaultResolver, PairTable, Uax14PairTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStatus {
    Continue,
    EndOfInput,
}

/// One scanner result: the action for the break opportunity before the code
/// point at `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Break {
    pub position: usize,
    pub action: BreakAction,
    pub status: ScanStatus,
}

impl Break {
    pub fn is_end(&self) -> bool {
        self.status == ScanStatus::EndOfInput
    }
}

/// Classes the scanner remembers between two steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Context {
    /// Class of the last character that was not a space or an attached mark.
    pub before: BreakClass,
    /// Whether the previous code point was a space.
    pub after_space: bool,
}

/// Outcome of a single step: the action to report and the new "before" class,
/// if it changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub action: BreakAction,
    pub before: Option<BreakClass>,
}

impl Transition {
    const fn new(action: BreakAction, before: Option<BreakClass>) -> Self {
        Self { action, before }
    }
}

/// Decides the action between `context` and the next code point of class
/// `class`.
///
/// `class` is expected to be LB1-resolved, with NL already folded into BK.
pub fn transition<T: PairTable + ?Sized>(
    table: &T,
    context: Context,
    class: BreakClass,
) -> Transition {
    use BreakAction::{CombiningIndirect, CombiningProhibited, Indirect, Prohibited};

    // A break must occur after BK, after LF and after a CR that is not part of
    // CRLF. The current character starts the next line.
    let before = context.before;
    if before == BreakClass::Mandatory
        || (before == BreakClass::CarriageReturn && class != BreakClass::LineFeed)
    {
        return Transition::new(BreakAction::Mandatory, Some(line_start_class(class)));
    }

    match class {
        BreakClass::Mandatory | BreakClass::LineFeed => {
            return Transition::new(Prohibited, Some(BreakClass::Mandatory));
        }
        BreakClass::CarriageReturn => {
            return Transition::new(Prohibited, Some(BreakClass::CarriageReturn));
        }
        // LB7: × SP. Spaces are transparent to the "before" class.
        BreakClass::Space => return Transition::new(Prohibited, None),
        _ => {}
    }

    match table.action(before, class) {
        // A SP+ ÷ B
        Indirect if context.after_space => Transition::new(Indirect, Some(class)),
        Indirect => Transition::new(Prohibited, Some(class)),
        // Space is not a base: SP ÷ CM
        CombiningIndirect if context.after_space => {
            Transition::new(CombiningIndirect, Some(class))
        }
        // LB9: X CM* -> X
        CombiningIndirect => Transition::new(Prohibited, None),
        // OP SP* CM, still attached to OP.
        CombiningProhibited => Transition::new(Prohibited, None),
        action => Transition::new(action, Some(class)),
    }
}

/// Class of the first character of a line: at the start of text or right after
/// a mandatory break.
fn line_start_class(class: BreakClass) -> BreakClass {
    match class {
        BreakClass::Space => BreakClass::WordJoiner,
        BreakClass::LineFeed => BreakClass::Mandatory,
        // LB10
        BreakClass::CombiningMark => BreakClass::Alphabetic,
        other => other,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    BeforeFirstCharacter,
    Scanning,
    Exhausted(Break),
}

/// Forward-only cursor reporting the break action before every code point of
/// its input, followed by a mandatory break at the end of the text.
///
/// [`Scanner::next_break`] keeps returning the same end-of-input result once the
/// input is exhausted. The [`Iterator`] implementation yields that result once
/// and then stops.
#[derive(Clone, Debug)]
pub struct Scanner<I, R = DefaultResolver, T = Uax14PairTable> {
    input: I,
    resolver: R,
    table: T,
    pos: usize,
    context: Context,
    state: ScanState,
}

impl<I> Scanner<I>
where
    I: Iterator<Item = char>,
{
    pub fn new<S>(input: S) -> Self
    where
        S: IntoIterator<Item = char, IntoIter = I>,
    {
        Self::with_parts(input, DefaultResolver, Uax14PairTable)
    }
}

impl<I, R, T> Scanner<I, R, T>
where
    I: Iterator<Item = char>,
    R: ClassResolver,
    T: PairTable,
{
    pub fn with_parts<S>(input: S, resolver: R, table: T) -> Self
    where
        S: IntoIterator<Item = char, IntoIter = I>,
    {
        Self {
            input: input.into_iter(),
            resolver,
            table,
            pos: 0,
            context: Context {
                before: BreakClass::WordJoiner,
                after_space: false,
            },
            state: ScanState::BeforeFirstCharacter,
        }
    }

    pub fn with_resolver<R2: ClassResolver>(self, resolver: R2) -> Scanner<I, R2, T> {
        Scanner {
            input: self.input,
            resolver,
            table: self.table,
            pos: self.pos,
            context: self.context,
            state: self.state,
        }
    }

    pub fn with_table<T2: PairTable>(self, table: T2) -> Scanner<I, R, T2> {
        Scanner {
            input: self.input,
            resolver: self.resolver,
            table,
            pos: self.pos,
            context: self.context,
            state: self.state,
        }
    }

    /// Number of code points consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The running "before" class, once the first code point has been read.
    pub fn before_class(&self) -> Option<BreakClass> {
        match self.state {
            ScanState::BeforeFirstCharacter => None,
            _ if self.pos == 0 => None,
            _ => Some(self.context.before),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, ScanState::Exhausted(_))
    }

    pub fn next_break(&mut self) -> Break {
        match self.state {
            ScanState::Exhausted(end) => end,
            ScanState::BeforeFirstCharacter => {
                let Some(class) = self.next_class() else {
                    return self.finish();
                };
                self.context = Context {
                    before: line_start_class(class),
                    after_space: class == BreakClass::Space,
                };
                self.state = ScanState::Scanning;
                Break {
                    position: 0,
                    action: BreakAction::Prohibited,
                    status: ScanStatus::Continue,
                }
            }
            ScanState::Scanning => {
                let position = self.pos;
                let Some(class) = self.next_class() else {
                    return self.finish();
                };
                let step = transition(&self.table, self.context, class);
                trace!(
                    "linebreak {position}: {} {class} -> {:?}",
                    self.context.before, step.action
                );
                if let Some(before) = step.before {
                    self.context.before = before;
                }
                self.context.after_space = class == BreakClass::Space;
                Break {
                    position,
                    action: step.action,
                    status: ScanStatus::Continue,
                }
            }
        }
    }

    fn next_class(&mut self) -> Option<BreakClass> {
        let ch = self.input.next()?;
        self.pos += 1;
        let class = match self.resolver.resolve(ch) {
            // NL acts like BK in all respects.
            BreakClass::NextLine => BreakClass::Mandatory,
            class => class,
        };
        Some(class)
    }

    fn finish(&mut self) -> Break {
        let end = Break {
            position: self.pos,
            action: BreakAction::Mandatory,
            status: ScanStatus::EndOfInput,
        };
        trace!("linebreak scanner exhausted at {}", self.pos);
        self.state = ScanState::Exhausted(end);
        end
    }
}

impl<I, R, T> Iterator for Scanner<I, R, T>
where
    I: Iterator<Item = char>,
    R: ClassResolver,
    T: PairTable,
{
    type Item = Break;

    fn next(&mut self) -> Option<Break> {
        if self.is_exhausted() {
            return None;
        }
        Some(self.next_break())
    }
}

impl<I, R, T> FusedIterator for Scanner<I, R, T>
where
    I: Iterator<Item = char>,
    R: ClassResolver,
    T: PairTable,
{
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{Break, Context, ScanStatus, Scanner, Transition, transition};
    use crate::{BreakAction, BreakClass, DensePairTable, Uax14PairTable};

    use BreakAction::{Direct, Indirect, Mandatory, Prohibited};

    fn actions(text: &str) -> Vec<BreakAction> {
        Scanner::new(text.chars()).map(|brk| brk.action).collect()
    }

    fn toy_class(ch: char) -> BreakClass {
        match ch {
            'i' => BreakClass::Ideographic,
            'm' => BreakClass::CombiningMark,
            'n' => BreakClass::Numeric,
            'o' => BreakClass::OpenPunctuation,
            ' ' => BreakClass::Space,
            _ => BreakClass::Alphabetic,
        }
    }

    #[test]
    fn empty_input_ends_immediately() {
        let mut scanner = Scanner::new("".chars());
        let end = scanner.next_break();
        assert_eq!(
            end,
            Break {
                position: 0,
                action: Mandatory,
                status: ScanStatus::EndOfInput,
            }
        );
        assert!(scanner.is_exhausted());
        assert_eq!(scanner.before_class(), None);
    }

    #[test]
    fn one_result_per_code_point_plus_end() {
        for text in ["a", "ab", "a b", "hello, world", "中文字", "x\r\ny", "\n\n\n"] {
            let breaks: Vec<Break> = Scanner::new(text.chars()).collect();
            assert_eq!(breaks.len(), text.chars().count() + 1, "{text:?}");
            let (last, rest) = breaks.split_last().expect("end");
            assert_eq!(last.action, Mandatory);
            assert!(last.is_end());
            assert!(rest.iter().all(|brk| brk.status == ScanStatus::Continue));
            for (idx, brk) in breaks.iter().enumerate() {
                assert_eq!(brk.position, idx);
            }
        }
    }

    #[test]
    fn position_counts_consumed_code_points() {
        let mut scanner = Scanner::new("a中b".chars());
        assert_eq!(scanner.position(), 0);
        scanner.next_break();
        assert_eq!(scanner.position(), 1);
        scanner.next_break();
        scanner.next_break();
        assert_eq!(scanner.position(), 3);
        assert_eq!(scanner.next_break().position, 3);
        assert_eq!(scanner.position(), 3);
    }

    #[test]
    fn termination_is_sticky() {
        let mut scanner = Scanner::new("ab".chars());
        scanner.next_break();
        scanner.next_break();
        let end = scanner.next_break();
        assert!(end.is_end());
        for _ in 0..5 {
            assert_eq!(scanner.next_break(), end);
        }
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn letters_separated_by_space_break_indirectly() {
        assert_eq!(actions("a b"), vec![Prohibited, Prohibited, Indirect, Mandatory]);
    }

    #[test]
    fn extra_spaces_do_not_change_indirect_break() {
        assert_eq!(actions("ab"), vec![Prohibited, Prohibited, Mandatory]);
        assert_eq!(
            actions("a   b"),
            vec![Prohibited, Prohibited, Prohibited, Prohibited, Indirect, Mandatory]
        );
    }

    #[test]
    fn lone_line_feed_is_a_hard_break() {
        assert_eq!(actions("\n"), vec![Prohibited, Mandatory]);
    }

    #[test]
    fn crlf_breaks_once() {
        assert_eq!(
            actions("x\r\ny"),
            vec![Prohibited, Prohibited, Prohibited, Mandatory, Mandatory]
        );
        assert_eq!(actions("x\ry"), vec![Prohibited, Prohibited, Mandatory, Mandatory]);
    }

    #[test]
    fn next_line_acts_like_mandatory_break() {
        assert_eq!(
            actions("a\u{85}b"),
            vec![Prohibited, Prohibited, Mandatory, Mandatory]
        );
    }

    #[test]
    fn consecutive_line_feeds_each_break() {
        assert_eq!(actions("\n\n"), vec![Prohibited, Mandatory, Mandatory]);
        assert_eq!(
            actions("a\n\nb"),
            vec![Prohibited, Prohibited, Mandatory, Mandatory, Mandatory]
        );
    }

    #[test]
    fn leading_space_allows_break_after_it() {
        assert_eq!(actions(" a"), vec![Prohibited, Indirect, Mandatory]);
    }

    #[test]
    fn ideographs_break_directly() {
        assert_eq!(actions("中文"), vec![Prohibited, Direct, Mandatory]);
    }

    #[test]
    fn zero_width_space_allows_break() {
        assert_eq!(
            actions("a\u{200B}b"),
            vec![Prohibited, Prohibited, Direct, Mandatory]
        );
    }

    #[test]
    fn combining_marks_keep_base_class() {
        let mut scanner = Scanner::new("immn".chars()).with_resolver(toy_class);
        assert_eq!(scanner.next_break().action, Prohibited);
        assert_eq!(scanner.next_break().action, Prohibited);
        assert_eq!(scanner.next_break().action, Prohibited);
        assert_eq!(scanner.before_class(), Some(BreakClass::Ideographic));
        // ID × NU would be prohibited if the marks had replaced the base.
        assert_eq!(scanner.next_break().action, Direct);
        assert_eq!(scanner.next_break().action, Mandatory);
    }

    #[test]
    fn real_combining_mark_keeps_base_class() {
        let mut scanner = Scanner::new("e\u{301} x".chars());
        assert_eq!(scanner.next_break().action, Prohibited);
        assert_eq!(scanner.next_break().action, Prohibited);
        assert_eq!(scanner.before_class(), Some(BreakClass::Alphabetic));
        assert_eq!(scanner.next_break().action, Prohibited);
        assert_eq!(scanner.next_break().action, Indirect);
        assert_eq!(scanner.next_break().action, Mandatory);
    }

    #[test]
    fn line_terminators_at_text_edges() {
        assert_eq!(actions("\u{85}a"), vec![Prohibited, Mandatory, Mandatory]);
        assert_eq!(actions("\u{85}"), vec![Prohibited, Mandatory]);
        assert_eq!(actions("a\r"), vec![Prohibited, Prohibited, Mandatory]);
        assert_eq!(actions("\ra"), vec![Prohibited, Mandatory, Mandatory]);
        assert_eq!(actions("\r"), vec![Prohibited, Mandatory]);
    }

    #[test]
    fn mark_after_space_starts_new_unit() {
        let found: Vec<BreakAction> = Scanner::new("a m".chars())
            .with_resolver(toy_class)
            .map(|brk| brk.action)
            .collect();
        assert_eq!(
            found,
            vec![Prohibited, Prohibited, BreakAction::CombiningIndirect, Mandatory]
        );
    }

    #[test]
    fn open_punctuation_holds_through_spaces_and_marks() {
        let mut scanner = Scanner::new("o ma".chars()).with_resolver(toy_class);
        let found: Vec<BreakAction> = scanner.by_ref().map(|brk| brk.action).collect();
        assert_eq!(
            found,
            vec![Prohibited, Prohibited, Prohibited, Prohibited, Mandatory]
        );
        assert_eq!(scanner.before_class(), Some(BreakClass::Alphabetic));
    }

    #[test]
    fn small_table_never_faults() {
        let table = DensePairTable::new(vec![vec![Direct]]).expect("table");
        let found: Vec<BreakAction> = Scanner::new("a b\tc(d)".chars())
            .with_table(table)
            .map(|brk| brk.action)
            .collect();
        assert_eq!(found.len(), 9);
        assert_eq!(found.last(), Some(&Mandatory));
        assert!(found[..8].iter().all(|action| *action == Prohibited));
    }

    #[test]
    fn transition_is_pure() {
        let context = Context {
            before: BreakClass::Alphabetic,
            after_space: true,
        };
        let step = transition(&Uax14PairTable, context, BreakClass::Alphabetic);
        assert_eq!(
            step,
            Transition {
                action: Indirect,
                before: Some(BreakClass::Alphabetic),
            }
        );
        let again = transition(&Uax14PairTable, context, BreakClass::Alphabetic);
        assert_eq!(step, again);
    }

    #[test]
    fn transition_leaves_before_on_spaces_and_marks() {
        let context = Context {
            before: BreakClass::Numeric,
            after_space: false,
        };
        let space = transition(&Uax14PairTable, context, BreakClass::Space);
        assert_eq!(space.before, None);
        let mark = transition(&Uax14PairTable, context, BreakClass::CombiningMark);
        assert_eq!(mark, Transition { action: Prohibited, before: None });
    }

    #[test]
    fn transition_breaks_after_hard_terminators() {
        let after_cr = Context {
            before: BreakClass::CarriageReturn,
            after_space: false,
        };
        let step = transition(&Uax14PairTable, after_cr, BreakClass::LineFeed);
        assert_eq!(step.action, Prohibited);
        assert_eq!(step.before, Some(BreakClass::Mandatory));
        let step = transition(&Uax14PairTable, after_cr, BreakClass::Alphabetic);
        assert_eq!(step.action, Mandatory);
        assert_eq!(step.before, Some(BreakClass::Alphabetic));
    }
}
