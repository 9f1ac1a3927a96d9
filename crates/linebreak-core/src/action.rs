use core::fmt;
use core::str::FromStr;

use crate::CoreError;

/// Line breaking action between two adjacent classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreakAction {
    /// A line break opportunity exists between two adjacent characters of the
    /// given line breaking classes.
    Direct,
    /// A line break opportunity exists between two characters of the given
    /// line breaking classes only if they are separated by one or more spaces.
    Indirect,
    CombiningIndirect,
    CombiningProhibited,
    /// No line break opportunity exists between two characters of the given
    /// line breaking classes, even if they are separated by one or more spaces.
    Prohibited,
    /// A line must break here.
    Mandatory,
}

impl BreakAction {
    pub const ALL: [BreakAction; 6] = [
        BreakAction::Direct,
        BreakAction::Indirect,
        BreakAction::CombiningIndirect,
        BreakAction::CombiningProhibited,
        BreakAction::Prohibited,
        BreakAction::Mandatory,
    ];

    /// Whether a consumer should treat this action as a break.
    pub const fn is_break(self) -> bool {
        matches!(
            self,
            BreakAction::Direct
                | BreakAction::Indirect
                | BreakAction::CombiningIndirect
                | BreakAction::Mandatory
        )
    }

    pub const fn code(self) -> &'static str {
        match self {
            BreakAction::Direct => "di",
            BreakAction::Indirect => "in",
            BreakAction::CombiningIndirect => "ci",
            BreakAction::CombiningProhibited => "cp",
            BreakAction::Prohibited => "pr",
            BreakAction::Mandatory => "ex",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BreakAction::Direct => "direct",
            BreakAction::Indirect => "indirect",
            BreakAction::CombiningIndirect => "combining_indirect",
            BreakAction::CombiningProhibited => "combining_prohibited",
            BreakAction::Prohibited => "prohibited",
            BreakAction::Mandatory => "mandatory",
        }
    }

    /// Accepts either the short table code (`di`) or the long name (`direct`).
    pub fn from_code(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.iter().copied().find(|action| {
            action.code().eq_ignore_ascii_case(value) || action.name().eq_ignore_ascii_case(value)
        })
    }
}

impl fmt::Display for BreakAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BreakAction {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BreakAction::from_code(value).ok_or(CoreError::InvalidInput("unknown break action"))
    }
}
