/// Var struct and its accessors
use {crate::types::*, std::fmt};

/// Object representing a variable.
#[derive(Clone, Debug)]
pub struct Var {
    /// assigns of vars
    pub(super) assign: Option<bool>,
    /// levels of vars; meaningless while unassigned
    pub(super) level: DecisionLevel,
    /// reason of assignment
    pub(super) reason: AssignReason,
    /// the `Flag`s (8 bits)
    pub(super) flags: FlagVar,
    /// a dynamic evaluation criterion for decision
    pub(super) activity: f64,
}

impl Default for Var {
    fn default() -> Var {
        Var {
            assign: None,
            level: DecisionLevel::default(),
            reason: AssignReason::None,
            flags: FlagVar::empty(),
            activity: 0.0,
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.assign {
            Some(b) => write!(
                f,
                "V{{{b}@{}, {}, act:{:.3}}}",
                self.level, self.reason, self.activity
            ),
            None => write!(f, "V{{unassigned, act:{:.3}}}", self.activity),
        }
    }
}

impl FlagIF for Var {
    type FlagType = FlagVar;
    #[inline]
    fn is(&self, flag: Self::FlagType) -> bool {
        self.flags.contains(flag)
    }
    #[inline]
    fn set(&mut self, f: Self::FlagType, b: bool) {
        self.flags.set(f, b);
    }
    #[inline]
    fn turn_off(&mut self, flag: Self::FlagType) {
        self.flags.remove(flag);
    }
    #[inline]
    fn turn_on(&mut self, flag: Self::FlagType) {
        self.flags.insert(flag);
    }
}
