// Module `assign` implements Boolean Constraint Propagation and decision var selection.

/// the activity-ordered list of unassigned vars
mod order;
/// Boolean constraint propagation
mod propagate;
/// assignment management
mod stack;
/// the per-var state
mod var;

pub use self::{
    order::{VarOrder, VarSelectIF},
    propagate::PropagateIF,
    stack::AssignStack,
    var::Var,
};
use {crate::types::*, std::fmt};

/// Reasons of assignments
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssignReason {
    /// Assigned by decision, or asserted as a fact at the level.
    Decision(DecisionLevel),
    /// Assigned by a constraint which became unit.
    Implication(ConstraintRef),
    /// None of the above.
    None,
}

impl fmt::Display for AssignReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssignReason::Decision(0) => write!(f, "Asserted"),
            AssignReason::Decision(lvl) => write!(f, "Decided at level {lvl}"),
            AssignReason::Implication(cr) => write!(f, "Implied by {cr}"),
            AssignReason::None => write!(f, "Not assigned"),
        }
    }
}

/// API about assignment like
/// [`decision_level`](`crate::assign::AssignIF::decision_level`),
/// [`stack`](`crate::assign::AssignIF::stack`),
/// [`assigned`](`crate::assign::AssignIF::assigned`) and so on.
pub trait AssignIF {
    /// return root level.
    fn root_level(&self) -> DecisionLevel;
    /// return the number of vars.
    fn num_vars(&self) -> usize;
    /// return a literal in the stack.
    fn stack(&self, i: usize) -> Lit;
    /// return the number of assignments.
    fn stack_len(&self) -> usize;
    /// return the number of assignments at decision levels up to `n`.
    fn len_upto(&self, n: DecisionLevel) -> usize;
    /// return `true` if there's no assignment.
    fn stack_is_empty(&self) -> bool;
    /// return the current decision level.
    fn decision_level(&self) -> DecisionLevel;
    /// return `true` if there are un-propagated assignments.
    fn remains(&self) -> bool;
    /// return the value of a literal.
    fn assigned(&self, l: Lit) -> Lbool;
    /// return the decision level of a var, or `None` if it's unassigned.
    fn level(&self, vi: VarId) -> Option<DecisionLevel>;
    /// return the reason of the assignment of a var.
    fn reason(&self, vi: VarId) -> AssignReason;
    /// return `true` if the set of literals is satisfiable under the current assignment.
    fn satisfies(&self, c: &[Lit]) -> bool;
}
