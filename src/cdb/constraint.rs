/// The closed set of constraint kinds handled by the propagation engine
use {
    super::{ClauseDB, ClauseDBIF, ClauseId, WatchDBIF},
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF},
        types::*,
    },
    std::fmt,
};

/// A non-owning reference to a constraint held in [`ClauseDB`].
/// Watcher lists and assignment reasons keep these, never the constraints.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConstraintRef {
    /// a watched clause, either a problem clause or a learnt one
    Clause(ClauseId),
}

impl fmt::Display for ConstraintRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConstraintRef::Clause(cid) => write!(f, "{cid}"),
        }
    }
}

impl From<ClauseId> for ConstraintRef {
    fn from(cid: ClauseId) -> Self {
        ConstraintRef::Clause(cid)
    }
}

/// API for the owner of constraints, dispatching on [`ConstraintRef`].
pub trait ConstraintIF {
    /// return the watcher list examined when `p` gets true.
    fn watches_mut(&mut self, p: Lit) -> &mut Vec<ConstraintRef>;
    /// re-examine a constraint after `p` got true, that is, after its watch `!p` got false.
    /// The constraint registers itself into a watcher list again.
    /// Return `false` if it's falsified.
    fn propagate(&mut self, asg: &mut AssignStack, cr: ConstraintRef, p: Lit) -> bool;
    /// shrink a constraint at the root level.
    /// Return `true` if it's satisfied and can be removed.
    fn simplify(&mut self, asg: &AssignStack, cr: ConstraintRef) -> bool;
    /// a hook called when the var of `p` gets unassigned.
    fn undo(&mut self, asg: &AssignStack, cr: ConstraintRef, p: Lit);
    /// push the literals which made `p` true; or made the constraint false if `p` is `None`.
    fn calc_reason(
        &mut self,
        asg: &AssignStack,
        cr: ConstraintRef,
        p: Option<Lit>,
        reason: &mut Vec<Lit>,
    );
    /// detach a constraint from its watcher lists and release it.
    fn remove(&mut self, asg: &mut AssignStack, cr: ConstraintRef);
    /// return `true` if the constraint is the reason of an assignment.
    fn is_locked(&self, asg: &AssignStack, cr: ConstraintRef) -> bool;
}

impl ConstraintIF for ClauseDB {
    #[inline]
    fn watches_mut(&mut self, p: Lit) -> &mut Vec<ConstraintRef> {
        &mut self.watcher[p]
    }
    fn propagate(&mut self, asg: &mut AssignStack, cr: ConstraintRef, p: Lit) -> bool {
        let ConstraintRef::Clause(cid) = cr;
        let false_lit = !p;
        let c = &mut self.clause[usize::from(cid)];
        debug_assert!(!c.flags.contains(FlagClause::DEAD));
        if c.lits[0] == false_lit {
            c.lits.swap(0, 1);
        }
        debug_assert_eq!(c.lits[1], false_lit);
        if asg.assigned(c.lits[0]) == Some(true) {
            self.watcher[p].register(cr);
            return true;
        }
        for k in 2..c.lits.len() {
            if asg.assigned(c.lits[k]) != Some(false) {
                c.lits.swap(1, k);
                self.watcher[!c.lits[1]].register(cr);
                return true;
            }
        }
        // unit or conflicting; keep watching the falsified literal
        self.watcher[p].register(cr);
        asg.enqueue(c.lits[0], AssignReason::Implication(cr))
    }
    fn simplify(&mut self, asg: &AssignStack, cr: ConstraintRef) -> bool {
        let ConstraintRef::Clause(cid) = cr;
        let c = &mut self.clause[usize::from(cid)];
        let mut j = 0;
        for i in 0..c.lits.len() {
            match asg.assigned(c.lits[i]) {
                Some(true) => return true,
                Some(false) => (),
                None => {
                    c.lits[j] = c.lits[i];
                    j += 1;
                }
            }
        }
        debug_assert!(2 <= j, "simplification made a unit clause");
        c.lits.truncate(j);
        false
    }
    fn undo(&mut self, _asg: &AssignStack, _cr: ConstraintRef, _p: Lit) {}
    fn calc_reason(
        &mut self,
        asg: &AssignStack,
        cr: ConstraintRef,
        p: Option<Lit>,
        reason: &mut Vec<Lit>,
    ) {
        let ConstraintRef::Clause(cid) = cr;
        let c = &self.clause[usize::from(cid)];
        let start = match p {
            None => 0,
            Some(l) => {
                debug_assert_eq!(l, c.lits[0]);
                1
            }
        };
        for l in &c.lits[start..] {
            debug_assert_eq!(asg.assigned(*l), Some(false));
            reason.push(!*l);
        }
        if p.is_some() && c.flags.contains(FlagClause::LEARNT) {
            self.bump_activity(cid);
        }
    }
    fn remove(&mut self, asg: &mut AssignStack, cr: ConstraintRef) {
        let ConstraintRef::Clause(cid) = cr;
        let c = &mut self.clause[usize::from(cid)];
        debug_assert!(!c.flags.contains(FlagClause::DEAD));
        let (l0, l1) = (c.lits[0], c.lits[1]);
        if asg.reason(l0.vi()) == AssignReason::Implication(cr) {
            // only facts at the root level can lose their reasons
            debug_assert_eq!(asg.level(l0.vi()), Some(0));
            asg.detach_reason(l0.vi());
        }
        c.flags.insert(FlagClause::DEAD);
        c.lits.clear();
        self.watcher[!l0].detach_with(cr);
        self.watcher[!l1].detach_with(cr);
        self.freelist.push(cid);
    }
    fn is_locked(&self, asg: &AssignStack, cr: ConstraintRef) -> bool {
        let ConstraintRef::Clause(cid) = cr;
        let l0 = self.clause[usize::from(cid)].lits[0];
        asg.reason(l0.vi()) == AssignReason::Implication(cr)
    }
}
