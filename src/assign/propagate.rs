/// implement boolean constraint propagation, backjump
use {
    super::{AssignIF, AssignStack, VarSelectIF},
    crate::{cdb::ConstraintIF, types::*},
    tracing::trace,
};

/// API for Boolean Constraint Propagation like
/// [`propagate`](`crate::assign::PropagateIF::propagate`),
/// [`assume`](`crate::assign::PropagateIF::assume`),
/// [`cancel_until`](`crate::assign::PropagateIF::cancel_until`), and so on.
pub trait PropagateIF {
    /// open a new decision level.
    fn level_up(&mut self);
    /// open a new decision level and assign a decision literal.
    /// Return `false` if the literal is already false.
    fn assume(&mut self, l: Lit) -> bool;
    /// assign `l` as a pending fact unless it has a value already.
    /// Return `false` if it conflicts with the current assignment.
    fn enqueue(&mut self, l: Lit, reason: AssignReason) -> bool;
    /// assign an unassigned var.
    ///
    /// # Errors
    ///
    /// emit `SolverError::IllegalState` if the var is already assigned.
    fn assign(&mut self, l: Lit, reason: AssignReason) -> MaybeInconsistent;
    /// unassign the last assignment and return it.
    /// The undo hooks registered on the var are called in LIFO order.
    ///
    /// # Errors
    ///
    /// emit `SolverError::Underflow` if the trail is empty.
    fn undo_one<C>(&mut self, cdb: &mut C) -> Result<Lit, SolverError>
    where
        C: ConstraintIF;
    /// execute *backjump*: unassign all the vars above level `lv`.
    fn cancel_until<C>(&mut self, cdb: &mut C, lv: DecisionLevel)
    where
        C: ConstraintIF;
    /// execute *boolean constraint propagation* or *unit propagation*.
    /// Return the first conflicting constraint.
    fn propagate<C>(&mut self, cdb: &mut C) -> Option<ConstraintRef>
    where
        C: ConstraintIF;
}

impl PropagateIF for AssignStack {
    fn level_up(&mut self) {
        self.trail_lim.push(self.trail.len());
    }
    fn assume(&mut self, l: Lit) -> bool {
        self.level_up();
        self.num_decision += 1;
        trace!("decide {l} at level {}", self.decision_level());
        self.enqueue(l, AssignReason::Decision(self.decision_level()))
    }
    fn enqueue(&mut self, l: Lit, reason: AssignReason) -> bool {
        match self.assigned(l) {
            Some(b) => b,
            None => {
                self.assign_unchecked(l, reason);
                true
            }
        }
    }
    fn assign(&mut self, l: Lit, reason: AssignReason) -> MaybeInconsistent {
        if self.var[l.vi()].assign.is_some() {
            return Err(SolverError::IllegalState(format!(
                "var {} is already assigned",
                l.vi()
            )));
        }
        self.assign_unchecked(l, reason);
        Ok(())
    }
    fn undo_one<C>(&mut self, cdb: &mut C) -> Result<Lit, SolverError>
    where
        C: ConstraintIF,
    {
        let l = self.trail.pop().ok_or(SolverError::Underflow)?;
        let vi = l.vi();
        let v = &mut self.var[vi];
        v.assign = None;
        v.level = 0;
        v.reason = AssignReason::None;
        self.insert_order(vi);
        while let Some(cr) = self.undos[vi].pop() {
            cdb.undo(self, cr, l);
        }
        self.q_head = self.q_head.min(self.trail.len());
        Ok(l)
    }
    fn cancel_until<C>(&mut self, cdb: &mut C, lv: DecisionLevel)
    where
        C: ConstraintIF,
    {
        while lv < self.decision_level() {
            let lim = self.trail_lim[self.trail_lim.len() - 1];
            while lim < self.trail.len() {
                if self.undo_one(cdb).is_err() {
                    break;
                }
            }
            self.trail_lim.pop();
        }
    }
    fn propagate<C>(&mut self, cdb: &mut C) -> Option<ConstraintRef>
    where
        C: ConstraintIF,
    {
        while self.q_head < self.trail.len() {
            let p = self.trail[self.q_head];
            self.q_head += 1;
            self.num_propagation += 1;
            // the list is detached since a constraint may register itself into it again.
            let ws = std::mem::take(cdb.watches_mut(p));
            for (i, cr) in ws.iter().enumerate() {
                if !cdb.propagate(self, *cr, p) {
                    cdb.watches_mut(p).extend_from_slice(&ws[i + 1..]);
                    self.q_head = self.trail.len();
                    return Some(*cr);
                }
            }
        }
        None
    }
}

impl AssignStack {
    fn assign_unchecked(&mut self, l: Lit, reason: AssignReason) {
        let vi = l.vi();
        debug_assert!(self.var[vi].assign.is_none());
        let lv = self.decision_level();
        let v = &mut self.var[vi];
        v.assign = Some(bool::from(l));
        v.level = lv;
        v.reason = reason;
        self.remove_from_order(vi);
        self.trail.push(l);
    }
}
