/// Decision var selection on a list of unassigned vars sorted by activity
use {super::AssignStack, crate::types::*, std::fmt};

/// Activity over this value triggers a rescaling of all activities.
const ACTIVITY_LIMIT: f64 = 1e100;
const ACTIVITY_SCALE: f64 = 1e-100;

/// Unassigned vars in the ascending order of activity.
/// The most active var sits at the tail.
#[derive(Clone, Debug, Default)]
pub struct VarOrder {
    list: Vec<VarId>,
}

impl fmt::Display for VarOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " - var order (ascending): {:?}", self.list)
    }
}

impl VarOrder {
    pub fn len(&self) -> usize {
        self.list.len()
    }
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
    pub fn contains(&self, vi: VarId) -> bool {
        self.list.contains(&vi)
    }
    /// return the vars from the least active one.
    pub fn iter(&self) -> std::slice::Iter<'_, VarId> {
        self.list.iter()
    }
    fn position(&self, vi: VarId) -> Option<usize> {
        self.list.iter().position(|v| *v == vi)
    }
}

/// API for var selection and var activity.
pub trait VarSelectIF {
    /// return the activity of a var.
    fn activity(&self, vi: VarId) -> f64;
    /// move a var toward the tail until the list gets sorted again.
    fn update_order(&mut self, vi: VarId);
    /// put an unassigned var back into the list at its sorted position.
    fn insert_order(&mut self, vi: VarId);
    /// drop an assigned var from the list.
    fn remove_from_order(&mut self, vi: VarId);
    /// pop the most active var.
    fn select_var(&mut self) -> Result<VarId, SolverError>;
    /// pop the most active var and make a literal with the default polarity.
    fn select_decision_literal(&mut self) -> Result<Lit, SolverError>;
    /// increase the activity of a var by the current increment.
    fn bump_activity(&mut self, vi: VarId);
    /// make future bumps heavier than the past ones.
    fn decay_activity(&mut self);
}

impl VarSelectIF for AssignStack {
    #[inline]
    fn activity(&self, vi: VarId) -> f64 {
        self.var[vi].activity
    }
    fn update_order(&mut self, vi: VarId) {
        let Some(mut i) = self.var_order.position(vi) else {
            return;
        };
        let act = self.var[vi].activity;
        let list = &mut self.var_order.list;
        while i + 1 < list.len() && self.var[list[i + 1]].activity < act {
            list.swap(i, i + 1);
            i += 1;
        }
    }
    fn insert_order(&mut self, vi: VarId) {
        if self.var_order.contains(vi) {
            return;
        }
        let act = self.var[vi].activity;
        let var = &self.var;
        let i = self
            .var_order
            .list
            .partition_point(|v| var[*v].activity <= act);
        self.var_order.list.insert(i, vi);
    }
    fn remove_from_order(&mut self, vi: VarId) {
        if let Some(i) = self.var_order.position(vi) {
            self.var_order.list.remove(i);
        }
    }
    fn select_var(&mut self) -> Result<VarId, SolverError> {
        self.var_order.list.pop().ok_or(SolverError::Underflow)
    }
    fn select_decision_literal(&mut self) -> Result<Lit, SolverError> {
        let vi = self.select_var()?;
        Ok(Lit::from((vi, !self.default_polarity)))
    }
    fn bump_activity(&mut self, vi: VarId) {
        self.var[vi].activity += self.activity_inc;
        if ACTIVITY_LIMIT < self.var[vi].activity {
            self.rescale_activity();
        }
        self.update_order(vi);
    }
    fn decay_activity(&mut self) {
        self.activity_inc /= self.activity_decay;
    }
}

impl AssignStack {
    /// the scaling keeps the order of vars.
    fn rescale_activity(&mut self) {
        for v in self.var.iter_mut() {
            v.activity *= ACTIVITY_SCALE;
        }
        self.activity_inc *= ACTIVITY_SCALE;
    }
}
