/// main struct AssignStack
use {
    super::{AssignIF, Var, VarOrder, VarSelectIF},
    crate::types::*,
    std::fmt,
};

/// A record of assignment. It's called 'trail' in Glucose.
#[derive(Clone, Debug)]
pub struct AssignStack {
    /// the per-var state
    pub(super) var: Vec<Var>,
    /// record of assignment
    pub(super) trail: Vec<Lit>,
    pub(super) trail_lim: Vec<usize>,
    /// the-number-of-assigned-and-propagated-vars; literals after this are pending facts.
    pub(super) q_head: usize,
    pub root_level: DecisionLevel,
    /// constraints to be notified when a var gets unassigned
    pub(super) undos: Vec<Vec<ConstraintRef>>,

    //
    //## Decision var selection
    //
    pub(super) var_order: VarOrder,
    pub(super) activity_inc: f64,
    pub(super) activity_decay: f64,
    pub(super) default_polarity: bool,

    //
    //## Statistics
    //
    /// the number of vars.
    pub num_vars: usize,
    pub(crate) num_decision: usize,
    pub(crate) num_propagation: usize,
}

impl Default for AssignStack {
    fn default() -> AssignStack {
        AssignStack {
            var: Vec::new(),
            trail: Vec::new(),
            trail_lim: Vec::new(),
            q_head: 0,
            root_level: 0,
            undos: Vec::new(),
            var_order: VarOrder::default(),
            activity_inc: 1.0,
            activity_decay: 0.95,
            default_polarity: false,
            num_vars: 0,
            num_decision: 0,
            num_propagation: 0,
        }
    }
}

impl<'a> IntoIterator for &'a AssignStack {
    type Item = &'a Lit;
    type IntoIter = std::slice::Iter<'a, Lit>;
    fn into_iter(self) -> Self::IntoIter {
        self.trail.iter()
    }
}

impl From<&AssignStack> for Vec<i32> {
    fn from(asg: &AssignStack) -> Vec<i32> {
        asg.trail.iter().map(i32::from).collect::<Vec<_>>()
    }
}

impl Instantiate for AssignStack {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> AssignStack {
        let mut asg = AssignStack {
            trail: Vec::with_capacity(cnf.num_of_variables),
            activity_decay: config.var_decay,
            default_polarity: config.default_polarity,
            ..AssignStack::default()
        };
        for _ in 0..cnf.num_of_variables {
            asg.new_var();
        }
        asg
    }
}

impl AssignIF for AssignStack {
    fn root_level(&self) -> DecisionLevel {
        self.root_level
    }
    fn num_vars(&self) -> usize {
        self.num_vars
    }
    fn stack(&self, i: usize) -> Lit {
        self.trail[i]
    }
    fn stack_len(&self) -> usize {
        self.trail.len()
    }
    fn len_upto(&self, n: DecisionLevel) -> usize {
        self.trail_lim.get(n as usize).map_or(self.trail.len(), |n| *n)
    }
    fn stack_is_empty(&self) -> bool {
        self.trail.is_empty()
    }
    fn decision_level(&self) -> DecisionLevel {
        self.trail_lim.len() as DecisionLevel
    }
    fn remains(&self) -> bool {
        self.q_head < self.trail.len()
    }
    #[inline]
    fn assigned(&self, l: Lit) -> Lbool {
        l.lifted(self.var[l.vi()].assign)
    }
    fn level(&self, vi: VarId) -> Option<DecisionLevel> {
        self.var[vi].assign.map(|_| self.var[vi].level)
    }
    fn reason(&self, vi: VarId) -> AssignReason {
        self.var[vi].reason
    }
    fn satisfies(&self, vec: &[Lit]) -> bool {
        vec.iter().any(|l| self.assigned(*l) == Some(true))
    }
}

impl AssignStack {
    /// add a fresh unassigned var and return its id.
    pub fn new_var(&mut self) -> VarId {
        let vi = self.num_vars;
        self.num_vars += 1;
        self.var.push(Var::default());
        self.undos.push(Vec::new());
        self.insert_order(vi);
        vi
    }
    /// return the var.
    pub fn var(&self, vi: VarId) -> &Var {
        &self.var[vi]
    }
    /// return the var.
    pub fn var_mut(&mut self, vi: VarId) -> &mut Var {
        &mut self.var[vi]
    }
    /// return the order list of unassigned vars.
    pub fn var_order(&self) -> &VarOrder {
        &self.var_order
    }
    /// return `true` if all vars are assigned.
    pub fn is_complete(&self) -> bool {
        self.trail.len() == self.num_vars
    }
    /// register a constraint to be notified when `vi` gets unassigned.
    pub fn register_undo(&mut self, vi: VarId, cr: ConstraintRef) {
        self.undos[vi].push(cr);
    }
    /// forget the reason of a var which will be kept as a fact.
    /// This is used when its reason clause is removed at the root level.
    pub(crate) fn detach_reason(&mut self, vi: VarId) {
        debug_assert!(self.var[vi].assign.is_some());
        self.var[vi].reason = AssignReason::Decision(0);
    }
    /// return the current assignment as a model, or `None` if some var is unassigned.
    pub fn model(&self) -> Option<Vec<bool>> {
        self.var.iter().map(|v| v.assign).collect::<Option<Vec<_>>>()
    }
}

impl fmt::Display for AssignStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let v = self.trail.iter().map(i32::from).collect::<Vec<_>>();
        let levels = self.decision_level();
        let range = |lv: DecisionLevel| {
            let start = if lv == 0 {
                0
            } else {
                self.trail_lim[lv as usize - 1]
            };
            (lv, &v[start..self.len_upto(lv)])
        };
        write!(
            f,
            "ASG:: trail({}):{:?}\n      level: {}, root: {}, unassigned: {}",
            self.trail.len(),
            (0..=levels).map(range).collect::<Vec<_>>(),
            levels,
            self.root_level,
            self.var_order.len(),
        )
    }
}
