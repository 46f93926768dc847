/// Solver's state and statistics
use {
    crate::{
        assign::{AssignIF, AssignStack},
        cdb::{ClauseDB, ClauseDBIF},
        types::*,
    },
    std::fmt,
};

/// Data storage for [`Solver`](`crate::solver::Solver`).
#[derive(Clone, Debug, Default)]
pub struct State {
    /// solver configuration
    pub config: Config,
    /// the problem.
    pub target: CNFDescription,
    /// `false` after a contradiction at the root level.
    pub ok: bool,
    /// the last model; it's valid until the next mutation of the solver.
    pub model: Option<Vec<bool>>,
    /// a working buffer for conflict analysis
    pub new_learnt: Vec<Lit>,
    /// a working buffer for the vars marked in conflict analysis
    pub an_seen: Vec<VarId>,
    /// the number of assignments at the last simplification
    pub last_simplified: Option<usize>,

    //
    //## Statistics
    //
    /// the number of conflicts.
    pub num_conflict: usize,
    /// the number of restarts.
    pub num_restart: usize,
    /// the number of learnt clauses generated.
    pub num_learnt: usize,
    /// the pair of the number of learnts and the learnt budget just before
    /// a reduction, taken at the reduction with the highest ratio of them.
    pub reduction_peak: Option<(usize, f64)>,
}

impl Instantiate for State {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> State {
        State {
            config: config.clone(),
            target: cnf.clone(),
            ok: true,
            new_learnt: Vec::with_capacity(cnf.num_of_variables),
            an_seen: Vec::with_capacity(cnf.num_of_variables),
            ..State::default()
        }
    }
}

impl State {
    /// record the number of learnts at a reduction.
    pub fn record_reduction(&mut self, num_learnts: usize, budget: f64) {
        let ratio = |(n, b): (usize, f64)| n as f64 / b;
        if self
            .reduction_peak
            .map_or(true, |peak| ratio(peak) < ratio((num_learnts, budget)))
        {
            self.reduction_peak = Some((num_learnts, budget));
        }
    }
}

/// A snapshot of solver's statistics
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
    pub num_vars: usize,
    pub num_clause: usize,
    pub num_learnt: usize,
    pub num_conflict: usize,
    pub num_decision: usize,
    pub num_propagation: usize,
    pub num_restart: usize,
    pub num_reduction: usize,
    /// see [`State::reduction_peak`].
    pub reduction_peak: Option<(usize, f64)>,
}

impl Stats {
    pub fn new(asg: &AssignStack, cdb: &ClauseDB, state: &State) -> Stats {
        Stats {
            num_vars: asg.num_vars(),
            num_clause: cdb.num_clauses(),
            num_learnt: cdb.num_learnts(),
            num_conflict: state.num_conflict,
            num_decision: asg.num_decision,
            num_propagation: asg.num_propagation,
            num_restart: state.num_restart,
            num_reduction: cdb.num_reduction(),
            reduction_peak: state.reduction_peak,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "vars: {}, clauses: {}, learnts: {}, conflicts: {}, decisions: {}, propagations: {}, restarts: {}, reductions: {}",
            self.num_vars,
            self.num_clause,
            self.num_learnt,
            self.num_conflict,
            self.num_decision,
            self.num_propagation,
            self.num_restart,
            self.num_reduction,
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, conflicts: {}, restarts: {}, learnts generated: {}",
            self.target, self.num_conflict, self.num_restart, self.num_learnt,
        )
    }
}
