//! Crate `restart` provides the budget schedule of restarts and reductions.
use {crate::types::*, std::fmt};

/// API for the restart schedule.
pub trait RestartIF {
    /// return the number of conflicts allowed in the current search.
    fn conflict_budget(&self) -> f64;
    /// return the number of learnt clauses allowed over the number of assignments.
    fn learnt_budget(&self) -> f64;
    /// start a new schedule for a problem which has `num_clauses` clauses.
    fn reset(&mut self, num_clauses: usize);
    /// expand both budgets for the next search.
    fn restart(&mut self);
}

/// Geometric budgets, growing at every restart.
#[derive(Clone, Debug)]
pub struct RestartManager {
    conflict_budget: f64,
    learnt_budget: f64,
    restart_first: f64,
    restart_inc: f64,
    learnt_size_factor: f64,
    learnt_size_inc: f64,
}

impl Default for RestartManager {
    fn default() -> Self {
        RestartManager::instantiate(&Config::default(), &CNFDescription::default())
    }
}

impl Instantiate for RestartManager {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> Self {
        RestartManager {
            conflict_budget: config.restart_first,
            learnt_budget: cnf.num_of_clauses as f64 * config.learnt_size_factor,
            restart_first: config.restart_first,
            restart_inc: config.restart_inc,
            learnt_size_factor: config.learnt_size_factor,
            learnt_size_inc: config.learnt_size_inc,
        }
    }
}

impl fmt::Display for RestartManager {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Budget[conflicts:{:.0}, learnts:{:.1}]",
            self.conflict_budget, self.learnt_budget
        )
    }
}

impl RestartIF for RestartManager {
    fn conflict_budget(&self) -> f64 {
        self.conflict_budget
    }
    fn learnt_budget(&self) -> f64 {
        self.learnt_budget
    }
    fn reset(&mut self, num_clauses: usize) {
        self.conflict_budget = self.restart_first;
        self.learnt_budget = num_clauses as f64 * self.learnt_size_factor;
    }
    fn restart(&mut self) {
        self.conflict_budget *= self.restart_inc;
        self.learnt_budget *= self.learnt_size_inc;
    }
}
