/// Conflict-Driven Clause Learning Search engine
use {
    super::{conflict::handle_conflict, restart::RestartIF, Certificate, Solver, SolverResult},
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF, VarSelectIF},
        cdb::{ClauseDB, ClauseDBIF},
        solver::RestartManager,
        state::State,
        types::*,
    },
    tracing::{debug, info},
};

/// API for SAT solver like `solve`, `model` and so on.
pub trait SolveIF {
    /// search an assignment satisfying all the clauses under the assumptions.
    /// Return `Ok(true)` for satisfiable, `Ok(false)` for unsatisfiable.
    /// A true result makes [`model`](`SolveIF::model`) valid until the next mutation.
    ///
    /// # Errors
    ///
    /// * `SolverError::OutOfBounds` if an assumption refers to an undeclared var.
    /// * others if solver becomes inconsistent by an internal error.
    ///
    /// # Example
    ///
    /// ```
    /// use trailsat::{types::Lit, *};
    ///
    /// let v: Vec<Vec<i32>> = vec![vec![1, 2], vec![-1, 3]];
    /// let mut s = Solver::try_from((Config::default(), v.as_ref())).expect("no conflict");
    /// assert_eq!(s.solve(&[Lit::from(1i32), Lit::from(-3i32)]), Ok(false));
    /// assert_eq!(s.solve(&[Lit::from(1i32)]), Ok(true));
    /// assert_eq!(s.model().map(|m| m[2]), Some(true));
    /// ```
    fn solve(&mut self, assumptions: &[Lit]) -> Result<bool, SolverError>;
    /// return the model found by the last `solve`.
    fn model(&self) -> Option<Vec<bool>>;
    /// solve without assumptions and return the result as a [`Certificate`].
    fn certify(&mut self) -> SolverResult;
}

impl SolveIF for Solver {
    fn solve(&mut self, assumptions: &[Lit]) -> Result<bool, SolverError> {
        let Solver {
            ref mut asg,
            ref mut cdb,
            ref mut rst,
            ref mut state,
        } = self;
        state.model = None;
        if !state.ok {
            return Ok(false);
        }
        if asg.decision_level() != 0 {
            return Err(SolverError::IllegalState(format!(
                "solve at decision level {}",
                asg.decision_level()
            )));
        }
        if let Some(l) = assumptions.iter().find(|l| asg.num_vars <= l.vi()) {
            return Err(SolverError::OutOfBounds {
                index: l.vi(),
                len: asg.num_vars,
            });
        }
        if asg.propagate(cdb).is_some() {
            state.ok = false;
            info!("s UNSATISFIABLE: {state}");
            return Ok(false);
        }
        for l in assumptions.iter() {
            if !asg.assume(*l) || asg.propagate(cdb).is_some() {
                asg.cancel_until(cdb, 0);
                info!("s UNSATISFIABLE under the assumptions");
                return Ok(false);
            }
        }
        asg.root_level = asg.decision_level();
        rst.reset(cdb.num_clauses());
        let answer = loop {
            match search(asg, cdb, rst, state) {
                Ok(None) => {
                    state.num_restart += 1;
                    rst.restart();
                    debug!(
                        "restart #{}: conflicts {}, learnts {}, {rst}",
                        state.num_restart,
                        state.num_conflict,
                        cdb.num_learnts(),
                    );
                }
                Ok(Some(b)) => break Ok(b),
                Err(e) => break Err(e),
            }
        };
        asg.cancel_until(cdb, 0);
        asg.root_level = 0;
        match answer {
            Ok(true) => info!("s SATISFIABLE: {state}"),
            Ok(false) => {
                if assumptions.is_empty() {
                    state.ok = false;
                }
                info!("s UNSATISFIABLE: {state}");
            }
            Err(ref e) => info!("solver aborted: {e}"),
        }
        answer
    }
    fn model(&self) -> Option<Vec<bool>> {
        self.state.model.clone()
    }
    fn certify(&mut self) -> SolverResult {
        match self.solve(&[])? {
            true => match self.state.model.as_ref() {
                Some(m) => Ok(Certificate::SAT(
                    m.iter()
                        .enumerate()
                        .map(|(vi, b)| i32::from(Lit::from((vi, !*b))))
                        .collect::<Vec<i32>>(),
                )),
                None => Err(SolverError::IllegalState(
                    "a satisfiable result without a model".to_string(),
                )),
            },
            false => Ok(Certificate::UNSAT),
        }
    }
}

/// run a search under the current budgets.
/// Return `Ok(Some(true))` for SAT, `Ok(Some(false))` for UNSAT, and
/// `Ok(None)` if the conflict budget ran out.
fn search(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    rst: &mut RestartManager,
    state: &mut State,
) -> Result<Option<bool>, SolverError> {
    let mut conflict_c: usize = 0;
    loop {
        if let Some(cr) = asg.propagate(cdb) {
            state.num_conflict += 1;
            conflict_c += 1;
            if asg.decision_level() == asg.root_level() {
                return Ok(Some(false));
            }
            handle_conflict(asg, cdb, state, cr)?;
            check_reduction(asg, cdb, rst, state);
            continue;
        }
        #[cfg(feature = "boundary_check")]
        assert!(cdb.check_watches(), "a broken watch list");
        if asg.decision_level() == 0 && state.last_simplified != Some(asg.stack_len()) {
            cdb.simplify_db(asg);
            state.last_simplified = Some(asg.stack_len());
        }
        check_reduction(asg, cdb, rst, state);
        if asg.is_complete() {
            state.model = asg.model();
            asg.cancel_until(cdb, asg.root_level());
            return Ok(Some(true));
        }
        if rst.conflict_budget() <= conflict_c as f64 {
            asg.cancel_until(cdb, asg.root_level());
            return Ok(None);
        }
        let l = asg.select_decision_literal()?;
        if !asg.assume(l) {
            return Err(SolverError::IllegalState(format!(
                "decision {l} on an assigned var"
            )));
        }
    }
}

/// reduce the learnts if they exceed the budget, or if the next learnt
/// clause would take them over twice the budget.
fn check_reduction(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    rst: &RestartManager,
    state: &mut State,
) {
    let budget = rst.learnt_budget();
    let n = cdb.num_learnts();
    if state.config.use_reduction
        && 0 < n
        && (budget <= n as f64 - asg.stack_len() as f64 || 2.0 * budget < (n + 1) as f64)
    {
        state.record_reduction(n, budget);
        cdb.reduce(asg);
    }
}
