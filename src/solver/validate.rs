//! Crate `validate` implements a model checker.
use crate::{
    assign::{AssignIF, PropagateIF},
    cdb::{ClauseDBIF, ClauseIF},
    solver::Solver,
    types::{AssignReason, Lit, MaybeInconsistent, SolverError},
};

/// API for SAT validator like [`inject_assignment`](`crate::solver::ValidateIF::inject_assignment`), [`validate`](`crate::solver::ValidateIF::validate`) and so on.
pub trait ValidateIF {
    /// load a assignment set into solver as facts.
    ///
    /// # Errors
    ///
    /// * `SolverError::IllegalArgument` if the set is empty.
    /// * `SolverError::InvalidLiteral` if it contains `0`.
    /// * `SolverError::OutOfBounds` if it refers to an undeclared var.
    /// * `SolverError::IllegalState` if a var is already assigned or the solver is above the root level.
    fn inject_assignment(&mut self, vec: &[i32]) -> MaybeInconsistent;
    /// return `None` if the last model, or the current assignment if no model exists,
    /// satisfies all the problem clauses.
    /// Otherwise return the first falsified clause.
    fn validate(&self) -> Option<Vec<i32>>;
}

impl ValidateIF for Solver {
    /// inject an assignment set into solver.
    /// An assignment set is represented by a list of `i32`.
    ///
    /// #Example
    ///
    /// ```
    /// use trailsat::{config::Config, solver::{Solver, ValidateIF}, types::*};
    ///
    /// let cnf = CNFDescription {
    ///         num_of_variables: 4,
    ///         ..CNFDescription::default()
    ///     };
    /// let mut s = Solver::instantiate(&Config::default(), &cnf);
    /// assert_eq!(s.inject_assignment(&[1i32, -2, 3]), Ok(()));
    /// assert!(s.inject_assignment(&[-1i32]).is_err());
    ///```
    fn inject_assignment(&mut self, vec: &[i32]) -> MaybeInconsistent {
        if vec.is_empty() {
            return Err(SolverError::IllegalArgument(
                "an empty assignment".to_string(),
            ));
        }
        if self.asg.decision_level() != 0 {
            return Err(SolverError::IllegalState(
                "inject_assignment above the root level".to_string(),
            ));
        }
        self.state.model = None;
        for i in vec {
            if *i == 0 {
                return Err(SolverError::InvalidLiteral);
            }
            let l = Lit::from(*i);
            if self.asg.num_vars <= l.vi() {
                return Err(SolverError::OutOfBounds {
                    index: l.vi(),
                    len: self.asg.num_vars,
                });
            }
            self.asg.assign(l, AssignReason::Decision(0))?;
        }
        Ok(())
    }
    /// #Example
    ///
    /// ```
    /// use trailsat::{config::Config, solver::{SatSolverIF, Solver, ValidateIF}, types::*};
    ///
    /// let cnf = CNFDescription {
    ///         num_of_variables: 4,
    ///         ..CNFDescription::default()
    ///     };
    /// let mut s = Solver::instantiate(&Config::default(), &cnf);
    /// assert_eq!(s.add_dimacs_clause([1, 4]), Ok(true));
    /// assert_eq!(s.add_dimacs_clause([2, 4]), Ok(true));
    /// s.inject_assignment(&[1i32, -2, 3]).expect("no error");
    /// assert_eq!(s.validate(), Some(vec![2, 4]));
    ///```
    fn validate(&self) -> Option<Vec<i32>> {
        match self.state.model.as_ref() {
            Some(model) => self
                .cdb
                .validate(model)
                .map(|cid| Vec::<i32>::from(self.cdb.clause(cid))),
            None => self
                .cdb
                .clause_iter()
                .map(|cid| self.cdb.clause(*cid))
                .find(|c| !c.is_satisfied_under(&self.asg))
                .map(Vec::<i32>::from),
        }
    }
}
