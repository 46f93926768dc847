//! Solver Builder
use {
    super::{Certificate, RestartManager, Solver, SolverResult, State},
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF},
        cdb::{ClauseDB, ClauseDBIF, NewClause},
        types::*,
    },
    std::path::Path,
};

/// API for SAT solver creation and modification.
pub trait SatSolverIF: Instantiate {
    /// add a var to solver and return its id.
    ///
    /// # Example
    /// ```
    /// use trailsat::*;
    ///
    /// let mut s = Solver::new(Config::default());
    /// assert_eq!(s.new_var(), 0);
    /// assert_eq!(s.new_var(), 1);
    /// assert_eq!(s.stats().num_vars, 2);
    /// ```
    fn new_var(&mut self) -> VarId;
    /// add `n` vars and return the id of the last one.
    ///
    /// # Errors
    ///
    /// * `SolverError::IllegalArgument` if `n` is zero.
    fn new_vars(&mut self, n: usize) -> Result<VarId, SolverError>;
    /// add a problem clause.
    /// Return `Ok(false)` if it contradicts the facts at the root level;
    /// the solver is useless after that.
    ///
    /// # Errors
    ///
    /// * `SolverError::OutOfBounds` if a literal refers to an undeclared var.
    /// * `SolverError::IllegalState` if it's called above the root level.
    ///
    /// # Example
    ///```
    /// use trailsat::{types::Lit, *};
    ///
    /// let mut s = Solver::new(Config::default());
    /// s.new_vars(2).expect("two vars");
    /// assert_eq!(s.add_clause(&[Lit::from(1i32), Lit::from(-2i32)]), Ok(true));
    /// assert_eq!(s.add_clause(&[Lit::from(2i32)]), Ok(true));
    /// assert!(matches!(
    ///     s.add_clause(&[Lit::from(3i32)]),
    ///     Err(SolverError::OutOfBounds { index: 2, len: 2 })
    /// ));
    /// assert_eq!(s.add_clause(&[Lit::from(-1i32)]), Ok(false));
    ///```
    fn add_clause(&mut self, lits: &[Lit]) -> Result<bool, SolverError>;
    /// add a problem clause written in DIMACS integers.
    ///
    /// # Errors
    ///
    /// * `SolverError::InvalidLiteral` if it contains `0`.
    /// * the same errors as [`add_clause`](`SatSolverIF::add_clause`).
    fn add_dimacs_clause<V: AsRef<[i32]>>(&mut self, vec: V) -> Result<bool, SolverError>;
    /// propagate the pending facts and remove the satisfied clauses.
    /// Return `Ok(false)` if the propagation found a conflict.
    ///
    /// # Errors
    ///
    /// * `SolverError::IllegalState` if it's called above decision level 0.
    fn simplify_db(&mut self) -> Result<bool, SolverError>;
    /// make a solver and load a CNF into it.
    ///
    /// # Errors
    ///
    /// * `SolverError::IOError` if it failed to load a CNF file.
    /// * `SolverError::MalformedInput` or `SolverError::InvalidLiteral` on a broken CNF.
    /// * `Err(Ok(Certificate::UNSAT))` if the problem is refuted while loading.
    fn build(config: &Config) -> Result<Solver, SolverResult>;
}

impl Instantiate for Solver {
    /// ```
    /// use trailsat::{config::Config, solver::Solver, types::*};
    /// let s = Solver::instantiate(&Config::default(), &CNFDescription::default());
    ///```
    fn instantiate(config: &Config, cnf: &CNFDescription) -> Solver {
        Solver {
            asg: AssignStack::instantiate(config, cnf),
            cdb: ClauseDB::instantiate(config, cnf),
            rst: RestartManager::instantiate(config, cnf),
            state: State::instantiate(config, cnf),
        }
    }
}

impl<V> TryFrom<(Config, &[V])> for Solver
where
    V: AsRef<[i32]>,
{
    type Error = SolverResult;
    fn try_from((config, vec): (Config, &[V])) -> Result<Self, Self::Error> {
        let cnf = CNFDescription::from(vec);
        Solver::instantiate(&config, &cnf).inject_from_vec(vec)
    }
}

impl TryFrom<&Path> for Solver {
    type Error = SolverResult;
    /// return a new solver build for a CNF file.
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        Solver::build(&Config::from(path))
    }
}

impl SatSolverIF for Solver {
    fn new_var(&mut self) -> VarId {
        self.state.model = None;
        self.cdb.new_var();
        self.asg.new_var()
    }
    fn new_vars(&mut self, n: usize) -> Result<VarId, SolverError> {
        if n == 0 {
            return Err(SolverError::IllegalArgument(
                "new_vars requires at least one var".to_string(),
            ));
        }
        let mut vi = 0;
        for _ in 0..n {
            vi = self.new_var();
        }
        Ok(vi)
    }
    fn add_clause(&mut self, lits: &[Lit]) -> Result<bool, SolverError> {
        let Solver {
            ref mut asg,
            ref mut cdb,
            ref mut state,
            ..
        } = self;
        let nv = asg.num_vars;
        if let Some(l) = lits.iter().find(|l| nv <= l.vi()) {
            return Err(SolverError::OutOfBounds {
                index: l.vi(),
                len: nv,
            });
        }
        if asg.decision_level() != 0 {
            return Err(SolverError::IllegalState(format!(
                "add_clause at decision level {}",
                asg.decision_level()
            )));
        }
        state.model = None;
        if !state.ok {
            return Ok(false);
        }
        let mut v = lits.to_vec();
        if cdb.new_clause(asg, &mut v, false) == NewClause::Inconsistent {
            state.ok = false;
        }
        Ok(state.ok)
    }
    fn add_dimacs_clause<V: AsRef<[i32]>>(&mut self, vec: V) -> Result<bool, SolverError> {
        if vec.as_ref().contains(&0) {
            return Err(SolverError::InvalidLiteral);
        }
        let lits = vec.as_ref().iter().map(|i| Lit::from(*i)).collect::<Vec<_>>();
        self.add_clause(&lits)
    }
    fn simplify_db(&mut self) -> Result<bool, SolverError> {
        let Solver {
            ref mut asg,
            ref mut cdb,
            ref mut state,
            ..
        } = self;
        if asg.decision_level() != 0 {
            return Err(SolverError::IllegalState(format!(
                "simplify_db at decision level {}",
                asg.decision_level()
            )));
        }
        if !state.ok {
            return Ok(false);
        }
        if asg.propagate(cdb).is_some() {
            state.ok = false;
            return Ok(false);
        }
        cdb.simplify_db(asg);
        state.last_simplified = Some(asg.stack_len());
        Ok(true)
    }
    /// # Examples
    ///
    /// ```
    /// use trailsat::{config::Config, solver::{SatSolverIF, Solver}, SolverError};
    ///
    /// let config = Config::from("no/such/file.cnf");
    /// assert!(matches!(Solver::build(&config), Err(Err(SolverError::IOError(_)))));
    ///```
    fn build(config: &Config) -> Result<Solver, SolverResult> {
        let mut reader: CNFReader = CNFReader::try_from(config.cnf_file.as_path()).map_err(Err)?;
        let clauses = reader.read_clauses().map_err(Err)?;
        Solver::instantiate(config, &reader.cnf).inject_from_vec(&clauses)
    }
}

impl Solver {
    fn inject_from_vec<V>(mut self, v: &[V]) -> Result<Solver, SolverResult>
    where
        V: AsRef<[i32]>,
    {
        for lits in v.iter() {
            match self.add_dimacs_clause(lits) {
                Ok(true) => (),
                Ok(false) => return Err(Ok(Certificate::UNSAT)),
                Err(e) => return Err(Err(e)),
            }
        }
        Ok(self)
    }
}
