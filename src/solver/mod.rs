//! Module `solver` provides the top-level API as a SAT solver.
/// API to instantiate
mod build;
/// Module 'conflict' handles conflicts.
mod conflict;
/// Module `restart` provides the budget schedule.
pub mod restart;
/// CDCL search engine
mod search;
/// Module `validate` implements a model checker.
mod validate;

pub use self::{
    build::SatSolverIF,
    restart::{RestartIF, RestartManager},
    search::SolveIF,
    validate::ValidateIF,
};

use crate::{assign::AssignStack, cdb::ClauseDB, state::*, types::*};

/// Normal results returned by Solver.
#[derive(Debug, Eq, PartialEq)]
pub enum Certificate {
    /// It is satisfiable; `vec` is such an assignment sorted by var order.
    SAT(Vec<i32>),
    /// It is unsatisfiable.
    UNSAT,
}

/// The return type of [`SolveIF::certify`].
/// This captures the following three cases:
/// * `Certificate::SAT` -- solved with a satisfiable assignment set,
/// * `Certificate::UNSAT` -- proved that it's an unsatisfiable problem, and
/// * `SolverError::*` -- caused by a bug or a misuse
pub type SolverResult = Result<Certificate, SolverError>;

/// The SAT solver object consisting of 4 sub modules.
/// ```
/// use trailsat::*;
///
/// let v: Vec<Vec<i32>> = vec![vec![1, 2], vec![-1, 2], vec![-2, 3]];
/// let mut s = Solver::try_from((Config::default(), v.as_ref())).expect("can't build");
/// assert_eq!(s.stats().num_vars, 3);
/// assert_eq!(s.certify(), Ok(Certificate::SAT(vec![-1, 2, 3])));
/// assert_eq!(s.validate(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    /// assignment management
    pub asg: AssignStack,
    /// clause container
    pub cdb: ClauseDB,
    /// budget schedule
    pub rst: RestartManager,
    /// misc data holder
    pub state: State,
}

impl Solver {
    /// make a solver without any var and clause.
    pub fn new(config: Config) -> Solver {
        Solver::instantiate(&config, &CNFDescription::default())
    }
    /// return a snapshot of the statistics.
    pub fn stats(&self) -> Stats {
        Stats::new(&self.asg, &self.cdb, &self.state)
    }
}

/// Example
///```
/// use trailsat::*;
///
/// let v: Vec<Vec<i32>> = vec![];
/// assert!(matches!(
///     Certificate::try_from(v),
///     Ok(Certificate::SAT(_))
/// ));
/// assert!(matches!(
///     Certificate::try_from(vec![vec![0_i32]]),
///     Err(SolverError::InvalidLiteral)
/// ));
///
/// // `Solver` has another interface.
/// assert!(matches!(
///     Solver::try_from((Config::default(), vec![vec![0_i32]].as_ref())),
///     Err(Err(SolverError::InvalidLiteral))
/// ));
///```
impl<V: AsRef<[i32]>> TryFrom<Vec<V>> for Certificate {
    type Error = SolverError;
    fn try_from(vec: Vec<V>) -> SolverResult {
        Solver::try_from((Config::default(), vec.as_ref()))
            .map_or_else(|e: SolverResult| e, |mut solver| solver.certify())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::AssignIF;

    macro_rules! run {
        ($vec: expr) => {
            let res = Solver::try_from((Config::default(), $vec.as_ref())).map(|mut s| s.certify());
            println!("{:>46} =| {:?}", format!("{:?}", $vec), res.unwrap_or_else(|e| e));
        };
    }

    macro_rules! sat {
        ($vec: expr, $should_be: pat) => {
            println!("{:>46} =| ", format!("{:?}", $vec));
            let result = Certificate::try_from($vec);
            println!("{:?}", result);
            assert!(matches!(result, $should_be));
        };
        ($vec: expr) => {
            println!(
                "{:>46} =| {:?}",
                format!("{:?}", $vec),
                Certificate::try_from($vec)
            );
        };
    }

    #[test]
    fn test_on_memory_solving() {
        let mut v: Vec<Vec<i32>> = Vec::new();
        run!(v);
        v.push(Vec::new());
        run!(v);
        run!(vec![vec![1]]);
        run!(vec![vec![1], vec![-1]]);
        run!(vec![vec![1, 2], vec![-1, 3], vec![1, -3], vec![-1, 2]]);

        let v0: Vec<Vec<i32>> = vec![];
        sat!(v0, Ok(Certificate::SAT(_)));
        let v1: Vec<Vec<i32>> = vec![vec![]];
        sat!(v1, Ok(Certificate::UNSAT));
        sat!(vec![vec![1i32]], Ok(Certificate::SAT(_)));
        sat!(vec![vec![1i32], vec![-1]], Ok(Certificate::UNSAT));
        sat!(
            vec![vec![1i32, 2], vec![-1, 3], vec![1, -3], vec![-1, 2]],
            Ok(Certificate::SAT(_))
        );
        sat!(
            vec![
                vec![1i32, 2],
                vec![-1, 3],
                vec![1, -3],
                vec![-1, -2],
                vec![-2, -3]
            ],
            Ok(Certificate::SAT(_))
        );
        sat!(
            vec![
                vec![1i32, 2],
                vec![-1, 3],
                vec![-1, -3],
                vec![-1, -2],
                vec![1, -2]
            ],
            Ok(Certificate::UNSAT)
        );
        // auto conversion via `as_ref`
        let (v1, v2, v3, v4, v5) = (
            vec![1i32, 2],
            vec![-1i32, 3],
            vec![1i32, -3],
            vec![-1i32, 2],
            vec![-3i32],
        );
        sat!(vec![&v1, &v2, &v3, &v4, &v5], Ok(Certificate::SAT(_)));
    }

    #[test]
    fn test_three_clauses() {
        let v: Vec<Vec<i32>> = vec![vec![1, 2, 3], vec![-1, -2], vec![-3]];
        let mut s = Solver::try_from((Config::default(), v.as_ref())).expect("no conflict");
        assert_eq!(s.solve(&[]), Ok(true));
        let m = s.model().expect("a model");
        assert_eq!(m.len(), 3);
        assert!(!m[2]);
        assert!(m[0] != m[1]);
        assert_eq!(s.validate(), None);
        assert_eq!(s.asg.decision_level(), 0);
    }

    #[test]
    fn test_all_eight_clauses() {
        let mut v: Vec<Vec<i32>> = Vec::new();
        for bits in 0..8 {
            v.push(
                (0..3)
                    .map(|i| if bits & (1 << i) == 0 { i + 1 } else { -(i + 1) })
                    .collect(),
            );
        }
        let mut s = Solver::try_from((Config::default(), v.as_ref())).expect("no conflict");
        assert_eq!(s.solve(&[]), Ok(false));
        assert_eq!(s.model(), None);
        // the instance is spent
        assert_eq!(s.solve(&[]), Ok(false));
    }

    /// pigeonhole: `n + 1` pigeons in `n` holes
    fn pigeonhole(n: i32) -> Vec<Vec<i32>> {
        let var = |p: i32, h: i32| p * n + h + 1;
        let mut v: Vec<Vec<i32>> = Vec::new();
        for p in 0..=n {
            v.push((0..n).map(|h| var(p, h)).collect());
        }
        for h in 0..n {
            for p in 0..=n {
                for q in p + 1..=n {
                    v.push(vec![-var(p, h), -var(q, h)]);
                }
            }
        }
        v
    }

    #[test]
    fn test_reduction_under_restarts() {
        let v = pigeonhole(5);
        assert_eq!(v.len(), 81);
        let config = Config {
            restart_first: 10.0,
            // a budget of 8.1 learnts for 30 vars
            learnt_size_factor: 0.1,
            ..Config::default()
        };
        let mut s = Solver::try_from((config, v.as_ref())).expect("no conflict");
        assert_eq!(s.solve(&[]), Ok(false));
        let stats = s.stats();
        assert!(0 < stats.num_restart);
        assert!(0 < stats.num_reduction);
        let (n, budget) = stats.reduction_peak.expect("a reduction");
        assert!((n as f64) <= 2.0 * budget);
    }
}
