//! `trailsat` is a conflict-driven clause-learning SAT engine built on a
//! trail of assignments, two watched literals and first-UIP learning.
//!
//! # Examples
//!
//! ```
//! use trailsat::*;
//!
//! let v: Vec<Vec<i32>> = vec![vec![1, 2, 3], vec![-1, -2], vec![-3]];
//! match Certificate::try_from(v) {
//!     Ok(Certificate::SAT(ans)) => {
//!         assert_eq!(ans[2], -3);
//!         assert!(!(0 < ans[0] && 0 < ans[1]));
//!     }
//!     Ok(Certificate::UNSAT) => panic!("UNSAT"),
//!     Err(e) => panic!("{e}"),
//! }
//! ```
//!
//! Incremental use through the engine contract:
//!
//! ```
//! use trailsat::{types::Lit, Config, SatSolverIF, SolveIF, Solver};
//!
//! let mut s = Solver::new(Config::default());
//! let x = s.new_var();
//! let y = s.new_var();
//! assert_eq!(s.add_clause(&[Lit::from((x, false)), Lit::from((y, false))]), Ok(true));
//! assert_eq!(s.add_clause(&[Lit::from((x, true))]), Ok(true));
//! assert_eq!(s.solve(&[]), Ok(true));
//! assert_eq!(s.model(), Some(vec![false, true]));
//! ```

/// Crate `assign` provides the trail, BCP and decision var selection.
pub mod assign;
/// Crate `cdb` provides the clause store, watch lists and the constraint interface.
pub mod cdb;
/// Crate `config` provides solver's configuration.
pub mod config;
/// Crate `solver` provides the top-level API as a SAT solver.
pub mod solver;
/// Crate `state` is a collection of internal data and statistics.
pub mod state;
/// Crate `types` provides various building blocks, including some common traits.
pub mod types;

pub use {
    config::Config,
    solver::{Certificate, SatSolverIF, SolveIF, Solver, ValidateIF},
    types::SolverError,
};
