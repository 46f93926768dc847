//! Module `types' provides various building blocks, including
//! some common traits.

/// methods on CNF file
pub mod cnf;
/// methods on flags used in Var and Clause
pub mod flags;
/// methods on literals
pub mod lit;

pub use self::{cnf::*, flags::*, lit::*};

pub use crate::{
    assign::AssignReason,
    cdb::{ClauseId, ConstraintRef},
    config::Config,
};

use thiserror::Error;

/// Variable as Index is `usize`
pub type VarId = usize;

/// Decision Level Representation
pub type DecisionLevel = u32;

/// API for object instantiation based on `Configuration` and `CNFDescription`.
/// This is implemented by the sub-modules of [`Solver`](`crate::solver::Solver`).
///
/// # Example
///
/// ```
/// use trailsat::{assign::AssignStack, cdb::ClauseDB, config::Config, types::*};
/// let _ = ClauseDB::instantiate(&Config::default(), &CNFDescription::default());
/// let _ = AssignStack::instantiate(&Config::default(), &CNFDescription::default());
///```
pub trait Instantiate {
    /// make and return an object from `Config` and `CNFDescription`.
    fn instantiate(conf: &Config, cnf: &CNFDescription) -> Self;
}

/// API for O(n) deletion from a list, providing `delete_unstable`.
pub trait Delete<T> {
    /// *O(n)* item deletion protocol.
    fn delete_unstable<F>(&mut self, filter: F)
    where
        F: FnMut(&T) -> bool;
}

impl<T> Delete<T> for Vec<T> {
    fn delete_unstable<F>(&mut self, filter: F)
    where
        F: FnMut(&T) -> bool,
    {
        if let Some(i) = self.iter().position(filter) {
            self.swap_remove(i);
        }
    }
}

/// Errors which make a solver instance unusable.
/// Note: an unsatisfiable problem is not an error; it's returned as `Ok(false)`
/// or [`Certificate::UNSAT`](`crate::solver::Certificate::UNSAT`).
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SolverError {
    /// an operation took an element from an empty sequence.
    #[error("underflow: an operation required an element of an empty sequence")]
    Underflow,
    /// an index beyond the range of a dense array.
    #[error("index {index} is out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },
    /// a caller passed an invalid argument.
    #[error("illegal argument: {0}")]
    IllegalArgument(String),
    /// an operation was called in a state which doesn't allow it.
    #[error("illegal state: {0}")]
    IllegalState(String),
    /// A clause contains a literal out of the range defined in its header.
    #[error("a literal is out of the range of the declared variables")]
    InvalidLiteral,
    /// An unparsable problem file.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// Exceptions caused by file operations
    #[error("I/O error: {0}")]
    IOError(String),
}

/// A Return type used by solver functions.
pub type MaybeInconsistent = Result<(), SolverError>;
