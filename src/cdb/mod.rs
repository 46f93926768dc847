/// methods on `Clause`
mod clause;
/// the constraint union and its capabilities
mod constraint;
/// methods on `ClauseDB`
mod db;
/// methods on watcher lists
mod watch;

pub use self::{
    constraint::{ConstraintIF, ConstraintRef},
    db::NewClause,
    watch::WatchDBIF,
};

use {
    crate::{assign::AssignStack, types::*},
    std::{fmt, slice::Iter},
};

/// API for Clause, providing literal accessors.
pub trait ClauseIF {
    /// return true if it contains no literals.
    fn is_empty(&self) -> bool;
    /// return 1st watch
    fn lit0(&self) -> Lit;
    /// return 2nd watch
    fn lit1(&self) -> Lit;
    /// return `true` if the clause contains the literal
    fn contains(&self, lit: Lit) -> bool;
    /// check clause satisfiability
    fn is_satisfied_under(&self, asg: &AssignStack) -> bool;
    /// return an iterator over its literals.
    fn iter(&self) -> Iter<'_, Lit>;
    /// return the number of literals.
    fn len(&self) -> usize;
    /// return the activity.
    fn activity(&self) -> f64;
}

/// API for clause management like [`reduce`](`crate::cdb::ClauseDBIF::reduce`),
/// [`new_clause`](`crate::cdb::ClauseDBIF::new_clause`),
/// [`simplify_db`](`crate::cdb::ClauseDBIF::simplify_db`), and so on.
pub trait ClauseDBIF: ConstraintIF + Instantiate {
    /// return the number of problem clauses.
    fn num_clauses(&self) -> usize;
    /// return the number of learnt clauses.
    fn num_learnts(&self) -> usize;
    /// return an iterator over the ids of problem clauses.
    fn clause_iter(&self) -> Iter<'_, ClauseId>;
    /// return an iterator over the ids of learnt clauses.
    fn learnt_iter(&self) -> Iter<'_, ClauseId>;
    /// normalize a literal list and install it as a clause, a fact or nothing.
    /// `lits` is modified in place.
    fn new_clause(&mut self, asg: &mut AssignStack, lits: &mut Vec<Lit>, learnt: bool) -> NewClause;
    /// delete the less active half of learnt clauses, keeping locked ones.
    fn reduce(&mut self, asg: &mut AssignStack);
    /// remove satisfied clauses and falsified literals at the root level.
    fn simplify_db(&mut self, asg: &mut AssignStack);
    /// increase the activity of a learnt clause.
    fn bump_activity(&mut self, cid: ClauseId);
    /// make future bumps heavier than the past ones.
    fn decay_activity(&mut self);
    /// return the first problem clause which isn't satisfied by `model`.
    fn validate(&self, model: &[bool]) -> Option<ClauseId>;
}

/// Clause identifier, or clause index in the clause arena.
/// Note: ids are re-used after deletion.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClauseId {
    /// a sequence number.
    pub ordinal: u32,
}

impl From<usize> for ClauseId {
    #[inline]
    fn from(u: usize) -> ClauseId {
        ClauseId { ordinal: u as u32 }
    }
}

impl From<ClauseId> for usize {
    #[inline]
    fn from(cid: ClauseId) -> usize {
        cid.ordinal as usize
    }
}

impl fmt::Debug for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}C", self.ordinal)
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}C", self.ordinal)
    }
}

/// A representation of 'clause'
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clause {
    /// The literals in a clause. The first two are watched.
    lits: Vec<Lit>,
    /// A dynamic clause evaluation criterion, used for learnt clauses.
    activity: f64,
    /// Flags
    flags: FlagClause,
}

/// Clause database
///
///```
/// use trailsat::{cdb::ClauseDB, config::Config, types::*};
/// let cdb = ClauseDB::instantiate(&Config::default(), &CNFDescription::default());
///```
#[derive(Clone, Debug)]
pub struct ClauseDB {
    /// container of clauses
    clause: Vec<Clause>,
    /// released slots in `clause`
    freelist: Vec<ClauseId>,
    /// container of watch lists; `watcher[l]` is examined when `l` gets true.
    watcher: Vec<Vec<ConstraintRef>>,
    /// problem clauses in the order of insertion
    constraints: Vec<ClauseId>,
    /// learnt clauses
    learnts: Vec<ClauseId>,

    //
    //## clause activity
    //
    activity_inc: f64,
    activity_decay: f64,

    //
    //## statistics
    //
    /// the number of reductions.
    num_reduction: usize,
    /// the number of clauses removed by `simplify`.
    num_simplified: usize,
}

impl Default for ClauseDB {
    fn default() -> ClauseDB {
        ClauseDB {
            clause: Vec::new(),
            freelist: Vec::new(),
            watcher: Vec::new(),
            constraints: Vec::new(),
            learnts: Vec::new(),
            activity_inc: 1.0,
            activity_decay: 0.999,
            num_reduction: 0,
            num_simplified: 0,
        }
    }
}

impl Instantiate for ClauseDB {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> ClauseDB {
        let nv = cnf.num_of_variables;
        ClauseDB {
            clause: Vec::with_capacity(cnf.num_of_clauses),
            watcher: vec![Vec::new(); 2 * nv],
            constraints: Vec::with_capacity(cnf.num_of_clauses),
            activity_decay: config.clause_decay,
            ..ClauseDB::default()
        }
    }
}

impl ClauseDB {
    /// make room for the watch lists of a new var.
    pub fn new_var(&mut self) {
        self.watcher.push(Vec::new());
        self.watcher.push(Vec::new());
    }
    /// return the clause.
    pub fn clause(&self, cid: ClauseId) -> &Clause {
        &self.clause[usize::from(cid)]
    }
    /// return the watch list examined when `l` gets true.
    pub fn watcher_list(&self, l: Lit) -> &[ConstraintRef] {
        self.watcher.get(usize::from(l)).map_or(&[][..], |w| w.as_slice())
    }
    pub fn num_reduction(&self) -> usize {
        self.num_reduction
    }
    pub fn num_simplified(&self) -> usize {
        self.num_simplified
    }
}

impl fmt::Display for ClauseDB {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CDB:: clauses: {}, learnts: {}, free slots: {}, reductions: {}",
            self.constraints.len(),
            self.learnts.len(),
            self.freelist.len(),
            self.num_reduction,
        )
    }
}
