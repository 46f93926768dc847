use {
    super::{Clause, ClauseDB, ClauseDBIF, ClauseId, ConstraintIF, ConstraintRef, WatchDBIF},
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF, VarSelectIF},
        types::*,
    },
    std::slice::Iter,
    tracing::debug,
};

/// Activity over this value triggers a rescaling of all clause activities.
const ACTIVITY_LIMIT: f64 = 1e100;
const ACTIVITY_SCALE: f64 = 1e-100;

/// The outcome of [`ClauseDBIF::new_clause`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NewClause {
    /// a clause was stored and is watched.
    Attached(ClauseId),
    /// the literal list shrank to a single literal, which was enqueued as a fact.
    Asserted(Lit),
    /// the clause was satisfied or tautological; nothing was stored.
    Absorbed,
    /// the clause is falsified at the current assignment.
    Inconsistent,
}

impl ClauseDBIF for ClauseDB {
    fn num_clauses(&self) -> usize {
        self.constraints.len()
    }
    fn num_learnts(&self) -> usize {
        self.learnts.len()
    }
    fn clause_iter(&self) -> Iter<'_, ClauseId> {
        self.constraints.iter()
    }
    fn learnt_iter(&self) -> Iter<'_, ClauseId> {
        self.learnts.iter()
    }
    fn new_clause(
        &mut self,
        asg: &mut AssignStack,
        lits: &mut Vec<Lit>,
        learnt: bool,
    ) -> NewClause {
        if !learnt {
            if asg.satisfies(lits) {
                return NewClause::Absorbed;
            }
            let mut j = 0;
            for i in 0..lits.len() {
                let l = lits[i];
                if asg.assigned(l) == Some(false) || lits[..j].contains(&l) {
                    continue;
                }
                if lits[..j].contains(&!l) {
                    return NewClause::Absorbed;
                }
                lits[j] = l;
                j += 1;
            }
            lits.truncate(j);
        }
        match lits.len() {
            0 => NewClause::Inconsistent,
            1 => {
                let l = lits[0];
                if asg.enqueue(l, AssignReason::Decision(0)) {
                    NewClause::Asserted(l)
                } else {
                    NewClause::Inconsistent
                }
            }
            _ => {
                if learnt {
                    // the last falsified literal must be watched to be unwatched at backjump.
                    let mut max_i = 1;
                    let mut max_lv = asg.level(lits[1].vi()).unwrap_or(0);
                    for (i, l) in lits.iter().enumerate().skip(2) {
                        let lv = asg.level(l.vi()).unwrap_or(0);
                        if max_lv < lv {
                            max_i = i;
                            max_lv = lv;
                        }
                    }
                    lits.swap(1, max_i);
                }
                let c = Clause::new(lits.clone(), learnt);
                let cid = match self.freelist.pop() {
                    Some(cid) => {
                        self.clause[usize::from(cid)] = c;
                        cid
                    }
                    None => {
                        self.clause.push(c);
                        ClauseId::from(self.clause.len() - 1)
                    }
                };
                let cr = ConstraintRef::Clause(cid);
                self.watcher[!lits[0]].register(cr);
                self.watcher[!lits[1]].register(cr);
                if learnt {
                    self.learnts.push(cid);
                    self.bump_activity(cid);
                    for l in lits.iter() {
                        asg.bump_activity(l.vi());
                    }
                } else {
                    self.constraints.push(cid);
                }
                NewClause::Attached(cid)
            }
        }
    }
    fn reduce(&mut self, asg: &mut AssignStack) {
        let n = self.learnts.len();
        if n == 0 {
            return;
        }
        let limit = self.activity_inc / n as f64;
        let mut learnts = std::mem::take(&mut self.learnts);
        let clause = &self.clause;
        learnts.sort_by(|a, b| {
            clause[usize::from(*a)]
                .activity
                .total_cmp(&clause[usize::from(*b)].activity)
        });
        let mut keep = Vec::with_capacity(n);
        for (i, cid) in learnts.into_iter().enumerate() {
            let cr = ConstraintRef::Clause(cid);
            if !self.is_locked(asg, cr)
                && (i < n / 2 || self.clause[usize::from(cid)].activity < limit)
            {
                self.remove(asg, cr);
            } else {
                keep.push(cid);
            }
        }
        self.learnts = keep;
        self.num_reduction += 1;
        debug!(
            "reduction #{}: learnts {} -> {}",
            self.num_reduction,
            n,
            self.learnts.len()
        );
        #[cfg(any(test, feature = "boundary_check"))]
        assert!(
            self.check_reasons(asg),
            "a reason clause was deleted by reduction"
        );
    }
    fn simplify_db(&mut self, asg: &mut AssignStack) {
        debug_assert_eq!(asg.decision_level(), 0);
        for learnt in [true, false] {
            let mut list = if learnt {
                std::mem::take(&mut self.learnts)
            } else {
                std::mem::take(&mut self.constraints)
            };
            let n = list.len();
            list.retain(|cid| {
                let cr = ConstraintRef::Clause(*cid);
                if ConstraintIF::simplify(self, asg, cr) {
                    self.remove(asg, cr);
                    false
                } else {
                    true
                }
            });
            self.num_simplified += n - list.len();
            if learnt {
                self.learnts = list;
            } else {
                self.constraints = list;
            }
        }
    }
    fn bump_activity(&mut self, cid: ClauseId) {
        let c = &mut self.clause[usize::from(cid)];
        c.activity += self.activity_inc;
        if ACTIVITY_LIMIT < c.activity {
            for cid in self.learnts.iter() {
                self.clause[usize::from(*cid)].activity *= ACTIVITY_SCALE;
            }
            self.activity_inc *= ACTIVITY_SCALE;
        }
    }
    fn decay_activity(&mut self) {
        self.activity_inc /= self.activity_decay;
    }
    fn validate(&self, model: &[bool]) -> Option<ClauseId> {
        self.constraints.iter().copied().find(|cid| {
            !self.clause[usize::from(*cid)]
                .lits
                .iter()
                .any(|l| model[l.vi()] == bool::from(*l))
        })
    }
}

#[cfg(any(test, feature = "boundary_check"))]
impl ClauseDB {
    /// return `true` if every reason of the current assignment is alive.
    pub fn check_reasons(&self, asg: &AssignStack) -> bool {
        asg.into_iter().all(|l| match asg.reason(l.vi()) {
            AssignReason::Implication(ConstraintRef::Clause(cid)) => {
                let c = &self.clause[usize::from(cid)];
                !c.flags.contains(FlagClause::DEAD) && c.lits[0] == *l
            }
            _ => true,
        })
    }
    /// return `true` if every living clause is registered in exactly the two
    /// watcher lists of its first two literals.
    pub fn check_watches(&self) -> bool {
        self.constraints.iter().chain(self.learnts.iter()).all(|cid| {
            let cr = ConstraintRef::Clause(*cid);
            let c = &self.clause[usize::from(*cid)];
            let total = self
                .watcher
                .iter()
                .map(|w| w.iter().filter(|x| **x == cr).count())
                .sum::<usize>();
            total == 2
                && self.watcher[!c.lits[0]].contains(&cr)
                && self.watcher[!c.lits[1]].contains(&cr)
        })
    }
}
