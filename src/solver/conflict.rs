//! Conflict Analysis
use {
    super::State,
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF, VarSelectIF},
        cdb::{ClauseDB, ClauseDBIF, ConstraintIF, ConstraintRef, NewClause},
        types::*,
    },
    tracing::trace,
};

/// learn from a conflict at a level above the root level, then backjump.
/// The learnt clause is installed and its first literal is asserted.
pub fn handle_conflict(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    state: &mut State,
    confl: ConstraintRef,
) -> MaybeInconsistent {
    let mut new_learnt = std::mem::take(&mut state.new_learnt);
    let mut seen = std::mem::take(&mut state.an_seen);
    let analyzed = conflict_analyze(asg, cdb, confl, &mut new_learnt, &mut seen);
    for vi in seen.drain(..) {
        asg.var_mut(vi).turn_off(FlagVar::CA_SEEN);
    }
    state.an_seen = seen;
    let bl = match analyzed {
        Ok(bl) => bl,
        Err(e) => {
            state.new_learnt = new_learnt;
            return Err(e);
        }
    };
    asg.cancel_until(cdb, bl.max(asg.root_level()));
    let res = record(asg, cdb, &mut new_learnt);
    state.new_learnt = new_learnt;
    state.num_learnt += 1;
    res?;
    asg.decay_activity();
    cdb.decay_activity();
    Ok(())
}

/// install a learnt clause and assert its first literal.
fn record(asg: &mut AssignStack, cdb: &mut ClauseDB, learnt: &mut Vec<Lit>) -> MaybeInconsistent {
    let l0 = learnt[0];
    trace!("learnt {:?}", i32s(learnt));
    match cdb.new_clause(asg, learnt, true) {
        NewClause::Attached(cid) => {
            if asg.enqueue(l0, AssignReason::Implication(ConstraintRef::Clause(cid))) {
                Ok(())
            } else {
                Err(SolverError::IllegalState(format!(
                    "learnt clause {cid} isn't asserting"
                )))
            }
        }
        NewClause::Asserted(_) => Ok(()),
        r => Err(SolverError::IllegalState(format!(
            "learnt clause {:?} made {r:?}",
            i32s(learnt)
        ))),
    }
}

/// build a first-UIP clause into `learnt` and return the level to backjump.
/// The trail is unwound down to the UIP as a side effect.
/// `seen` collects the vars marked during the analysis.
fn conflict_analyze(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    confl: ConstraintRef,
    learnt: &mut Vec<Lit>,
    seen: &mut Vec<VarId>,
) -> Result<DecisionLevel, SolverError> {
    let dl = asg.decision_level();
    if dl <= asg.root_level() {
        return Err(SolverError::IllegalState(
            "conflict analysis at the root level".to_string(),
        ));
    }
    learnt.clear();
    // the slot for the asserting literal
    learnt.push(Lit::default());
    let mut reason: Vec<Lit> = Vec::new();
    let mut path_cnt = 0;
    let mut bl: DecisionLevel = 0;
    let mut p: Option<Lit> = None;
    let mut confl = confl;
    loop {
        reason.clear();
        cdb.calc_reason(asg, confl, p, &mut reason);
        for q in reason.iter() {
            let vi = q.vi();
            if asg.var(vi).is(FlagVar::CA_SEEN) {
                continue;
            }
            let lv = asg.level(vi).unwrap_or(0);
            if lv == 0 {
                continue;
            }
            asg.var_mut(vi).turn_on(FlagVar::CA_SEEN);
            seen.push(vi);
            if lv == dl {
                path_cnt += 1;
            } else {
                learnt.push(!*q);
                bl = bl.max(lv);
            }
        }
        // select the next pivot
        let next = loop {
            let l = asg.stack(asg.stack_len().checked_sub(1).ok_or(SolverError::Underflow)?);
            let r = asg.reason(l.vi());
            asg.undo_one(cdb)?;
            if asg.var(l.vi()).is(FlagVar::CA_SEEN) {
                break (l, r);
            }
        };
        p = Some(next.0);
        path_cnt -= 1;
        if path_cnt == 0 {
            break;
        }
        confl = match next.1 {
            AssignReason::Implication(cr) => cr,
            r => {
                return Err(SolverError::IllegalState(format!(
                    "{} has no reason clause ({r})",
                    next.0
                )))
            }
        };
    }
    if let Some(uip) = p {
        learnt[0] = !uip;
    }
    Ok(bl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdb::ClauseIF;

    fn lit(i: i32) -> Lit {
        Lit::from(i)
    }

    fn setup(n: usize, clauses: &[&[i32]]) -> (AssignStack, ClauseDB, State) {
        let config = Config::default();
        let cnf = CNFDescription {
            num_of_variables: n,
            num_of_clauses: clauses.len(),
            ..CNFDescription::default()
        };
        let mut asg = AssignStack::instantiate(&config, &cnf);
        let mut cdb = ClauseDB::instantiate(&config, &cnf);
        for c in clauses {
            let mut v = c.iter().map(|i| lit(*i)).collect::<Vec<_>>();
            assert!(matches!(
                cdb.new_clause(&mut asg, &mut v, false),
                NewClause::Attached(_)
            ));
        }
        (asg, cdb, State::instantiate(&config, &cnf))
    }

    #[test]
    fn test_first_uip() {
        // x1 -> x3, x2 & x3 -> x4, x2 & x3 -> -x4
        let (mut asg, mut cdb, state) = setup(4, &[&[-1, 3], &[-2, -3, 4], &[-2, -3, -4]]);
        assert!(asg.assume(lit(1)));
        assert_eq!(asg.propagate(&mut cdb), None);
        assert_eq!(asg.assigned(lit(3)), Some(true));
        assert!(asg.assume(lit(2)));
        let confl = asg.propagate(&mut cdb).expect("a conflict");
        let mut learnt = Vec::new();
        let mut seen = Vec::new();
        let bl = conflict_analyze(&mut asg, &mut cdb, confl, &mut learnt, &mut seen)
            .expect("no error");
        // x2 is the UIP; x3 comes from level 1
        assert_eq!(learnt[0], lit(-2));
        assert_eq!(learnt.len(), 2);
        assert!(learnt.contains(&lit(-3)));
        assert_eq!(bl, 1);
        for vi in seen.drain(..) {
            asg.var_mut(vi).turn_off(FlagVar::CA_SEEN);
        }

        asg.cancel_until(&mut cdb, bl);
        assert_eq!(record(&mut asg, &mut cdb, &mut learnt), Ok(()));
        assert_eq!(asg.assigned(lit(-2)), Some(true));
        assert_eq!(asg.level(1), Some(1));
        assert_eq!(cdb.num_learnts(), 1);
        let cid = *cdb.learnt_iter().next().expect("a learnt");
        assert_eq!(cdb.clause(cid).lit0(), lit(-2));
        assert!(cdb.is_locked(&asg, ConstraintRef::Clause(cid)));
        assert!(state.new_learnt.is_empty());
        // only the vars in the learnt clause get bumped
        assert!(0.0 < asg.activity(1) && 0.0 < asg.activity(2));
        assert_eq!(asg.activity(3), 0.0);
    }

    #[test]
    fn test_handle_conflict_with_unit_learnt() {
        // both polarities of x2 lead to a conflict under any x1
        let (mut asg, mut cdb, mut state) = setup(3, &[&[-2, 3], &[-2, -3]]);
        assert!(asg.assume(lit(1)));
        assert_eq!(asg.propagate(&mut cdb), None);
        assert!(asg.assume(lit(2)));
        let confl = asg.propagate(&mut cdb).expect("a conflict");
        assert_eq!(handle_conflict(&mut asg, &mut cdb, &mut state, confl), Ok(()));
        assert_eq!(asg.decision_level(), 0);
        assert_eq!(asg.assigned(lit(-2)), Some(true));
        assert_eq!(asg.level(1), Some(0));
        assert_eq!(cdb.num_learnts(), 0);
        assert_eq!(state.num_learnt, 1);
        assert!((0..3).all(|vi| !asg.var(vi).is(FlagVar::CA_SEEN)));
    }

    #[test]
    fn test_analysis_at_root_level() {
        let (mut asg, mut cdb, mut state) = setup(2, &[&[1, 2], &[1, -2]]);
        assert!(asg.enqueue(lit(-1), AssignReason::Decision(0)));
        let confl = asg.propagate(&mut cdb).expect("a conflict");
        state.new_learnt = Vec::with_capacity(16);
        assert!(matches!(
            handle_conflict(&mut asg, &mut cdb, &mut state, confl),
            Err(SolverError::IllegalState(_))
        ));
        // the buffer survives the error
        assert!(16 <= state.new_learnt.capacity());
    }
}
