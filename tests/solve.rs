use trailsat::{
    solver::{Certificate, SatSolverIF, SolveIF, Solver, ValidateIF},
    types::Lit,
    Config,
};

fn build(v: &[Vec<i32>]) -> Solver {
    Solver::try_from((Config::default(), v)).expect("no conflict while loading")
}

fn satisfies(model: &[bool], clause: &[i32]) -> bool {
    clause
        .iter()
        .any(|l| model[l.unsigned_abs() as usize - 1] == (0 < *l))
}

#[test]
fn three_vars_satisfiable() {
    let v = vec![vec![1, 2, 3], vec![-1, -2], vec![-3]];
    let mut s = build(&v);
    assert_eq!(s.solve(&[]), Ok(true));
    let m = s.model().expect("a model");
    assert!(v.iter().all(|c| satisfies(&m, c)));
    assert!(
        m == vec![false, true, false] || m == vec![true, false, false],
        "{m:?}"
    );
}

#[test]
fn all_polarities_unsatisfiable() {
    let mut v: Vec<Vec<i32>> = Vec::new();
    for bits in 0..8 {
        v.push(
            (0..3)
                .map(|i| if bits >> i & 1 == 1 { -(i + 1) } else { i + 1 })
                .collect(),
        );
    }
    let mut s = build(&v);
    assert_eq!(s.solve(&[]), Ok(false));
    assert_eq!(s.model(), None);
    assert_eq!(Certificate::try_from(v), Ok(Certificate::UNSAT));
}

#[test]
fn model_satisfies_problem_clauses() {
    // a 4-coloring of a 5-wheel, encoded one-hot
    let nodes = 6;
    let colors = 4;
    let var = |n: i32, c: i32| n * colors + c + 1;
    let mut edges: Vec<(i32, i32)> = (1..nodes).map(|n| (0, n)).collect();
    edges.extend((1..nodes).map(|n| (n, n % (nodes - 1) + 1)));
    let mut v: Vec<Vec<i32>> = Vec::new();
    for n in 0..nodes {
        v.push((0..colors).map(|c| var(n, c)).collect());
        for c in 0..colors {
            for d in c + 1..colors {
                v.push(vec![-var(n, c), -var(n, d)]);
            }
        }
    }
    for (a, b) in edges.iter() {
        for c in 0..colors {
            v.push(vec![-var(*a, c), -var(*b, c)]);
        }
    }
    let mut s = build(&v);
    assert_eq!(s.solve(&[]), Ok(true));
    let m = s.model().expect("a model");
    assert_eq!(m.len(), (nodes * colors) as usize);
    assert!(v.iter().all(|c| satisfies(&m, c)));
    assert_eq!(s.validate(), None);
}

#[test]
fn normalization_of_problem_clauses() {
    let mut s = Solver::new(Config::default());
    s.new_vars(3).expect("three vars");
    assert_eq!(s.add_dimacs_clause([1, -1]), Ok(true));
    assert_eq!(s.add_dimacs_clause([2, 3, -2]), Ok(true));
    assert_eq!(s.stats().num_clause, 0);
    assert!(s.asg.model().is_none());
    assert_eq!(s.add_dimacs_clause([2]), Ok(true));
    assert_eq!(s.add_dimacs_clause([1, 2]), Ok(true));
    assert_eq!(s.stats().num_clause, 0);
    assert_eq!(s.add_dimacs_clause([1, 3, 1]), Ok(true));
    assert_eq!(s.stats().num_clause, 1);
}

#[test]
fn solving_under_assumptions() {
    // x1 -> x2, x2 -> x3, x3 -> x4
    let v = vec![vec![-1, 2], vec![-2, 3], vec![-3, 4]];
    let mut s = build(&v);
    let lits = |v: &[i32]| v.iter().map(|i| Lit::from(*i)).collect::<Vec<Lit>>();
    assert_eq!(s.solve(&lits(&[1, -4])), Ok(false));
    assert_eq!(s.solve(&lits(&[2, -3])), Ok(false));
    assert_eq!(s.solve(&lits(&[1])), Ok(true));
    assert_eq!(s.model(), Some(vec![true; 4]));
    assert_eq!(s.solve(&lits(&[-4])), Ok(true));
    assert_eq!(s.model(), Some(vec![false; 4]));
    assert_eq!(s.solve(&[]), Ok(true));
}

#[test]
fn enumerate_all_solutions() {
    // exactly one of four
    let mut v: Vec<Vec<i32>> = vec![vec![1, 2, 3, 4]];
    for i in 1..=4 {
        for j in i + 1..=4 {
            v.push(vec![-i, -j]);
        }
    }
    let mut s = build(&v);
    let mut count = 0;
    while let Ok(Certificate::SAT(ans)) = s.certify() {
        count += 1;
        assert!(count <= 4, "{ans:?} appears twice");
        let blocking = ans.iter().map(|l| -l).collect::<Vec<i32>>();
        if !s.add_dimacs_clause(blocking).expect("valid literals") {
            break;
        }
    }
    assert_eq!(count, 4);
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

fn assert_learnts_bounded(config: Config) {
    let v = pigeonhole(6);
    let mut s = Solver::try_from((config, v.as_slice())).expect("no conflict");
    assert_eq!(s.solve(&[]), Ok(false));
    let stats = s.stats();
    assert!(0 < stats.num_restart);
    assert!(0 < stats.num_reduction, "{stats}");
    let (n, budget) = stats.reduction_peak.expect("a reduction");
    assert!(n as f64 <= 2.0 * budget, "{n} learnts over the budget {budget}");
}

#[test]
fn many_restarts_keep_learnts_bounded() {
    assert_learnts_bounded(Config {
        restart_first: 8.0,
        learnt_size_factor: 0.5,
        ..Config::default()
    });
}

#[test]
fn learnt_budget_below_the_number_of_vars() {
    // 133 clauses * 0.05 gives a budget under the 42 vars
    assert_learnts_bounded(Config {
        restart_first: 8.0,
        learnt_size_factor: 0.05,
        ..Config::default()
    });
}
