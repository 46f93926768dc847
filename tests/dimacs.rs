use std::path::Path;
use trailsat::{
    solver::{Certificate, SatSolverIF, SolveIF, Solver},
    types::{CNFIndicator, CNFReader, Instantiate},
    Config, SolverError,
};

#[test]
fn load_and_solve_files() {
    let mut s = Solver::try_from(Path::new("cnfs/scenario-a.cnf")).expect("can't load");
    assert_eq!(s.stats().num_vars, 3);
    match s.certify() {
        Ok(Certificate::SAT(ans)) => {
            assert_eq!(ans.len(), 3);
            assert_eq!(ans[2], -3);
            assert!(ans[0] < 0 || ans[1] < 0);
            assert!(0 < ans[0] || 0 < ans[1]);
        }
        r => panic!("{r:?}"),
    }
    let mut s = Solver::try_from(Path::new("cnfs/scenario-b.cnf")).expect("can't load");
    assert_eq!(s.certify(), Ok(Certificate::UNSAT));
}

#[test]
fn clause_spanning_lines() {
    let config = Config::from("cnfs/uf8.cnf");
    let mut s = Solver::build(&config).expect("can't load");
    assert_eq!(s.stats().num_clause, 7);
    assert_eq!(s.solve(&[]), Ok(true));
    let m = s.model().expect("a model");
    // -5 6 is a binary clause spanning two lines
    assert!(!m[4] || m[5]);
    assert!(!m[3] || m[4]);
}

#[test]
fn broken_files() {
    assert!(matches!(
        Solver::try_from(Path::new("cnfs/broken.cnf")),
        Err(Err(SolverError::InvalidLiteral))
    ));
    assert!(matches!(
        Solver::try_from(Path::new("cnfs/no-such-file.cnf")),
        Err(Err(SolverError::IOError(_)))
    ));
    let text = "c no header\n1 2 0\n";
    assert!(matches!(
        CNFReader::new(text.as_bytes(), CNFIndicator::Void),
        Err(SolverError::MalformedInput(_))
    ));
    let text = "p cnf 2 1\n1 x 0\n";
    let mut reader = CNFReader::new(text.as_bytes(), CNFIndicator::Void).expect("a header");
    assert!(matches!(
        reader.read_clauses(),
        Err(SolverError::MalformedInput(_))
    ));
}

#[test]
fn refuted_by_simplification() {
    let text = "p cnf 2 3\n1 2 0\n1 -2 0\n-1 0\n";
    let mut reader = CNFReader::new(text.as_bytes(), CNFIndicator::Void).expect("a header");
    let clauses = reader.read_clauses().expect("valid clauses");
    assert_eq!(clauses, vec![vec![1, 2], vec![1, -2], vec![-1]]);
    let mut s = Solver::instantiate(&Config::default(), &reader.cnf);
    assert_eq!(s.add_dimacs_clause(&clauses[0]), Ok(true));
    assert_eq!(s.add_dimacs_clause(&clauses[1]), Ok(true));
    assert_eq!(s.add_dimacs_clause(&clauses[2]), Ok(true));
    assert_eq!(s.simplify_db(), Ok(false));
    assert_eq!(s.solve(&[]), Ok(false));
}
