use {
    super::SolverError,
    std::{
        fmt,
        fs::File,
        io::{BufRead, BufReader},
        path::Path,
    },
};

/// CNF locator
#[derive(Clone, Debug, Default)]
pub enum CNFIndicator {
    /// not specified
    #[default]
    Void,
    /// from a file
    File(String),
    /// embedded directly
    LitVec(usize),
}

impl fmt::Display for CNFIndicator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CNFIndicator::Void => write!(f, "No CNF specified"),
            CNFIndicator::File(file) => write!(f, "CNF file({file})"),
            CNFIndicator::LitVec(n) => write!(f, "A vec({n} clauses)"),
        }
    }
}

/// Data storage about a problem.
#[derive(Clone, Debug, Default)]
pub struct CNFDescription {
    pub num_of_variables: usize,
    pub num_of_clauses: usize,
    pub pathname: CNFIndicator,
}

impl fmt::Display for CNFDescription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let CNFDescription {
            num_of_variables: nv,
            num_of_clauses: nc,
            pathname: path,
        } = &self;
        write!(f, "CNF({nv}, {nc}, {path})")
    }
}

impl<V: AsRef<[i32]>> From<&[V]> for CNFDescription {
    fn from(vec: &[V]) -> Self {
        let num_of_variables = vec
            .iter()
            .map(|clause| {
                clause
                    .as_ref()
                    .iter()
                    .map(|l| l.unsigned_abs())
                    .max()
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0) as usize;
        CNFDescription {
            num_of_variables,
            num_of_clauses: vec.len(),
            pathname: CNFIndicator::LitVec(vec.len()),
        }
    }
}

/// A DIMACS reader. The header is consumed at construction time;
/// clauses are pulled by [`CNFReader::read_clauses`].
#[derive(Debug)]
pub struct CNFReader<R: BufRead = BufReader<File>> {
    pub cnf: CNFDescription,
    pub reader: R,
}

impl TryFrom<&Path> for CNFReader {
    type Error = SolverError;
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let pathname = path
            .file_name()
            .map_or("--".to_string(), |f| f.to_string_lossy().into_owned());
        let fs = File::open(path).map_err(|e| SolverError::IOError(e.to_string()))?;
        CNFReader::new(BufReader::new(fs), CNFIndicator::File(pathname))
    }
}

impl<R: BufRead> CNFReader<R> {
    /// read lines until the `p cnf <vars> <clauses>` header.
    pub fn new(mut reader: R, pathname: CNFIndicator) -> Result<Self, SolverError> {
        let mut buf = String::new();
        loop {
            buf.clear();
            let n = reader
                .read_line(&mut buf)
                .map_err(|e| SolverError::IOError(e.to_string()))?;
            if n == 0 {
                return Err(SolverError::MalformedInput("no problem line".to_string()));
            }
            let mut iter = buf.split_whitespace();
            match iter.next() {
                None => continue,
                Some(w) if w.starts_with('c') => continue,
                Some("p") => {
                    if iter.next() != Some("cnf") {
                        return Err(SolverError::MalformedInput(buf.trim().to_string()));
                    }
                    let mut num = || {
                        iter.next()
                            .and_then(|s| s.parse::<usize>().ok())
                            .ok_or_else(|| SolverError::MalformedInput(buf.trim().to_string()))
                    };
                    let num_of_variables = num()?;
                    let num_of_clauses = num()?;
                    return Ok(CNFReader {
                        cnf: CNFDescription {
                            num_of_variables,
                            num_of_clauses,
                            pathname,
                        },
                        reader,
                    });
                }
                Some(_) => {
                    return Err(SolverError::MalformedInput(format!(
                        "a clause before the problem line: {}",
                        buf.trim()
                    )))
                }
            }
        }
    }
    /// read all the remaining clauses as DIMACS integers.
    /// A clause ends at `0` and may span lines.
    pub fn read_clauses(&mut self) -> Result<Vec<Vec<i32>>, SolverError> {
        let nv = self.cnf.num_of_variables;
        let mut clauses: Vec<Vec<i32>> = Vec::with_capacity(self.cnf.num_of_clauses);
        let mut clause: Vec<i32> = Vec::new();
        let mut buf = String::new();
        loop {
            buf.clear();
            let n = self
                .reader
                .read_line(&mut buf)
                .map_err(|e| SolverError::IOError(e.to_string()))?;
            if n == 0 {
                break;
            }
            let line = buf.trim_start();
            if line.starts_with('c') {
                continue;
            }
            if line.starts_with('%') {
                break;
            }
            for seg in line.split_whitespace() {
                let l = seg
                    .parse::<i32>()
                    .map_err(|_| SolverError::MalformedInput(seg.to_string()))?;
                if l == 0 {
                    clauses.push(std::mem::take(&mut clause));
                } else if nv < l.unsigned_abs() as usize {
                    return Err(SolverError::InvalidLiteral);
                } else {
                    clause.push(l);
                }
            }
        }
        if !clause.is_empty() {
            clauses.push(clause);
        }
        Ok(clauses)
    }
}
