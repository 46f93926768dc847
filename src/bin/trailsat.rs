use {
    clap::Parser,
    std::{
        io::{self, BufWriter, Write},
        path::PathBuf,
        process::exit,
    },
    trailsat::{
        solver::{Certificate, SatSolverIF, SolveIF, Solver, SolverResult},
        Config, SolverError,
    },
    tracing_subscriber::EnvFilter,
};

const EXIT_SAT: i32 = 10;
const EXIT_UNSAT: i32 = 20;
const EXIT_ERROR: i32 = 1;

/// A CDCL SAT solver on a trail of assignments
#[derive(Debug, Parser)]
#[command(name = "trailsat")]
#[command(version)]
struct Args {
    /// CNF file in DIMACS format
    cnf_file: PathBuf,
    /// Raise the log level (-v: debug, -vv: trace); RUST_LOG takes priority
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Disable any progress message
    #[arg(short, long)]
    quiet: bool,
    /// Var activity decay rate
    #[arg(long, default_value_t = 0.95)]
    var_decay: f64,
    /// Clause activity decay rate
    #[arg(long, default_value_t = 0.999)]
    clause_decay: f64,
    /// #conflicts before the first restart
    #[arg(long, default_value_t = 100.0)]
    restart_first: f64,
    /// Conflict budget growth per restart
    #[arg(long, default_value_t = 1.5)]
    restart_inc: f64,
    /// Initial learnt budget as a ratio to the problem clauses
    #[arg(long, default_value_t = 1.0 / 3.0)]
    learnt_size_factor: f64,
    /// Learnt budget growth per restart
    #[arg(long, default_value_t = 1.1)]
    learnt_size_inc: f64,
    /// Make positive decisions
    #[arg(long)]
    positive: bool,
    /// Disable learnt clause reduction
    #[arg(long)]
    no_reduction: bool,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            cnf_file: self.cnf_file,
            quiet_mode: self.quiet,
            var_decay: self.var_decay,
            default_polarity: self.positive,
            clause_decay: self.clause_decay,
            learnt_size_factor: self.learnt_size_factor,
            learnt_size_inc: self.learnt_size_inc,
            use_reduction: !self.no_reduction,
            restart_first: self.restart_first,
            restart_inc: self.restart_inc,
        }
    }
}

fn main() {
    let args = Args::parse();
    let level = match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
    let config = args.into_config();
    let code = match Solver::build(&config) {
        Ok(mut s) => {
            let res = s.certify();
            if !config.quiet_mode {
                eprintln!("c {}", s.stats());
            }
            report(res)
        }
        Err(res) => report(res),
    };
    exit(code);
}

fn report(res: SolverResult) -> i32 {
    let out = io::stdout();
    let mut buf = BufWriter::new(out.lock());
    let (code, written) = match res {
        Ok(Certificate::SAT(v)) => (EXIT_SAT, write_model(&mut buf, &v)),
        Ok(Certificate::UNSAT) => (EXIT_UNSAT, writeln!(buf, "s UNSATISFIABLE")),
        Err(e) => {
            eprintln!("{}", describe(&e));
            (EXIT_ERROR, Ok(()))
        }
    };
    if written.and_then(|_| buf.flush()).is_err() {
        return EXIT_ERROR;
    }
    code
}

fn write_model<W: Write>(buf: &mut W, v: &[i32]) -> io::Result<()> {
    writeln!(buf, "s SATISFIABLE")?;
    for x in v {
        writeln!(buf, "v {x}")?;
    }
    writeln!(buf, "v 0")
}

fn describe(e: &SolverError) -> String {
    match e {
        SolverError::IOError(_) | SolverError::MalformedInput(_) | SolverError::InvalidLiteral => {
            format!("c failed to load the CNF: {e}")
        }
        _ => format!("c aborted: {e}"),
    }
}
