/// Crate `config` provides solver's configuration.
use std::path::PathBuf;

/// `Solver`'s parameters; the CLI builds one from its options.
#[derive(Clone, Debug)]
pub struct Config {
    //
    //## I/O configuration
    //
    /// CNF file in DIMACS format
    pub cnf_file: PathBuf,

    /// Disable any progress message
    pub quiet_mode: bool,

    //
    //## var activity
    //
    /// decay rate of var activity; the increment is divided by this at every conflict
    pub var_decay: f64,

    /// polarity of decision literals; `false` makes a negative literal
    pub default_polarity: bool,

    //
    //## clause DB
    //
    /// decay rate of clause activity
    pub clause_decay: f64,

    /// initial learnt budget as a ratio to the number of problem clauses
    pub learnt_size_factor: f64,

    /// expansion rate of the learnt budget at every restart
    pub learnt_size_inc: f64,

    /// Enable learnt clause reduction
    pub use_reduction: bool,

    //
    //## restart
    //
    /// #conflicts before the first restart
    pub restart_first: f64,

    /// expansion rate of the conflict budget at every restart
    pub restart_inc: f64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            cnf_file: PathBuf::new(),
            quiet_mode: false,

            var_decay: 0.95,
            default_polarity: false,

            clause_decay: 0.999,
            learnt_size_factor: 1.0 / 3.0,
            learnt_size_inc: 1.1,
            use_reduction: true,

            restart_first: 100.0,
            restart_inc: 1.5,
        }
    }
}

impl<T> From<T> for Config
where
    PathBuf: From<T>,
{
    fn from(path: T) -> Config {
        Config {
            cnf_file: PathBuf::from(path),
            ..Config::default()
        }
    }
}
