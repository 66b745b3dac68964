use clap::Parser;
use serde::Serialize;

/// Propagates the consequences of a formula, and of decisions made on the formula
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The DIMACS form CNF file to parse
    formula_file: std::path::PathBuf,

    /// Decisions to make, in order, as DIMACS literals (e.g. --decide 1 --decide -3)
    #[arg(short, long, allow_hyphen_values = true)]
    decide: Vec<isize>,

    /// Display the valuation after propagation
    #[arg(short, long, default_value_t = false)]
    valuation: bool,

    /// Display every stored clause, in DIMACS form
    #[arg(long, default_value_t = false)]
    dump: bool,

    /// Display the implication graph, in DOT form
    #[arg(short, long, default_value_t = false)]
    graph: bool,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    stats: bool,

    /// How to name atoms when displaying clauses and literals
    #[arg(long, default_value_t, value_enum)]
    names: AtomNames,

    /// The level of logs to display, if built with logs
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

#[derive(Clone, Debug)]
pub struct CliConfig {
    pub formula_file: std::path::PathBuf,
    pub decisions: Vec<isize>,
    pub show_valuation: bool,
    pub show_dump: bool,
    pub show_graph: bool,
    pub show_stats: bool,
    pub atom_names: AtomNames,
    pub log_level: LogLevel,
}

impl CliConfig {
    pub fn from_args(args: Args) -> Self {
        CliConfig {
            formula_file: args.formula_file,
            decisions: args.decide,
            show_valuation: args.valuation,
            show_dump: args.dump,
            show_graph: args.graph,
            show_stats: args.stats,
            atom_names: args.names,
            log_level: args.log_level,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AtomNames {
    #[default]
    /// The integers used in the formula
    External,
    /// The atoms of the context
    Internal,
}

#[derive(Debug, Clone, Copy, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
