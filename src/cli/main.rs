#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{collections::HashMap, fs::File, io::BufReader};

use clap::Parser;

use ht_sat::{
    config::Config,
    context::{Context, ContextState},
    db::{
        ClauseKey,
        atom::AtomValue,
        vocabulary::{AtomMapper, IdentityMapper, external_literal},
    },
    structures::{
        atom::Atom,
        clause::Clause,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
    types::err::BCPError,
};

mod args;

use args::{AtomNames, Args, CliConfig};

fn main() {
    let config_io = CliConfig::from_args(Args::parse());
    init_logging(config_io.log_level.into());

    let mut the_context = Context::from_config(Config::default());

    let file = match File::open(&config_io.formula_file) {
        Ok(file) => file,
        Err(e) => {
            println!("c Error opening {}: {e}", config_io.formula_file.display());
            std::process::exit(1);
        }
    };

    let atom_map = match the_context.read_dimacs(BufReader::new(file)) {
        Ok(map) => map,
        Err(e) => {
            println!("c Error loading DIMACS: {e:?}");
            std::process::exit(1);
        }
    };

    let external_names: HashMap<Atom, String> = atom_map
        .iter()
        .map(|(int, atom)| (*atom, int.to_string()))
        .collect();

    match config_io.atom_names {
        AtomNames::External => run(&mut the_context, &atom_map, &external_names, &config_io),
        AtomNames::Internal => run(&mut the_context, &atom_map, &IdentityMapper, &config_io),
    }
}

fn run(
    the_context: &mut Context,
    atom_map: &HashMap<isize, Atom>,
    mapper: &impl AtomMapper,
    config_io: &CliConfig,
) {
    let mut conflict = match the_context.state {
        ContextState::Unsatisfiable(key) => Some(key),
        ContextState::Input => base_propagation(the_context),
        ContextState::EmptyClause => {
            println!("c The formula contains the empty clause");
            println!("s UNSATISFIABLE");
            std::process::exit(20);
        }
    };

    if conflict.is_none() {
        'decision_loop: for decision in &config_io.decisions {
            let Some(atom) = decision.checked_abs().and_then(|int| atom_map.get(&int)) else {
                println!("c Decision {decision} is not part of the formula");
                break 'decision_loop;
            };
            let literal = CLiteral::new(*atom, decision.is_positive());

            match the_context.decide(literal) {
                AtomValue::NotSet => {}
                AtomValue::Same => {
                    println!("c Decision {decision} is already true");
                    continue 'decision_loop;
                }
                AtomValue::Different => {
                    println!("c Decision {decision} is already false");
                    break 'decision_loop;
                }
            }

            if let Err(BCPError::Conflict(key)) = the_context.propagate() {
                conflict = Some(key);
                break 'decision_loop;
            }
        }
    }

    if let Some(key) = conflict {
        report_conflict(the_context, key, mapper);
    }

    if config_io.show_valuation {
        println!("v {}", valuation_string(the_context, mapper));
    }

    if config_io.show_dump {
        for clause in the_context.clause_db.all_clauses() {
            println!("{}", clause.as_external(mapper));
        }
    }

    if config_io.show_graph {
        match the_context.implication_graph(conflict) {
            Ok(graph) => println!("{}", graph.as_dot()),
            Err(e) => println!("c Error building the implication graph: {e:?}"),
        }
    }

    if config_io.show_stats {
        println!("c Atoms:            {}", the_context.atom_db.count() - 1);
        println!("c Original clauses: {}", the_context.clause_db.original_count());
        println!("c Addition clauses: {}", the_context.clause_db.addition_count());
        println!("c Assignments:      {}", the_context.atom_db.trail.literals.len());
        println!("c Level:            {}", the_context.atom_db.level());
    }

    match conflict {
        Some(_) if the_context.atom_db.level() == 0 => {
            println!("s UNSATISFIABLE");
            std::process::exit(20);
        }
        Some(_) => {
            println!("s CONFLICT");
            std::process::exit(0);
        }
        None => {
            println!("s UNKNOWN");
            std::process::exit(0);
        }
    }
}

/// Propagates assignments made while reading the formula, returning the key of a conflict if one is found.
fn base_propagation(the_context: &mut Context) -> Option<ClauseKey> {
    match the_context.propagate() {
        Ok(()) => None,
        Err(BCPError::Conflict(key)) => Some(key),
    }
}

fn report_conflict(the_context: &Context, key: ClauseKey, mapper: &impl AtomMapper) {
    println!("c Conflict at level {}", the_context.atom_db.level());

    if let Ok(clause) = the_context.clause_db.get(&key) {
        println!("c Clause: {}", clause.as_string_with(&the_context.atom_db, mapper));
    }

    match the_context.conflict_literals(key) {
        Ok(reason) => {
            let reason_string = reason
                .iter()
                .map(|literal| external_literal(*literal, mapper))
                .collect::<Vec<_>>()
                .join(" ");
            println!("c Reason: {reason_string}");
        }
        Err(e) => println!("c Error finding the reason for the conflict: {e:?}"),
    }
}

fn valuation_string(the_context: &Context, mapper: &impl AtomMapper) -> String {
    let mut literals = the_context
        .atom_db
        .valuation()
        .atom_value_pairs()
        .filter_map(|(atom, value)| Some(CLiteral::new(atom, value?)))
        .collect::<Vec<_>>();
    literals.sort_unstable_by_key(|literal| literal.atom());

    let mut the_string = literals
        .iter()
        .map(|literal| external_literal(*literal, mapper))
        .collect::<Vec<_>>()
        .join(" ");
    the_string.push_str(" 0");
    the_string
}

#[cfg(feature = "log")]
fn init_logging(level: log::LevelFilter) {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                println!("c Error initialising logs: {e}");
            }
        }
        Err(e) => println!("c Error configuring logs: {e}"),
    }
}

#[cfg(not(feature = "log"))]
fn init_logging(_level: log::LevelFilter) {}
