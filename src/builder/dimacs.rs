/*!
Reading DIMACS.

A DIMACS formula is a sequence of lines:
- Lines beginning with `c` are comments.
- A line `p cnf <atoms> <clauses>` specifies the problem.
- Every other line contains (parts of) clauses, with each clause a sequence of non-zero integers terminated by `0`.
- A line beginning with `%` ends the formula.

Atoms of the formula are mapped to fresh atoms of the context, and the map is returned to the caller.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

use std::{collections::HashMap, io::BufRead};

impl Context {
    /// Reads a DIMACS formula into the context, returning a map from the (absolute) integers of the formula to atoms of the context.
    ///
    /// Duplicate literals are removed from clauses, and tautologies are skipped.
    /// If some clause is empty, or false at the base level, the formula is read to the end and the context is marked unsatisfiable.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use ht_sat::context::Context;
    /// # use ht_sat::config::Config;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c An example
    /// p cnf 4 4
    ///  1  2       0
    /// -1  2       0
    ///  1  2  3    0
    /// -1  2 -3
    ///          -4 0
    /// ");
    ///
    /// let atom_map = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(atom_map.len(), 4);
    /// assert_eq!(the_context.clause_db.total_count(), 4);
    /// ```
    pub fn read_dimacs(
        &mut self,
        mut reader: impl BufRead,
    ) -> Result<HashMap<isize, Atom>, ErrorKind> {
        let mut atom_map = HashMap::<isize, Atom>::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;
        let mut clause_counter = 0;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue 'formula_loop,

                Some('%') => break 'formula_loop,

                Some('p') => {
                    let (atom_count, clause_count) = parse_problem(&buffer)?;
                    log::info!(target: targets::PARSE, "Expected {atom_count} atoms and {clause_count} clauses");
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        let parsed_int = match item.parse::<isize>() {
                            Ok(int) => int,
                            Err(_) => return Err(err::ParseError::Line(line_counter).into()),
                        };

                        if parsed_int == 0 {
                            let the_clause = std::mem::take(&mut clause_buffer);
                            self.add_dimacs_clause(the_clause)?;
                            clause_counter += 1;
                            continue;
                        }

                        let Some(external_atom) = parsed_int.checked_abs() else {
                            return Err(err::ParseError::Line(line_counter).into());
                        };

                        let atom = match atom_map.get(&external_atom) {
                            Some(atom) => *atom,
                            None => {
                                let fresh_atom = self.fresh_atom()?;
                                atom_map.insert(external_atom, fresh_atom);
                                fresh_atom
                            }
                        };
                        clause_buffer.push(CLiteral::new(atom, parsed_int.is_positive()));
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            log::warn!(target: targets::PARSE, "Final clause without a terminating 0");
            self.add_dimacs_clause(clause_buffer)?;
            clause_counter += 1;
        }

        log::info!(target: targets::PARSE, "Read {clause_counter} clauses over {} atoms", atom_map.len());
        Ok(atom_map)
    }

    fn add_dimacs_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        match self.add_clause(clause) {
            Ok(_) => Ok(()),

            Err(ErrorKind::ClauseDB(
                err::ClauseDBError::UnsatisfiableUnit(key) | err::ClauseDBError::Unsatisfiable(key),
            )) => {
                log::info!(target: targets::PARSE, "Clause {key} is false at the base level");
                Ok(())
            }

            Err(ErrorKind::ClauseDB(err::ClauseDBError::EmptyClause)) => {
                log::info!(target: targets::PARSE, "The formula contains the empty clause");
                Ok(())
            }

            Err(e) => Err(e),
        }
    }
}

fn parse_problem(line: &str) -> Result<(usize, usize), err::ParseError> {
    let mut problem_details = line.split_whitespace();

    let (Some("p"), Some("cnf")) = (problem_details.next(), problem_details.next()) else {
        return Err(err::ParseError::ProblemSpecification);
    };

    let mut next_count = || -> Result<usize, err::ParseError> {
        match problem_details.next().map(|string| string.parse()) {
            Some(Ok(count)) => Ok(count),
            _ => Err(err::ParseError::ProblemSpecification),
        }
    };

    let atom_count = next_count()?;
    let clause_count = next_count()?;
    Ok((atom_count, clause_count))
}

/// Parses a single clause, written as a sequence of integers terminated by `0`.
///
/// ```rust
/// # use ht_sat::builder::dimacs::parse_clause;
/// # use ht_sat::types::err::ParseError;
/// assert_eq!(parse_clause("1 -2 3 0"), Ok(vec![1, -2, 3]));
/// assert_eq!(parse_clause("1 -2 3"), Err(ParseError::Unterminated));
/// assert_eq!(parse_clause("1 x 0"), Err(ParseError::Literal("x".to_string())));
/// ```
#[allow(clippy::while_let_on_iterator)]
pub fn parse_clause(line: &str) -> Result<Vec<isize>, err::ParseError> {
    if line.trim().is_empty() {
        return Err(err::ParseError::Empty);
    }

    let mut clause = Vec::default();
    let mut items = line.split_whitespace();

    while let Some(item) = items.next() {
        match item.parse::<isize>() {
            Ok(0) => {
                return match items.next() {
                    None => Ok(clause),
                    Some(trailing) => Err(err::ParseError::Literal(trailing.to_string())),
                };
            }
            Ok(int) => clause.push(int),
            Err(_) => return Err(err::ParseError::Literal(item.to_string())),
        }
    }

    Err(err::ParseError::Unterminated)
}
