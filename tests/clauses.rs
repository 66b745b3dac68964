use std::collections::HashSet;

use ht_sat::{
    config::Config,
    context::{ClauseOk, Context, ContextState},
    db::{
        ClauseKey,
        clause::{
            binary::BinaryClause,
            db_clause::{ClauseBody, dbClause},
            head_tail::HTClause,
            unit::UnitClause,
        },
        vocabulary::Vocabulary,
    },
    structures::{
        clause::{Clause, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::{AtomDBError, ClauseDBError, ErrorKind},
};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

mod identity {
    use super::*;

    #[test]
    fn middle_order_is_ignored() {
        let mut ctx = Context::from_config(Config::default());
        let literals = ctx.fresh_literals(8);
        let mut rng = StdRng::seed_from_u64(7);

        let base = HTClause::new(literals.clone());
        let mut seen = HashSet::new();
        seen.insert(base.clone());

        for _ in 0..16 {
            let mut middle = literals[1..7].to_vec();
            middle.shuffle(&mut rng);

            let mut shuffled = vec![literals[0]];
            shuffled.extend(middle);
            shuffled.push(literals[7]);

            let clause = HTClause::new(shuffled);
            assert_eq!(clause, base);
            assert!(seen.contains(&clause));
        }
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn head_and_tail_are_positional() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r] = *ctx.fresh_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        assert_ne!(HTClause::new(vec![p, q, r]), HTClause::new(vec![r, q, p]));
        assert_ne!(HTClause::new(vec![p, q, r]), HTClause::new(vec![q, p, r]));
    }

    #[test]
    fn stored_clauses_compare_by_body() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q] = *ctx.fresh_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        let Ok(ClauseOk::Added(first)) = ctx.add_clause(vec![p, q]) else {
            panic!("Failed to add clause");
        };
        let Ok(ClauseOk::Added(second)) = ctx.add_clause(vec![q, p]) else {
            panic!("Failed to add clause");
        };
        assert_ne!(first, second);

        let first_clause = ctx.clause_db.get(&first).unwrap();
        let second_clause = ctx.clause_db.get(&second).unwrap();
        assert_eq!(first_clause, second_clause);

        let unit = dbClause::new(first, ClauseSource::Original, ClauseBody::Unit(UnitClause::new(p)));
        let binary = dbClause::new(
            first,
            ClauseSource::Original,
            ClauseBody::Binary(BinaryClause::new(p, q)),
        );
        assert_ne!(unit, binary);
        assert_eq!(&binary, first_clause);
    }
}

mod context_clauses {
    use super::*;

    #[test]
    fn duplicates_and_tautologies() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r] = *ctx.fresh_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(ctx.add_clause(vec![p, -q, p]).map(|_| ()), Ok(()));
        assert_eq!(ctx.add_clause(vec![p, -p, r]), Ok(ClauseOk::Tautology));

        let sizes = ctx
            .clause_db
            .all_clauses()
            .map(|clause| clause.size())
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![2]);
    }

    #[test]
    fn unknown_atom() {
        let mut ctx = Context::from_config(Config::default());
        let [p] = *ctx.fresh_literals(1).as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(
            ctx.add_clause(vec![p, 9]),
            Err(ErrorKind::AtomDB(AtomDBError::UnknownAtom(9)))
        );
    }

    #[test]
    fn unsatisfiable_at_base() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r] = *ctx.fresh_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(-p).is_ok());
        assert!(ctx.add_clause(-q).is_ok());
        assert!(ctx.add_clause(-r).is_ok());

        let result = ctx.add_clause(vec![p, q, r]);
        let Err(ErrorKind::ClauseDB(ClauseDBError::Unsatisfiable(key))) = result else {
            panic!("Expected an unsatisfiable clause, found {result:?}");
        };
        assert_eq!(ctx.state, ContextState::Unsatisfiable(key));
        assert_eq!(ctx.state.to_string(), "Unsatisfiable");
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::from_config(Config::default());
        let [p] = *ctx.fresh_literals(1).as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(
            ctx.add_clause(Vec::<CLiteral>::default()),
            Err(ErrorKind::ClauseDB(ClauseDBError::EmptyClause))
        );
        assert_eq!(ctx.state, ContextState::EmptyClause);
        assert_eq!(ctx.clause_db.total_count(), 0);

        assert!(ctx.add_clause(vec![p]).is_ok());
        assert_eq!(ctx.state, ContextState::EmptyClause);
    }

    #[test]
    #[should_panic]
    fn decision_on_unknown_atom() {
        let mut ctx = Context::from_config(Config::default());
        let _ = ctx.fresh_literals(2);
        ctx.decide(CLiteral::new(9, true));
    }

    #[test]
    fn learnt_clause_asserts() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r] = *ctx.fresh_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        ctx.decide(-p);
        ctx.decide(-q);

        let mut buffer = vec![r, p, q];
        let key = ctx.clause_db.learn(&mut buffer, &mut ctx.atom_db).unwrap();
        assert!(buffer.is_empty());
        assert!(matches!(key, ClauseKey::Addition(_)));

        assert!(ctx.atom_db.is_satisfied(r));
        assert_eq!(ctx.atom_db.reason_of(r), Some(key));
        assert_eq!(ctx.clause_db.addition_count(), 1);
        assert_eq!(ctx.clause_db.addition_clauses().count(), 1);

        let Ok(stored) = ctx.clause_db.get(&key) else {
            panic!("Missing clause");
        };
        assert_eq!(stored.source(), ClauseSource::Resolution);
        let ClauseBody::HeadTail(clause) = stored.body() else {
            panic!("Not a head-tail clause");
        };
        assert_eq!(clause.head(), r);
        assert_eq!(clause.tail(), q);
    }

    #[test]
    fn removal_respects_locks() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r] = *ctx.fresh_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        let Ok(ClauseOk::Added(key)) = ctx.add_clause(vec![p, q, r]) else {
            panic!("Failed to add clause");
        };

        ctx.decide(-p);
        assert!(ctx.propagate().is_ok());
        ctx.decide(-q);
        assert!(ctx.propagate().is_ok());

        assert_eq!(
            ctx.clause_db.remove(&key, &mut ctx.atom_db).map(|_| ()),
            Err(ClauseDBError::Locked)
        );

        ctx.backjump(0);
        assert!(ctx.clause_db.remove(&key, &mut ctx.atom_db).is_ok());
        assert_eq!(ctx.clause_db.get(&key).map(|_| ()), Err(ClauseDBError::Missing));

        for literal in [p, q, r, -p, -q, -r] {
            assert!(!ctx.atom_db.watches(literal).contains(&key));
        }
    }

    #[test]
    fn satisfied_clauses_simplify() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r, s] = *ctx.fresh_literals(4).as_slice() else {
            panic!("Insufficient literals");
        };

        let Ok(ClauseOk::Added(long)) = ctx.add_clause(vec![p, q, r]) else {
            panic!("Failed to add clause");
        };
        let Ok(ClauseOk::Added(binary)) = ctx.add_clause(vec![-q, s]) else {
            panic!("Failed to add clause");
        };

        ctx.decide(-p);
        assert!(ctx.propagate().is_ok());
        assert!(!ctx.clause_db.get(&long).unwrap().simplify(&ctx.atom_db));
        assert!(!ctx.clause_db.get(&binary).unwrap().simplify(&ctx.atom_db));

        ctx.decide(q);
        assert!(ctx.propagate().is_ok());
        assert!(ctx.clause_db.get(&long).unwrap().simplify(&ctx.atom_db));
        assert!(ctx.clause_db.get(&binary).unwrap().simplify(&ctx.atom_db));
    }

    #[test]
    fn activity_bumps() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r] = *ctx.fresh_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        let Ok(ClauseOk::Added(key)) = ctx.add_clause(vec![p, q, r]) else {
            panic!("Failed to add clause");
        };

        let before = ctx.clause_db.get(&key).unwrap().activity();
        assert!(ctx.clause_db.bump_activity(&key).is_ok());
        let after = ctx.clause_db.get(&key).unwrap().activity();
        assert!(after > before);
    }
}
