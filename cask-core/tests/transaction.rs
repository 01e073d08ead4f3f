mod common;

#[cfg(test)]
mod tests {
    use crate::common::{Call, MockDb};
    use cask_core::{
        Error, IsolationLevel, in_transaction, run, transactional, transactional_with, use_handle,
        with_handle,
    };

    #[test]
    fn nested_spans_share_one_handle_and_commit_once() {
        crate::common::init();
        let db = MockDb::new();
        transactional(|| {
            run(&db, "DELETE FROM a").execute()?;
            transactional(|| {
                run(&db, "DELETE FROM b").execute()?;
                transactional(|| run(&db, "DELETE FROM c").execute().map(|_| ()))
            })?;
            run(&db, "DELETE FROM d").execute().map(|_| ())
        })
        .unwrap();
        assert_eq!(
            db.calls(),
            vec![
                Call::Open(0),
                Call::Begin(0, None),
                Call::Execute(0, "DELETE FROM a".into(), vec![]),
                Call::Execute(0, "DELETE FROM b".into(), vec![]),
                Call::Execute(0, "DELETE FROM c".into(), vec![]),
                Call::Execute(0, "DELETE FROM d".into(), vec![]),
                Call::Commit(0),
                Call::Close(0),
            ]
        );
    }

    #[test]
    fn inner_failure_rolls_back_and_rethrows_the_original_error() {
        crate::common::init();
        let db = MockDb::new();
        let result: cask_core::Result<()> = transactional(|| {
            run(&db, "DELETE FROM a").execute()?;
            transactional(|| run(&db, "FAIL").execute().map(|_| ()))?;
            run(&db, "DELETE FROM never_reached").execute().map(|_| ())
        });
        assert!(matches!(result, Err(Error::Execution(..))));
        let calls = db.calls();
        assert!(calls.contains(&Call::Rollback(0)));
        assert!(!calls.contains(&Call::Commit(0)));
        assert!(calls.contains(&Call::Close(0)));
        assert!(!calls.iter().any(
            |call| matches!(call, Call::Execute(_, sql, _) if sql.contains("never_reached"))
        ));
    }

    #[test]
    fn swallowed_inner_failure_still_rolls_back() {
        let db = MockDb::new();
        let result = transactional(|| {
            let ignored = transactional(|| run(&db, "FAIL").execute().map(|_| ()));
            assert!(ignored.is_err());
            run(&db, "DELETE FROM a").execute().map(|_| ())
        });
        assert!(matches!(result, Err(Error::Transaction(..))));
        let calls = db.calls();
        assert!(calls.contains(&Call::Rollback(0)));
        assert!(!calls.contains(&Call::Commit(0)));
    }

    #[test]
    fn bare_use_inside_a_span_reuses_the_span_handle() {
        let db = MockDb::new();
        transactional(|| {
            run(&db, "DELETE FROM a").execute()?;
            use_handle(&db, |handle| handle.execute("DELETE FROM b", &[]).map(|_| ()))
        })
        .unwrap();
        let opens = db
            .calls()
            .iter()
            .filter(|call| matches!(call, Call::Open(..)))
            .count();
        assert_eq!(opens, 1);
        assert_eq!(
            db.calls().last(),
            Some(&Call::Close(0)),
            "span teardown owns the handle"
        );
    }

    #[test]
    fn swallowed_bare_failure_poisons_the_span() {
        let db = MockDb::new();
        let result = transactional(|| {
            let ignored = use_handle(&db, |handle| handle.execute("FAIL", &[]).map(|_| ()));
            assert!(ignored.is_err());
            Ok(())
        });
        assert!(matches!(result, Err(Error::Transaction(..))));
        assert!(db.calls().contains(&Call::Rollback(0)));
    }

    #[test]
    fn bare_use_outside_a_span_is_atomic_on_its_own() {
        let db = MockDb::new();
        let affected = with_handle(&db, |handle| handle.execute("DELETE FROM a", &[])).unwrap();
        assert_eq!(affected, 1);
        assert_eq!(
            db.calls(),
            vec![
                Call::Open(0),
                Call::Begin(0, None),
                Call::Execute(0, "DELETE FROM a".into(), vec![]),
                Call::Commit(0),
                Call::Close(0),
            ]
        );
    }

    #[test]
    fn bare_use_outside_a_span_rolls_back_on_failure() {
        let db = MockDb::new();
        let result = with_handle(&db, |handle| handle.execute("FAIL", &[]));
        assert!(matches!(result, Err(Error::Execution(..))));
        assert_eq!(
            db.calls(),
            vec![
                Call::Open(0),
                Call::Begin(0, None),
                Call::Execute(0, "FAIL".into(), vec![]),
                Call::Rollback(0),
                Call::Close(0),
            ]
        );
    }

    #[test]
    fn isolation_is_applied_at_first_open_only() {
        let db = MockDb::new();
        transactional_with(Some(IsolationLevel::Serializable), || {
            transactional_with(Some(IsolationLevel::ReadUncommitted), || {
                run(&db, "DELETE FROM a").execute().map(|_| ())
            })
        })
        .unwrap();
        assert_eq!(
            db.calls().get(1),
            Some(&Call::Begin(0, Some(IsolationLevel::Serializable)))
        );
    }

    #[test]
    fn a_span_that_touches_no_handle_opens_none() {
        let db = MockDb::new();
        transactional(|| {
            assert!(in_transaction());
            Ok(())
        })
        .unwrap();
        assert_eq!(db.call_count(), 0);
    }

    #[test]
    fn thread_state_is_cleared_after_the_span() {
        let db = MockDb::new();
        assert!(!in_transaction());
        transactional(|| run(&db, "DELETE FROM a").execute().map(|_| ())).unwrap();
        assert!(!in_transaction());
        let _ = transactional(|| run(&db, "FAIL").execute().map(|_| ()));
        assert!(!in_transaction());
        // A fresh unit of work gets a fresh handle.
        run(&db, "DELETE FROM b").execute().unwrap();
        assert!(db.calls().contains(&Call::Open(2)));
    }

    #[test]
    fn swallowed_open_failure_in_a_span_still_forces_rollback() {
        let db = MockDb::new();
        db.fail_next_open();
        let result = transactional(|| {
            let ignored = run(&db, "DELETE FROM a").execute();
            assert!(ignored.is_err());
            // The retry succeeds on a fresh handle, but the span stays marked.
            run(&db, "DELETE FROM a").execute().map(|_| ())
        });
        assert!(matches!(result, Err(Error::Transaction(..))));
        let calls = db.calls();
        assert!(calls.contains(&Call::Rollback(0)));
        assert!(!calls.contains(&Call::Commit(0)));
    }

    #[test]
    fn begin_failure_outside_a_span_still_closes_the_handle() {
        let db = MockDb::new();
        db.fail_begin();
        let result = with_handle(&db, |handle| handle.execute("DELETE FROM a", &[]));
        assert!(matches!(result, Err(Error::Execution(..))));
        assert_eq!(
            db.calls(),
            vec![Call::Open(0), Call::Begin(0, None), Call::Close(0)]
        );
    }

    #[test]
    fn begin_failure_inside_a_span_closes_the_handle_and_poisons() {
        let db = MockDb::new();
        db.fail_begin();
        let result = transactional(|| {
            let ignored = run(&db, "DELETE FROM a").execute();
            assert!(ignored.is_err());
            Ok(())
        });
        assert!(matches!(result, Err(Error::Transaction(..))));
        assert_eq!(
            db.calls(),
            vec![Call::Open(0), Call::Begin(0, None), Call::Close(0)]
        );
    }

    #[test]
    fn outer_result_error_wins_over_cleanup() {
        let db = MockDb::new();
        let result: cask_core::Result<()> = transactional(|| {
            run(&db, "DELETE FROM a").execute()?;
            Err(Error::Validation("caller bailed out".into()))
        });
        assert!(matches!(result, Err(Error::Validation(..))));
        assert!(db.calls().contains(&Call::Rollback(0)));
    }
}
