//! Property-based tests for score persistence
//!
//! Applying a sequence of deltas through the store gives the same result
//! as summing them in memory, and an increment that would overflow is
//! refused without damaging the row.

use proptest::prelude::*;
use sqlx::SqlitePool;
use trivia::backend::auth::users::{add_to_score, create_user, get_user_by_id, list_users};
use trivia::backend::server::config::{load_database, ServerConfig};
use trivia::backend::BackendError;
use trivia::shared::{RegisterRequest, Score, ScoreDelta};
use uuid::Uuid;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

async fn pool_with_user() -> (SqlitePool, Uuid) {
    let config = ServerConfig::builder()
        .jwt_secret("store-property")
        .database_url("sqlite::memory:")
        .bcrypt_cost(4)
        .build()
        .unwrap();
    let pool = load_database(&config).await.unwrap();
    let user = create_user(&pool, &RegisterRequest::new("p", "p@example.com", "pw"), 4)
        .await
        .unwrap();
    (pool, user.id)
}

fn run_sequence(deltas: &[ScoreDelta]) -> Score {
    block_on(async {
        let (pool, id) = pool_with_user().await;
        for delta in deltas {
            add_to_score(&pool, id, *delta).await.unwrap();
        }
        get_user_by_id(&pool, id).await.unwrap().unwrap().score()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_stored_score_matches_sum(
        deltas in prop::collection::vec(
            (0..50i64, 0..50i64).prop_map(|(r, w)| ScoreDelta::new(r, w)),
            0..12,
        )
    ) {
        let expected = Score::new(
            deltas.iter().map(|d| d.right).sum(),
            deltas.iter().map(|d| d.wrong).sum(),
        );
        prop_assert_eq!(run_sequence(&deltas), expected);
    }

    #[test]
    fn test_overflowing_increment_is_refused(
        first in (i64::MAX / 2)..=i64::MAX,
        second in (i64::MAX / 2)..=i64::MAX,
    ) {
        let (applied, after, listed) = block_on(async {
            let (pool, id) = pool_with_user().await;
            add_to_score(&pool, id, ScoreDelta::new(first, 0)).await.unwrap();
            let applied = add_to_score(&pool, id, ScoreDelta::new(second, 0)).await;
            let after = get_user_by_id(&pool, id).await.unwrap().unwrap().score();
            let listed = list_users(&pool).await.is_ok();
            (applied, after, listed)
        });

        prop_assert!(listed);
        match first.checked_add(second) {
            Some(sum) => {
                prop_assert!(applied.is_ok());
                prop_assert_eq!(after, Score::new(sum, 0));
            }
            None => {
                let refused = matches!(applied, Err(BackendError::SharedError(_)));
                prop_assert!(refused);
                prop_assert_eq!(after, Score::new(first, 0));
            }
        }
    }
}
