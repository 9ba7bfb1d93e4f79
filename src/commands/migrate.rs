//! `migrate` subcommand: manage the listing schema by hand.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // `serve` migrates on connect; here the action decides.
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    for (name, applied) in apply(&db, args.action).await? {
        println!("{}: {}", name, if applied { "applied" } else { "pending" });
    }
    Ok(())
}

/// Run `action` against `db` and report the resulting migration status.
async fn apply(db: &Database, action: MigrateAction) -> AppResult<Vec<(String, bool)>> {
    let result = match action {
        MigrateAction::Up => db.run_migrations().await,
        MigrateAction::Down => db.rollback_migration().await,
        MigrateAction::Status => Ok(()),
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all listing tables before migrating");
            db.fresh_migrations().await
        }
    };
    result.map_err(|e| AppError::internal(format!("{:?} failed: {}", action, e)))?;

    let status = db
        .migration_status()
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;
    let pending = status.iter().filter(|(_, applied)| !applied).count();
    tracing::info!(action = ?action, total = status.len(), pending, "Schema migrations checked");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn database() -> Database {
        let mut config =
            Config::new("sqlite::memory:", "test-secret-key-for-testing-only-32chars").unwrap();
        config.database_max_connections = 1;
        Database::connect_without_migrations(&config).await.unwrap()
    }

    #[tokio::test]
    async fn test_status_lists_pending_until_up() {
        let db = database().await;

        let before = apply(&db, MigrateAction::Status).await.unwrap();
        assert!(!before.is_empty());
        assert!(before.iter().all(|(_, applied)| !applied));

        let after = apply(&db, MigrateAction::Up).await.unwrap();
        assert!(after.iter().all(|(_, applied)| *applied));
    }

    #[tokio::test]
    async fn test_down_reverts_latest_only() {
        let db = database().await;
        apply(&db, MigrateAction::Up).await.unwrap();

        let status = apply(&db, MigrateAction::Down).await.unwrap();
        let pending: Vec<_> = status.iter().filter(|(_, applied)| !applied).collect();
        assert_eq!(pending.len(), 1);
        assert!(pending[0].0.ends_with("create_engagement"));
    }
}
