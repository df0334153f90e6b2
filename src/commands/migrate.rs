//! Migrate command - applies, reverts and reports the users schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, SchemaStatus};

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database_url)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    for line in run(&db, args.action).await? {
        println!("{}", line);
    }
    Ok(())
}

/// Perform `action` and return the lines to report.
pub async fn run(db: &Database, action: MigrateAction) -> AppResult<Vec<String>> {
    match action {
        MigrateAction::Up => {
            let applied = db.apply_pending().await.map_err(migration_failed)?;
            tracing::info!(applied, "Migrations applied");
            Ok(vec![format!("applied {} migration(s)", applied)])
        }
        MigrateAction::Down => match db.rollback_last().await.map_err(migration_failed)? {
            Some(name) => {
                tracing::warn!(migration = %name, "Migration rolled back");
                Ok(vec![format!("rolled back {}", name)])
            }
            None => Ok(vec!["nothing to roll back".to_string()]),
        },
        MigrateAction::Status => {
            let status = db.schema_status().await.map_err(migration_failed)?;
            Ok(status_lines(&status))
        }
    }
}

fn migration_failed(e: sea_orm::DbErr) -> AppError {
    AppError::internal(format!("Migration failed: {}", e))
}

fn status_lines(status: &SchemaStatus) -> Vec<String> {
    let mut lines: Vec<String> = status
        .migrations
        .iter()
        .map(|m| {
            let state = if m.applied { "applied" } else { "pending" };
            format!("{}: {}", m.name, state)
        })
        .collect();

    lines.push(match status.user_count {
        Some(count) => format!("users: {} row(s)", count),
        None => "users: table missing".to_string(),
    });
    lines
}
