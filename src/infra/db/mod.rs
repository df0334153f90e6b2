//! Database connection, schema migrations and schema inspection.

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use sea_orm_migration::{MigrationStatus, MigratorTrait, SchemaManager};

use crate::infra::repositories::entities::UserEntity;

pub mod migrations;

pub use migrations::Migrator;

const USERS_TABLE: &str = "users";

/// Migration name and whether it has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Snapshot of the schema as seen by `migrate status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaStatus {
    pub migrations: Vec<MigrationState>,
    /// Row count of the users table, `None` while the table does not exist
    pub user_count: Option<u64>,
}

impl SchemaStatus {
    pub fn is_current(&self) -> bool {
        self.migrations.iter().all(|m| m.applied)
    }
}

/// Database wrapper for connection management
///
/// Opened once at startup and handed to the storage layer explicitly.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the store and bring the users schema up to date.
    ///
    /// Fails if the store cannot be opened (for example an SQLite path
    /// whose directory does not exist) or a migration fails.
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(database_url).await?;
        let applied = db.apply_pending().await?;
        tracing::info!(applied, "Database connected");

        Ok(db)
    }

    /// Open the store and leave the schema untouched (`migrate` command).
    pub async fn connect_without_migrations(database_url: &str) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(database_url).await?;
        Ok(Self { connection })
    }

    /// Pooled handle for repositories.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply pending migrations, returning how many ran.
    pub async fn apply_pending(&self) -> Result<usize, DbErr> {
        let pending = Migrator::get_pending_migrations(&self.connection).await?.len();
        if pending > 0 {
            Migrator::up(&self.connection, None).await?;
        }
        Ok(pending)
    }

    /// Revert the most recent applied migration, returning its name.
    pub async fn rollback_last(&self) -> Result<Option<String>, DbErr> {
        let last = Migrator::get_applied_migrations(&self.connection)
            .await?
            .last()
            .map(|m| m.name().to_string());

        if last.is_some() {
            Migrator::down(&self.connection, Some(1)).await?;
        }
        Ok(last)
    }

    /// Applied/pending state of every migration plus the users row count.
    pub async fn schema_status(&self) -> Result<SchemaStatus, DbErr> {
        let migrations = Migrator::get_migration_with_status(&self.connection)
            .await?
            .iter()
            .map(|m| MigrationState {
                name: m.name().to_string(),
                applied: matches!(m.status(), MigrationStatus::Applied),
            })
            .collect();

        let manager = SchemaManager::new(&self.connection);
        let user_count = if manager.has_table(USERS_TABLE).await? {
            Some(UserEntity::find().count(&self.connection).await?)
        } else {
            None
        };

        Ok(SchemaStatus {
            migrations,
            user_count,
        })
    }

    /// Round trip to the store, used by the health endpoint.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}
