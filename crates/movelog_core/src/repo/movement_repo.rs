//! Movement repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the five store primitives backing the movement operations.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `put` replaces the whole row; `update` touches only mutable columns.
//! - `update` never inserts: zero affected rows fails the conditional check.
//! - `delete` and `get` treat an absent key as a successful empty result.
//! - Page queries return `last_evaluated` only when more rows exist past
//!   the returned page.

use crate::model::movement::{Movement, MovementKey};
use crate::store::migrations::latest_version;
use crate::store::StoreError;
use rusqlite::{params, Connection, Row};
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const MOVEMENTS_TABLE: &str = "movements";

const REQUIRED_COLUMNS: [&str; 7] = [
    "owner",
    "name",
    "kind",
    "description",
    "details",
    "created",
    "updated",
];

const MOVEMENT_SELECT_SQL: &str = "SELECT
    owner,
    name,
    kind,
    description,
    details,
    created,
    updated
FROM movements";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for movement persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    /// `update` targeted a key with no existing record.
    ConditionalCheckFailed(MovementKey),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::ConditionalCheckFailed(key) => write!(
                f,
                "conditional check failed: no movement for Owner: {} and Name: {}",
                key.owner, key.name
            ),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(StoreError::Sqlite(value))
    }
}

/// Query options for one page of an owner's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementQuery {
    /// Partition to scan.
    pub owner: String,
    /// Maximum rows to return.
    pub limit: u32,
    /// Exclusive start key from the previous page, if resuming.
    pub exclusive_start: Option<MovementKey>,
}

/// Mutable-field patch applied by the conditional update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementPatch {
    pub kind: String,
    pub description: String,
    pub details: String,
    /// Fresh `Updated` stamp; `created` is never part of a patch.
    pub updated: String,
}

/// One page of records for a single owner, in native key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovementPage {
    /// Number of items in this page.
    pub count: usize,
    pub items: Vec<Movement>,
    /// Continuation token; present only when more rows exist.
    #[serde(rename = "LastEvaluatedKey", skip_serializing_if = "Option::is_none")]
    pub last_evaluated: Option<MovementKey>,
}

/// Repository interface for movement store primitives.
pub trait MovementRepository {
    /// Inserts a record, silently replacing any record at the same key.
    fn put_movement(&mut self, movement: &Movement) -> RepoResult<()>;
    /// Conditionally patches the record at `key`; fails when absent.
    fn update_movement(&mut self, key: &MovementKey, patch: &MovementPatch)
        -> RepoResult<Movement>;
    /// Gets one record by key.
    fn get_movement(&self, key: &MovementKey) -> RepoResult<Option<Movement>>;
    /// Deletes the record at `key`, returning its prior value if any.
    fn delete_movement(&mut self, key: &MovementKey) -> RepoResult<Option<Movement>>;
    /// Returns one page of an owner's records.
    fn query_movements(&self, query: &MovementQuery) -> RepoResult<MovementPage>;
}

/// SQLite-backed movement repository.
pub struct SqliteMovementRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteMovementRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the schema
    ///   does not carry the movement shape this binary expects.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl MovementRepository for SqliteMovementRepository<'_> {
    fn put_movement(&mut self, movement: &Movement) -> RepoResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO movements (
                owner,
                name,
                kind,
                description,
                details,
                created,
                updated
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                movement.owner,
                movement.name,
                movement.kind,
                movement.description,
                movement.details,
                movement.created,
                movement.updated,
            ],
        )?;

        Ok(())
    }

    fn update_movement(
        &mut self,
        key: &MovementKey,
        patch: &MovementPatch,
    ) -> RepoResult<Movement> {
        let tx = self.conn.transaction()?;

        let changed = tx.execute(
            "UPDATE movements
             SET
                kind = ?1,
                description = ?2,
                details = ?3,
                updated = ?4
             WHERE owner = ?5 AND name = ?6;",
            params![
                patch.kind,
                patch.description,
                patch.details,
                patch.updated,
                key.owner,
                key.name,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::ConditionalCheckFailed(key.clone()));
        }

        // Read back inside the same transaction so the returned record is
        // exactly the post-update row.
        let movement = match select_movement(&tx, key)? {
            Some(movement) => movement,
            None => return Err(RepoError::ConditionalCheckFailed(key.clone())),
        };
        tx.commit()?;

        Ok(movement)
    }

    fn get_movement(&self, key: &MovementKey) -> RepoResult<Option<Movement>> {
        select_movement(&*self.conn, key)
    }

    fn delete_movement(&mut self, key: &MovementKey) -> RepoResult<Option<Movement>> {
        let tx = self.conn.transaction()?;

        let prior = select_movement(&tx, key)?;
        if prior.is_some() {
            tx.execute(
                "DELETE FROM movements WHERE owner = ?1 AND name = ?2;",
                params![key.owner, key.name],
            )?;
        }
        tx.commit()?;

        Ok(prior)
    }

    fn query_movements(&self, query: &MovementQuery) -> RepoResult<MovementPage> {
        // Fetch one row past the page to learn whether more results exist
        // without a second count query.
        let fetch_limit = i64::from(query.limit) + 1;
        let exclusive_start = query
            .exclusive_start
            .as_ref()
            .map(|key| key.name.as_str());

        let mut stmt = self.conn.prepare(&format!(
            "{MOVEMENT_SELECT_SQL}
             WHERE owner = ?1
               AND (?2 IS NULL OR name > ?2)
             ORDER BY name
             LIMIT ?3;"
        ))?;

        let mut rows = stmt.query(params![query.owner, exclusive_start, fetch_limit])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_movement_row(row)?);
        }

        let last_evaluated = if items.len() > query.limit as usize {
            items.truncate(query.limit as usize);
            items.last().map(Movement::key)
        } else {
            None
        };

        Ok(MovementPage {
            count: items.len(),
            items,
            last_evaluated,
        })
    }
}

fn select_movement(conn: &Connection, key: &MovementKey) -> RepoResult<Option<Movement>> {
    let mut stmt = conn.prepare(&format!(
        "{MOVEMENT_SELECT_SQL}
         WHERE owner = ?1 AND name = ?2;"
    ))?;

    let mut rows = stmt.query(params![key.owner, key.name])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_movement_row(row)?));
    }

    Ok(None)
}

fn parse_movement_row(row: &Row<'_>) -> RepoResult<Movement> {
    Ok(Movement {
        owner: row.get("owner")?,
        name: row.get("name")?,
        kind: row.get("kind")?,
        description: row.get("description")?,
        details: row.get("details")?,
        created: row.get("created")?,
        updated: row.get("updated")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_count: u32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
        [MOVEMENTS_TABLE],
        |row| row.get(0),
    )?;
    if table_count == 0 {
        return Err(RepoError::MissingRequiredTable(MOVEMENTS_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let mut rows = stmt.query([MOVEMENTS_TABLE])?;
    let mut present = HashSet::new();
    while let Some(row) = rows.next()? {
        present.insert(row.get::<_, String>(0)?);
    }

    for column in REQUIRED_COLUMNS {
        if !present.contains(column) {
            return Err(RepoError::MissingRequiredColumn {
                table: MOVEMENTS_TABLE,
                column,
            });
        }
    }

    Ok(())
}
