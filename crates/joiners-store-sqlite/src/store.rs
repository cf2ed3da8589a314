//! [`SqliteStore`] — the SQLite implementation of [`JoinerStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use tracing::warn;
use uuid::Uuid;

use joiners_core::{
  joiner::{CreateJoiner, Joiner},
  page::{Page, Pagination},
  store::JoinerStore,
};

use crate::{
  Error, Result,
  encode::{JOINER_COLUMNS, RawJoiner, encode_dt, encode_enum, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A joiner store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Whether `e` is SQLite rejecting a write because of a `UNIQUE` index.
fn is_unique_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(f, _)
      if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

// ─── JoinerStore impl ────────────────────────────────────────────────────────

impl JoinerStore for SqliteStore {
  type Error = Error;

  async fn insert_joiner(&self, input: CreateJoiner) -> Result<Joiner> {
    let now = Utc::now();
    let joiner = Joiner {
      id:                    Uuid::new_v4(),
      identification_number: input.identification_number,
      name:                  input.name,
      last_name:             input.last_name,
      role:                  input.role,
      stack:                 input.stack,
      english_level:         input.english_level,
      domain_experience:     input.domain_experience,
      created_at:            now,
      updated_at:            now,
    };

    let id_str     = encode_uuid(joiner.id);
    let number     = joiner.identification_number;
    let name       = joiner.name.clone();
    let last_name  = joiner.last_name.clone();
    let role       = encode_enum(joiner.role);
    let stack      = encode_enum(joiner.stack);
    let english    = encode_enum(joiner.english_level);
    let experience = encode_enum(joiner.domain_experience);
    let at_str     = encode_dt(now);

    let inserted = self
      .conn
      .call(move |conn| {
        let res = conn.execute(
          "INSERT INTO joiners (
             joiner_id, identification_number, name, last_name,
             role, stack, english_level, domain_experience,
             created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
          rusqlite::params![
            id_str, number, name, last_name, role, stack, english, experience,
            at_str,
          ],
        );
        match res {
          Err(e) if is_unique_violation(&e) => Ok(false),
          other => {
            other?;
            Ok(true)
          }
        }
      })
      .await?;

    if !inserted {
      warn!(
        identification_number = number,
        "insert rejected by unique constraint"
      );
      return Err(Error::DuplicateIdentification(number));
    }

    Ok(joiner)
  }

  async fn get_joiner(&self, id: Uuid) -> Result<Option<Joiner>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawJoiner> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {JOINER_COLUMNS} FROM joiners WHERE joiner_id = ?1"),
              rusqlite::params![id_str],
              RawJoiner::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawJoiner::into_joiner).transpose()
  }

  async fn identification_taken(
    &self,
    identification_number: i64,
    exclude: Option<Uuid>,
  ) -> Result<bool> {
    let exclude_str = exclude.map(encode_uuid);

    let taken = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM joiners
               WHERE identification_number = ?1
                 AND (?2 IS NULL OR joiner_id != ?2)",
              rusqlite::params![identification_number, exclude_str],
              |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false),
        )
      })
      .await?;

    Ok(taken)
  }

  async fn replace_joiner(&self, joiner: Joiner) -> Result<Joiner> {
    let joiner = Joiner { updated_at: Utc::now(), ..joiner };

    let id_str     = encode_uuid(joiner.id);
    let number     = joiner.identification_number;
    let name       = joiner.name.clone();
    let last_name  = joiner.last_name.clone();
    let role       = encode_enum(joiner.role);
    let stack      = encode_enum(joiner.stack);
    let english    = encode_enum(joiner.english_level);
    let experience = encode_enum(joiner.domain_experience);
    let at_str     = encode_dt(joiner.updated_at);

    // `None` means the unique constraint fired.
    let changed: Option<usize> = self
      .conn
      .call(move |conn| {
        let res = conn.execute(
          "UPDATE joiners SET
             identification_number = ?2, name = ?3, last_name = ?4,
             role = ?5, stack = ?6, english_level = ?7,
             domain_experience = ?8, updated_at = ?9
           WHERE joiner_id = ?1",
          rusqlite::params![
            id_str, number, name, last_name, role, stack, english, experience,
            at_str,
          ],
        );
        match res {
          Err(e) if is_unique_violation(&e) => Ok(None),
          other => Ok(Some(other?)),
        }
      })
      .await?;

    match changed {
      None => {
        warn!(
          joiner_id = %joiner.id,
          identification_number = number,
          "update rejected by unique constraint"
        );
        Err(Error::DuplicateIdentification(number))
      }
      Some(0) => Err(Error::JoinerNotFound(joiner.id)),
      Some(_) => Ok(joiner),
    }
  }

  async fn list_joiners(&self, pagination: Pagination) -> Result<Page<Joiner>> {
    let limit_val  = i64::from(pagination.limit);
    let offset_val = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);

    let (total, raws): (i64, Vec<RawJoiner>) = self
      .conn
      .call(move |conn| {
        let total: i64 =
          conn.query_row("SELECT COUNT(*) FROM joiners", [], |r| r.get(0))?;

        let mut stmt = conn.prepare(&format!(
          "SELECT {JOINER_COLUMNS} FROM joiners
           ORDER BY created_at, rowid
           LIMIT ?1 OFFSET ?2"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val, offset_val], RawJoiner::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((total, rows))
      })
      .await?;

    let joiners = raws
      .into_iter()
      .map(RawJoiner::into_joiner)
      .collect::<Result<Vec<_>>>()?;

    Ok(Page::new(joiners, pagination, total.max(0) as u64))
  }
}
