/**
 * SQLite Storage
 *
 * `SqliteStore` persists notes and comments with `sqlx`. Schema changes
 * live in `migrations/` and are embedded at compile time.
 *
 * # Connections
 *
 * File databases get a small pool and are created if missing. In-memory
 * databases (`sqlite::memory:`) exist per connection, so they get a single
 * connection that is never recycled.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::backend::error::BackendError;
use crate::backend::store::BoardStore;
use crate::shared::{Comment, NewComment, NewNote, NoteType, StickyNote};

const NOTE_COLUMNS: &str = "id, note_type, content, position_x, position_y, width, height, \
                            color, created_by, created_at, updated_at";

const COMMENT_COLUMNS: &str = "id, content, author, created_at, sticky_note_id";

#[derive(sqlx::FromRow)]
struct NoteRow {
    id: i64,
    note_type: String,
    content: Option<String>,
    position_x: f64,
    position_y: f64,
    width: i32,
    height: i32,
    color: String,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NoteRow> for StickyNote {
    type Error = sqlx::Error;

    fn try_from(row: NoteRow) -> Result<Self, Self::Error> {
        let note_type = row
            .note_type
            .parse::<NoteType>()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(StickyNote {
            id: row.id,
            note_type,
            content: row.content,
            position_x: row.position_x,
            position_y: row.position_y,
            width: row.width,
            height: row.height,
            color: row.color,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    content: String,
    author: String,
    created_at: DateTime<Utc>,
    sticky_note_id: i64,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            content: row.content,
            author: row.author,
            sticky_note_id: row.sticky_note_id,
            created_at: row.created_at,
        }
    }
}

/// `sqlx`-backed board storage
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to a SQLite database URL
    ///
    /// Foreign keys are enforced on every connection.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        tracing::info!("[Store] Connected to {}", database_url);

        Ok(Self { pool })
    }

    /// Connect and run migrations
    pub async fn open(database_url: &str) -> Result<Self, BackendError> {
        let store = Self::connect(database_url).await?;
        store.migrate().await?;
        Ok(store)
    }

    /// Fresh, migrated in-memory database
    pub async fn in_memory() -> Result<Self, BackendError> {
        Self::open("sqlite::memory:").await
    }

    /// Apply embedded migrations
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        tracing::info!("[Store] Running database migrations...");
        sqlx::migrate!().run(&self.pool).await?;
        tracing::info!("[Store] Database migrations completed successfully");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl BoardStore for SqliteStore {
    async fn list_notes(&self) -> Result<Vec<StickyNote>, sqlx::Error> {
        let sql = format!("SELECT {NOTE_COLUMNS} FROM sticky_notes ORDER BY id ASC");
        let rows = sqlx::query_as::<_, NoteRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(StickyNote::try_from).collect()
    }

    async fn find_note(&self, id: i64) -> Result<Option<StickyNote>, sqlx::Error> {
        let sql = format!("SELECT {NOTE_COLUMNS} FROM sticky_notes WHERE id = ?");
        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(StickyNote::try_from).transpose()
    }

    async fn insert_note(&self, note: NewNote) -> Result<StickyNote, sqlx::Error> {
        let now = Utc::now();
        let sql = format!(
            r#"
            INSERT INTO sticky_notes
                (note_type, content, position_x, position_y, width, height,
                 color, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {NOTE_COLUMNS}
            "#
        );

        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(note.note_type.as_str())
            .bind(&note.content)
            .bind(note.position_x)
            .bind(note.position_y)
            .bind(note.width)
            .bind(note.height)
            .bind(&note.color)
            .bind(&note.created_by)
            .bind(now)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        StickyNote::try_from(row)
    }

    async fn update_note_position(
        &self,
        id: i64,
        x: f64,
        y: f64,
    ) -> Result<Option<StickyNote>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE sticky_notes
            SET position_x = ?, position_y = ?, updated_at = ?
            WHERE id = ?
            RETURNING {NOTE_COLUMNS}
            "#
        );

        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(x)
            .bind(y)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        row.map(StickyNote::try_from).transpose()
    }

    async fn delete_note(&self, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let comments = sqlx::query("DELETE FROM comments WHERE sticky_note_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let notes = sqlx::query("DELETE FROM sticky_notes WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            "[Store] Deleted note {} ({} rows) and {} comments",
            id,
            notes.rows_affected(),
            comments.rows_affected()
        );

        Ok(notes.rows_affected() > 0)
    }

    async fn list_comments(&self, note_id: i64) -> Result<Vec<Comment>, sqlx::Error> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE sticky_note_id = ? ORDER BY id ASC"
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(note_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn insert_comment(&self, comment: NewComment) -> Result<Option<Comment>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let parent: Option<i64> = sqlx::query_scalar("SELECT id FROM sticky_notes WHERE id = ?")
            .bind(comment.sticky_note_id)
            .fetch_optional(&mut *tx)
            .await?;

        if parent.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let sql = format!(
            r#"
            INSERT INTO comments (content, author, created_at, sticky_note_id)
            VALUES (?, ?, ?, ?)
            RETURNING {COMMENT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(&comment.content)
            .bind(&comment.author)
            .bind(Utc::now())
            .bind(comment.sticky_note_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(Some(Comment::from(row)))
    }
}
