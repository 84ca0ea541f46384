use crate::db::models::{DbAdmin, DbHalaman, DbLoker, NewLoker, PublishFilter};
use crate::db::schema::SQLITE_INIT;
use crate::error::PortalError;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, QueryBuilder, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

const LOKER_COLUMNS: &str = "id, judul, nama_perusahaan, logo_perusahaan, lokasi, deskripsi, \
     kualifikasi, cara_melamar, batas_waktu, is_published, created_at, updated_at";

#[derive(Clone)]
pub struct PortalStorage {
    pool: SqlitePool,
}

impl PortalStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database at `database_url` and apply the schema.
    pub async fn connect(database_url: &str) -> Result<Self, PortalError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Single-connection in-memory database; every pooled connection would
    /// otherwise see its own empty database.
    pub async fn in_memory() -> Result<Self, PortalError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), PortalError> {
        // execute statement by statement (sqlx::query runs one at a time)
        for stmt in SQLITE_INIT.split(';') {
            let s = strip_sql_comments(stmt);
            if s.is_empty() {
                continue;
            }
            sqlx::query(&s).execute(&self.pool).await?;
        }
        Ok(())
    }

    // ---- admins ----

    pub async fn find_admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<DbAdmin>, PortalError> {
        let row = sqlx::query("SELECT id, username, email, password FROM admins WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| -> Result<DbAdmin, PortalError> {
            Ok(DbAdmin {
                id: row.try_get("id")?,
                username: row.try_get("username")?,
                email: row.try_get("email")?,
                password_hash: row.try_get("password")?,
            })
        })
        .transpose()
    }

    /// Insert the admin unless the username already exists. Returns the row id.
    pub async fn upsert_admin(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, PortalError> {
        sqlx::query(
            r#"
            INSERT INTO admins (username, email, password, created_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(username) DO NOTHING
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(timestamp(&Utc::now()))
        .execute(&self.pool)
        .await?;

        let rec: (i64,) = sqlx::query_as("SELECT id FROM admins WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    // ---- halaman ----

    pub async fn list_halaman(&self) -> Result<Vec<DbHalaman>, PortalError> {
        let rows = sqlx::query(
            r#"SELECT id, slug, judul, konten, created_at, updated_at
               FROM halaman ORDER BY created_at ASC, id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_halaman).collect()
    }

    pub async fn get_halaman(&self, slug: &str) -> Result<Option<DbHalaman>, PortalError> {
        let row = sqlx::query(
            r#"SELECT id, slug, judul, konten, created_at, updated_at
               FROM halaman WHERE slug = ?"#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_halaman).transpose()
    }

    /// Update title and content of an existing page. Fails with `RowNotFound`
    /// when the slug is unknown.
    pub async fn update_halaman(
        &self,
        slug: &str,
        judul: &str,
        konten: &str,
    ) -> Result<DbHalaman, PortalError> {
        let res = sqlx::query("UPDATE halaman SET judul = ?, konten = ?, updated_at = ? WHERE slug = ?")
            .bind(judul)
            .bind(konten)
            .bind(timestamp(&Utc::now()))
            .bind(slug)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound.into());
        }
        self.get_halaman(slug)
            .await?
            .ok_or_else(|| sqlx::Error::RowNotFound.into())
    }

    /// Insert a page unless its slug already exists. Returns whether a row was added.
    pub async fn insert_halaman_if_missing(
        &self,
        slug: &str,
        judul: &str,
        konten: &str,
    ) -> Result<bool, PortalError> {
        let now = timestamp(&Utc::now());
        let res = sqlx::query(
            r#"
            INSERT INTO halaman (slug, judul, konten, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(slug) DO NOTHING
            "#,
        )
        .bind(slug)
        .bind(judul)
        .bind(konten)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn count_halaman(&self) -> Result<i64, PortalError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM halaman")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    // ---- loker ----

    /// Newest first, filtered by publish status.
    pub async fn list_loker(
        &self,
        filter: PublishFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DbLoker>, PortalError> {
        let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT {LOKER_COLUMNS} FROM loker"));
        if let Some(flag) = filter.as_flag() {
            qb.push(" WHERE is_published = ").push_bind(flag as i64);
        }
        qb.push(" ORDER BY created_at DESC, id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);
        let rows = qb.build().fetch_all(&self.pool).await?;
        rows.into_iter().map(Self::row_to_loker).collect()
    }

    pub async fn count_loker(&self, filter: PublishFilter) -> Result<i64, PortalError> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM loker");
        if let Some(flag) = filter.as_flag() {
            qb.push(" WHERE is_published = ").push_bind(flag as i64);
        }
        let rec: (i64,) = qb.build_query_as().fetch_one(&self.pool).await?;
        Ok(rec.0)
    }

    pub async fn get_loker(&self, id: i64) -> Result<Option<DbLoker>, PortalError> {
        let row = sqlx::query(&format!("SELECT {LOKER_COLUMNS} FROM loker WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_loker).transpose()
    }

    pub async fn create_loker(&self, new: NewLoker) -> Result<DbLoker, PortalError> {
        let now = Utc::now().trunc_subsecs(6);
        let res = sqlx::query(
            r#"
            INSERT INTO loker (
                judul, nama_perusahaan, logo_perusahaan, lokasi, deskripsi,
                kualifikasi, cara_melamar, batas_waktu, is_published,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.judul)
        .bind(&new.nama_perusahaan)
        .bind(&new.logo_perusahaan)
        .bind(&new.lokasi)
        .bind(&new.deskripsi)
        .bind(&new.kualifikasi)
        .bind(&new.cara_melamar)
        .bind(timestamp(&new.batas_waktu))
        .bind(new.is_published as i64)
        .bind(timestamp(&now))
        .bind(timestamp(&now))
        .execute(&self.pool)
        .await?;

        Ok(DbLoker {
            id: res.last_insert_rowid(),
            judul: new.judul,
            nama_perusahaan: new.nama_perusahaan,
            logo_perusahaan: new.logo_perusahaan,
            lokasi: new.lokasi,
            deskripsi: new.deskripsi,
            kualifikasi: new.kualifikasi,
            cara_melamar: new.cara_melamar,
            batas_waktu: new.batas_waktu,
            is_published: new.is_published,
            created_at: now,
            updated_at: now,
        })
    }

    /// Write every mutable column of a (merged) record and bump `updated_at`.
    /// Last write wins; there is no version check.
    pub async fn save_loker(&self, mut loker: DbLoker) -> Result<DbLoker, PortalError> {
        loker.updated_at = Utc::now().trunc_subsecs(6);
        let res = sqlx::query(
            r#"UPDATE loker SET
                judul = ?,
                nama_perusahaan = ?,
                logo_perusahaan = ?,
                lokasi = ?,
                deskripsi = ?,
                kualifikasi = ?,
                cara_melamar = ?,
                batas_waktu = ?,
                is_published = ?,
                updated_at = ?
              WHERE id = ?"#,
        )
        .bind(&loker.judul)
        .bind(&loker.nama_perusahaan)
        .bind(&loker.logo_perusahaan)
        .bind(&loker.lokasi)
        .bind(&loker.deskripsi)
        .bind(&loker.kualifikasi)
        .bind(&loker.cara_melamar)
        .bind(timestamp(&loker.batas_waktu))
        .bind(loker.is_published as i64)
        .bind(timestamp(&loker.updated_at))
        .bind(loker.id)
        .execute(&self.pool)
        .await?;
        if res.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound.into());
        }
        Ok(loker)
    }

    /// Returns `false` when no row had this id.
    pub async fn delete_loker(&self, id: i64) -> Result<bool, PortalError> {
        let res = sqlx::query("DELETE FROM loker WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    fn row_to_halaman(row: SqliteRow) -> Result<DbHalaman, PortalError> {
        Ok(DbHalaman {
            id: row.try_get("id")?,
            slug: row.try_get("slug")?,
            judul: row.try_get("judul")?,
            konten: row.try_get("konten")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    fn row_to_loker(row: SqliteRow) -> Result<DbLoker, PortalError> {
        let status_i: i64 = row.try_get("is_published")?;
        Ok(DbLoker {
            id: row.try_get("id")?,
            judul: row.try_get("judul")?,
            nama_perusahaan: row.try_get("nama_perusahaan")?,
            logo_perusahaan: row.try_get("logo_perusahaan")?,
            lokasi: row.try_get("lokasi")?,
            deskripsi: row.try_get("deskripsi")?,
            kualifikasi: row.try_get("kualifikasi")?,
            cara_melamar: row.try_get("cara_melamar")?,
            batas_waktu: parse_timestamp(row.try_get("batas_waktu")?)?,
            is_published: status_i != 0,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }
}

/// Fixed-width RFC3339 so text ordering matches time ordering.
fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: String) -> Result<DateTime<Utc>, PortalError> {
    let parsed = DateTime::parse_from_rfc3339(&value).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    Ok(parsed.with_timezone(&Utc))
}

fn strip_sql_comments(stmt: &str) -> String {
    stmt.lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
