//! Song repository backed by the `songs` table.

use crate::db::DbPool;
use crate::{MusicHubError, Result};

use super::model::{NewSong, Song};

/// Repository for song operations.
pub struct SongRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> SongRepository<'a> {
    /// Create a new SongRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a song and return the stored row.
    pub async fn create(&self, song: &NewSong) -> Result<Song> {
        let result = sqlx::query("INSERT INTO songs (title, file_path, file_type) VALUES (?, ?, ?)")
            .bind(&song.title)
            .bind(&song.file_path)
            .bind(song.media_type.as_str())
            .execute(self.pool)
            .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| MusicHubError::NotFound("Song".to_string()))
    }

    /// Get a song by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Song>> {
        let song = sqlx::query_as::<_, Song>(
            "SELECT id, title, file_path, file_type, created_at FROM songs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(song)
    }

    /// List all songs, newest first.
    pub async fn list(&self) -> Result<Vec<Song>> {
        let songs = sqlx::query_as::<_, Song>(
            "SELECT id, title, file_path, file_type, created_at
             FROM songs ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(songs)
    }

    /// Get the storage path of a song.
    pub async fn get_file_path(&self, id: i64) -> Result<Option<String>> {
        let path = sqlx::query_scalar::<_, String>("SELECT file_path FROM songs WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(path)
    }

    /// Get the storage paths of every song.
    pub async fn list_file_paths(&self) -> Result<Vec<String>> {
        let paths = sqlx::query_scalar::<_, String>("SELECT file_path FROM songs")
            .fetch_all(self.pool)
            .await?;

        Ok(paths)
    }

    /// Delete a song by ID.
    ///
    /// Returns `false` if no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM songs WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every song and reset the ID sequence so numbering restarts at 1.
    ///
    /// Returns the number of deleted rows.
    pub async fn clear(&self) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM songs")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'songs'")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(deleted)
    }

    /// Count all songs.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::MediaType;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    fn new_song(title: &str, stored: &str) -> NewSong {
        NewSong::new(title, format!("uploads/{stored}"), MediaType::Mp3)
    }

    #[tokio::test]
    async fn test_create_song() {
        let db = setup_db().await;
        let repo = SongRepository::new(db.pool());

        let song = repo
            .create(&NewSong::new("My Track", "uploads/abc.mp4", MediaType::Mp4))
            .await
            .unwrap();

        assert_eq!(song.id, 1);
        assert_eq!(song.title, "My Track");
        assert_eq!(song.file_path, "uploads/abc.mp4");
        assert_eq!(song.file_type, "mp4");
        assert!(!song.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let db = setup_db().await;
        let repo = SongRepository::new(db.pool());

        let first = repo.create(&new_song("a", "a.mp3")).await.unwrap();
        let second = repo.create(&new_song("b", "b.mp3")).await.unwrap();
        repo.delete(second.id).await.unwrap();
        let third = repo.create(&new_song("c", "c.mp3")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        // AUTOINCREMENT never reuses a deleted id
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_get_song_not_found() {
        let db = setup_db().await;
        let repo = SongRepository::new(db.pool());

        assert!(repo.get_by_id(9999).await.unwrap().is_none());
        assert!(repo.get_file_path(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let db = setup_db().await;
        let repo = SongRepository::new(db.pool());

        repo.create(&new_song("first", "1.mp3")).await.unwrap();
        repo.create(&new_song("second", "2.mp3")).await.unwrap();
        repo.create(&new_song("third", "3.mp3")).await.unwrap();

        let songs = repo.list().await.unwrap();
        let titles: Vec<_> = songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_list_orders_by_created_at() {
        let db = setup_db().await;
        let repo = SongRepository::new(db.pool());

        sqlx::query(
            "INSERT INTO songs (title, file_path, file_type, created_at) VALUES
             ('old', 'uploads/o.mp3', 'mp3', '2023-01-01 00:00:00'),
             ('new', 'uploads/n.mp3', 'mp3', '2024-01-01 00:00:00')",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let songs = repo.list().await.unwrap();
        assert_eq!(songs[0].title, "new");
        assert_eq!(songs[1].title, "old");
    }

    #[tokio::test]
    async fn test_delete_song() {
        let db = setup_db().await;
        let repo = SongRepository::new(db.pool());

        let song = repo.create(&new_song("gone", "g.mp3")).await.unwrap();

        assert!(repo.delete(song.id).await.unwrap());
        assert!(repo.get_by_id(song.id).await.unwrap().is_none());
        assert!(!repo.delete(song.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_file_paths() {
        let db = setup_db().await;
        let repo = SongRepository::new(db.pool());

        repo.create(&new_song("a", "a.mp3")).await.unwrap();
        repo.create(&new_song("b", "b.mp3")).await.unwrap();

        let mut paths = repo.list_file_paths().await.unwrap();
        paths.sort();
        assert_eq!(paths, vec!["uploads/a.mp3", "uploads/b.mp3"]);
    }

    #[tokio::test]
    async fn test_clear_resets_sequence() {
        let db = setup_db().await;
        let repo = SongRepository::new(db.pool());

        repo.create(&new_song("a", "a.mp3")).await.unwrap();
        repo.create(&new_song("b", "b.mp3")).await.unwrap();

        assert_eq!(repo.clear().await.unwrap(), 2);
        assert_eq!(repo.count().await.unwrap(), 0);

        let song = repo.create(&new_song("fresh", "f.mp3")).await.unwrap();
        assert_eq!(song.id, 1);
    }

    #[tokio::test]
    async fn test_clear_empty_table() {
        let db = setup_db().await;
        let repo = SongRepository::new(db.pool());

        assert_eq!(repo.clear().await.unwrap(), 0);
    }
}
