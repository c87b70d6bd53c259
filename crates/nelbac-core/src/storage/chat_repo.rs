use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::Database;
use crate::advisor::{ChatMessage, ChatRole};
use crate::Result;

/// Repository for chat session and transcript persistence
pub struct ChatRepository<'a> {
    db: &'a Database,
}

#[derive(FromRow)]
struct MessageRow {
    role: String,
    content: String,
}

impl From<MessageRow> for ChatMessage {
    fn from(row: MessageRow) -> Self {
        ChatMessage {
            role: ChatRole::parse_role(&row.role),
            content: row.content,
        }
    }
}

impl<'a> ChatRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Return the persisted session id, creating one on first use.
    pub async fn get_or_create_session(&self) -> Result<String> {
        let existing: Option<(String,)> =
            sqlx::query_as("SELECT id FROM chat_sessions ORDER BY created_at LIMIT 1")
                .fetch_optional(self.db.pool())
                .await?;

        if let Some((id,)) = existing {
            return Ok(id);
        }

        let id = Uuid::new_v4().to_string();
        let now: DateTime<Utc> = Utc::now();
        sqlx::query("INSERT INTO chat_sessions (id, created_at) VALUES (?, ?)")
            .bind(&id)
            .bind(now)
            .execute(self.db.pool())
            .await?;

        tracing::info!("Created advisor session {}", id);
        Ok(id)
    }

    /// Append one message to the transcript.
    pub async fn append_message(&self, session_id: &str, message: &ChatMessage) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        sqlx::query(
            "INSERT INTO chat_messages (id, session_id, role, content, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(session_id)
        .bind(message.role.as_str())
        .bind(&message.content)
        .bind(now)
        .execute(self.db.pool())
        .await?;

        Ok(())
    }

    /// Load the ordered transcript for a session.
    pub async fn history(&self, session_id: &str) -> Result<Vec<ChatMessage>> {
        let rows: Vec<MessageRow> = sqlx::query_as(
            "SELECT role, content FROM chat_messages \
             WHERE session_id = ? ORDER BY created_at, id",
        )
        .bind(session_id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Wipe the transcript, keeping the session id.
    pub async fn clear(&self, session_id: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM chat_messages WHERE session_id = ?")
            .bind(session_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn session_id_is_stable_across_lookups() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = ChatRepository::new(&db);

        let first = repo.get_or_create_session().await.unwrap();
        let second = repo.get_or_create_session().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn transcript_round_trips_in_order() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = ChatRepository::new(&db);
        let session = repo.get_or_create_session().await.unwrap();

        repo.append_message(&session, &ChatMessage::user("need a 4 zone setup"))
            .await
            .unwrap();
        repo.append_message(&session, &ChatMessage::advisor("NBGATV3.4 fits"))
            .await
            .unwrap();

        let history = repo.history(&session).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, ChatRole::User);
        assert_eq!(history[1].role, ChatRole::Advisor);
        assert_eq!(history[1].content, "NBGATV3.4 fits");
    }

    #[tokio::test]
    async fn clear_empties_transcript_but_keeps_session() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = ChatRepository::new(&db);
        let session = repo.get_or_create_session().await.unwrap();

        repo.append_message(&session, &ChatMessage::user("hello"))
            .await
            .unwrap();
        let removed = repo.clear(&session).await.unwrap();
        assert_eq!(removed, 1);
        assert!(repo.history(&session).await.unwrap().is_empty());
        assert_eq!(repo.get_or_create_session().await.unwrap(), session);
    }
}
