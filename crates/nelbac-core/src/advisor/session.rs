//! Advisor chat session: one explicitly constructed object owning the
//! session id and transcript. Created where first needed and passed
//! down; there is no ambient global session.

use super::providers::AdvisorProvider;
use super::{ChatMessage, CLEARED_MESSAGE, FALLBACK_REPLY, WELCOME_MESSAGE};
use crate::storage::{ChatRepository, Database};
use crate::Result;

pub struct AdvisorSession {
    session_id: String,
    messages: Vec<ChatMessage>,
    db: Database,
}

impl AdvisorSession {
    /// Open the persisted session, creating it (and the greeting) on
    /// first use.
    pub async fn open(db: Database) -> Result<Self> {
        let repo = ChatRepository::new(&db);
        let session_id = repo.get_or_create_session().await?;
        let mut messages = repo.history(&session_id).await?;

        if messages.is_empty() {
            let welcome = ChatMessage::advisor(WELCOME_MESSAGE);
            repo.append_message(&session_id, &welcome).await?;
            messages.push(welcome);
        }

        Ok(Self {
            session_id,
            messages,
            db,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send one user message and append the reply.
    ///
    /// Both sides of the exchange are persisted as they happen. A failed
    /// provider call is logged and surfaces as the fixed fallback reply;
    /// it never bubbles an error into the chat flow.
    pub async fn send(&mut self, provider: &dyn AdvisorProvider, prompt: &str) -> Result<String> {
        let repo = ChatRepository::new(&self.db);

        let user_message = ChatMessage::user(prompt);
        repo.append_message(&self.session_id, &user_message).await?;
        self.messages.push(user_message);

        let reply_text = match provider.advise(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Advisor request failed: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };

        let reply = ChatMessage::advisor(reply_text.clone());
        repo.append_message(&self.session_id, &reply).await?;
        self.messages.push(reply);

        Ok(reply_text)
    }

    /// Wipe the transcript; the session id survives.
    pub async fn clear(&mut self) -> Result<()> {
        let repo = ChatRepository::new(&self.db);
        repo.clear(&self.session_id).await?;

        let cleared = ChatMessage::advisor(CLEARED_MESSAGE);
        repo.append_message(&self.session_id, &cleared).await?;
        self.messages = vec![cleared];

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::ChatRole;
    use crate::{Error, Result};

    struct CannedProvider(Option<String>);

    #[async_trait::async_trait]
    impl AdvisorProvider for CannedProvider {
        async fn advise(&self, _prompt: &str) -> Result<String> {
            match &self.0 {
                Some(reply) => Ok(reply.clone()),
                None => Err(Error::AdvisorProvider("link down".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn fresh_session_starts_with_the_greeting() {
        let db = Database::new_in_memory().await.unwrap();
        let session = AdvisorSession::open(db).await.unwrap();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].content, WELCOME_MESSAGE);
    }

    #[tokio::test]
    async fn exchange_is_persisted_after_every_message() {
        let db = Database::new_in_memory().await.unwrap();
        let mut session = AdvisorSession::open(db.clone()).await.unwrap();

        let provider = CannedProvider(Some("Start with the NBGATV3.2.".to_string()));
        let reply = session.send(&provider, "what should I buy?").await.unwrap();
        assert_eq!(reply, "Start with the NBGATV3.2.");

        let repo = ChatRepository::new(&db);
        let history = repo.history(session.session_id()).await.unwrap();
        assert_eq!(history.len(), 3); // greeting + user + reply
        assert_eq!(history[1].role, ChatRole::User);
        assert_eq!(history[2].content, "Start with the NBGATV3.2.");
    }

    #[tokio::test]
    async fn provider_failure_yields_the_fallback_reply() {
        let db = Database::new_in_memory().await.unwrap();
        let mut session = AdvisorSession::open(db).await.unwrap();

        let provider = CannedProvider(None);
        let reply = session.send(&provider, "hello?").await.unwrap();
        assert_eq!(reply, FALLBACK_REPLY);
        assert_eq!(session.messages().last().unwrap().content, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn clear_resets_to_the_cleared_notice() {
        let db = Database::new_in_memory().await.unwrap();
        let mut session = AdvisorSession::open(db).await.unwrap();
        let id_before = session.session_id().to_string();

        let provider = CannedProvider(Some("ok".to_string()));
        session.send(&provider, "hi").await.unwrap();
        session.clear().await.unwrap();

        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].content, CLEARED_MESSAGE);
        assert_eq!(session.session_id(), id_before);
    }
}
