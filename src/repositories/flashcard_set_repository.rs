use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::FlashcardSet};

#[async_trait]
pub trait FlashcardSetRepository: Send + Sync {
    async fn insert(&self, set: FlashcardSet) -> AppResult<FlashcardSet>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<FlashcardSet>>;
    async fn list(&self) -> AppResult<Vec<FlashcardSet>>;
    /// Returns whether a set with `id` existed.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;
}

/// Session-lifetime history, newest set first. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryFlashcardSetRepository {
    sets: RwLock<Vec<FlashcardSet>>,
}

impl InMemoryFlashcardSetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlashcardSetRepository for InMemoryFlashcardSetRepository {
    async fn insert(&self, set: FlashcardSet) -> AppResult<FlashcardSet> {
        let mut sets = self.sets.write().await;
        sets.insert(0, set.clone());
        Ok(set)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<FlashcardSet>> {
        let sets = self.sets.read().await;
        Ok(sets.iter().find(|s| s.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<FlashcardSet>> {
        let sets = self.sets.read().await;
        Ok(sets.clone())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let mut sets = self.sets.write().await;
        let before = sets.len();
        sets.retain(|s| s.id != id);
        Ok(sets.len() != before)
    }
}
