use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    models::{Entry, EntryDraft, EntryId, Suggestions},
    ports::{inbound::EntryService, outbound::EntryRepository},
    EntryError, PageLimits,
};

pub struct EntryServiceImpl<R> {
    repository: Arc<R>,
    limits: PageLimits,
}

impl<R> EntryServiceImpl<R> {
    pub fn new(repository: Arc<R>, limits: PageLimits) -> Self {
        Self { repository, limits }
    }
}

#[async_trait]
impl<R: EntryRepository> EntryService for EntryServiceImpl<R> {
    async fn search(&self, query: &str) -> Result<Vec<Entry>, EntryError> {
        let entries = self.repository.list().await?;
        if query.is_empty() {
            return Ok(entries);
        }

        let needle = query.to_lowercase();
        Ok(entries
            .into_iter()
            .filter(|entry| entry.matches(&needle))
            .collect())
    }

    async fn create(&self, draft: EntryDraft) -> Result<Entry, EntryError> {
        let fields = draft.validate(&self.limits)?;
        let entry = Entry::new(EntryId::generate(), fields, OffsetDateTime::now_utc());
        self.repository.insert(entry.clone()).await?;
        Ok(entry)
    }

    async fn update(&self, id: &EntryId, draft: EntryDraft) -> Result<Entry, EntryError> {
        // An unknown id wins over an invalid draft.
        if !self.repository.contains(id).await? {
            return Err(EntryError::NotFound(id.clone()));
        }

        let fields = draft.validate(&self.limits)?;
        self.repository.replace(id, fields).await
    }

    async fn delete(&self, id: &EntryId) -> Result<(), EntryError> {
        self.repository.remove(id).await
    }

    async fn suggestions(&self) -> Result<Suggestions, EntryError> {
        let entries = self.repository.list().await?;
        Ok(Suggestions::from_entries(&entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::InMemoryEntryRepository;

    fn service() -> EntryServiceImpl<InMemoryEntryRepository> {
        EntryServiceImpl::new(
            Arc::new(InMemoryEntryRepository::new()),
            PageLimits::default(),
        )
    }

    fn draft(title: &str, author: &str) -> EntryDraft {
        EntryDraft {
            title: title.to_string(),
            author: author.to_string(),
            date: "2024-01-01".to_string(),
            page: Some("10".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn created_entries_are_listed_newest_first() {
        let service = service();
        service.create(draft("Dune", "Frank Herbert")).await.unwrap();
        service
            .create(draft("Foundation", "Isaac Asimov"))
            .await
            .unwrap();

        let titles: Vec<_> = service
            .search("")
            .await
            .unwrap()
            .into_iter()
            .map(|entry| entry.title)
            .collect();

        assert_eq!(titles, vec!["Foundation", "Dune"]);
    }

    #[tokio::test]
    async fn search_matches_title_and_author() {
        let service = service();
        service.create(draft("Dune", "Frank Herbert")).await.unwrap();
        service
            .create(draft("Foundation", "Isaac Asimov"))
            .await
            .unwrap();

        let by_title = service.search("DUNE").await.unwrap();
        let by_author = service.search("asim").await.unwrap();
        let nothing = service.search("tolkien").await.unwrap();

        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Dune");
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].title, "Foundation");
        assert!(nothing.is_empty());
    }

    #[tokio::test]
    async fn invalid_draft_is_not_stored() {
        let service = service();

        let err = service.create(draft("", "Frank Herbert")).await.unwrap_err();

        assert_eq!(err, EntryError::TitleRequired);
        assert!(service.search("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_identity() {
        let service = service();
        let created = service.create(draft("Dune", "Frank Herbert")).await.unwrap();

        let mut changed = draft("Dune", "Frank Herbert");
        changed.page = Some("42".to_string());
        changed.comment = "Spice!".to_string();
        let updated = service.update(&created.id, changed).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.timestamp, created.timestamp);
        assert_eq!(updated.page, Some(42));
        assert_eq!(updated.comment, "Spice!");
    }

    #[tokio::test]
    async fn update_of_unknown_entry_fails() {
        let service = service();
        let id = EntryId::new("missing");

        let err = service
            .update(&id, draft("Dune", "Frank Herbert"))
            .await
            .unwrap_err();

        assert_eq!(err, EntryError::NotFound(id));
    }

    #[tokio::test]
    async fn update_of_unknown_entry_with_invalid_draft_is_not_found() {
        let service = service();
        let id = EntryId::new("missing");
        let mut invalid = draft("", "Frank Herbert");
        invalid.page = None;

        let err = service.update(&id, invalid).await.unwrap_err();

        assert_eq!(err, EntryError::NotFound(id));
    }

    #[tokio::test]
    async fn update_of_known_entry_still_validates() {
        let service = service();
        let created = service.create(draft("Dune", "Frank Herbert")).await.unwrap();

        let err = service
            .update(&created.id, draft("", "Frank Herbert"))
            .await
            .unwrap_err();

        assert_eq!(err, EntryError::TitleRequired);
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let service = service();
        let created = service.create(draft("Dune", "Frank Herbert")).await.unwrap();

        service.delete(&created.id).await.unwrap();

        assert!(service.search("").await.unwrap().is_empty());
        assert_eq!(
            service.delete(&created.id).await.unwrap_err(),
            EntryError::NotFound(created.id)
        );
    }

    #[tokio::test]
    async fn suggestions_reflect_stored_entries() {
        let service = service();
        service.create(draft("Dune", "Frank Herbert")).await.unwrap();
        service
            .create(draft("Good Omens", "Terry Pratchett, Neil Gaiman"))
            .await
            .unwrap();

        let suggestions = service.suggestions().await.unwrap();

        assert_eq!(suggestions.titles, vec!["Good Omens", "Dune"]);
        assert_eq!(
            suggestions.authors,
            vec!["Terry Pratchett", "Neil Gaiman", "Frank Herbert"]
        );
    }
}
