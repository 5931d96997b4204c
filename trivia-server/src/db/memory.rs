//! In-memory store for tests and local demos

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::repos::StoreError;
use super::store::TriviaStore;
use crate::models::{Category, NewQuestion, Question};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    next_question_id: i32,
}

/// Store backed by ordered maps, with the same ILIKE matching rules as Postgres
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category row as a seed process would.
    pub fn add_category(&self, category: Category) {
        self.write().categories.insert(category.id, category);
    }

    /// Add a question row with an explicit id.
    pub fn add_question(&self, question: Question) {
        let mut tables = self.write();
        tables.next_question_id = tables.next_question_id.max(question.id);
        tables.questions.insert(question.id, question);
    }

    /// Make every subsequent call fail with `StoreError::Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store set to fail".into()));
        }
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn filter_questions(&self, keep: impl Fn(&Question) -> bool) -> Result<Vec<Question>, StoreError> {
        self.check()?;
        Ok(self
            .read()
            .questions
            .values()
            .filter(|&q| keep(q))
            .cloned()
            .collect())
    }
}

/// `haystack ILIKE '%' || term || '%'`: `%` matches any run of characters,
/// `_` any single character, everything else compares case-insensitively.
fn contains_ignore_case(haystack: &str, term: &str) -> bool {
    let text: Vec<char> = haystack.to_lowercase().chars().collect();
    let mut pattern = vec!['%'];
    pattern.extend(term.to_lowercase().chars());
    pattern.push('%');
    like_match(&text, &pattern)
}

fn like_match(text: &[char], pattern: &[char]) -> bool {
    // matched[j]: pattern[..j] matches the text consumed so far
    let mut matched = vec![false; pattern.len() + 1];
    matched[0] = true;
    for j in 1..=pattern.len() {
        matched[j] = matched[j - 1] && pattern[j - 1] == '%';
    }

    for &c in text {
        let mut next = vec![false; pattern.len() + 1];
        for j in 1..=pattern.len() {
            next[j] = match pattern[j - 1] {
                '%' => next[j - 1] || matched[j],
                '_' => matched[j - 1],
                p => matched[j - 1] && p == c,
            };
        }
        matched = next;
    }
    matched[pattern.len()]
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        self.check()?;
        Ok(self.read().categories.values().cloned().collect())
    }

    async fn category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        self.check()?;
        Ok(self.read().categories.get(&id).cloned())
    }

    async fn category_by_type(&self, term: &str) -> Result<Option<Category>, StoreError> {
        self.check()?;
        let tables = self.read();
        let mut matches = tables
            .categories
            .values()
            .filter(|c| contains_ignore_case(&c.kind, term));

        let first = matches.next().cloned();
        if matches.next().is_some() {
            return Err(StoreError::Ambiguous {
                resource: "category",
                term: term.to_owned(),
            });
        }
        Ok(first)
    }

    async fn questions(&self) -> Result<Vec<Question>, StoreError> {
        self.filter_questions(|_| true)
    }

    async fn question(&self, id: i32) -> Result<Option<Question>, StoreError> {
        self.check()?;
        Ok(self.read().questions.get(&id).cloned())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        self.filter_questions(|q| contains_ignore_case(&q.question, term))
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        self.filter_questions(|q| q.category == category)
    }

    async fn unseen_questions(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<Vec<Question>, StoreError> {
        self.filter_questions(|q| {
            !previous.contains(&q.id) && category.map_or(true, |c| q.category == c)
        })
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        self.check()?;
        let mut tables = self.write();
        tables.next_question_id += 1;
        let question = Question {
            id: tables.next_question_id,
            question: new.question,
            answer: new.answer,
            difficulty: new.difficulty,
            category: new.category,
        };
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.write().questions.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i32, text: &str, category: i32) -> Question {
        Question {
            id,
            question: text.into(),
            answer: "answer".into(),
            difficulty: 1,
            category,
        }
    }

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store.add_category(Category::new(1, "Science"));
        store.add_category(Category::new(2, "Art"));
        store.add_category(Category::new(3, "Sports"));
        store.add_question(question(1, "What is the boiling point of water?", 1));
        store.add_question(question(2, "Who painted the Mona Lisa?", 2));
        store.add_question(question(3, "What is the title of Newton's book?", 1));
        store
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let store = seeded();
        let found = store.search_questions("WHAT IS").await.unwrap();
        assert_eq!(found.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn like_wildcards_match_as_in_postgres() {
        assert!(contains_ignore_case("Who painted the Mona Lisa?", "mona"));
        assert!(contains_ignore_case("Who painted the Mona Lisa?", "who%lisa"));
        assert!(contains_ignore_case("Who painted the Mona Lisa?", "m_na"));
        assert!(contains_ignore_case("anything", "%"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Who painted the Mona Lisa?", "m__na"));
        assert!(!contains_ignore_case("Who painted the Mona Lisa?", "lisa%who"));
        assert!(!contains_ignore_case("", "_"));
    }

    #[tokio::test]
    async fn search_honours_like_wildcards() {
        let store = seeded();
        let found = store.search_questions("what%book").await.unwrap();
        assert_eq!(found.iter().map(|q| q.id).collect::<Vec<_>>(), vec![3]);

        let found = store.search_questions("b_iling").await.unwrap();
        assert_eq!(found.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1]);
    }

    #[tokio::test]
    async fn category_by_type_requires_single_match() {
        let store = seeded();
        assert_eq!(
            store.category_by_type("sci").await.unwrap(),
            Some(Category::new(1, "Science"))
        );
        assert_eq!(store.category_by_type("geography").await.unwrap(), None);

        // "Art" and "Sports" both contain "rt"
        let err = store.category_by_type("rt").await.unwrap_err();
        assert!(matches!(err, StoreError::Ambiguous { .. }));
    }

    #[tokio::test]
    async fn insert_assigns_ids_after_seeds() {
        let store = seeded();
        let created = store
            .insert_question(NewQuestion {
                question: "New?".into(),
                answer: "Yes".into(),
                difficulty: 2,
                category: 3,
            })
            .await
            .unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(store.question(4).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn unseen_filters_previous_and_category() {
        let store = seeded();
        let unseen = store.unseen_questions(&[1], Some(1)).await.unwrap();
        assert_eq!(unseen.iter().map(|q| q.id).collect::<Vec<_>>(), vec![3]);

        let unseen = store.unseen_questions(&[], None).await.unwrap();
        assert_eq!(unseen.len(), 3);
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let store = seeded();
        assert!(store.delete_question(2).await.unwrap());
        assert!(!store.delete_question(2).await.unwrap());
    }

    #[tokio::test]
    async fn failing_store_errors() {
        let store = seeded();
        store.set_failing(true);
        assert!(matches!(
            store.categories().await,
            Err(StoreError::Unavailable(_))
        ));
        store.set_failing(false);
        assert!(store.categories().await.is_ok());
    }
}
