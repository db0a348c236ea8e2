//! In-memory port implementations shared by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use conduit_domain::{Article, ArticleFilter, ArticlePage, Comment, Profile};

use crate::ports::ArticlesApi;
use crate::{ApplicationError, ApplicationResult};

pub fn article(slug: &str) -> Article {
    let at = Utc.with_ymd_and_hms(2017, 10, 27, 0, 13, 15).single().unwrap_or_default();
    Article {
        slug: slug.to_string(),
        title: format!("title of {slug}"),
        description: format!("about {slug}"),
        body: None,
        tag_list: vec!["rust".to_string()],
        created_at: at,
        updated_at: at,
        favorited: false,
        favorites_count: 0,
        author: Profile::new("jane"),
    }
}

pub fn comment(id: u64) -> Comment {
    let at = Utc.with_ymd_and_hms(2017, 10, 28, 9, 0, 0).single().unwrap_or_default();
    Comment {
        id,
        body: format!("comment {id}"),
        created_at: at,
        updated_at: at,
        author: Profile::new("joe"),
    }
}

/// Answers every article request with one article per page, slugged
/// `page-<n>`, unless told to fail. Pages can be slowed down individually.
#[derive(Default)]
pub struct FakeApi {
    pub failure: Mutex<Option<ApplicationError>>,
    pub delays: Mutex<HashMap<u32, Duration>>,
    pub filters: Mutex<Vec<ArticleFilter>>,
    pub comments: Mutex<Vec<Comment>>,
}

impl FakeApi {
    pub fn failing(error: ApplicationError) -> Self {
        let api = Self::default();
        *api.failure.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(error);
        api
    }

    pub fn delay_page(&self, page: u32, delay: Duration) {
        self.delays
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(page, delay);
    }

    pub fn seen_filters(&self) -> Vec<ArticleFilter> {
        self.filters
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn failure(&self) -> Option<ApplicationError> {
        self.failure
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl ArticlesApi for FakeApi {
    async fn list_articles(&self, filter: &ArticleFilter) -> ApplicationResult<ArticlePage> {
        self.filters
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(filter.clone());
        let delay = self
            .delays
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(&filter.page)
            .copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(error) = self.failure() {
            return Err(error);
        }
        Ok(ArticlePage {
            articles: vec![article(&format!("page-{}", filter.page))],
            articles_count: 50,
        })
    }

    async fn list_comments(&self, _slug: &str) -> ApplicationResult<Vec<Comment>> {
        if let Some(error) = self.failure() {
            return Err(error);
        }
        Ok(self
            .comments
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }
}
