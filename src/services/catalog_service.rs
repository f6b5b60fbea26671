//! Read-only client for the RAWG game catalog.
//!
//! Catalog failures never surface as errors: they are logged and turned into
//! empty pages, empty lists or `None`.

use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    dto::games::GamePage,
    models::{Game, GameDetails, GameStore, Screenshot, Taxonomy},
};

#[derive(Debug, Deserialize)]
struct Paged<T> {
    #[serde(default)]
    count: i64,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    previous: Option<String>,
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

impl From<Paged<Game>> for GamePage {
    fn from(page: Paged<Game>) -> Self {
        GamePage {
            games: page.results,
            count: page.count,
            next: page.next,
            previous: page.previous,
        }
    }
}

#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Builds `<base>/<segments...>`, percent-encoding each segment so that
    /// caller-supplied values cannot add path components or a query string.
    fn endpoint(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("catalog url {} cannot have a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> anyhow::Result<T> {
        let mut request = self.http.get(self.endpoint(segments)?).query(params);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }
        Ok(request.send().await?.error_for_status()?.json::<T>().await?)
    }

    async fn fetch_page(&self, params: &[(&str, String)], what: &str) -> GamePage {
        match self.fetch::<Paged<Game>>(&["games"], params).await {
            Ok(page) => page.into(),
            Err(err) => {
                tracing::error!(error = %err, what, "catalog request failed");
                GamePage::default()
            }
        }
    }

    pub async fn popular_games(&self, page: i64, page_size: i64) -> GamePage {
        let params = [
            ("ordering", "-rating".to_string()),
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        self.fetch_page(&params, "popular games").await
    }

    pub async fn search_games(&self, query: &str, page: i64, page_size: i64) -> GamePage {
        let params = [
            ("search", query.to_string()),
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        self.fetch_page(&params, "search").await
    }

    pub async fn games_by_genre(&self, genre_id: i64, page: i64, page_size: i64) -> GamePage {
        let params = [
            ("genres", genre_id.to_string()),
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        self.fetch_page(&params, "games by genre").await
    }

    pub async fn game_details(&self, slug: &str) -> Option<GameDetails> {
        if matches!(slug.trim(), "" | "." | "..") {
            return None;
        }
        match self.fetch::<GameDetails>(&["games", slug], &[]).await {
            Ok(details) => Some(details),
            Err(err) => {
                tracing::error!(error = %err, slug, "failed to fetch game details");
                None
            }
        }
    }

    pub async fn game_screenshots(&self, game_id: i64) -> Vec<String> {
        let id = game_id.to_string();
        match self
            .fetch::<Paged<Screenshot>>(&["games", id.as_str(), "screenshots"], &[])
            .await
        {
            Ok(page) => page.results.into_iter().map(|shot| shot.image).collect(),
            Err(err) => {
                tracing::error!(error = %err, game_id, "failed to fetch screenshots");
                Vec::new()
            }
        }
    }

    pub async fn game_stores(&self, game_id: i64) -> Vec<GameStore> {
        let id = game_id.to_string();
        match self
            .fetch::<Paged<GameStore>>(&["games", id.as_str(), "stores"], &[])
            .await
        {
            Ok(page) => page.results,
            Err(err) => {
                tracing::error!(error = %err, game_id, "failed to fetch stores");
                Vec::new()
            }
        }
    }

    pub async fn genres(&self) -> Vec<Taxonomy> {
        self.taxonomy("genres").await
    }

    pub async fn platforms(&self) -> Vec<Taxonomy> {
        self.taxonomy("platforms").await
    }

    async fn taxonomy(&self, path: &str) -> Vec<Taxonomy> {
        match self.fetch::<Paged<Taxonomy>>(&[path], &[]).await {
            Ok(page) => page.results,
            Err(err) => {
                tracing::error!(error = %err, path, "failed to fetch taxonomy");
                Vec::new()
            }
        }
    }
}
