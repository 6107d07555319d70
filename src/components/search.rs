use crate::components::group_registry::GroupConfig;
use crate::config::Config;
use crate::error::{search_error, BotResult};
use crate::utils::text::preview;
use reqwest::{header, Client};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{error, info};
use url::Url;

/// Results requested per query
const RESULTS_PER_QUERY: u32 = 5;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    web: Option<WebResults>,
}

#[derive(Debug, Deserialize)]
struct WebResults {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// One web search hit
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// Brave web search client
#[derive(Debug, Clone)]
pub struct BraveSearchClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl BraveSearchClient {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.brave_api_key.clone(), config.brave_search_url.clone())
    }

    /// Run a single query
    pub async fn search(&self, query: &str) -> BotResult<Vec<SearchResult>> {
        info!("Brave search for: {}", query);
        let count = RESULTS_PER_QUERY.to_string();

        let res = self
            .client
            .get(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .header("X-Subscription-Token", &self.api_key)
            .query(&[("q", query), ("count", count.as_str())])
            .send()
            .await
            .map_err(|e| search_error(&format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            return Err(search_error(&format!("HTTP {}", res.status())));
        }

        let body: SearchResponse = res
            .json()
            .await
            .map_err(|e| search_error(&format!("Failed to parse response: {}", e)))?;

        let results = body.web.map(|web| web.results).unwrap_or_default();
        info!("Found {} results for this query", results.len());

        Ok(results)
    }

    /// Search for a group's events and join the result descriptions
    ///
    /// Failed queries are logged and skipped; results are deduplicated by URL.
    pub async fn search_group_events(&self, group: &GroupConfig, question: &str) -> String {
        let mut all_results = Vec::new();

        for query in group_queries(group, question) {
            match self.search(&query).await {
                Ok(results) => all_results.extend(results),
                Err(e) => error!("Error in Brave search: {}", e),
            }
        }

        let unique = dedup_by_url(all_results);
        for (i, result) in unique.iter().enumerate() {
            info!(
                "Result {}: {} ({}) {}",
                i + 1,
                result.title,
                result.url,
                preview(&result.description, 200)
            );
        }

        let snippets = unique
            .into_iter()
            .map(|result| result.description)
            .collect::<Vec<_>>()
            .join("\n");
        info!("Combined snippets length: {} chars", snippets.len());

        snippets
    }
}

/// Queries scoped to the group's Meetup page and name
pub fn group_queries(group: &GroupConfig, question: &str) -> Vec<String> {
    let mut queries = Vec::new();

    if let Ok(url) = Url::parse(&group.meetup_url) {
        if let Some(host) = url.host_str() {
            let path = url.path().trim_end_matches('/');
            let scope = format!("{}{}", host.trim_start_matches("www."), path);
            queries.push(format!("site:{} \"{}\"", scope, question));
        }
    }
    queries.push(format!("\"{}\" \"{}\" site:meetup.com", question, group.name));

    queries
}

/// Keep the first result for each URL, in order
pub fn dedup_by_url(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|result| seen.insert(result.url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::group_registry::{GroupRegistry, DEFAULT_GROUP};

    fn hit(url: &str, description: &str) -> SearchResult {
        SearchResult {
            title: String::new(),
            url: url.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn queries_target_the_meetup_page() {
        let registry = GroupRegistry::builtin();
        let group = registry.get(DEFAULT_GROUP).unwrap();
        let queries = group_queries(group, "next event");

        assert_eq!(
            queries,
            vec![
                "site:meetup.com/columbus-code-and-coffee/events \"next event\"".to_string(),
                "\"next event\" \"Columbus Code & Coffee\" site:meetup.com".to_string(),
            ]
        );
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let results = dedup_by_url(vec![
            hit("https://a", "first"),
            hit("https://b", "second"),
            hit("https://a", "duplicate"),
        ]);
        assert_eq!(results, vec![hit("https://a", "first"), hit("https://b", "second")]);
    }
}
