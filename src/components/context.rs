use crate::components::fetcher::PageFetcher;
use crate::components::group_registry::{GroupConfig, GroupRegistry};
use crate::components::meetup::extract_meetup_data;
use crate::components::search::BraveSearchClient;
use crate::components::website::extract_website_data;
use crate::error::{BotResult, Error};
use crate::utils::text::preview;
use tracing::{error, info, instrument};

pub const MEETUP_FETCH_ERROR: &str = "Error fetching Meetup data";
pub const WEBSITE_FETCH_ERROR: &str = "Error fetching website data";

/// Gathers Meetup and website text into one context blob per question
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    fetcher: PageFetcher,
    search: Option<BraveSearchClient>,
}

impl ContextBuilder {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self {
            fetcher,
            search: None,
        }
    }

    /// Add web search results whenever the Meetup stage fails
    pub fn with_search_fallback(mut self, search: BraveSearchClient) -> Self {
        self.search = Some(search);
        self
    }

    /// Build the context for the group registered under `group_key`
    pub async fn build(&self, groups: &GroupRegistry, group_key: &str, question: &str) -> String {
        match groups.get(group_key) {
            Some(group) => self.build_for_group(group, question).await,
            None => {
                error!("Unknown group key: {}", group_key);
                format!(
                    "Error: Unknown group '{}'. Available groups: {:?}",
                    group_key,
                    groups.keys()
                )
            }
        }
    }

    /// Build the context for `group`; stage failures become placeholder text
    #[instrument(skip(self, group, question), fields(group = %group.id))]
    pub async fn build_for_group(&self, group: &GroupConfig, question: &str) -> String {
        info!("Fetching comprehensive information for {}", group.name);

        let meetup = self.meetup_section(group).await;
        let meetup_failed = meetup.is_err();
        let mut meetup_data = render_meetup(meetup);

        if meetup_failed {
            if let Some(search) = &self.search {
                let snippets = search.search_group_events(group, question).await;
                if !snippets.is_empty() {
                    meetup_data.push_str("\n\nWEB SEARCH RESULTS:\n");
                    meetup_data.push_str(&snippets);
                }
            }
        }

        let website_data = render_website(self.website_section(group).await);

        let combined = format!("\n{}\n\n{}\n", meetup_data, website_data);

        info!("Combined data length: {} characters", combined.len());
        info!("Combined data preview: {}...", preview(&combined, 500));

        combined
    }

    async fn meetup_section(&self, group: &GroupConfig) -> BotResult<String> {
        info!("Fetching Meetup data from: {}", group.meetup_url);
        let html = self.fetcher.fetch(&group.meetup_url).await?;
        extract_meetup_data(&html)
    }

    async fn website_section(&self, group: &GroupConfig) -> BotResult<String> {
        info!("Fetching website data from: {}", group.website_url);
        let html = self.fetcher.fetch(&group.website_url).await?;
        Ok(extract_website_data(&html))
    }
}

/// Placeholder text for a failed Meetup stage
pub fn render_meetup(result: BotResult<String>) -> String {
    match result {
        Ok(data) => data,
        Err(e @ Error::Fetch { .. }) => {
            error!("Error fetching Meetup data: {}", e);
            MEETUP_FETCH_ERROR.to_string()
        }
        Err(e) => {
            error!("Error extracting comprehensive Meetup data: {}", e);
            format!("Error extracting Meetup data: {}", e)
        }
    }
}

/// Placeholder text for a failed website stage
pub fn render_website(result: BotResult<String>) -> String {
    match result {
        Ok(data) => data,
        Err(e) => {
            error!("Error fetching website data: {}", e);
            WEBSITE_FETCH_ERROR.to_string()
        }
    }
}
