//! Jira Cloud REST client and raw payload models.
//!
//! Two read-only endpoints are consumed: the paged JQL search and the
//! per-issue worklog list. Authentication is static basic auth (account
//! email + API token) on every request; there is no session handshake.
//! Raw payload structs keep the tracker's loosely-typed JSON at this
//! boundary — normalization into pipeline types happens in `libs`.

use super::Tracker;
use crate::libs::adf::DocNode;
use crate::libs::config::TrackerConfig;
use crate::libs::error::FetchError;
use reqwest::Client;
use serde::Deserialize;

const SEARCH_URL: &str = "rest/api/3/search/jql";
const WORKLOG_URL: &str = "rest/api/3/issue";
const PAGE_SIZE: u32 = 100;
const ISSUE_FIELDS: &str = "project,summary,updated,timespent";

/// One page of the issue search response.
#[derive(Debug, Default, Deserialize)]
pub struct SearchPage {
    pub issues: Vec<RawIssue>,
    /// Opaque continuation token; absent on the last page.
    #[serde(rename = "nextPageToken", default)]
    pub next_page_token: Option<String>,
    #[serde(rename = "isLast", default)]
    pub is_last: Option<bool>,
}

/// An issue exactly as the search endpoint returns it.
#[derive(Debug, Deserialize)]
pub struct RawIssue {
    pub id: String,
    #[serde(default)]
    pub fields: RawIssueFields,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawIssueFields {
    #[serde(default)]
    pub project: Option<RawProject>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub timespent: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RawProject {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorklogPage {
    #[serde(default)]
    pub worklogs: Vec<RawWorklog>,
}

/// A worklog entry exactly as the worklog endpoint returns it.
#[derive(Debug, Default, Deserialize)]
pub struct RawWorklog {
    pub id: String,
    #[serde(default)]
    pub author: Option<RawAuthor>,
    #[serde(default)]
    pub started: Option<String>,
    #[serde(rename = "timeSpentSeconds", default)]
    pub time_spent_seconds: Option<i64>,
    /// Rich-document comment tree; flattened during normalization.
    #[serde(default)]
    pub comment: Option<DocNode>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAuthor {
    #[serde(rename = "emailAddress", default)]
    pub email_address: Option<String>,
}

/// Jira Cloud client over reqwest with static basic-auth credentials.
#[derive(Debug)]
pub struct Jira {
    client: Client,
    config: TrackerConfig,
}

impl Jira {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }
}

impl Tracker for Jira {
    async fn search_page(&self, jql: &str, page_token: Option<&str>) -> Result<SearchPage, FetchError> {
        let url = self.endpoint(SEARCH_URL);
        let mut request = self
            .client
            .get(&url)
            .basic_auth(&self.config.email, Some(&self.config.api_token))
            .query(&[("jql", jql), ("fields", ISSUE_FIELDS)])
            .query(&[("maxResults", PAGE_SIZE)]);

        if let Some(token) = page_token {
            request = request.query(&[("nextPageToken", token)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
                url,
            });
        }

        Ok(response.json::<SearchPage>().await?)
    }

    async fn issue_worklogs(&self, issue_id: i64) -> Result<Vec<RawWorklog>, FetchError> {
        let url = self.endpoint(&format!("{}/{}/worklog", WORKLOG_URL, issue_id));
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.email, Some(&self.config.api_token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
                url,
            });
        }

        Ok(response.json::<WorklogPage>().await?.worklogs)
    }
}
