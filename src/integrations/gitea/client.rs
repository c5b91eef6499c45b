#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::IssueTracker;

/// Issue as returned by the Gitea API (only the fields we report)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueInfo {
    pub number: i64,
    #[serde(default)]
    pub title: String,
    /// Branch reference attached to the issue
    #[serde(rename = "ref", default)]
    pub reference: String,
    #[serde(default)]
    pub html_url: String,
}

#[derive(Serialize)]
struct EditIssueRef<'a> {
    #[serde(rename = "ref")]
    reference: &'a str,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Blocking Gitea REST client
pub struct GiteaClient {
    http: Client,
    api_base: Url,
    token: String,
}

impl GiteaClient {
    /// Create a client for the Gitea instance at `base_url`
    ///
    /// `base_url` may point at the instance root or at its `/api/v1` path.
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let api_base = normalize_api_base(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            api_base,
            token: token.to_string(),
        })
    }

    fn issue_url(&self, owner: &str, repo: &str, number: i64) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("Gitea URL cannot be a base: {}", self.api_base))?
            .pop_if_empty()
            .extend(["repos", owner, repo, "issues", &number.to_string()]);
        Ok(url)
    }
}

impl IssueTracker for GiteaClient {
    fn set_issue_ref(
        &self,
        owner: &str,
        repo: &str,
        number: i64,
        branch: &str,
    ) -> Result<IssueInfo> {
        let url = self.issue_url(owner, repo, number)?;
        debug!("PATCH {url}");

        let response = self
            .http
            .patch(url)
            .bearer_auth(&self.token)
            .json(&EditIssueRef { reference: branch })
            .send()
            .context("Failed to send request to Gitea")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|err| err.message)
                .unwrap_or(body);
            anyhow::bail!("Gitea API returned {status}: {}", message.trim());
        }

        response
            .json::<IssueInfo>()
            .context("Failed to parse issue response from Gitea")
    }
}

/// Turn a Gitea instance URL into its `/api/v1` base
///
/// `https://git.example.com`, `https://git.example.com/` and
/// `https://git.example.com/api/v1/` all give `https://git.example.com/api/v1`.
pub fn normalize_api_base(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let root = trimmed.strip_suffix("/api/v1").unwrap_or(trimmed);
    let api = format!("{root}/api/v1");
    let url = Url::parse(&api).with_context(|| format!("Invalid Gitea URL: {base_url}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("Invalid Gitea URL: {base_url} (expected http or https)");
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::runtime::Runtime;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn issue_body(number: i64, reference: &str) -> serde_json::Value {
        json!({
            "id": 1001,
            "number": number,
            "title": "Crash on start",
            "ref": reference,
            "html_url": format!("http://gitea.local/acme/widgets/issues/{number}"),
            "state": "open"
        })
    }

    #[test]
    fn test_normalize_api_base_variants() {
        for input in [
            "https://git.example.com",
            "https://git.example.com/",
            "https://git.example.com/api/v1",
            "https://git.example.com/api/v1/",
        ] {
            assert_eq!(
                normalize_api_base(input).unwrap().as_str(),
                "https://git.example.com/api/v1",
                "input {input}"
            );
        }
    }

    #[test]
    fn test_normalize_api_base_keeps_subpath() {
        let url = normalize_api_base("http://host:3000/gitea").unwrap();
        assert_eq!(url.as_str(), "http://host:3000/gitea/api/v1");
    }

    #[test]
    fn test_normalize_api_base_rejects_garbage() {
        assert!(normalize_api_base("not a url").is_err());
        assert!(normalize_api_base("ftp://git.example.com").is_err());
    }

    #[test]
    fn test_issue_url_escapes_segments() {
        let client =
            GiteaClient::new("https://git.example.com", "t", Duration::from_secs(1)).unwrap();
        let url = client.issue_url("acme corp", "widgets", 42).unwrap();
        assert_eq!(
            url.as_str(),
            "https://git.example.com/api/v1/repos/acme%20corp/widgets/issues/42"
        );
    }

    #[test]
    fn test_set_issue_ref_sends_patch_with_bearer_token() {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("PATCH"))
                .and(path("/api/v1/repos/acme/widgets/issues/42"))
                .and(header("authorization", "Bearer s3cret"))
                .and(body_json(json!({ "ref": "hotfix/ticket-42" })))
                .respond_with(
                    ResponseTemplate::new(201).set_body_json(issue_body(42, "hotfix/ticket-42")),
                )
                .mount(&server),
        );

        let client = GiteaClient::new(&server.uri(), "s3cret", Duration::from_secs(5)).unwrap();
        let info = client
            .set_issue_ref("acme", "widgets", 42, "hotfix/ticket-42")
            .unwrap();

        assert_eq!(info.number, 42);
        assert_eq!(info.reference, "hotfix/ticket-42");
        assert_eq!(info.html_url, "http://gitea.local/acme/widgets/issues/42");

        let requests = rt.block_on(server.received_requests()).unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn test_set_issue_ref_accepts_api_v1_base() {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("PATCH"))
                .and(path("/api/v1/repos/acme/widgets/issues/7"))
                .respond_with(
                    ResponseTemplate::new(201).set_body_json(issue_body(7, "feature/ticket-7")),
                )
                .mount(&server),
        );

        let base = format!("{}/api/v1/", server.uri());
        let client = GiteaClient::new(&base, "t", Duration::from_secs(5)).unwrap();
        let info = client
            .set_issue_ref("acme", "widgets", 7, "feature/ticket-7")
            .unwrap();
        assert_eq!(info.reference, "feature/ticket-7");
    }

    #[test]
    fn test_set_issue_ref_surfaces_api_message() {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("PATCH"))
                .respond_with(
                    ResponseTemplate::new(401)
                        .set_body_json(json!({ "message": "token is required", "url": "" })),
                )
                .mount(&server),
        );

        let client = GiteaClient::new(&server.uri(), "bad", Duration::from_secs(5)).unwrap();
        let err = client
            .set_issue_ref("acme", "widgets", 1, "feature/ticket-1")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("401"), "{message}");
        assert!(message.contains("token is required"), "{message}");
    }

    #[test]
    fn test_set_issue_ref_plain_text_error_body() {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("PATCH"))
                .respond_with(ResponseTemplate::new(404).set_body_string("Not Found\n"))
                .mount(&server),
        );

        let client = GiteaClient::new(&server.uri(), "t", Duration::from_secs(5)).unwrap();
        let err = client
            .set_issue_ref("acme", "widgets", 999, "feature/ticket-999")
            .unwrap_err();
        assert!(err.to_string().ends_with("Not Found"), "{err}");
    }

    #[test]
    fn test_set_issue_ref_unreachable_server() {
        let client =
            GiteaClient::new("http://127.0.0.1:9", "t", Duration::from_secs(2)).unwrap();
        let err = client
            .set_issue_ref("acme", "widgets", 1, "feature/ticket-1")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to send request"));
    }
}
