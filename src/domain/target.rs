//! 입력 URL을 Azure Repos Pull Request 대상으로 해석하는 모듈.

use anyhow::{Result, bail};
use percent_encoding::percent_decode_str;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestTarget {
    pub host: String,
    /// 조직/컬렉션 루트 URL (끝 슬래시 없음)
    pub collection_url: String,
    pub project: String,
    pub repository: String,
    pub pull_request_id: u64,
    pub url: String,
}

impl PullRequestTarget {
    /// dev.azure.com / *.visualstudio.com / 온프레미스 서버 URL을 해석한다.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input)?;
        let host = url
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("URL host is missing"))?
            .to_string();

        let segments: Vec<String> = url
            .path_segments()
            .map(|s| {
                s.filter(|p| !p.is_empty())
                    .map(|p| percent_decode_str(p).decode_utf8_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        let Some(target) = parse_segments(&url, &host, &segments, input) else {
            bail!("unsupported URL format: {input}");
        };
        Ok(target)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn parse_segments(
    url: &Url,
    host: &str,
    segments: &[String],
    input: &str,
) -> Option<PullRequestTarget> {
    // [/collection...]/project/_git/repo/pullrequest/<id>
    let git = segments.iter().position(|s| s == "_git")?;
    if git == 0 || git + 3 >= segments.len() {
        return None;
    }
    if !segments[git + 2].eq_ignore_ascii_case("pullrequest") {
        return None;
    }

    let pull_request_id = segments[git + 3].parse().ok()?;

    let mut collection_url = format!("{}://{}", url.scheme(), host);
    if let Some(port) = url.port() {
        collection_url.push_str(&format!(":{port}"));
    }
    for segment in &segments[..git - 1] {
        collection_url.push('/');
        collection_url.push_str(segment);
    }

    Some(PullRequestTarget {
        host: host.to_string(),
        collection_url,
        project: segments[git - 1].clone(),
        repository: segments[git + 1].clone(),
        pull_request_id,
        url: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dev_azure_url() {
        let target =
            PullRequestTarget::parse("https://dev.azure.com/contoso/Web/_git/site/pullrequest/42")
                .unwrap();
        assert_eq!(target.host(), "dev.azure.com");
        assert_eq!(target.collection_url, "https://dev.azure.com/contoso");
        assert_eq!(target.project, "Web");
        assert_eq!(target.repository, "site");
        assert_eq!(target.pull_request_id, 42);
    }

    #[test]
    fn parses_visualstudio_url_with_encoded_project() {
        let target = PullRequestTarget::parse(
            "https://contoso.visualstudio.com/My%20Project/_git/api/pullrequest/7",
        )
        .unwrap();
        assert_eq!(target.collection_url, "https://contoso.visualstudio.com");
        assert_eq!(target.project, "My Project");
        assert_eq!(target.repository, "api");
    }

    #[test]
    fn rejects_non_pull_request_urls() {
        assert!(PullRequestTarget::parse("https://dev.azure.com/contoso/Web/_git/site").is_err());
        assert!(
            PullRequestTarget::parse("https://dev.azure.com/contoso/Web/_git/site/commit/abc")
                .is_err()
        );
        assert!(PullRequestTarget::parse("https://github.com/o/r/pull/1").is_err());
    }
}
