//! 지역화 문자열 리소스.
//! 기본(en-US) 문자열을 내장하고, JSON 파일로 일부 키를 덮어쓸 수 있다.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::comments::keys;
use crate::application::ports::TextResources;

const DEFAULT_RESOURCES: &[(&str, &str)] = &[
    (keys::COMMENT_TITLE, "# Metrics for iteration %s"),
    (
        keys::COMMENT_FOOTER,
        "[Metrics added by PR Metrics. Add to Azure DevOps today!](https://marketplace.visualstudio.com/items?itemName=ms-omex.prmetrics)",
    ),
    (keys::FILE_IGNORED, "❗ **This file may not need to be reviewed.**"),
    (
        keys::LARGE_PULL_REQUEST,
        "❌ **Try to keep pull requests smaller than %s lines of new product code by following the [Single Responsibility Principle (SRP)](https://wikipedia.org/wiki/Single-responsibility_principle).**",
    ),
    (keys::SMALL_PULL_REQUEST, "✔ **Thanks for keeping your pull request small.**"),
    (keys::TESTS_INSUFFICIENT, "⚠️ **Consider adding additional tests.**"),
    (keys::TESTS_SUFFICIENT, "✔ **Thanks for adding tests.**"),
    (keys::TABLE_LINES, "Lines"),
    (keys::TABLE_PRODUCT_CODE, "Product Code"),
    (keys::TABLE_TEST_CODE, "Test Code"),
    (keys::TABLE_SUBTOTAL, "Subtotal"),
    (keys::TABLE_IGNORED_CODE, "Ignored Code"),
    (keys::TABLE_TOTAL, "Total"),
];

/// 키 → 템플릿 문자열 테이블.
#[derive(Debug, Clone)]
pub struct EmbeddedResources {
    entries: BTreeMap<String, String>,
}

impl Default for EmbeddedResources {
    fn default() -> Self {
        Self {
            entries: DEFAULT_RESOURCES
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl EmbeddedResources {
    /// 기본 문자열 위에 JSON 객체(`{"key": "template"}`)를 덮어쓴다.
    pub fn with_overrides(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read resources at {}", path.display()))?;
        let overrides: BTreeMap<String, String> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;

        let mut resources = Self::default();
        resources.entries.extend(overrides);
        Ok(resources)
    }
}

impl TextResources for EmbeddedResources {
    fn loc(&self, key: &str, args: &[&str]) -> String {
        let Some(template) = self.entries.get(key) else {
            tracing::warn!(key, "missing text resource");
            return key.to_string();
        };
        substitute(template, args)
    }
}

/// `%s` 자리표시자를 인자로 순서대로 치환한다. 남는 자리표시자는 그대로 둔다.
fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();
    while let Some(pos) = rest.find("%s") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("%s"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}
