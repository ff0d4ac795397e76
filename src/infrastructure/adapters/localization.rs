//! 문자열 리소스/숫자 포맷 포트 구현 어댑터.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{LocalizationFactory, NumberFormatter, TextResources};
use crate::infrastructure::format::GroupedNumberFormatter;
use crate::infrastructure::resources::EmbeddedResources;

pub struct EmbeddedLocalization;

impl LocalizationFactory for EmbeddedLocalization {
    fn resources(&self, overrides: Option<&Path>) -> Result<Box<dyn TextResources>> {
        let resources = match overrides {
            Some(path) => EmbeddedResources::with_overrides(path)?,
            None => EmbeddedResources::default(),
        };
        Ok(Box::new(resources))
    }

    fn formatter(&self, thousands_separator: &str) -> Box<dyn NumberFormatter> {
        Box::new(GroupedNumberFormatter::new(thousands_separator))
    }
}
