//! 코멘트 스레드 검증 오류.

use serde_json::Value;
use thiserror::Error;

/// 누락 값을 메시지에 표기할 때 쓰는 리터럴.
pub const UNDEFINED_VALUE: &str = "undefined";

/// 스레드 검증 실패. 발생 즉시 호출자에게 그대로 전파된다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentDataError {
    #[error("Field '{path}' is invalid, null, or undefined '{value}'.")]
    MissingField { path: String, value: String },

    #[error("'{path}' '{value}' is of length '{length}'.")]
    InvalidLength {
        path: String,
        value: String,
        length: usize,
    },
}

impl CommentDataError {
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MissingField {
            path: path.into(),
            value: UNDEFINED_VALUE.to_string(),
        }
    }

    /// 타입이 어긋난 값. 원본 JSON 리터럴을 메시지에 그대로 싣는다.
    pub fn wrong_shape(path: impl Into<String>, value: &Value) -> Self {
        let value = match value {
            Value::Null => UNDEFINED_VALUE.to_string(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        Self::MissingField {
            path: path.into(),
            value,
        }
    }

    pub fn invalid_length(path: impl Into<String>, value: &str) -> Self {
        Self::InvalidLength {
            path: path.into(),
            value: value.to_string(),
            length: value.chars().count(),
        }
    }

    /// 오류가 가리키는 필드 경로.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path, .. } | Self::InvalidLength { path, .. } => path,
        }
    }
}
