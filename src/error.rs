use thiserror::Error;

/// Local input problems, caught before anything goes on the wire.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name, clearance code and phone are all required")]
    MissingFields,
    #[error("phone must be 010XXXXXXXX or 010-XXXX-XXXX")]
    InvalidPhone,
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("request timed out")]
    Timeout,
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedResponse {
    #[error("response body is not JSON")]
    NotJson,
    #[error("response has no string `data` field")]
    MissingData,
    #[error("invalid XML response received")]
    NotXml,
    #[error("XML decode error: {0}")]
    Xml(String),
}

/// Anything that ends a submission without a verdict.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Malformed(#[from] MalformedResponse),
}

impl QueryError {
    /// Korean text for the user; the `Display` form stays for logs.
    pub fn user_message(&self) -> String {
        match self {
            QueryError::Validation(ValidationError::MissingFields) => {
                "모든 필드를 입력해 주세요.".to_string()
            }
            QueryError::Validation(ValidationError::InvalidPhone) => {
                "전화번호는 010XXXXXXXX 또는 010-XXXX-XXXX 형식이어야 합니다.".to_string()
            }
            QueryError::Network(NetworkError::Timeout) => "요청 시간이 초과되었습니다.".to_string(),
            QueryError::Network(NetworkError::Status { status, .. }) => {
                format!("서버 오류가 발생했습니다. (HTTP {status})")
            }
            QueryError::Network(NetworkError::Transport(_)) => {
                "서버에 연결할 수 없습니다.".to_string()
            }
            QueryError::Malformed(MalformedResponse::NotXml) => {
                "유효하지 않은 XML 응답을 받았습니다".to_string()
            }
            QueryError::Malformed(_) => "응답을 해석할 수 없습니다.".to_string(),
        }
    }
}
