use crate::api::models::Verdict;
use crate::error::{QueryError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    Success,
    Failure,
}

/// What the user gets told after an action. Rendering is up to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    MissingFields,
    InvalidPhone,
    FieldsCleared,
    Match,
    Mismatch(String),
    Error(String),
}

impl Notice {
    pub fn title(&self) -> &str {
        match self {
            Notice::MissingFields => "필수 입력 항목 누락",
            Notice::InvalidPhone => "유효하지 않은 전화번호",
            Notice::FieldsCleared => "입력 초기화",
            Notice::Match => "일치",
            Notice::Mismatch(_) => "불일치",
            Notice::Error(_) => "오류 발생",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::MissingFields => "모든 필드를 입력해 주세요.",
            Notice::InvalidPhone => "전화번호는 010XXXXXXXX 또는 010-XXXX-XXXX 형식이어야 합니다.",
            Notice::FieldsCleared => "모든 필드를 비웠습니다.",
            Notice::Match => "통관고유부호가 일치합니다.",
            Notice::Mismatch(reason) => reason,
            Notice::Error(message) => message,
        }
    }

    pub fn style(&self) -> NoticeStyle {
        match self {
            Notice::Match | Notice::FieldsCleared => NoticeStyle::Success,
            _ => NoticeStyle::Failure,
        }
    }
}

impl From<Verdict> for Notice {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Match => Notice::Match,
            Verdict::Mismatch(reason) => Notice::Mismatch(reason),
            Verdict::Error(message) => Notice::Error(message),
        }
    }
}

impl From<&QueryError> for Notice {
    fn from(err: &QueryError) -> Self {
        match err {
            QueryError::Validation(ValidationError::MissingFields) => Notice::MissingFields,
            QueryError::Validation(ValidationError::InvalidPhone) => Notice::InvalidPhone,
            other => Notice::from(Verdict::Error(other.user_message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MalformedResponse, NetworkError};

    #[test]
    fn mismatch_carries_reason_text() {
        let notice = Notice::from(Verdict::Mismatch("정보가 일치하지 않습니다".into()));
        assert_eq!(notice.title(), "불일치");
        assert_eq!(notice.message(), "정보가 일치하지 않습니다");
        assert_eq!(notice.style(), NoticeStyle::Failure);
    }

    #[test]
    fn match_is_success() {
        let notice = Notice::from(Verdict::Match);
        assert_eq!(notice.style(), NoticeStyle::Success);
        assert_eq!(notice.message(), "통관고유부호가 일치합니다.");
    }

    #[test]
    fn errors_map_to_categories() {
        let missing = QueryError::from(ValidationError::MissingFields);
        assert_eq!(Notice::from(&missing), Notice::MissingFields);

        let phone = QueryError::from(ValidationError::InvalidPhone);
        assert_eq!(Notice::from(&phone), Notice::InvalidPhone);

        let timeout = QueryError::from(NetworkError::Timeout);
        assert_eq!(
            Notice::from(&timeout),
            Notice::Error("요청 시간이 초과되었습니다.".into())
        );

        let status = QueryError::from(NetworkError::Status {
            status: 503,
            body: "busy".into(),
        });
        assert_eq!(
            Notice::from(&status),
            Notice::Error("서버 오류가 발생했습니다. (HTTP 503)".into())
        );

        let malformed = QueryError::from(MalformedResponse::NotXml);
        assert_eq!(
            Notice::from(&malformed),
            Notice::Error("유효하지 않은 XML 응답을 받았습니다".into())
        );

        let missing_data = QueryError::from(MalformedResponse::MissingData);
        assert_eq!(
            Notice::from(&missing_data),
            Notice::Error("응답을 해석할 수 없습니다.".into())
        );
    }
}
