use reqwest::Method;
use url::Url;
use url::form_urlencoded::Serializer;

use crate::api::models::NormalizedInput;

pub const DEFAULT_ENDPOINT: &str = "https://sellochomes.co.kr/api/v1/sellerlife/unipass/unipass";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// A fully built verification request. Derived once per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    pub content_type: &'static str,
    pub body: String,
}

/// Build the form POST for `input`. Pure; nothing is sent.
pub fn build(endpoint: &Url, input: &NormalizedInput) -> OutboundRequest {
    let body = Serializer::new(String::new())
        .append_pair("persEcm", &input.passcode)
        .append_pair("pltxNm", &input.name)
        .append_pair("cralTelno", &input.phone)
        .finish();

    OutboundRequest {
        method: Method::POST,
        url: endpoint.clone(),
        content_type: FORM_CONTENT_TYPE,
        body,
    }
}

pub fn default_endpoint() -> Url {
    // Constant, known-good URL.
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample() -> NormalizedInput {
        NormalizedInput {
            name: "홍길동".into(),
            passcode: "P123456789012".into(),
            phone: "01012345678".into(),
        }
    }

    #[test]
    fn builds_form_post() {
        let req = build(&default_endpoint(), &sample());
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(req.content_type, FORM_CONTENT_TYPE);
        assert!(req.body.starts_with("persEcm=P123456789012&pltxNm="));
        assert!(req.body.ends_with("&cralTelno=01012345678"));
    }

    #[test]
    fn body_parses_back_to_same_fields() {
        let input = sample();
        let req = build(&default_endpoint(), &input);
        let fields: HashMap<String, String> = url::form_urlencoded::parse(req.body.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields["persEcm"], input.passcode);
        assert_eq!(fields["pltxNm"], input.name);
        assert_eq!(fields["cralTelno"], input.phone);
    }

    #[test]
    fn korean_name_is_percent_encoded() {
        let req = build(&default_endpoint(), &sample());
        assert!(!req.body.contains("홍길동"));
        assert!(req.body.contains("pltxNm=%ED%99%8D%EA%B8%B8%EB%8F%99"));
    }
}
