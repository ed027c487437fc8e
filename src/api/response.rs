use log::debug;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::api::models::{ClearanceRecord, ParsedEnvelope, RawEnvelope, Verdict};
use crate::error::MalformedResponse;

const XML_PREFIX: &str = "<?xml";
const RECORD_ELEMENT: &[u8] = b"persEcmQryRtnVo";

/// Reason shown when the service rejects the query without saying why.
pub const UNKNOWN_ERROR_REASON: &str = "알 수 없는 오류가 발생했습니다.";

/// Turn a raw response body into a verdict.
pub fn interpret(raw: &str) -> Result<Verdict, MalformedResponse> {
    let envelope = parse_envelope(raw)?;
    Ok(decide(&envelope))
}

/// Unwrap the JSON envelope and decode the XML it carries.
pub fn parse_envelope(raw: &str) -> Result<ParsedEnvelope, MalformedResponse> {
    let outer: RawEnvelope = serde_json::from_str(raw).map_err(|e| {
        if e.is_data() {
            MalformedResponse::MissingData
        } else {
            MalformedResponse::NotJson
        }
    })?;

    // Prefix sniff only; the declaration itself is left to the XML reader.
    if !outer.data.starts_with(XML_PREFIX) {
        return Err(MalformedResponse::NotXml);
    }

    decode_xml(&outer.data)
}

fn decode_xml(xml: &str) -> Result<ParsedEnvelope, MalformedResponse> {
    match root_element(xml)? {
        Some(root) if root == RECORD_ELEMENT => {
            let record: ClearanceRecord = quick_xml::de::from_str(xml)
                .map_err(|e| MalformedResponse::Xml(e.to_string()))?;
            Ok(ParsedEnvelope {
                record: Some(record),
            })
        }
        Some(root) => {
            debug!(
                "unexpected root element <{}>",
                String::from_utf8_lossy(&root)
            );
            Ok(ParsedEnvelope::default())
        }
        None => Err(MalformedResponse::Xml("document has no root element".into())),
    }
}

fn root_element(xml: &str) -> Result<Option<Vec<u8>>, MalformedResponse> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(Some(e.local_name().as_ref().to_vec()));
            }
            Ok(Event::Eof) => return Ok(None),
            Ok(_) => continue,
            Err(e) => return Err(MalformedResponse::Xml(e.to_string())),
        }
    }
}

/// `tCnt == "1"` is a match. Otherwise the reason is the first non-blank of
/// the first error record's `errMsgCn`, then `ntceInfo`, then the fallback.
pub fn decide(envelope: &ParsedEnvelope) -> Verdict {
    let Some(record) = envelope.record.as_ref() else {
        return Verdict::Mismatch(UNKNOWN_ERROR_REASON.to_string());
    };

    if record.t_cnt.first().map(|s| s.trim()) == Some("1") {
        return Verdict::Match;
    }

    let err_msg = record
        .err_info
        .first()
        .and_then(|info| non_blank(info.err_msg_cn.first()));
    let reason = err_msg
        .or_else(|| non_blank(record.ntce_info.first()))
        .unwrap_or(UNKNOWN_ERROR_REASON);
    Verdict::Mismatch(reason.to_string())
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}
