use serde::{Deserialize, Serialize};

/// Form values as the user (or the clipboard) left them. Any field may be
/// blank while the form is being filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub name: String,
    pub passcode: String,
    pub phone: String,
}

impl InputRecord {
    pub fn new(name: &str, passcode: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            passcode: passcode.to_string(),
            phone: phone.to_string(),
        }
    }

    /// Overwrite only the fields present in `partial`.
    pub fn merge(&mut self, partial: PartialInput) {
        if let Some(name) = partial.name {
            self.name = name;
        }
        if let Some(passcode) = partial.passcode {
            self.passcode = passcode;
        }
        if let Some(phone) = partial.phone {
            self.phone = phone;
        }
    }
}

/// Fields recovered from free text; unset fields were not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialInput {
    pub name: Option<String>,
    pub passcode: Option<String>,
    pub phone: Option<String>,
}

impl PartialInput {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.passcode.is_none() && self.phone.is_none()
    }
}

/// Validated input: name and passcode trimmed, phone reduced to digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    pub name: String,
    pub passcode: String,
    pub phone: String,
}

impl NormalizedInput {
    /// Short form safe for logs.
    pub fn masked(&self) -> String {
        let prefix: String = self.passcode.chars().take(1).collect();
        let skip = self.phone.chars().count().saturating_sub(4);
        let tail: String = self.phone.chars().skip(skip).collect();
        format!("passcode={prefix}*** phone=***{tail}")
    }
}

/// Outcome of one verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch(String),
    Error(String),
}

/// Outer JSON wrapper around the XML payload.
#[derive(Debug, Deserialize)]
pub struct RawEnvelope {
    pub data: String,
}

/// Decoded `persEcmQryRtnVo` record. The service may repeat any element;
/// only the first occurrence is read.
#[derive(Debug, Default, Deserialize)]
pub struct ClearanceRecord {
    #[serde(rename = "tCnt", default)]
    pub t_cnt: Vec<String>,
    #[serde(rename = "ntceInfo", default)]
    pub ntce_info: Vec<String>,
    #[serde(rename = "persEcmQryRtnErrInfoVo", default)]
    pub err_info: Vec<ClearanceErrorInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClearanceErrorInfo {
    #[serde(rename = "errMsgCn", default)]
    pub err_msg_cn: Vec<String>,
}

/// The XML document after decoding. `record` is absent when the root
/// element is something other than `persEcmQryRtnVo`.
#[derive(Debug, Default)]
pub struct ParsedEnvelope {
    pub record: Option<ClearanceRecord>,
}
