//! Invite messages and share links.
//!
//! Links are built the way a browser `encodeURIComponent` would encode them,
//! so the native share targets receive the message unchanged.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::{ContentError, ContentResult};

/// Characters left as-is by URI component encoding.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const APP_URL: &str = "https://medcheck.ug";

pub const INVITE_SUBJECT: &str = "Check out MedCheck Uganda";

pub const INVITE_MESSAGE: &str = "\u{1F3E5} Protect yourself and your loved ones!\n\n\
Download MedCheck Uganda to verify medicine authenticity before use.\n\n\
\u{2705} Scan QR codes & batch numbers\n\
\u{2705} Check pharmacy licenses\n\
\u{2705} Get safety tips\n\n\
\"Verify Before You Swallow\"\n\n\
Get the app: https://medcheck.ug";

/// Places an invite can be shared to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    WhatsApp,
    Sms,
    Email,
}

impl SharePlatform {
    pub fn code(&self) -> &'static str {
        match self {
            SharePlatform::WhatsApp => "whatsapp",
            SharePlatform::Sms => "sms",
            SharePlatform::Email => "email",
        }
    }
}

impl FromStr for SharePlatform {
    type Err = ContentError;

    fn from_str(s: &str) -> ContentResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "whatsapp" => Ok(SharePlatform::WhatsApp),
            "sms" => Ok(SharePlatform::Sms),
            "email" => Ok(SharePlatform::Email),
            _ => Err(ContentError::UnknownPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Percent-encode a single URI component.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Link that opens the platform's composer with the invite message.
pub fn invite_link(platform: SharePlatform) -> String {
    let body = encode_component(INVITE_MESSAGE);
    match platform {
        SharePlatform::WhatsApp => format!("https://wa.me/?text={}", body),
        SharePlatform::Sms => sms_uri("", Some(INVITE_MESSAGE)),
        SharePlatform::Email => format!(
            "mailto:?subject={}&body={}",
            encode_component(INVITE_SUBJECT),
            body
        ),
    }
}

/// `sms:` URI for a recipient, with an optional prefilled body.
pub fn sms_uri(recipient: &str, body: Option<&str>) -> String {
    match body {
        Some(body) => format!("sms:{}?body={}", recipient, encode_component(body)),
        None => format!("sms:{}", recipient),
    }
}
