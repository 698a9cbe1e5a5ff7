//! JSON body returned by `application/dns-json` resolvers.
//!
//! ```text
//! {"Status":0,"TC":false,"RD":true,"RA":true,"AD":false,"CD":false,
//!  "Question":[{"name":"example.com","type":28}],
//!  "Answer":[{"name":"example.com","type":28,"TTL":300,"data":"2606:2800::1"}]}
//! ```
//!
//! Every field is optional on the wire: providers omit `Answer` on NXDOMAIN
//! and NODATA responses, and some send `null` lists. `Authority` and
//! `Comment` are informational only; a shape we do not recognise there
//! decodes as empty instead of failing the whole response.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DohResponse {
    #[serde(rename = "Status", default)]
    pub status: u16,

    #[serde(rename = "TC", default)]
    pub truncated: bool,

    #[serde(rename = "RD", default)]
    pub recursion_desired: bool,

    #[serde(rename = "RA", default)]
    pub recursion_available: bool,

    #[serde(rename = "AD", default)]
    pub authenticated_data: bool,

    #[serde(rename = "CD", default)]
    pub checking_disabled: bool,

    #[serde(rename = "Question", default, deserialize_with = "null_as_empty")]
    pub question: Vec<DohQuestion>,

    #[serde(rename = "Answer", default, deserialize_with = "null_as_empty")]
    pub answer: Vec<DohAnswer>,

    /// Negative answers carry the zone SOA here.
    #[serde(rename = "Authority", default, deserialize_with = "lenient_list")]
    pub authority: Vec<DohAnswer>,

    #[serde(
        rename = "Comment",
        default,
        deserialize_with = "lenient_comment",
        skip_serializing_if = "Option::is_none"
    )]
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DohQuestion {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub record_type: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DohAnswer {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub record_type: u16,

    #[serde(rename = "TTL", default)]
    pub ttl: u32,

    #[serde(default)]
    pub data: String,
}

/// Cloudflare sends a list of strings, Google a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Comment {
    One(String),
    Many(Vec<String>),
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        List(Vec<T>),
        Other(IgnoredAny),
    }

    Ok(match Raw::<T>::deserialize(deserializer)? {
        Raw::List(items) => items,
        Raw::Other(_) => Vec::new(),
    })
}

fn lenient_comment<'de, D>(deserializer: D) -> Result<Option<Comment>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        One(String),
        Many(Vec<String>),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::One(text) => Some(Comment::One(text)),
        Raw::Many(lines) => Some(Comment::Many(lines)),
        Raw::Other(_) => None,
    })
}

impl DohResponse {
    /// Data of the first answer in list order.
    pub fn first_answer(&self) -> Option<&str> {
        self.answer.first().map(|answer| answer.data.as_str())
    }

    /// Response code name for the `Status` field (RFC 1035 §4.1.1).
    pub fn status_name(&self) -> &'static str {
        match self.status {
            0 => "NOERROR",
            1 => "FORMERR",
            2 => "SERVFAIL",
            3 => "NXDOMAIN",
            4 => "NOTIMP",
            5 => "REFUSED",
            _ => "UNKNOWN",
        }
    }

    pub fn comment_text(&self) -> Option<String> {
        match &self.comment {
            Some(Comment::One(text)) => Some(text.clone()),
            Some(Comment::Many(lines)) => Some(lines.join("; ")),
            None => None,
        }
    }
}
