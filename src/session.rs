use serde::Deserialize;
use time::OffsetDateTime;

use crate::{nullable, timestamp};

/// The decoded body of a search request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchResponse {
    /// The matching sessions, in the order the catalog returned them.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub items: Vec<SessionWithTags>,
}

/// A session together with the tags attached to it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionWithTags {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub item: Session,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub tags: Vec<Tag>,
}

/// A single catalog entry (a talk or class).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub locale: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub directory_id: String,

    /// The title of the session.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub name: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub author: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub created_by: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub last_updated_by: String,

    /// The times it was created and updated.
    #[serde(flatten)]
    pub times: Times,

    /// The descriptive payload.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub additional_fields: AdditionalFields,
}

/// The free-form description of a session.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AdditionalFields {
    /// The time slot, e.g. `01:00 PM - 02:00 PM`.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub duration: String,

    /// The presenter.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub sub_headline: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub description: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub category: String,

    /// The rendered expertise level, e.g. `400 – Expert`.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub expertise: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub content_type: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub headline: String,

    /// The day label, e.g. `June 26th`.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub event_date: String,

    /// The start of `duration` as `HH:MM:SS`, set by normalization.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub duration_start: String,

    /// The end of `duration` as `HH:MM:SS`, set by normalization.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub duration_end: String,
}

/// A classification label such as a location or a day.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Tag {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub locale: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub tag_namespace_id: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub name: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub description: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub created_by: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub last_updated_by: String,

    #[serde(flatten)]
    pub times: Times,
}

/// Creation and modification times. Either may be absent.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Times {
    /// The date and time it was created.
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub date_created: Option<OffsetDateTime>,

    /// The date and time it was last modified.
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub date_updated: Option<OffsetDateTime>,
}
