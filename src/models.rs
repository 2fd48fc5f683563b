use serde::{Deserialize, Serialize};

/// A comment attached to a talk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub message: String,
}

/// A proposed talk. The title doubles as its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    pub title: String,
    pub presenter: String,
    pub summary: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Request body for PUT /talks/{title}.
#[derive(Debug, Deserialize)]
pub struct PutTalkRequest {
    pub presenter: String,
    pub summary: String,
}

/// Request body for POST /talks/{title}/comments.
#[derive(Debug, Deserialize)]
pub struct PostCommentRequest {
    pub author: String,
    pub message: String,
}

/// Marker for a talk that was changed and then deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tombstone {
    pub title: String,
    pub deleted: bool,
}

/// One entry in a changes response: the talk's current state, or a
/// tombstone when it no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChangedTalk {
    Live(Talk),
    Deleted(Tombstone),
}

impl ChangedTalk {
    pub fn live(talk: Talk) -> Self {
        ChangedTalk::Live(talk)
    }

    /// Create a tombstone entry for a deleted talk.
    pub fn deleted(title: impl Into<String>) -> Self {
        ChangedTalk::Deleted(Tombstone {
            title: title.into(),
            deleted: true,
        })
    }

    pub fn title(&self) -> &str {
        match self {
            ChangedTalk::Live(talk) => &talk.title,
            ChangedTalk::Deleted(tombstone) => &tombstone.title,
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, ChangedTalk::Deleted(_))
    }
}

/// Response for GET /talks. `server_time` is the client's next
/// `changesSince` baseline.
#[derive(Debug, Serialize)]
pub struct TalkUpdates {
    #[serde(rename = "serverTime")]
    pub server_time: u64,
    pub talks: Vec<ChangedTalk>,
}
