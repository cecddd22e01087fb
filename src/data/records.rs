use serde::Deserialize;

/// A comment on a post
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Comment {
    /// Short identifier (without kind prefix)
    #[serde(default)]
    pub id: String,

    /// Full name including kind prefix (e.g. "t1_abc123")
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub author: String,

    /// Markdown body of the comment
    #[serde(default)]
    pub body: String,

    /// Full name of the post this comment belongs to
    #[serde(default)]
    pub link_id: String,

    /// Full name of the thing this comment replies to
    #[serde(default)]
    pub parent_id: String,

    #[serde(default)]
    pub subreddit: String,

    /// Creation time in seconds since the Unix epoch
    #[serde(default)]
    pub created_utc: f64,
}

/// A post, either a self post or a link
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub title: String,

    /// Markdown body of a self post; empty for link posts
    #[serde(default, rename = "selftext")]
    pub self_text: String,

    /// Link target, or the post's own permalink for self posts
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub is_self: bool,

    #[serde(default)]
    pub subreddit: String,

    /// Creation time in seconds since the Unix epoch
    #[serde(default)]
    pub created_utc: f64,
}

/// A private message or a comment reply delivered to the inbox
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub body: String,

    /// Whether this inbox item is a comment reply rather than a message
    #[serde(default)]
    pub was_comment: bool,

    /// Creation time in seconds since the Unix epoch
    #[serde(default)]
    pub created_utc: f64,
}

/// The records produced by a single reap
///
/// Each sequence keeps the order the parser returned it in. A harvest is
/// created fresh per call and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Harvest {
    pub comments: Vec<Comment>,
    pub posts: Vec<Post>,
    pub messages: Vec<Message>,
}

impl Harvest {
    /// Total number of records across all three sequences
    pub fn len(&self) -> usize {
        self.comments.len() + self.posts.len() + self.messages.len()
    }

    /// Returns true if no records of any kind were harvested
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
