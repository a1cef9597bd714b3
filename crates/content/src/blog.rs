use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ecosprout_core::{Entity, PostId, Slug, ValueObject};

/// Byline shown on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
    pub bio: String,
}

impl ValueObject for Author {}

/// Blog article record.
///
/// `content` is long-form markdown. `tags` are in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub slug: Slug,
    pub excerpt: String,
    pub content: String,
    pub author: Author,
    pub published_at: NaiveDate,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    pub featured: bool,
}

impl BlogPost {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Entity for BlogPost {
    type Id = PostId;

    fn id(&self) -> &PostId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_remote_shape() {
        let json = serde_json::json!({
            "id": "9",
            "title": "Compost 101",
            "slug": "compost-101",
            "excerpt": "Basics.",
            "content": "# Compost",
            "author": { "name": "Dr. Emma Wilson", "avatar": "/a.jpg", "bio": "Scientist" },
            "publishedAt": "2024-01-05",
            "readTime": 6,
            "tags": ["science", "compostable"],
            "image": "/hero.jpg",
            "featured": true
        });

        let post: BlogPost = serde_json::from_value(json).unwrap();
        assert_eq!(post.slug.as_str(), "compost-101");
        assert_eq!(post.published_at, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(post.read_time, 6);
        assert!(post.has_tag("science"));
        assert!(!post.has_tag("Science"));
    }

    #[test]
    fn post_with_unsafe_slug_does_not_decode() {
        let json = serde_json::json!({
            "id": "9",
            "title": "t",
            "slug": "Not Safe",
            "excerpt": "",
            "content": "",
            "author": { "name": "", "avatar": "", "bio": "" },
            "publishedAt": "2024-01-05",
            "readTime": 1,
            "tags": [],
            "image": "",
            "featured": false
        });

        assert!(serde_json::from_value::<BlogPost>(json).is_err());
    }
}
