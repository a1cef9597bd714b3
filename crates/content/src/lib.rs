//! Editorial content: blog posts and the team roster.

pub mod blog;
pub mod team;

pub use blog::{Author, BlogPost};
pub use team::{SocialLinks, TeamMember};
