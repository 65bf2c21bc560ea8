//! Typed models for API entities
//!
//! Content items share the [`Post`] base, which concrete variants embed by
//! composition. Every model hydrates through
//! [`FromApiObject`](crate::hydration::FromApiObject).

pub mod answer;
pub mod post;
pub mod question;
pub mod site;
pub mod user;

pub use answer::Answer;
pub use post::{Post, PostType};
pub use question::{ClosedDetails, MigrationInfo, Notice, Question};
pub use site::{RelatedSite, Site, SiteState};
pub use user::{BadgeCounts, ShallowUser, User, UserType};
