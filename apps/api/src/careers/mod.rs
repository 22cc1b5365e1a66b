// Career catalog and profile-to-career ranking.

pub mod catalog;
pub mod handlers;
pub mod matcher;
