pub mod dispatch;
pub mod list;
pub mod schema;
pub mod show;
pub mod stories;
