pub mod add;
pub mod bookmarks;
pub mod config;
pub mod feedback;
pub mod filters;
pub mod list;
pub mod render;
pub mod show;
pub mod stats;
pub mod theme;

mod context;

pub use context::AppContext;
