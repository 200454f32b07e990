mod admin;
mod auth;
mod chat;
mod discover;
mod roadmap;

pub use admin::AdminCommands;
pub use auth::AuthCommands;
pub use chat::ChatCommands;
pub use discover::DiscoverCommands;
pub use roadmap::RoadmapCommands;
