pub mod config;
pub mod content;
pub mod feed;
pub mod logger;
pub mod record;
pub mod server;
pub mod view;
mod test_data;
