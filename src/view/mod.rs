pub mod listing_renderer;
pub mod rss_renderer;
