use std::io;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use ntex::web;
use spdlog::{error, info};

use crate::config::Config;
use crate::feed::FeedBuilder;
use crate::record::Article;
use crate::record::record_source::{fetch_records, JsonFileSource, RecordSource};
use crate::view::listing_renderer::{ListingPage, LISTING_CONTENT_TYPE};
use crate::view::rss_renderer::{RssChannel, RSS_CONTENT_TYPE};

struct AppState {
    source: JsonFileSource,
    config: Config,
}

async fn render_rss(state: &AppState) -> Result<Vec<u8>> {
    let (articles, reviews) = fetch_records(&state.source).await?;

    let config = &state.config;
    let builder = FeedBuilder::new(&config.site.author)
        .with_excerpt_length(config.excerpt_length());
    let items = builder.build(&articles, &reviews);
    info!("Feed built with {} posts and {} reviews", articles.len(), reviews.len());

    let channel = RssChannel {
        ch_title: &config.site.title,
        ch_link: &config.site.url,
        ch_desc: &config.site.description,
        last_build_date: Utc::now(),
    };
    Ok(channel.render(&items)?)
}

#[web::get("/rss.xml")]
async fn rss(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    match render_rss(&state).await {
        Ok(xml) => web::HttpResponse::Ok()
            .content_type(RSS_CONTENT_TYPE)
            .body(xml),
        Err(e) => {
            error!("Error rendering rss feed: {:#}", e);
            web::HttpResponse::InternalServerError()
                .body("Error rendering rss feed")
        }
    }
}

async fn list_articles(state: &AppState) -> Result<Vec<Article>> {
    let source = state.source.clone();
    tokio::task::spawn_blocking(move || source.articles()).await?
}

#[web::get("/llms.txt")]
async fn llms(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let articles = match list_articles(&state).await {
        Ok(articles) => articles,
        Err(e) => {
            error!("Error listing posts: {:#}", e);
            return web::HttpResponse::InternalServerError()
                .body("Error listing posts");
        }
    };

    let page = ListingPage {
        site: &state.config.site,
        listing: &state.config.listing,
    };
    web::HttpResponse::Ok()
        .content_type(LISTING_CONTENT_TYPE)
        .body(page.render(&articles))
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    let app_state = Arc::new(AppState {
        source: config.record_source(),
        config,
    });

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(rss)
            .service(llms)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
