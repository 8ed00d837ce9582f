use console::style;

use crate::cli::commands::FeedArgs;
use crate::client::{PageQuery, ScanBackend};
use crate::errors::VulndeckError;
use crate::models::{NewsItem, Page};

pub async fn handle_news(args: FeedArgs) -> Result<(), VulndeckError> {
    let (query, json) = to_query(args.clone());
    let (_, backend) = super::connect(args.config.as_deref()).await?;
    let page = backend.news(&query).await?;
    render_feed(&page, json)
}

pub async fn handle_campaigns(args: FeedArgs) -> Result<(), VulndeckError> {
    let (query, json) = to_query(args.clone());
    let (_, backend) = super::connect(args.config.as_deref()).await?;
    let page = backend.campaigns(&query).await?;
    render_feed(&page, json)
}

fn to_query(args: FeedArgs) -> (PageQuery, bool) {
    (
        PageQuery {
            page: args.page,
            limit: args.limit,
            sort: args.sort,
            order: args.order,
            search: args.search,
        },
        args.json,
    )
}

fn render_feed(page: &Page<NewsItem>, json: bool) -> Result<(), VulndeckError> {
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
        return Ok(());
    }

    if page.items.is_empty() {
        println!("No articles.");
        return Ok(());
    }

    for item in &page.items {
        println!(
            "{}  {}",
            item.news_date.as_deref().unwrap_or("-"),
            style(&item.title).bold()
        );
        if let Some(cves) = item.cves.as_deref().filter(|c| !c.is_empty()) {
            println!("    CVEs: {}", cves.join(", "));
        }
        println!("    {}", item.source);
    }
    println!(
        "page {}/{} ({} total)",
        page.pagination.page, page.pagination.total_pages, page.pagination.total
    );
    Ok(())
}
