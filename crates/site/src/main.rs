use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;

use ecosprout_client::{ApiClient, ClientConfig};
use ecosprout_site::Page;
use ecosprout_store::InMemoryContentStore;

#[derive(Serialize)]
struct Rendered<'a> {
    route: String,
    view: &'a Page,
}

const USAGE: &str = "usage: ecosprout-site [LINK] [--search TERM]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ecosprout_observability::init();

    let mut link = "/".to_string();
    let mut search = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--search" => search = Some(args.next().context(USAGE)?),
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => link = arg,
        }
    }

    let config = ClientConfig::from_env().context("invalid client configuration")?;
    let client = ApiClient::new(config, Arc::new(InMemoryContentStore::seeded()))
        .context("failed to build api client")?;

    let (route, mut page) = ecosprout_site::open(&client, &link)
        .await
        .context("page load was cancelled")?;

    if let Some(term) = search {
        match &mut page {
            Page::Products(products) => products.set_search(term),
            Page::Blog(blog) => blog.set_search(term),
            _ => tracing::warn!(route = %route, "--search only applies to listings"),
        }
    }

    let rendered = Rendered {
        route: route.path(),
        view: &page,
    };
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}
