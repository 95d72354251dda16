use tracing_subscriber::EnvFilter;

use wallhaven::client::{Client, WALLHAVEN_API_URL};
use wallhaven::filter::{Filters, Sorting};
use wallhaven::flags::{Category, Purity};

fn main() -> wallhaven::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut client = Client::new(WALLHAVEN_API_URL, "MyProject/1.0")?;
    client
        .categories([Category::General, Category::Anime])
        .purity([Purity::Sfw]);

    let mut query = client.search("nature");
    query.sorting(Sorting::Favorites).atleast((2560, 1440));

    println!("Most favorited nature wallpapers, page 2:");

    let listing = query.page(2)?;
    for wallpaper in &listing.wallpapers {
        println!(
            "- {} ({}) with {} favorites",
            wallpaper.id, wallpaper.resolution, wallpaper.favorites
        );
    }

    println!(
        "page {}/{} of {} results",
        listing.meta.current_page, listing.meta.last_page, listing.meta.total
    );

    Ok(())
}
