use tracing_subscriber::EnvFilter;

use wallhaven::client::{Client, WALLHAVEN_API_URL};
use wallhaven::error::Error;

fn main() -> wallhaven::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::new(WALLHAVEN_API_URL, "MyProject/1.0")?;

    println!("Some very specific wallpapers fetched by ID:");

    for id in ["94x38z", "doesnotexist", "6k3oox"] {
        match client.wallpaper(id) {
            Ok(wallpaper) => println!(
                "- {} by {}, tagged {}",
                wallpaper.id,
                wallpaper
                    .uploader
                    .map(|u| u.username)
                    .unwrap_or_else(|| "?".into()),
                wallpaper
                    .tags
                    .iter()
                    .map(|t| t.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Err(Error::NotFound) => println!("- {} doesn't exist", id),
            Err(e) => println!("- couldn't load wallpaper: {}", e),
        }
    }

    Ok(())
}
