use tracing_subscriber::EnvFilter;

use wallhaven::client::Client;

macro_rules! input {
    ($($arg:tt)*) => ({
        use std::io::prelude::*;

        print!($($arg)*);

        let mut buffer = String::new();

        std::io::stdout()
            .flush()
            .and_then(|_| std::io::stdin().read_line(&mut buffer))
            .map(move |_| if buffer.trim().is_empty() {
                None
            } else {
                Some(String::from(buffer.trim()))
            })
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = input!("API key (optional): ")?;

    let mut builder = Client::builder().user_agent("MyProject/1.0");
    if let Some(api_key) = api_key {
        builder = builder.api_key(api_key);
    }
    let client = builder.build()?;

    let collections = match input!("Username (empty for yours): ")? {
        Some(username) => client.collections(&username)?,
        None => client.my_collections()?,
    };

    for collection in collections {
        println!(
            "- #{} {} ({} wallpapers, {})",
            collection.id,
            collection.label,
            collection.count,
            if collection.public { "public" } else { "private" }
        );
    }

    Ok(())
}
