//! Wrapper crate for the [wallhaven.cc](https://wallhaven.cc) API.
//!
//! ## Usage
//!
//! First, create a [`Client`]. An API key is only needed for NSFW content and for the endpoints
//! about your own account.
//!
//! ```no_run
//! # use wallhaven::client::Client;
//! # fn main() -> Result<(), wallhaven::error::Error> {
//! let client = Client::new("https://wallhaven.cc/api/v1", "MyProject/1.0")?;
//! # Ok(()) }
//! ```
//!
//! Now it's ready to go! For example you can get wallpaper `94x38z` like this:
//!
//! ```no_run
//! # use wallhaven::client::Client;
//! # fn main() -> Result<(), wallhaven::error::Error> {
//! # let client = Client::new("https://wallhaven.cc/api/v1", "MyProject/1.0")?;
//! let wallpaper = client.wallpaper("94x38z")?;
//!
//! assert_eq!(wallpaper.id, "94x38z");
//! # Ok(()) }
//! ```
//!
//! Or you can make a search like on the website. Filters set on the client apply to every
//! search made afterwards, filters set on a search only apply to it:
//!
//! ```no_run
//! # use wallhaven::client::Client;
//! use wallhaven::filter::{Filters, TopRange};
//! use wallhaven::flags::{Category, Purity};
//!
//! # fn main() -> Result<(), wallhaven::error::Error> {
//! let mut client = Client::new("https://wallhaven.cc/api/v1", "MyProject/1.0")?;
//! client
//!     .categories([Category::General, Category::Anime])
//!     .purity([Purity::Sfw]);
//!
//! for wallpaper in client.search("nature").page(2)?.wallpapers {
//!     println!("{}", wallpaper.path);
//! }
//!
//! let mut top = client.top_list();
//! top.top_range(TopRange::OneWeek);
//! println!("{} wallpapers in this week's top list", top.get()?.meta.total);
//! # Ok(()) }
//! ```
//!
//! ## Notes
//!
//! Requests are blocking, and are made one at a time by the calling thread. Nothing is retried:
//! errors are returned as they happen, see [`Error`].
//!
//! The API allows 45 requests per minute. `wallhaven` doesn't enforce it, so **you are
//! responsible for not exceeding that limit**.
//!
//! [`Client`]: client/struct.Client.html
//! [`Error`]: error/enum.Error.html

mod utils;

/// Client related structures.
pub mod client;

/// Error management.
pub mod error;

/// Search filters.
pub mod filter;

/// Purity and category flags.
pub mod flags;

/// Searches and other listings.
pub mod search;

/// Tag management.
pub mod tag;

/// Request URL construction.
pub mod url_builder;

/// User settings and collections.
pub mod user;

/// Wallpaper management.
pub mod wallpaper;

pub use filter::Filters;
