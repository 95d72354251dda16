use crate::flags::{self, Category, Purity};
use crate::url_builder::UrlBuilder;

use itertools::Itertools;

use serde::Deserialize;

use std::fmt;

/// How to sort search results.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Sorting {
    DateAdded,
    Relevance,
    Random,
    Views,
    Favorites,
    Toplist,
    Hot,
}

/// Direction of the sort.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Order {
    Descending,
    Ascending,
}

/// Time window of a [`Sorting::Toplist`] search.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone, Copy)]
pub enum TopRange {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "3d")]
    ThreeDays,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl Sorting {
    pub fn as_str(self) -> &'static str {
        match self {
            Sorting::DateAdded => "date_added",
            Sorting::Relevance => "relevance",
            Sorting::Random => "random",
            Sorting::Views => "views",
            Sorting::Favorites => "favorites",
            Sorting::Toplist => "toplist",
            Sorting::Hot => "hot",
        }
    }
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Descending => "desc",
            Order::Ascending => "asc",
        }
    }
}

impl TopRange {
    pub fn as_str(self) -> &'static str {
        match self {
            TopRange::OneDay => "1d",
            TopRange::ThreeDays => "3d",
            TopRange::OneWeek => "1w",
            TopRange::OneMonth => "1M",
            TopRange::ThreeMonths => "3M",
            TopRange::SixMonths => "6M",
            TopRange::OneYear => "1y",
        }
    }
}

impl fmt::Display for Sorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TopRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A screen resolution, written `WIDTHxHEIGHT` on the wire.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// An aspect ratio, written `WIDTHxHEIGHT` on the wire (e.g. `16x9`).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Ratio {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Resolution { width, height }
    }
}

impl Ratio {
    pub fn new(width: u32, height: u32) -> Self {
        Ratio { width, height }
    }
}

impl From<(u32, u32)> for Resolution {
    fn from((width, height): (u32, u32)) -> Self {
        Resolution { width, height }
    }
}

impl From<(u32, u32)> for Ratio {
    fn from((width, height): (u32, u32)) -> Self {
        Ratio { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Search filters, shared by the long-lived [`Client`] configuration and every short-lived
/// [`Query`].
///
/// Filters set on a [`Client`] apply to every query started from it afterwards. Filters set on
/// a [`Query`] only apply to that query.
///
/// ```
/// # use wallhaven::client::Client;
/// # use wallhaven::filter::{Filters, Sorting, Order};
/// # use wallhaven::flags::{Category, Purity};
/// # fn main() -> wallhaven::error::Result<()> {
/// let mut client = Client::new("https://wallhaven.cc/api/v1", "MyProject/1.0")?;
/// client
///     .categories([Category::General, Category::Anime])
///     .purity([Purity::Sfw]);
///
/// let mut query = client.search("nature");
/// query.sorting(Sorting::Views).order(Order::Ascending);
///
/// assert_eq!(
///     query.url(),
///     "https://wallhaven.cc/api/v1/search?categories=110&order=asc&purity=100&q=nature&sorting=views"
/// );
/// # Ok(()) }
/// ```
///
/// [`Client`]: crate::client::Client
/// [`Query`]: crate::search::Query
pub trait Filters {
    /// The URL being configured. Every filter is a mutation of it.
    fn url_builder(&mut self) -> &mut UrlBuilder;

    /// Only include wallpapers from these categories.
    fn categories<I: IntoIterator<Item = Category>>(&mut self, categories: I) -> &mut Self {
        self.url_builder().set_string("categories", flags::encode(categories));
        self
    }

    /// Only include wallpapers with these purity levels. [`Purity::Nsfw`] requires an API key.
    fn purity<I: IntoIterator<Item = Purity>>(&mut self, purity: I) -> &mut Self {
        self.url_builder().set_string("purity", flags::encode(purity));
        self
    }

    /// Set the purity filter from a raw mask, where `0b100` is SFW, `0b010` sketchy and `0b001`
    /// NSFW.
    fn purity_mask(&mut self, mask: u8) -> &mut Self {
        self.url_builder().set_string("purity", flags::encode_mask(mask));
        self
    }

    /// How to sort the results.
    fn sorting(&mut self, sorting: Sorting) -> &mut Self {
        self.url_builder().set_string("sorting", sorting.as_str());
        self
    }

    /// Direction of the sort, descending by default.
    fn order(&mut self, order: Order) -> &mut Self {
        self.url_builder().set_string("order", order.as_str());
        self
    }

    /// Time window for [`Sorting::Toplist`]. Ignored by the API with any other sorting.
    fn top_range(&mut self, range: TopRange) -> &mut Self {
        self.url_builder().set_string("topRange", range.as_str());
        self
    }

    /// Only include wallpapers at least this large.
    fn atleast<R: Into<Resolution>>(&mut self, resolution: R) -> &mut Self {
        self.url_builder()
            .set_string("atleast", resolution.into().to_string());
        self
    }

    /// Seed for [`Sorting::Random`], so that the same order is kept across pages.
    fn seed(&mut self, seed: &str) -> &mut Self {
        self.url_builder().set_string("seed", seed);
        self
    }

    /// Only include wallpapers with this color, given in hex (e.g. `660000`). A leading `#` is
    /// removed.
    fn colors(&mut self, hex: &str) -> &mut Self {
        self.url_builder().set_string("colors", hex.trim_start_matches('#'));
        self
    }

    /// Only include wallpapers with exactly one of these resolutions.
    fn resolutions<I, R>(&mut self, resolutions: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Resolution>,
    {
        let joined = resolutions.into_iter().map(Into::<Resolution>::into).join(",");
        self.url_builder().set_string("resolutions", joined);
        self
    }

    /// Only include wallpapers with one of these aspect ratios.
    fn ratios<I, R>(&mut self, ratios: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Ratio>,
    {
        let joined = ratios.into_iter().map(Into::<Ratio>::into).join(",");
        self.url_builder().set_string("ratios", joined);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare(UrlBuilder);

    impl Filters for Bare {
        fn url_builder(&mut self) -> &mut UrlBuilder {
            &mut self.0
        }
    }

    fn bare() -> Bare {
        Bare(UrlBuilder::new("https://wallhaven.cc/api/v1"))
    }

    #[test]
    fn every_filter() {
        let mut f = bare();
        f.categories([Category::General, Category::Anime])
            .purity([Purity::Sfw, Purity::Sketchy])
            .sorting(Sorting::Toplist)
            .order(Order::Descending)
            .top_range(TopRange::OneMonth)
            .atleast((1920, 1080))
            .seed("abc123")
            .colors("#663399")
            .resolutions([(1920, 1080), (2560, 1440)])
            .ratios([Ratio::new(16, 9), Ratio::new(21, 9)]);

        let b = &f.0;
        assert_eq!(b.get("categories"), Some("110"));
        assert_eq!(b.get("purity"), Some("110"));
        assert_eq!(b.get("sorting"), Some("toplist"));
        assert_eq!(b.get("order"), Some("desc"));
        assert_eq!(b.get("topRange"), Some("1M"));
        assert_eq!(b.get("atleast"), Some("1920x1080"));
        assert_eq!(b.get("seed"), Some("abc123"));
        assert_eq!(b.get("colors"), Some("663399"));
        assert_eq!(b.get("resolutions"), Some("1920x1080,2560x1440"));
        assert_eq!(b.get("ratios"), Some("16x9,21x9"));
    }

    #[test]
    fn purity_mask_overrides_purity() {
        let mut f = bare();
        f.purity([Purity::Sfw]).purity_mask(0b011);

        assert_eq!(f.0.get("purity"), Some("011"));
    }

    #[test]
    fn top_range_from_json() {
        assert_eq!(
            serde_json::from_str::<TopRange>("\"1M\"").unwrap(),
            TopRange::OneMonth
        );
        assert_eq!(
            serde_json::from_str::<TopRange>("\"1y\"").unwrap(),
            TopRange::OneYear
        );
        assert!(serde_json::from_str::<TopRange>("\"1m\"").is_err());
    }

    #[test]
    fn wire_strings() {
        assert_eq!(Sorting::DateAdded.to_string(), "date_added");
        assert_eq!(Order::Ascending.to_string(), "asc");
        assert_eq!(TopRange::ThreeDays.to_string(), "3d");
        assert_eq!(Resolution::new(3840, 2160).to_string(), "3840x2160");
    }
}
