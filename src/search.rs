use crate::client::Client;
use crate::error::Result as WallhavenResult;
use crate::filter::{Filters, Sorting};
use crate::url_builder::UrlBuilder;
use crate::wallpaper::Wallpaper;

use serde::Deserialize;

use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// What a listing was searched with, as echoed back by the API.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[serde(untagged)]
pub enum MetaQuery {
    /// A free text search.
    Text(String),
    /// An exact tag search (`id:<tag id>`), with the name of the tag.
    Tag { id: u64, tag: String },
}

/// Pagination data of a [`Listing`].
#[serde_as]
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct ListingMeta {
    pub current_page: u32,
    pub last_page: u32,
    // Sent as a number by `/search` and as a string by `/collections`.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub per_page: u32,
    pub total: u64,
    #[serde(default)]
    pub query: Option<MetaQuery>,
    /// Seed of a [`Sorting::Random`] search. Pass it to [`Filters::seed`] to get the
    /// following pages in the same order.
    #[serde(default)]
    pub seed: Option<String>,
}

impl ListingMeta {
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// One page of wallpapers.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct Listing {
    #[serde(rename = "data")]
    pub wallpapers: Vec<Wallpaper>,
    pub meta: ListingMeta,
}

/// A listing request: a search, the top list, a collection...
///
/// A query starts as a snapshot of the [`Client`] configuration. Its own filters don't affect
/// the client, and fetching a page doesn't affect the query, so the same query can fetch any
/// number of pages.
///
/// ```no_run
/// # use wallhaven::client::Client;
/// # use wallhaven::filter::{Filters, Sorting};
/// # fn main() -> wallhaven::error::Result<()> {
/// let client = Client::new("https://wallhaven.cc/api/v1", "MyProject/1.0")?;
///
/// let mut query = client.search("nature");
/// query.sorting(Sorting::Views);
///
/// let first = query.get()?;
/// if first.meta.has_next_page() {
///     let second = query.page(2)?;
///     println!("{} wallpapers on page 2", second.wallpapers.len());
/// }
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct Query<'a> {
    client: &'a Client,
    url: UrlBuilder,
}

impl<'a> Query<'a> {
    pub(crate) fn new(client: &'a Client, path: String) -> Self {
        let mut url = client.snapshot();
        url.append(path);

        Query { client, url }
    }

    /// The URL that [`get`](Self::get) requests.
    pub fn url(&self) -> String {
        self.url.build()
    }

    /// Fetch the first page.
    pub fn get(&self) -> WallhavenResult<Listing> {
        self.client.get_json(&self.url)
    }

    /// Fetch the given page. Pages start at 1.
    pub fn page(&self, page: u32) -> WallhavenResult<Listing> {
        let mut url = self.url.clone();
        url.set_int("page", page.into());
        self.client.get_json(&url)
    }
}

impl Filters for Query<'_> {
    fn url_builder(&mut self) -> &mut UrlBuilder {
        &mut self.url
    }
}

impl Client {
    /// Search wallpapers. `q` uses the syntax of the website: tags, `-excluded`, `+required`,
    /// `@username`, `type:png`...
    ///
    /// ```no_run
    /// # use wallhaven::client::Client;
    /// # fn main() -> wallhaven::error::Result<()> {
    /// let client = Client::new("https://wallhaven.cc/api/v1", "MyProject/1.0")?;
    ///
    /// for wallpaper in client.search("+nature -city").get()?.wallpapers {
    ///     println!("{}", wallpaper.path);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn search(&self, q: &str) -> Query<'_> {
        let mut query = Query::new(self, "/search".into());
        query.url.set_string("q", q);
        query
    }

    /// Search wallpapers having exactly the tag with the given ID.
    pub fn search_tag(&self, tag_id: u64) -> Query<'_> {
        self.search(&format!("id:{}", tag_id))
    }

    /// Search wallpapers similar to the one with the given ID.
    pub fn similar(&self, wallpaper_id: &str) -> Query<'_> {
        self.search(&format!("like:{}", wallpaper_id))
    }

    /// The most popular wallpapers. Use [`Filters::top_range`] to pick the time window.
    pub fn top_list(&self) -> Query<'_> {
        self.sorted(Sorting::Toplist)
    }

    /// Wallpapers trending right now.
    pub fn hot(&self) -> Query<'_> {
        self.sorted(Sorting::Hot)
    }

    /// The most recent wallpapers.
    pub fn latest(&self) -> Query<'_> {
        self.sorted(Sorting::DateAdded)
    }

    /// Wallpapers in random order. The seed of the first page is in [`ListingMeta::seed`].
    pub fn random(&self) -> Query<'_> {
        self.sorted(Sorting::Random)
    }

    fn sorted(&self, sorting: Sorting) -> Query<'_> {
        let mut query = Query::new(self, "/search".into());
        query.sorting(sorting);
        query
    }
}
