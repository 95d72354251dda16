use crate::client::Client;
use crate::error::Result as WallhavenResult;
use crate::filter::TopRange;
use crate::flags::{Category, Purity};
use crate::search::Query;
use crate::utils::bool_from_json;

use serde::Deserialize;

use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// Browsing preferences of the authenticated user.
#[serde_as]
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct UserSettings {
    pub thumb_size: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub per_page: u32,
    pub purity: Vec<Purity>,
    pub categories: Vec<Category>,
    pub resolutions: Vec<String>,
    pub aspect_ratios: Vec<String>,
    pub toplist_range: TopRange,
    pub tag_blacklist: Vec<String>,
    pub user_blacklist: Vec<String>,
}

/// A user's collection of wallpapers. Browse its content with [`Client::collection`].
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct Collection {
    pub id: u64,
    pub label: String,
    pub views: u64,
    #[serde(deserialize_with = "bool_from_json")]
    pub public: bool,
    /// Number of wallpapers in the collection.
    pub count: u64,
}

impl Client {
    /// Returns the settings of the user owning the API key.
    ///
    /// Fails with [`Error::CredentialRequired`] without making any request if the client has
    /// no API key.
    ///
    /// ```no_run
    /// # use wallhaven::client::Client;
    /// # fn main() -> wallhaven::error::Result<()> {
    /// let client = Client::builder().api_key("my-api-key").build()?;
    /// let settings = client.user_settings()?;
    ///
    /// println!("{} wallpapers per page", settings.per_page);
    /// # Ok(()) }
    /// ```
    ///
    /// [`Error::CredentialRequired`]: crate::error::Error::CredentialRequired
    pub fn user_settings(&self) -> WallhavenResult<UserSettings> {
        self.require_api_key("fetch user settings")?;

        let mut url = self.snapshot();
        url.append("/settings");

        self.get_data(&url)
    }

    /// Returns the collections of the user owning the API key, private ones included.
    ///
    /// Fails with [`Error::CredentialRequired`] without making any request if the client has
    /// no API key.
    ///
    /// [`Error::CredentialRequired`]: crate::error::Error::CredentialRequired
    pub fn my_collections(&self) -> WallhavenResult<Vec<Collection>> {
        self.require_api_key("fetch your collections")?;

        let mut url = self.snapshot();
        url.append("/collections");

        self.get_data(&url)
    }

    /// Returns the public collections of the given user.
    pub fn collections(&self, username: &str) -> WallhavenResult<Vec<Collection>> {
        let mut url = self.snapshot();
        url.append(format!("/collections/{}", urlencoding::encode(username)));

        self.get_data(&url)
    }

    /// Browse the wallpapers of a collection.
    ///
    /// ```no_run
    /// # use wallhaven::client::Client;
    /// # fn main() -> wallhaven::error::Result<()> {
    /// let client = Client::new("https://wallhaven.cc/api/v1", "MyProject/1.0")?;
    ///
    /// for collection in client.collections("Gandalf")? {
    ///     let first_page = client.collection("Gandalf", collection.id).get()?;
    ///     println!("{}: {} wallpapers", collection.label, first_page.meta.total);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn collection(&self, username: &str, id: u64) -> Query<'_> {
        Query::new(
            self,
            format!("/collections/{}/{}", urlencoding::encode(username), id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::{Matcher, Server};

    fn authenticated(server: &str) -> Client {
        Client::builder()
            .base_url(server)
            .user_agent("wallhaven/unit_test")
            .api_key("secret")
            .build()
            .unwrap()
    }

    fn with_key() -> Matcher {
        Matcher::UrlEncoded("apikey".into(), "secret".into())
    }

    #[test]
    fn settings_require_api_key() {
        let mut server = Server::new();
        let client = Client::new(&server.url(), "wallhaven/unit_test").unwrap();

        let m = server.mock("GET", Matcher::Any).expect(0).create();

        assert!(matches!(client.user_settings(), Err(Error::CredentialRequired(_))));
        assert!(matches!(client.my_collections(), Err(Error::CredentialRequired(_))));
        m.assert();
    }

    #[test]
    fn get_settings() {
        let mut server = Server::new();
        let client = authenticated(&server.url());

        let m = server
            .mock("GET", Matcher::Regex(r"^/settings(\?|$)".into()))
            .match_query(with_key())
            .with_body(include_str!("mocked/settings.json"))
            .create();

        let settings = client.user_settings().unwrap();
        m.assert();

        assert_eq!(
            settings,
            UserSettings {
                thumb_size: "orig".into(),
                per_page: 24,
                purity: vec![Purity::Sfw, Purity::Sketchy],
                categories: vec![Category::General, Category::Anime, Category::People],
                resolutions: vec!["1920x1080".into(), "2560x1440".into()],
                aspect_ratios: vec!["16x9".into()],
                toplist_range: TopRange::SixMonths,
                tag_blacklist: vec!["blacklist tag".into(), "another tag".into()],
                user_blacklist: vec!["".into()],
            }
        );
    }

    #[test]
    fn invalid_api_key() {
        let mut server = Server::new();
        let client = authenticated(&server.url());

        let _m = server
            .mock("GET", Matcher::Regex(r"^/settings(\?|$)".into()))
            .with_status(401)
            .with_body(r#"{"error":"Unauthorized"}"#)
            .create();

        assert!(matches!(client.user_settings(), Err(Error::Unauthorized)));
    }

    #[test]
    fn get_my_collections() {
        let mut server = Server::new();
        let client = authenticated(&server.url());

        let _m = server
            .mock("GET", Matcher::Regex(r"^/collections(\?|$)".into()))
            .match_query(with_key())
            .with_body(include_str!("mocked/collections.json"))
            .create();

        assert_eq!(
            client.my_collections().unwrap(),
            vec![
                Collection {
                    id: 15,
                    label: "Default".into(),
                    views: 38,
                    public: true,
                    count: 10,
                },
                Collection {
                    id: 17,
                    label: "Private stuff".into(),
                    views: 0,
                    public: false,
                    count: 3,
                },
            ]
        );
    }

    #[test]
    fn get_user_collections() {
        let mut server = Server::new();
        let client = Client::new(&server.url(), "wallhaven/unit_test").unwrap();

        let _m = server
            .mock("GET", "/collections/Gandalf")
            .with_body(include_str!("mocked/collections.json"))
            .create();

        let collections = client.collections("Gandalf").unwrap();
        assert_eq!(collections.len(), 2);
        assert_eq!(collections[0].label, "Default");
    }

    #[test]
    fn unknown_user() {
        let mut server = Server::new();
        let client = Client::new(&server.url(), "wallhaven/unit_test").unwrap();

        let _m = server
            .mock("GET", "/collections/nobody")
            .with_status(404)
            .create();

        assert!(matches!(client.collections("nobody"), Err(Error::NotFound)));
    }

    #[test]
    fn browse_collection() {
        let mut server = Server::new();
        let client = Client::new(&server.url(), "wallhaven/unit_test").unwrap();

        let query = client.collection("Gandalf", 15);
        assert_eq!(query.url(), format!("{}/collections/Gandalf/15", server.url()));

        let _m = server
            .mock("GET", Matcher::Regex(r"^/collections/Gandalf/15(\?|$)".into()))
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_body(include_str!("mocked/collection_15.json"))
            .create();

        let listing = query.page(1).unwrap();
        assert_eq!(listing.wallpapers.len(), 1);
        assert_eq!(listing.wallpapers[0].id, "94x38z");
        assert_eq!(listing.meta.per_page, 24);
        assert_eq!(listing.meta.query, None);
        assert!(!listing.meta.has_next_page());
    }
}
