use chrono::NaiveDateTime;

use crate::client::Client;
use crate::error::Result as WallhavenResult;
use crate::flags::{Category, Purity};
use crate::tag::Tag;
use crate::utils::api_time_from_json;

use serde::Deserialize;

#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct Avatar {
    #[serde(rename = "200px")]
    pub size_200px: String,
    #[serde(rename = "128px")]
    pub size_128px: String,
    #[serde(rename = "32px")]
    pub size_32px: String,
    #[serde(rename = "20px")]
    pub size_20px: String,
}

#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct Uploader {
    pub username: String,
    pub group: String,
    pub avatar: Avatar,
}

#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct Thumbs {
    pub large: String,
    pub original: String,
    pub small: String,
}

/// A wallpaper, as returned by [`Client::wallpaper`] or in search results.
///
/// Search results don't include the [`uploader`](Self::uploader) nor the [`tags`](Self::tags).
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct Wallpaper {
    pub id: String,
    /// Page of the wallpaper on the website.
    pub url: String,
    pub short_url: String,
    #[serde(default)]
    pub uploader: Option<Uploader>,
    pub views: u64,
    pub favorites: u64,
    pub source: String,
    pub purity: Purity,
    pub category: Category,
    pub dimension_x: u32,
    pub dimension_y: u32,
    /// `WIDTHxHEIGHT`.
    pub resolution: String,
    /// Width divided by height, e.g. `1.78`.
    pub ratio: String,
    /// In bytes.
    pub file_size: u64,
    /// MIME type of the image.
    pub file_type: String,
    #[serde(deserialize_with = "api_time_from_json")]
    pub created_at: NaiveDateTime,
    /// Dominant colors, as `#rrggbb`.
    pub colors: Vec<String>,
    /// Direct link to the full image.
    pub path: String,
    pub thumbs: Thumbs,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Client {
    /// Returns the wallpaper with the given ID. NSFW wallpapers require an API key.
    ///
    /// ```no_run
    /// # use wallhaven::client::Client;
    /// # fn main() -> wallhaven::error::Result<()> {
    /// let client = Client::new("https://wallhaven.cc/api/v1", "MyProject/1.0")?;
    /// let wallpaper = client.wallpaper("94x38z")?;
    ///
    /// assert_eq!(wallpaper.id, "94x38z");
    /// # Ok(()) }
    /// ```
    pub fn wallpaper(&self, id: &str) -> WallhavenResult<Wallpaper> {
        let mut url = self.snapshot();
        url.append(format!("/w/{}", urlencoding::encode(id)));

        self.get_data(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::{Matcher, Server};

    #[test]
    fn get_wallpaper_by_id() {
        let mut server = Server::new();
        let client = Client::new(&server.url(), "wallhaven/unit_test").unwrap();

        let _m = server
            .mock("GET", "/w/94x38z")
            .with_body(include_str!("mocked/wallpaper_94x38z.json"))
            .create();

        let wallpaper = client.wallpaper("94x38z").unwrap();

        assert_eq!(wallpaper.id, "94x38z");
        assert_eq!(wallpaper.purity, Purity::Sfw);
        assert_eq!(wallpaper.category, Category::Anime);
        assert_eq!((wallpaper.dimension_x, wallpaper.dimension_y), (6742, 3534));
        assert_eq!(wallpaper.file_size, 5070446);
        assert_eq!(wallpaper.colors.len(), 5);
        assert_eq!(wallpaper.created_at.to_string(), "2018-10-31 01:23:10");
        assert_eq!(
            wallpaper.thumbs.small,
            "https://th.wallhaven.cc/small/94/94x38z.jpg"
        );

        let uploader = wallpaper.uploader.unwrap();
        assert_eq!(uploader.username, "test-user");
        assert_eq!(
            uploader.avatar.size_32px,
            "https://wallhaven.cc/images/user/avatar/32/11_3339efb1a0fb.png"
        );

        assert_eq!(wallpaper.tags.len(), 1);
        assert_eq!(wallpaper.tags[0].name, "anime");
    }

    #[test]
    fn api_key_is_sent() {
        let mut server = Server::new();
        let client = Client::builder()
            .base_url(server.url())
            .api_key("secret")
            .build()
            .unwrap();

        let m = server
            .mock("GET", Matcher::Regex(r"^/w/94x38z(\?|$)".into()))
            .match_query(Matcher::UrlEncoded("apikey".into(), "secret".into()))
            .with_body(include_str!("mocked/wallpaper_94x38z.json"))
            .create();

        client.wallpaper("94x38z").unwrap();
        m.assert();
    }

    #[test]
    fn nsfw_without_key() {
        let mut server = Server::new();
        let client = Client::new(&server.url(), "wallhaven/unit_test").unwrap();

        let _m = server
            .mock("GET", "/w/k7q9r1")
            .with_status(401)
            .with_body(r#"{"error":"Unauthorized"}"#)
            .create();

        assert!(matches!(client.wallpaper("k7q9r1"), Err(Error::Unauthorized)));
    }

    #[test]
    fn id_is_percent_encoded() {
        let mut server = Server::new();
        let client = Client::new(&server.url(), "wallhaven/unit_test").unwrap();

        let m = server
            .mock("GET", "/w/a%2Fb")
            .with_status(404)
            .create();

        assert!(matches!(client.wallpaper("a/b"), Err(Error::NotFound)));
        m.assert();
    }
}
