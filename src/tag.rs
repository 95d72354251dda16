use chrono::NaiveDateTime;

use crate::client::Client;
use crate::error::Result as WallhavenResult;
use crate::flags::Purity;
use crate::utils::api_time_from_json;

use serde::Deserialize;

/// Tags are keywords used to describe a [`Wallpaper`][crate::wallpaper::Wallpaper].
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct Tag {
    pub id: u64,
    pub name: String,
    /// Other names of the tag, comma separated.
    #[serde(default)]
    pub alias: Option<String>,
    pub category_id: u64,
    /// Name of the tag category, e.g. `Anime & Manga`. Unrelated to
    /// [`Category`][crate::flags::Category].
    pub category: String,
    pub purity: Purity,
    #[serde(deserialize_with = "api_time_from_json")]
    pub created_at: NaiveDateTime,
}

impl Client {
    /// Returns the tag with the given ID.
    ///
    /// ```no_run
    /// # use wallhaven::client::Client;
    /// # fn main() -> wallhaven::error::Result<()> {
    /// let client = Client::new("https://wallhaven.cc/api/v1", "MyProject/1.0")?;
    /// let tag = client.tag(1)?;
    ///
    /// assert_eq!(tag.name, "anime");
    /// # Ok(()) }
    /// ```
    pub fn tag(&self, id: u64) -> WallhavenResult<Tag> {
        let mut url = self.snapshot();
        url.append(format!("/tag/{}", id));

        self.get_data(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::NaiveDate;
    use mockito::Server;

    #[test]
    fn get_tag_by_id() {
        let mut server = Server::new();
        let client = Client::new(&server.url(), "wallhaven/unit_test").unwrap();

        let _m = server
            .mock("GET", "/tag/1")
            .with_body(include_str!("mocked/tag_1.json"))
            .create();

        assert_eq!(
            client.tag(1).unwrap(),
            Tag {
                id: 1,
                name: "anime".into(),
                alias: Some("Chinese cartoons".into()),
                category_id: 1,
                category: "Anime & Manga".into(),
                purity: Purity::Sfw,
                created_at: NaiveDate::from_ymd_opt(2015, 1, 16)
                    .unwrap()
                    .and_hms_opt(4, 6, 45)
                    .unwrap(),
            }
        );
    }

    #[test]
    fn tag_lookup_leaves_client_untouched() {
        let mut server = Server::new();
        let client = Client::new(&server.url(), "wallhaven/unit_test").unwrap();
        let before = client.snapshot();

        let _m = server
            .mock("GET", "/tag/1")
            .with_body(include_str!("mocked/tag_1.json"))
            .expect(2)
            .create();

        client.tag(1).unwrap();
        client.tag(1).unwrap();

        assert_eq!(client.snapshot(), before);
    }

    #[test]
    fn missing_tag() {
        let mut server = Server::new();
        let client = Client::new(&server.url(), "wallhaven/unit_test").unwrap();

        let _m = server
            .mock("GET", "/tag/999999999")
            .with_status(404)
            .with_body(r#"{"error":"Nothing here"}"#)
            .create();

        assert!(matches!(client.tag(999999999), Err(Error::NotFound)));
    }
}
