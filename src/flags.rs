use serde::Deserialize;

use std::fmt;

/// Number of meaningful bits in every flag family of the API.
const FLAG_WIDTH: usize = 3;

/// Mask keeping only the meaningful bits of a flag family.
const FLAG_MASK: u8 = 0b111;

/// A flag from a 3-bit family, such as [`Purity`] or [`Category`].
pub trait Flag: Copy {
    /// The bit of this flag within its family.
    fn bit(self) -> u8;
}

/// Content purity levels. Combine several of them with [`encode`] (or the
/// [`purity`][crate::filter::Filters::purity] filter).
///
/// Wallpapers also report their own purity with this type.
#[derive(Debug, PartialEq, Eq, Hash, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Purity {
    Sfw = 0b100,
    Sketchy = 0b010,
    Nsfw = 0b001,
}

/// Content categories. Combine several of them with [`encode`] (or the
/// [`categories`][crate::filter::Filters::categories] filter).
///
/// Wallpapers also report their own category with this type.
#[derive(Debug, PartialEq, Eq, Hash, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Category {
    General = 0b100,
    Anime = 0b010,
    People = 0b001,
}

impl Flag for Purity {
    fn bit(self) -> u8 {
        self as u8
    }
}

impl Flag for Category {
    fn bit(self) -> u8 {
        self as u8
    }
}

impl Purity {
    /// Name of the purity level in API responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Purity::Sfw => "sfw",
            Purity::Sketchy => "sketchy",
            Purity::Nsfw => "nsfw",
        }
    }
}

impl Category {
    /// Name of the category in API responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Anime => "anime",
            Category::People => "people",
        }
    }
}

impl fmt::Display for Purity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combine flags of one family into the 3-character binary string the API expects.
///
/// The order of the flags doesn't matter and duplicates are ignored. No flags at all gives
/// `"000"`.
///
/// ```
/// # use wallhaven::flags::{encode, Category};
/// assert_eq!(encode([Category::General, Category::Anime]), "110");
/// assert_eq!(encode::<Category, _>([]), "000");
/// ```
pub fn encode<F, I>(flags: I) -> String
where
    F: Flag,
    I: IntoIterator<Item = F>,
{
    encode_mask(flags.into_iter().fold(0, |mask, flag| mask | flag.bit()))
}

/// Render an already combined mask the same way [`encode`] does. Bits above the third one are
/// ignored.
///
/// ```
/// # use wallhaven::flags::encode_mask;
/// assert_eq!(encode_mask(5), "101");
/// ```
pub fn encode_mask(mask: u8) -> String {
    format!("{:0width$b}", mask & FLAG_MASK, width = FLAG_WIDTH)
}
