use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::item::{self, FeedItem, Media, URL};

static IMG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<img [^>]*/>").unwrap());

static SRC: &str = "src=\"";
static SCHEME: &str = "http:";

// Where a missing `src="` leaves the cursor: one before the start
// of the string plus the length of the attribute prefix. Counted in
// chars, characters outside the BMP count once.
const MISSING_SRC_OFFSET: usize = 4;

/// Find the best image URL for a feed item.
///
/// Returns the empty string when no image could be found.
pub fn find_image(item: &FeedItem) -> String {
    // Feeds that carry media never fall back to the description
    if let Some(media) = item.media_content() {
        return media_url(media).unwrap_or_default();
    }

    item.description()
        .and_then(|description| image_source(&description))
        .unwrap_or_default()
}

fn media_url(media: Media<'_>) -> Option<String> {
    let selected = match media {
        Media::List(list) => {
            // When there are several entries the second one wins,
            // the first is typically a thumbnail.
            let index = if list.len() > 1 { 1 } else { 0 };
            match list.get(index) {
                Some(entry) => entry.as_object(),
                None => {
                    debug!("empty {} list", item::MEDIA_CONTENT);
                    None
                }
            }
        }
        Media::Map(map) => Some(map),
        Media::Unknown(value) => {
            debug!("could not convert {} {}", item::MEDIA_CONTENT, value);
            None
        }
    }?;

    selected
        .get(URL)
        .map(|url| item::to_string(url).unwrap_or_default())
}

// Naive scan for the first self-closing image tag. The `src` attribute
// is searched from the tag start so it may belong to a later tag.
fn image_source(description: &str) -> Option<String> {
    let start = IMG_TAG
        .find(description)
        .and_then(|tag| {
            description[tag.start()..]
                .find(SRC)
                .map(|pos| tag.start() + pos + SRC.len())
        })
        .or_else(|| {
            description
                .char_indices()
                .nth(MISSING_SRC_OFFSET)
                .map(|(pos, _)| pos)
        })?;

    let end = description[start..]
        .find('"')
        .map(|pos| start + pos)
        .unwrap_or_else(|| description.len());

    let url = &description[start..end];
    if !url.is_empty() && url.contains(SCHEME) {
        return Some(url.to_string());
    }
    None
}
