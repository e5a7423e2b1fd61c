use std::fmt;

use serde::Serialize;

use crate::image::find_image;
use crate::item::FeedItem;
use crate::text::plain_text;

/// What gets displayed for a single feed item.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ItemSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub text: String,
}

impl ItemSummary {
    pub fn from_item(item: &FeedItem) -> Self {
        let image = find_image(item);
        Self {
            title: item.title().map(|t| plain_text(&t)),
            link: item.link(),
            image: if image.is_empty() { None } else { Some(image) },
            text: item
                .description()
                .map(|d| plain_text(&d))
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for ItemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref title) = self.title {
            write!(f, "{}\n\n", title)?;
        }
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{FeedItem, ItemSummary, Result};

    #[test]
    fn summary_from_description() -> Result<()> {
        let item = FeedItem::from_value(json!({
            "title": "<b>Breaking</b> news",
            "link": "http://example.com/story",
            "description": "<p>Hello <img src=\"http://x.com/i.jpg\"/> world</p>"
        }))?;
        let summary = ItemSummary::from_item(&item);
        assert_eq!(Some("Breaking news".to_string()), summary.title);
        assert_eq!(Some("http://example.com/story".to_string()), summary.link);
        assert_eq!(Some("http://x.com/i.jpg".to_string()), summary.image);
        assert_eq!("Hello  world", summary.text);
        assert_eq!("Breaking news\n\nHello  world", summary.to_string());
        Ok(())
    }

    #[test]
    fn summary_without_image() -> Result<()> {
        let item = FeedItem::from_value(json!({"description": "plain"}))?;
        let summary = ItemSummary::from_item(&item);
        assert_eq!(None, summary.image);
        assert_eq!("plain", summary.to_string());

        let value = serde_json::to_value(&summary)?;
        assert_eq!(json!({"text": "plain"}), value);
        Ok(())
    }

    #[test]
    fn summary_of_empty_item() -> Result<()> {
        let summary = ItemSummary::from_item(&FeedItem::from_value(json!({}))?);
        assert_eq!(ItemSummary::default(), summary);
        Ok(())
    }
}
