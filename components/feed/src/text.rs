use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Remove everything that looks like a tag from a string.
///
/// This is a single pass over the input, entities and whitespace
/// are kept verbatim.
pub fn plain_text(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use crate::plain_text;

    #[test]
    fn strip_tags() {
        assert_eq!("Hi there", plain_text("<b>Hi</b> there"));
    }

    #[test]
    fn no_tags() {
        let val = "no tags here";
        assert_eq!(val, plain_text(val));
    }

    #[test]
    fn keep_entities_and_whitespace() {
        let val = "<p>  Fish &amp; chips\n</p><br/>";
        assert_eq!("  Fish &amp; chips\n", plain_text(val));
    }

    #[test]
    fn attributes_are_removed_with_tag() {
        let val = r#"<a href="http://example.com" title="x">link</a>"#;
        assert_eq!("link", plain_text(val));
    }

    #[test]
    fn stray_angle_bracket_opens_tag() {
        assert_eq!("1  2", plain_text("1 < 2 and 3 > 2"));
        assert_eq!("a < b", plain_text("a < b"));
    }

    #[test]
    fn not_recursive() {
        assert_eq!("b>", plain_text("<<a>b>"));
    }

    #[test]
    fn idempotent_once_clean() {
        let once = plain_text("<div><h1>Title</h1><p>Body text</p></div>");
        assert_eq!("TitleBody text", once);
        assert_eq!(once, plain_text(&once));
    }
}
