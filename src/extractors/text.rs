use scraper::{ElementRef, Html, Selector};

/// Text of every descendant text node, concatenated without separators.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text of the first node matching `selector`, or an empty string if nothing matches.
pub fn extract_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Like [`extract_text`], scoped to the descendants of `row`.
pub fn extract_row_text(row: ElementRef<'_>, selector: &Selector) -> String {
    row.select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Text of every match in document order, joined with single spaces and trimmed.
pub fn extract_joined_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .map(element_text)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(s: &str) -> Selector {
        Selector::parse(s).unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let doc = Html::parse_fragment(r#"<p class="a">one</p><p class="a">two</p>"#);
        assert_eq!(extract_text(&doc, &sel(".a")), "one");
    }

    #[test]
    fn test_no_match_is_empty() {
        let doc = Html::parse_fragment(r#"<p class="a">one</p>"#);
        assert_eq!(extract_text(&doc, &sel(".missing")), "");
        assert_eq!(extract_joined_text(&doc, &sel(".missing")), "");
    }

    #[test]
    fn test_nested_text_is_concatenated() {
        let doc = Html::parse_fragment(r#"<div class="a">Mix <b>well</b> now</div>"#);
        assert_eq!(extract_text(&doc, &sel(".a")), "Mix well now");
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let doc = Html::parse_fragment(r#"<span class="a"> 2 </span>"#);
        assert_eq!(extract_text(&doc, &sel(".a")), " 2 ");
    }

    #[test]
    fn test_joined_text_uses_document_order() {
        let doc = Html::parse_fragment(
            r#"<span class="v">1</span><span class="u">hour</span><span class="v">30</span><span class="u">minutes</span>"#,
        );
        assert_eq!(
            extract_joined_text(&doc, &sel(".u, .v")),
            "1 hour 30 minutes"
        );
    }

    #[test]
    fn test_row_text_ignores_other_rows() {
        let doc = Html::parse_fragment(
            r#"<li class="row"><span class="x">first</span></li><li class="row"></li>"#,
        );
        let rows: Vec<_> = doc.select(&sel(".row")).collect();
        assert_eq!(extract_row_text(rows[0], &sel(".x")), "first");
        assert_eq!(extract_row_text(rows[1], &sel(".x")), "");
    }
}
