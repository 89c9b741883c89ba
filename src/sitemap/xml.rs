// src/sitemap/xml.rs
// =============================================================================
// This module turns the entry list into sitemap-protocol-0.9 XML.
//
// We use the `quick-xml` crate's event-based Writer:
// - Every tag is written as an explicit Start/Text/End event
// - Writer::new_with_indent gives us pretty-printed output with a
//   consistent 2-space indent and no whitespace-only text nodes
// - BytesText::new escapes special characters (&, <, >, quotes) for us,
//   so a loc like "https://example.com/a?b=1&c=2" comes out valid
//
// The output looks like:
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com/</loc>
//       <lastmod>2026-08-23</lastmod>
//       <changefreq>weekly</changefreq>
//       <priority>1.0</priority>
//     </url>
//   </urlset>
//
// This is pure formatting: entries in, String out, no I/O.
// =============================================================================

use super::PageEntry;
use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// The sitemap protocol namespace every <urlset> must declare
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// Serializes the entries to a complete XML document
//
// One <url> child per entry, in the order given - the document order is
// part of the contract (readers may treat it as a relevance signal).
pub fn write_urlset(entries: &[PageEntry]) -> Result<String> {
    // Write into an in-memory buffer, indenting nested elements by 2 spaces
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    // <?xml version="1.0" encoding="UTF-8"?>
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    // <urlset xmlns="...">
    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(urlset))?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;

        write_text_element(&mut writer, "loc", &entry.loc)?;
        // <lastmod> wants the ISO calendar-date form, YYYY-MM-DD
        write_text_element(&mut writer, "lastmod", &entry.lastmod.format("%Y-%m-%d").to_string())?;
        write_text_element(&mut writer, "changefreq", entry.changefreq.as_str())?;
        // One decimal place, e.g. "0.8" - the form the protocol examples use
        write_text_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;

        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    // The Cursor owns a Vec<u8> of valid UTF-8 (we only ever wrote UTF-8)
    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

// Writes one <tag>text</tag> element
fn write_text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    tag: &str,
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    // BytesText::new escapes &, <, > and quotes in the text for us
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an event-based writer instead of format! strings?
//    - The writer owns escaping and indentation, so we can't produce
//      invalid XML by forgetting to escape an ampersand in a URL
//
// 2. What is Cursor<Vec<u8>>?
//    - A Vec<u8> wrapped so it implements the Write trait
//    - into_inner().into_inner() unwraps Writer -> Cursor -> Vec<u8>
//
// 3. Why return String and not write a file here?
//    - Serialization is a pure function; deciding WHERE the bytes go
//      (and whether the directory exists) belongs to the caller
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::classify::Priorities;
    use crate::sitemap::{ChangeFreq, SitemapDocument};
    use chrono::NaiveDate;
    use quick_xml::events::Event as ReadEvent;
    use quick_xml::Reader;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_doc() -> SitemapDocument {
        let mut doc = SitemapDocument::new(Priorities::default(), ChangeFreq::Weekly);
        doc.add_entry("https://example.com/", None, None, Some(date(2024, 5, 1)));
        doc.add_entry(
            "https://example.com/category/shoes",
            None,
            Some(ChangeFreq::Daily),
            Some(date(2024, 5, 2)),
        );
        doc
    }

    // Parses the serializer's output back into (loc, lastmod, changefreq,
    // priority) tuples so we can assert a faithful round trip
    fn parse_back(xml: &str) -> Vec<(String, String, String, String)> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut tuples = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut in_field = false;

        loop {
            match reader.read_event().unwrap() {
                ReadEvent::Start(e) => {
                    let name = e.name();
                    let tag = std::str::from_utf8(name.as_ref()).unwrap();
                    in_field = matches!(tag, "loc" | "lastmod" | "changefreq" | "priority");
                }
                ReadEvent::Text(e) if in_field => {
                    current.push(e.unescape().unwrap().into_owned());
                }
                ReadEvent::End(e) => {
                    in_field = false;
                    if e.name().as_ref() == b"url" {
                        assert_eq!(current.len(), 4, "every <url> has four children");
                        tuples.push((
                            current[0].clone(),
                            current[1].clone(),
                            current[2].clone(),
                            current[3].clone(),
                        ));
                        current.clear();
                    }
                }
                ReadEvent::Eof => break,
                _ => {}
            }
        }

        tuples
    }

    #[test]
    fn test_declaration_and_namespace() {
        let xml = sample_doc().to_xml().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
    }

    #[test]
    fn test_round_trip_preserves_entries_in_order() {
        let xml = sample_doc().to_xml().unwrap();
        let tuples = parse_back(&xml);

        assert_eq!(
            tuples,
            vec![
                (
                    "https://example.com/".to_string(),
                    "2024-05-01".to_string(),
                    "weekly".to_string(),
                    "1.0".to_string(),
                ),
                (
                    "https://example.com/category/shoes".to_string(),
                    "2024-05-02".to_string(),
                    "daily".to_string(),
                    "0.8".to_string(),
                ),
            ]
        );
    }

    #[test]
    fn test_loc_is_escaped_and_unescapes_back() {
        let mut doc = SitemapDocument::new(Priorities::default(), ChangeFreq::Weekly);
        let loc = "https://example.com/search?q=a&lang=en";
        doc.add_entry(loc, None, None, Some(date(2024, 1, 1)));

        let xml = doc.to_xml().unwrap();
        // Escaped on the wire...
        assert!(xml.contains("q=a&amp;lang=en"));
        // ...and recovered intact when parsed back
        assert_eq!(parse_back(&xml)[0].0, loc);
    }

    #[test]
    fn test_empty_document_is_still_well_formed() {
        let doc = SitemapDocument::new(Priorities::default(), ChangeFreq::Weekly);
        let xml = doc.to_xml().unwrap();
        assert!(xml.contains("urlset"));
        assert!(parse_back(&xml).is_empty());
    }

    #[test]
    fn test_output_is_indented() {
        let xml = sample_doc().to_xml().unwrap();
        assert!(xml.contains("\n  <url>"));
        assert!(xml.contains("\n    <loc>"));
    }
}
