//! Sitemap Builder
//!
//! Enumerates static pages and content-derived URLs for every locale, with
//! `xhtml:link` alternates so crawlers see the locale variants as one page.
//! The slug list comes from the English tree, the canonical content set.

use chrono::Utc;
use onramp_content::{ContentKind, ContentStore, Result};
use onramp_core::locale::ALL_LOCALES;

/// Static page paths, relative to the locale root.
const STATIC_PATHS: [&str; 6] = ["", "/course", "/glossary", "/prices", "/ask", "/community"];

pub fn build_sitemap(base_url: &str, store: &ContentStore) -> Result<String> {
    let lastmod = Utc::now().format("%Y-%m-%d").to_string();

    let mut xml = String::with_capacity(8 * 1024);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for path in STATIC_PATHS {
        let (changefreq, priority) = match path {
            "" => ("weekly", "1.0"),
            "/prices" => ("hourly", "0.8"),
            _ => ("weekly", "0.8"),
        };
        push_localized_url(&mut xml, base_url, path, &lastmod, changefreq, priority);
    }

    for slug in store.slugs(ContentKind::Course, onramp_core::Locale::En)? {
        let path = format!("/course/{slug}");
        push_localized_url(&mut xml, base_url, &path, &lastmod, "monthly", "0.7");
    }

    for slug in store.slugs(ContentKind::Glossary, onramp_core::Locale::En)? {
        let path = format!("/glossary/{slug}");
        push_localized_url(&mut xml, base_url, &path, &lastmod, "monthly", "0.6");
    }

    xml.push_str("</urlset>\n");
    Ok(xml)
}

/// One `<url>` entry per locale for a path, each carrying alternates for
/// every locale.
fn push_localized_url(
    xml: &mut String,
    base_url: &str,
    path: &str,
    lastmod: &str,
    changefreq: &str,
    priority: &str,
) {
    for locale in ALL_LOCALES {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{base_url}/{locale}{path}</loc>\n"));
        xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        xml.push_str(&format!("    <changefreq>{changefreq}</changefreq>\n"));
        xml.push_str(&format!("    <priority>{priority}</priority>\n"));
        for alternate in ALL_LOCALES {
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"{alternate}\" href=\"{base_url}/{alternate}{path}\"/>\n"
            ));
        }
        xml.push_str("  </url>\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_with_lesson() -> (TempDir, ContentStore) {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("course").join("en");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("lesson-1.md"),
            "+++\ntitle = \"What Is Solana?\"\n+++\nbody\n",
        )
        .unwrap();
        let store = ContentStore::new(tmp.path());
        (tmp, store)
    }

    #[test]
    fn test_contains_static_pages_for_every_locale() {
        let (_tmp, store) = store_with_lesson();
        let xml = build_sitemap("https://buysolanas.com", &store).unwrap();
        assert!(xml.contains("<loc>https://buysolanas.com/en/prices</loc>"));
        assert!(xml.contains("<loc>https://buysolanas.com/zh-CN/prices</loc>"));
        assert!(xml.contains("<loc>https://buysolanas.com/en</loc>"));
    }

    #[test]
    fn test_contains_course_urls_with_alternates() {
        let (_tmp, store) = store_with_lesson();
        let xml = build_sitemap("https://buysolanas.com", &store).unwrap();
        assert!(xml.contains("<loc>https://buysolanas.com/en/course/lesson-1</loc>"));
        assert!(xml.contains(
            "hreflang=\"zh-CN\" href=\"https://buysolanas.com/zh-CN/course/lesson-1\""
        ));
    }

    #[test]
    fn test_prices_page_is_hourly() {
        let (_tmp, store) = store_with_lesson();
        let xml = build_sitemap("https://buysolanas.com", &store).unwrap();
        let prices_entry = xml
            .split("<url>")
            .find(|chunk| chunk.contains("/en/prices"))
            .unwrap();
        assert!(prices_entry.contains("<changefreq>hourly</changefreq>"));
    }
}
