// src/render/site.rs
use chrono::{DateTime, SecondsFormat, Utc};
use maud::html;

use crate::config::consts::SITEMAP_FILE;
use crate::day::page_file_name;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// `robots.txt` for a target. Private targets disallow everything; public
/// ones allow everything and point at the sitemap when there is one.
pub fn robots_txt(private: bool, base_url: Option<&str>) -> String {
    if private {
        return s!("User-agent: *\nDisallow: /\n");
    }
    match base_url {
        Some(base) => format!("User-agent: *\nAllow: /\nSitemap: {base}/{SITEMAP_FILE}\n"),
        None => s!("User-agent: *\nAllow: /\n"),
    }
}

/// Sitemap listing every day page under `base_url` (no trailing slash).
pub fn sitemap_xml(base_url: &str, days: &[u32], lastmod: DateTime<Utc>) -> String {
    let stamp = lastmod.to_rfc3339_opts(SecondsFormat::Secs, true);
    let body = html! {
        urlset xmlns=(SITEMAP_NS) {
            @for day in days {
                url {
                    loc { (base_url) "/" (page_file_name(*day)) }
                    lastmod { (stamp) }
                }
            }
        }
    };
    join!(r#"<?xml version="1.0" encoding="UTF-8"?>"#, "\n", &body.into_string(), "\n")
}
