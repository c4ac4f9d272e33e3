//! Sitemap entries and their XML form.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use url::Url;

use crate::error::SitemapError;

/// One child element of a sitemap document.
///
/// The entry type fixes the document's root element, so a writer can only ever
/// produce a homogeneous `<urlset>` or `<sitemapindex>`.
pub trait SitemapEntry {
    /// Root element of documents made of this entry type.
    const ROOT: &'static str;

    /// Serialize this entry as one child of the root element.
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), SitemapError>;
}

/// How often a page is expected to change (`<changefreq>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl core::fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative crawl priority (`<priority>`), within `0.0..=1.0`.
///
/// Rendered with one decimal place, as crawlers expect (`0.8`, `1.0`). Values
/// with more precision are rounded to the nearest tenth when written, so
/// `0.86` is published as `0.9`; [`value`](Self::value) keeps the exact input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Priority(f32);

impl Priority {
    pub fn new(value: f32) -> Result<Self, SitemapError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(SitemapError::InvalidPriority(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// A crawlable page (`<url>` inside `<urlset>`).
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: Url,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<Priority>,
}

impl UrlEntry {
    pub fn new(loc: Url) -> Self {
        Self {
            loc,
            changefreq: None,
            priority: None,
        }
    }

    pub fn with_changefreq(mut self, changefreq: ChangeFreq) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl SitemapEntry for UrlEntry {
    const ROOT: &'static str = "urlset";

    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), SitemapError> {
        start(writer, "url")?;
        text_element(writer, "loc", self.loc.as_str())?;
        if let Some(changefreq) = self.changefreq {
            text_element(writer, "changefreq", changefreq.as_str())?;
        }
        if let Some(priority) = self.priority {
            text_element(writer, "priority", &priority.to_string())?;
        }
        end(writer, "url")
    }
}

/// A child sitemap (`<sitemap>` inside `<sitemapindex>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub loc: Url,
}

impl IndexEntry {
    pub fn new(loc: Url) -> Self {
        Self { loc }
    }
}

impl SitemapEntry for IndexEntry {
    const ROOT: &'static str = "sitemapindex";

    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), SitemapError> {
        start(writer, "sitemap")?;
        text_element(writer, "loc", self.loc.as_str())?;
        end(writer, "sitemap")
    }
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), SitemapError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(SitemapError::write)
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), SitemapError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(SitemapError::write)
}

// `BytesText::new` escapes markup characters.
fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<(), SitemapError> {
    start(writer, name)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(SitemapError::write)?;
    end(writer, name)
}
