//! Incremental sitemap document writer.

use std::io::Write;
use std::marker::PhantomData;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::entry::SitemapEntry;
use crate::error::SitemapError;

/// XML namespace of the sitemap protocol.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Writes one sitemap document into `W`, one entry at a time.
///
/// The XML declaration and root start tag are written by [`start`](Self::start);
/// each [`append`](Self::append) writes exactly one child; [`finish`](Self::finish)
/// closes the root and flushes the sink. Nothing is buffered here beyond what
/// the sink itself buffers, so documents of any size stream through.
pub struct SitemapWriter<W: Write, E: SitemapEntry> {
    xml: Writer<W>,
    entries: usize,
    _entry: PhantomData<fn(&E)>,
}

impl<W: Write, E: SitemapEntry> SitemapWriter<W, E> {
    pub fn start(sink: W) -> Result<Self, SitemapError> {
        let mut xml = Writer::new(sink);
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(SitemapError::write)?;

        let mut root = BytesStart::new(E::ROOT);
        root.push_attribute(("xmlns", SITEMAP_NAMESPACE));
        xml.write_event(Event::Start(root))
            .map_err(SitemapError::write)?;

        Ok(Self {
            xml,
            entries: 0,
            _entry: PhantomData,
        })
    }

    pub fn append(&mut self, entry: &E) -> Result<(), SitemapError> {
        entry.write_xml(&mut self.xml)?;
        self.entries += 1;
        Ok(())
    }

    /// Number of entries appended so far.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Close the document and hand back the sink.
    pub fn finish(mut self) -> Result<W, SitemapError> {
        self.xml
            .write_event(Event::End(BytesEnd::new(E::ROOT)))
            .map_err(SitemapError::write)?;

        let mut sink = self.xml.into_inner();
        sink.flush().map_err(SitemapError::write)?;
        Ok(sink)
    }
}
