//! Streaming XML responses.
//!
//! Documents are rendered on a blocking worker into a [`ChunkedBodyWriter`],
//! which forwards fixed-size chunks over a bounded channel to the response
//! body. Memory per request is bounded by `CHUNK_SIZE * CHANNEL_CAPACITY`
//! regardless of document size.

use std::io::{self, Write};

use axum::body::{Body, Bytes};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use citypages_sitemap::SitemapError;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::warn;

pub const CHUNK_SIZE: usize = 8 * 1024;
const CHANNEL_CAPACITY: usize = 4;

pub const XML_CONTENT_TYPE: &str = "application/xml";

type Chunk = Result<Bytes, io::Error>;

/// `io::Write` sink that feeds an HTTP response body.
///
/// Must only be used from a blocking thread. Writes fail with `BrokenPipe`
/// once the client has gone away.
pub struct ChunkedBodyWriter {
    tx: mpsc::Sender<Chunk>,
    buf: Vec<u8>,
}

impl ChunkedBodyWriter {
    fn new(tx: mpsc::Sender<Chunk>) -> Self {
        Self {
            tx,
            buf: Vec::with_capacity(CHUNK_SIZE),
        }
    }

    fn send_buffered(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let chunk = std::mem::replace(&mut self.buf, Vec::with_capacity(CHUNK_SIZE));
        self.tx
            .blocking_send(Ok(Bytes::from(chunk)))
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "response body dropped"))
    }
}

impl Write for ChunkedBodyWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        if self.buf.len() >= CHUNK_SIZE {
            self.send_buffered()?;
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.send_buffered()
    }
}

/// Respond with an XML document produced by `render`.
///
/// The status line and headers go out before rendering starts, so a failure
/// part-way through aborts the body instead of changing the status.
pub fn stream_xml<F>(render: F) -> Response
where
    F: FnOnce(ChunkedBodyWriter) -> Result<ChunkedBodyWriter, SitemapError> + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<Chunk>(CHANNEL_CAPACITY);
    let abort = tx.clone();

    tokio::task::spawn_blocking(move || {
        if let Err(err) = render(ChunkedBodyWriter::new(tx)) {
            warn!(error = %err, "sitemap stream aborted");
            let _ = abort.blocking_send(Err(io::Error::other(err.to_string())));
        }
    });

    (
        [(header::CONTENT_TYPE, XML_CONTENT_TYPE)],
        Body::from_stream(ReceiverStream::new(rx)),
    )
        .into_response()
}
