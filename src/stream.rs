//! Streaming response accumulator
//!
//! Chat responses arrive as byte chunks that may split a UTF-8 sequence. The
//! decoder holds back an incomplete trailing sequence until the next chunk;
//! the accumulator keeps the raw text and re-renders all of it after every
//! chunk, which is what makes each stage's repair of a cut-off construct
//! disappear once the rest of the construct arrives.

use tracing::trace;

use crate::core::{process_with_options, RenderOptions};

/// Incremental UTF-8 decoder
///
/// Invalid sequences become U+FFFD. An incomplete sequence at the end of a
/// chunk is kept until more bytes arrive or [`StreamDecoder::finish`] is
/// called.
#[derive(Debug, Clone, Default)]
pub struct StreamDecoder {
    pending: Vec<u8>,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a chunk, returning all text that is complete so far.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);
        let mut out = String::new();
        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(text) => {
                    out.push_str(text);
                    self.pending.clear();
                    return out;
                }
                Err(err) => {
                    let valid = err.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&self.pending[..valid]));
                    match err.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            self.pending.drain(..valid + len);
                        }
                        None => {
                            self.pending.drain(..valid);
                            return out;
                        }
                    }
                }
            }
        }
    }

    /// Flush held-back bytes; an incomplete sequence becomes U+FFFD.
    pub fn finish(&mut self) -> String {
        let out = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        out
    }

    /// Number of bytes held back waiting for the rest of a sequence
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Accumulates one streamed response and keeps its rendered form current
#[derive(Debug, Clone, Default)]
pub struct ResponseStream {
    decoder: StreamDecoder,
    options: RenderOptions,
    raw: String,
    rendered: String,
    chunks: usize,
    finished: bool,
}

impl ResponseStream {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Append a byte chunk and return the re-rendered text.
    pub fn push_bytes(&mut self, chunk: &[u8]) -> &str {
        let text = self.decoder.decode(chunk);
        self.append(&text)
    }

    /// Append already decoded text and return the re-rendered text.
    pub fn push_str(&mut self, chunk: &str) -> &str {
        self.append(chunk)
    }

    fn append(&mut self, text: &str) -> &str {
        self.chunks += 1;
        self.raw.push_str(text);
        self.rendered = process_with_options(&self.raw, &self.options);
        trace!(
            chunk = self.chunks,
            raw_len = self.raw.len(),
            rendered_len = self.rendered.len(),
            "chunk rendered"
        );
        &self.rendered
    }

    /// Flush the decoder and render the complete response.
    pub fn finish(&mut self) -> &str {
        let tail = self.decoder.finish();
        self.raw.push_str(&tail);
        self.rendered = process_with_options(&self.raw, &self.options);
        self.finished = true;
        &self.rendered
    }

    /// Drop everything received so far, e.g. when a new request starts.
    pub fn reset(&mut self) {
        self.decoder = StreamDecoder::new();
        self.raw.clear();
        self.rendered.clear();
        self.chunks = 0;
        self.finished = false;
    }

    /// Text as received, before rendering
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}
