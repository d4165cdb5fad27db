/// Socket read buffer size. Lines longer than one read are reassembled
/// across chunks; no further length cap is enforced.
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Splits a raw byte stream into newline-delimited message lines.
/// Buffers bytes, not text, so a UTF-8 code point split across reads is
/// reassembled before decoding. Trailing partial lines stay buffered.
#[derive(Default)]
pub struct WireFramer {
    buffer: Vec<u8>,
}

impl WireFramer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
    }

    /// Drains the next complete line, trimmed of surrounding whitespace.
    /// Lines that are empty after the trim are skipped, never surfaced.
    pub fn next_line(&mut self) -> Option<String> {
        loop {
            let newline = self.buffer.iter().position(|&b| b == b'\n')?;
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();

            let line = String::from_utf8_lossy(&line[..newline]);
            let line = line.trim();
            if !line.is_empty() {
                return Some(line.to_string());
            }
        }
    }
}
