//! Multi-chunk text reassembly
//!
//! Bus writes are short, so a message can arrive over several writes of the
//! same opcode. Bytes accumulate until a chunk ends in `\n` (which is
//! stripped) or the buffer is full. Bytes beyond capacity are dropped, never
//! carried into the next message.

use heapless::{String, Vec};

/// Maximum message length in bytes
pub const MAX_MESSAGE_LEN: usize = 159;

/// A complete message as delivered to the content pipeline
pub type MessageText = String<MAX_MESSAGE_LEN>;

/// Accumulates text chunks for one opcode
#[derive(Debug, Clone, Default)]
pub struct MessageAssembler {
    buffer: Vec<u8, MAX_MESSAGE_LEN>,
}

impl MessageAssembler {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Discard any partially received message
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Number of bytes waiting for a terminator
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed one chunk of text
    ///
    /// Returns the complete message once the chunk ends in a newline or the
    /// buffer has filled up.
    pub fn feed(&mut self, chunk: &[u8]) -> Option<MessageText> {
        for &byte in chunk {
            if self.buffer.push(byte).is_err() {
                break;
            }
        }

        let terminated = self.buffer.last() == Some(&b'\n');
        if !terminated && !self.buffer.is_full() {
            return None;
        }

        if terminated {
            self.buffer.pop();
        }

        let text = decode_text(&self.buffer);
        self.buffer.clear();
        Some(text)
    }
}

/// Convert received bytes to text, cutting at the first invalid UTF-8 sequence
fn decode_text(bytes: &[u8]) -> MessageText {
    let valid = match core::str::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
    };

    // The source buffer has the same capacity
    MessageText::try_from(valid).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_chunk_with_newline() {
        let mut asm = MessageAssembler::new();
        let text = asm.feed(b"hello\n").unwrap();
        assert_eq!(text.as_str(), "hello");
        assert_eq!(asm.pending(), 0);
    }

    #[test]
    fn test_chunks_accumulate_until_newline() {
        let mut asm = MessageAssembler::new();
        assert!(asm.feed(b"hel").is_none());
        assert!(asm.feed(b"lo wo").is_none());
        assert_eq!(asm.pending(), 8);

        let text = asm.feed(b"rld\n").unwrap();
        assert_eq!(text.as_str(), "hello world");
    }

    #[test]
    fn test_newline_only_clears_message() {
        let mut asm = MessageAssembler::new();
        let text = asm.feed(b"\n").unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_embedded_newline_does_not_terminate() {
        let mut asm = MessageAssembler::new();
        assert!(asm.feed(b"a\nb").is_none());
        let text = asm.feed(b"\n").unwrap();
        assert_eq!(text.as_str(), "a\nb");
    }

    #[test]
    fn test_overflow_completes_and_drops_excess() {
        let mut asm = MessageAssembler::new();
        let long = [b'x'; MAX_MESSAGE_LEN + 20];

        let text = asm.feed(&long).unwrap();
        assert_eq!(text.len(), MAX_MESSAGE_LEN);

        // Excess bytes were not queued for the next message
        assert_eq!(asm.pending(), 0);
        assert_eq!(asm.feed(b"next\n").unwrap().as_str(), "next");
    }

    #[test]
    fn test_invalid_utf8_is_cut() {
        let mut asm = MessageAssembler::new();
        let text = asm.feed(b"ok\xFF\xFEtail\n").unwrap();
        assert_eq!(text.as_str(), "ok");
    }

    #[test]
    fn test_reset_discards_partial() {
        let mut asm = MessageAssembler::new();
        assert!(asm.feed(b"stale").is_none());
        asm.reset();
        assert_eq!(asm.feed(b"fresh\n").unwrap().as_str(), "fresh");
    }

    proptest! {
        #[test]
        fn prop_messages_never_exceed_capacity(
            bytes in proptest::collection::vec(any::<u8>(), 0..600),
            chunk in 1usize..40,
        ) {
            let mut asm = MessageAssembler::new();
            for part in bytes.chunks(chunk) {
                if let Some(text) = asm.feed(part) {
                    prop_assert!(text.len() <= MAX_MESSAGE_LEN);
                }
                prop_assert!(asm.pending() < MAX_MESSAGE_LEN);
            }
        }

        #[test]
        fn prop_ascii_round_trips_through_chunks(
            text in "[ -~]{0,120}",
            chunk in 1usize..16,
        ) {
            let mut asm = MessageAssembler::new();
            let mut wire: std::vec::Vec<u8> = text.as_bytes().to_vec();
            wire.push(b'\n');

            let mut result = None;
            for part in wire.chunks(chunk) {
                if let Some(done) = asm.feed(part) {
                    result = Some(done);
                }
            }
            let done = result.unwrap();
            prop_assert_eq!(done.as_str(), text.as_str());
        }
    }
}
