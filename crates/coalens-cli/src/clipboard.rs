//! Clipboard writes via the OSC 52 terminal escape.
//!
//! Works over SSH and inside terminal multiplexers that pass OSC 52
//! through, which is why it is used instead of a platform clipboard crate.

use std::io::{self, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Copy `text` to the system clipboard through the hosting terminal.
pub fn copy(text: &str) -> io::Result<()> {
  let encoded = STANDARD.encode(text.as_bytes());
  let mut stdout = io::stdout();
  write!(stdout, "\x1b]52;c;{encoded}\x07")?;
  stdout.flush()
}

#[cfg(test)]
mod tests {
  use base64::{Engine as _, engine::general_purpose::STANDARD};

  #[test]
  fn payload_encoding_is_plain_base64() {
    // The escape carries the text base64-encoded; a share link must survive
    // the round trip byte-for-byte.
    let link = "https://coalens.example/share-page?resultId=abc-123";
    let encoded = STANDARD.encode(link.as_bytes());
    let decoded = STANDARD.decode(&encoded).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), link);
  }
}
