use std::fmt;
use std::str::FromStr;

use crate::errors::FetchError;

/// Text encodings a response body can be decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
    /// 7-bit ASCII; the high bit of every byte is dropped.
    Ascii,
    /// Lowercase hexadecimal rendering of the raw bytes.
    Hex,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin1",
            Encoding::Ascii => "ascii",
            Encoding::Hex => "hex",
        }
    }

    pub(crate) fn decoder(self) -> TextDecoder {
        TextDecoder {
            encoding: self,
            pending: Vec::new(),
        }
    }
}

impl FromStr for Encoding {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "latin1" | "binary" => Ok(Encoding::Latin1),
            "ascii" => Ok(Encoding::Ascii),
            "hex" => Ok(Encoding::Hex),
            _ => Err(FetchError::UnknownEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Incremental decoder fed one network chunk at a time.
///
/// A UTF-8 sequence cut by a chunk boundary is held back until the next
/// chunk arrives. Invalid input decodes to U+FFFD.
#[derive(Debug)]
pub(crate) struct TextDecoder {
    encoding: Encoding,
    pending: Vec<u8>,
}

impl TextDecoder {
    pub(crate) fn write(&mut self, chunk: &[u8], out: &mut String) {
        match self.encoding {
            Encoding::Utf8 => self.write_utf8(chunk, out),
            Encoding::Latin1 => out.extend(chunk.iter().map(|&b| char::from(b))),
            Encoding::Ascii => out.extend(chunk.iter().map(|&b| char::from(b & 0x7f))),
            Encoding::Hex => {
                for b in chunk {
                    out.push(hex_digit(b >> 4));
                    out.push(hex_digit(b & 0x0f));
                }
            }
        }
    }

    /// Flushes whatever is still held back. A truncated sequence at the end
    /// of the stream becomes a single replacement character.
    pub(crate) fn finish(self, out: &mut String) {
        if !self.pending.is_empty() {
            out.push(char::REPLACEMENT_CHARACTER);
        }
    }

    fn write_utf8(&mut self, chunk: &[u8], out: &mut String) {
        let mut buf = std::mem::take(&mut self.pending);
        buf.extend_from_slice(chunk);

        let mut input = &buf[..];
        loop {
            match std::str::from_utf8(input) {
                Ok(s) => {
                    out.push_str(s);
                    return;
                }
                Err(e) => {
                    let (valid, rest) = input.split_at(e.valid_up_to());
                    out.push_str(&String::from_utf8_lossy(valid));

                    match e.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            input = &rest[len..];
                        }
                        None => {
                            // incomplete sequence at the end of the chunk
                            self.pending = rest.to_vec();
                            return;
                        }
                    }
                }
            }
        }
    }
}

fn hex_digit(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16).unwrap_or('0')
}
