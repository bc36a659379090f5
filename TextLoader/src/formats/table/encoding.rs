//! Byte-order-mark sniffing and transcoding of UTF-16 payloads to UTF-8

use std::borrow::Cow;

use encoding_rs::{UTF_16BE, UTF_16LE};

/// Encodings recognised by the text table reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8 without a byte-order mark (also the fallback for unknown data)
    Utf8,
    /// UTF-8 with an `EF BB BF` byte-order mark
    Utf8Bom,
    /// UTF-16 little-endian with an `FF FE` byte-order mark
    Utf16LeBom,
    /// UTF-16 big-endian with an `FE FF` byte-order mark
    Utf16BeBom,
}

impl TextEncoding {
    /// Detect the encoding from the first bytes of a file.
    ///
    /// Anything without a recognised byte-order mark is treated as UTF-8.
    #[must_use]
    pub fn detect(data: &[u8]) -> Self {
        match data {
            [0xFE, 0xFF, ..] => Self::Utf16BeBom,
            [0xFF, 0xFE, ..] => Self::Utf16LeBom,
            [0xEF, 0xBB, 0xBF, ..] => Self::Utf8Bom,
            _ => Self::Utf8,
        }
    }

    /// Length of the byte-order mark that precedes the payload
    #[must_use]
    pub fn bom_len(self) -> usize {
        match self {
            Self::Utf8 => 0,
            Self::Utf8Bom => 3,
            Self::Utf16LeBom | Self::Utf16BeBom => 2,
        }
    }

    /// Human readable name, used by the CLI
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf8Bom => "UTF-8 (BOM)",
            Self::Utf16LeBom => "UTF-16LE (BOM)",
            Self::Utf16BeBom => "UTF-16BE (BOM)",
        }
    }

    /// Bytes of a payload (BOM already stripped) ready for splitting.
    ///
    /// UTF-8 payloads are returned untouched, even when they hold bytes that
    /// are not valid UTF-8: the host hashes and displays the raw bytes, so
    /// they must reach it unmodified. UTF-16 payloads are transcoded to UTF-8;
    /// unpaired surrogates and a trailing odd byte become U+FFFD.
    pub fn decode(self, payload: &[u8]) -> Cow<'_, [u8]> {
        let encoding = match self {
            Self::Utf8 | Self::Utf8Bom => {
                if std::str::from_utf8(payload).is_err() {
                    tracing::debug!(
                        "{} payload is not valid UTF-8; passing bytes through",
                        self.name()
                    );
                }
                return Cow::Borrowed(payload);
            }
            Self::Utf16LeBom => UTF_16LE,
            Self::Utf16BeBom => UTF_16BE,
        };
        let (text, had_errors) = encoding.decode_without_bom_handling(payload);
        if had_errors {
            tracing::debug!("{} payload contained malformed sequences", self.name());
        }
        Cow::Owned(text.into_owned().into_bytes())
    }
}
