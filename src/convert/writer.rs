//! JSON output for barcode tables
//!
//! Both converters write 4-space indented JSON. The CSV output keeps
//! non-ASCII text as-is; the text output escapes it as `\uXXXX`.

use super::{ConvertError, ConvertResult};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

const INDENT: &[u8] = b"    ";

/// How non-ASCII characters are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonEscaping {
    /// Write UTF-8 text unchanged
    #[default]
    PreserveUnicode,
    /// Escape every non-ASCII character as a `\uXXXX` sequence (UTF-16 units)
    Ascii,
}

/// Serialize `value` as indented JSON into memory
pub fn to_pretty_json<T: Serialize + ?Sized>(
    value: &T,
    escaping: JsonEscaping,
) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    match escaping {
        JsonEscaping::PreserveUnicode => {
            let mut ser =
                Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
            value.serialize(&mut ser)?;
        }
        JsonEscaping::Ascii => {
            let mut ser = Serializer::with_formatter(&mut buffer, AsciiFormatter::new());
            value.serialize(&mut ser)?;
        }
    }
    Ok(buffer)
}

/// Serialize `value` and replace the contents of `path` with it
///
/// The document is fully rendered before the file is opened, so a
/// serialization failure leaves any existing file untouched.
pub fn write_json_file<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    escaping: JsonEscaping,
) -> ConvertResult<()> {
    let json = to_pretty_json(value, escaping)?;
    std::fs::write(path, &json).map_err(|e| ConvertError::io(path, e))?;
    info!("Wrote {} bytes of JSON to {}", json.len(), path.display());
    Ok(())
}

/// Pretty formatter that escapes non-ASCII string content
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..index])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
