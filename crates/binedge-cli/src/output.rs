use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::error::CliError;

/// Writes one JSON document per call.
///
/// Pretty output is indented by four spaces; object keys come out sorted
/// because `serde_json::Map` is ordered.
pub struct JsonPrinter<W> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    pub fn print(&mut self, value: &Value) -> Result<(), CliError> {
        if self.pretty {
            let mut serializer =
                Serializer::with_formatter(&mut self.writer, PrettyFormatter::with_indent(b"    "));
            value.serialize(&mut serializer)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
