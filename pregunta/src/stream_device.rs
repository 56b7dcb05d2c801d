//! Line device over any buffered reader and writer.

use std::io::{self, BufRead, Write};

use crate::{DeviceError, LineDevice};

/// A line device reading from `R` and writing to `W`.
///
/// Works with pipes, files and in-memory buffers as well as the process's
/// standard streams (see [`StreamDevice::stdio`]).
#[derive(Debug)]
pub struct StreamDevice<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamDevice<R, W> {
    /// Create a device from a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Get back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl StreamDevice<io::StdinLock<'static>, io::Stdout> {
    /// Bind standard input and standard output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineDevice for StreamDevice<R, W> {
    fn prompt(&mut self, text: &str) -> Result<(), DeviceError> {
        self.writer.write_all(text.as_bytes()).map_err(DeviceError::from_io)?;
        self.writer.flush().map_err(DeviceError::from_io)
    }

    fn request_line(&mut self) -> Result<String, DeviceError> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(DeviceError::from_io)?;
        if read == 0 {
            return Err(DeviceError::Closed);
        }
        Ok(line)
    }

    fn print(&mut self, text: &str) -> Result<(), DeviceError> {
        writeln!(self.writer, "{text}").map_err(DeviceError::from_io)
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        self.writer.flush().map_err(DeviceError::from_io)
    }
}
