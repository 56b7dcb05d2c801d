use crate::DeviceError;

/// A line-oriented input/output device.
///
/// The questionnaire owns its device for its whole lifetime. It renders a
/// prompt, blocks on [`LineDevice::request_line`] for exactly one line, and
/// prints feedback between questions. [`LineDevice::close`] is called once per
/// finished run; a device must accept prompts again afterwards so the
/// questionnaire can be reused.
pub trait LineDevice {
    /// Render a prompt without a trailing newline.
    fn prompt(&mut self, text: &str) -> Result<(), DeviceError>;

    /// Block until one line of input is available.
    ///
    /// The returned text may carry surrounding whitespace; callers trim it.
    /// End of input is [`DeviceError::Closed`].
    fn request_line(&mut self) -> Result<String, DeviceError>;

    /// Print a message on its own line.
    fn print(&mut self, text: &str) -> Result<(), DeviceError>;

    /// Release the device at the end of a run.
    fn close(&mut self) -> Result<(), DeviceError> {
        Ok(())
    }
}

impl<D: LineDevice + ?Sized> LineDevice for &mut D {
    fn prompt(&mut self, text: &str) -> Result<(), DeviceError> {
        (**self).prompt(text)
    }

    fn request_line(&mut self) -> Result<String, DeviceError> {
        (**self).request_line()
    }

    fn print(&mut self, text: &str) -> Result<(), DeviceError> {
        (**self).print(text)
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        (**self).close()
    }
}

impl<D: LineDevice + ?Sized> LineDevice for Box<D> {
    fn prompt(&mut self, text: &str) -> Result<(), DeviceError> {
        (**self).prompt(text)
    }

    fn request_line(&mut self) -> Result<String, DeviceError> {
        (**self).request_line()
    }

    fn print(&mut self, text: &str) -> Result<(), DeviceError> {
        (**self).print(text)
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        (**self).close()
    }
}
