use crate::domain::payment_method::PaymentMethod;
use crate::error::Result;
use std::io::Write;

/// Writes generated payment methods as pretty-printed JSON.
///
/// Works against any `Write` sink (e.g. File, Stdout), so fixtures can be
/// piped into seeding scripts or saved for inspection.
pub struct FixtureWriter<W: Write> {
    writer: W,
}

impl<W: Write> FixtureWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_payment_methods(&mut self, methods: &[PaymentMethod]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, methods)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
