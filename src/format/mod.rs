//! Output formatting for wishlist items (CSV, JSON).

use crate::amazon::WishlistItem;
use crate::config::OutputFormat;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Header row written before CSV data.
pub const CSV_HEADER: [&str; 4] = ["Name", "Price", "Url", "Image"];

/// Writes items in the configured format.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Creates `path` and writes all items to it.
    ///
    /// The file handle is dropped before this returns, on success or error.
    pub fn write_to_path(&self, path: &Path, items: &[WishlistItem]) -> Result<()> {
        debug!("Writing {} items to {}", items.len(), path.display());
        let file = File::create(path)?;
        self.write(BufWriter::new(file), items)
    }

    /// Writes all items to `writer`.
    pub fn write<W: Write>(&self, writer: W, items: &[WishlistItem]) -> Result<()> {
        match self.format {
            OutputFormat::Csv => Self::write_csv(writer, items),
            OutputFormat::Json => Self::write_json(writer, items),
        }
    }

    fn write_csv<W: Write>(writer: W, items: &[WishlistItem]) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(CSV_HEADER)?;
        for item in items {
            csv.write_record(item.to_row())?;
        }
        csv.flush()?;
        Ok(())
    }

    fn write_json<W: Write>(mut writer: W, items: &[WishlistItem]) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, items)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
