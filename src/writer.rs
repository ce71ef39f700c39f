use std::fs::File;
use std::io::{BufWriter, Write};
use anyhow::{Result, Context};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use crate::document::Document;

/// Writes folio documents to disk as pretty-printed JSON.
///
/// Automatically enables Brotli compression when the file path ends with
/// `.br` (e.g. `report.folio.json.br`). Compression uses quality level 6,
/// a balanced speed/ratio setting.
///
/// # Examples
///
/// ```no_run
/// # use rfolio::{DocumentWriter, SampleDocumentSource, DocumentSource};
/// # fn main() -> anyhow::Result<()> {
/// let doc = SampleDocumentSource::new().read("")?;
/// DocumentWriter::new("report.folio.json")?.write_document(&doc)?;
/// # Ok(())
/// # }
/// ```
pub struct DocumentWriter {
    writer: Box<dyn Write>,
}

impl DocumentWriter {
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let writer: Box<dyn Write> = if file_path.ends_with(".br") {
            let buf_writer = BufWriter::new(file);
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(buf_writer, 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(DocumentWriter { writer })
    }

    /// Validates and writes the document, consuming the writer.
    pub fn write_document(mut self, doc: &Document) -> Result<()> {
        doc.validate()?;

        let json = serde_json::to_string_pretty(doc)
            .context("Failed to serialize document")?;
        self.writer
            .write_all(json.as_bytes())
            .context("Failed to write document")?;
        self.writer.write_all(b"\n").context("Failed to write document")?;
        self.writer.flush().context("Failed to flush writer")?;
        Ok(())
    }
}
