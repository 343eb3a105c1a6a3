use crate::statement::STATEMENT_TERMINATOR;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const WRITER_BUFFER_SIZE: usize = 64 * 1024;
pub const STMT_BUFFER_COUNT: usize = 100;

/// Writes one terminated statement per line to a freshly truncated file.
pub struct StatementWriter {
    writer: BufWriter<File>,
    write_count: usize,
    statements_written: usize,
    max_stmt_buffer: usize,
}

impl StatementWriter {
    /// Create (or truncate) `filename`
    pub fn create(filename: &Path) -> std::io::Result<Self> {
        let file = File::create(filename)?;
        let writer = BufWriter::with_capacity(WRITER_BUFFER_SIZE, file);

        Ok(Self {
            writer,
            write_count: 0,
            statements_written: 0,
            max_stmt_buffer: STMT_BUFFER_COUNT,
        })
    }

    /// Write `stmt`, the statement terminator and a newline
    pub fn write_statement(&mut self, stmt: &str) -> std::io::Result<()> {
        let mut terminator = [0u8; 4];
        self.writer.write_all(stmt.as_bytes())?;
        self.writer
            .write_all(STATEMENT_TERMINATOR.encode_utf8(&mut terminator).as_bytes())?;
        self.writer.write_all(b"\n")?;

        self.statements_written += 1;
        self.write_count += 1;
        if self.write_count >= self.max_stmt_buffer {
            self.write_count = 0;
            self.writer.flush()?;
        }

        Ok(())
    }

    pub fn statements_written(&self) -> usize {
        self.statements_written
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.write_count = 0;
        self.writer.flush()
    }

    /// Flush and close the file, returning the number of statements written
    pub fn finish(mut self) -> std::io::Result<usize> {
        self.flush()?;
        let file = self.writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(self.statements_written)
    }
}

/// Write all `statements` to `filename`, overwriting any existing content
pub fn write_file<S: AsRef<str>>(filename: &Path, statements: &[S]) -> std::io::Result<usize> {
    let mut writer = StatementWriter::create(filename)?;
    for stmt in statements {
        writer.write_statement(stmt.as_ref())?;
    }
    writer.finish()
}
