//! Per-cycle result records and output sinks.
//!
//! The [`RecordSink`] trait abstracts where formatted cycle blocks go.
//! [`ConsoleSink`] prints to stdout, [`FileSink`] appends to a buffered
//! file opened before cycle 0 and flushed when the run finishes. The block
//! format is a compatibility contract and must not change.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Delimiter line framing each cycle block.
pub const BLOCK_DELIMITER: &str = "==========================================";

/// Output-port values captured after one cycle's rising edge.
///
/// Ephemeral: created by the scheduler, handed to the sinks, then dropped.
/// `outputs` preserves the module's declared port order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleRecord {
    /// 0-based cycle index.
    pub index: u32,
    /// `(declared name, value)` per output port, in declaration order.
    pub outputs: Vec<(String, u64)>,
}

/// A destination for formatted cycle records.
///
/// Sinks receive records in strictly increasing cycle order and must not
/// reorder or buffer beyond what the underlying writer needs.
pub trait RecordSink {
    /// Emits one cycle block.
    fn record(&mut self, record: &CycleRecord) -> io::Result<()>;

    /// Flushes and finalizes the sink after the last cycle.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes one cycle block: delimiter, 1-based header, delimiter, then one
/// `name= value` line per output port.
fn write_block<W: Write>(out: &mut W, record: &CycleRecord, trailing_blank: bool) -> io::Result<()> {
    writeln!(out, "{BLOCK_DELIMITER}")?;
    writeln!(out, "= cycle {}", record.index + 1)?;
    writeln!(out, "{BLOCK_DELIMITER}")?;
    for (name, value) in &record.outputs {
        writeln!(out, "{name}= {value}")?;
    }
    if trailing_blank {
        writeln!(out)?;
    }
    Ok(())
}

/// Console sink for verbose runs. Blocks carry a trailing blank line.
#[derive(Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates a console sink.
    pub fn new() -> Self {
        Self
    }
}

impl RecordSink for ConsoleSink {
    fn record(&mut self, record: &CycleRecord) -> io::Result<()> {
        write_block(&mut io::stdout().lock(), record, true)
    }
}

/// Buffered file sink. The file is created when the sink is constructed
/// (before cycle 0) and flushed by [`RecordSink::finish`]; the buffer is
/// also flushed on drop if a cycle fails mid-run.
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Creates the output file and the sink around it.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
        })
    }
}

impl RecordSink for FileSink {
    fn record(&mut self, record: &CycleRecord) -> io::Result<()> {
        write_block(&mut self.writer, record, false)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
