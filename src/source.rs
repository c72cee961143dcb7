//! Sources of MPTCP connections table data
use std::fs::File;
use std::io::{self, BufReader, Cursor};
use std::path::{Path, PathBuf};

use crate::table::{TableEntry, TABLE_HEADER};

/// Location of the Linux MPTCP connections table.
pub const PROC_MPTCP: &str = "/proc/net/mptcp";

/// Something that can hand out a fresh, readable copy of the table.
///
/// Every lookup opens its own reader, so a source holds no scan state.
pub trait TableSource {
    type Reader: io::BufRead;

    /// Open a new reader positioned at the header line.
    fn open(&self) -> io::Result<Self::Reader>;

    /// Check that the table exists without reading it.
    fn stat(&self) -> io::Result<()>;

    /// Human readable name of the source, for log messages.
    fn describe(&self) -> String;
}

/// The table as exposed by the kernel under procfs, or any file in the
/// same format.
#[derive(Debug, Clone)]
pub struct ProcTable {
    path: PathBuf,
}

impl ProcTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProcTable { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ProcTable {
    fn default() -> Self {
        ProcTable::new(PROC_MPTCP)
    }
}

impl TableSource for ProcTable {
    type Reader = BufReader<File>;

    fn open(&self) -> io::Result<Self::Reader> {
        Ok(BufReader::new(File::open(&self.path)?))
    }

    fn stat(&self) -> io::Result<()> {
        std::fs::metadata(&self.path).map(|_| ())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An in-memory table, used as a fixture in place of the kernel file.
#[derive(Debug, Clone, Default)]
pub struct StaticTable {
    contents: String,
}

impl StaticTable {
    /// Wrap raw table text, header included.
    pub fn new(contents: impl Into<String>) -> Self {
        StaticTable {
            contents: contents.into(),
        }
    }

    /// Build a well-formed table holding `entries`.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a TableEntry>) -> Self {
        let mut contents = String::from(TABLE_HEADER);
        contents.push('\n');
        for entry in entries {
            contents.push_str(&entry.to_string());
            contents.push('\n');
        }
        StaticTable { contents }
    }
}

impl TableSource for StaticTable {
    type Reader = Cursor<String>;

    fn open(&self) -> io::Result<Self::Reader> {
        Ok(Cursor::new(self.contents.clone()))
    }

    fn stat(&self) -> io::Result<()> {
        Ok(())
    }

    fn describe(&self) -> String {
        "<in-memory table>".to_string()
    }
}
