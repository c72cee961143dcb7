//! Line-by-line parser for the MPTCP connections table
use std::io::BufRead;

use log::{debug, trace};

use crate::error::{MptcpError, Result};
use crate::table::{TableEntry, MIN_ENTRY_FIELDS, TABLE_HEADER};

/// Lazy reader over the rows of an MPTCP connections table.
///
/// The header is validated on construction. Iteration yields one entry per
/// data line in file order and stops for good after the first error.
pub struct TableReader<R> {
    lines: std::io::Lines<R>,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> TableReader<R> {
    /// Read and validate the header line of `reader`.
    pub fn new(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(MptcpError::UnexpectedEndOfStream),
        };

        if !is_table_header(&header) {
            debug!("Rejecting MPTCP table with header {:?}", header);
            return Err(MptcpError::InvalidTableFormat);
        }

        Ok(TableReader {
            lines,
            line_no: 1,
            done: false,
        })
    }
}

impl<R: BufRead> Iterator for TableReader<R> {
    type Item = Result<TableEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = match self.lines.next()? {
            Ok(line) => {
                self.line_no += 1;
                parse_entry(&line, self.line_no)
            }
            Err(e) => Err(MptcpError::Io(e)),
        };

        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

/// Check a line against the known header, token by token.
pub fn is_table_header(line: &str) -> bool {
    line.split_whitespace().eq(TABLE_HEADER.split_whitespace())
}

/// Parse one data row. `line_no` is only used for error reporting.
pub fn parse_entry(line: &str, line_no: usize) -> Result<TableEntry> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_ENTRY_FIELDS {
        return Err(MptcpError::InvalidTableEntry { line: line_no });
    }

    let entry = TableEntry {
        slot: fields[0].trim_end_matches(':').to_string(),
        local_token: fields[1].to_string(),
        remote_token: fields[2].to_string(),
        is_ipv6: fields[3] == "1",
        local_address: fields[4].to_string(),
        remote_address: fields[5].to_string(),
    };
    trace!("Parsed MPTCP entry {}: {:?}", line_no, entry);

    Ok(entry)
}

/// Parse a whole table. Fails on the first bad line without returning any
/// of the entries read before it.
pub fn parse_table<R: BufRead>(reader: R) -> Result<Vec<TableEntry>> {
    TableReader::new(reader)?.collect()
}
