use crate::core::error::{Result, StatsError};
use crate::core::io::{Lines, MmapSource};
use std::collections::HashMap;
use std::path::Path;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SequenceRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

pub fn read_path(path: &Path) -> Result<Vec<SequenceRecord>> {
    let source = MmapSource::open(path)?;
    parse(source.bytes())
}

/// Parses a whole FASTA buffer into records in file order.
///
/// Body lines are trimmed and upper-cased before being appended. A repeated
/// identifier restarts that record in place, so the last definition wins.
pub fn parse(data: &[u8]) -> Result<Vec<SequenceRecord>> {
    let mut records: Vec<SequenceRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut current: Option<usize> = None;

    for (line_no, raw) in Lines::new(data) {
        let line = raw.trim_ascii();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix(b">") {
            let id = header
                .split(|b| b.is_ascii_whitespace())
                .find(|tok| !tok.is_empty())
                .ok_or_else(|| StatsError::MalformedInput {
                    line: line_no,
                    msg: "header without identifier".to_string(),
                })?;
            let id = std::str::from_utf8(id)
                .map_err(|_| StatsError::MalformedInput {
                    line: line_no,
                    msg: "identifier is not valid UTF-8".to_string(),
                })?
                .to_string();
            let slot = match index.get(&id) {
                Some(&slot) => {
                    records[slot].seq.clear();
                    slot
                }
                None => {
                    records.push(SequenceRecord {
                        id: id.clone(),
                        seq: Vec::new(),
                    });
                    index.insert(id, records.len() - 1);
                    records.len() - 1
                }
            };
            current = Some(slot);
        } else {
            let slot = current.ok_or_else(|| StatsError::MalformedInput {
                line: line_no,
                msg: "sequence data before first header".to_string(),
            })?;
            let seq = &mut records[slot].seq;
            seq.extend(line.iter().map(u8::to_ascii_uppercase));
        }
    }

    Ok(records)
}
