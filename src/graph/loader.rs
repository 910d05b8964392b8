//! Edge-list input in the station file format
//!
//! The first line is a header and is skipped. Every following non-blank line
//! holds `stationA,stationB,distance`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::traits::Distance;
use crate::graph::{Edge, StationGraph};
use crate::{Error, Result};

/// Parses edges from a reader
pub fn parse_edges<R: BufRead>(reader: R) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();

    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_number = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        edges.push(parse_record(&line, line_number)?);
    }

    Ok(edges)
}

fn parse_record(line: &str, line_number: usize) -> Result<Edge> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(Error::MalformedRecord {
            line: line_number,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    }

    if let Some(empty) = fields[..2].iter().position(|f| f.is_empty()) {
        return Err(Error::MalformedRecord {
            line: line_number,
            reason: format!("station name in field {} is empty", empty + 1),
        });
    }

    let distance = fields[2].parse::<i64>().map_err(|e| Error::MalformedRecord {
        line: line_number,
        reason: format!("invalid distance {:?}: {}", fields[2], e),
    })?;

    Ok(Edge::new(fields[0], fields[1], distance))
}

/// Reads an edge file from disk
pub fn load_edges<P: AsRef<Path>>(path: P) -> Result<Vec<Edge>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let edges = parse_edges(BufReader::new(file))?;
    log::info!("loaded {} edges from {}", edges.len(), path.display());
    Ok(edges)
}

/// Reads an edge file and builds the station graph from it
pub fn load_graph<W, P>(path: P) -> Result<StationGraph<W>>
where
    W: Distance,
    P: AsRef<Path>,
{
    StationGraph::from_edges(load_edges(path)?)
}
