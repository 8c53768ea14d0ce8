//! JSON Export
//!
//! Writes articles and activity entries as pretty-printed JSON arrays.

use std::io::Write;

use serde::Serialize;

use crate::domain::fixtures::ActivityEntry;
use crate::domain::Post;
use crate::error::Result;

fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    out.write_all(json.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Write articles as JSON
pub fn write_posts<W: Write>(out: W, posts: &[&Post]) -> Result<usize> {
    write_json(out, posts)?;
    Ok(posts.len())
}

/// Write activity entries as JSON
pub fn write_activity<W: Write>(out: W, entries: &[ActivityEntry]) -> Result<usize> {
    write_json(out, entries)?;
    Ok(entries.len())
}
