use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use epimd_core::State;
use crate::error::Result;

/// Save anything serializable as JSON, replacing the file if it exists.
pub fn save_to_file<T: Serialize + ?Sized>(value: &T, path: &Path, pretty_print: bool) -> Result<()> {
    let file = File::create(path)?;
    let mut buf_writer = BufWriter::new(file);
    if pretty_print {
        serde_json::ser::to_writer_pretty(&mut buf_writer, value)?;
    } else {
        serde_json::ser::to_writer(&mut buf_writer, value)?;
    }
    buf_writer.flush()?;
    Ok(())
}

pub fn load_from_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    let buf_reader = BufReader::new(file);
    Ok(serde_json::de::from_reader(buf_reader)?)
}

/// Load a state and check it before anything runs on it.
pub fn load_state_from_file(path: &Path) -> Result<State> {
    let state: State = load_from_file(path)?;
    state.validate()?;
    Ok(state)
}
