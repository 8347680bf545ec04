use anyhow::{anyhow, Result};
use std::{fs, io::Read, path::Path};

/// Resolves a command line argument that may be `-` (stdin), a path to an
/// existing file, or the content itself.
pub fn load_input(arg: &str) -> Result<String> {
    if arg == "-" || Path::new(arg).is_file() {
        load_file(arg)
    } else {
        Ok(arg.to_string())
    }
}

/// Reads `path`, or stdin when `path` is `-`. Unlike [`load_input`] a
/// missing file is an error.
pub fn load_file(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).map_err(|e| anyhow!("Failed to read file {}: {}", path, e))
    }
}
