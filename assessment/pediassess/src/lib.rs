//! Front end for the pediatric susceptibility assessment: the interactive
//! form session and the input helpers shared by the `pediassess` binary.

pub mod session;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub use session::{FormField, FormSession, FormStatus};

/// Read an intake from a file, or from stdin when no path is given.
pub fn read_intake_text(input: Option<&Path>) -> Result<String, String> {
    if let Some(path) = input {
        fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {e}", path.display()))
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        Ok(buf)
    }
}
