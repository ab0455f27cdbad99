use std::path::{Path, PathBuf};

use avr32_hex::Segment;

use super::error::CliError;

pub(super) fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn write_file(path: &Path, data: &[u8]) -> Result<(), CliError> {
    std::fs::write(path, data).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

pub(super) fn remove_file(path: &Path) -> Result<(), CliError> {
    std::fs::remove_file(path).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn load_binary_input(path: &Path, address: u32) -> Result<Segment, CliError> {
    let content = read_file(path)?;
    Ok(avr32_hex::parse_binary(&content, address)?)
}

/// `firmware.bin` becomes `firmware.hex`.
pub(super) fn default_hex_path(binary: &Path) -> PathBuf {
    binary.with_extension("hex")
}

/// Base name for user-page outputs: the explicit name, else the serial, else `userpage`.
pub(super) fn user_page_stem(file: Option<&str>, serial: &str) -> String {
    match file {
        Some(name) => name.to_string(),
        None if !serial.is_empty() => serial.to_string(),
        None => "userpage".to_string(),
    }
}

/// Append an extension without replacing dots already in the name.
pub(super) fn with_suffix(stem: &str, extension: &str) -> PathBuf {
    PathBuf::from(format!("{stem}.{extension}"))
}
