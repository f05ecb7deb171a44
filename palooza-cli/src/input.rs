//! Input file access built on `cap-std` and `camino`.

use std::io::{self, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

use crate::CliError;

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether a path exists and is a regular file.
fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Check that `path` names an existing regular file.
///
/// `field` is the option that supplied the path and is echoed in errors.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read a whole input file as raw bytes.
pub(crate) fn read_bytes(path: &Utf8Path) -> Result<Vec<u8>, CliError> {
    let mut file = open_utf8_file(path).map_err(|source| read_error(path, source))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|source| read_error(path, source))?;
    Ok(bytes)
}

/// Read a whole input file as UTF-8 text.
pub(crate) fn read_text(path: &Utf8Path) -> Result<String, CliError> {
    String::from_utf8(read_bytes(path)?)
        .map_err(|err| read_error(path, io::Error::new(io::ErrorKind::InvalidData, err)))
}

fn read_error(path: &Utf8Path, source: io::Error) -> CliError {
    CliError::ReadInput {
        path: Utf8PathBuf::from(path),
        source,
    }
}
