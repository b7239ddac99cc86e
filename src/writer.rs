use crate::{Error, Word};
use std::fs::{metadata, read, Permissions};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const SEPARATOR: &[u8] = b"\n";

/// Mode of a newly created word list.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Permissions the written list gets: those of the file it replaces, or the
/// usual mode of a new file.
#[cfg(unix)]
fn target_permissions(path: &str) -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    match metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => Some(Permissions::from_mode(NEW_FILE_MODE)),
    }
}

#[cfg(not(unix))]
fn target_permissions(path: &str) -> Option<Permissions> {
    metadata(path).ok().map(|meta| meta.permissions())
}

/// Join `words` with newlines, without a trailing newline.
pub fn join<W: AsRef<[u8]>>(words: &[W]) -> Vec<u8> {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&[u8]>>()
        .join(SEPARATOR)
}

/// Write `words` to `path`, one per line and without a trailing newline.
/// An existing file is replaced.
///
/// The list is written to a temporary file next to `path` and renamed into
/// place, so `path` always holds either the old or the complete new list.
/// The new list keeps the permissions of the file it replaces; a new file gets
/// mode `0644` on unix.
/// ## Errors
/// Fails if the temporary file can not be created or written, or the rename fails.
pub fn write_words<W: AsRef<[u8]>>(path: &str, words: &[W]) -> Result<(), Error> {
    let to_error = |source: std::io::Error| Error::WriteError {
        path: String::from(path),
        source,
    };
    let dir = match Path::new(path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(to_error)?;
    file.write_all(&join(words)).map_err(to_error)?;
    if let Some(permissions) = target_permissions(path) {
        file.as_file()
            .set_permissions(permissions)
            .map_err(to_error)?;
    }
    file.as_file().sync_all().map_err(to_error)?;
    file.persist(path).map_err(|err| to_error(err.error))?;
    Ok(())
}

/// Read a word list written by [`write_words`]. An empty file holds no words.
/// ## Errors
/// Fails if the file can not be read.
pub fn read_words(path: &str) -> Result<Vec<Word>, Error> {
    let bytes = read(path).map_err(|source| Error::ReadError {
        path: String::from(path),
        source,
    })?;
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    Ok(bytes.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect())
}
