use tracing::debug;

use crate::{
    decode::decode_utf8,
    error::{Error, Result},
    flag::OpenMode,
    fs::{self, File},
    options::ReadOptions,
    path_arg::{PathArg, Target},
};

/// Reads a file as UTF-8 text, stripping a leading byte order mark.
///
/// Fails with [`Error::UnsupportedFileEncoding`] if any part of the file is
/// not well-formed UTF-8, and with [`Error::Io`] carrying the OS error as-is
/// if the file cannot be opened or read.
///
/// ```no_run
/// # async fn run() -> read_utf8_file::Result<()> {
/// let manifest = read_utf8_file::read_utf8_file("Cargo.toml").await?;
/// assert!(!manifest.starts_with('\u{FEFF}'));
/// # Ok(())
/// # }
/// ```
pub async fn read_utf8_file(path: impl Into<PathArg>) -> Result<String> {
    read_utf8_file_with_options(path, ReadOptions::default()).await
}

/// Same as [`read_utf8_file`], opening the file with `options.flag`.
pub async fn read_utf8_file_with_options(
    path: impl Into<PathArg>,
    options: ReadOptions,
) -> Result<String> {
    let target = path.into().resolve()?;
    let mode = options.open_mode()?;
    read_target(target, mode).await
}

pub(crate) async fn read_target(target: Target, mode: OpenMode) -> Result<String> {
    debug!(path = %target.display, flag = %mode, "reading utf-8 file");

    let bytes = {
        let mut file = File::open_with_mode(&target.path, &mode).await?;
        fs::read_to_end(&mut file).await?
    };
    let len = bytes.len();

    let text = decode_utf8(bytes).map_err(|err| Error::UnsupportedFileEncoding {
        path: target.display.clone(),
        source: err.utf8_error(),
    })?;

    debug!(
        path = %target.display,
        bytes = len,
        bom = len != text.len(),
        "read utf-8 file"
    );
    Ok(text)
}
