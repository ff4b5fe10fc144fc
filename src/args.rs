use serde_json::Value;

use crate::{
    error::{Error, Result},
    options::ReadOptions,
    path_arg::PathArg,
    read_utf8_file::read_target,
};

/// Entry point for callers holding dynamically typed arguments, such as a
/// scripting bridge.
///
/// Accepts `[path]` or `[path, options]` and performs every check the typed
/// API leaves to the compiler: arity, the path's type, and the shape of the
/// options object. All of them run before the file is opened.
pub async fn read_utf8_file_from_args(args: &[Value]) -> Result<String> {
    let (path, options) = match args {
        [] => return Err(Error::MissingArguments),
        [path] => (path, None),
        [path, options] => (path, Some(options)),
        _ => return Err(Error::TooManyArguments(args.len())),
    };

    let target = PathArg::try_from(path)?.resolve()?;
    let options = match options {
        Some(options) => ReadOptions::try_from(options)?,
        None => ReadOptions::default(),
    };
    let mode = options.open_mode()?;

    read_target(target, mode).await
}
