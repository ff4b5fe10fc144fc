use std::path::{Path, PathBuf};

use serde_json::Value;
use url::Url;

use crate::{
    error::{EmptyPathKind, Error, Result},
    inspect::{inspect_with_kind, quote},
};

/// Anything that can name the file to read.
///
/// `Buffer` and `Uint8Array` both carry raw path bytes; they differ only in
/// how an empty value is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathArg {
    Path(PathBuf),
    Buffer(Vec<u8>),
    Uint8Array(Vec<u8>),
    Url(Url),
    Fd(i32),
}

/// A validated path, plus the absolute rendering used in error messages.
#[derive(Debug)]
pub(crate) struct Target {
    pub(crate) path: PathBuf,
    pub(crate) display: String,
}

impl PathArg {
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> PathArg {
        PathArg::Buffer(bytes.into())
    }

    pub fn uint8_array(bytes: impl Into<Vec<u8>>) -> PathArg {
        PathArg::Uint8Array(bytes.into())
    }

    pub(crate) fn resolve(&self) -> Result<Target> {
        let path = match self {
            PathArg::Path(path) if path.as_os_str().is_empty() => {
                return Err(Error::InvalidPathValue(EmptyPathKind::String));
            }
            PathArg::Path(path) => path.clone(),
            PathArg::Buffer(bytes) if bytes.is_empty() => {
                return Err(Error::InvalidPathValue(EmptyPathKind::Buffer));
            }
            PathArg::Uint8Array(bytes) if bytes.is_empty() => {
                return Err(Error::InvalidPathValue(EmptyPathKind::Uint8Array));
            }
            PathArg::Buffer(bytes) | PathArg::Uint8Array(bytes) => bytes_to_path(bytes),
            PathArg::Url(url) => url_to_path(url)?,
            PathArg::Fd(fd) => return descriptor_target(*fd),
        };

        if path.as_os_str().as_encoded_bytes().contains(&0) {
            return Err(Error::NulInPath(quote(&path.to_string_lossy())));
        }

        let absolute = std::path::absolute(&path).unwrap_or_else(|_| path.clone());
        Ok(Target {
            display: quote(&absolute.to_string_lossy()),
            path,
        })
    }
}

#[cfg(unix)]
fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

fn url_to_path(url: &Url) -> Result<PathBuf> {
    if url.scheme() != "file" {
        return Err(Error::InvalidFileUrl(quote(url.as_str())));
    }
    url.to_file_path()
        .map_err(|()| Error::InvalidFileUrl(quote(url.as_str())))
}

fn descriptor_target(fd: i32) -> Result<Target> {
    match fd {
        0..=2 => Err(Error::UnsupportedDescriptor(fd)),
        fd if fd < 0 => Err(Error::InvalidDescriptor(fd.to_string())),
        fd => open_descriptor(fd),
    }
}

// Reopening through /dev/fd gives us our own handle, so dropping it never
// closes the caller's descriptor.
#[cfg(unix)]
fn open_descriptor(fd: i32) -> Result<Target> {
    Ok(Target {
        path: PathBuf::from(format!("/dev/fd/{fd}")),
        display: format!("fd {fd}"),
    })
}

#[cfg(not(unix))]
fn open_descriptor(fd: i32) -> Result<Target> {
    Err(Error::Io(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        format!("cannot read fd {fd}: file descriptors are only supported on unix"),
    )))
}

impl From<&str> for PathArg {
    fn from(path: &str) -> Self {
        PathArg::Path(PathBuf::from(path))
    }
}

impl From<String> for PathArg {
    fn from(path: String) -> Self {
        PathArg::Path(PathBuf::from(path))
    }
}

impl From<&String> for PathArg {
    fn from(path: &String) -> Self {
        PathArg::Path(PathBuf::from(path))
    }
}

impl From<&Path> for PathArg {
    fn from(path: &Path) -> Self {
        PathArg::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for PathArg {
    fn from(path: PathBuf) -> Self {
        PathArg::Path(path)
    }
}

impl From<&PathBuf> for PathArg {
    fn from(path: &PathBuf) -> Self {
        PathArg::Path(path.clone())
    }
}

impl From<Url> for PathArg {
    fn from(url: Url) -> Self {
        PathArg::Url(url)
    }
}

impl From<i32> for PathArg {
    fn from(fd: i32) -> Self {
        PathArg::Fd(fd)
    }
}

impl From<Vec<u8>> for PathArg {
    fn from(bytes: Vec<u8>) -> Self {
        PathArg::Buffer(bytes)
    }
}

/// Interprets a dynamic value as a path.
///
/// Strings are paths, integers are file descriptors, arrays of bytes are
/// `Uint8Array`s and `{"type": "Buffer", "data": [..]}` is a `Buffer`.
impl TryFrom<&Value> for PathArg {
    type Error = Error;

    fn try_from(value: &Value) -> Result<PathArg> {
        let wrong_type = || Error::InvalidArgType(inspect_with_kind(value));

        match value {
            Value::String(s) => Ok(PathArg::from(s)),
            Value::Number(n) => match (n.as_i64(), n.is_f64()) {
                (Some(fd), _) => i32::try_from(fd)
                    .map(PathArg::Fd)
                    .map_err(|_| Error::InvalidDescriptor(fd.to_string())),
                (None, false) => Err(Error::InvalidDescriptor(n.to_string())),
                (None, true) => Err(wrong_type()),
            },
            Value::Array(items) => byte_array(items)
                .map(PathArg::Uint8Array)
                .ok_or_else(wrong_type),
            Value::Object(map) => match (map.get("type"), map.get("data")) {
                (Some(Value::String(ty)), Some(Value::Array(items))) if ty == "Buffer" => {
                    byte_array(items)
                        .map(PathArg::Buffer)
                        .ok_or_else(wrong_type)
                }
                _ => Err(wrong_type()),
            },
            Value::Null | Value::Bool(_) => Err(wrong_type()),
        }
    }
}

fn byte_array(items: &[Value]) -> Option<Vec<u8>> {
    items
        .iter()
        .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
        .collect()
}
