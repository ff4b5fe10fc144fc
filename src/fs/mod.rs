#[cfg(any(target_family = "unix", target_family = "windows"))]
mod native;
mod read;

#[cfg(any(target_family = "unix", target_family = "windows"))]
pub(crate) use native::{File, OpenOptions};
pub(crate) use read::read_to_end;
