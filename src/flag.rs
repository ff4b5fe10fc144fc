use std::fmt;

use crate::{
    error::{Error, Result},
    options::Flag,
};

#[cfg(unix)]
mod bits {
    pub(super) const O_ACCMODE: i64 = libc::O_ACCMODE as i64;
    pub(super) const O_RDONLY: i64 = libc::O_RDONLY as i64;
    pub(super) const O_WRONLY: i64 = libc::O_WRONLY as i64;
    pub(super) const O_RDWR: i64 = libc::O_RDWR as i64;
    pub(super) const O_APPEND: i64 = libc::O_APPEND as i64;
    pub(super) const O_CREAT: i64 = libc::O_CREAT as i64;
    pub(super) const O_EXCL: i64 = libc::O_EXCL as i64;
    pub(super) const O_TRUNC: i64 = libc::O_TRUNC as i64;
}

// Values libuv uses where there is no libc to ask.
#[cfg(not(unix))]
mod bits {
    pub(super) const O_ACCMODE: i64 = 0x0003;
    pub(super) const O_RDONLY: i64 = 0x0000;
    pub(super) const O_WRONLY: i64 = 0x0001;
    pub(super) const O_RDWR: i64 = 0x0002;
    pub(super) const O_APPEND: i64 = 0x0008;
    pub(super) const O_CREAT: i64 = 0x0100;
    pub(super) const O_TRUNC: i64 = 0x0200;
    pub(super) const O_EXCL: i64 = 0x0400;
}

/// A fully resolved open mode, ready to be turned into `OpenOptions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct OpenMode {
    pub(crate) read: bool,
    pub(crate) write: bool,
    pub(crate) append: bool,
    pub(crate) create: bool,
    pub(crate) create_new: bool,
    pub(crate) truncate: bool,
    pub(crate) sync: bool,
    /// Extra `O_*` bits from an integer flag that have no builder method.
    pub(crate) custom_flags: i32,
}

const READ: OpenMode = OpenMode {
    read: true,
    write: false,
    append: false,
    create: false,
    create_new: false,
    truncate: false,
    sync: false,
    custom_flags: 0,
};

impl OpenMode {
    pub(crate) const DEFAULT: OpenMode = READ;

    pub(crate) fn from_flag(flag: &Flag) -> Result<OpenMode> {
        match flag {
            Flag::Str(s) => Self::from_str_flag(s),
            Flag::Int(n) => Self::from_bits(*n),
        }
    }

    fn from_str_flag(flag: &str) -> Result<OpenMode> {
        let mode = match flag {
            "" => return Err(Error::InvalidFlagValue),
            "r" => READ,
            "rs" | "sr" => OpenMode { sync: true, ..READ },
            "r+" => OpenMode {
                write: true,
                ..READ
            },
            "rs+" | "sr+" => OpenMode {
                write: true,
                sync: true,
                ..READ
            },
            "w" => OpenMode {
                read: false,
                write: true,
                create: true,
                truncate: true,
                ..READ
            },
            "wx" | "xw" => OpenMode {
                read: false,
                write: true,
                create: true,
                create_new: true,
                ..READ
            },
            "w+" => OpenMode {
                write: true,
                create: true,
                truncate: true,
                ..READ
            },
            "wx+" | "xw+" => OpenMode {
                write: true,
                create: true,
                create_new: true,
                ..READ
            },
            "a" => OpenMode {
                read: false,
                append: true,
                create: true,
                ..READ
            },
            "ax" | "xa" => OpenMode {
                read: false,
                append: true,
                create: true,
                create_new: true,
                ..READ
            },
            "as" | "sa" => OpenMode {
                read: false,
                append: true,
                create: true,
                sync: true,
                ..READ
            },
            "a+" => OpenMode {
                append: true,
                create: true,
                ..READ
            },
            "ax+" | "xa+" => OpenMode {
                append: true,
                create: true,
                create_new: true,
                ..READ
            },
            "as+" | "sa+" => OpenMode {
                append: true,
                create: true,
                sync: true,
                ..READ
            },
            other => return Err(Error::UnknownFlag(other.to_string())),
        };
        Ok(mode)
    }

    fn from_bits(flags: i64) -> Result<OpenMode> {
        use bits::*;

        let unknown = || Error::UnknownFlag(flags.to_string());

        if flags < 0 || flags > i64::from(i32::MAX) {
            return Err(unknown());
        }

        let (read, write) = match flags & O_ACCMODE {
            O_RDONLY => (true, false),
            O_WRONLY => (false, true),
            O_RDWR => (true, true),
            _ => return Err(unknown()),
        };
        Self::with_access(read, write, flags & !O_ACCMODE).ok_or_else(unknown)
    }

    // The builder's creation-mode checks refuse combinations open(2) accepts,
    // such as O_RDONLY|O_CREAT, so on unix only the access mode goes through
    // the builder and every other bit is handed to the OS untouched.
    #[cfg(unix)]
    fn with_access(read: bool, write: bool, rest: i64) -> Option<OpenMode> {
        Some(OpenMode {
            read,
            write,
            custom_flags: i32::try_from(rest).ok()?,
            ..OpenMode::default()
        })
    }

    #[cfg(not(unix))]
    fn with_access(read: bool, write: bool, rest: i64) -> Option<OpenMode> {
        use bits::*;

        if rest & !(O_APPEND | O_CREAT | O_EXCL | O_TRUNC) != 0 {
            return None;
        }
        let create = rest & O_CREAT != 0;
        Some(OpenMode {
            read,
            write,
            append: rest & O_APPEND != 0,
            create,
            create_new: create && rest & O_EXCL != 0,
            truncate: rest & O_TRUNC != 0,
            ..OpenMode::default()
        })
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        for (on, name) in [
            (self.read, "read"),
            (self.write, "write"),
            (self.append, "append"),
            (self.create, "create"),
            (self.create_new, "create_new"),
            (self.truncate, "truncate"),
            (self.sync, "sync"),
        ] {
            if on {
                parts.push(name);
            }
        }
        f.write_str(&parts.join("|"))?;
        if self.custom_flags != 0 {
            write!(f, "|{:#o}", self.custom_flags)?;
        }
        Ok(())
    }
}
