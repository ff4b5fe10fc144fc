mod args;
mod decode;
mod error;
mod flag;
mod fs;
mod inspect;
mod options;
mod path_arg;
mod read_utf8_file;

pub use args::read_utf8_file_from_args;
pub use decode::decode_utf8;
pub use error::{EmptyPathKind, Error, ErrorKind, Result};
pub use options::{Flag, ReadOptions};
pub use path_arg::PathArg;
pub use read_utf8_file::{read_utf8_file, read_utf8_file_with_options};

pub use url::Url;
