mod file;
mod open_options;

pub(crate) use file::File;
pub(crate) use open_options::OpenOptions;
