use std::{io, path::Path};

use crate::{flag::OpenMode, fs::File};

pub(crate) struct OpenOptions(tokio::fs::OpenOptions);

impl OpenOptions {
    pub(crate) fn read(&mut self, read: bool) -> &mut OpenOptions {
        self.0.read(read);
        self
    }

    pub(crate) fn write(&mut self, write: bool) -> &mut OpenOptions {
        self.0.write(write);
        self
    }

    pub(crate) fn append(&mut self, append: bool) -> &mut OpenOptions {
        self.0.append(append);
        self
    }

    pub(crate) fn truncate(&mut self, truncate: bool) -> &mut OpenOptions {
        self.0.truncate(truncate);
        self
    }

    pub(crate) fn create(&mut self, create: bool) -> &mut OpenOptions {
        self.0.create(create);
        self
    }

    pub(crate) fn create_new(&mut self, create_new: bool) -> &mut OpenOptions {
        self.0.create_new(create_new);
        self
    }

    #[cfg(unix)]
    pub(crate) fn custom_flags(&mut self, flags: i32) -> &mut OpenOptions {
        self.0.custom_flags(flags);
        self
    }

    pub(crate) async fn open(&self, path: impl AsRef<Path>) -> io::Result<File> {
        let inner = self.0.open(path).await?;
        Ok(File { inner })
    }
}

impl From<&OpenMode> for OpenOptions {
    fn from(mode: &OpenMode) -> Self {
        let mut options = OpenOptions(tokio::fs::OpenOptions::new());
        options
            .read(mode.read)
            .write(mode.write)
            .append(mode.append)
            .create(mode.create)
            .create_new(mode.create_new)
            .truncate(mode.truncate);

        #[cfg(unix)]
        {
            let sync = if mode.sync { libc::O_SYNC } else { 0 };
            options.custom_flags(mode.custom_flags | sync);
        }

        options
    }
}
