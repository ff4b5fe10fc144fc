use std::{
    io,
    path::Path,
    pin::Pin,
    task::{Context, Poll, ready},
};

use pin_project_lite::pin_project;

use crate::{flag::OpenMode, fs::OpenOptions};

pin_project! {
    /// A handle opened for the duration of one read. Dropping it closes the
    /// underlying descriptor.
    #[derive(Debug)]
    pub(crate) struct File {
        #[pin]
        pub(crate) inner: tokio::fs::File,
    }
}

impl File {
    pub(crate) async fn open_with_mode(path: impl AsRef<Path>, mode: &OpenMode) -> io::Result<File> {
        OpenOptions::from(mode).open(path).await
    }

    /// Size reported by metadata, used only to presize the read buffer.
    pub(crate) async fn size_hint(&self) -> Option<usize> {
        let metadata = self.inner.metadata().await.ok()?;
        usize::try_from(metadata.len()).ok()
    }
}

impl futures::io::AsyncRead for File {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        let mut buf = tokio::io::ReadBuf::new(buf);
        ready!(tokio::io::AsyncRead::poll_read(
            self.project().inner,
            cx,
            &mut buf
        ))?;
        Poll::Ready(Ok(buf.filled().len()))
    }
}
