use std::io;

use futures::io::AsyncReadExt;
use tracing::trace;

use crate::fs::File;

/// Bytes read before deciding whether a second read is needed.
pub(crate) const PROBE_LEN: usize = 4;

/// Reads the whole file.
///
/// A short probe is read first. Files smaller than [`PROBE_LEN`] end there,
/// with no metadata call and no remainder read. The result is the same as a
/// single `read_to_end`.
pub(crate) async fn read_to_end(file: &mut File) -> io::Result<Vec<u8>> {
    let mut probe = [0u8; PROBE_LEN];
    let mut filled = 0;

    while filled < PROBE_LEN {
        match file.read(&mut probe[filled..]).await {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    if filled < PROBE_LEN {
        trace!(len = filled, "file ended inside the probe");
        return Ok(probe[..filled].to_vec());
    }

    let capacity = file.size_hint().await.unwrap_or(0).max(PROBE_LEN);
    let mut buf = Vec::with_capacity(capacity);
    buf.extend_from_slice(&probe);
    file.read_to_end(&mut buf).await?;

    Ok(buf)
}
