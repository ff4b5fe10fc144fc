use std::string::FromUtf8Error;

const BOM_CHAR: char = '\u{FEFF}';

/// Decodes `bytes` as UTF-8 and drops a leading byte order mark.
///
/// The whole buffer is validated before the BOM is looked at, so a malformed
/// sequence anywhere is an error and nothing is replaced.
pub fn decode_utf8(bytes: Vec<u8>) -> Result<String, FromUtf8Error> {
    let mut text = String::from_utf8(bytes)?;
    if text.starts_with(BOM_CHAR) {
        text.remove(0);
    }
    Ok(text)
}
