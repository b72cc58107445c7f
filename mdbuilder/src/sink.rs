//! Writing rendered documents to their destination

use crate::error::{BuildError, MarkdownError};
use std::io::{self, Write};

/// Write `rendered` to `dest` and report the outcome together with `latent`
///
/// # Returns
/// * `Ok(())` - The write succeeded and no accumulation error was recorded
/// * `Err(BuildError::Write)` - The sink failed; carries `latent` as well
/// * `Err(BuildError::Latent)` - The write succeeded but `latent` was set
pub(crate) fn write_rendered<W: Write>(
    dest: &mut W,
    rendered: &str,
    latent: Option<&MarkdownError>,
) -> Result<(), BuildError> {
    if let Err(source) = write_all(dest, rendered.as_bytes()).and_then(|()| dest.flush()) {
        return Err(BuildError::Write {
            source,
            latent: latent.cloned(),
        });
    }

    log::debug!("Wrote {} bytes", rendered.len());

    match latent {
        Some(e) => Err(BuildError::Latent(e.clone())),
        None => Ok(()),
    }
}

/// Like `Write::write_all`, but an empty body still reaches the sink once
fn write_all<W: Write>(dest: &mut W, bytes: &[u8]) -> io::Result<()> {
    if bytes.is_empty() {
        return dest.write(bytes).map(|_| ());
    }
    dest.write_all(bytes)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Sink that rejects every write
    pub(crate) struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_successful_write() {
        let mut out = Vec::new();
        write_rendered(&mut out, "hello", None).unwrap();
        assert_eq!(out, b"hello");
    }

    #[test]
    fn test_latent_error_survives_successful_write() {
        let mut out = Vec::new();
        let latent = MarkdownError::DuplicateToc;
        let err = write_rendered(&mut out, "hello", Some(&latent)).unwrap_err();
        assert_eq!(out, b"hello");
        assert_eq!(err.kind(), ErrorKind::DuplicateToc);
    }

    #[test]
    fn test_failed_write_composes_latent() {
        let latent = MarkdownError::DuplicateToc;
        let err = write_rendered(&mut FailingWriter, "hello", Some(&latent)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteFailure);
        let message = err.to_string();
        assert!(message.contains("sink closed"));
        assert!(message.contains("table of contents has already been generated"));
    }

    #[test]
    fn test_empty_body_still_detects_failed_sink() {
        let latent = MarkdownError::ColumnMismatch {
            expected: 2,
            found: 1,
            row: 0,
        };
        let err = write_rendered(&mut FailingWriter, "", Some(&latent)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteFailure);
        assert_eq!(err.latent(), Some(&latent));
    }

    #[test]
    fn test_empty_body_to_working_sink() {
        let mut out = Vec::new();
        write_rendered(&mut out, "", None).unwrap();
        assert!(out.is_empty());
    }
}
