// SvgSweep - core/sniff.rs
//
// Content sniffing: decides whether a file is SVG from its leading bytes.
//
// This is a heuristic, not a parser. Two bounded reads at most:
//   1. The header (HEADER_LEN bytes). `<svg` here is enough.
//   2. Only when the header has no `<svg` but does open an XML declaration,
//      the next XML_FOLLOW_LEN bytes from the current position.
// The chunks are searched independently; a tag split across the boundary
// does not match.

use crate::core::model::Classification;
use crate::util::constants;
use std::io::{self, Read};
use std::path::Path;

/// Classify the stream from its current position.
///
/// Consumes at most `HEADER_LEN + XML_FOLLOW_LEN` bytes, and exactly the
/// header when the header holds neither `<svg` nor `<?xml`.
pub fn classify<R: Read>(reader: &mut R) -> io::Result<Classification> {
    let header = read_up_to(reader, constants::HEADER_LEN)?;

    if contains(&header, constants::SVG_TAG) {
        return Ok(Classification::SvgTag);
    }

    if !contains(&header, constants::XML_DECL) {
        return Ok(Classification::NotSvg);
    }

    let follow = read_up_to(reader, constants::XML_FOLLOW_LEN)?;
    if contains(&follow, constants::SVG_TAG) {
        Ok(Classification::XmlThenSvgTag)
    } else {
        Ok(Classification::NotSvg)
    }
}

/// Open `path` and classify its content.
///
/// The file handle is dropped before this returns, so the caller is free to
/// move the file afterwards.
pub fn classify_file(path: &Path) -> io::Result<Classification> {
    let mut file = std::fs::File::open(path)?;
    let classification = classify(&mut file)?;
    tracing::trace!(path = %path.display(), ?classification, "Sniffed");
    Ok(classification)
}

/// Read until `limit` bytes or EOF, whichever comes first.
fn read_up_to<R: Read>(reader: &mut R, limit: u64) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(limit as usize);
    reader.by_ref().take(limit).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Byte-substring search.
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty()
        && haystack.len() >= needle.len()
        && haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that records how many bytes were handed out.
    struct CountingReader {
        inner: Cursor<Vec<u8>>,
        consumed: usize,
    }

    impl CountingReader {
        fn new(data: Vec<u8>) -> Self {
            Self {
                inner: Cursor::new(data),
                consumed: 0,
            }
        }
    }

    impl Read for CountingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.inner.read(buf)?;
            self.consumed += n;
            Ok(n)
        }
    }

    /// `prefix`, then filler up to `offset`, then `tail`.
    fn bytes_with(prefix: &[u8], offset: usize, tail: &[u8]) -> Vec<u8> {
        let mut data = prefix.to_vec();
        data.resize(offset, b' ');
        data.extend_from_slice(tail);
        data
    }

    fn classify_bytes(data: &[u8]) -> Classification {
        classify(&mut Cursor::new(data.to_vec())).unwrap()
    }

    #[test]
    fn test_svg_tag_in_header() {
        let data = b"<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\"/>";
        assert_eq!(classify_bytes(data), Classification::SvgTag);
    }

    #[test]
    fn test_svg_tag_in_header_wins_over_xml_decl() {
        let data = b"<?xml version=\"1.0\"?><svg viewBox=\"0 0 24 24\"></svg>";
        assert_eq!(classify_bytes(data), Classification::SvgTag);
    }

    #[test]
    fn test_xml_decl_then_svg_tag_after_header() {
        let data = bytes_with(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>", 150, b"<svg>");
        assert_eq!(classify_bytes(&data), Classification::XmlThenSvgTag);
    }

    #[test]
    fn test_xml_decl_with_svg_tag_beyond_follow_window() {
        // Window ends at byte 600; the tag starts at 600.
        let data = bytes_with(b"<?xml version=\"1.0\"?>", 600, b"<svg>");
        assert_eq!(classify_bytes(&data), Classification::NotSvg);
    }

    #[test]
    fn test_svg_tag_ending_at_last_follow_byte() {
        let data = bytes_with(b"<?xml version=\"1.0\"?>", 596, b"<svg");
        assert_eq!(data.len(), 600);
        assert_eq!(classify_bytes(&data), Classification::XmlThenSvgTag);
    }

    #[test]
    fn test_xml_decl_without_svg_is_not_svg() {
        let data = bytes_with(b"<?xml version=\"1.0\"?><vector android:width=\"24dp\">", 400, b"</vector>");
        assert_eq!(classify_bytes(&data), Classification::NotSvg);
    }

    #[test]
    fn test_no_markers_skips_follow_read() {
        // `<svg` sits inside the would-be follow window, but without an XML
        // declaration in the header that window must never be read.
        let data = bytes_with(b"\x89PNG\r\n\x1a\n", 150, b"<svg>");
        let mut reader = CountingReader::new(data);
        assert_eq!(classify(&mut reader).unwrap(), Classification::NotSvg);
        assert_eq!(reader.consumed, constants::HEADER_LEN as usize);
    }

    #[test]
    fn test_svg_in_header_skips_follow_read() {
        let data = bytes_with(b"<?xml?><svg>", 700, b"");
        let mut reader = CountingReader::new(data);
        assert_eq!(classify(&mut reader).unwrap(), Classification::SvgTag);
        assert_eq!(reader.consumed, constants::HEADER_LEN as usize);
    }

    #[test]
    fn test_follow_read_is_bounded() {
        let data = bytes_with(b"<?xml version=\"1.0\"?>", 2_000, b"");
        let mut reader = CountingReader::new(data);
        assert_eq!(classify(&mut reader).unwrap(), Classification::NotSvg);
        assert_eq!(
            reader.consumed,
            (constants::HEADER_LEN + constants::XML_FOLLOW_LEN) as usize
        );
    }

    #[test]
    fn test_tag_split_across_boundary_does_not_match() {
        // `<s` are the last two header bytes, `vg` the first two follow bytes.
        let data = bytes_with(b"<?xml version=\"1.0\"?>", 98, b"<svg>");
        assert_eq!(classify_bytes(&data), Classification::NotSvg);
    }

    #[test]
    fn test_short_and_empty_inputs() {
        assert_eq!(classify_bytes(b""), Classification::NotSvg);
        assert_eq!(classify_bytes(b"<sv"), Classification::NotSvg);
        assert_eq!(classify_bytes(b"<svg"), Classification::SvgTag);
        assert_eq!(classify_bytes(b"<?xml"), Classification::NotSvg);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(classify_bytes(b"<SVG width=\"1\"/>"), Classification::NotSvg);
    }

    #[test]
    fn test_classify_file_reads_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"<svg/>").expect("write icon.png");
        assert_eq!(classify_file(&path).unwrap(), Classification::SvgTag);
    }

    #[test]
    fn test_classify_file_missing_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = classify_file(&dir.path().join("absent.png")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_contains() {
        assert!(contains(b"abc<svgdef", b"<svg"));
        assert!(!contains(b"<sv", b"<svg"));
        assert!(!contains(b"anything", b""));
    }
}
