use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

use super::error::{NewlinesError, Result};

pub const DEFAULT_ENCODING: &str = "utf-8";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Resolves an encoding label such as `utf-8`, `latin1` or `shift_jis`.
pub fn lookup(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| NewlinesError::UnknownEncoding(label.to_string()))
}

/// Text read from a file together with what is needed to write it back the
/// same way.
#[derive(Debug)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
    pub bom: bool,
}

/// Decodes `bytes` without replacement characters, malformed input is an
/// error. For UTF-16 a leading byte order mark is stripped and picks the byte
/// order, every other encoding keeps a BOM as part of the text.
pub fn decode(bytes: &[u8], encoding: &'static Encoding, source_name: &str) -> Result<Decoded> {
    let (encoding, bom_len) = match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_len)) if is_utf16(encoding) && is_utf16(bom_encoding) => {
            (bom_encoding, bom_len)
        }
        _ => (encoding, 0),
    };

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .ok_or_else(|| NewlinesError::Decode {
            source_name: source_name.to_string(),
            encoding: encoding.name(),
        })?;

    Ok(Decoded {
        text: text.into_owned(),
        encoding,
        bom: bom_len > 0,
    })
}

/// Encodes `text` into `encoding`, prefixed with a byte order mark when `bom`
/// is set. Characters the encoding cannot represent are an error instead of
/// being turned into numeric references.
pub fn encode(
    text: &str,
    encoding: &'static Encoding,
    bom: bool,
    source_name: &str,
) -> Result<Vec<u8>> {
    if is_utf16(encoding) {
        return Ok(encode_utf16(text, encoding == UTF_16BE, bom));
    }

    // the replacement encoding has no encoder, encoding_rs falls back to UTF-8
    if encoding.output_encoding() != encoding {
        return Err(NewlinesError::UnsupportedOutputEncoding {
            source_name: source_name.to_string(),
            encoding: encoding.name(),
        });
    }

    let (bytes, _, had_unmappable) = encoding.encode(text);
    if had_unmappable {
        return Err(NewlinesError::Encode {
            source_name: source_name.to_string(),
            encoding: encoding.name(),
        });
    }

    Ok(bytes.into_owned())
}

fn is_utf16(encoding: &'static Encoding) -> bool {
    encoding == UTF_16LE || encoding == UTF_16BE
}

fn encode_utf16(text: &str, big_endian: bool, bom: bool) -> Vec<u8> {
    let bom = bom.then_some(BYTE_ORDER_MARK as u16);
    let mut bytes = Vec::with_capacity((text.len() + 1) * 2);

    for unit in bom.into_iter().chain(text.encode_utf16()) {
        if big_endian {
            bytes.extend_from_slice(&unit.to_be_bytes());
        } else {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_labels() {
        assert_eq!(lookup("utf-8").unwrap(), encoding_rs::UTF_8);
        assert_eq!(lookup("UTF8").unwrap(), encoding_rs::UTF_8);
        assert_eq!(lookup("latin1").unwrap(), encoding_rs::WINDOWS_1252);
        assert_eq!(lookup("utf-16").unwrap(), UTF_16LE);
        assert!(matches!(
            lookup("no-such-encoding"),
            Err(NewlinesError::UnknownEncoding(label)) if label == "no-such-encoding"
        ));
    }

    #[test]
    fn test_decode_is_strict() {
        let decoded = decode("grüße".as_bytes(), encoding_rs::UTF_8, "f").unwrap();
        assert_eq!(decoded.text, "grüße");
        assert!(!decoded.bom);

        let result = decode(&[b'a', 0xff, b'b'], encoding_rs::UTF_8, "broken.txt");
        assert!(matches!(
            result,
            Err(NewlinesError::Decode {
                ref source_name,
                encoding: "UTF-8",
            }) if source_name == "broken.txt"
        ));
    }

    #[test]
    fn test_decode_utf8_keeps_bom_in_text() {
        let decoded = decode(b"\xef\xbb\xbfx", encoding_rs::UTF_8, "f").unwrap();
        assert_eq!(decoded.text, "\u{feff}x");
        assert!(!decoded.bom);
        assert_eq!(
            encode(&decoded.text, decoded.encoding, decoded.bom, "f").unwrap(),
            b"\xef\xbb\xbfx"
        );
    }

    #[test]
    fn test_decode_utf16_strips_bom() {
        let bytes = [0xff, 0xfe, b'a', 0, b'\\', 0, b'n', 0, b'b', 0];
        let decoded = decode(&bytes, UTF_16LE, "f").unwrap();

        assert_eq!(decoded.text, r"a\nb");
        assert_eq!(decoded.encoding, UTF_16LE);
        assert!(decoded.bom);
    }

    #[test]
    fn test_decode_utf16_follows_bom_byte_order() {
        let bytes = [0xfe, 0xff, 0, b'h', 0, b'i'];
        let decoded = decode(&bytes, UTF_16LE, "f").unwrap();

        assert_eq!(decoded.text, "hi");
        assert_eq!(decoded.encoding, UTF_16BE);
        assert!(decoded.bom);
    }

    #[test]
    fn test_decode_utf16_without_bom() {
        let decoded = decode(&[b'o', 0, b'k', 0], UTF_16LE, "f").unwrap();
        assert_eq!(decoded.text, "ok");
        assert!(!decoded.bom);

        assert!(matches!(
            decode(&[b'o', 0, b'k'], UTF_16LE, "odd.txt"),
            Err(NewlinesError::Decode { encoding: "UTF-16LE", .. })
        ));
    }

    #[test]
    fn test_encode_utf16() {
        assert_eq!(
            encode("a\nb", UTF_16LE, true, "f").unwrap(),
            vec![0xff, 0xfe, b'a', 0, b'\n', 0, b'b', 0]
        );
        assert_eq!(
            encode("a\u{1f600}", UTF_16BE, false, "f").unwrap(),
            vec![0, b'a', 0xd8, 0x3d, 0xde, 0x00]
        );
    }

    #[test]
    fn test_single_byte_round_trip() {
        let latin1 = lookup("latin1").unwrap();
        let decoded = decode(&[b'a', 0xe9, b'\\', b'n'], latin1, "f").unwrap();
        assert_eq!(decoded.text, "a\u{e9}\\n");
        assert_eq!(
            encode(&decoded.text, latin1, decoded.bom, "f").unwrap(),
            vec![b'a', 0xe9, b'\\', b'n']
        );
    }

    #[test]
    fn test_encode_rejects_unmappable() {
        let latin1 = lookup("latin1").unwrap();
        assert!(matches!(
            encode("snow \u{2603}", latin1, false, "f"),
            Err(NewlinesError::Encode { .. })
        ));
    }

    #[test]
    fn test_encode_rejects_replacement_encoding() {
        assert!(matches!(
            encode("text", encoding_rs::REPLACEMENT, false, "f"),
            Err(NewlinesError::UnsupportedOutputEncoding {
                encoding: "replacement",
                ..
            })
        ));
    }
}
