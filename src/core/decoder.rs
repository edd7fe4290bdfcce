use crate::utils::error::{QrError, Result};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

/// Standard alphabet, no padding, tolerating non-canonical trailing bits.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes a URL-safe base64 string into ASCII text.
///
/// Decoding is lenient in the same way for every caller:
/// - both alphabets are accepted (`-`/`_` and `+`/`/`);
/// - bytes outside the alphabet, such as whitespace, are skipped;
/// - padding is optional;
/// - `=` is ignored unless it completes a quantum, and decoding stops at the
///   first completed quantum.
///
/// A payload left with one dangling symbol fails with [`QrError::Decode`].
pub fn decode_str(enc: &str) -> Result<String> {
    if !enc.is_ascii() {
        return Err(QrError::NonAscii);
    }

    let symbols = collect_symbols(enc);
    let bytes = LENIENT_STANDARD.decode(symbols)?;
    if !bytes.is_ascii() {
        return Err(QrError::NonAscii);
    }
    String::from_utf8(bytes).map_err(|_| QrError::NonAscii)
}

/// Returns the data symbols of `enc` in the standard alphabet. Two pad
/// characters are appended so that unpadded input ends on a full quantum.
fn collect_symbols(enc: &str) -> String {
    let mut symbols = String::with_capacity(enc.len());
    let mut pads = 0;

    for c in enc.chars().chain("==".chars()) {
        match c {
            '=' => {
                let quad_pos = symbols.len() % 4;
                if quad_pos >= 2 {
                    pads += 1;
                    if quad_pos + pads >= 4 {
                        break;
                    }
                }
            }
            '-' | '+' => {
                symbols.push('+');
                pads = 0;
            }
            '_' | '/' => {
                symbols.push('/');
                pads = 0;
            }
            c if c.is_ascii_alphanumeric() => {
                symbols.push(c);
                pads = 0;
            }
            _ => {}
        }
    }

    symbols
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_without_padding() {
        assert_eq!(
            decode_str("aHR0cDovL2V4YW1wbGUuY29t").unwrap(),
            "http://example.com"
        );
    }

    #[test]
    fn test_decode_over_padded() {
        // already a multiple of four; the extra padding is ignored
        assert_eq!(
            decode_str("aHR0cDovL2V4YW1wbGUuY29t==").unwrap(),
            "http://example.com"
        );
    }

    #[test]
    fn test_decode_missing_and_present_padding() {
        // 11 bytes encode to 15 symbols plus one pad
        assert_eq!(decode_str("aHR0cHM6Ly9hLmk").unwrap(), "https://a.i");
        assert_eq!(decode_str("aHR0cHM6Ly9hLmk=").unwrap(), "https://a.i");
        assert_eq!(decode_str("aHR0cHM6Ly9hLmk===").unwrap(), "https://a.i");
    }

    #[test]
    fn test_decode_accepts_both_alphabets() {
        assert_eq!(decode_str("Pz8-").unwrap(), "??>");
        assert_eq!(decode_str("Pz8+").unwrap(), "??>");
        assert_eq!(decode_str("Pz8_").unwrap(), "???");
        assert_eq!(decode_str("Pz8/").unwrap(), "???");
    }

    #[test]
    fn test_decode_skips_non_alphabet_bytes() {
        assert_eq!(
            decode_str("aHR0 cDov\nL2V4YW1wbGUuY29t").unwrap(),
            "http://example.com"
        );
        assert_eq!(decode_str("P z 8 -").unwrap(), "??>");
    }

    #[test]
    fn test_decode_interior_padding() {
        // a pad that does not complete a quantum is skipped
        assert_eq!(decode_str("YWJj=ZGVm").unwrap(), "abcdef");
        assert_eq!(decode_str("YW=Jj").unwrap(), "abc");
        // decoding stops at the first completed quantum
        assert_eq!(decode_str("YQ==YQ==").unwrap(), "a");
    }

    #[test]
    fn test_decode_malformed() {
        // one symbol past a full quantum cannot be decoded
        assert!(matches!(decode_str("a"), Err(QrError::Decode(_))));
        assert!(matches!(decode_str("not base64!"), Err(QrError::Decode(_))));
        assert!(matches!(decode_str("YWJjZ"), Err(QrError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_non_ascii() {
        // "é" in UTF-8
        assert!(matches!(decode_str("w6k"), Err(QrError::NonAscii)));
        // "ab=cd" decodes, but to binary
        assert!(matches!(decode_str("ab=cd"), Err(QrError::NonAscii)));
        assert!(matches!(decode_str("YQ\u{e9}"), Err(QrError::NonAscii)));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_str("").unwrap(), "");
    }
}
