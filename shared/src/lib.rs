use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const MIN_PASSWORD_LENGTH: u32 = 6;
pub const MAX_PASSWORD_LENGTH: u32 = 32;

/// Width of the request's length text field. The field is oversized on
/// purpose: it doubles as a general-purpose buffer on both sides of the
/// exchange, so the wire size stays stable even if the prompt format grows.
pub const LENGTH_FIELD_SIZE: usize = 1024;

/// Exact size in bytes of an encoded request datagram: one type-code byte
/// followed by the null-terminated length field.
pub const REQUEST_SIZE: usize = 1 + LENGTH_FIELD_SIZE;

/// Exact size in bytes of an encoded response datagram: the password plus
/// its null terminator.
pub const RESPONSE_SIZE: usize = MAX_PASSWORD_LENGTH as usize + 1;

pub const DIGIT_CHARSET: &[u8] = b"0123456789";
pub const LOWERCASE_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const SECURE_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()";
pub const UNAMBIGUOUS_CHARSET: &[u8] = b"abcdefghjkmnpqrtuvwxyACDEFGHJKLMNPQRTUVWXY34679!@#$%^&*()";
const MIXED_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The kinds of password the server knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordType {
    /// Digits only (0-9)
    Numeric,
    /// Lowercase letters only (a-z)
    Alpha,
    /// Lowercase letters and digits
    Mixed,
    /// Lowercase, uppercase, digits and symbols
    Secure,
    /// Like Secure but without visually similar characters
    Unambiguous,
}

impl PasswordType {
    /// Maps a wire type code to a password type, case-insensitively.
    ///
    /// Unrecognized codes map to `Numeric`. The client validates the code
    /// before sending, so anything else on the wire comes from a foreign
    /// client; the server answers it with a numeric password rather than
    /// dropping the request.
    pub fn from_code(code: char) -> Self {
        match code.to_ascii_lowercase() {
            'n' => PasswordType::Numeric,
            'a' => PasswordType::Alpha,
            'm' => PasswordType::Mixed,
            's' => PasswordType::Secure,
            'u' => PasswordType::Unambiguous,
            _ => PasswordType::Numeric,
        }
    }

    /// The set of characters a password of this type may contain.
    ///
    /// For `Mixed` this is the membership set only; generation draws in two
    /// stages (see the server's generator) and does not pick uniformly from
    /// this union.
    pub fn charset(&self) -> &'static [u8] {
        match self {
            PasswordType::Numeric => DIGIT_CHARSET,
            PasswordType::Alpha => LOWERCASE_CHARSET,
            PasswordType::Mixed => MIXED_CHARSET,
            PasswordType::Secure => SECURE_CHARSET,
            PasswordType::Unambiguous => UNAMBIGUOUS_CHARSET,
        }
    }
}

/// Errors raised by the fixed-layout wire codec.
///
/// A wrong-size datagram is treated by both peers exactly like a socket-level
/// receive failure: the exchange aborts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("datagram has wrong size: expected {expected} bytes, got {actual}")]
    WrongSize { expected: usize, actual: usize },
    #[error("field content of {actual} bytes exceeds capacity of {capacity}")]
    FieldOverflow { capacity: usize, actual: usize },
    #[error("text field is not valid UTF-8")]
    InvalidUtf8,
    #[error("type code {0:?} is not an ASCII character")]
    InvalidTypeCode(char),
}

/// Copies `text` into a fixed-width field, leaving at least one trailing
/// null byte. The field must already be zeroed.
fn write_text_field(field: &mut [u8], text: &str) -> Result<(), ProtocolError> {
    let bytes = text.as_bytes();
    if bytes.len() >= field.len() {
        return Err(ProtocolError::FieldOverflow {
            capacity: field.len() - 1,
            actual: bytes.len(),
        });
    }
    field[..bytes.len()].copy_from_slice(bytes);
    Ok(())
}

/// Reads a null-terminated text field. Content running to the end of the
/// field without a terminator is taken whole; validation downstream rejects
/// anything that long anyway.
fn read_text_field(field: &[u8]) -> Result<&str, ProtocolError> {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    std::str::from_utf8(&field[..end]).map_err(|_| ProtocolError::InvalidUtf8)
}

/// A client's request for one generated password.
///
/// The length travels as a decimal text string rather than a binary integer,
/// which keeps the record free of byte-order concerns and lets the server
/// re-validate it with the same rules the client used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRequest {
    pub type_code: char,
    pub length: String,
}

impl PasswordRequest {
    pub fn new(type_code: char, length: &str) -> Self {
        PasswordRequest {
            type_code,
            length: length.to_string(),
        }
    }

    /// Encodes the request into its fixed-layout wire form: byte 0 is the
    /// type code, the rest is the null-terminated length field.
    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        if !self.type_code.is_ascii() {
            return Err(ProtocolError::InvalidTypeCode(self.type_code));
        }
        let mut buffer = vec![0u8; REQUEST_SIZE];
        buffer[0] = self.type_code as u8;
        write_text_field(&mut buffer[1..], &self.length)?;
        Ok(buffer)
    }

    /// Decodes a request datagram. The payload must be exactly
    /// [`REQUEST_SIZE`] bytes; anything else is a protocol violation.
    pub fn decode(data: &[u8]) -> Result<Self, ProtocolError> {
        if data.len() != REQUEST_SIZE {
            return Err(ProtocolError::WrongSize {
                expected: REQUEST_SIZE,
                actual: data.len(),
            });
        }
        let length = read_text_field(&data[1..])?.to_string();
        Ok(PasswordRequest {
            type_code: data[0] as char,
            length,
        })
    }
}

/// The server's reply: the generated password, null-terminated inside a
/// fixed-width field of [`RESPONSE_SIZE`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResponse {
    pub password: String,
}

impl PasswordResponse {
    pub fn new(password: &str) -> Self {
        PasswordResponse {
            password: password.to_string(),
        }
    }

    /// Encodes the response. A password longer than [`MAX_PASSWORD_LENGTH`]
    /// does not fit the field and is an error, never a silent truncation.
    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        let mut buffer = vec![0u8; RESPONSE_SIZE];
        write_text_field(&mut buffer, &self.password)?;
        Ok(buffer)
    }

    /// Decodes a response datagram of exactly [`RESPONSE_SIZE`] bytes.
    pub fn decode(data: &[u8]) -> Result<Self, ProtocolError> {
        if data.len() != RESPONSE_SIZE {
            return Err(ProtocolError::WrongSize {
                expected: RESPONSE_SIZE,
                actual: data.len(),
            });
        }
        let password = read_text_field(data)?.to_string();
        Ok(PasswordResponse { password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mapping_recognized_codes() {
        assert_eq!(PasswordType::from_code('n'), PasswordType::Numeric);
        assert_eq!(PasswordType::from_code('a'), PasswordType::Alpha);
        assert_eq!(PasswordType::from_code('m'), PasswordType::Mixed);
        assert_eq!(PasswordType::from_code('s'), PasswordType::Secure);
        assert_eq!(PasswordType::from_code('u'), PasswordType::Unambiguous);
    }

    #[test]
    fn test_type_mapping_is_case_insensitive() {
        assert_eq!(PasswordType::from_code('S'), PasswordType::Secure);
        assert_eq!(PasswordType::from_code('U'), PasswordType::Unambiguous);
    }

    #[test]
    fn test_type_mapping_defaults_to_numeric() {
        assert_eq!(PasswordType::from_code('x'), PasswordType::Numeric);
        assert_eq!(PasswordType::from_code('9'), PasswordType::Numeric);
        assert_eq!(PasswordType::from_code(' '), PasswordType::Numeric);
    }

    #[test]
    fn test_charsets_are_non_empty_and_ascii() {
        for kind in [
            PasswordType::Numeric,
            PasswordType::Alpha,
            PasswordType::Mixed,
            PasswordType::Secure,
            PasswordType::Unambiguous,
        ] {
            let charset = kind.charset();
            assert!(!charset.is_empty());
            assert!(charset.iter().all(|b| b.is_ascii()));
        }
    }

    #[test]
    fn test_unambiguous_charset_excludes_similar_glyphs() {
        for excluded in b"0Oo1lIi2Zz5Ss8B" {
            assert!(
                !UNAMBIGUOUS_CHARSET.contains(excluded),
                "charset must not contain {:?}",
                *excluded as char
            );
        }
    }

    #[test]
    fn test_request_roundtrip() {
        let request = PasswordRequest::new('s', "16");
        let encoded = request.encode().unwrap();
        assert_eq!(encoded.len(), REQUEST_SIZE);
        assert_eq!(encoded[0], b's');
        assert_eq!(&encoded[1..3], b"16");
        assert_eq!(encoded[3], 0);

        let decoded = PasswordRequest::decode(&encoded).unwrap();
        assert_eq!(decoded.type_code, 's');
        assert_eq!(decoded.length, "16");
    }

    #[test]
    fn test_request_rejects_wrong_size_datagram() {
        let err = PasswordRequest::decode(&[b'n'; 16]).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::WrongSize {
                expected: REQUEST_SIZE,
                actual: 16,
            }
        );
    }

    #[test]
    fn test_request_rejects_overlong_length_text() {
        let request = PasswordRequest::new('n', &"9".repeat(LENGTH_FIELD_SIZE));
        let err = request.encode().unwrap_err();
        assert_eq!(
            err,
            ProtocolError::FieldOverflow {
                capacity: LENGTH_FIELD_SIZE - 1,
                actual: LENGTH_FIELD_SIZE,
            }
        );
    }

    #[test]
    fn test_request_rejects_non_ascii_type_code() {
        let err = PasswordRequest::new('é', "8").encode().unwrap_err();
        assert_eq!(err, ProtocolError::InvalidTypeCode('é'));
    }

    #[test]
    fn test_response_roundtrip() {
        let response = PasswordResponse::new("Tg@8%YkTg@8%Yk");
        let encoded = response.encode().unwrap();
        assert_eq!(encoded.len(), RESPONSE_SIZE);

        let decoded = PasswordResponse::decode(&encoded).unwrap();
        assert_eq!(decoded.password, "Tg@8%YkTg@8%Yk");
    }

    #[test]
    fn test_response_holds_maximum_length_password() {
        let password = "x".repeat(MAX_PASSWORD_LENGTH as usize);
        let encoded = PasswordResponse::new(&password).encode().unwrap();
        // The last byte is still the terminator.
        assert_eq!(encoded[RESPONSE_SIZE - 1], 0);

        let decoded = PasswordResponse::decode(&encoded).unwrap();
        assert_eq!(decoded.password.len(), MAX_PASSWORD_LENGTH as usize);
    }

    #[test]
    fn test_response_rejects_oversized_password() {
        let password = "x".repeat(MAX_PASSWORD_LENGTH as usize + 1);
        let err = PasswordResponse::new(&password).encode().unwrap_err();
        assert_eq!(
            err,
            ProtocolError::FieldOverflow {
                capacity: MAX_PASSWORD_LENGTH as usize,
                actual: MAX_PASSWORD_LENGTH as usize + 1,
            }
        );
    }

    #[test]
    fn test_response_rejects_wrong_size_datagram() {
        let err = PasswordResponse::decode(&[0u8; RESPONSE_SIZE + 1]).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::WrongSize {
                expected: RESPONSE_SIZE,
                actual: RESPONSE_SIZE + 1,
            }
        );
    }

    #[test]
    fn test_decode_reads_up_to_first_null_only() {
        let mut data = vec![0u8; RESPONSE_SIZE];
        data[..3].copy_from_slice(b"abc");
        data[4] = b'z'; // stale bytes past the terminator must be ignored
        let decoded = PasswordResponse::decode(&data).unwrap();
        assert_eq!(decoded.password, "abc");
    }
}
