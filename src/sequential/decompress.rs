//! Sequential decompressor: replays the token stream against an in-memory
//! output buffer, flushing everything but the last `WINDOW_SIZE` bytes
//! periodically so memory use stays bounded on large files.

use std::io::{Read, Write};

use crate::config::{TOKEN_WIDTH, WINDOW_SIZE};
use crate::error::Error;
use crate::token::Token;

/// Flush once the buffer grows this far past the window, to avoid flushing
/// on every single token.
const FLUSH_MARGIN: usize = 4 * WINDOW_SIZE;

pub fn decompress_sequential<R: Read, W: Write>(mut input: R, mut output: W) -> Result<(), Error> {
    let mut compressed = Vec::new();
    input.read_to_end(&mut compressed)?;
    if compressed.len() % TOKEN_WIDTH != 0 {
        return Err(Error::CorruptedStream(format!(
            "compressed length {} is not a multiple of the token width",
            compressed.len()
        )));
    }

    let mut buf: Vec<u8> = Vec::new();
    for raw in compressed.chunks(TOKEN_WIDTH) {
        let token = Token::unpack([raw[0], raw[1], raw[2]])?;
        apply_token(&mut buf, token)?;

        if buf.len() > WINDOW_SIZE + FLUSH_MARGIN {
            let keep_from = buf.len() - WINDOW_SIZE;
            output.write_all(&buf[..keep_from])?;
            buf.drain(..keep_from);
        }
    }
    output.write_all(&buf)?;
    Ok(())
}

/// Applies one token to `buf`, growing it in place. Reference copies are
/// done byte by byte so a run whose length exceeds its offset (e.g.
/// "A" + offset=1,length=3 -> "AAAA") sees the bytes it is itself writing.
pub fn apply_token(buf: &mut Vec<u8>, token: Token) -> Result<(), Error> {
    match token {
        Token::Literal(b) => buf.push(b),
        Token::Reference { offset, length, next_byte } => {
            let offset = offset as usize;
            if offset == 0 || offset > buf.len() {
                return Err(Error::CorruptedStream(format!(
                    "reference offset {offset} exceeds available output of length {}",
                    buf.len()
                )));
            }
            let match_start = buf.len() - offset;
            for i in 0..length as usize {
                let b = buf[match_start + i];
                buf.push(b);
            }
            buf.push(next_byte);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    fn pack_all(tokens: &[Token]) -> Vec<u8> {
        let mut out = Vec::new();
        for t in tokens {
            out.extend_from_slice(&t.pack().unwrap());
        }
        out
    }

    #[test]
    fn s1_empty() {
        let mut out = Vec::new();
        decompress_sequential(&b""[..], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn s2_single_literal() {
        let input = pack_all(&[Token::Literal(b'A')]);
        let mut out = Vec::new();
        decompress_sequential(&input[..], &mut out).unwrap();
        assert_eq!(out, b"A");
    }

    #[test]
    fn s4_reference_reconstructs_repetition() {
        let input = pack_all(&[
            Token::Literal(b'A'),
            Token::Literal(b'B'),
            Token::Literal(b'C'),
            Token::Reference { offset: 3, length: 2, next_byte: b'C' },
        ]);
        let mut out = Vec::new();
        decompress_sequential(&input[..], &mut out).unwrap();
        assert_eq!(out, b"ABCABC");
    }

    #[test]
    fn s5_overlapping_reference_run_length() {
        let input = pack_all(&[
            Token::Literal(b'A'),
            Token::Reference { offset: 1, length: 3, next_byte: b'A' },
        ]);
        let mut out = Vec::new();
        decompress_sequential(&input[..], &mut out).unwrap();
        assert_eq!(out, b"AAAAA");
    }

    #[test]
    fn rejects_misaligned_length() {
        let mut out = Vec::new();
        let err = decompress_sequential(&b"AB"[..], &mut out).unwrap_err();
        assert!(matches!(err, Error::CorruptedStream(_)));
    }

    #[test]
    fn rejects_offset_past_start_of_output() {
        let input = pack_all(&[Token::Reference { offset: 5, length: 1, next_byte: b'X' }]);
        let mut out = Vec::new();
        let err = decompress_sequential(&input[..], &mut out).unwrap_err();
        assert!(matches!(err, Error::CorruptedStream(_)));
    }
}
