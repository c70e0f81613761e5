//! Longest-prior-occurrence matcher over a window/lookahead pair.

use crate::config::{LENGTH_THRESHOLD, MAX_LENGTH};
use crate::token::Token;

/// Find the best token for the current position, given the bytes already
/// emitted (`window`) and the not-yet-emitted suffix (`lookahead`).
///
/// `lookahead` must be non-empty. Scans the window left to right so that,
/// among candidates tied on match length, the most distant occurrence wins
/// — this tie-break is load-bearing for byte-identical output and must not
/// be changed to e.g. "nearest occurrence wins".
pub fn find_match(window: &[u8], lookahead: &[u8]) -> Token {
    debug_assert!(!lookahead.is_empty());

    let c = lookahead[0];
    let mut best_length = 0usize;
    let mut best_offset = 0usize;
    let mut best_next_byte = c;

    if lookahead.len() < 2 {
        return Token::Literal(c);
    }

    // Candidate length is bounded by the lookahead and the token format, not
    // by the offset: a match may run past the end of `window` into bytes the
    // current match is itself producing (the classic LZ77 run-length
    // extension, needed for e.g. "AAAAA" -> offset=1, length=3).
    let l_max_global = (lookahead.len() - 1).min(MAX_LENGTH);
    let get = |idx: usize| -> u8 {
        if idx < window.len() {
            window[idx]
        } else {
            lookahead[idx - window.len()]
        }
    };

    for f in 0..window.len() {
        if window[f] != c {
            continue;
        }
        let offset = window.len() - f;
        if l_max_global <= best_length {
            continue;
        }

        let mut matched = 0usize;
        while matched < l_max_global && get(f + matched) == lookahead[matched] {
            matched += 1;
        }

        if matched > best_length {
            best_length = matched;
            best_offset = offset;
            best_next_byte = lookahead[matched];
        }

        if best_length > LENGTH_THRESHOLD {
            break;
        }
    }

    if best_length == 0 {
        Token::Literal(c)
    } else {
        Token::Reference {
            offset: best_offset as u16,
            length: best_length as u8,
            next_byte: best_next_byte,
        }
    }
}
