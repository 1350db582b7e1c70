//! Longest-match search over the sliding window.
//!
//! The encoder only talks to the [`MatchFinder`] trait, so a hash-chain or
//! suffix-structure finder can replace [`BruteForceMatchFinder`] without
//! touching the token loop.

use memchr::memrchr_iter;

use super::window::SlidingWindow;

/// A back-reference candidate: copy `length` bytes from `distance` bytes back
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Match {
    pub distance: usize,
    pub length: usize,
}

impl Match {
    /// Sentinel returned when no candidate reaches the minimum length
    pub const NONE: Match = Match { distance: 0, length: 0 };

    pub fn is_none(&self) -> bool {
        self.length == 0
    }
}

pub trait MatchFinder {
    /// Find the longest match for the start of `lookahead` in `window`.
    ///
    /// Returns [`Match::NONE`] when nothing reaches the finder's minimum
    /// match length. Among equally long matches the smallest distance wins.
    fn find_longest_match(&mut self, window: &SlidingWindow, lookahead: &[u8]) -> Match;
}

/// Exhaustive finder: tries every distance from 1 up to the window fill.
///
/// Distances whose first byte differs from the lookahead are skipped with a
/// reverse byte scan; the surviving candidates are still visited nearest
/// first, so the result is identical to a plain scan.
#[derive(Debug, Clone)]
pub struct BruteForceMatchFinder {
    min_match_len: usize,
    max_match_len: usize,
}

impl BruteForceMatchFinder {
    pub fn new(min_match_len: usize, max_match_len: usize) -> Self {
        debug_assert!(min_match_len >= 1 && max_match_len >= min_match_len);
        Self { min_match_len, max_match_len }
    }

    /// Length of the match at `distance`, compared against the window as if
    /// it were already extended by the matched bytes (length may exceed distance).
    #[inline]
    fn match_length(
        window: &SlidingWindow,
        lookahead: &[u8],
        distance: usize,
        limit: usize,
    ) -> usize {
        let mut len = 0;
        while len < limit {
            let expected = if len < distance {
                window.byte_back(distance - len)
            } else {
                lookahead[len - distance]
            };
            if expected != lookahead[len] {
                break;
            }
            len += 1;
        }
        len
    }
}

impl MatchFinder for BruteForceMatchFinder {
    fn find_longest_match(&mut self, window: &SlidingWindow, lookahead: &[u8]) -> Match {
        let limit = lookahead.len().min(self.max_match_len);
        if limit < self.min_match_len || window.available() == 0 {
            return Match::NONE;
        }

        let first = lookahead[0];
        let (recent, older) = window.halves();
        let recent_len = recent.len();
        let wrapped_len = recent_len + older.len();

        // memrchr walks each half from its end, i.e. in ascending distance
        let candidates = memrchr_iter(first, recent)
            .map(|idx| recent_len - idx)
            .chain(memrchr_iter(first, older).map(|idx| wrapped_len - idx));

        let mut best = Match::NONE;
        for distance in candidates {
            let length = Self::match_length(window, lookahead, distance, limit);
            if length >= self.min_match_len && length > best.length {
                best = Match { distance, length };
                if length == limit {
                    break;
                }
            }
        }
        best
    }
}
