//! Literal anchor scanning over the input text.
//!
//! Occurrence search is a plain left-to-right scan: `memchr` jumps to each
//! candidate first byte and the rest of the needle is compared in place. No
//! table is built, and overlapping occurrences are all reported.

/// Whether `text` starts with `anchor`.
#[inline]
pub(super) fn has_prefix(text: &str, anchor: &str) -> bool {
    text.as_bytes().starts_with(anchor.as_bytes())
}

/// Whether `text` ends with `anchor`.
#[inline]
pub(super) fn has_suffix(text: &str, anchor: &str) -> bool {
    text.as_bytes().ends_with(anchor.as_bytes())
}

/// Start offsets of every occurrence of `needle` lying within
/// `text[from..end]`, left to right.
///
/// An occurrence ending exactly at `end` is included. Offsets are byte
/// offsets and always fall on char boundaries, since a UTF-8 needle can only
/// match starting at a leading byte.
pub(super) fn occurrences<'a>(
    text: &'a str,
    needle: &'a str,
    from: usize,
    end: usize,
) -> Occurrences<'a> {
    Occurrences {
        haystack: text.as_bytes().get(..end).unwrap_or_default(),
        needle: needle.as_bytes(),
        next: from,
    }
}

/// Iterator returned by [`occurrences`].
pub(super) struct Occurrences<'a> {
    haystack: &'a [u8],
    needle: &'a [u8],
    next: usize,
}

impl Iterator for Occurrences<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let (&first, rest) = self.needle.split_first()?;
        loop {
            let window = self.haystack.get(self.next..)?;
            let start = self.next + memchr::memchr(first, window)?;
            self.next = start + 1;
            let after = start + 1;
            let tail = self.haystack.get(after..after + rest.len())?;
            if tail == rest {
                return Some(start);
            }
        }
    }
}

/// Split points from `from` to `end` inclusive, ascending, on char
/// boundaries.
///
/// Ascending order tries the shortest candidate substring first.
pub(super) fn split_points(
    text: &str,
    from: usize,
    end: usize,
) -> impl Iterator<Item = usize> + '_ {
    (from..=end).filter(move |&at| text.is_char_boundary(at))
}

#[cfg(test)]
mod tests;
