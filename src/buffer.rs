//! Byte-buffer conventions of the Node.js binding.

/// Splits a buffer of NUL-separated patterns, skipping empty ones.
pub(crate) fn split_patterns(bytes: &[u8]) -> Vec<String> {
  bytes
    .split(|&b| b == 0)
    .filter(|pattern| !pattern.is_empty())
    .map(|pattern| String::from_utf8_lossy(pattern).into_owned())
    .collect()
}

/// Bytes as ascii symbols. Bytes past the ascii range become NUL, which no
/// pattern can contain, so they break any partial match instead of failing
/// the scan.
pub(crate) fn symbols(bytes: &[u8]) -> impl Iterator<Item = char> + '_ {
  bytes.iter().map(|&b| if b.is_ascii() { b as char } else { '\0' })
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
