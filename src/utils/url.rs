//! Request URL composition

/// Concatenate URL fragments in order.
///
/// Fragments are joined as-is: no separators are inserted and nothing is
/// validated or encoded. Callers own the slashes and the `?`/`&` pieces.
pub fn build_url(fragments: &[&str]) -> String {
    fragments.concat()
}
