//! Whitespace normalization of raw capture text
//!
//! ifstat pads its columns with a variable number of spaces, so the first
//! parsing step collapses every line into a token list. Nothing is
//! interpreted here; header recognition and column mapping happen on the
//! resulting grid.

/// Splits every line of the capture into tokens: runs of whitespace collapse
/// to a single separator, then the line is split on that separator.
///
/// Boundary padding matters. The interface header starts with spaces, which
/// yield an empty token 0 — that is what puts the `Time` tag at token 1 — and
/// the trailing padding yields the final empty token that the interface list
/// excludes. A blank line becomes a single empty token; it fails both header
/// tests in [`super::schema`] and falls through to the data rows, where the
/// column check rejects it.
pub fn tokenize(input: &str) -> Vec<Vec<String>> {
    input.lines().map(tokenize_line).collect()
}

fn tokenize_line(line: &str) -> Vec<String> {
    let mut collapsed = String::with_capacity(line.len());
    let mut in_run = false;
    for ch in line.chars() {
        if ch.is_whitespace() {
            if !in_run {
                collapsed.push(' ');
            }
            in_run = true;
        } else {
            collapsed.push(ch);
            in_run = false;
        }
    }
    collapsed.split(' ').map(str::to_owned).collect()
}
