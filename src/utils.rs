use tracing::level_filters::LevelFilter;

/// Split `s` at the first `split_char`, trimming both halves.
pub fn divide_str(s: &'_ str, split_char: char) -> Option<(&'_ str, &'_ str)> {
    s.split_once(split_char)
        .map(|(left, right)| (left.trim(), right.trim()))
}

/// Split into exactly two whitespace separated words.
pub fn two_words(s: &'_ str) -> Option<(&'_ str, &'_ str)> {
    let mut words = s.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(a), Some(b), None) => Some((a, b)),
        _ => None,
    }
}

/// Logs go to stderr, stdout is reserved for the result.
pub fn init_tracing(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
