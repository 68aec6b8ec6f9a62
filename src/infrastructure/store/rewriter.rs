/// Rewrites a line already flagged by the [`Matcher`](super::Matcher).
///
/// Once a line is known to hold at least one delimiter-bounded occurrence of
/// `origin`, the replacement is a plain literal substring replace across the
/// whole line. Unbounded occurrences on the same line are replaced too; the
/// boundary check gates line selection only, not the substitution itself.
/// Callers that need the strict bounded behavior must not rely on this
/// function for lines the Matcher did not flag.
pub fn rewrite(line: &str, origin: &str, target: &str) -> String {
    line.replace(origin, target)
}
