//! Column helper for the block table printed by [`print_report`](super::print_report).

/// Quote `value` and pad it on the left to `width`, so block rows line up
/// under the header. Values wider than `width` are kept whole.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}
