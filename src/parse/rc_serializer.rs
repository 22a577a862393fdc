use crate::model::CoefficientSet;

/// Serialize the non-zero entries as `key=value` lines in key order.
/// An all-default set serializes to the empty string.
pub fn serialize_rc(set: &CoefficientSet) -> String {
    let mut out = String::new();
    for (key, value) in set.non_default() {
        out.push_str(key);
        out.push('=');
        out.push_str(&value.to_string());
        out.push('\n');
    }
    out
}
