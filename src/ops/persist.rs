use crate::io::paths::ConfigPaths;
use crate::io::rc_io::{RcError, write_rc};
use crate::model::CoefficientSet;

/// Write the final session values as the user override layer.
/// Only non-zero values are stored; the file is replaced wholesale.
pub fn persist_overrides(paths: &ConfigPaths, coefficients: CoefficientSet) -> Result<(), RcError> {
    write_rc(&paths.user, &coefficients)?;
    tracing::info!(
        path = %paths.user.display(),
        written = coefficients.non_default().count(),
        "saved urgency overrides"
    );
    Ok(())
}
