use std::path::PathBuf;

use crate::io::discovery::{ConfigSource, discover_uda_keys};
use crate::io::paths::ConfigPaths;
use crate::io::rc_io::{RcError, read_rc};
use crate::model::CoefficientSet;

/// Error type for assembling the working coefficient set
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("missing base file: {}", path.display())]
    MissingBase { path: PathBuf },
    #[error(transparent)]
    Rc(#[from] RcError),
}

/// Base layer with the user layer applied on top
pub fn merge_layers(base: &CoefficientSet, user: &CoefficientSet) -> CoefficientSet {
    let mut merged = base.clone();
    merged.overlay(user);
    merged
}

/// Assemble the coefficient set for an editing session.
///
/// Reads the base layer (which must exist) and the optional user layer,
/// merges them, adds every discovered UDA key that has no value yet with
/// value 0, then keeps only keys under the given categories (all keys when
/// `categories` is empty). An empty result is returned as-is; deciding
/// what to do about it is up to the caller.
pub fn build_coefficients(
    paths: &ConfigPaths,
    source: &dyn ConfigSource,
    categories: &[String],
) -> Result<CoefficientSet, BuildError> {
    if !paths.base.exists() {
        return Err(BuildError::MissingBase {
            path: paths.base.clone(),
        });
    }

    let base = read_rc(&paths.base)?;
    let user = read_rc(&paths.user)?;
    let mut coefficients = merge_layers(&base, &user);

    for key in discover_uda_keys(source) {
        coefficients.insert_default(&key);
    }

    coefficients.retain_categories(categories);
    tracing::debug!(
        base = base.len(),
        user = user.len(),
        total = coefficients.len(),
        "built coefficient set"
    );
    Ok(coefficients)
}
