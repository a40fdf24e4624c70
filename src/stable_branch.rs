use crate::error::LookupError;

/// Name of the stable Git branch tracking a `major.minor` Moodle version,
/// e.g. `4.3` maps to `MOODLE_403_STABLE` and `4.10` to `MOODLE_410_STABLE`.
pub fn stable_branch(moodle_version: &str) -> Result<String, LookupError> {
    let invalid = || LookupError::InvalidMoodleVersion(moodle_version.to_string());

    let (major, minor) = moodle_version.split_once('.').ok_or_else(invalid)?;
    if major.len() != 1 {
        return Err(invalid());
    }
    if !matches!(minor.len(), 1 | 2) {
        return Err(invalid());
    }

    // single-digit minors are zero-padded: 4.3 -> 403
    let branch = if minor.len() == 2 {
        format!("MOODLE_{}{}_STABLE", major, minor)
    } else {
        format!("MOODLE_{}0{}_STABLE", major, minor)
    };
    tracing::debug!(version = moodle_version, branch = %branch, "resolved stable branch");
    Ok(branch)
}
