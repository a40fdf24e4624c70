use crate::error::LookupError;
use crate::models::FrankenstyleName;

/// Installation directory for a plugin type, relative to the Moodle root.
///
/// Upstream introduces new plugin types occasionally; they are added here by
/// hand.
pub fn directory_for_plugin_type(plugin_type: &str) -> Option<&'static str> {
    let dir = match plugin_type {
        "antivirus" => "lib/antivirus",
        "assignfeedback" => "mod/assign/feedback",
        "assignsubmission" => "mod/assign/submission",
        "atto" => "lib/editor/atto/plugins",
        "availability" => "availability/condition",
        "block" => "blocks",
        "booktool" => "mod/book/tool",
        "customfield" => "customfield/field",
        "datafield" => "mod/data/field",
        "enrol" => "enrol",
        "fileconverter" => "files/converter",
        "filter" => "filter",
        "format" => "course/format",
        "local" => "local",
        "logstore" => "admin/tool/log/store",
        "mlbackend" => "lib/mlbackend",
        "mod" => "mod",
        "profilefield" => "user/profile/field",
        "qbank" => "question/bank",
        "qbehaviour" => "question/behaviour",
        "qformat" => "question/format",
        "qtype" => "question/type",
        "repository" => "repository",
        "theme" => "theme",
        "tiny" => "lib/editor/tiny/plugins",
        "tool" => "admin/tool",
        _ => return None,
    };
    Some(dir)
}

/// Relative installation directory for a plugin, from its frankenstyle name.
pub fn plugin_directory(frankenstyle_name: &str) -> Result<String, LookupError> {
    let parsed = FrankenstyleName::parse(frankenstyle_name)?;
    let dir = directory_for_plugin_type(&parsed.plugin_type)
        .ok_or_else(|| LookupError::InvalidPluginType(parsed.plugin_type.clone()))?;
    let path = format!("{}/{}", dir, parsed.plugin_name);
    tracing::debug!(name = %parsed, directory = %path, "resolved plugin directory");
    Ok(path)
}
