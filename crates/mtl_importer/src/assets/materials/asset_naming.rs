//! Asset name sanitizing
//!
//! Host asset stores only accept `[0-9A-Za-z_]` in object names.

/// Replace every run of characters outside `[0-9A-Za-z.]` with a single `_`,
/// then replace every `.` with `_`.
///
/// # Examples
/// ```
/// use mtl_importer::assets::materials::sanitize_asset_name;
///
/// assert_eq!(sanitize_asset_name("M_Wood Planks.001"), "M_Wood_Planks_001");
/// ```
pub fn sanitize_asset_name(name: &str) -> String {
    let mut collapsed = String::with_capacity(name.len());
    let mut in_run = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '.' {
            collapsed.push(c);
            in_run = false;
        } else if !in_run {
            collapsed.push('_');
            in_run = true;
        }
    }

    collapsed.replace('.', "_")
}

/// Asset name for a material: `prefix` + `name`, sanitized
pub fn material_asset_name(prefix: &str, name: &str) -> String {
    sanitize_asset_name(&format!("{prefix}{name}"))
}
