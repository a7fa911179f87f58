use shell_ui_menu::IconRef;

pub(crate) const DASHBOARD: &[u8] =
    include_bytes!("../../../assets/icons/dashboard.svg");
pub(crate) const INVENTORY: &[u8] =
    include_bytes!("../../../assets/icons/inventory.svg");
pub(crate) const SALES: &[u8] =
    include_bytes!("../../../assets/icons/sales.svg");
pub(crate) const REPORTS: &[u8] =
    include_bytes!("../../../assets/icons/reports.svg");
pub(crate) const SETTINGS: &[u8] =
    include_bytes!("../../../assets/icons/settings.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../../../assets/icons/chevron_down.svg");
pub(crate) const CHEVRON_RIGHT: &[u8] =
    include_bytes!("../../../assets/icons/chevron_right.svg");
pub(crate) const FALLBACK: &[u8] =
    include_bytes!("../../../assets/icons/circle.svg");

/// Map an opaque menu icon reference to its SVG asset.
pub(crate) fn menu_icon(icon: Option<&IconRef>) -> &'static [u8] {
    match icon.map(IconRef::key) {
        Some("dashboard") => DASHBOARD,
        Some("inventory") => INVENTORY,
        Some("sales") => SALES,
        Some("reports") => REPORTS,
        Some("settings") => SETTINGS,
        _ => FALLBACK,
    }
}
