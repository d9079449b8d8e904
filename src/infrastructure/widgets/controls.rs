//! Layout, input, state and bridge widgets

use super::factory::WidgetFactory;
use super::schema::{DefaultValue, PropertyKind, PropertySpec};

const BUTTON_TYPES: &[&str] = &["default", "primary", "success", "warning", "danger", "light"];

const BAR_COLORS: &[&str] = &[
    "primary",
    "secondary",
    "success",
    "info",
    "danger",
    "warning",
    "light",
    "dark",
];

const PICKER_POSITIONS: &[&str] = &["auto", "above", "below"];

const PICKER_MODES: &[&str] = &["single", "range"];

const PAGINATION_MODES: &[&str] = &["local", "remote"];

const TABULATOR_LAYOUTS: &[&str] = &[
    "fit_data",
    "fit_data_fill",
    "fit_data_stretch",
    "fit_data_table",
    "fit_columns",
];

const CARD: &[PropertySpec] = &[
    PropertySpec::boolean("collapsed", false),
    PropertySpec::boolean("collapsible", true),
    PropertySpec::array("button_css_classes"),
    PropertySpec::string("header_color", ""),
    PropertySpec::array("header_css_classes"),
    PropertySpec::optional_string("header_background"),
    PropertySpec::string("header_tag", "div"),
    PropertySpec::string("tag", "div"),
];

const DATA_TABULATOR: &[PropertySpec] = &[
    PropertySpec::optional_object("source"),
    PropertySpec::array("columns"),
    PropertySpec::object("configuration"),
    PropertySpec::object("styles"),
    PropertySpec::optional_selector("pagination", PAGINATION_MODES),
    PropertySpec::int("page", 1).bounded(Some(1), None),
    PropertySpec::int("page_size", 20).bounded(Some(1), None),
    PropertySpec::int("max_page", 1).bounded(Some(1), None),
    PropertySpec::array("groupby"),
    PropertySpec::array("hidden_columns"),
    // true, false, "checkbox" or "toggle"
    PropertySpec::new("select_mode", PropertyKind::Any, DefaultValue::Bool(true)),
    PropertySpec::optional_array("selectable_rows"),
    PropertySpec::array("sorters"),
    PropertySpec::array("frozen_columns"),
    PropertySpec::array("frozen_rows"),
    PropertySpec::string("theme", "simple"),
    PropertySpec::selector("layout", TABULATOR_LAYOUTS, "fit_data"),
];

const DATETIME_PICKER: &[PropertySpec] = &[
    PropertySpec::optional_string("value"),
    PropertySpec::optional_string("min_date"),
    PropertySpec::optional_string("max_date"),
    PropertySpec::array("disabled_dates"),
    PropertySpec::array("enabled_dates"),
    PropertySpec::selector("position", PICKER_POSITIONS, "auto"),
    PropertySpec::boolean("inline", false),
    PropertySpec::boolean("enable_time", true),
    PropertySpec::boolean("enable_seconds", true),
    PropertySpec::boolean("military_time", true),
    PropertySpec::string("date_format", "Y-m-d H:i:S"),
    PropertySpec::selector("mode", PICKER_MODES, "single"),
];

const FILE_DOWNLOAD: &[PropertySpec] = &[
    PropertySpec::boolean("auto", true),
    PropertySpec::int("clicks", 0).bounded(Some(0), None),
    PropertySpec::optional_string("data"),
    PropertySpec::string("label", "Download File"),
    PropertySpec::optional_string("filename"),
    PropertySpec::selector("button_type", BUTTON_TYPES, "default"),
    PropertySpec::boolean("embed", false),
    PropertySpec::int("_transfers", 0).bounded(Some(0), None),
];

const PROGRESS: &[PropertySpec] = &[
    PropertySpec::optional_int("value").bounded(Some(0), None),
    PropertySpec::int("max", 100).bounded(Some(0), None),
    PropertySpec::boolean("active", true),
    PropertySpec::selector("bar_color", BAR_COLORS, "primary"),
    PropertySpec::array("css_classes"),
];

const SINGLE_SELECT: &[PropertySpec] = &[
    PropertySpec::array("options"),
    PropertySpec::array("disabled_options"),
    PropertySpec::optional_string("value"),
    PropertySpec::int("size", 4).bounded(Some(1), None),
];

const LOCATION: &[PropertySpec] = &[
    PropertySpec::string("href", ""),
    PropertySpec::string("hostname", ""),
    PropertySpec::string("pathname", ""),
    PropertySpec::string("protocol", ""),
    PropertySpec::string("port", ""),
    PropertySpec::string("search", ""),
    PropertySpec::string("hash", ""),
    PropertySpec::boolean("reload", false),
];

const STATE: &[PropertySpec] = &[
    PropertySpec::boolean("json", false),
    PropertySpec::object("state"),
    PropertySpec::array("values"),
    PropertySpec::object("widgets"),
];

const IDOM: &[PropertySpec] = &[
    PropertySpec::array("event"),
    PropertySpec::optional_string("importSourceUrlPrefix"),
    PropertySpec::object("msg"),
];

const IPY_WIDGET: &[PropertySpec] = &[PropertySpec::optional_object("bundle")];

const COMM_MANAGER: &[PropertySpec] = &[
    PropertySpec::optional_string("plot_id"),
    PropertySpec::optional_string("comm_id"),
    PropertySpec::optional_string("client_comm_id"),
    PropertySpec::int("timeout", 5000).bounded(Some(0), None),
    PropertySpec::int("debounce", 50).bounded(Some(0), None),
];

pub fn card() -> WidgetFactory {
    WidgetFactory::new("Card", "Collapsible card layout", CARD)
}

pub fn data_tabulator() -> WidgetFactory {
    WidgetFactory::new("DataTabulator", "Paginated, editable data grid", DATA_TABULATOR)
}

pub fn datetime_picker() -> WidgetFactory {
    WidgetFactory::new("DatetimePicker", "Date and time picker", DATETIME_PICKER)
}

pub fn file_download() -> WidgetFactory {
    WidgetFactory::new("FileDownload", "Button that downloads a file", FILE_DOWNLOAD)
}

pub fn progress() -> WidgetFactory {
    WidgetFactory::new("Progress", "Progress bar", PROGRESS)
}

pub fn single_select() -> WidgetFactory {
    WidgetFactory::new("SingleSelect", "List box with a single selection", SINGLE_SELECT)
}

pub fn location() -> WidgetFactory {
    WidgetFactory::new("Location", "Browser URL state", LOCATION)
}

pub fn state() -> WidgetFactory {
    WidgetFactory::new("State", "Precomputed widget states for static export", STATE)
}

pub fn idom() -> WidgetFactory {
    WidgetFactory::new("IDOM", "IDOM component view", IDOM)
}

pub fn ipywidget() -> WidgetFactory {
    WidgetFactory::new("IPyWidget", "Bridge to a Jupyter ipywidget", IPY_WIDGET)
}

pub fn comm_manager() -> WidgetFactory {
    WidgetFactory::new("CommManager", "Kernel comm channel for a rendered document", COMM_MANAGER)
}
