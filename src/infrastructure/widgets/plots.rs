//! Charting and plotting widgets

use super::factory::WidgetFactory;
use super::schema::{DefaultValue, PropertyKind, PropertySpec};

/// When viewport changes are synchronized back during panning:
/// on mouse release, continuously, or at `viewport_update_throttle` intervals
const VIEWPORT_UPDATE_POLICIES: &[&str] = &["mouseup", "continuous", "throttle"];

const VEGA_THEMES: &[&str] = &[
    "excel",
    "ggplot2",
    "quartz",
    "vox",
    "fivethirtyeight",
    "dark",
    "latimes",
    "urbaninstitute",
    "googlecharts",
];

const ECHARTS_RENDERERS: &[&str] = &["canvas", "svg"];

const ECHARTS_THEMES: &[&str] = &["default", "light", "dark"];

const PERSPECTIVE_PLUGINS: &[&str] = &[
    "datagrid",
    "d3_x_bar",
    "d3_y_bar",
    "d3_xy_line",
    "d3_y_line",
    "d3_y_area",
    "d3_y_scatter",
    "d3_xy_scatter",
    "d3_treemap",
    "d3_heatmap",
    "d3_sunburst",
    "d3_candlestick",
    "d3_ohlc",
];

const PERSPECTIVE_THEMES: &[&str] = &[
    "material",
    "material-dark",
    "monokai",
    "solarized",
    "solarized-dark",
    "vaporwave",
];

const TREND_LAYOUTS: &[&str] = &["column", "row"];

const TREND_PLOT_TYPES: &[&str] = &["line", "step", "area", "bar"];

const PLOTLY_PLOT: &[PropertySpec] = &[
    PropertySpec::array("data"),
    PropertySpec::object("layout"),
    PropertySpec::object("config"),
    PropertySpec::array("data_sources"),
    PropertySpec::optional_object("click_data"),
    PropertySpec::optional_object("clickannotation_data"),
    PropertySpec::optional_object("hover_data"),
    PropertySpec::optional_object("relayout_data"),
    PropertySpec::optional_array("restyle_data"),
    PropertySpec::optional_object("selected_data"),
    PropertySpec::optional_object("viewport"),
    PropertySpec::selector("viewport_update_policy", VIEWPORT_UPDATE_POLICIES, "mouseup"),
    PropertySpec::int("viewport_update_throttle", 200).bounded(Some(0), None),
    // incremented to force a re-render
    PropertySpec::int("_render_count", 0).bounded(Some(0), None),
];

const VEGA_PLOT: &[PropertySpec] = &[
    PropertySpec::object("data"),
    PropertySpec::object("data_sources"),
    PropertySpec::array("events"),
    PropertySpec::boolean("show_actions", false),
    PropertySpec::optional_selector("theme", VEGA_THEMES),
    PropertySpec::object("throttle"),
    PropertySpec::object("selection"),
];

const ECHARTS: &[PropertySpec] = &[
    PropertySpec::object("data"),
    PropertySpec::object("event_config"),
    PropertySpec::object("js_events"),
    PropertySpec::selector("renderer", ECHARTS_RENDERERS, "canvas"),
    PropertySpec::selector("theme", ECHARTS_THEMES, "default"),
];

const DECKGL_PLOT: &[PropertySpec] = &[
    PropertySpec::object("data"),
    PropertySpec::array("data_sources"),
    PropertySpec::object("initialViewState"),
    PropertySpec::array("layers"),
    PropertySpec::string("mapbox_api_key", ""),
    // either a flag or a tooltip template
    PropertySpec::new("tooltip", PropertyKind::Any, DefaultValue::Bool(true)),
    PropertySpec::object("viewState"),
    PropertySpec::object("throttle"),
    PropertySpec::object("clickState"),
    PropertySpec::object("hoverState"),
];

const PERSPECTIVE: &[PropertySpec] = &[
    PropertySpec::optional_object("aggregates"),
    PropertySpec::optional_array("split_by"),
    PropertySpec::array("columns"),
    PropertySpec::optional_array("expressions"),
    PropertySpec::boolean("editable", true),
    PropertySpec::optional_array("filters"),
    PropertySpec::optional_array("group_by"),
    PropertySpec::selector("plugin", PERSPECTIVE_PLUGINS, "datagrid"),
    PropertySpec::boolean("selectable", true),
    PropertySpec::object("schema"),
    PropertySpec::optional_array("sort"),
    PropertySpec::optional_object("source"),
    PropertySpec::selector("theme", PERSPECTIVE_THEMES, "material"),
];

const TREND_INDICATOR: &[PropertySpec] = &[
    PropertySpec::object("data"),
    PropertySpec::selector("layout", TREND_LAYOUTS, "column"),
    PropertySpec::string("plot_x", "x"),
    PropertySpec::string("plot_y", "y"),
    PropertySpec::string("plot_color", "#428bca"),
    PropertySpec::selector("plot_type", TREND_PLOT_TYPES, "bar"),
    PropertySpec::string("pos_color", "#5cb85c"),
    PropertySpec::string("neg_color", "#d9534f"),
    PropertySpec::string("title", ""),
    PropertySpec::optional_number("value"),
    PropertySpec::optional_number("value_change"),
];

pub fn plotly_plot() -> WidgetFactory {
    WidgetFactory::new("PlotlyPlot", "Plotly figure", PLOTLY_PLOT)
}

pub fn vega_plot() -> WidgetFactory {
    WidgetFactory::new("VegaPlot", "Vega and Vega-Lite specification", VEGA_PLOT)
}

pub fn echarts() -> WidgetFactory {
    WidgetFactory::new("ECharts", "Apache ECharts chart", ECHARTS)
}

pub fn deckgl_plot() -> WidgetFactory {
    WidgetFactory::new("DeckGLPlot", "deck.gl map layers", DECKGL_PLOT)
}

pub fn perspective() -> WidgetFactory {
    WidgetFactory::new("Perspective", "Perspective pivot table and charts", PERSPECTIVE)
}

pub fn trend_indicator() -> WidgetFactory {
    WidgetFactory::new("TrendIndicator", "Value with a sparkline trend", TREND_INDICATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ModelConfig, ModelError, ModelFactory};
    use serde_json::json;

    #[test]
    fn test_plotly_defaults() {
        let model = plotly_plot().create(ModelConfig::new()).unwrap();
        let properties = model.properties();

        assert_eq!(properties["viewport_update_policy"], json!("mouseup"));
        assert_eq!(properties["viewport_update_throttle"], json!(200));
        assert_eq!(properties["_render_count"], json!(0));
        assert_eq!(properties["data"], json!([]));
        assert_eq!(properties["layout"], json!({}));
        assert_eq!(properties["click_data"], json!(null));
    }

    #[test]
    fn test_plotly_figure_payload() {
        let config = ModelConfig::try_from(json!({
            "data": [{"type": "scatter", "x": [1, 2, 3], "y": [4, 5, 6]}],
            "layout": {"autosize": true},
            "viewport_update_policy": "throttle",
            "viewport_update_throttle": 50
        }))
        .unwrap();

        let model = plotly_plot().create(config).unwrap();
        assert_eq!(model.properties()["layout"]["autosize"], json!(true));
        assert_eq!(model.properties()["viewport_update_throttle"], json!(50));
    }

    #[test]
    fn test_plotly_rejects_invalid_policy() {
        let error = plotly_plot()
            .create(ModelConfig::new().with("viewport_update_policy", "always"))
            .unwrap_err();

        assert!(matches!(
            error,
            ModelError::InvalidProperty { ref property, .. } if property == "viewport_update_policy"
        ));
    }

    #[test]
    fn test_plotly_rejects_negative_throttle() {
        assert!(plotly_plot()
            .create(ModelConfig::new().with("viewport_update_throttle", -1))
            .is_err());
        assert!(plotly_plot()
            .create(ModelConfig::new().with("_render_count", -1))
            .is_err());
    }

    #[test]
    fn test_deckgl_tooltip_accepts_template() {
        let model = deckgl_plot()
            .create(ModelConfig::new().with("tooltip", json!({"html": "<b>{name}</b>"})))
            .unwrap();
        assert_eq!(model.properties()["tooltip"]["html"], json!("<b>{name}</b>"));

        let model = deckgl_plot().create(ModelConfig::new()).unwrap();
        assert_eq!(model.properties()["tooltip"], json!(true));
    }

    #[test]
    fn test_vega_theme_is_optional() {
        assert!(vega_plot()
            .create(ModelConfig::new().with("theme", json!(null)))
            .is_ok());
        assert!(vega_plot()
            .create(ModelConfig::new().with("theme", "dark"))
            .is_ok());
        assert!(vega_plot()
            .create(ModelConfig::new().with("theme", "neon"))
            .is_err());
    }
}
