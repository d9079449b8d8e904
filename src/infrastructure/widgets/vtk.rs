//! VTK scene widgets

use super::factory::WidgetFactory;
use super::schema::PropertySpec;

const INTERPOLATIONS: &[&str] = &["fast_linear", "linear", "nearest"];

const VTK_AXES: &[PropertySpec] = &[
    PropertySpec::array("origin"),
    PropertySpec::object("xticker"),
    PropertySpec::object("yticker"),
    PropertySpec::object("zticker"),
    PropertySpec::int("digits", 1).bounded(Some(0), None),
    PropertySpec::boolean("show_grid", true),
    PropertySpec::number("grid_opacity", 0.1),
    PropertySpec::number("axes_opacity", 1.0),
    PropertySpec::int("fontsize", 12).bounded(Some(1), None),
];

const VTK_JS_PLOT: &[PropertySpec] = &[
    // base64 encoded vtk.js scene
    PropertySpec::optional_string("data"),
    PropertySpec::optional_object("axes"),
    PropertySpec::object("camera"),
    PropertySpec::array("color_mappers"),
    PropertySpec::boolean("enable_keybindings", false),
    PropertySpec::boolean("orientation_widget", false),
    PropertySpec::boolean("interactive_orientation_widget", true),
    PropertySpec::boolean("one_time_reset", false),
];

const VTK_SYNCHRONIZED_PLOT: &[PropertySpec] = &[
    PropertySpec::object("scene"),
    PropertySpec::object("arrays"),
    PropertySpec::array("arrays_processed"),
    PropertySpec::optional_object("axes"),
    PropertySpec::object("camera"),
    PropertySpec::array("color_mappers"),
    PropertySpec::boolean("enable_keybindings", false),
    PropertySpec::boolean("orientation_widget", false),
    PropertySpec::boolean("interactive_orientation_widget", true),
    PropertySpec::boolean("one_time_reset", false),
    PropertySpec::boolean("rebuild", false),
];

const VTK_VOLUME_PLOT: &[PropertySpec] = &[
    PropertySpec::optional_object("data"),
    PropertySpec::string("colormap", "erdc_rainbow_bright"),
    PropertySpec::boolean("rescale", false),
    PropertySpec::boolean("shadow", true),
    PropertySpec::number("sampling", 0.4),
    PropertySpec::number("edge_gradient", 0.4),
    PropertySpec::number("ambient", 0.2),
    PropertySpec::number("diffuse", 0.7),
    PropertySpec::number("specular", 0.3),
    PropertySpec::number("specular_power", 8.0),
    PropertySpec::int("slice_i", 0).bounded(Some(0), None),
    PropertySpec::int("slice_j", 0).bounded(Some(0), None),
    PropertySpec::int("slice_k", 0).bounded(Some(0), None),
    PropertySpec::boolean("display_volume", true),
    PropertySpec::boolean("display_slices", false),
    PropertySpec::string("render_background", "#52576e"),
    PropertySpec::selector("interpolation", INTERPOLATIONS, "fast_linear"),
    PropertySpec::boolean("controller_expanded", true),
    PropertySpec::number("nan_opacity", 1.0),
    PropertySpec::object("mapper"),
    PropertySpec::boolean("orientation_widget", false),
];

pub fn vtk_axes() -> WidgetFactory {
    WidgetFactory::new("VTKAxes", "Axes overlay for VTK scenes", VTK_AXES)
}

pub fn vtk_js_plot() -> WidgetFactory {
    WidgetFactory::new("VTKJSPlot", "Serialized vtk.js scene", VTK_JS_PLOT)
}

pub fn vtk_synchronized_plot() -> WidgetFactory {
    WidgetFactory::new(
        "VTKSynchronizedPlot",
        "VTK render window kept in sync with the backend",
        VTK_SYNCHRONIZED_PLOT,
    )
}

pub fn vtk_volume_plot() -> WidgetFactory {
    WidgetFactory::new("VTKVolumePlot", "Volume rendering of 3D image data", VTK_VOLUME_PLOT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ModelConfig, ModelFactory};
    use serde_json::json;

    #[test]
    fn test_volume_slices_must_be_non_negative() {
        assert!(vtk_volume_plot()
            .create(ModelConfig::new().with("slice_i", 10))
            .is_ok());
        assert!(vtk_volume_plot()
            .create(ModelConfig::new().with("slice_j", -1))
            .is_err());
    }

    #[test]
    fn test_numbers_accept_integers() {
        let model = vtk_volume_plot()
            .create(ModelConfig::new().with("sampling", 1))
            .unwrap();
        assert_eq!(model.properties()["sampling"], json!(1));
    }

    #[test]
    fn test_js_plot_scene_may_be_null() {
        let model = vtk_js_plot().create(ModelConfig::new()).unwrap();
        assert_eq!(model.properties()["data"], json!(null));
    }
}
