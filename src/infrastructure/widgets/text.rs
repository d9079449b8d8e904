//! Text, markup and code widgets

use super::factory::WidgetFactory;
use super::schema::PropertySpec;

const JSON_THEMES: &[&str] = &["light", "dark"];

const JSON_EDITOR_MODES: &[&str] = &["tree", "view", "form", "code", "text", "preview"];

const ACE_PLOT: &[PropertySpec] = &[
    PropertySpec::string("code", ""),
    PropertySpec::optional_string("filename"),
    PropertySpec::optional_string("language"),
    PropertySpec::string("theme", "chrome"),
    PropertySpec::array("annotations"),
    PropertySpec::boolean("readonly", false),
    PropertySpec::boolean("print_margin", false),
];

const HTML: &[PropertySpec] = &[
    PropertySpec::string("text", ""),
    PropertySpec::object("events"),
];

const JSON: &[PropertySpec] = &[
    PropertySpec::string("text", "{}"),
    PropertySpec::int("depth", 1).bounded(Some(-1), None),
    PropertySpec::boolean("hover_preview", false),
    PropertySpec::selector("theme", JSON_THEMES, "dark"),
];

const JSON_EDITOR: &[PropertySpec] = &[
    PropertySpec::any("data"),
    PropertySpec::boolean("menu", true),
    PropertySpec::selector("mode", JSON_EDITOR_MODES, "tree"),
    PropertySpec::boolean("search", true),
    PropertySpec::array("selection"),
    PropertySpec::optional_object("schema"),
    PropertySpec::array("templates"),
];

const MATH: &[PropertySpec] = &[PropertySpec::string("text", "")];

pub fn ace_plot() -> WidgetFactory {
    WidgetFactory::new("AcePlot", "Ace code editor", ACE_PLOT)
}

pub fn html() -> WidgetFactory {
    WidgetFactory::new("HTML", "Raw HTML markup with DOM event forwarding", HTML)
}

pub fn json() -> WidgetFactory {
    WidgetFactory::new("JSON", "Collapsible JSON tree view", JSON)
}

pub fn json_editor() -> WidgetFactory {
    WidgetFactory::new("JSONEditor", "Editable JSON document", JSON_EDITOR)
}

pub fn katex() -> WidgetFactory {
    WidgetFactory::new("KaTeX", "LaTeX math rendered with KaTeX", MATH)
}

pub fn mathjax() -> WidgetFactory {
    WidgetFactory::new("MathJax", "LaTeX math rendered with MathJax", MATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ModelConfig, ModelFactory};
    use serde_json::json;

    #[test]
    fn test_json_depth_allows_full_expansion() {
        let model = json()
            .create(ModelConfig::new().with("depth", -1))
            .unwrap();
        assert_eq!(model.properties()["depth"], json!(-1));

        assert!(json().create(ModelConfig::new().with("depth", -2)).is_err());
    }

    #[test]
    fn test_math_renderers_share_properties() {
        let katex = katex().create(ModelConfig::new().with("text", "x^2")).unwrap();
        let mathjax = mathjax().create(ModelConfig::new().with("text", "x^2")).unwrap();

        assert_eq!(katex.model_type(), "KaTeX");
        assert_eq!(mathjax.model_type(), "MathJax");
        assert_eq!(katex.properties(), mathjax.properties());
    }

    #[test]
    fn test_json_editor_mode() {
        assert!(json_editor()
            .create(ModelConfig::new().with("mode", "code"))
            .is_ok());
        assert!(json_editor()
            .create(ModelConfig::new().with("mode", "yaml"))
            .is_err());
    }
}
