//! Builtin Widgets
//!
//! The widget models that ship with the registry. Each widget module
//! declares its own name and properties; `register_builtin_models` makes one
//! registration call per widget.

mod controls;
mod factory;
mod media;
mod plots;
mod schema;
mod text;
mod vtk;

pub use factory::{WidgetFactory, WidgetModel};
pub use schema::{DefaultValue, PropertyKind, PropertySpec};

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::registry::RegistryError;
use crate::infrastructure::registry::{RegistryBuilder, RegistryConfig};

/// Register all builtin widget models using default configuration
///
/// Returns the number of widgets registered.
pub fn register_builtin_models(builder: &mut RegistryBuilder) -> Result<usize, Vec<RegistryError>> {
    register_builtin_models_with_config(builder, &RegistryConfig::default())
}

/// Register builtin widget models based on configuration.
///
/// Disabled widgets are skipped. Every failed registration is collected;
/// the remaining widgets are still registered. Returns the number of
/// widgets registered.
pub fn register_builtin_models_with_config(
    builder: &mut RegistryBuilder,
    config: &RegistryConfig,
) -> Result<usize, Vec<RegistryError>> {
    if !config.settings.builtins {
        info!("Builtin widget models are disabled by configuration");
        return Ok(0);
    }

    let mut registrar = Registrar {
        builder,
        config,
        errors: Vec::new(),
        registered: Vec::new(),
        added: 0,
    };

    registrar.add(text::ace_plot());
    registrar.add(media::audio());
    registrar.add(controls::card());
    registrar.add(controls::comm_manager());
    registrar.add(controls::data_tabulator());
    registrar.add(controls::datetime_picker());
    registrar.add(plots::deckgl_plot());
    registrar.add(plots::echarts());
    registrar.add(controls::file_download());
    registrar.add(text::html());
    registrar.add(controls::idom());
    registrar.add(controls::ipywidget());
    registrar.add(text::json());
    registrar.add(text::json_editor());
    registrar.add(text::katex());
    registrar.add(controls::location());
    registrar.add(text::mathjax());
    registrar.add(plots::perspective());
    registrar.add(media::player());
    registrar.add(plots::plotly_plot());
    registrar.add(controls::progress());
    registrar.add(controls::single_select());
    registrar.add(media::speech_to_text());
    registrar.add(controls::state());
    registrar.add(media::text_to_speech());
    registrar.add(plots::trend_indicator());
    registrar.add(plots::vega_plot());
    registrar.add(media::video());
    registrar.add(media::video_stream());
    registrar.add(vtk::vtk_axes());
    registrar.add(vtk::vtk_js_plot());
    registrar.add(vtk::vtk_synchronized_plot());
    registrar.add(vtk::vtk_volume_plot());

    registrar.finish()
}

struct Registrar<'a> {
    builder: &'a mut RegistryBuilder,
    config: &'a RegistryConfig,
    errors: Vec<RegistryError>,
    registered: Vec<&'static str>,
    added: usize,
}

impl Registrar<'_> {
    fn add(&mut self, factory: WidgetFactory) {
        let name = factory.name();
        self.registered.push(name);

        if !self.config.is_model_enabled(name) {
            debug!(model = name, "Skipping disabled builtin model");
            return;
        }

        let factory = match self.config.model_defaults(name) {
            Some(defaults) => match factory.with_defaults(defaults) {
                Ok(factory) => factory,
                Err(e) => {
                    self.errors.push(RegistryError::invalid_defaults(name, e));
                    return;
                }
            },
            None => factory,
        };

        match self.builder.register(name, Arc::new(factory)) {
            Ok(()) => self.added += 1,
            Err(e) => self.errors.push(e),
        }
    }

    fn finish(self) -> Result<usize, Vec<RegistryError>> {
        for name in self.config.models.keys() {
            if !self.registered.iter().any(|known| *known == name.as_str()) {
                warn!(model = %name, "Configuration refers to an unknown builtin model");
            }
        }

        if self.errors.is_empty() {
            info!(count = self.added, "Builtin widget models registered");
            Ok(self.added)
        } else {
            Err(self.errors)
        }
    }
}
