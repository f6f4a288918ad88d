use crate::config::{CanvasPolicy, LayoutOptions, LayoutSpacing};
use crate::error::{FlowError, GraphError};
use crate::graph::{Graph, build_graph, encode_specification};
use crate::pipeline::{FlowDocument, SavedCanvas, Specification};
use crate::schema::PropertyTypes;

/// Configured entry point for moving pipelines between their document and graph forms.
///
/// The property-type table and layout options are fixed at construction; the converter
/// keeps no other state, so repeated calls on the same input give the same output.
#[derive(Debug, Clone)]
pub struct FlowConverter {
    property_types: PropertyTypes,
    layout: LayoutOptions,
}

pub struct ConverterBuilder {
    property_types: PropertyTypes,
    layout: LayoutOptions,
}

impl ConverterBuilder {
    /// Starts from the built-in pod schema and default layout options.
    pub fn new() -> Self {
        Self {
            property_types: PropertyTypes::builtin(),
            layout: LayoutOptions::default(),
        }
    }
    pub fn with_property_types(mut self, property_types: PropertyTypes) -> Self {
        self.property_types = property_types;
        self
    }
    pub fn with_spacing(mut self, spacing: LayoutSpacing) -> Self {
        self.layout.spacing = spacing;
        self
    }
    pub fn with_canvas_policy(mut self, policy: CanvasPolicy) -> Self {
        self.layout.canvas_policy = policy;
        self
    }
    pub fn with_layout_options(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }
    pub fn build(self) -> FlowConverter {
        FlowConverter {
            property_types: self.property_types,
            layout: self.layout,
        }
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for FlowConverter {
    fn default() -> Self {
        ConverterBuilder::new().build()
    }
}

impl FlowConverter {
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    pub fn property_types(&self) -> &PropertyTypes {
        &self.property_types
    }

    pub fn layout_options(&self) -> &LayoutOptions {
        &self.layout
    }

    /// Builds the positioned graph of `spec`, using `canvas` for saved coordinates.
    pub fn to_graph(
        &self,
        spec: &Specification,
        canvas: Option<&SavedCanvas>,
    ) -> Result<Graph, GraphError> {
        build_graph(spec, canvas, &self.layout)
    }

    /// Converts a graph back into a pipeline document.
    pub fn to_specification(&self, graph: &Graph) -> Result<FlowDocument, GraphError> {
        encode_specification(graph, &self.property_types)
    }

    /// Builds the graph of a whole document: its pods, its saved canvas and its `with`
    /// metadata.
    pub fn import_document(&self, document: &FlowDocument) -> Result<Graph, FlowError> {
        let canvas = document.saved_canvas()?;
        let mut graph = self.to_graph(&document.pods, canvas.as_ref())?;
        graph.with = document.with.clone();
        Ok(graph)
    }

    /// Parses pipeline text and builds its graph.
    pub fn import_text(&self, text: &str) -> Result<Graph, FlowError> {
        self.import_document(&FlowDocument::from_text(text)?)
    }

    /// Converts a graph to pipeline text, `!Flow` tag included.
    pub fn export_text(&self, graph: &Graph) -> Result<String, FlowError> {
        Ok(self.to_specification(graph)?.to_text()?)
    }
}
