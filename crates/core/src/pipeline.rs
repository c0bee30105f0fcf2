//! Text normalization pipeline
//!
//! Provides a layered approach to text normalization where each normalizer
//! creates a new layer on top of the previous one. Keeping every layer around
//! makes it easy to see which step changed a sentence.

use crate::normalizers::Normalizer;

/// A single layer of normalized text
#[derive(Debug, Clone)]
pub struct NormalizationLayer {
    /// The normalized text at this layer
    pub text: String,

    /// Metadata about the normalizer that produced this layer
    pub metadata: LayerMetadata,
}

/// Metadata about a normalization layer
#[derive(Debug, Clone, Default)]
pub struct LayerMetadata {
    /// Name of the normalizer that created this layer
    pub normalizer_name: String,

    /// Additional information (e.g., parameters used)
    pub info: Vec<(String, String)>,
}

impl NormalizationLayer {
    pub fn new(text: String) -> Self {
        Self {
            text,
            metadata: LayerMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: LayerMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// A pipeline of text normalizers that creates layered transformations
#[derive(Default, Clone)]
pub struct TextPipeline {
    /// Ordered list of normalizers to apply
    normalizers: Vec<Box<dyn Normalizer>>,
}

impl TextPipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            normalizers: Vec::new(),
        }
    }

    /// Add a normalizer to the pipeline
    pub fn add_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizers.push(normalizer);
        self
    }

    /// Add a normalizer only when `enabled` is set
    pub fn add_normalizer_if(self, enabled: bool, normalizer: Box<dyn Normalizer>) -> Self {
        if enabled {
            self.add_normalizer(normalizer)
        } else {
            self
        }
    }

    /// Add multiple normalizers at once
    pub fn add_normalizers(mut self, normalizers: Vec<Box<dyn Normalizer>>) -> Self {
        self.normalizers.extend(normalizers);
        self
    }

    /// Process text through the entire pipeline, returning all layers
    pub fn process(&self, input: &str) -> LayerSet {
        let mut layers = LayerSet::new(input.to_string());
        let mut current_text = input.to_string();

        for normalizer in &self.normalizers {
            let normalized = normalizer.normalize(&current_text);

            let metadata = LayerMetadata {
                normalizer_name: normalizer.name().to_string(),
                info: normalizer.metadata(),
            };

            layers.add_layer(NormalizationLayer::new(normalized.clone()).with_metadata(metadata));
            current_text = normalized;
        }

        layers
    }

    /// Process text and keep only the final layer
    pub fn run(&self, input: &str) -> String {
        self.normalizers
            .iter()
            .fold(input.to_string(), |text, normalizer| normalizer.normalize(&text))
    }

    /// Get the number of normalizers in the pipeline
    pub fn len(&self) -> usize {
        self.normalizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalizers.is_empty()
    }

    /// Get the names of all normalizers in the pipeline
    pub fn normalizer_names(&self) -> Vec<String> {
        self.normalizers
            .iter()
            .map(|n| n.name().to_string())
            .collect()
    }
}

/// A complete set of normalization layers from original to final
#[derive(Debug, Clone)]
pub struct LayerSet {
    /// The original input text (layer 0)
    original: String,

    /// All normalization layers (layer 1, 2, 3, ...)
    layers: Vec<NormalizationLayer>,
}

impl LayerSet {
    /// Create a new layer set with just the original text
    pub fn new(original: String) -> Self {
        Self {
            original,
            layers: Vec::new(),
        }
    }

    /// Add a new normalization layer
    pub fn add_layer(&mut self, layer: NormalizationLayer) {
        self.layers.push(layer);
    }

    /// Get the original text
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get a specific layer by index (0 = original, 1 = first normalization, etc.)
    pub fn layer(&self, index: usize) -> Option<&str> {
        if index == 0 {
            Some(&self.original)
        } else {
            self.layers.get(index - 1).map(|l| l.text.as_str())
        }
    }

    /// Get the final (most normalized) layer
    pub fn final_layer(&self) -> &str {
        self.layers
            .last()
            .map_or(self.original.as_str(), |l| l.text.as_str())
    }

    /// Get the total number of layers (including original)
    pub fn num_layers(&self) -> usize {
        self.layers.len() + 1
    }

    /// Names of the normalizers whose layer differs from the one before
    pub fn changed_by(&self) -> Vec<&str> {
        let mut previous = self.original.as_str();
        let mut names = Vec::new();
        for layer in &self.layers {
            if layer.text != previous {
                names.push(layer.metadata.normalizer_name.as_str());
            }
            previous = &layer.text;
        }
        names
    }

    /// Get metadata for all layers
    pub fn layer_metadata(&self) -> Vec<&LayerMetadata> {
        self.layers.iter().map(|l| &l.metadata).collect()
    }

    /// Create an iterator over all layers (including original as layer 0)
    pub fn iter(&self) -> LayerIterator<'_> {
        LayerIterator {
            layer_set: self,
            current_index: 0,
        }
    }
}

/// Iterator over layers in a LayerSet
pub struct LayerIterator<'a> {
    layer_set: &'a LayerSet,
    current_index: usize,
}

impl<'a> Iterator for LayerIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.layer_set.layer(self.current_index);
        if result.is_some() {
            self.current_index += 1;
        }
        result
    }
}
