use std::fs;

use image::imageops::FilterType;
use tract_onnx::prelude::*;
use tracing::{info, warn};

use crate::domain::{
    common::{ClassifierConfig, entities::app_errors::CoreError},
    detection::ports::ImageClassifier,
};

/// ONNX classifier loaded once at startup. The plan is immutable and shared
/// read-only, so `Clone` is cheap via the inner `Arc`s.
#[derive(Clone)]
pub struct TractImageClassifier {
    model: Arc<TypedRunnableModel<TypedModel>>,
    labels: Vec<String>,
    input_width: u32,
    input_height: u32,
}

impl TractImageClassifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self, anyhow::Error> {
        // NHWC, fixed batch of one. Pinning the input fact lets tract
        // optimize the whole graph ahead of time.
        let model = tract_onnx::onnx()
            .model_for_path(&config.model_path)?
            .with_input_fact(
                0,
                f32::fact([
                    1,
                    config.input_height as usize,
                    config.input_width as usize,
                    3,
                ])
                .into(),
            )?
            .into_optimized()?
            .into_runnable()?;

        let labels: Vec<String> = fs::read_to_string(&config.labels_path)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if let Ok(output_fact) = model.model().output_fact(0) {
            if let Some(shape) = output_fact.shape.as_concrete() {
                let classes = shape.last().copied().unwrap_or(0);
                if classes != labels.len() {
                    warn!(
                        model_classes = classes,
                        label_count = labels.len(),
                        "model output size does not match the label file"
                    );
                }
            }
        }

        info!(
            model = %config.model_path.display(),
            labels = labels.len(),
            "classifier loaded"
        );

        Ok(Self {
            model: Arc::new(model),
            labels,
            input_width: config.input_width,
            input_height: config.input_height,
        })
    }
}

impl ImageClassifier for TractImageClassifier {
    async fn predict(&self, image_data: &[u8]) -> Result<Vec<f32>, CoreError> {
        let decoded = image::load_from_memory(image_data)
            .map_err(|e| CoreError::ImageDecode(e.to_string()))?;

        let resized = decoded
            .resize_exact(self.input_width, self.input_height, FilterType::Triangle)
            .to_rgb8();

        let input: Tensor = tract_ndarray::Array4::from_shape_fn(
            (
                1,
                self.input_height as usize,
                self.input_width as usize,
                3,
            ),
            |(_, y, x, c)| resized[(x as u32, y as u32)][c] as f32 / 255.0,
        )
        .into();

        let outputs = self
            .model
            .run(tvec!(input.into()))
            .map_err(|e| CoreError::Inference(e.to_string()))?;

        let scores = outputs
            .first()
            .ok_or_else(|| CoreError::ShapeMismatch("model produced no output".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| CoreError::ShapeMismatch(e.to_string()))?;

        Ok(scores.iter().copied().collect())
    }

    fn labels(&self) -> Vec<String> {
        self.labels.clone()
    }
}
