use crate::{Backend, InferError, ModelSource, Session};
use log::info;
use ort::ndarray::{self, ArrayD};
use ort::{inputs, session::Session as OrtSession, value::TensorRef};
use std::collections::HashMap;
use styler_base::Tensor;

/// ONNX Runtime on the CPU execution provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnnxBackend;

impl Backend for OnnxBackend {
    fn name(&self) -> &str {
        "onnx"
    }

    fn load_model(&self, model: ModelSource) -> Result<Box<dyn Session>, InferError> {
        let mut builder = OrtSession::builder().map_err(|e| {
            InferError::ModelLoad(format!("failed to create session builder: {e}"))
        })?;

        let session = match &model {
            ModelSource::File(path) => builder.commit_from_file(path).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model from {}: {e}", path.display()))
            })?,
            ModelSource::Memory(_) | ModelSource::Mapped(_) => {
                let bytes = model.bytes().unwrap_or_default();
                builder.commit_from_memory(bytes).map_err(|e| {
                    InferError::ModelLoad(format!("failed to load model from memory: {e}"))
                })?
            }
        };

        let input_names: Vec<String> = session
            .inputs()
            .iter()
            .map(|input| input.name().to_string())
            .collect();
        let output_names: Vec<String> = session
            .outputs()
            .iter()
            .map(|output| output.name().to_string())
            .collect();
        info!("onnx session inputs {input_names:?} outputs {output_names:?}");

        Ok(Box::new(OnnxSession {
            session,
            input_names,
            output_names,
        }))
    }
}

pub struct OnnxSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl Session for OnnxSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        let [(name, tensor)] = inputs else {
            return Err(InferError::EngineFailure(format!(
                "style networks take one input, got {}",
                inputs.len()
            )));
        };
        if !self.input_names.iter().any(|input| input == name) {
            return Err(InferError::EngineFailure(format!(
                "unknown input '{name}', expected one of {:?}",
                self.input_names
            )));
        }

        let array = tensor_to_ndarray(tensor.clone())?;
        let tensor_ref = TensorRef::from_array_view(array.view())
            .map_err(|e| InferError::EngineFailure(format!("failed to create tensor ref: {e}")))?;
        let outputs = self
            .session
            .run(inputs![*name => tensor_ref])
            .map_err(|e| InferError::EngineFailure(format!("inference failed: {e}")))?;

        let mut result = HashMap::new();
        for output_name in &self.output_names {
            let array = outputs[output_name.as_str()]
                .try_extract_array::<f32>()
                .map_err(|e| {
                    InferError::EngineFailure(format!("output '{output_name}' is not f32: {e}"))
                })?;
            result.insert(output_name.clone(), ndarray_to_tensor(array)?);
        }
        Ok(result)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

pub fn tensor_to_ndarray(tensor: Tensor<f32>) -> Result<ArrayD<f32>, InferError> {
    ArrayD::from_shape_vec(tensor.shape, tensor.data).map_err(|e| {
        InferError::ShapeMismatch {
            expected: "a tensor matching its shape".to_string(),
            got: e.to_string(),
        }
    })
}

pub fn ndarray_to_tensor(
    array: ndarray::ArrayView<'_, f32, ndarray::IxDyn>,
) -> Result<Tensor<f32>, InferError> {
    let shape = array.shape().to_vec();
    let data = array.iter().copied().collect();
    Tensor::new(shape, data)
        .map_err(|e| InferError::EngineFailure(format!("failed to create tensor: {e}")))
}
