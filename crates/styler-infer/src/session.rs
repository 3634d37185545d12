use crate::InferError;
use std::collections::HashMap;
use styler_base::Tensor;

/// A loaded network, ready to run.
///
/// Sessions are owned by a `StyleContext` and move with it between threads.
pub trait Session: Send {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError>;
    fn input_names(&self) -> &[String];
    fn output_names(&self) -> &[String];
}
