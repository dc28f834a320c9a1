pub mod mock;
pub mod onnx_predictor;
pub mod predictor;
pub mod smartcore_predictor;
