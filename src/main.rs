use salescope::application::ml::mock::MockPredictor;
use salescope::application::ml::onnx_predictor::OnnxPredictor;
use salescope::application::ml::predictor::SalesPredictor;
use salescope::application::ml::smartcore_predictor::SmartCorePredictor;
use salescope::application::submission::SubmissionService;
use salescope::config::{Config, ModelBackend};
use salescope::interfaces::app::SalesApp;

use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

// A writer that mirrors log lines to the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).trim_end().to_string();
        if !msg.is_empty() {
            let _ = self.sender.try_send(msg);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let (log_tx, log_rx) = crossbeam_channel::unbounded();

    // Logging goes to stdout and, stripped of ANSI codes, into the UI feed
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    let config = Config::from_env()?;
    info!(
        "Starting Salescope ({:?} backend, model at {:?})",
        config.backend, config.model_path
    );

    let predictor: Arc<dyn SalesPredictor> = match config.backend {
        ModelBackend::Onnx => Arc::new(OnnxPredictor::new(config.model_path.clone())),
        ModelBackend::SmartCore => Arc::new(SmartCorePredictor::new(config.model_path.clone())),
        ModelBackend::Mock => Arc::new(MockPredictor::new()),
    };

    let service = SubmissionService::new(predictor);
    let app = SalesApp::new(service, log_rx);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Salescope"),
        ..Default::default()
    };

    eframe::run_native(
        "Salescope",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
