use std::sync::Arc;

use crate::adapters::{FFmpegAdapter, FFprobeAdapter};
use crate::app::edit_interactor::EditInteractor;
use crate::config_initialization::Settings;
use crate::ports::{ExecutePort, ProbePort};

pub trait AppContainer {
    fn edit_interactor(&self) -> Arc<EditInteractor>;
}

/// Wires the ffprobe and ffmpeg adapters into the interactor
pub struct DefaultAppContainer {
    edit_interactor: Arc<EditInteractor>,
}

impl DefaultAppContainer {
    pub fn new(settings: &Settings) -> Self {
        let probe_port = Arc::new(FFprobeAdapter::new(settings.ffprobe.clone()));
        let execute_port = Arc::new(FFmpegAdapter::new(settings.ffmpeg.clone()));

        let edit_interactor = Arc::new(EditInteractor::new(
            probe_port as Arc<dyn ProbePort>,
            execute_port as Arc<dyn ExecutePort>,
        ));

        Self { edit_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn edit_interactor(&self) -> Arc<EditInteractor> {
        Arc::clone(&self.edit_interactor)
    }
}
