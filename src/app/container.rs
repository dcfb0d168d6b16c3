use std::sync::Arc;

use crate::adapters::{AppConfig, LocalFsAdapter, MagickAdapter};
use crate::app::{
    compare_interactor::CompareInteractor, inspect_interactor::InspectInteractor,
    split_interactor::SplitInteractor, trim_interactor::TrimInteractor,
};
use crate::ports::{CodecPort, FsPort, ProbePort};

/// Wires adapters into interactors
pub struct AppContainer {
    probe_port: Arc<dyn ProbePort>,
    codec_port: Arc<dyn CodecPort>,
    fs_port: Arc<dyn FsPort>,
}

impl AppContainer {
    /// Container backed by ImageMagick and the local file system
    pub fn new(config: &AppConfig) -> Self {
        let magick = Arc::new(MagickAdapter::new(
            config.magick_binary.clone(),
            config.fallback_delay,
        ));
        Self::with_ports(
            Arc::clone(&magick) as Arc<dyn ProbePort>,
            magick as Arc<dyn CodecPort>,
            Arc::new(LocalFsAdapter::new()),
        )
    }

    /// Container over caller-supplied ports
    pub fn with_ports(
        probe_port: Arc<dyn ProbePort>,
        codec_port: Arc<dyn CodecPort>,
        fs_port: Arc<dyn FsPort>,
    ) -> Self {
        Self {
            probe_port,
            codec_port,
            fs_port,
        }
    }

    pub fn inspect_interactor(&self) -> InspectInteractor {
        InspectInteractor::new(Arc::clone(&self.probe_port), Arc::clone(&self.fs_port))
    }

    pub fn trim_interactor(&self) -> TrimInteractor {
        TrimInteractor::new(
            Arc::clone(&self.probe_port),
            Arc::clone(&self.codec_port),
            Arc::clone(&self.fs_port),
        )
    }

    pub fn split_interactor(&self) -> SplitInteractor {
        SplitInteractor::new(
            Arc::clone(&self.probe_port),
            Arc::clone(&self.codec_port),
            Arc::clone(&self.fs_port),
        )
    }

    pub fn compare_interactor(&self) -> CompareInteractor {
        CompareInteractor::new(Arc::clone(&self.probe_port), Arc::clone(&self.fs_port))
    }
}
