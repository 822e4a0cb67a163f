use std::sync::Arc;

use cartwise_core::{application::CartwiseService, domain::vision::entities::VisionReport};
use tokio::sync::RwLock;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CartwiseService,
    /// Latest image-detection report, retrievable until replaced.
    pub latest_vision_report: Arc<RwLock<Option<VisionReport>>>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CartwiseService) -> Self {
        Self {
            args,
            service,
            latest_vision_report: Arc::new(RwLock::new(None)),
        }
    }
}
