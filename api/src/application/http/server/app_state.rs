use std::sync::Arc;

use smartkheti_core::application::SmartKhetiService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<SmartKhetiService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SmartKhetiService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
