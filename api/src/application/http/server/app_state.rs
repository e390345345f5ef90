use std::sync::Arc;

use pantrycam_core::application::PantryCamService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PantryCamService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PantryCamService) -> Self {
        Self { args, service }
    }
}
