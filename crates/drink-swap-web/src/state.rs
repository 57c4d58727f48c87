//! Shared application state

use std::sync::Arc;

use drink_swap::DrinkService;

use crate::pages::Pages;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DrinkService>,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(service: DrinkService, pages: Pages) -> Self {
        Self {
            service: Arc::new(service),
            pages: Arc::new(pages),
        }
    }
}
