//! Shared application state for the calculator service.

use std::sync::Arc;

use crate::config::CalculatorConfig;
use crate::factors::FactorTable;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: CalculatorConfig,
    factors: FactorTable,
}

impl AppState {
    pub fn new(cfg: CalculatorConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                factors: FactorTable::builtin(),
            }),
        }
    }

    pub fn cfg(&self) -> &CalculatorConfig {
        &self.inner.cfg
    }

    pub fn factors(&self) -> &FactorTable {
        &self.inner.factors
    }
}
