mod calcular;
mod form;
mod health;
mod info;
mod metrics;

pub use calcular::calcular_imc_handler;
pub use form::{calcular_form_handler, index_handler};
pub use health::health_handler;
pub use info::{dicas_handler, historico_handler, stats_handler, tabela_handler};
pub use metrics::metrics_handler;
