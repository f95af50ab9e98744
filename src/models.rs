use serde::{Deserialize, Serialize};

// Calculation request body. The original clients send altura/peso either as
// JSON numbers or as numeric strings, so both are accepted here.
#[derive(Deserialize, Debug, Clone)]
pub struct CalcRequest {
    pub nome: Option<String>,
    pub altura: Option<Entrada>,
    pub peso: Option<Entrada>,
}

/// A numeric field that may arrive as a number or a string.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Entrada {
    Numero(f64),
    Texto(String),
}

impl Entrada {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Entrada::Numero(n) => Some(*n),
            Entrada::Texto(s) => s.trim().parse::<f64>().ok(),
        }
    }

    // Blank strings count as absent, not as a parse failure
    pub fn is_blank(&self) -> bool {
        matches!(self, Entrada::Texto(s) if s.trim().is_empty())
    }
}

/// Validated measurement, ready for classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Medida {
    pub nome: String,
    pub altura: f64,
    pub peso: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PesoIdeal {
    pub min: f64,
    pub max: f64,
}

// Success payload of POST /calcular-imc
#[derive(Serialize, Debug, Clone)]
pub struct CalcResponse {
    pub nome: String,
    pub altura: f64,
    pub peso: f64,
    pub imc: f64,
    pub classificacao: &'static str,
    pub recomendacao: &'static str,
    pub cor: &'static str,
    #[serde(rename = "pesoIdeal")]
    pub peso_ideal: PesoIdeal,
    pub sucesso: bool,
    pub timestamp: String,
}

// HTML form fields always arrive as strings; missing ones fall back to empty
#[derive(Deserialize, Debug, Clone)]
pub struct FormRequest {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub altura: String,
    #[serde(default)]
    pub peso: String,
}

// One row of GET /tabela-imc
#[derive(Serialize, Debug, Clone)]
pub struct TabelaRow {
    pub faixa: &'static str,
    pub categoria: &'static str,
}
