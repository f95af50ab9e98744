use crate::models::{CalcRequest, Entrada, Medida};

const NOME_MAXIMO: usize = 100;

const ALTURA_MAXIMA: f64 = 3.0;
const PESO_MAXIMO: f64 = 1000.0;

// Validates the JSON calculation request. Every violation is collected so
// the client sees all of them at once, joined by ", ".
pub fn validar(req: &CalcRequest) -> Result<Medida, String> {
    let mut erros: Vec<&'static str> = Vec::new();

    let nome = req.nome.as_deref().map(str::trim).unwrap_or("");
    if nome.is_empty() {
        erros.push("Nome é obrigatório");
    } else if nome.chars().count() > NOME_MAXIMO {
        erros.push("Nome deve ter no máximo 100 caracteres");
    }

    let altura = campo_numerico(
        req.altura.as_ref(),
        ALTURA_MAXIMA,
        "Altura é obrigatória",
        "Altura deve ser um número entre 0.5 e 3 metros",
        &mut erros,
    );

    let peso = campo_numerico(
        req.peso.as_ref(),
        PESO_MAXIMO,
        "Peso é obrigatório",
        "Peso deve ser um número entre 1 e 1000 kg",
        &mut erros,
    );

    match (altura, peso) {
        (Some(altura), Some(peso)) if erros.is_empty() => Ok(Medida {
            nome: nome.to_string(),
            altura,
            peso,
        }),
        _ => Err(erros.join(", ")),
    }
}

// Strictly positive, at most `maximo`. NaN fails the range check.
fn campo_numerico(
    campo: Option<&Entrada>,
    maximo: f64,
    ausente: &'static str,
    invalido: &'static str,
    erros: &mut Vec<&'static str>,
) -> Option<f64> {
    let entrada = match campo {
        None => {
            erros.push(ausente);
            return None;
        }
        Some(entrada) if entrada.is_blank() => {
            erros.push(ausente);
            return None;
        }
        Some(entrada) => entrada,
    };

    match entrada.as_f64() {
        Some(v) if v > 0.0 && v <= maximo => Some(v),
        _ => {
            erros.push(invalido);
            None
        }
    }
}
