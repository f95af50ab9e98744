use axum::Json;
use std::time::Instant;

use crate::bmi;
use crate::error::ApiError;
use crate::metrics::{CALC_TOTAL, REQUEST_LATENCY};
use crate::models::{CalcRequest, CalcResponse, PesoIdeal};
use crate::validate::validar;

pub async fn calcular_imc_handler(
    Json(payload): Json<CalcRequest>,
) -> Result<Json<CalcResponse>, ApiError> {
    let start_time = Instant::now();

    let medida = validar(&payload).map_err(ApiError::Validation)?;

    let resultado = bmi::classificar(medida.peso, medida.altura);
    let (min, max) = bmi::peso_ideal(medida.altura);

    CALC_TOTAL.inc();
    // never log the submitted name
    tracing::info!(imc = resultado.valor, categoria = resultado.categoria, "cálculo realizado");

    let resposta = CalcResponse {
        nome: medida.nome,
        altura: medida.altura,
        peso: medida.peso,
        imc: resultado.valor,
        classificacao: resultado.categoria,
        recomendacao: resultado.recomendacao,
        cor: resultado.cor,
        peso_ideal: PesoIdeal { min, max },
        sucesso: true,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok(Json(resposta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entrada;

    fn corpo(nome: &str, altura: Entrada, peso: Entrada) -> CalcRequest {
        CalcRequest {
            nome: Some(nome.to_string()),
            altura: Some(altura),
            peso: Some(peso),
        }
    }

    #[tokio::test]
    async fn calcula_e_responde_o_contrato_completo() {
        let resposta = calcular_imc_handler(Json(corpo(
            "Ana",
            Entrada::Numero(1.75),
            Entrada::Numero(70.0),
        )))
        .await
        .unwrap();

        let corpo = resposta.0;
        assert_eq!(corpo.nome, "Ana");
        assert_eq!(corpo.imc, 22.86);
        assert_eq!(corpo.classificacao, "Peso adequado");
        assert_eq!(corpo.recomendacao, "Mantenha hábitos saudáveis");
        assert_eq!(corpo.cor, "#44ff44");
        assert_eq!(corpo.peso_ideal, PesoIdeal { min: 56.7, max: 76.3 });
        assert!(corpo.sucesso);
        assert!(!corpo.timestamp.is_empty());
    }

    #[tokio::test]
    async fn aceita_medidas_enviadas_como_string() {
        let resposta = calcular_imc_handler(Json(corpo(
            "Ana",
            Entrada::Texto("1.75".to_string()),
            Entrada::Texto("70".to_string()),
        )))
        .await
        .unwrap();

        assert_eq!(resposta.0.imc, 22.86);
    }

    #[tokio::test]
    async fn entrada_invalida_vira_erro_de_validacao() {
        let erro = calcular_imc_handler(Json(CalcRequest {
            nome: None,
            altura: Some(Entrada::Numero(5.0)),
            peso: None,
        }))
        .await
        .unwrap_err();

        match erro {
            ApiError::Validation(mensagem) => {
                assert!(mensagem.contains("Nome é obrigatório"));
                assert!(mensagem.contains("Altura deve ser um número entre 0.5 e 3 metros"));
                assert!(mensagem.contains("Peso é obrigatório"));
            }
            outro => panic!("esperava erro de validação, veio {outro:?}"),
        }
    }
}
