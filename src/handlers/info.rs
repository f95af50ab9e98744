use axum::{Json, extract::State};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::bmi::CATEGORIAS;
use crate::models::TabelaRow;
use crate::state::AppState;

// The table the classifier uses, in the shape the front end expects
pub async fn tabela_handler() -> Json<Vec<TabelaRow>> {
    Json(
        CATEGORIAS
            .iter()
            .map(|c| TabelaRow {
                faixa: c.faixa,
                categoria: c.nome,
            })
            .collect(),
    )
}

// Canned history; a real deployment would read this from a database
pub async fn historico_handler() -> Json<Value> {
    Json(json!({
        "historico": [
            { "data": "2025-01-15", "imc": 22.5, "categoria": "Peso adequado" },
            { "data": "2025-01-10", "imc": 23.1, "categoria": "Peso adequado" },
            { "data": "2025-01-05", "imc": 23.8, "categoria": "Peso adequado" }
        ],
        "sucesso": true
    }))
}

// Simulated statistics; only the user counts are live numbers
pub async fn stats_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    let usuarios = state.limiter.tracked_keys();

    Json(json!({
        "totalCalculos": usuarios * 10,
        "usuariosAtivos": usuarios,
        "mediaIMC": 24.2,
        "categoriasMaisComuns": [
            { "categoria": "Peso adequado", "porcentagem": 45 },
            { "categoria": "Sobrepeso", "porcentagem": 30 },
            { "categoria": "Obesidade (grau I)", "porcentagem": 15 },
            { "categoria": "Baixo peso (grau III)", "porcentagem": 10 }
        ],
        "sucesso": true
    }))
}

pub async fn dicas_handler() -> Json<Value> {
    Json(json!({
        "dicas": [
            {
                "titulo": "Alimentação Saudável",
                "descricao": "Consuma frutas, verduras e proteínas magras diariamente",
                "categoria": "nutricao"
            },
            {
                "titulo": "Exercícios Regulares",
                "descricao": "Pratique pelo menos 150 minutos de atividade física por semana",
                "categoria": "exercicio"
            },
            {
                "titulo": "Hidratação",
                "descricao": "Beba pelo menos 2 litros de água por dia",
                "categoria": "hidratacao"
            },
            {
                "titulo": "Sono de Qualidade",
                "descricao": "Durma de 7 a 9 horas por noite para um bom metabolismo",
                "categoria": "sono"
            }
        ],
        "sucesso": true
    }))
}
