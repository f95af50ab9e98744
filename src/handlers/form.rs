use axum::Form;
use axum::response::Html;

use crate::bmi;
use crate::html;
use crate::models::FormRequest;

pub async fn index_handler() -> Html<String> {
    Html(html::pagina_formulario())
}

// Legacy form flow: no validation beyond guarding the division, and the
// result comes back as a rendered page instead of JSON.
pub async fn calcular_form_handler(Form(form): Form<FormRequest>) -> Html<String> {
    let altura: f64 = form.altura.trim().parse().unwrap_or(0.0);
    let peso: f64 = form.peso.trim().parse().unwrap_or(0.0);

    let imc = if altura > 0.0 {
        peso / (altura * altura)
    } else {
        0.0
    };
    let categoria = bmi::classificar_indice(imc);

    Html(html::pagina_resultado(&form.nome, imc, categoria.nome))
}
