// Inline HTML pages for the legacy form flow. The pages ship embedded in the
// binary; anything user-supplied goes through `escape` before interpolation.

pub fn escape(texto: &str) -> String {
    let mut saida = String::with_capacity(texto.len());
    for c in texto.chars() {
        match c {
            '&' => saida.push_str("&amp;"),
            '<' => saida.push_str("&lt;"),
            '>' => saida.push_str("&gt;"),
            '"' => saida.push_str("&quot;"),
            '\'' => saida.push_str("&#39;"),
            _ => saida.push(c),
        }
    }
    saida
}

pub fn pagina_formulario() -> String {
    r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Calculadora de IMC</title>
    <style>
        body { font-family: sans-serif; text-align: center; background-color: #f0f0f0; padding-top: 50px; }
        .container { max-width: 400px; margin: auto; padding: 20px; background-color: #fff; border-radius: 8px; box-shadow: 0 0 10px rgba(0,0,0,0.1); }
        input { width: 100%; padding: 8px; margin: 5px 0; box-sizing: border-box; }
        button { background-color: #4CAF50; color: white; padding: 10px 15px; border: none; cursor: pointer; width: 100%; margin-top: 10px; }
        h1 { color: #333; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Calcular seu IMC</h1>
        <form action="/calcular" method="POST">
            <input type="text" name="nome" placeholder="Seu Nome" required>
            <input type="number" name="altura" step="0.01" placeholder="Sua Altura (ex: 1.75)" required>
            <input type="number" name="peso" step="0.01" placeholder="Seu Peso (ex: 70.5)" required>
            <button type="submit">Calcular</button>
        </form>
    </div>
</body>
</html>
"#
    .to_string()
}

pub fn pagina_resultado(nome: &str, imc: f64, classificacao: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resultado do IMC</title>
    <style>
        body {{ font-family: sans-serif; text-align: center; background-color: #f0f0f0; padding-top: 50px; }}
        .container {{ max-width: 400px; margin: auto; padding: 20px; background-color: #fff; border-radius: 8px; box-shadow: 0 0 10px rgba(0,0,0,0.1); }}
        h1 {{ color: #333; }}
        .back-btn {{ background-color: #4CAF50; color: white; padding: 10px 15px; text-decoration: none; border-radius: 5px; margin-top: 20px; display: inline-block; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Resultado do IMC</h1>
        <p>Olá, <strong>{nome}</strong>!</p>
        <p>Seu IMC é: <strong>{imc:.2}</strong></p>
        <p>Sua classificação é: <strong>{classificacao}</strong></p>
        <a href="/" class="back-btn">Calcular Novamente</a>
    </div>
</body>
</html>
"#,
        nome = escape(nome),
        imc = imc,
        classificacao = escape(classificacao),
    )
}
