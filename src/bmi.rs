// BMI computation and the classification table. Both the JSON API and the
// HTML form path classify through this single table, and /tabela-imc serves
// the same rows, so the ranges cannot drift between surfaces.

/// One row of the classification table.
pub struct Categoria {
    // Display range, as shown by /tabela-imc
    pub faixa: &'static str,
    pub nome: &'static str,
    pub recomendacao: &'static str,
    pub cor: &'static str,
    // Exclusive upper bound of the range; rows are ordered ascending
    limite: f64,
}

pub static CATEGORIAS: [Categoria; 8] = [
    Categoria {
        faixa: "Menos de 16",
        nome: "Baixo peso (grau I)",
        recomendacao: "Consulte um médico urgentemente",
        cor: "#ff4444",
        limite: 16.0,
    },
    Categoria {
        faixa: "Entre 16 e 16,99",
        nome: "Baixo peso (grau II)",
        recomendacao: "Busque orientação médica",
        cor: "#ff8844",
        limite: 17.0,
    },
    Categoria {
        faixa: "Entre 17 e 18,49",
        nome: "Baixo peso (grau III)",
        recomendacao: "Considere aumentar o peso com acompanhamento",
        cor: "#ffcc44",
        limite: 18.5,
    },
    Categoria {
        faixa: "Entre 18,50 e 24,99",
        nome: "Peso adequado",
        recomendacao: "Mantenha hábitos saudáveis",
        cor: "#44ff44",
        limite: 25.0,
    },
    Categoria {
        faixa: "Entre 25 e 29,99",
        nome: "Sobrepeso",
        recomendacao: "Considere exercícios e dieta balanceada",
        cor: "#ffaa44",
        limite: 30.0,
    },
    Categoria {
        faixa: "Entre 30 e 34,99",
        nome: "Obesidade (grau I)",
        recomendacao: "Busque acompanhamento médico",
        cor: "#ff7744",
        limite: 35.0,
    },
    Categoria {
        faixa: "Entre 35 e 39,99",
        nome: "Obesidade (grau II)",
        recomendacao: "Acompanhamento médico é importante",
        cor: "#ff5544",
        limite: 40.0,
    },
    Categoria {
        faixa: "A partir de 40",
        nome: "Obesidade (grau III)",
        recomendacao: "Consulte um médico urgentemente",
        cor: "#ff3333",
        limite: f64::INFINITY,
    },
];

/// Result of classifying a measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Classificacao {
    // Index rounded to 2 decimals, display only
    pub valor: f64,
    pub categoria: &'static str,
    pub recomendacao: &'static str,
    pub cor: &'static str,
}

// First row whose exclusive upper bound the index falls under. The last row
// is unbounded, so the fallback only guards against NaN input.
pub fn classificar_indice(imc: f64) -> &'static Categoria {
    CATEGORIAS
        .iter()
        .find(|c| imc < c.limite)
        .unwrap_or(&CATEGORIAS[CATEGORIAS.len() - 1])
}

/// Classify a measurement. Assumes validated input: altura in (0, 3] meters,
/// peso in (0, 1000] kg. Category selection uses the unrounded ratio.
pub fn classificar(peso: f64, altura: f64) -> Classificacao {
    let imc = peso / (altura * altura);
    let categoria = classificar_indice(imc);

    Classificacao {
        valor: arredondar2(imc),
        categoria: categoria.nome,
        recomendacao: categoria.recomendacao,
        cor: categoria.cor,
    }
}

/// Approximate ideal weight bounds for a height, (min, max) in kg,
/// rounded to 1 decimal.
pub fn peso_ideal(altura: f64) -> (f64, f64) {
    let quadrado = altura * altura;
    (arredondar1(18.5 * quadrado), arredondar1(24.9 * quadrado))
}

fn arredondar2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn arredondar1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
