use drink_import::{DrinkPageExtractor, Extractor, ImportError, ParsingContext};
use scraper::Html;

const BASE_URL: &str = "https://drinksimples.com.br";

fn context(html: &str, url: &str) -> ParsingContext {
    ParsingContext {
        url: url.to_string(),
        base_url: BASE_URL.to_string(),
        document: Html::parse_document(html),
        id: 1,
    }
}

const DRY_MARTINI: &str = r#"
<!DOCTYPE html>
<html>
<head><title>Dry Martini - Drink Simples</title></head>
<body>
    <h1 class="entry-title">Dry Martini</h1>
    <img class="wp-post-image" src="/wp-content/uploads/dry-martini.jpg">
    <p>Tipo: Alcoólico</p>
    <p>Características: Clássico, Forte, Seco</p>
    <p>Copo: Taça martini</p>
    <p>Origem: Estados Unidos</p>

    <h3>Ingredientes</h3>
    <ul>
        <li>60 ml de gin</li>
        <li>10 ml de vermute seco</li>
        <li> </li>
        <li>1 azeitona</li>
    </ul>
    <p>Curto demais</p>
    <p>Prefira um gin London Dry bem gelado.</p>
    <blockquote>Gele a taça no freezer antes de servir.</blockquote>

    <h3>Preparo</h3>
    <ol>
        <li>Coloque o gin e o vermute no mixing glass com gelo.</li>
        <li>Mexa por 20 segundos.</li>
        <li>Coe para a taça e decore com a azeitona.</li>
    </ol>
    <p>Depois do preparo, nada de dicas.</p>
</body>
</html>
"#;

#[test]
fn test_full_recipe_page() {
    let ctx = context(DRY_MARTINI, "https://drinksimples.com.br/?p=315");
    let extracted = DrinkPageExtractor.parse(&ctx).unwrap();
    let record = extracted.record;

    assert_eq!(record.id, 1);
    assert_eq!(record.title, "Dry Martini");
    assert_eq!(record.category, "Alcoólico");
    assert_eq!(record.attributes, vec!["Clássico", "Forte", "Seco", "Gelado"]);
    assert_eq!(record.vessel, "Taça Martini");
    assert_eq!(record.origin, "Estados Unidos");
    assert_eq!(
        record.ingredients,
        vec!["60 ml de gin", "10 ml de vermute seco", "1 azeitona"]
    );
    assert_eq!(
        record.tips,
        vec![
            "Prefira um gin London Dry bem gelado.",
            "Gele a taça no freezer antes de servir."
        ]
    );
    assert_eq!(record.steps.len(), 3);
    assert_eq!(record.steps[1], "Mexa por 20 segundos.");
    assert_eq!(record.image_ref, "");
    assert_eq!(
        extracted.image_url,
        Some("https://drinksimples.com.br/wp-content/uploads/dry-martini.jpg".to_string())
    );
}

#[test]
fn test_no_title_yields_no_record() {
    let html = r#"
    <html><body>
        <p>Apenas um texto sobre drinks</p>
        <span>Mojito</span>
        <h4>Ing</h4>
        <ul><li>50 ml rum</li></ul>
    </body></html>
    "#;

    let result = DrinkPageExtractor.parse(&context(html, ""));
    assert!(matches!(result, Err(ImportError::TitleNotFound)));
}

#[test]
fn test_cocktail_keyword_fallback_title() {
    let html = r#"
    <html><body>
        <h1>Oi</h1>
        <strong>Caipirinha de limão</strong>
    </body></html>
    "#;

    let record = DrinkPageExtractor.parse(&context(html, "")).unwrap().record;
    assert_eq!(record.title, "Caipirinha de limão");
}

#[test]
fn test_empty_ingredients_section() {
    let html = r#"
    <html><body>
        <h1>Caipirinha</h1>
        <h3>Ingredientes</h3>
        <ul></ul>
        <h3>Preparo</h3>
        <ol><li>Amasse o limão com o açúcar</li></ol>
    </body></html>
    "#;

    let record = DrinkPageExtractor.parse(&context(html, "")).unwrap().record;
    assert!(record.ingredients.is_empty());
    assert!(record.tips.is_empty());
    assert_eq!(record.steps, vec!["Amasse o limão com o açúcar"]);
}

#[test]
fn test_missing_sections_leave_fields_empty() {
    let html = "<html><body><h1>Cuba Libre</h1><p>Um drink cubano.</p></body></html>";

    let extracted = DrinkPageExtractor.parse(&context(html, "")).unwrap();
    let record = extracted.record;
    assert_eq!(record.title, "Cuba Libre");
    assert!(record.ingredients.is_empty());
    assert!(record.steps.is_empty());
    assert!(record.tips.is_empty());
    assert_eq!(record.category, "");
    assert_eq!(record.vessel, "");
    // "cuba" appears in the title
    assert_eq!(record.origin, "Cuba");
    assert_eq!(extracted.image_url, None);
}

#[test]
fn test_negated_category_overrides() {
    let html = r#"
    <html><body>
        <h1>Limonada Suíça</h1>
        <p>Este drink é não alcoólico e refrescante</p>
    </body></html>
    "#;

    let record = DrinkPageExtractor.parse(&context(html, "")).unwrap().record;
    assert_eq!(record.category, "Não Alcoólico");
    assert_eq!(record.attributes, vec!["Refrescante"]);
}

#[test]
fn test_lists_found_inside_containers() {
    let html = r#"
    <html><body>
        <h1>Mojito</h1>
        <h3>Ingredientes</h3>
        <div class="recipe-box">
            <ul><li>50 ml de rum</li><li>Hortelã</li></ul>
        </div>
        <div><h3>Preparo</h3></div>
        <section><ol><li>Macere a hortelã</li></ol></section>
    </body></html>
    "#;

    let record = DrinkPageExtractor.parse(&context(html, "")).unwrap().record;
    assert_eq!(record.ingredients, vec!["50 ml de rum", "Hortelã"]);
    assert_eq!(record.steps, vec!["Macere a hortelã"]);
}

#[test]
fn test_protocol_relative_image() {
    let html = r#"
    <html><body>
        <h1>Cosmopolitan</h1>
        <img src="//cdn.example.com/logo.png">
        <img src="//cdn.example.com/receitas/cosmo.webp">
    </body></html>
    "#;

    let extracted = DrinkPageExtractor.parse(&context(html, "")).unwrap();
    assert_eq!(
        extracted.image_url,
        Some("https://cdn.example.com/receitas/cosmo.webp".to_string())
    );
}

#[test]
fn test_extraction_is_repeatable() {
    let ctx = context(DRY_MARTINI, "https://drinksimples.com.br/?p=315");

    let first = DrinkPageExtractor.parse(&ctx).unwrap();
    let second = DrinkPageExtractor.parse(&ctx).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_keywords_in_scripts_and_styles_are_ignored() {
    let html = r#"
    <html>
    <head>
        <script>var cfg = {"theme": "doce-tropical", "cat": "alcoólico"};</script>
        <style>.copo { color: red; }</style>
    </head>
    <body>
        <h1>Negroni</h1>
        <p>Um drink italiano.</p>
    </body>
    </html>
    "#;

    let extracted = DrinkPageExtractor.parse(&context(html, "")).unwrap();
    let record = extracted.record;
    assert_eq!(record.title, "Negroni");
    assert!(record.attributes.is_empty());
    assert_eq!(record.category, "");
    assert_eq!(record.vessel, "");
}
