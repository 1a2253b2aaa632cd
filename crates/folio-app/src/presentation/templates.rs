use std::sync::Arc;

use minijinja::value::{Object, Value};
use minijinja::{context, Environment, State};
use serde::Serialize;

use folio_domain::i18n::{substitute_placeholder, translate, TranslationTable, TranslationValue};
use folio_domain::project::ProjectView;

const HOME_TEMPLATE: &str = "home.html";

// Context variable holding the per-request catalog
const CATALOG_VAR: &str = "_catalog";

/// Translation table pinned for one render, plus the language pair to resolve against
#[derive(Debug)]
struct Catalog {
    table: Arc<TranslationTable>,
    lang: String,
    default_lang: String,
}

impl Object for Catalog {}

/// `{{ _('home.title') }}` or `{{ _('footer.built_with', 'Rust') }}` where the optional
/// second argument fills a `{0}` placeholder.
fn translate_fn(state: &State, key: &str, fallback: Option<String>) -> Value {
    let catalog = state.lookup(CATALOG_VAR);
    let Some(catalog) = catalog
        .as_ref()
        .and_then(|value| value.downcast_object_ref::<Catalog>())
    else {
        return Value::from(key);
    };

    match (
        translate(key, &catalog.table, &catalog.lang, &catalog.default_lang),
        fallback,
    ) {
        (TranslationValue::Text(text), Some(fallback)) => {
            Value::from(substitute_placeholder(&text, &fallback))
        }
        (TranslationValue::Text(text), None) => Value::from(text),
        (other, _) => Value::from_serialize(&other),
    }
}

/// Everything the home page needs for one request
#[derive(Debug, Clone)]
pub struct HomePage<'a> {
    pub lang: &'a str,
    pub default_lang: &'a str,
    pub languages: &'a [String],
    pub projects: &'a [ProjectView],
    pub translations: Arc<TranslationTable>,
}

#[derive(Serialize)]
struct LanguageLink<'a> {
    code: &'a str,
    active: bool,
}

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(HOME_TEMPLATE, include_str!("../../templates/home.html"))?;
        env.add_function("_", translate_fn);
        Ok(Self { env })
    }

    pub fn render_home(&self, page: &HomePage<'_>) -> Result<String, minijinja::Error> {
        let languages: Vec<LanguageLink> = page
            .languages
            .iter()
            .map(|code| LanguageLink {
                code,
                active: code == page.lang,
            })
            .collect();

        let catalog = Catalog {
            table: Arc::clone(&page.translations),
            lang: page.lang.to_string(),
            default_lang: page.default_lang.to_string(),
        };

        self.env.get_template(HOME_TEMPLATE)?.render(context! {
            lang => page.lang,
            languages => languages,
            projects => page.projects,
            TRANSLATIONS => Value::from_serialize(&*page.translations),
            _catalog => Value::from_object(catalog),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::i18n::{parse_dictionary, LocaleConfig};
    use serde_json::json;

    fn table() -> Arc<TranslationTable> {
        Arc::new(
            TranslationTable::new()
                .with_language(
                    "en",
                    parse_dictionary(
                        r#"{"home": {"title": "Selected work", "empty": "Nothing yet"}, "footer": {"built_with": "Made with {0}"}, "tagline": "It's <fine>"}"#,
                    )
                    .unwrap(),
                )
                .with_language(
                    "pt",
                    parse_dictionary(r#"{"home": {"title": "Trabalhos"}}"#).unwrap(),
                ),
        )
    }

    fn render(lang: &str, projects: &[ProjectView]) -> String {
        let locale = LocaleConfig::default();
        Templates::new()
            .unwrap()
            .render_home(&HomePage {
                lang,
                default_lang: locale.default_language(),
                languages: locale.supported(),
                projects,
                translations: table(),
            })
            .unwrap()
    }

    #[test]
    fn test_translates_with_active_language_and_fallback() {
        let html = render("pt", &[]);
        assert!(html.contains(r#"data-i18n="home.title">Trabalhos</h2>"#));
        // missing in pt, served from en
        assert!(html.contains(r#"data-i18n="home.empty">Nothing yet</p>"#));
        assert!(html.contains(r#"<html lang="pt""#));
    }

    #[test]
    fn test_renders_projects_and_trusted_readme_html() {
        let projects = vec![ProjectView {
            title: "Folio".into(),
            description: "A portfolio server".into(),
            stack: Some(vec![json!("Rust"), json!("Axum")]),
            readme: Some("readmes/folio.md".into()),
            readme_html: Some("<h1>Hi</h1>\n".into()),
            ..Default::default()
        }];

        let html = render("en", &projects);
        assert!(html.contains(r#"<h3 class="project-title">Folio</h3>"#));
        assert!(html.contains("<li class=\"tag\">Rust</li>"));
        assert!(html.contains(r#"<article class="readme"><h1>Hi</h1>"#));
        assert!(!html.contains("projects-empty"));
    }

    #[test]
    fn test_project_text_is_escaped() {
        let projects = vec![ProjectView {
            title: "<script>alert(1)</script>".into(),
            ..Default::default()
        }];
        let html = render("en", &projects);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_placeholder_argument() {
        let html = render("en", &[]);
        assert!(html.contains(r#"data-i18n-fallback="Rust">Made with Rust</p>"#));
    }

    #[test]
    fn test_embeds_client_cache_for_each_language() {
        let html = render("en", &[]);
        assert!(html.contains("data-i18n-en='"));
        assert!(html.contains("data-i18n-pt='"));
        assert!(html.contains(r#"data-i18n-current="en""#));
        // quotes and markup inside the JSON must not break out of the attribute
        assert!(!html.contains("It's <fine>"));
    }
}
