use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

const SOURCES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("blog.html", include_str!("../../templates/blog.html")),
    ("new.html", include_str!("../../templates/new.html")),
    ("post.html", include_str!("../../templates/post.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

// Panics on first use if a built-in template does not parse.
static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    for &(name, source) in SOURCES {
        env.add_template(name, source)
            .unwrap_or_else(|e| panic!("template {name} does not parse: {e}"));
    }
    env
});

/// Renders one of the built-in HTML templates. Output is HTML-escaped.
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, minijinja::Error> {
    TEMPLATES.get_template(name)?.render(ctx)
}
