use crate::models::todo::Todo;
use std::fs;
use std::path::Path;
use tera::{Context, Error as TeraError, Tera};

pub type RenderError = TeraError;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const TODOS_TEMPLATE: &str = "todo.html";

const BUILTIN_TEMPLATES: [(&str, &str); 2] = [
    (INDEX_TEMPLATE, include_str!("templates/index.html")),
    (TODOS_TEMPLATE, include_str!("templates/todo.html")),
];

/// Renders the todo page and the todo list fragment.
#[derive(Debug)]
pub struct Pages {
    tera: Tera,
}

impl Pages {
    /// Pages backed by the templates compiled into the crate.
    pub fn new() -> Result<Self, TeraError> {
        Self::build(BUILTIN_TEMPLATES.map(|(name, source)| (name, source.to_string())))
    }

    /// Like [`Pages::new`], but any template file found in `dir` replaces the
    /// builtin one of the same name.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, TeraError> {
        let dir = dir.as_ref();
        let mut sources = Vec::with_capacity(BUILTIN_TEMPLATES.len());
        for (name, builtin) in BUILTIN_TEMPLATES {
            let path = dir.join(name);
            let source = if path.exists() {
                tracing::info!("using template override {}", path.display());
                fs::read_to_string(&path).map_err(|e| {
                    TeraError::chain(format!("Failed to read template {}", path.display()), e)
                })?
            } else {
                builtin.to_string()
            };
            sources.push((name, source));
        }
        Self::build(sources)
    }

    fn build<I>(sources: I) -> Result<Self, TeraError>
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        let mut tera = Tera::default();
        tera.add_raw_templates(sources)?;
        Ok(Pages { tera })
    }

    pub fn render_index(&self, todos: &[Todo]) -> Result<String, TeraError> {
        self.render(INDEX_TEMPLATE, todos)
    }

    pub fn render_todos(&self, todos: &[Todo]) -> Result<String, TeraError> {
        self.render(TODOS_TEMPLATE, todos)
    }

    fn render(&self, template: &str, todos: &[Todo]) -> Result<String, TeraError> {
        let mut context = Context::new();
        context.insert("todos", todos);
        self.tera.render(template, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_todos() {
        let pages = Pages::new().unwrap();
        let todos = vec![Todo::new(1, "Walk the dog"), Todo::new(2, "Feed the cat").completed()];

        let html = pages.render_todos(&todos).unwrap();
        assert!(html.contains("Walk the dog"));
        assert!(html.contains(r#"data-id="2""#));
        assert!(html.contains("todo completed"));
        assert!(!html.contains("No todos"));
    }

    #[test]
    fn test_render_empty_list() {
        let pages = Pages::new().unwrap();
        let html = pages.render_todos(&[]).unwrap();
        assert!(html.contains("No todos"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let pages = Pages::new().unwrap();
        let html = pages
            .render_todos(&[Todo::new(1, "<script>alert(1)</script>")])
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_index_includes_list_and_chat() {
        let pages = Pages::new().unwrap();
        let html = pages.render_index(&[Todo::new(1, "Read a book")]).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Read a book"));
        assert!(html.contains("/websocket"));
        assert!(html.contains(r#"hx-get="/time""#));
    }

    #[test]
    fn test_from_dir_overrides_single_template() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(TODOS_TEMPLATE),
            "{% for todo in todos %}[{{ todo.title }}]{% endfor %}",
        )
        .unwrap();

        let pages = Pages::from_dir(temp_dir.path()).unwrap();
        let todos = vec![Todo::new(1, "a"), Todo::new(2, "b")];
        assert_eq!(pages.render_todos(&todos).unwrap(), "[a][b]");

        // index.html falls back to the builtin and includes the override
        let index = pages.render_index(&todos).unwrap();
        assert!(index.contains("[a][b]"));
    }

    #[test]
    fn test_from_dir_rejects_broken_template() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(INDEX_TEMPLATE), "{% if %}").unwrap();
        assert!(Pages::from_dir(temp_dir.path()).is_err());
    }
}
