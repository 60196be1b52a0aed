//! HTML views
//!
//! Pages are Tera templates compiled in at build time. Values are
//! autoescaped; only the rendered Markdown result is inserted as markup.

mod markdown;
mod templates;

use domain::DealInput;
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use thiserror::Error;

pub use markdown::render_markdown;
pub use templates::{APP_CSS, APP_JS};

/// Page heading and document title
pub const PAGE_TITLE: &str = "AI Deal Analyzer for Wholesalers";

/// Error type for view rendering
#[derive(Debug, Error)]
pub enum ViewError {
    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),
}

/// Raw values of the deal form, kept as typed so they can be shown again
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealForm {
    #[serde(default)]
    pub after_repair_value: String,
    #[serde(default)]
    pub estimated_repairs: String,
    #[serde(default)]
    pub asking_price: String,
    #[serde(default)]
    pub wholesale_fee: String,
    #[serde(default)]
    pub notes: String,
}

impl DealForm {
    /// Parse the form into a deal
    pub fn to_input(&self) -> Result<DealInput, domain::DomainError> {
        DealInput::from_form(
            &self.after_repair_value,
            &self.estimated_repairs,
            &self.asking_price,
            &self.wholesale_fee,
            self.notes.clone(),
        )
    }
}

impl Default for DealForm {
    fn default() -> Self {
        let input = DealInput::default();
        Self {
            after_repair_value: input.after_repair_value.to_string(),
            estimated_repairs: input.estimated_repairs.to_string(),
            asking_price: input.asking_price.to_string(),
            wholesale_fee: input.wholesale_fee.to_string(),
            notes: input.notes,
        }
    }
}

/// Everything shown on the analyzer page
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyzerPage {
    /// Form values to prefill
    pub form: DealForm,
    /// Single error message shown above the result area
    pub error: Option<String>,
    /// Model reply, already rendered to HTML
    pub result_html: Option<String>,
}

impl AnalyzerPage {
    /// Page with the given form values and nothing else
    pub fn with_form(form: DealForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Attach an error message
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Attach a Markdown reply
    #[must_use]
    pub fn result(mut self, markdown: &str) -> Self {
        self.result_html = Some(render_markdown(markdown));
        self
    }
}

/// Renders the application's pages
pub struct PageRenderer {
    tera: Tera,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer")
            .field("templates", &self.tera.get_template_names().count())
            .finish()
    }
}

impl PageRenderer {
    /// Compile the embedded templates
    pub fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", templates::BASE),
            ("login.html", templates::LOGIN),
            ("analyzer.html", templates::ANALYZER),
            ("error.html", templates::ERROR),
        ])
        .map_err(|e| ViewError::Compile(e.to_string()))?;

        Ok(Self { tera })
    }

    /// Render the password page, optionally with an error
    pub fn login(&self, error: Option<&str>) -> Result<String, ViewError> {
        let mut context = Self::context();
        context.insert("error", &error);
        self.render("login.html", &context)
    }

    /// Render the analyzer page
    pub fn analyzer(&self, page: &AnalyzerPage) -> Result<String, ViewError> {
        let mut context = Self::context();
        context.insert("form", &page.form);
        context.insert("error", &page.error);
        context.insert("result_html", &page.result_html);
        self.render("analyzer.html", &context)
    }

    /// Render a standalone error page
    pub fn error(&self, message: &str) -> Result<String, ViewError> {
        let mut context = Self::context();
        context.insert("message", message);
        self.render("error.html", &context)
    }

    fn context() -> Context {
        let mut context = Context::new();
        context.insert("title", PAGE_TITLE);
        context
    }

    fn render(&self, name: &str, context: &Context) -> Result<String, ViewError> {
        self.tera
            .render(name, context)
            .map_err(|e| ViewError::Render(e.to_string()))
    }
}
