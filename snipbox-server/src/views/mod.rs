//! View layer - composed template sets and buffered rendering
//!
//! Layout on disk:
//!
//! ```text
//! <root>/base.html          shared layout
//! <root>/partials/*.html    shared fragments
//! <root>/pages/*.html       one file per logical page
//! ```
//!
//! Each page gets its own `Tera` instance: the base+partials set is parsed
//! once, then cloned per page before the page file is added, so blocks
//! defined by one page can never reach another.

pub mod data;
pub mod filters;

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tera::{Context, Tera};
use walkdir::WalkDir;

pub use data::TemplateData;

/// Pages the HTTP layer renders. Startup fails if any is missing.
pub const REQUIRED_PAGES: [&str; 3] = ["home.html", "view.html", "create.html"];

const BASE_TEMPLATE: &str = "base.html";
const PARTIALS_DIR: &str = "partials";
const PAGES_DIR: &str = "pages";

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("template file {path:?} does not exist")]
    Missing { path: PathBuf },

    #[error("failed to list templates in {path:?}: {source}")]
    Listing {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to parse template '{name}': {source}")]
    Parse { name: String, source: tera::Error },

    #[error("the template {0} does not exist")]
    UnknownPage(String),

    #[error("failed to render template '{page}': {source}")]
    Render { page: String, source: tera::Error },

    #[error("failed to write rendered template: {0}")]
    Write(#[from] std::io::Error),
}

/// Page name -> fully composed template set. Built once, read-only after.
#[derive(Debug, Clone)]
pub struct TemplateCache {
    pages: HashMap<String, Tera>,
}

impl TemplateCache {
    /// Compose `base.html`, every partial and the named pages under `root`.
    pub fn compose(root: &Path, pages: &[&str]) -> Result<Self, ViewError> {
        let base = shared_set(root)?;

        let mut cache = HashMap::with_capacity(pages.len());
        for page in pages {
            let path = root.join(PAGES_DIR).join(page);
            let mut set = base.clone();
            add_file(&mut set, &path, page)?;
            cache.insert((*page).to_owned(), set);
        }

        tracing::debug!(root = %root.display(), pages = cache.len(), "templates composed");
        Ok(Self { pages: cache })
    }

    /// Compose every file found under `<root>/pages`.
    pub fn discover(root: &Path) -> Result<Self, ViewError> {
        let names = list_html(&root.join(PAGES_DIR))?;
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        Self::compose(root, &names)
    }

    /// Composed page names, sorted.
    pub fn page_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Render `page` into a response with `status`.
    ///
    /// The page is rendered into memory first; the status line and body
    /// only exist once that succeeds.
    pub fn render(
        &self,
        page: &str,
        status: StatusCode,
        data: &TemplateData,
    ) -> Result<Response, ViewError> {
        let body = self.render_string(page, data)?;
        Ok((status, Html(body)).into_response())
    }

    /// Render `page` and copy it to `out`. Nothing is written unless the
    /// template executed successfully.
    pub fn render_to<W: Write>(
        &self,
        page: &str,
        data: &TemplateData,
        out: &mut W,
    ) -> Result<(), ViewError> {
        let body = self.render_string(page, data)?;
        out.write_all(body.as_bytes())?;
        Ok(())
    }

    fn render_string(&self, page: &str, data: &TemplateData) -> Result<String, ViewError> {
        let set = self
            .pages
            .get(page)
            .ok_or_else(|| ViewError::UnknownPage(page.to_owned()))?;

        let render_err = |source| ViewError::Render {
            page: page.to_owned(),
            source,
        };
        let context = Context::from_serialize(data).map_err(render_err)?;
        set.render(page, &context).map_err(render_err)
    }
}

/// Base layout plus partials, with filters registered.
fn shared_set(root: &Path) -> Result<Tera, ViewError> {
    let mut tera = Tera::default();
    tera.register_filter("human_date", filters::human_date);

    add_file(&mut tera, &root.join(BASE_TEMPLATE), BASE_TEMPLATE)?;

    let partials_dir = root.join(PARTIALS_DIR);
    for name in list_html(&partials_dir)? {
        let template_name = format!("{}/{}", PARTIALS_DIR, name);
        add_file(&mut tera, &partials_dir.join(&name), &template_name)?;
    }

    Ok(tera)
}

fn add_file(tera: &mut Tera, path: &Path, name: &str) -> Result<(), ViewError> {
    if !path.is_file() {
        return Err(ViewError::Missing {
            path: path.to_path_buf(),
        });
    }
    tera.add_template_file(path, Some(name))
        .map_err(|source| ViewError::Parse {
            name: name.to_owned(),
            source,
        })
}

/// `*.html` file names directly inside `dir`, sorted.
fn list_html(dir: &Path) -> Result<Vec<String>, ViewError> {
    if !dir.is_dir() {
        return Err(ViewError::Missing {
            path: dir.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|source| ViewError::Listing {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.ends_with(".html") {
            names.push(name.into_owned());
        }
    }
    Ok(names)
}
