use axum::response::Html;
use tera::{Context, Tera};

use crate::error::AppError;

/// Load the admin templates compiled into the binary.
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("list.html", include_str!("../templates/list.html")),
        ("form.html", include_str!("../templates/form.html")),
    ])?;
    Ok(tera)
}

pub fn render(tera: &Tera, template: &str, context: &Context) -> Result<Html<String>, AppError> {
    tera.render(template, context)
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Failed to render {template}: {e:?}")))
}
