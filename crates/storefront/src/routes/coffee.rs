//! Add-coffee form route handlers.
//!
//! Submissions are appended to a per-visitor list kept in the session. A
//! successful post redirects back to the (now empty) form; a submission
//! with a blank field is re-rendered with the visitor's input intact.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use shopcart_core::{CoffeeEntry, CoffeeList};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::models::{self, session_keys};

/// Coffee form and list page template.
#[derive(Template, WebTemplate)]
#[template(path = "coffee/index.html")]
pub struct CoffeeIndexTemplate {
    /// Values to pre-fill the form with.
    pub form: CoffeeEntry,
    pub error: Option<String>,
    pub coffees: Vec<CoffeeEntry>,
}

async fn load_coffees(session: &Session) -> Result<CoffeeList> {
    models::load(session, session_keys::COFFEES).await
}

/// Display the empty form and the coffees added so far.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CoffeeIndexTemplate> {
    let coffees = load_coffees(&session).await?;

    Ok(CoffeeIndexTemplate {
        form: CoffeeEntry::default(),
        error: None,
        coffees: coffees.entries().to_vec(),
    })
}

/// Append a submitted coffee.
#[instrument(skip(session))]
pub async fn create(session: Session, Form(entry): Form<CoffeeEntry>) -> Result<Response> {
    let coffees = load_coffees(&session).await?;

    if let Err(e) = entry.validate() {
        tracing::debug!(error = %e, "Rejected coffee submission");
        let page = CoffeeIndexTemplate {
            form: entry,
            error: Some(e.to_string()),
            coffees: coffees.entries().to_vec(),
        };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    add_breadcrumb("coffee", "Added coffee", Some(&[("name", entry.name.as_str())]));
    let coffees = coffees.add(entry);
    models::store(&session, session_keys::COFFEES, &coffees).await?;

    tracing::info!(count = coffees.len(), "Added coffee");
    Ok(Redirect::to("/coffee").into_response())
}
