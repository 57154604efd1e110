use crate::domain::entities::{AnswerResult, AvailabilityState};
use crate::infrastructure::http::AppState;
use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

#[derive(Template)]
#[template(path = "ask.html")]
pub struct AskPageTemplate {
    pub query: String,
    pub status_line: String,
    pub status_class: &'static str,
    pub answer: Option<AnswerView>,
}

pub struct AnswerView {
    pub text: String,
    pub source: &'static str,
    pub badge: &'static str,
}

impl AskPageTemplate {
    pub fn new(query: String, status: &AvailabilityState, answer: Option<&AnswerResult>) -> Self {
        Self {
            query,
            status_line: status.status_line(),
            status_class: status.style_class(),
            answer: answer.map(|result| AnswerView {
                text: result.text.clone(),
                source: result.source.as_str(),
                badge: result.source.badge(),
            }),
        }
    }
}

// Form data
#[derive(Debug, Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub query: String,
}

// Handlers
pub async fn show_ask_page(State(state): State<AppState>) -> Response {
    let status = state.ask_roy.current_status();
    HtmlTemplate(AskPageTemplate::new(String::new(), &status, None)).into_response()
}

pub async fn submit_query(State(state): State<AppState>, Form(form): Form<QueryForm>) -> Response {
    let now = state.ask_roy.now();
    let status = state.ask_roy.status_at(now);

    // Blank submissions just re-render the page
    let answer = if form.query.trim().is_empty() {
        None
    } else {
        let answer = state.ask_roy.answer_at(&form.query, now).await;
        tracing::info!("Answered query from {} ({} chars)", answer.source, form.query.len());
        Some(answer)
    };

    HtmlTemplate(AskPageTemplate::new(form.query, &status, answer.as_ref())).into_response()
}

// Helper to render Askama templates
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {}", err),
                )
                    .into_response()
            }
        }
    }
}
