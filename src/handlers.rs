use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::Html,
    Form,
};
use tracing::{debug, info, warn};

use crate::llm::invoke_model;
use crate::prompts::{evaluation_prompt, translation_prompt, EVALUATION_MODEL, TRANSLATION_MODEL};
use crate::state::AppState;
use crate::templates::{render_page, PageView};
use crate::validation::{Language, TranslateForm, TranslationRequest};

/// `GET /`: empty form
pub async fn index() -> Html<String> {
    Html(render_page(&PageView {
        language: Some(Language::English),
        ..PageView::default()
    }))
}

/// `POST /`: validate, translate, then grade the translation.
///
/// Model failures come back as display text and are rendered like any
/// other result; only invalid input changes the status code.
pub async fn handle_form(
    State(state): State<AppState>,
    request: Request,
) -> (StatusCode, Html<String>) {
    let form = read_form(request).await;
    let request = match TranslationRequest::try_from(form) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected form submission: {}", e);
            let message = e.to_string();
            let page = render_page(&PageView {
                translation: &message,
                ..PageView::default()
            });
            return (StatusCode::BAD_REQUEST, Html(page));
        }
    };

    info!(
        "Translating {} chars into {}",
        request.original_text.chars().count(),
        request.language
    );

    let translation = invoke_model(
        state.llm.as_ref(),
        TRANSLATION_MODEL,
        &[translation_prompt(request.language, &request.original_text)],
    )
    .await
    .unwrap_or_default();

    let evaluation = invoke_model(
        state.llm.as_ref(),
        EVALUATION_MODEL,
        &[evaluation_prompt(&request.original_text, &translation)],
    )
    .await
    .unwrap_or_default();

    let page = render_page(&PageView {
        original_text: &request.original_text,
        translation: &translation,
        evaluation: &evaluation,
        language: Some(request.language),
    });

    (StatusCode::OK, Html(page))
}

/// Read the submitted fields from a urlencoded or multipart body.
///
/// A missing, unknown or unreadable body yields an empty form, so the
/// request still goes through validation and gets an HTML answer.
async fn read_form(request: Request) -> TranslateForm {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    let fields = if content_type.starts_with("multipart/form-data") {
        read_multipart(request).await
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        match Form::<Vec<(String, String)>>::from_request(request, &()).await {
            Ok(Form(fields)) => fields,
            Err(e) => {
                debug!("Unreadable form body: {}", e);
                Vec::new()
            }
        }
    } else {
        debug!("No form body (content-type: {:?})", content_type);
        Vec::new()
    };

    TranslateForm::from_fields(fields)
}

async fn read_multipart(request: Request) -> Vec<(String, String)> {
    let mut multipart = match Multipart::from_request(request, &()).await {
        Ok(multipart) => multipart,
        Err(e) => {
            debug!("Unreadable multipart body: {}", e);
            return Vec::new();
        }
    };

    let mut fields = Vec::new();
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let Some(name) = field.name().map(str::to_string) else {
                    continue;
                };
                match field.text().await {
                    Ok(value) => fields.push((name, value)),
                    Err(e) => {
                        debug!("Unreadable multipart field {}: {}", name, e);
                        break;
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                debug!("Unreadable multipart body: {}", e);
                break;
            }
        }
    }
    fields
}
