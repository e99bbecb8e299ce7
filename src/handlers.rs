use actix_multipart::form::MultipartForm;
use actix_multipart::form::bytes::Bytes;
use actix_web::http::StatusCode;
use actix_web::web::Data;

use crate::errors::QaError;
use crate::models::{request, response};
use crate::service::QaService;
use crate::store::ReportStore;

#[derive(Debug, MultipartForm)]
pub struct UploadForm {
    pub file: Bytes,
}

pub async fn root() -> impl actix_web::Responder {
    actix_web::HttpResponse::Ok().json(response::StatusResponse {
        message: "Task Report QA API is running".to_string(),
    })
}

pub async fn upload_report(
    store: Data<ReportStore>,
    MultipartForm(form): MultipartForm<UploadForm>,
) -> impl actix_web::Responder {
    let report_text = decode_report_text(&form.file.data);
    let session_id = store.put(report_text).await;

    log::info!(
        "stored report {:?} under session {session_id}",
        form.file.file_name
    );

    actix_web::HttpResponse::Ok().json(response::UploadResponse {
        message: "Report uploaded successfully".to_string(),
        session_id,
    })
}

pub async fn ask_question(
    service: Data<QaService>,
    request: actix_web::web::Json<request::QuestionRequest>,
) -> impl actix_web::Responder {
    log::debug!("request: {:?}", request.0);

    match service
        .answer_question(&request.0.session_id, &request.0.question)
        .await
    {
        Ok(answer) => actix_web::HttpResponse::Ok().json(answer),
        Err(e) => {
            log::error!("answer_question error: {:?}", e);
            let (status, detail) = match &e {
                QaError::NotFoundError(_) => (
                    StatusCode::NOT_FOUND,
                    "No report found. Please upload a report first.".to_string(),
                ),
                QaError::UpstreamError(_) | QaError::ConfigError(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error processing question: {e}"),
                ),
            };
            actix_web::HttpResponse::build(status).json(response::ErrorResponse { detail })
        }
    }
}

/// Reports are read as UTF-8 where possible. Anything else is treated as
/// Latin-1, which maps every byte to a character and cannot fail.
fn decode_report_text(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(_) => data.iter().map(|&b| b as char).collect(),
    }
}
