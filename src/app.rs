use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::{handlers, service, store};

pub fn create_app(
    report_store: Arc<store::ReportStore>,
    qa_service: Arc<service::QaService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .wrap(Cors::permissive())
        .app_data(Data::from(report_store))
        .app_data(Data::from(qa_service))
        .route("/", web::get().to(handlers::root))
        .route("/upload-report/", web::post().to(handlers::upload_report))
        .route("/ask-question/", web::post().to(handlers::ask_question))
}
