use std::sync::Arc;

use report_qa::app::create_app;
use report_qa::config;
use report_qa::consts;
use report_qa::service::QaService;
use report_qa::store::ReportStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing Task Report QA service...");

    let config = config::load_config().expect("Failed to load config");
    log::info!(
        "Using backend {} with model {}",
        config.llm.api_url,
        config.llm.model_name
    );

    let report_store = Arc::new(ReportStore::default());
    let qa_service = Arc::new(QaService::new(report_store.clone(), config.llm.clone()));

    let server =
        actix_web::HttpServer::new(move || create_app(report_store.clone(), qa_service.clone()));

    server.bind(("0.0.0.0", consts::SERVER_PORT))?.run().await
}
