use std::sync::Arc;

use tracing::{error, info};

use dept_rename::application::{RenameDepartmentUseCase, SearchDepartmentUseCase};
use dept_rename::domain::error::AppError;
use dept_rename::infrastructure::auth::IacAuthClient;
use dept_rename::infrastructure::config::AppConfig;
use dept_rename::infrastructure::logging;
use dept_rename::infrastructure::store::DepartmentStore;
use dept_rename::interfaces::http::{start_server, HttpState};

fn fatal(err: AppError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let store = DepartmentStore::at_executable_dir().map_err(fatal)?;
    let log_path = store.path().with_file_name(logging::LOG_FILENAME);
    logging::init(&log_path).map_err(fatal)?;

    let config = AppConfig::load().map_err(|err| {
        error!(error = %err, "failed to load configuration");
        fatal(err)
    })?;

    info!(
        store = %store.path().display(),
        host = %config.server.host,
        port = config.server.port,
        "starting department rename service"
    );

    let store = Arc::new(store);
    let state = HttpState {
        auth: Arc::new(IacAuthClient::new(config.auth.clone())),
        search: SearchDepartmentUseCase::new(store.clone()),
        rename: RenameDepartmentUseCase::new(store),
    };

    start_server(state, &config.server.host, config.server.port)?.await
}
