use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::Method;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::application::{RenameDepartmentUseCase, SearchDepartmentUseCase};
use crate::domain::department::RenameRequest;
use crate::infrastructure::auth::AuthClient;

pub const TOKEN_HEADER: &str = "x-iac-token";

pub struct HttpState {
    pub auth: Arc<dyn AuthClient>,
    pub search: SearchDepartmentUseCase,
    pub rename: RenameDepartmentUseCase,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// PUT body: `{"department":{"name":...},"rename":{"name":...}}`. A missing
/// or malformed body decodes to empty names and is rejected by validation
/// further down, never by the decoder itself.
#[derive(Debug, Default, Deserialize)]
pub struct RenameBody {
    #[serde(default)]
    pub department: DepartmentRef,
    #[serde(default)]
    pub rename: DepartmentRef,
}

/// Response envelope shared by both routes. The HTTP status and the `status`
/// field are always 200 / "200"; user-facing failures are distinguished only
/// through `message`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub data: DepartmentRef,
    pub message: String,
    pub status: String,
}

impl Envelope {
    fn success(name: &str) -> Self {
        Self {
            data: DepartmentRef {
                id: String::new(),
                name: name.to_string(),
            },
            message: "success".to_string(),
            status: "200".to_string(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            data: DepartmentRef::default(),
            message: message.into(),
            status: "200".to_string(),
        }
    }
}

fn respond(envelope: Envelope) -> HttpResponse {
    HttpResponse::Ok().json(envelope)
}

fn token_from(req: &HttpRequest) -> Option<String> {
    // actix header lookup is case-insensitive already
    req.headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Token check gate shared by both handlers. On failure the caller gets the
/// envelope to return; the store is never touched.
async fn authorize(state: &HttpState, req: &HttpRequest) -> Result<(), Envelope> {
    info!(url = %req.uri(), method = %req.method(), "incoming request");
    let token = match token_from(req) {
        Some(token) => token,
        None => {
            warn!("request without {} header", TOKEN_HEADER);
            return Err(Envelope::failure(format!(
                "{} not found in header",
                TOKEN_HEADER
            )));
        }
    };
    if !state.auth.authorize(&token).await {
        warn!("authorization failed");
        return Err(Envelope::failure("authorization failed"));
    }
    info!("authorization succeeded");
    Ok(())
}

async fn search_department(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> HttpResponse {
    if let Err(envelope) = authorize(&state, &req).await {
        return respond(envelope);
    }
    let department = path.into_inner();
    match state.search.execute(&department) {
        Ok(true) => respond(Envelope::success(&department)),
        Ok(false) => respond(Envelope::failure(format!("{} not found", department))),
        Err(e) => {
            error!(error = %e, "department lookup failed");
            respond(Envelope::failure(e.to_string()))
        }
    }
}

async fn rename_department(
    req: HttpRequest,
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> HttpResponse {
    if let Err(envelope) = authorize(&state, &req).await {
        return respond(envelope);
    }
    if req.method() != Method::PUT {
        return respond(Envelope::failure("only PUT is supported"));
    }
    let body: RenameBody = serde_json::from_slice(&body).unwrap_or_default();
    let request = RenameRequest::new(body.department.name, body.rename.name);
    match state.rename.execute(&request) {
        Ok(_updated) => respond(Envelope::success(&request.target)),
        Err(e) => {
            error!(error = %e, "department rename failed");
            respond(Envelope::failure(e.to_string()))
        }
    }
}

/// Route table. `renamed` is registered before the `{department}` capture so
/// the literal segment wins; both resources accept any method and do their
/// own method handling, matching the envelope-style error reporting.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/v1/department/renamed").route(web::route().to(rename_department)),
    )
    .service(
        web::resource("/v1/department/{department}").route(web::route().to(search_department)),
    );
}

pub fn start_server(state: HttpState, host: &str, port: u16) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(routes)
    })
    .bind((host, port))?
    .run();

    Ok(server)
}
