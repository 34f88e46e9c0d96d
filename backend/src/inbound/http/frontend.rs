//! Browser frontend delivery.
//!
//! Files under the frontend directory are served as-is. Any other `GET`
//! outside `/api` answers with the single-page application's entry document
//! so client-side routes survive a reload. Unknown `/api` paths get a JSON
//! 404 instead.

use std::io;
use std::path::PathBuf;

use actix_files::Files;
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, guard, web};
use cap_std::{ambient_authority, fs::Dir};
use tracing::warn;

use crate::domain::{ApiResult, Error};

/// File served for `/` and for every `GET` that matches no asset.
pub const INDEX_DOCUMENT: &str = "index.html";

const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

/// Location of the built frontend.
#[derive(Debug, Clone)]
pub struct FrontendAssets {
    root: PathBuf,
}

impl FrontendAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Static file service rooted at the frontend directory.
    ///
    /// Only `GET` requests are routed here. Paths with no matching file fall
    /// through to [`frontend`]. Returns `None` when the directory is absent;
    /// `Files` would otherwise resolve requests against the working directory.
    pub fn files(&self) -> Option<Files> {
        if !self.root.is_dir() {
            warn!(root = %self.root.display(), "frontend directory is missing");
            return None;
        }
        Some(
            Files::new("/", self.root.clone())
                .index_file(INDEX_DOCUMENT)
                .guard(guard::Get())
                .default_handler(web::to(frontend)),
        )
    }

    /// Register the static file service when the frontend directory exists.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        if let Some(files) = self.files() {
            cfg.service(files);
        }
    }

    /// Read the entry document through a handle scoped to the asset root.
    fn read_index(&self) -> io::Result<String> {
        let dir = Dir::open_ambient_dir(&self.root, ambient_authority())?;
        dir.read_to_string(INDEX_DOCUMENT)
    }
}

/// Fallback for routes matched neither by the API nor by a frontend file.
pub async fn frontend(
    req: HttpRequest,
    assets: web::Data<FrontendAssets>,
) -> ApiResult<HttpResponse> {
    if req.path().starts_with("/api") || req.method() != Method::GET {
        return Err(Error::not_found(ROUTE_NOT_FOUND_MESSAGE));
    }

    let assets = assets.into_inner();
    let document = web::block(move || assets.read_index())
        .await
        .map_err(|err| Error::internal(format!("frontend read was cancelled: {err}")))?;

    match document {
        Ok(body) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(error = %err, "frontend entry document is missing");
            Err(Error::not_found(ROUTE_NOT_FOUND_MESSAGE))
        }
        Err(err) => Err(Error::internal(format!(
            "failed to read frontend entry document: {err}"
        ))),
    }
}
