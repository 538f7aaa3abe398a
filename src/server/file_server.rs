use crate::server::handler::{FileHandler, FileResponse};
use crate::utils::error::{DatavizError, Result};
use std::io::Cursor;
use std::net::SocketAddr;
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Blocking HTTP listener. Requests are taken off the socket and answered one at a time.
pub struct FileServer {
    server: Server,
    handler: FileHandler,
}

impl FileServer {
    pub fn bind(addr: &str, handler: FileHandler) -> Result<Self> {
        let server = Server::http(addr).map_err(|e| DatavizError::BindError {
            addr: addr.to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!("Bound {} serving {}", addr, handler.root().display());
        Ok(Self { server, handler })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Never returns while the listener is open.
    pub fn serve_forever(&self) {
        for request in self.server.incoming_requests() {
            self.handle_request(request);
        }
    }

    fn handle_request(&self, request: Request) {
        let method = request.method().as_str().to_string();
        let target = request.url().to_string();
        let if_modified_since = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("If-Modified-Since"))
            .map(|h| h.value.as_str().to_string());

        let response = self
            .handler
            .handle(&method, &target, if_modified_since.as_deref());
        let status = response.status;

        if let Err(e) = request.respond(into_http_response(response)) {
            tracing::warn!("\"{} {}\" {} - failed to send response: {}", method, target, status, e);
            return;
        }
        tracing::info!("\"{} {}\" {}", method, target, status);
    }
}

fn into_http_response(response: FileResponse) -> Response<Cursor<Vec<u8>>> {
    let mut http_response =
        Response::from_data(response.body).with_status_code(StatusCode(response.status));
    for (name, value) in &response.headers {
        match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            Ok(header) => http_response.add_header(header),
            Err(()) => tracing::warn!("Dropping invalid header {}: {}", name, value),
        }
    }
    http_response
}
