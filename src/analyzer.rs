use crate::error::{EndpointError, Stage};
use crate::headers::parse_headers;
use crate::service::{ApiEndpoint, ApiService};
use log::{Level, Log, Record};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method, Request};
use std::fmt;
use url::Url;

/// Sends one request per endpoint of a service, in order, and logs what came back.
pub struct Analyzer<'a> {
    log: &'a dyn Log,
    client: Client,
}

impl<'a> Analyzer<'a> {
    pub fn new(log: &'a dyn Log) -> Self {
        Self {
            log,
            client: Client::new(),
        }
    }

    /// Never fails: every endpoint error is logged and the next endpoint runs.
    pub async fn analyze(&self, service: &ApiService) {
        self.emit(
            Level::Info,
            format_args!("Analyzing API service '{}'", service.name),
        );

        for endpoint in &service.endpoints {
            if let Err(err) = self.analyze_endpoint(endpoint).await {
                let context = match err.stage() {
                    Stage::Create => "Error creating request",
                    Stage::Send => "Error sending request",
                    Stage::Read => "Error reading response body",
                };
                self.emit(Level::Error, format_args!("{context}: {err}"));
            }
        }

        self.emit(
            Level::Info,
            format_args!(
                "Finished analyzing API service '{}' ({} endpoints)",
                service.name,
                service.endpoints.len()
            ),
        );
    }

    async fn analyze_endpoint(&self, endpoint: &ApiEndpoint) -> Result<(), EndpointError> {
        self.emit(
            Level::Debug,
            format_args!("Analyzing endpoint '{} {}'", endpoint.method, endpoint.path),
        );

        let request = build_request(&self.client, endpoint)?;
        if !matches!(request.url().scheme(), "http" | "https") {
            return Err(EndpointError::UnsupportedScheme(
                request.url().scheme().to_string(),
            ));
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(EndpointError::Send)?;
        let status = response.status();
        let body = response.bytes().await.map_err(EndpointError::ReadBody)?;

        self.emit(
            Level::Debug,
            format_args!("Response status code: {}", status.as_u16()),
        );
        self.emit(
            Level::Debug,
            format_args!("Response body: {}", String::from_utf8_lossy(&body)),
        );

        Ok(())
    }

    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        emit(self.log, level, args);
    }
}

/// Writes one record straight to `log`, bypassing the global logger.
pub fn emit(log: &dyn Log, level: Level, args: fmt::Arguments<'_>) {
    log.log(
        &Record::builder()
            .args(args)
            .level(level)
            .target(module_path!())
            .module_path_static(Some(module_path!()))
            .file_static(Some(file!()))
            .build(),
    );
}

/// Builds the request for one endpoint without sending it.
///
/// The endpoint query replaces any query in `path`; `url` percent-encodes only
/// the bytes a query may not carry raw. Credentials in the url become a Basic
/// `Authorization` header and never reach the `Host` header.
pub fn build_request(client: &Client, endpoint: &ApiEndpoint) -> Result<Request, EndpointError> {
    let method = if endpoint.method.is_empty() {
        Method::GET
    } else {
        Method::from_bytes(endpoint.method.as_bytes())
            .map_err(|_| EndpointError::InvalidMethod(endpoint.method.clone()))?
    };

    let mut url = Url::parse(&endpoint.path).map_err(|source| EndpointError::InvalidUrl {
        url: endpoint.path.clone(),
        source,
    })?;
    if url.host_str().is_none() {
        return Err(EndpointError::MissingHost(endpoint.path.clone()));
    }
    url.set_query(Some(endpoint.query.as_str()).filter(|q| !q.is_empty()));

    let mut req = client
        .request(method, url)
        .body(endpoint.body.clone())
        .build()
        .map_err(EndpointError::Build)?;

    for (name, value) in parse_headers(&endpoint.headers)? {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|err| EndpointError::InvalidHeader {
                name: name.clone(),
                reason: err.to_string(),
            })?;
        let header_value =
            HeaderValue::from_str(&value).map_err(|err| EndpointError::InvalidHeader {
                name: name.clone(),
                reason: err.to_string(),
            })?;
        req.headers_mut().insert(header_name, header_value);
    }

    Ok(req)
}
