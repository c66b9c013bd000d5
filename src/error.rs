use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not open service file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse service file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where in the per-endpoint pipeline a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Create,
    Send,
    Read,
}

#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("invalid method '{0}'")]
    InvalidMethod(String),

    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("url '{0}' has no host")]
    MissingHost(String),

    #[error("unsupported protocol scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("malformed header entry '{0}', expected 'key:value'")]
    MalformedHeader(String),

    #[error("invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error(transparent)]
    Build(reqwest::Error),

    #[error(transparent)]
    Send(reqwest::Error),

    #[error(transparent)]
    ReadBody(reqwest::Error),
}

impl EndpointError {
    pub fn stage(&self) -> Stage {
        match self {
            EndpointError::InvalidMethod(_)
            | EndpointError::InvalidUrl { .. }
            | EndpointError::MissingHost(_)
            | EndpointError::MalformedHeader(_)
            | EndpointError::InvalidHeader { .. }
            | EndpointError::Build(_) => Stage::Create,
            EndpointError::UnsupportedScheme(_) | EndpointError::Send(_) => Stage::Send,
            EndpointError::ReadBody(_) => Stage::Read,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_header_fails_at_creation() {
        let err = EndpointError::MalformedHeader("X-Test".to_string());
        assert_eq!(err.stage(), Stage::Create);
        assert_eq!(
            err.to_string(),
            "malformed header entry 'X-Test', expected 'key:value'"
        );
    }

    #[test]
    fn unparseable_url_fails_at_creation() {
        let err = EndpointError::InvalidUrl {
            url: "/items".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert_eq!(err.stage(), Stage::Create);
    }

    #[test]
    fn unknown_scheme_fails_at_send() {
        let err = EndpointError::UnsupportedScheme("ftp".to_string());
        assert_eq!(err.stage(), Stage::Send);
        assert_eq!(err.to_string(), "unsupported protocol scheme 'ftp'");
    }
}
