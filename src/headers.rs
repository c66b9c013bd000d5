use crate::error::EndpointError;

/// Parses the `key:value,key:value` header string of an endpoint.
///
/// Blank entries are ignored, so an empty string yields no headers. Each
/// entry splits on its first `:` only and both halves are trimmed. An entry
/// without a `:` or with an empty key rejects the whole string.
pub fn parse_headers(headers: &str) -> Result<Vec<(String, String)>, EndpointError> {
    let mut result = Vec::new();

    for entry in headers.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (key, value) = entry
            .split_once(':')
            .map(|(k, v)| (k.trim(), v.trim()))
            .ok_or_else(|| EndpointError::MalformedHeader(entry.to_string()))?;

        if key.is_empty() {
            return Err(EndpointError::MalformedHeader(entry.to_string()));
        }

        result.push((key.to_string(), value.to_string()));
    }

    Ok(result)
}
