// src/handlers/auth.rs
// DOCUMENTATION: Request authentication helpers
// PURPOSE: API-key gating for the bot path and token gating for the admin path

use crate::config::Config;
use crate::errors::BackendError;
use actix_web::HttpRequest;

/// Keyword expected in front of the key in the Authorization header,
/// matched case-insensitively: "Authorization: api-key <KEY>"
pub const API_KEY_KEYWORD: &str = "api-key";

/// Whether the request carries any Authorization header at all.
/// Mixed endpoints switch between the public and the bot behavior on header
/// presence; the key itself is checked only on the bot branch.
pub fn has_api_credential(req: &HttpRequest) -> bool {
    req.headers().contains_key("Authorization")
}

/// Extract the API key from the Authorization header, if well-formed
pub fn api_key_from_header(req: &HttpRequest) -> Option<String> {
    let authorization = req.headers().get("Authorization")?.to_str().ok()?;

    let (keyword, key) = authorization.split_once(' ')?;
    if !keyword.eq_ignore_ascii_case(API_KEY_KEYWORD) {
        return None;
    }
    if key.is_empty() {
        return None;
    }

    Some(key.to_string())
}

/// Verify the bot API key.
/// The key needs to be regenerated manually if compromised; the server does
/// not generate or store its own keys.
pub fn verify_api_key(req: &HttpRequest, config: &Config) -> Result<(), BackendError> {
    let key = api_key_from_header(req).ok_or_else(|| {
        log::warn!("Bot request without usable api key");
        BackendError::Unauthorized
    })?;

    if config.api_key.is_empty() || key != config.api_key {
        log::warn!("Bot request with invalid api key");
        return Err(BackendError::Forbidden);
    }

    Ok(())
}

/// Verify admin authentication
/// DOCUMENTATION: Checks X-Admin-Token header against configured admin token
pub fn verify_admin_token(req: &HttpRequest, config: &Config) -> Result<(), BackendError> {
    let token = req
        .headers()
        .get("X-Admin-Token")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("Admin request without token");
            BackendError::Unauthorized
        })?;

    if token != config.admin_token {
        log::warn!("Admin request with invalid token");
        return Err(BackendError::Forbidden);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn parses_api_key_header() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "api-key sekrit"))
            .to_http_request();
        assert_eq!(api_key_from_header(&req), Some("sekrit".to_string()));
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Api-Key sekrit"))
            .to_http_request();
        assert_eq!(api_key_from_header(&req), Some("sekrit".to_string()));
    }

    #[test]
    fn rejects_wrong_keyword() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer sekrit"))
            .to_http_request();
        assert_eq!(api_key_from_header(&req), None);
    }

    #[test]
    fn rejects_missing_separator_or_key() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "api-key"))
            .to_http_request();
        assert_eq!(api_key_from_header(&req), None);

        let req = TestRequest::default()
            .insert_header(("Authorization", "api-key "))
            .to_http_request();
        assert_eq!(api_key_from_header(&req), None);
    }

    #[test]
    fn missing_header_is_no_credential() {
        let req = TestRequest::default().to_http_request();
        assert!(!has_api_credential(&req));
        assert_eq!(api_key_from_header(&req), None);
    }
}
