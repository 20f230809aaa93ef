use shared_constants::CSRF_HEADER_NAME;

/// Methods that never carry the CSRF header.
const SAFE_METHODS: [&str; 4] = ["GET", "HEAD", "OPTIONS", "TRACE"];

/// Collaborator for outgoing requests. Page activation does not use it yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestHelper {
    csrf_token: Option<String>,
}

impl RequestHelper {
    pub fn new(csrf_token: Option<String>) -> Self {
        Self { csrf_token }
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    /// Extra headers a request with `method` has to send.
    pub fn headers_for(&self, method: &str) -> Vec<(&'static str, String)> {
        let is_safe = SAFE_METHODS
            .iter()
            .any(|safe| safe.eq_ignore_ascii_case(method));
        match &self.csrf_token {
            Some(token) if !is_safe => vec![(CSRF_HEADER_NAME, token.clone())],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsafe_methods_carry_csrf_header() {
        let requests = RequestHelper::new(Some("tok".to_string()));
        for method in ["POST", "put", "PATCH", "DELETE"] {
            assert_eq!(
                requests.headers_for(method),
                vec![("X-CSRFToken", "tok".to_string())],
                "{method}"
            );
        }
    }

    #[test]
    fn test_safe_methods_carry_no_header() {
        let requests = RequestHelper::new(Some("tok".to_string()));
        for method in ["GET", "head", "OPTIONS", "TRACE"] {
            assert!(requests.headers_for(method).is_empty(), "{method}");
        }
    }

    #[test]
    fn test_no_token_no_header() {
        let requests = RequestHelper::default();
        assert_eq!(requests.csrf_token(), None);
        assert!(requests.headers_for("POST").is_empty());
    }
}
