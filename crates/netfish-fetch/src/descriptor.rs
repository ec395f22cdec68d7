use std::fmt;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_MIME: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether requests with this method declare a JSON content type.
    pub fn declares_json(&self) -> bool {
        !matches!(self, Method::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outgoing request, built per call and dropped once it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    /// JSON-encoded body.
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        let mut headers = Vec::new();
        if method.declares_json() {
            headers.push((CONTENT_TYPE.to_owned(), JSON_MIME.to_owned()));
        }

        Self {
            method,
            url: url.into(),
            body: None,
            headers,
        }
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Appends a header unless one with the same name (case-insensitive) is
    /// already set.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if self.header(&name).is_none() {
            self.headers.push((name, value.into()));
        }
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_sends_no_content_type() {
        let d = RequestDescriptor::new(Method::Delete, "https://x.dev/1");
        assert!(d.headers.is_empty());
        assert_eq!(d.body, None);
    }

    #[test]
    fn json_methods_declare_content_type() {
        for method in [Method::Get, Method::Post, Method::Put, Method::Patch] {
            let d = RequestDescriptor::new(method, "https://x.dev");
            assert_eq!(d.header("content-type"), Some(JSON_MIME), "{method}");
        }
    }

    #[test]
    fn headers_do_not_override() {
        let d = RequestDescriptor::new(Method::Post, "https://x.dev")
            .with_header("content-type", "text/plain")
            .with_header("Authorization", "Bearer t");

        assert_eq!(d.header(CONTENT_TYPE), Some(JSON_MIME));
        assert_eq!(d.header("authorization"), Some("Bearer t"));
        assert_eq!(d.headers.len(), 2);
    }
}
