//! Request descriptor types
//!
//! An explicit, validated description of a single API request:
//! endpoint path, method, query parameters, headers, and an optional
//! JSON body.

use std::fmt;

use serde_json::Value;

/// HTTP method for an API request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Whether this method carries a request body
    pub fn allows_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        write!(f, "{}", verb)
    }
}

/// Scalar query-parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{}", s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u16> for ParamValue {
    fn from(value: u16) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Description of a single API request
///
/// Query parameters keep insertion order so URL construction is
/// deterministic. The body is only attached for methods that allow
/// one (POST/PUT/PATCH).
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub endpoint: String,
    pub method: Method,
    pub params: Vec<(String, ParamValue)>,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            params: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// Add a query parameter. A repeated key replaces the earlier
    /// entry in place, keeping its original position.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.params.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.params.push((key, value));
        }
        self
    }

    /// Add a request header, overriding any default with the same
    /// name (case-insensitive).
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body. Ignored at send time unless the method is
    /// POST, PUT, or PATCH.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_display_is_upper_case_verb() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }

    #[test]
    fn only_mutating_methods_allow_body() {
        assert!(Method::Post.allows_body());
        assert!(Method::Put.allows_body());
        assert!(Method::Patch.allows_body());
        assert!(!Method::Get.allows_body());
        assert!(!Method::Delete.allows_body());
    }

    #[test]
    fn param_values_coerce_to_literal_strings() {
        assert_eq!(ParamValue::from("abc").to_string(), "abc");
        assert_eq!(ParamValue::from(42).to_string(), "42");
        assert_eq!(ParamValue::from(2.5).to_string(), "2.5");
        assert_eq!(ParamValue::from(true).to_string(), "true");
        assert_eq!(ParamValue::from(false).to_string(), "false");
    }

    #[test]
    fn repeated_param_key_replaces_value_in_place() {
        let descriptor = RequestDescriptor::new(Method::Get, "/items")
            .param("page", 1)
            .param("limit", 10)
            .param("page", 2);

        assert_eq!(descriptor.params.len(), 2);
        assert_eq!(descriptor.params[0].0, "page");
        assert_eq!(descriptor.params[0].1, ParamValue::Int(2));
        assert_eq!(descriptor.params[1].0, "limit");
    }

    #[test]
    fn builder_collects_headers_and_body() {
        let descriptor = RequestDescriptor::new(Method::Post, "/items")
            .header("Authorization", "Bearer token")
            .body(json!({"key": "value"}));

        assert_eq!(descriptor.headers.len(), 1);
        assert_eq!(descriptor.body, Some(json!({"key": "value"})));
    }
}
