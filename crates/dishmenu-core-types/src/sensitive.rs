//! Sensitive data marker for automatic redaction
//!
//! Connection strings can carry credentials, so anything read from the
//! settings file is wrapped in `Sensitive<T>` before it can reach a log line.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use dishmenu_core_types::Sensitive;
///
/// let conn = Sensitive::new("Data Source=menu.db;Password=hunter2");
/// assert_eq!(format!("{:?}", conn), "***REDACTED***");
/// assert_eq!(format!("{}", conn), "***REDACTED***");
///
/// // Access the actual value when needed
/// assert_eq!(conn.expose(), &"Data Source=menu.db;Password=hunter2");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    ///
    /// Only the code that opens the connection should need this.
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sensitive<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_debug_redaction() {
        let secret = Sensitive::new("Server=db;Password=my-secret-password");
        let debug_str = format!("{:?}", secret);
        assert_eq!(debug_str, "***REDACTED***");
        assert!(!debug_str.contains("my-secret-password"));
    }

    #[test]
    fn test_sensitive_display_redaction() {
        let secret = Sensitive::new("Data Source=menu.db");
        let display_str = format!("{}", secret);
        assert_eq!(display_str, "***REDACTED***");
        assert!(!display_str.contains("menu.db"));
    }

    #[test]
    fn test_sensitive_into_inner() {
        let secret = Sensitive::new(String::from("Data Source=menu.db"));
        assert_eq!(secret.into_inner(), "Data Source=menu.db");
    }

    #[test]
    fn test_sensitive_clone() {
        let secret1 = Sensitive::new(String::from("test"));
        let secret2 = secret1.clone();
        assert_eq!(secret1.expose(), secret2.expose());
    }

    #[test]
    fn test_sensitive_deserializes_transparently() {
        let secret: Sensitive<String> = serde_json::from_str("\"Data Source=menu.db\"").unwrap();
        assert_eq!(secret.expose(), "Data Source=menu.db");
    }

    #[test]
    fn test_sensitive_inside_map_stays_redacted() {
        let map: std::collections::BTreeMap<String, Sensitive<String>> =
            serde_json::from_str(r#"{"DefaultConnection": "Password=secret123"}"#).unwrap();

        let debug_str = format!("{:?}", map);
        assert!(debug_str.contains("DefaultConnection"));
        assert!(debug_str.contains("***REDACTED***"));
        assert!(!debug_str.contains("secret123"));
    }
}
