//! Machine-readable error codes for the JSON error envelope.
//!
//! The four well-known tokens cover the failure classes this layer itself
//! produces; [`ErrorCode::Other`] carries anything an application mints on
//! top. Clients should treat the set as open.

use std::fmt;

use serde::{Serialize, Serializer};

/// The token carried in the `error_code` field of an error reply.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorCode {
    Db,   // "db_err": data-layer fault
    Json, // "json_err": malformed or unparsable JSON
    Http, // "http_err": transport read failure
    Gen,  // "gen_err": unclassified
    /// A caller-minted extension token.
    Other(String),
}

impl ErrorCode {
    /// Returns the wire token (e.g. `"json_err"`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Db          => "db_err",
            Self::Json        => "json_err",
            Self::Http        => "http_err",
            Self::Gen         => "gen_err",
            Self::Other(code) => code,
        }
    }
}

/// Maps the well-known tokens back to their variants; anything else becomes
/// an extension token.
impl From<&str> for ErrorCode {
    fn from(token: &str) -> Self {
        match token {
            "db_err"   => Self::Db,
            "json_err" => Self::Json,
            "http_err" => Self::Http,
            "gen_err"  => Self::Gen,
            other      => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for ErrorCode {
    fn from(token: String) -> Self {
        match token.as_str() {
            "db_err"   => Self::Db,
            "json_err" => Self::Json,
            "http_err" => Self::Http,
            "gen_err"  => Self::Gen,
            _          => Self::Other(token),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializes as the bare token string: `ErrorCode::Db` becomes `"db_err"`.
impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn well_known_tokens_round_trip() {
        for token in ["db_err", "json_err", "http_err", "gen_err"] {
            assert_eq!(ErrorCode::from(token).as_str(), token);
        }
    }

    #[test]
    fn unknown_token_becomes_extension() {
        let code = ErrorCode::from("quota_err");
        assert_eq!(code, ErrorCode::Other("quota_err".to_owned()));
        assert_eq!(code.as_str(), "quota_err");
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&ErrorCode::Json).unwrap();
        assert_eq!(json, r#""json_err""#);
    }
}
