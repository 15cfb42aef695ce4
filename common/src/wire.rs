use serde::{Deserialize, Serialize};

/// Counter service response body, identical for GET, POST and DELETE.
///
/// Treated as an opaque snapshot: on success it replaces the local count and
/// timestamp wholesale, `message` is only logged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub count: u64,
    pub message: String,
    pub timestamp: String,
}

/// POST body for an increment; the service only supports stepping by one.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct IncrementRequest {
    pub increment: u32,
}

impl IncrementRequest {
    pub fn one() -> Self {
        Self { increment: 1 }
    }
}

impl Default for IncrementRequest {
    fn default() -> Self {
        Self::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_decodes_service_json() {
        let snapshot: CounterSnapshot =
            serde_json::from_str(r#"{"count":5,"message":"ok","timestamp":"2024-01-01T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(snapshot.count, 5);
        assert_eq!(snapshot.message, "ok");
        assert_eq!(snapshot.timestamp, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn increment_request_encodes_as_contract_body() {
        let body = serde_json::to_string(&IncrementRequest::one()).unwrap();
        assert_eq!(body, r#"{"increment":1}"#);
    }
}
