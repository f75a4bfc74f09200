//! Response DTOs for the division API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for a successful division (POST /divide)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionResponse {
    /// numerator / denominator
    pub result: f64,
    /// The coerced numerator
    pub numerator: f64,
    /// The coerced denominator
    pub denominator: f64,
}

impl DivisionResponse {
    /// Creates a new DivisionResponse
    pub fn new(result: f64, numerator: f64, denominator: f64) -> Self {
        Self {
            result,
            numerator,
            denominator,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Human-readable status line
    pub message: String,
}

impl HealthResponse {
    /// Creates the fixed healthy response
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "Division API is running".to_string(),
        }
    }
}

/// Route descriptions listed by the home endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointList {
    /// Description of `POST /divide`
    #[serde(rename = "POST /divide")]
    pub divide: String,
    /// Description of `GET /health`
    #[serde(rename = "GET /health")]
    pub health: String,
    /// Description of `GET /`
    #[serde(rename = "GET /")]
    pub home: String,
}

/// Field-by-field description of the /divide request body.
#[derive(Debug, Clone, Serialize)]
pub struct RequestBodyDoc {
    /// Expected type of `numerator`
    pub numerator: String,
    /// Expected type of `denominator`
    pub denominator: String,
}

/// Sample /divide request body.
#[derive(Debug, Clone, Serialize)]
pub struct DivideExample {
    /// Sample numerator
    pub numerator: i64,
    /// Sample denominator
    pub denominator: i64,
}

/// Usage notes for POST /divide.
#[derive(Debug, Clone, Serialize)]
pub struct DivideUsage {
    /// What the endpoint does
    pub description: String,
    /// Shape of the request body
    pub request_body: RequestBodyDoc,
    /// A valid request body
    pub example: DivideExample,
}

/// Usage notes keyed by route.
#[derive(Debug, Clone, Serialize)]
pub struct Usage {
    /// Notes for `POST /divide`
    #[serde(rename = "POST /divide")]
    pub divide: DivideUsage,
}

/// Response body for the home endpoint (GET /)
///
/// Self-describing documentation of the API.
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    /// Service banner
    pub message: String,
    /// Route -> description
    pub endpoints: EndpointList,
    /// Worked example for /divide
    pub usage: Usage,
}

impl InfoResponse {
    /// Creates the fixed documentation payload
    pub fn describe() -> Self {
        Self {
            message: "Division API Server".to_string(),
            endpoints: EndpointList {
                divide: "Divide two numbers".to_string(),
                health: "Health check".to_string(),
                home: "This help message".to_string(),
            },
            usage: Usage {
                divide: DivideUsage {
                    description: "Divide numerator by denominator".to_string(),
                    request_body: RequestBodyDoc {
                        numerator: "number (required)".to_string(),
                        denominator: "number (required)".to_string(),
                    },
                    example: DivideExample {
                        numerator: 10,
                        denominator: 2,
                    },
                },
            },
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    /// Short error category
    pub error: String,
    /// What the caller should do about it
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
