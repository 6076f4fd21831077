use poem_openapi::Object;

/// Response model for the health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Name of the service
    pub service: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Plain error body: `{"error": "..."}`
#[derive(Object, Debug)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Error body for simulated failures: `{"success": false, "error": "..."}`
#[derive(Object, Debug)]
pub struct FailureBody {
    pub success: bool,

    /// Human-readable error message; the caller may retry the identical request
    pub error: String,
}
