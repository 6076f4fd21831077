use rand::Rng;

/// Decides whether a mutation reports a simulated failure
///
/// Both `CatalogService::create_item` and `BorrowService::request_borrow`
/// consult this once per call. Injecting the policy keeps the services
/// deterministic under test.
pub trait FailurePolicy: Send + Sync {
    /// One draw; `true` means the call reports a simulated failure
    fn should_fail(&self) -> bool;
}

/// Uniform random failure at a configurable rate
pub struct RandomFailurePolicy {
    failure_rate: f64,
}

impl RandomFailurePolicy {
    /// Create a policy failing at the given rate, clamped to [0, 1]
    pub fn new(failure_rate: f64) -> Self {
        Self {
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomFailurePolicy {
    /// Roughly one call in five fails
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl FailurePolicy for RandomFailurePolicy {
    fn should_fail(&self) -> bool {
        rand::thread_rng().gen::<f64>() < self.failure_rate
    }
}

/// Deterministic policy that always returns the configured outcome
///
/// Lets tests force either branch of the simulated-failure draw.
pub struct FixedOutcomePolicy {
    fail: bool,
}

impl FixedOutcomePolicy {
    pub fn always_fail() -> Self {
        Self { fail: true }
    }

    pub fn never_fail() -> Self {
        Self { fail: false }
    }
}

impl FailurePolicy for FixedOutcomePolicy {
    fn should_fail(&self) -> bool {
        self.fail
    }
}
