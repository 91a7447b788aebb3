/// Tolerance for comparing curve angles.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Angular tolerance (in degrees)
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_ANGULAR: f64 = 1e-9;

    pub fn default_precision() -> Self {
        Self {
            angular: Self::DEFAULT_ANGULAR,
        }
    }

    /// Check if two angles are equal within angular tolerance
    pub fn angular_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
