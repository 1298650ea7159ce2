use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("subdivision count must be a positive integer, got {0}")]
    InvalidSubdivisionCount(usize),
    #[error("integration bound must be finite, got {0}")]
    NonFiniteBound(f64),
    #[error("integrand returned non-finite value {value} at x = {x}")]
    NonFiniteSample {
        x: f64,
        value: f64
    }
}

/// 單一區間上的定積分估計。
///
/// `estimate` 處理區間方向與端點檢查後委派給 `estimate_forward`：
/// - lower == upper → 0（不呼叫 integrand）
/// - lower >  upper → 反向估計取負號（∫_a^b = -∫_b^a）
pub trait SimpleRule: Send + Sync {
    /// 前提：lower < upper 且兩端點皆為有限值。
    fn estimate_forward(&self,
                        integrand: &dyn Fn(f64) -> f64,
                        lower: f64,
                        upper: f64) -> Result<f64, IntegrationError>;

    fn estimate(&self,
                integrand: &dyn Fn(f64) -> f64,
                lower: f64,
                upper: f64) -> Result<f64, IntegrationError> {
        if !lower.is_finite() {
            Err(IntegrationError::NonFiniteBound(lower))
        } else if !upper.is_finite() {
            Err(IntegrationError::NonFiniteBound(upper))
        } else if lower == upper {
            Ok(0.0)
        } else if lower > upper {
            Ok(-self.estimate_forward(integrand, upper, lower)?)
        } else {
            self.estimate_forward(integrand, lower, upper)
        }
    }
}

pub fn evaluate_integrand(integrand: &dyn Fn(f64) -> f64, x: f64) -> Result<f64, IntegrationError> {
    let value = integrand(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IntegrationError::NonFiniteSample { x, value })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    struct ZeroRule;

    impl SimpleRule for ZeroRule {
        fn estimate_forward(&self,
                            _integrand: &dyn Fn(f64) -> f64,
                            _lower: f64,
                            _upper: f64) -> Result<f64, IntegrationError> {
            Ok(1.0)
        }
    }

    #[test]
    fn test_degenerate_interval_skips_integrand() {
        // integrand would fail the finiteness check if it were ever sampled
        let estimate = ZeroRule.estimate(&|_| f64::NAN, 1.5, 1.5).unwrap();
        assert_eq!(estimate, 0.0);
    }

    #[test]
    fn test_reversed_interval_negates() {
        let forward = ZeroRule.estimate(&|x| x, 0.0, 1.0).unwrap();
        let backward = ZeroRule.estimate(&|x| x, 1.0, 0.0).unwrap();
        assert_eq!(backward, -forward);
    }

    #[test]
    fn test_non_finite_bound_rejected() {
        let err = ZeroRule.estimate(&|x| x, 0.0, f64::INFINITY).unwrap_err();
        assert!(matches!(err, IntegrationError::NonFiniteBound(_)));
    }

    #[test]
    fn test_evaluate_integrand_rejects_non_finite_sample() {
        let err = evaluate_integrand(&|x: f64| x.ln(), 0.0).unwrap_err();
        assert!(matches!(err, IntegrationError::NonFiniteSample { x, .. } if x == 0.0));
    }
}
