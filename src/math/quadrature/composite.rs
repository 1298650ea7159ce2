use super::rule::{
    IntegrationError,
    SimpleRule
};

// ─────────────────────────────────────────────────────────────────────────────
// CompositeIntegration
// ─────────────────────────────────────────────────────────────────────────────
//
// 將區間 [a, b] 等分為 n 個子區間，逐段套用 simple rule 後加總：
//
//   composite(rule, f, a, b, n) = Σ rule(f, p_i, p_{i+1})
//   p_i = a + i·(b-a)/n，i = 0..n
//
// 斷點序列每次呼叫即時推導，不做任何快取；末端斷點固定取 b，
// 使 n = 1 時退化為單次 rule 估計（兩者逐位元相等）。
// 子區間彼此獨立，呼叫端可自行平行化；此處維持循序加總。

pub trait CompositeIntegration {
    fn composite(&self,
                 integrand: &dyn Fn(f64) -> f64,
                 lower: f64,
                 upper: f64,
                 subdivisions: usize) -> Result<f64, IntegrationError>;
}

impl<R: SimpleRule + ?Sized> CompositeIntegration for R {
    fn composite(&self,
                 integrand: &dyn Fn(f64) -> f64,
                 lower: f64,
                 upper: f64,
                 subdivisions: usize) -> Result<f64, IntegrationError> {
        if subdivisions == 0 {
            Err(IntegrationError::InvalidSubdivisionCount(subdivisions))
        } else if !lower.is_finite() {
            Err(IntegrationError::NonFiniteBound(lower))
        } else if !upper.is_finite() {
            Err(IntegrationError::NonFiniteBound(upper))
        } else if lower == upper {
            Ok(0.0)
        } else if lower > upper {
            Ok(-composite_forward(self, integrand, upper, lower, subdivisions)?)
        } else {
            composite_forward(self, integrand, lower, upper, subdivisions)
        }
    }
}

fn composite_forward<R: SimpleRule + ?Sized>(rule: &R,
                                             integrand: &dyn Fn(f64) -> f64,
                                             lower: f64,
                                             upper: f64,
                                             subdivisions: usize) -> Result<f64, IntegrationError> {
    let points = breakpoints(lower, upper, subdivisions);
    let mut total = 0.0;
    for pair in points.windows(2) {
        total += rule.estimate_forward(integrand, pair[0], pair[1])?;
    }
    Ok(total)
}

fn breakpoints(lower: f64, upper: f64, subdivisions: usize) -> Vec<f64> {
    let step = (upper - lower) / (subdivisions as f64);
    let mut points: Vec<f64> = (0..subdivisions)
        .map(|i| lower + (i as f64) * step)
        .collect();
    points.push(upper);
    points
}
