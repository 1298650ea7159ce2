use nalgebra::DVector;
use thiserror::Error;

use super::rule::{
    evaluate_integrand,
    IntegrationError,
    SimpleRule
};

// ─────────────────────────────────────────────────────────────────────────────
// NewtonCotesRule
// ─────────────────────────────────────────────────────────────────────────────
//
// 由係數向量 [c_0, c_1, ..., c_k] 代數生成 Newton–Cotes quadrature rule：
//
//   estimate(f, a, b) = (b-a)/Σc_i · Σ c_i·f(x_i)
//
// 節點位置（等距取樣）：
//   closed：x_i = a + i·(b-a)/k          含兩端點（trapezoid/Simpson/Boole）
//   open：  x_i = a + (i+1)·(b-a)/(k+2)  僅取內部節點（midpoint/Milne）
//
// 注意：
//   - Σc_i 作為正規化除數，生成時即拒絕零和向量（除以零屬程式錯誤，
//     不應等到求值時才以 NaN 形式浮現）
//   - closed rule 的節點間距除以 k，單一係數的 closed 向量同樣在生成時拒絕
//   - 係數向量一經生成即不可變，單一 rule 實例可跨多次 composite 呼叫共享

#[derive(Debug, Error)]
pub enum RuleGenerationError {
    #[error("coefficient vector must not be empty")]
    EmptyCoefficients,
    #[error("coefficient at position {0} is not finite")]
    NonFiniteCoefficient(usize),
    #[error("closed rule requires at least two coefficients")]
    SinglePointClosedRule,
    #[error("coefficient sum must be non-zero")]
    ZeroCoefficientSum
}

#[derive(Debug)]
pub struct NewtonCotesRule {
    coefficients: DVector<f64>,
    coefficient_sum: f64,
    open: bool
}

impl NewtonCotesRule {
    pub fn generate(coefficients: Vec<f64>, open: bool) -> Result<NewtonCotesRule, RuleGenerationError> {
        if coefficients.is_empty() {
            return Err(RuleGenerationError::EmptyCoefficients);
        }
        if let Some(position) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(RuleGenerationError::NonFiniteCoefficient(position));
        }
        if !open && coefficients.len() < 2 {
            return Err(RuleGenerationError::SinglePointClosedRule);
        }
        let rule = Self::from_coefficients(DVector::from_vec(coefficients), open);
        if rule.coefficient_sum == 0.0 {
            return Err(RuleGenerationError::ZeroCoefficientSum);
        }
        Ok(rule)
    }

    fn from_coefficients(coefficients: DVector<f64>, open: bool) -> NewtonCotesRule {
        let coefficient_sum = coefficients.sum();
        NewtonCotesRule { coefficients, coefficient_sum, open }
    }

    // ── 歷史命名公式 ─────────────────────────────────────────────────────────

    /// (b-a)·f((a+b)/2)
    pub fn midpoint() -> NewtonCotesRule {
        Self::from_coefficients(DVector::from_vec(vec![1.0]), true)
    }

    /// (b-a)/2·(f(a) + f(b))
    pub fn trapezoid() -> NewtonCotesRule {
        Self::from_coefficients(DVector::from_vec(vec![1.0, 1.0]), false)
    }

    /// (b-a)/6·(f(a) + 4f(m) + f(b))
    pub fn simpson() -> NewtonCotesRule {
        Self::from_coefficients(DVector::from_vec(vec![1.0, 4.0, 1.0]), false)
    }

    /// (b-a)/90·(7f_0 + 32f_1 + 12f_2 + 32f_3 + 7f_4)
    pub fn boole() -> NewtonCotesRule {
        Self::from_coefficients(DVector::from_vec(vec![7.0, 32.0, 12.0, 32.0, 7.0]), false)
    }

    /// (b-a)/3·(2f_1 - f_2 + 2f_3)，節點取四分位點
    pub fn milne() -> NewtonCotesRule {
        Self::from_coefficients(DVector::from_vec(vec![2.0, -1.0, 2.0]), true)
    }

    pub fn coefficients(&self) -> &DVector<f64> {
        &self.coefficients
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn node(&self, lower: f64, upper: f64, index: usize) -> f64 {
        let interval_length = upper - lower;
        if self.open {
            let node_count = (self.coefficients.len() + 1) as f64;
            lower + ((index + 1) as f64) * interval_length / node_count
        } else {
            let last_index = (self.coefficients.len() - 1) as f64;
            lower + (index as f64) * interval_length / last_index
        }
    }
}

impl SimpleRule for NewtonCotesRule {
    fn estimate_forward(&self,
                        integrand: &dyn Fn(f64) -> f64,
                        lower: f64,
                        upper: f64) -> Result<f64, IntegrationError> {
        let mut samples: DVector<f64> = DVector::zeros(self.coefficients.len());
        for index in 0..self.coefficients.len() {
            samples[index] = evaluate_integrand(integrand, self.node(lower, upper, index))?;
        }
        Ok(self.coefficients.dot(&samples) * (upper - lower) / self.coefficient_sum)
    }
}
