use super::super::rule::{
    evaluate_integrand,
    IntegrationError,
    SimpleRule
};


pub struct TrapezoidRule;

impl TrapezoidRule {
    pub fn new() -> TrapezoidRule {
        TrapezoidRule {}
    }
}

impl SimpleRule for TrapezoidRule {
    fn estimate_forward(&self,
                        integrand: &dyn Fn(f64) -> f64,
                        lower: f64,
                        upper: f64) -> Result<f64, IntegrationError> {
        let lower_sample = evaluate_integrand(integrand, lower)?;
        let upper_sample = evaluate_integrand(integrand, upper)?;
        Ok((upper - lower) / 2.0 * (lower_sample + upper_sample))
    }
}
