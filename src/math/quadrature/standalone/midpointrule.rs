use super::super::rule::{
    evaluate_integrand,
    IntegrationError,
    SimpleRule
};


pub struct MidpointRule;

impl MidpointRule {
    pub fn new() -> MidpointRule {
        MidpointRule {}
    }
}

impl SimpleRule for MidpointRule {
    fn estimate_forward(&self,
                        integrand: &dyn Fn(f64) -> f64,
                        lower: f64,
                        upper: f64) -> Result<f64, IntegrationError> {
        let sample = evaluate_integrand(integrand, (lower + upper) / 2.0)?;
        Ok((upper - lower) * sample)
    }
}
