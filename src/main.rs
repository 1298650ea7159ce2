
use std::f64::consts::PI;

use compquad::configuration::Configuration;
use compquad::math::quadrature::composite::CompositeIntegration;

const JSON_FOLDER: &'static str = "json/";

fn main() {

    let mut config_path = JSON_FOLDER.to_owned();
    config_path.push_str("config.json");
    let config = Configuration::from_reader(&config_path).unwrap();
    let manager = config.simple_rule_manager();
    let integrand = |x: f64| x.sin();
    for rule_name in manager.names() {
        let rule = manager.get(rule_name).unwrap();
        for subdivisions in [1usize, 2, 4, 8, 16] {
            let estimate = rule.
                composite(&integrand, 0.0, PI, subdivisions).
                unwrap();
            println!("{}, {}, {}, {:e}",
                     rule_name,
                     subdivisions,
                     estimate,
                     (estimate - 2.0).abs());
        }
    }
}
