// ── rulemanager.rs ───────────────────────────────────────────────────────────

use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::{IManager, ManagerBuilder};
use crate::manager::managererror::ManagerError;
use crate::manager::namedobject::NamedJsonObject;
use super::newtoncotes::NewtonCotesRule;
use super::rule::SimpleRule;


// ─────────────────────────────────────────────────────────────────────────────
// JSON props
// ─────────────────────────────────────────────────────────────────────────────

/// JSON prop for a Newton–Cotes simple rule.
///
/// # 欄位說明
///
/// - `coefficients`：係數向量 [c_0, ..., c_k]，總和不得為零。
/// - `open`：`true` 表示僅取內部節點（open rule）。若省略，預設 `false`。
#[derive(Deserialize)]
struct SimpleRuleJsonProp {
    coefficients: Vec<f64>,
    #[serde(default)]
    open: bool,
}


// ─────────────────────────────────────────────────────────────────────────────
// 工廠函式
// ─────────────────────────────────────────────────────────────────────────────

fn build_rule_from_json(json_value: serde_json::Value) -> Result<Arc<dyn SimpleRule>, ManagerError> {
    let p: SimpleRuleJsonProp =
        ManagerError::from_json_or_json_parse_error(json_value)?;
    let rule = NewtonCotesRule::generate(p.coefficients, p.open)
        .map_err(ManagerError::RuleGenerationError)?;
    Ok(Arc::new(rule))
}

/// 內建五條歷史命名 rule 的 builder；設定檔載入的 rule 疊加其上。
pub fn builtin_rule_builder() -> ManagerBuilder<dyn SimpleRule> {
    let mut builder: ManagerBuilder<dyn SimpleRule> = ManagerBuilder::new();
    builder.insert("Midpoint".to_owned(), Arc::new(NewtonCotesRule::midpoint()));
    builder.insert("Trapezoid".to_owned(), Arc::new(NewtonCotesRule::trapezoid()));
    builder.insert("Simpson".to_owned(), Arc::new(NewtonCotesRule::simpson()));
    builder.insert("Boole".to_owned(), Arc::new(NewtonCotesRule::boole()));
    builder.insert("Milne".to_owned(), Arc::new(NewtonCotesRule::milne()));
    builder
}


// ─────────────────────────────────────────────────────────────────────────────
// SimpleRuleLoader
// ─────────────────────────────────────────────────────────────────────────────

pub struct SimpleRuleLoader;

impl IManager<dyn SimpleRule, ()> for SimpleRuleLoader {
    fn insert_obj_from_json(
        &self,
        builder: &mut ManagerBuilder<dyn SimpleRule>,
        json_value: serde_json::Value,
        _supports: &(),
    ) -> Result<(), ManagerError> {
        let named: NamedJsonObject =
            ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let rule = build_rule_from_json(json_value)?;
        builder.insert(named.into_name(), rule);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use serde_json::json;

    use super::*;
    use super::super::composite::CompositeIntegration;

    #[test]
    fn test_builtin_rules_are_registered() {
        let manager = builtin_rule_builder().freeze();
        assert_eq!(manager.names(), vec!["Boole", "Midpoint", "Milne", "Simpson", "Trapezoid"]);
    }

    #[test]
    fn test_builtin_rule_integrates() {
        // ∫₀^π sin(x) dx = 2
        let manager = builtin_rule_builder().freeze();
        let simpson = manager.get("Simpson").unwrap();
        let estimate = simpson.composite(&|x: f64| x.sin(), 0.0, PI, 8).unwrap();
        assert!((estimate - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_load_rule_from_json() {
        // Weddle's rule：closed 7 點，係數 [1, 5, 1, 6, 1, 5, 1]
        let loader = SimpleRuleLoader;
        let mut builder = builtin_rule_builder();
        loader.insert_obj_from_json(
            &mut builder,
            json!({"name": "Weddle", "coefficients": [1, 5, 1, 6, 1, 5, 1], "open": false}),
            &(),
        ).unwrap();
        let manager = builder.freeze();

        // ∫₀^π sin(x) dx = 2
        let weddle = manager.get("Weddle").unwrap();
        let estimate = weddle.composite(&|x: f64| x.sin(), 0.0, PI, 1).unwrap();
        assert!((estimate - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_open_defaults_to_false() {
        let loader = SimpleRuleLoader;
        let mut builder: ManagerBuilder<dyn SimpleRule> = ManagerBuilder::new();
        loader.insert_obj_from_json(
            &mut builder,
            json!({"name": "PlainTrapezoid", "coefficients": [1, 1]}),
            &(),
        ).unwrap();
        let manager = builder.freeze();

        // closed 2 點 rule 會取樣端點，ln 在 0 發散
        let rule = manager.get("PlainTrapezoid").unwrap();
        assert!(rule.estimate(&|x: f64| x.ln(), 0.0, 1.0).is_err());
    }

    #[test]
    fn test_invalid_rule_in_json_is_rejected() {
        let loader = SimpleRuleLoader;
        let mut builder: ManagerBuilder<dyn SimpleRule> = ManagerBuilder::new();
        let err = loader.insert_obj_from_json(
            &mut builder,
            json!({"name": "ZeroSum", "coefficients": [1, -1], "open": true}),
            &(),
        ).unwrap_err();
        assert!(matches!(err, ManagerError::RuleGenerationError(_)));
    }
}
