use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use crate::manager::manager::{
    FrozenManager,
    IManager
};
use crate::manager::managererror::ManagerError;
use crate::math::quadrature::rule::SimpleRule;
use crate::math::quadrature::rulemanager::{
    builtin_rule_builder,
    SimpleRuleLoader
};


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    quadrature_rule: Vec<serde_json::Value>
}

pub struct Configuration {
    simple_rule_manager: FrozenManager<dyn SimpleRule>
}


impl Configuration {
    /// 只含五條內建 rule 的設定。
    pub fn builtin() -> Configuration {
        Configuration { simple_rule_manager: builtin_rule_builder().freeze() }
    }

    /// 讀取 JSON 設定檔，於內建 rule 之上疊加自訂 rule 後凍結。
    pub fn from_reader(file_path: &str) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let mut builder = builtin_rule_builder();
        let loader = SimpleRuleLoader;
        loader.insert_obj_from_json_vec(&mut builder, &json_prop.quadrature_rule, &())?;
        Ok(Configuration { simple_rule_manager: builder.freeze() })
    }

    pub fn simple_rule_manager(&self) -> &FrozenManager<dyn SimpleRule> {
        &self.simple_rule_manager
    }
}
