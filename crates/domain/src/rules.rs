//! 分配规则与优先级权重
//!
//! 这两类数据只随导出包一起输出，当前没有分配算法消费它们。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use alchemist_errors::AlchemistError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    CoRun,
    SlotRestriction,
    LoadLimit,
    PhaseWindow,
    Precedence,
}

fn default_active() -> bool {
    true
}

fn default_parameters() -> Value {
    Value::Object(serde_json::Map::new())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_parameters")]
    pub parameters: Value,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Rule {
    pub fn new<I: Into<String>, N: Into<String>>(id: I, kind: RuleKind, name: N) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            description: String::new(),
            parameters: default_parameters(),
            active: true,
        }
    }

    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

/// 优先级权重（百分比）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityWeights {
    pub priority_level: u32,
    pub request_fulfillment: u32,
    pub fairness: u32,
    pub workload_balance: u32,
    pub skill_matching: u32,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            priority_level: 30,
            request_fulfillment: 25,
            fairness: 20,
            workload_balance: 15,
            skill_matching: 10,
        }
    }
}

impl PriorityWeights {
    pub fn total(&self) -> u32 {
        self.priority_level
            + self.request_fulfillment
            + self.fairness
            + self.workload_balance
            + self.skill_matching
    }

    /// 权重之和应为100
    pub fn is_balanced(&self) -> bool {
        self.total() == 100
    }

    pub fn from_preset(preset: WeightPreset) -> Self {
        match preset {
            WeightPreset::MaximizeFulfillment => Self {
                priority_level: 20,
                request_fulfillment: 40,
                fairness: 15,
                workload_balance: 15,
                skill_matching: 10,
            },
            WeightPreset::FairDistribution => Self {
                priority_level: 15,
                request_fulfillment: 20,
                fairness: 35,
                workload_balance: 20,
                skill_matching: 10,
            },
            WeightPreset::MinimizeWorkload => Self {
                priority_level: 25,
                request_fulfillment: 20,
                fairness: 15,
                workload_balance: 30,
                skill_matching: 10,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightPreset {
    MaximizeFulfillment,
    FairDistribution,
    MinimizeWorkload,
}

impl FromStr for WeightPreset {
    type Err = AlchemistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maximize-fulfillment" => Ok(WeightPreset::MaximizeFulfillment),
            "fair-distribution" => Ok(WeightPreset::FairDistribution),
            "minimize-workload" => Ok(WeightPreset::MinimizeWorkload),
            other => Err(AlchemistError::invalid_request(format!(
                "未知的权重预设: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_weights_are_balanced() {
        let weights = PriorityWeights::default();
        assert_eq!(weights.total(), 100);
        assert!(weights.is_balanced());
    }

    #[test]
    fn test_presets_are_balanced() {
        for preset in ["maximize-fulfillment", "fair-distribution", "minimize-workload"] {
            let weights = PriorityWeights::from_preset(preset.parse().unwrap());
            assert!(weights.is_balanced(), "{preset} should sum to 100");
        }
        assert_eq!(
            PriorityWeights::from_preset(WeightPreset::FairDistribution).fairness,
            35
        );
    }

    #[test]
    fn test_unknown_preset() {
        assert!("balanced".parse::<WeightPreset>().is_err());
    }

    #[test]
    fn test_unbalanced_weights() {
        let weights = PriorityWeights {
            fairness: 50,
            ..PriorityWeights::default()
        };
        assert_eq!(weights.total(), 130);
        assert!(!weights.is_balanced());
    }

    #[test]
    fn test_weights_wire_format() {
        let value = serde_json::to_value(PriorityWeights::default()).unwrap();
        assert_eq!(value["priorityLevel"], 30);
        assert_eq!(value["skillMatching"], 10);
    }

    #[test]
    fn test_rule_deserialize_defaults() {
        let rule: Rule = serde_json::from_value(json!({
            "id": "R1",
            "type": "coRun",
            "name": "T1 with T2"
        }))
        .unwrap();

        assert_eq!(rule.kind, RuleKind::CoRun);
        assert!(rule.active);
        assert_eq!(rule.parameters, json!({}));
        assert!(rule.description.is_empty());
    }

    #[test]
    fn test_rule_builder() {
        let rule = Rule::new("R2", RuleKind::LoadLimit, "limit group A")
            .with_parameters(json!({"workerGroup": "GroupA", "maxSlotsPerPhase": 2}))
            .deactivated();
        assert!(!rule.active);
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["type"], "loadLimit");
        assert_eq!(value["parameters"]["maxSlotsPerPhase"], 2);
    }
}
