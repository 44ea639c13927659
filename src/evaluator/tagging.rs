use crate::compiler::Diagnostics;
use crate::condition::Condition;
use crate::question::AnswerValue;
use crate::settings::AutoTaggingConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledRule {
    pub condition: Condition,
    pub tags: BTreeSet<String>,
}

/// Compiled form of a question's `autoTagging` sub-config. Rules that failed to
/// compile are already dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaggingPlan {
    pub rules: Vec<CompiledRule>,
}

impl TaggingPlan {
    /// `case_sensitive` is the default for rules that do not set their own flag.
    pub fn compile(
        config: &AutoTaggingConfig,
        case_sensitive: bool,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let rules = config
            .rules
            .iter()
            .enumerate()
            .filter_map(|(index, rule)| {
                let rule_case = rule.case_sensitive.unwrap_or(case_sensitive);
                match Condition::compile(rule.condition, &rule.value, rule_case) {
                    Ok(condition) => Some(CompiledRule {
                        condition,
                        tags: rule.tags.clone(),
                    }),
                    Err(e) => {
                        diagnostics.error(format!("autoTagging.rules[{}]", index), e.to_string());
                        None
                    }
                }
            })
            .collect();
        Self { rules }
    }

    /// Unions the tags of every rule that matches. There is no first-match short-circuit.
    pub fn tag(&self, answer: &AnswerValue) -> BTreeSet<String> {
        self.rules
            .iter()
            .filter(|rule| rule.condition.matches(answer))
            .flat_map(|rule| rule.tags.iter().cloned())
            .collect()
    }
}

pub fn tag(plan: Option<&TaggingPlan>, answer: &AnswerValue) -> BTreeSet<String> {
    plan.map(|p| p.tag(answer)).unwrap_or_default()
}
