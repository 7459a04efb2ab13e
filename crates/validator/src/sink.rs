use std::collections::HashMap;

use alchemist_domain::ValidationError;

/// 诊断累加器
///
/// 同一次校验中诊断ID保持唯一：重复的ID依次追加 `-2`、`-3` 后缀。
#[derive(Debug, Default)]
pub struct FindingSink {
    findings: Vec<ValidationError>,
    id_counts: HashMap<String, usize>,
}

impl FindingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut finding: ValidationError) {
        let base = finding.id.clone();
        let mut count = self.id_counts.get(&base).copied().unwrap_or(0);
        if count > 0 {
            loop {
                count += 1;
                let candidate = format!("{base}-{count}");
                if !self.id_counts.contains_key(&candidate) {
                    finding.id = candidate;
                    break;
                }
            }
        } else {
            count = 1;
        }
        self.id_counts.insert(base, count);
        self.id_counts.entry(finding.id.clone()).or_insert(1);
        self.findings.push(finding);
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn into_findings(self) -> Vec<ValidationError> {
        self.findings
    }
}
