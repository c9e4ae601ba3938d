use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Negative,
    Borderline,
    Positive,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Negative => "NEGATIVE",
            Verdict::Borderline => "BORDERLINE",
            Verdict::Positive => "POSITIVE",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Negative => "No evidence of leukemia",
            Verdict::Borderline => {
                "Precursor cells detected, genetic tests for AML confirmation required"
            }
            Verdict::Positive => "AML confirmed",
        }
    }

    pub fn describe(self, precursor_count: u64) -> String {
        format!(
            "{} precursor cell(s) detected: {}",
            precursor_count,
            self.message()
        )
    }
}
