//! The fact data model: labels, values and the fixed-order set.

use crate::utils::parsing::truncate_value;

/// Maximum length of a fact's display value; longer probe output is
/// truncated, never overflowed.
pub const MAX_VALUE_LEN: usize = 128;

/// Number of facts in a complete set.
pub const FACT_COUNT: usize = 16;

/// The fixed catalog of fact labels, in display order. The presenter
/// pairs this order positionally with logo lines, so it never changes
/// between runs.
pub const FACT_LABELS: [&str; FACT_COUNT] = [
    "OS",
    "Arch",
    "Host",
    "Kernel",
    "Uptime",
    "Packages",
    "CPU",
    "GPU",
    "Disk",
    "Memory",
    "Shell",
    "Resolution",
    "DE",
    "WM",
    "WM Theme",
    "GTK Theme",
];

/// One labeled piece of system information.
#[derive(Debug, Clone)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

impl Fact {
    /// Build a fact, truncating the value to [`MAX_VALUE_LEN`] characters.
    pub fn new(label: &'static str, value: String) -> Self {
        Fact {
            label,
            value: truncate_value(value, MAX_VALUE_LEN),
        }
    }
}

/// The complete, fixed-order collection of all sixteen facts for one run.
/// Read-only after assembly.
#[derive(Debug)]
pub struct FactSet {
    facts: [Fact; FACT_COUNT],
}

impl FactSet {
    pub fn new(facts: [Fact; FACT_COUNT]) -> Self {
        FactSet { facts }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Fact> {
        self.facts.get(index)
    }

    /// The raw (pre-display) OS value, used to derive the logo key.
    pub fn os(&self) -> &str {
        &self.facts[0].value
    }

    pub fn len(&self) -> usize {
        FACT_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
