pub mod facts;

pub use facts::{Fact, FactSet, FACT_COUNT, FACT_LABELS, MAX_VALUE_LEN};
