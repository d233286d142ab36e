//! Value objects shared by the derivation rules and the engine.

mod field_name;
mod row_record;
mod sheet_value;

pub use field_name::{repeating_field, row_prefix, section_name, RepeatingFieldRef, REPEATING_PREFIX};
pub use row_record::RowRecord;
pub use sheet_value::{flag, is_checked, parse_int, FieldMap, FieldValues};
