pub mod field;
pub mod item;
pub mod record;

pub use field::{FieldInfo, FieldType, StepExtra, StepField, StepInfo};
pub use item::{FnInfo, VariantInfo};
pub use record::{ChannelValues, Record};
