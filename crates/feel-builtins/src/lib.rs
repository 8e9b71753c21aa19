//! FEEL built-in functions: argument values, the `time` constructor and the
//! dispatch table the evaluator calls into.

pub mod property;
pub mod registry;
pub mod time;
pub mod value;

pub use property::property_of;
pub use registry::{BuiltinFn, FunctionTable};
pub use time::time;
pub use value::FeelValue;
