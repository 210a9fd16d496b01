pub mod axis;
pub mod report;
pub mod request;

pub use axis::{Axis, AxisMap, AxisScores};
pub use report::{ArchetypeColumns, ArchetypeReport, SimpleArchetypeView};
pub use request::ProfileRequest;
