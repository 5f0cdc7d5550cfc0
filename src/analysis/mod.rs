// Column inference, aggregation and the render pass that ties them together
pub mod aggregation;
pub mod column_roles;
pub mod render_pass;

pub use aggregation::{Direction, TrailingComparison};
pub use column_roles::{ForecastColumns, RoleRule};
pub use render_pass::render_pass;
