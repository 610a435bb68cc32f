mod plan_bounds;

pub use plan_bounds::{PlanBounds, PlanBoundsCalculator};
