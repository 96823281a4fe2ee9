//! Service category names.
//!
//! Category names are plain strings in the catalog; these constants keep the
//! rule modules and the shipped catalog in agreement.

/// The "Car Washing" service category.
pub const CAR_WASHING: &str = "Car Washing";

/// The "Carpentry" service category.
pub const CARPENTRY: &str = "Carpentry";

/// The "Electrical Works" service category.
pub const ELECTRICAL_WORKS: &str = "Electrical Works";

/// The "Plumbing" service category.
pub const PLUMBING: &str = "Plumbing";

/// The "Laundry" service category.
pub const LAUNDRY: &str = "Laundry";

/// All service categories the platform offers.
pub const SERVICE_CATEGORIES: [&str; 5] =
    [CAR_WASHING, CARPENTRY, ELECTRICAL_WORKS, PLUMBING, LAUNDRY];
