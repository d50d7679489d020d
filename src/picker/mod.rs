/// Image selection module
///
/// This module owns everything behind a random draw:
/// - The fixed, ordered photo catalog (catalog.rs)
/// - The injectable random index source (random.rs)

pub mod catalog;
pub mod random;
