/// Media handling module
///
/// This module handles:
/// - Loading files picked in the dialog or dropped on the window
/// - The simulated analysis delay

pub mod analysis;
pub mod loader;
