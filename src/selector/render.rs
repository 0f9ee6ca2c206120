use crate::{handles::Validation, problem::ProblemEntry};

pub const EMPTY_MESSAGE: &str =
    "No matching unsolved problems found. Try adjusting your criteria.";

/// What the selection flow needs from a user interface.
pub trait Surface {
    /// Drops the statuses of the previous check.
    fn clear_status(&mut self);
    fn show_status(&mut self, validation: &Validation);
    fn set_inputs_enabled(&mut self, enabled: bool);
    /// An empty slice should be shown as [`EMPTY_MESSAGE`].
    fn render_problems(&mut self, problems: &[ProblemEntry]);
    /// Drops statuses and the problem list.
    fn clear(&mut self);
}
