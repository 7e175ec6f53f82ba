use crate::error::EditFlowError;

/// Where the user is in the edit-goal flow.
///
/// Editing always starts from a warning that progress will start over,
/// except when it is opened from the goal-completed screen. Saving from
/// the editor always resets progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditFlow {
    #[default]
    Idle,
    /// "If you update now, your streak will start over."
    Warning,
    Editing,
}

impl EditFlow {
    pub(crate) fn request(&mut self) -> Result<(), EditFlowError> {
        match self {
            EditFlow::Idle => {
                *self = EditFlow::Warning;
                Ok(())
            }
            EditFlow::Warning => Err(EditFlowError::AwaitingConfirmation),
            EditFlow::Editing => Err(EditFlowError::AlreadyEditing),
        }
    }

    pub(crate) fn dismiss(&mut self) -> Result<(), EditFlowError> {
        match self {
            EditFlow::Warning => {
                *self = EditFlow::Idle;
                Ok(())
            }
            EditFlow::Idle => Err(EditFlowError::NotRequested),
            EditFlow::Editing => Err(EditFlowError::AlreadyEditing),
        }
    }

    pub(crate) fn confirm(&mut self) -> Result<(), EditFlowError> {
        match self {
            EditFlow::Warning => {
                *self = EditFlow::Editing;
                Ok(())
            }
            EditFlow::Idle => Err(EditFlowError::NotRequested),
            EditFlow::Editing => Err(EditFlowError::AlreadyEditing),
        }
    }

    /// Opens the editor directly, skipping the warning.
    pub(crate) fn open_editor(&mut self) -> Result<(), EditFlowError> {
        match self {
            EditFlow::Idle => {
                *self = EditFlow::Editing;
                Ok(())
            }
            EditFlow::Warning => Err(EditFlowError::AwaitingConfirmation),
            EditFlow::Editing => Err(EditFlowError::AlreadyEditing),
        }
    }

    pub(crate) fn close_editor(&mut self) -> Result<(), EditFlowError> {
        match self {
            EditFlow::Editing => {
                *self = EditFlow::Idle;
                Ok(())
            }
            EditFlow::Idle => Err(EditFlowError::EditorClosed),
            EditFlow::Warning => Err(EditFlowError::AwaitingConfirmation),
        }
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, EditFlow::Idle)
    }
}
