//! Two-step workflow builder
//!
//! The builder walks a user from choosing a trigger (app, then event) to
//! choosing one or more actions per target app. The step and the selections
//! are independent: switching steps never clears a selection, and only
//! choosing a new trigger app clears the chosen trigger event.

use crate::error::BuilderError;
use crate::record::{ActionMap, Trigger, WorkflowRecord};

/// Current wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Trigger,
    Action,
}

/// Trigger selection progress. An event is always bound to its app.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TriggerSelection {
    #[default]
    Unselected,
    AppChosen(String),
    EventChosen { app: String, event: String },
}

impl TriggerSelection {
    pub fn app(&self) -> Option<&str> {
        match self {
            TriggerSelection::Unselected => None,
            TriggerSelection::AppChosen(app) => Some(app),
            TriggerSelection::EventChosen { app, .. } => Some(app),
        }
    }

    pub fn event(&self) -> Option<&str> {
        match self {
            TriggerSelection::EventChosen { event, .. } => Some(event),
            _ => None,
        }
    }

    pub fn to_trigger(&self) -> Option<Trigger> {
        match self {
            TriggerSelection::EventChosen { app, event } => Some(Trigger::new(app, event)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorkflowBuilder {
    step: Step,
    trigger: TriggerSelection,
    action_app: Option<String>,
    actions: ActionMap,
}

impl WorkflowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Manual step toggle. Both directions are unconditional.
    pub fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    /// "Continue to Action Setup"
    pub fn continue_to_actions(&mut self) {
        self.step = Step::Action;
    }

    pub fn trigger(&self) -> &TriggerSelection {
        &self.trigger
    }

    /// Choose the trigger app. Any previously chosen event is dropped, even
    /// when the same app is chosen again.
    pub fn select_trigger_app(&mut self, app: impl Into<String>) {
        self.trigger = TriggerSelection::AppChosen(app.into());
    }

    /// Choose the trigger event for the currently chosen app.
    pub fn select_trigger_event(&mut self, event: impl Into<String>) -> Result<(), BuilderError> {
        let app = self.trigger.app().ok_or(BuilderError::NoTriggerApp)?.to_string();
        self.trigger = TriggerSelection::EventChosen {
            app,
            event: event.into(),
        };
        Ok(())
    }

    pub fn action_app(&self) -> Option<&str> {
        self.action_app.as_deref()
    }

    /// Switch the action panel. Selections for other apps are kept.
    pub fn select_action_app(&mut self, app: impl Into<String>) {
        self.action_app = Some(app.into());
    }

    pub fn actions(&self) -> &ActionMap {
        &self.actions
    }

    /// Actions chosen for `app`, in the order they were checked.
    pub fn selected_actions(&self, app: &str) -> &[String] {
        self.actions.get(app).unwrap_or(&[])
    }

    pub fn is_action_selected(&self, app: &str, action: &str) -> bool {
        self.selected_actions(app).iter().any(|a| a == action)
    }

    /// Set one checkbox for `app`. Checking an already checked action or
    /// unchecking an unchecked one changes nothing. An app with no actions
    /// left is dropped from the map.
    pub fn set_action(&mut self, app: &str, action: &str, checked: bool) {
        if checked {
            match self.actions.get_mut(app) {
                Some(list) => {
                    if !list.iter().any(|a| a == action) {
                        list.push(action.to_string());
                    }
                }
                None => self.actions.insert(app, vec![action.to_string()]),
            }
        } else if let Some(list) = self.actions.get_mut(app) {
            list.retain(|a| a != action);
            if list.is_empty() {
                self.actions.remove(app);
            }
        }
    }

    /// Flip one checkbox on the current action panel and return its new state.
    pub fn toggle_action(&mut self, action: &str) -> Result<bool, BuilderError> {
        let app = self.action_app.clone().ok_or(BuilderError::NoActionApp)?;
        let checked = !self.is_action_selected(&app, action);
        self.set_action(&app, action, checked);
        Ok(checked)
    }

    /// Whether the save control is offered
    pub fn can_save(&self) -> bool {
        self.step == Step::Action && self.action_app.is_some()
    }

    /// Snapshot the current selections as a record. An empty action map is
    /// allowed.
    pub fn build_record(&self) -> Result<WorkflowRecord, BuilderError> {
        let trigger = self
            .trigger
            .to_trigger()
            .ok_or(BuilderError::IncompleteTrigger)?;

        Ok(WorkflowRecord {
            trigger,
            actions: self.actions.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
