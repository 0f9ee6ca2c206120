extern crate log;
extern crate rand;

use crate::{
    api::Judge,
    form::{Form, InputError},
    handles::{parse_handles, Validation, Validator},
    problem::{Problem, ProblemEntry},
    render::Surface,
    select::{in_band, pick, unsolved, SolvedSet},
    settings::Settings,
    state::SessionState,
    storage::{self, Store},
};
use log::{debug, info, warn};
use rand::Rng;

/// Drives the verify/fetch/reset flow over a judge, a store and a surface.
pub struct Selector<J, S> {
    judge: J,
    store: S,
    validator: Validator,
    tag: String,
    problem_url: String,
    state: SessionState,
    store_error: Option<storage::Error>,
}

impl<J: Judge, S: Store> Selector<J, S> {
    pub fn new(judge: J, store: S, settings: &Settings) -> Self {
        Selector {
            judge,
            store,
            validator: Validator::new(),
            tag: settings.tag.clone(),
            problem_url: settings.problem_url.clone(),
            state: SessionState::default(),
            store_error: None,
        }
    }
    pub fn state(&self) -> &SessionState {
        &self.state
    }
    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.state.form
    }
    pub fn judge(&self) -> &J {
        &self.judge
    }
    pub fn store(&self) -> &S {
        &self.store
    }
    /// The last store failure since the previous call.
    pub fn take_store_error(&mut self) -> Option<storage::Error> {
        self.store_error.take()
    }

    fn save(&mut self) {
        debug!("Saving state");
        if let Err(e) = self.state.save(&mut self.store) {
            warn!("Failed to save state: {}", e);
            self.store_error = Some(e);
        }
    }
    fn set_inputs<U: Surface + ?Sized>(&mut self, surface: &mut U, enabled: bool) {
        self.state.inputs_enabled = enabled;
        surface.set_inputs_enabled(enabled);
    }

    /// Loads the saved record. A broken record is ignored and reported.
    pub fn restore<U: Surface + ?Sized>(&mut self, surface: &mut U) {
        match SessionState::load(&self.store) {
            Ok(Some(state)) => {
                debug!("Restored {} valid handles", state.valid_handles.len());
                self.state = state;
            }
            Ok(None) => debug!("No saved state"),
            Err(e) => {
                warn!("Ignoring saved state: {}", e);
                self.store_error = Some(e);
            }
        }
        let enabled = self.state.inputs_enabled;
        self.set_inputs(surface, enabled);
    }

    pub async fn verify<U: Surface + ?Sized>(
        &mut self,
        surface: &mut U,
    ) -> Result<Validation, InputError> {
        let handles = parse_handles(&self.state.form.handles);
        if handles.is_empty() {
            return Err(InputError::EmptyHandles);
        }
        info!("Verifying {} handles", handles.len());
        surface.clear_status();
        let validation = self.validator.validate(&self.judge, handles).await;
        self.state.valid_handles = validation.valid().map(String::from).collect();
        surface.show_status(&validation);

        let all_valid = validation.all_valid();
        self.state.handles_valid = Some(all_valid);
        if all_valid {
            self.state.last_valid_input = self.state.form.handles.clone();
        }
        self.set_inputs(surface, all_valid);
        self.save();
        Ok(validation)
    }

    async fn catalog(&self, min: i32, max: i32) -> Vec<Problem> {
        debug!("Fetching problems tagged {}", self.tag);
        match self.judge.problems(&self.tag).await {
            Ok(v) => in_band(v, min, max),
            Err(e) => {
                warn!("Error fetching problems: {}", e);
                Vec::new()
            }
        }
    }
    /// One handle at a time.
    async fn solved(&self) -> SolvedSet {
        let mut ret = SolvedSet::new();
        for handle in &self.state.valid_handles {
            debug!("Fetching submissions of {}", handle);
            match self.judge.submissions(handle).await {
                Ok(v) => ret.extend(&v),
                Err(e) => warn!("Error fetching solved problems for {}: {}", handle, e),
            }
        }
        ret
    }

    /// Bounds are checked before any request goes out.
    pub async fn fetch<U: Surface + ?Sized, R: Rng + ?Sized>(
        &mut self,
        surface: &mut U,
        rng: &mut R,
    ) -> Result<Vec<ProblemEntry>, InputError> {
        if !self.state.inputs_enabled {
            return Err(InputError::Locked);
        }
        let request = self.state.form.request()?;
        info!(
            "Picking {} problems rated {}..={}",
            request.count, request.min, request.max
        );
        let problems = self.catalog(request.min, request.max).await;
        let solved = self.solved().await;
        debug!(
            "{} problems in band, {} solved by the group",
            problems.len(),
            solved.len()
        );
        let entries: Vec<ProblemEntry> = pick(unsolved(problems, &solved), request.count, rng)
            .iter()
            .map(|p| p.entry(&self.problem_url))
            .collect();
        surface.render_problems(&entries);
        self.state.selection = entries.clone();
        self.save();
        Ok(entries)
    }

    pub fn reset<U: Surface + ?Sized>(&mut self, surface: &mut U) {
        info!("Resetting");
        self.state = SessionState::default();
        surface.clear();
        self.set_inputs(surface, false);
        if let Err(e) = SessionState::clear(&mut self.store) {
            warn!("Failed to remove saved state: {}", e);
            self.store_error = Some(e);
        }
    }
}
