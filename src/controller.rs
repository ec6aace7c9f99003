//! The draw controller: the interaction state machine behind the board.
//!
//! The controller is [`DrawState::Idle`] until a draw button is hit. A successful
//! draw replaces the shown assignment and (re)starts a single auto-clear timer,
//! moving to [`DrawState::Showing`]. When that timer fires the board is cleared
//! and the controller is idle again. Failed draws never touch what is shown.

use crate::constants::{AUTO_CLEAR_DURATION, BUTTON_REGIONS};
use crate::error::{DrawError, LoadError};
use crate::hit_test::HitTester;
use crate::roster::RosterStore;
use crate::sampler::Sampler;
use crate::timer::{Scheduler, TimerHandle};
use crate::types::{ButtonLabel, DrawState, GroupAssignment, Point};
use crate::viewport::ViewportMapper;
use log::{debug, info, warn};
use rand::Rng;
use std::path::Path;

/// Receives the visible effects of controller transitions.
///
/// The host implements this to repaint when the assignment changes and to show
/// draw failures to the user. Implementations must not block.
pub trait DrawFeedback {
    /// The displayed assignment was replaced or cleared.
    fn assignment_changed(&mut self, assignment: &GroupAssignment);

    /// A draw was attempted but could not be made.
    fn draw_failed(&mut self, error: &DrawError);
}

/// What the controller did with a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The press hit a draw button and was handled
    Consumed(ButtonLabel),
    /// The press hit no button; the host may handle it
    PassThrough,
}

/// Ties pointer input, sampling and the auto-clear timer together.
pub struct DrawController<R: Rng, S: Scheduler> {
    roster: RosterStore,
    sampler: Sampler<R>,
    mapper: ViewportMapper,
    scheduler: S,
    assignment: GroupAssignment,
    clear_timer: Option<TimerHandle>,
}

impl<R: Rng, S: Scheduler> DrawController<R, S> {
    /// Creates an idle controller.
    ///
    /// # Arguments
    ///
    /// * `roster` - The loaded roster
    /// * `rng` - Randomness source for the sampler
    /// * `scheduler` - Timer capability used for the auto-clear
    pub fn new(roster: RosterStore, rng: R, scheduler: S) -> Self {
        Self {
            roster,
            sampler: Sampler::new(rng),
            mapper: ViewportMapper::default(),
            scheduler,
            assignment: GroupAssignment::empty(),
            clear_timer: None,
        }
    }

    /// Handles a pointer press at `point` in viewport coordinates.
    ///
    /// Buttons are tested in order "two", then "three". A hit attempts a draw of
    /// the matching group size; anything else is passed through untouched.
    pub fn pointer_down(
        &mut self,
        point: Point,
        feedback: &mut impl DrawFeedback,
    ) -> PointerOutcome {
        let hit = HitTester::new(&self.mapper).resolve(point, &BUTTON_REGIONS);
        match hit {
            Some(button) => {
                self.attempt_draw(button.group_size(), feedback);
                PointerOutcome::Consumed(button)
            }
            None => {
                debug!("Pointer press at ({}, {}) hit no button", point.x, point.y);
                PointerOutcome::PassThrough
            }
        }
    }

    /// Draws four groups of `group_size` and shows them.
    ///
    /// On success the previous assignment is replaced and the auto-clear timer is
    /// restarted from now. On an insufficient roster nothing changes and the error
    /// is reported through `feedback`.
    ///
    /// # Panics
    ///
    /// Panics if `group_size` is not a supported size. Button sizes are fixed, so
    /// this only happens through a configuration bug.
    pub fn attempt_draw(&mut self, group_size: usize, feedback: &mut impl DrawFeedback) {
        match self.sampler.select_groups(&self.roster, group_size) {
            Ok(assignment) => {
                info!(
                    "Drew 4 groups of {} from {} participants",
                    group_size,
                    self.roster.count()
                );
                self.assignment = assignment;
                self.restart_clear_timer();
                feedback.assignment_changed(&self.assignment);
            }
            Err(err @ DrawError::InsufficientRoster { .. }) => {
                warn!("Draw failed: {}", err);
                feedback.draw_failed(&err);
            }
            Err(err @ DrawError::InvalidGroupSize(_)) => {
                panic!("draw requested with unsupported size: {err}");
            }
        }
    }

    /// Handles a fired timer.
    ///
    /// Only the currently pending auto-clear has any effect; handles of timers
    /// that were superseded by a later draw are ignored.
    pub fn timer_fired(&mut self, handle: TimerHandle, feedback: &mut impl DrawFeedback) {
        if self.clear_timer != Some(handle) {
            debug!("Ignoring stale timer {:?}", handle);
            return;
        }
        self.clear_timer = None;
        self.assignment = GroupAssignment::empty();
        info!("Auto-clear elapsed, board reset");
        feedback.assignment_changed(&self.assignment);
    }

    /// Updates the viewport size used for hit testing and rendering.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.mapper.update_viewport(width, height);
    }

    /// Replaces the roster from a CSV file.
    ///
    /// On failure the current roster is kept. The displayed assignment is never
    /// touched by a reload.
    pub fn reload_roster(&mut self, path: &Path) -> Result<usize, LoadError> {
        self.roster.load_from_path(path)
    }

    /// Current state of the board.
    pub fn state(&self) -> DrawState {
        if self.clear_timer.is_some() {
            DrawState::Showing
        } else {
            DrawState::Idle
        }
    }

    /// The assignment currently shown.
    pub fn assignment(&self) -> &GroupAssignment {
        &self.assignment
    }

    /// The viewport mapper used for hit testing; renderers use it too.
    pub fn mapper(&self) -> &ViewportMapper {
        &self.mapper
    }

    /// The loaded roster.
    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    /// Mutable access to the roster, e.g. for tests shrinking it between draws.
    pub fn roster_mut(&mut self) -> &mut RosterStore {
        &mut self.roster
    }

    /// The timer scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler, used by the host to advance its clock.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Handle of the pending auto-clear, if one is scheduled.
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.clear_timer
    }

    fn restart_clear_timer(&mut self) {
        if let Some(previous) = self.clear_timer.take() {
            self.scheduler.cancel(previous);
        }
        self.clear_timer = Some(self.scheduler.schedule_once(AUTO_CLEAR_DURATION));
    }
}
