use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use mc::basic_models::Recipe;

/// Where a cooking session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Checking ingredients off before the first step.
    Gathering,
    /// Walking the instruction steps.
    Cooking,
    /// Every step is marked complete.
    Done,
}

/// A guided walk through one recipe's instructions.
///
/// Purely local state: nothing here talks to the server, and the elapsed
/// clock resets with the session.
#[derive(Debug, Clone)]
pub struct CookSession {
    steps: Vec<String>,
    ingredients: Vec<String>,
    checked: BTreeSet<String>,
    current: usize,
    completed: BTreeSet<usize>,
    phase: Phase,
    clock: Stopwatch,
}

impl CookSession {
    pub fn new(recipe: &Recipe) -> Self {
        Self {
            steps: recipe.instructions.clone(),
            ingredients: recipe.ingredients.iter().map(|i| i.name.clone()).collect(),
            checked: BTreeSet::new(),
            current: 0,
            completed: BTreeSet::new(),
            phase: Phase::Gathering,
            clock: Stopwatch::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn step_text(&self) -> Option<&str> {
        self.steps.get(self.current).map(String::as_str)
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    /// Check or uncheck one ingredient in the pre-cook gate. Names not
    /// on the recipe are ignored.
    pub fn toggle_ingredient(&mut self, name: &str) {
        if !self.ingredients.iter().any(|n| n == name) {
            return;
        }
        if !self.checked.remove(name) {
            self.checked.insert(name.to_string());
        }
    }

    /// The gate opens only once every listed ingredient is checked.
    pub fn ready_to_cook(&self) -> bool {
        self.checked.len() == self.ingredients.len()
    }

    /// Leave the gate and start the clock at step 0. Returns false while
    /// ingredients are still unchecked.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Gathering || !self.ready_to_cook() {
            return false;
        }
        self.current = 0;
        if self.steps.is_empty() {
            self.phase = Phase::Done;
        } else {
            self.phase = Phase::Cooking;
            self.clock.resume();
        }
        true
    }

    /// Mark the current step complete and advance. Completing the final
    /// outstanding step ends the session and stops the clock.
    pub fn complete_current(&mut self) {
        if self.phase != Phase::Cooking {
            return;
        }
        self.completed.insert(self.current);
        if self.completed.len() == self.steps.len() {
            self.phase = Phase::Done;
            self.clock.pause();
            return;
        }
        if self.current + 1 < self.steps.len() {
            self.current += 1;
        }
    }

    /// Step forward without completing, the Skip button.
    pub fn next(&mut self) {
        if self.phase == Phase::Cooking && self.current + 1 < self.steps.len() {
            self.current += 1;
        }
    }

    /// Step back. At step 0 this is a no-op.
    pub fn previous(&mut self) {
        if self.phase == Phase::Cooking && self.current > 0 {
            self.current -= 1;
        }
    }

    /// Jump straight to a step. Refused for completed steps and
    /// out-of-range indices.
    pub fn jump_to(&mut self, step: usize) -> bool {
        if self.phase != Phase::Cooking || step >= self.steps.len() || self.completed.contains(&step)
        {
            return false;
        }
        self.current = step;
        true
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Completed fraction in 0..=1 for the progress bar.
    pub fn progress(&self) -> f32 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.completed.len() as f32 / self.steps.len() as f32
    }

    /// Pause the elapsed clock without leaving the session.
    pub fn pause_clock(&mut self) {
        if self.phase == Phase::Cooking {
            self.clock.pause();
        }
    }

    pub fn resume_clock(&mut self) {
        if self.phase == Phase::Cooking {
            self.clock.resume();
        }
    }

    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }
}

/// Wall-clock stopwatch with pause and resume.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    accrued: Duration,
    running_since: Option<Instant>,
}

impl Stopwatch {
    pub fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    pub fn pause(&mut self) {
        if let Some(started) = self.running_since.take() {
            self.accrued += started.elapsed();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        self.accrued
            + self
                .running_since
                .map_or(Duration::ZERO, |started| started.elapsed())
    }
}

/// mm:ss, as the timer face shows it. Minutes are not capped at an hour.
pub fn format_clock(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
