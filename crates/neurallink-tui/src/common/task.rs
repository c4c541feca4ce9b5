use neurallink_core::core::TimerId;
use tokio_util::sync::CancellationToken;

pub type TaskId = TimerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    BootTimer,
    SubmitTimer,
}

impl TaskKind {
    pub fn label(self) -> &'static str {
        match self {
            TaskKind::BootTimer => "boot",
            TaskKind::SubmitTimer => "submit",
        }
    }
}

/// How a timer task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Elapsed,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    /// Takes the cancel token if `id` is the active task.
    pub fn take_cancel_for(&mut self, id: TaskId) -> Option<CancellationToken> {
        if self.active == Some(id) {
            self.active = None;
            self.cancel.take()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub boot_timer: TaskState,
    pub submit_timer: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::BootTimer => &self.boot_timer,
            TaskKind::SubmitTimer => &self.submit_timer,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::BootTimer => &mut self.boot_timer,
            TaskKind::SubmitTimer => &mut self.submit_timer,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.boot_timer.is_running() || self.submit_timer.is_running()
    }

    /// Drains every stored cancel token.
    pub fn drain_cancels(&mut self) -> Vec<CancellationToken> {
        [&mut self.boot_timer, &mut self.submit_timer]
            .into_iter()
            .filter_map(|state| {
                let token = state.cancel.take();
                state.active = None;
                token
            })
            .collect()
    }
}
